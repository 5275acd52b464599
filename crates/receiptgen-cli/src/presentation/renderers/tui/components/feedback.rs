use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::Component;
use crate::presentation::presenters::PENDING_TEXT;
use crate::presentation::renderers::tui::theme::Palette;
use crate::presentation::view_models::FormScreenViewModel;

pub(crate) struct FeedbackComponent;

impl Component for FeedbackComponent {
    fn render(&self, f: &mut Frame, area: Rect, screen: &FormScreenViewModel, _palette: &Palette) {
        let line = if screen.submitting {
            Line::styled(PENDING_TEXT, Style::default().fg(Color::Yellow))
        } else if let Some(feedback) = &screen.feedback {
            // Tone comes from the outcome kind, never from the text
            let color = if feedback.is_positive {
                Color::Green
            } else {
                Color::Red
            };
            Line::styled(feedback.text.as_str(), Style::default().fg(color))
        } else {
            Line::raw("")
        };

        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
    }
}
