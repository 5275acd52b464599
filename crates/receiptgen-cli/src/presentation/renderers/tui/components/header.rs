use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::theme::Palette;
use crate::presentation::view_models::FormScreenViewModel;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, screen: &FormScreenViewModel, palette: &Palette) {
        let mut spans = vec![Span::styled(
            screen.title,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(quota) = &screen.quota_text {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("Sisa kuota: {}", quota),
                Style::default().fg(Color::Cyan),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
