use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::theme::Palette;
use crate::presentation::view_models::FormScreenViewModel;

const KEY_HINTS: &str = "Tab/↑↓ pindah  ←→ template  Enter kirim  Esc keluar";

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, screen: &FormScreenViewModel, palette: &Palette) {
        let text = Text::from(vec![
            Line::from(KEY_HINTS),
            Line::from(screen.footer).alignment(Alignment::Center),
        ]);

        let footer = Paragraph::new(text)
            .style(Style::default().fg(palette.muted))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.muted)),
            );
        f.render_widget(footer, area);
    }
}
