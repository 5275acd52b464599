use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::theme::Palette;
use crate::presentation::view_models::{FieldViewModel, FormScreenViewModel};

pub(crate) struct FormComponent;

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, screen: &FormScreenViewModel, palette: &Palette) {
        let mut lines: Vec<Line> = Vec::with_capacity(screen.fields.len() * 3 + 1);
        for field in &screen.fields {
            lines.push(label_line(field, palette));
            lines.push(value_line(field, palette));
            lines.push(Line::raw(""));
        }

        let button_style = if screen.submitting {
            Style::default().fg(palette.muted)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", screen.submit_label),
            button_style,
        )));

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
        f.render_widget(form, area);
    }
}

fn label_line<'a>(field: &'a FieldViewModel, palette: &Palette) -> Line<'a> {
    let mut spans = vec![Span::styled(
        field.label,
        Style::default().fg(palette.muted),
    )];
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn value_line<'a>(field: &'a FieldViewModel, palette: &Palette) -> Line<'a> {
    let marker = if field.focused { "▸ " } else { "  " };
    let value = if field.value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(palette.muted))
    } else if field.is_choice {
        Span::styled(
            format!("◂ {} ▸", field.value),
            Style::default().fg(palette.foreground),
        )
    } else {
        Span::styled(field.value.as_str(), Style::default().fg(palette.foreground))
    };

    let mut line = Line::from(vec![Span::raw(marker), value]);
    if field.focused {
        line = line.style(Style::default().add_modifier(Modifier::BOLD));
    }
    line
}
