use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use super::app::AppState;
use super::components::{
    Component, FeedbackComponent, FooterComponent, FormComponent, HeaderComponent,
};
use super::theme::Palette;

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let screen = state.view_model();
    let palette = Palette::from_theme(screen.theme_background.as_deref());

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(f.area());

    HeaderComponent.render(f, chunks[0], &screen, &palette);
    FormComponent.render(f, chunks[1], &screen, &palette);
    FeedbackComponent.render(f, chunks[2], &screen, &palette);
    FooterComponent.render(f, chunks[3], &screen, &palette);
}
