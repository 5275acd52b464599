use ratatui::{Frame, layout::Rect};

use super::theme::Palette;
use crate::presentation::view_models::FormScreenViewModel;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, screen: &FormScreenViewModel, palette: &Palette);
}

pub(crate) mod feedback;
pub(crate) mod footer;
pub(crate) mod form;
pub(crate) mod header;

pub(crate) use feedback::FeedbackComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use form::FormComponent;
pub(crate) use header::HeaderComponent;
