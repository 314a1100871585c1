//! What the central area shows, and how user actions produce the next view.

use rand::RngCore;

use super::plot_kind::{custom_plot_request, PlotKind, PlotRequest};
use super::series::RawInput;
use crate::error::InputError;
use crate::figure::LoadedImage;

/// The content of the central panel. Replaced as a whole on every action.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayState {
    /// Greeting shown at start-up and after "reset view".
    #[default]
    Welcome,
    Plot(PlotRequest),
    Image(LoadedImage),
}

impl DisplayState {
    pub fn plot(&self) -> Option<&PlotRequest> {
        match self {
            DisplayState::Plot(req) => Some(req),
            _ => None,
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, DisplayState::Welcome)
    }
}

/// A user action that changes the view.
#[derive(Clone, Debug)]
pub enum DisplayAction {
    Canned(PlotKind),
    Custom(RawInput),
    ShowImage(LoadedImage),
    Reset,
}

/// Compute the view an action leads to.
///
/// Only custom input can fail; on error the caller keeps its current state.
pub fn resolve(action: DisplayAction, rng: &mut dyn RngCore) -> Result<DisplayState, InputError> {
    Ok(match action {
        DisplayAction::Canned(kind) => DisplayState::Plot(kind.generate(rng)),
        DisplayAction::Custom(raw) => {
            DisplayState::Plot(custom_plot_request(&raw.x_text, &raw.y_text)?)
        }
        DisplayAction::ShowImage(img) => DisplayState::Image(img),
        DisplayAction::Reset => DisplayState::Welcome,
    })
}
