//! Main application module for PlotDesk.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`menu`]         | Top menu bar, returns the chosen [`MenuRequest`] |
//! | [`file_actions`] | Save graph / export CSV / load image, with and without file pickers |
//! | [`update`]       | The [`eframe::App`] impl: menu, dialogs and central view per frame |
//! | [`run`]          | Top-level [`run_plotdesk()`] entry point and icon loading |

mod file_actions;
mod menu;
mod run;
mod update;

pub use run::run_plotdesk;

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::PlotDeskConfig;
use crate::data::display::{resolve, DisplayAction, DisplayState};
use crate::data::plot_kind::PlotKind;
use crate::panels::data_input_ui::DataInputPanel;
use crate::panels::notification_ui::{Notification, NotificationPanel};
use crate::panels::panel_trait::Panel;

/// One menu item activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuRequest {
    SaveGraph,
    ExportCsv,
    LoadImage,
    Canned(PlotKind),
    CustomPlot,
    ResetView,
}

/// Top-level window controller. Owns the single [`DisplayState`].
pub struct PlotDeskApp {
    pub config: PlotDeskConfig,
    /// What the central area currently shows.
    pub display: DisplayState,
    pub input_dialog: DataInputPanel,
    pub notification: NotificationPanel,
    /// Uploaded pixels for `DisplayState::Image`; dropped whenever the display changes.
    pub(crate) texture: Option<egui::TextureHandle>,
    /// Refit plot bounds on the next frame.
    pub(crate) fresh_plot: bool,
    pub(crate) rng: StdRng,
}

impl PlotDeskApp {
    pub fn new(config: PlotDeskConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Construct with a given RNG, so random plots are reproducible.
    pub fn with_rng(config: PlotDeskConfig, rng: StdRng) -> Self {
        Self {
            config,
            display: DisplayState::Welcome,
            input_dialog: DataInputPanel::default(),
            notification: NotificationPanel::default(),
            texture: None,
            fresh_plot: false,
            rng,
        }
    }

    /// Replace the whole display.
    pub fn set_display(&mut self, display: DisplayState) {
        self.fresh_plot = matches!(display, DisplayState::Plot(_));
        self.texture = None;
        self.display = display;
    }

    /// Run a view-changing action. On failure the display is left as it was
    /// and a warning is shown.
    pub fn apply(&mut self, action: DisplayAction) {
        match resolve(action, &mut self.rng) {
            Ok(next) => {
                if let Some(req) = next.plot() {
                    log::debug!("Plotting '{}' ({} points)", req.title, req.series.len());
                }
                self.set_display(next);
            }
            Err(e) => {
                log::warn!("Rejected plot input: {e}");
                self.notification.notify(Notification::error(e.kind()));
            }
        }
    }

    /// Handle a menu activation.
    pub fn dispatch(&mut self, req: MenuRequest) {
        match req {
            MenuRequest::Canned(kind) => self.apply(DisplayAction::Canned(kind)),
            MenuRequest::CustomPlot => self.input_dialog.open(),
            MenuRequest::ResetView => self.apply(DisplayAction::Reset),
            MenuRequest::SaveGraph => self.prompt_and_save_graph(),
            MenuRequest::ExportCsv => self.prompt_and_export_csv(),
            MenuRequest::LoadImage => self.prompt_and_load_image(),
        }
    }
}
