//! PlotDesk crate root: re-exports and module wiring.
//!
//! A small egui/eframe desktop app that shows canned formula plots or a plot
//! of user-entered X/Y values, and saves figures (PNG/JPEG), exports CSV and
//! displays previously saved images.
//!
//! - `data`: input pipeline, canned plot generators, display state, CSV export
//! - `figure`: offscreen figure rendering and image I/O
//! - `panels`: dialogs and the central view
//! - `app`: the eframe application and its entry point
//! - `config`: user settings

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_plotdesk, MenuRequest, PlotDeskApp};
pub use config::PlotDeskConfig;
pub use data::display::{DisplayAction, DisplayState};
pub use data::export::CsvExportSource;
pub use data::plot_kind::{custom_plot_request, PlotColor, PlotKind, PlotRequest, PlotStyle};
pub use data::series::{parse_and_validate, NumericSeries, RawInput};
pub use error::{Axis, ErrorKind, InputError, PlotError};
pub use figure::{load_image, Figure, LoadedImage};
