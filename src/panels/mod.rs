pub mod data_input_ui;
pub mod notification_ui;
pub mod panel_trait;
pub mod plot_ui;

pub use data_input_ui::{DataInputPanel, DialogOutcome};
pub use notification_ui::{Notification, NotificationPanel, Severity};
pub use panel_trait::{Panel, PanelState};
