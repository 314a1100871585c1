//! Modal message box for success and error notices.

use super::panel_trait::{Panel, PanelState};
use crate::error::ErrorKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: "Успех".to_string(),
            message: message.into(),
        }
    }

    pub fn error(kind: ErrorKind) -> Self {
        Self {
            severity: Severity::Warning,
            title: "Ошибка".to_string(),
            message: kind.user_message().to_string(),
        }
    }
}

#[derive(Default)]
pub struct NotificationPanel {
    pub state: PanelState,
    pub current: Option<Notification>,
}

impl Panel for NotificationPanel {
    fn name(&self) -> &'static str {
        "Notification"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }
}

impl NotificationPanel {
    /// Replace any pending notice and open.
    pub fn notify(&mut self, n: Notification) {
        self.current = Some(n);
        self.open();
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.is_open() {
            return;
        }
        let Some(n) = self.current.clone() else {
            self.close();
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("notification_modal")).show(ctx, |ui| {
            ui.set_min_width(300.0);
            let icon = match n.severity {
                Severity::Info => egui_phosphor::regular::INFO,
                Severity::Warning => egui_phosphor::regular::WARNING,
            };
            ui.heading(format!("{icon} {}", n.title));
            ui.add_space(6.0);
            ui.label(&n.message);
            ui.add_space(10.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            self.current = None;
            self.close();
        }
    }
}
