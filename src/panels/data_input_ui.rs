//! Modal dialog asking for comma-separated X and Y values.

use super::panel_trait::{Panel, PanelState};
use crate::data::series::RawInput;

/// Result of showing the dialog for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open, or not shown at all.
    Pending,
    Submitted(RawInput),
    Cancelled,
}

#[derive(Default)]
pub struct DataInputPanel {
    pub state: PanelState,
    pub x_text: String,
    pub y_text: String,
}

impl Panel for DataInputPanel {
    fn name(&self) -> &'static str {
        "Ввод данных для графика"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    // Every invocation starts from empty fields.
    fn on_open(&mut self) {
        self.x_text.clear();
        self.y_text.clear();
    }
}

impl DataInputPanel {
    /// Draw the dialog if open. Closes itself on submit or cancel.
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome {
        if !self.is_open() {
            return DialogOutcome::Pending;
        }
        let title = self.name();
        let x_text = &mut self.x_text;
        let y_text = &mut self.y_text;
        let modal = egui::Modal::new(egui::Id::new("data_input_dialog")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading(title);
            ui.add_space(8.0);
            ui.label("Введите данные для оси X (через запятую):");
            ui.add(egui::TextEdit::singleline(&mut *x_text).hint_text("1, 2, 3"));
            ui.label("Введите данные для оси Y (через запятую):");
            let y_resp = ui.add(egui::TextEdit::singleline(&mut *y_text).hint_text("4, 5, 6"));
            let enter = y_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(8.0);
            let mut outcome = DialogOutcome::Pending;
            ui.horizontal(|ui| {
                if ui.button("Построить график").clicked() || enter {
                    outcome = DialogOutcome::Submitted(RawInput::new(x_text.clone(), y_text.clone()));
                }
                if ui.button("Отмена").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
            outcome
        });

        let outcome = match modal.inner {
            DialogOutcome::Pending if modal.should_close() => DialogOutcome::Cancelled,
            other => other,
        };
        if outcome != DialogOutcome::Pending {
            self.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_clears_fields() {
        let mut p = DataInputPanel::default();
        p.open();
        p.x_text.push_str("1,2");
        p.close();
        p.open();
        assert!(p.is_open());
        assert!(p.x_text.is_empty());
    }
}
