//! Top menu bar.

use eframe::egui;
use egui_phosphor::regular as icons;

use super::{MenuRequest, PlotDeskApp};
use crate::data::plot_kind::PlotKind;

impl PlotDeskApp {
    /// Render the menu bar and return the item clicked this frame, if any.
    pub(super) fn render_menu_bar(&self, ctx: &egui::Context) -> Option<MenuRequest> {
        let mut request = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Файл", |ui| {
                    if ui.button(format!("{} Сохранить график", icons::FLOPPY_DISK)).clicked() {
                        request = Some(MenuRequest::SaveGraph);
                        ui.close();
                    }
                    if ui.button(format!("{} Экспортировать данные в CSV", icons::FILE_CSV)).clicked() {
                        request = Some(MenuRequest::ExportCsv);
                        ui.close();
                    }
                    if ui.button(format!("{} Загрузить график", icons::IMAGE)).clicked() {
                        request = Some(MenuRequest::LoadImage);
                        ui.close();
                    }
                });
                ui.menu_button("Готовые графики", |ui| {
                    for kind in PlotKind::ALL.into_iter().filter(|k| k.is_ready_made()) {
                        if ui.button(kind.title()).clicked() {
                            request = Some(MenuRequest::Canned(kind));
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Построить график", |ui| {
                    if ui.button(format!("{} По своим данным", icons::PENCIL_SIMPLE)).clicked() {
                        request = Some(MenuRequest::CustomPlot);
                        ui.close();
                    }
                });
                ui.menu_button("Дополнительно", |ui| {
                    if ui.button(format!("{} {}", icons::SHUFFLE, PlotKind::Random.title())).clicked() {
                        request = Some(MenuRequest::Canned(PlotKind::Random));
                        ui.close();
                    }
                    if ui.button(format!("{} Сбросить вид", icons::ARROW_COUNTER_CLOCKWISE)).clicked() {
                        request = Some(MenuRequest::ResetView);
                        ui.close();
                    }
                });
            });
        });
        request
    }
}
