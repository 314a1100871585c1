//! File menu actions: save graph, export CSV, load image.
//!
//! Each action has a `prompt_and_*` form that asks for a path with `rfd`
//! and a `*_to` / `*_from` form that takes the path directly. The dialog
//! returning `None` (user cancelled) is a no-op.

use std::path::{Path, PathBuf};

use super::PlotDeskApp;
use crate::data::display::DisplayAction;
use crate::data::export;
use crate::error::{PlotError, Result};
use crate::figure::{self, Figure};
use crate::panels::notification_ui::Notification;

impl PlotDeskApp {
    /// Render the displayed plot to `path` (PNG or JPEG).
    pub fn save_graph_to(&self, path: &Path) -> Result<PathBuf> {
        let req = self
            .display
            .plot()
            .ok_or_else(|| PlotError::render("no plot is displayed"))?;
        let [w, h] = self.config.figure_size;
        Figure::new(req, w, h).with_grid(self.config.show_grid).save(path)
    }

    /// Write the CSV export to `path`, taking rows from the configured source.
    pub fn export_csv_to(&mut self, path: &Path) -> Result<()> {
        let series =
            export::series_for_export(self.config.csv_export_source, &self.display, &mut self.rng);
        export::write_csv_path(path, &series)?;
        log::info!("Exported {} rows to {:?}", series.len(), path);
        Ok(())
    }

    /// Decode the image at `path` and show it.
    pub fn load_image_from(&mut self, path: &Path) -> Result<()> {
        let img = figure::load_image(path)?;
        self.apply(DisplayAction::ShowImage(img));
        Ok(())
    }

    pub(super) fn prompt_and_save_graph(&mut self) {
        let default_name = format!("plot_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Сохранить график")
            .set_file_name(&default_name)
            .add_filter("PNG files", &["png"])
            .add_filter("JPEG files", &["jpg", "jpeg"])
            .save_file()
        {
            let result = self.save_graph_to(&path).map(|_| ());
            self.report(result, "График успешно сохранен!");
        }
    }

    pub(super) fn prompt_and_export_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Экспортировать данные")
            .set_file_name("data.csv")
            .add_filter("CSV files", &["csv"])
            .save_file()
        {
            let result = self.export_csv_to(&path);
            self.report(result, "Данные успешно экспортированы в CSV!");
        }
    }

    pub(super) fn prompt_and_load_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Загрузить график")
            .add_filter("Image files", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            let result = self.load_image_from(&path);
            self.report(result, "График успешно загружен!");
        }
    }

    fn report(&mut self, result: Result<()>, success: &str) {
        let n = match result {
            Ok(()) => Notification::success(success),
            Err(e) => {
                log::warn!("File operation failed: {e}");
                Notification::error(e.kind())
            }
        };
        self.notification.notify(n);
    }
}
