//! Per-frame update for [`PlotDeskApp`].
//!
//! Order each frame: menu bar, pending menu request, modal dialogs, then the
//! central view. Everything runs on the UI thread; file pickers block the
//! frame until the user answers.

use eframe::egui;

use super::PlotDeskApp;
use crate::data::display::{DisplayAction, DisplayState};
use crate::panels::data_input_ui::DialogOutcome;
use crate::panels::plot_ui::render_display;

impl PlotDeskApp {
    /// Upload the loaded image once so the central view can draw it.
    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        if let DisplayState::Image(img) = &self.display {
            let max_side = ctx.input(|i| i.max_texture_side) as u32;
            let ([w, h], rgba) = img.fit_within(max_side);
            let color_image = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
            self.texture = Some(ctx.load_texture(
                "plotdesk_loaded_image",
                color_image,
                egui::TextureOptions::LINEAR,
            ));
        }
    }
}

impl eframe::App for PlotDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(req) = self.render_menu_bar(ctx) {
            self.dispatch(req);
        }

        match self.input_dialog.show(ctx) {
            DialogOutcome::Submitted(raw) => self.apply(DisplayAction::Custom(raw)),
            DialogOutcome::Cancelled => log::debug!("Custom plot dialog cancelled"),
            DialogOutcome::Pending => {}
        }
        self.notification.show(ctx);

        self.ensure_texture(ctx);
        let reset_bounds = std::mem::take(&mut self.fresh_plot);
        egui::CentralPanel::default().show(ctx, |ui| {
            render_display(
                ui,
                &self.display,
                self.texture.as_ref(),
                &self.config.welcome_text,
                self.config.show_grid,
                reset_bounds,
            );
        });
    }
}
