//! Central view: welcome text, an interactive plot, or a loaded image.

use egui_plot::{Line, Plot, Points};

use crate::data::display::DisplayState;
use crate::data::plot_kind::{PlotRequest, PlotStyle};

/// Draw `display` into `ui`.
///
/// `texture` must hold the uploaded pixels when `display` is an image.
/// `reset_bounds` refits the plot axes, used on the first frame of a new plot.
pub fn render_display(
    ui: &mut egui::Ui,
    display: &DisplayState,
    texture: Option<&egui::TextureHandle>,
    welcome_text: &str,
    show_grid: bool,
    reset_bounds: bool,
) {
    match display {
        DisplayState::Welcome => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(welcome_text).size(18.0));
            });
        }
        DisplayState::Plot(req) => render_plot(ui, req, show_grid, reset_bounds),
        DisplayState::Image(img) => match texture {
            Some(tex) => {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(egui::Image::from_texture(tex));
                });
            }
            None => {
                ui.label(format!("{}", img.path.display()));
            }
        },
    }
}

fn render_plot(ui: &mut egui::Ui, req: &PlotRequest, show_grid: bool, reset_bounds: bool) {
    ui.vertical_centered(|ui| {
        ui.heading(&req.title);
    });
    let mut plot = Plot::new("plotdesk_plot")
        .x_axis_label("X")
        .y_axis_label("Y")
        .show_grid(show_grid);
    if reset_bounds {
        plot = plot.reset();
    }
    let pts = req.series.finite_points();
    let color = req.color.color32();
    plot.show(ui, |plot_ui| match req.style {
        PlotStyle::Line => {
            plot_ui.line(Line::new(&req.title, pts).color(color).width(2.0));
        }
        PlotStyle::Scatter => {
            plot_ui.points(Points::new(&req.title, pts).color(color).radius(3.5));
        }
    });
}
