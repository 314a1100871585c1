//! Canned plots: colors, styles, plot requests and the generator table.

use std::f64::consts::PI;

use egui::Color32;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::series::{parse_and_validate, NumericSeries};
use crate::error::InputError;

/// The fixed set of colors a plot can be drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotColor {
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    Yellow,
    Black,
    Orange,
}

impl PlotColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PlotColor::Red => [255, 0, 0],
            PlotColor::Green => [0, 128, 0],
            PlotColor::Blue => [0, 0, 255],
            PlotColor::Magenta => [191, 0, 191],
            PlotColor::Cyan => [0, 191, 191],
            PlotColor::Yellow => [191, 191, 0],
            PlotColor::Black => [0, 0, 0],
            PlotColor::Orange => [255, 165, 0],
        }
    }

    pub fn color32(self) -> Color32 {
        let [r, g, b] = self.rgb();
        Color32::from_rgb(r, g, b)
    }

    /// `#rrggbb`, for SVG attributes.
    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Connected line or unconnected markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotStyle {
    Line,
    Scatter,
}

/// A ready-to-draw plot: validated data plus presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRequest {
    pub series: NumericSeries,
    pub title: String,
    pub color: PlotColor,
    pub style: PlotStyle,
}

impl PlotRequest {
    pub fn new(series: NumericSeries, title: impl Into<String>, color: PlotColor, style: PlotStyle) -> Self {
        Self {
            series,
            title: title.into(),
            color,
            style,
        }
    }
}

pub const CUSTOM_PLOT_TITLE: &str = "Ваш график";

/// Validate the dialog fields and wrap them as the user's own plot.
pub fn custom_plot_request(x_text: &str, y_text: &str) -> Result<PlotRequest, InputError> {
    let series = parse_and_validate(x_text, y_text)?;
    Ok(PlotRequest::new(series, CUSTOM_PLOT_TITLE, PlotColor::Blue, PlotStyle::Line))
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Number of samples drawn by every formula plot.
pub const SAMPLES: usize = 100;

/// Identifies one of the menu's canned plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    Linear,
    Sine,
    Cosine,
    Quadratic,
    Exponential,
    Logarithmic,
    Scatter,
    Random,
}

/// Builds the data for a canned plot. Stochastic kinds draw from `rng`.
pub type Generator = fn(&mut dyn RngCore) -> PlotRequest;

impl PlotKind {
    pub const ALL: [PlotKind; 8] = [
        PlotKind::Linear,
        PlotKind::Sine,
        PlotKind::Cosine,
        PlotKind::Quadratic,
        PlotKind::Exponential,
        PlotKind::Logarithmic,
        PlotKind::Scatter,
        PlotKind::Random,
    ];

    /// Menu label, which is also the plot title.
    pub fn title(self) -> &'static str {
        match self {
            PlotKind::Linear => "Линейный график",
            PlotKind::Sine => "График синуса",
            PlotKind::Cosine => "График косинуса",
            PlotKind::Quadratic => "Квадратичный график",
            PlotKind::Exponential => "Экспоненциальный график",
            PlotKind::Logarithmic => "Логарифмический график",
            PlotKind::Scatter => "Точечный график",
            PlotKind::Random => "Случайный график",
        }
    }

    /// Whether the kind lives in the "ready-made" menu (random sits under extras).
    pub fn is_ready_made(self) -> bool {
        !matches!(self, PlotKind::Random)
    }

    pub fn generator(self) -> Generator {
        match self {
            PlotKind::Linear => linear,
            PlotKind::Sine => sine,
            PlotKind::Cosine => cosine,
            PlotKind::Quadratic => quadratic,
            PlotKind::Exponential => exponential,
            PlotKind::Logarithmic => logarithmic,
            PlotKind::Scatter => scatter,
            PlotKind::Random => random,
        }
    }

    pub fn generate(self, rng: &mut dyn RngCore) -> PlotRequest {
        (self.generator())(rng)
    }
}

impl std::str::FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(PlotKind::Linear),
            "sine" | "sin" => Ok(PlotKind::Sine),
            "cosine" | "cos" => Ok(PlotKind::Cosine),
            "quadratic" => Ok(PlotKind::Quadratic),
            "exponential" | "exp" => Ok(PlotKind::Exponential),
            "logarithmic" | "log" => Ok(PlotKind::Logarithmic),
            "scatter" => Ok(PlotKind::Scatter),
            "random" => Ok(PlotKind::Random),
            other => Err(format!("unknown plot kind '{other}'")),
        }
    }
}

// Generators always build x and y with the same length.
fn paired(kind: PlotKind, x: Vec<f64>, y: Vec<f64>, color: PlotColor, style: PlotStyle) -> PlotRequest {
    PlotRequest::new(NumericSeries::from_equal(x, y), kind.title(), color, style)
}

fn formula(kind: PlotKind, start: f64, stop: f64, f: fn(f64) -> f64, color: PlotColor) -> PlotRequest {
    let x = linspace(start, stop, SAMPLES);
    let y = x.iter().map(|&v| f(v)).collect();
    paired(kind, x, y, color, PlotStyle::Line)
}

fn uniform(rng: &mut dyn RngCore, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

fn linear(_rng: &mut dyn RngCore) -> PlotRequest {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    paired(PlotKind::Linear, x.clone(), x, PlotColor::Red, PlotStyle::Line)
}

fn sine(_rng: &mut dyn RngCore) -> PlotRequest {
    formula(PlotKind::Sine, -2.0 * PI, 2.0 * PI, f64::sin, PlotColor::Green)
}

fn cosine(_rng: &mut dyn RngCore) -> PlotRequest {
    formula(PlotKind::Cosine, -2.0 * PI, 2.0 * PI, f64::cos, PlotColor::Blue)
}

fn quadratic(_rng: &mut dyn RngCore) -> PlotRequest {
    formula(PlotKind::Quadratic, -10.0, 10.0, |x| x * x, PlotColor::Magenta)
}

fn exponential(_rng: &mut dyn RngCore) -> PlotRequest {
    formula(PlotKind::Exponential, 0.0, 10.0, f64::exp, PlotColor::Cyan)
}

fn logarithmic(_rng: &mut dyn RngCore) -> PlotRequest {
    formula(PlotKind::Logarithmic, 0.1, 10.0, f64::ln, PlotColor::Yellow)
}

fn scatter(rng: &mut dyn RngCore) -> PlotRequest {
    let x = uniform(rng, SAMPLES);
    let y = uniform(rng, SAMPLES);
    paired(PlotKind::Scatter, x, y, PlotColor::Black, PlotStyle::Scatter)
}

fn random(rng: &mut dyn RngCore) -> PlotRequest {
    let x = linspace(0.0, 10.0, SAMPLES);
    let y = uniform(rng, SAMPLES);
    paired(PlotKind::Random, x, y, PlotColor::Orange, PlotStyle::Line)
}

/// The data written by "export to CSV" when no displayed plot is used:
/// `linspace(0, 10, 100)` against fresh uniform randoms.
pub fn generated_export_series(rng: &mut dyn RngCore) -> NumericSeries {
    random(rng).series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn hex_is_lowercase_rgb() {
        assert_eq!(PlotColor::Orange.hex(), "#ffa500");
    }
}
