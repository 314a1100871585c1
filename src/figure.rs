//! Offscreen figure rendering and raster image I/O.
//!
//! A [`Figure`] is drawn as an SVG document (frame, ticks, labels, title and
//! the data as a polyline or markers), rasterized with `resvg` and encoded
//! with `image`. This is what "save graph" writes; the on-screen view is
//! drawn separately by `egui_plot`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::data::plot_kind::{PlotRequest, PlotStyle};
use crate::error::{PlotError, Result};

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 52.0;
const TICKS: usize = 5;

/// A plot request bound to an output size in pixels.
#[derive(Clone, Debug)]
pub struct Figure<'a> {
    pub request: &'a PlotRequest,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
}

/// Linear data-to-pixel mapping for one axis.
#[derive(Clone, Copy, Debug)]
struct AxisMap {
    lo: f64,
    hi: f64,
    px_lo: f64,
    px_hi: f64,
}

impl AxisMap {
    fn new((lo, hi): (f64, f64), px_lo: f64, px_hi: f64) -> Self {
        let (lo, hi) = padded(lo, hi);
        Self { lo, hi, px_lo, px_hi }
    }

    // Halved operands keep the difference finite across the whole f64 range.
    fn map(&self, v: f64) -> f64 {
        let t = (v * 0.5 - self.lo * 0.5) / half_span(self.lo, self.hi);
        self.px_lo + t * (self.px_hi - self.px_lo)
    }
}

fn half_span(lo: f64, hi: f64) -> f64 {
    hi * 0.5 - lo * 0.5
}

// 5% headroom on each side; a flat range is widened to one unit.
// Padding that would overflow is dropped.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let half = half_span(lo, hi);
    if half.abs() < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let (plo, phi) = (lo - half * 0.1, hi + half * 0.1);
    if plo.is_finite() && phi.is_finite() {
        (plo, phi)
    } else {
        (lo, hi)
    }
}

/// Round tick positions covering `[lo, hi]`.
fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let raw = half_span(lo, hi) / target.max(1) as f64 * 2.0;
    if !raw.is_finite() || raw <= 0.0 {
        return vec![lo];
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = mag
        * if norm < 1.5 {
            1.0
        } else if norm < 3.0 {
            2.0
        } else if norm < 7.0 {
            5.0
        } else {
            10.0
        };
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if !(1e-3..1e5).contains(&a) {
        return format!("{v:.1e}");
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl<'a> Figure<'a> {
    pub fn new(request: &'a PlotRequest, width: u32, height: u32) -> Self {
        Self {
            request,
            width,
            height,
            grid: true,
        }
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// The figure as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let w = self.width as f64;
        let h = self.height as f64;
        let (x0, x1) = (MARGIN_LEFT, (w - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0));
        let (y0, y1) = ((h - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0), MARGIN_TOP);
        let series = &self.request.series;
        let ((xlo, xhi), (ylo, yhi)) = series.bounds().unwrap_or(((0.0, 1.0), (0.0, 1.0)));
        let xm = AxisMap::new((xlo, xhi), x0, x1);
        let ym = AxisMap::new((ylo, yhi), y0, y1);
        let color = self.request.color.hex();

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
        );
        let _ = write!(svg, r#"<rect width="{w}" height="{h}" fill="white"/>"#);

        for t in nice_ticks(xm.lo, xm.hi, TICKS) {
            let px = xm.map(t);
            if self.grid {
                let _ = write!(svg, r##"<line x1="{px:.2}" y1="{y1}" x2="{px:.2}" y2="{y0}" stroke="#e0e0e0" stroke-width="1"/>"##);
            }
            let _ = write!(svg, r#"<line x1="{px:.2}" y1="{y0}" x2="{px:.2}" y2="{}" stroke="black" stroke-width="1"/>"#, y0 + 5.0);
            let _ = write!(svg, r#"<text x="{px:.2}" y="{}" font-size="11" text-anchor="middle">{}</text>"#, y0 + 18.0, format_tick(t));
        }
        for t in nice_ticks(ym.lo, ym.hi, TICKS) {
            let py = ym.map(t);
            if self.grid {
                let _ = write!(svg, r##"<line x1="{x0}" y1="{py:.2}" x2="{x1}" y2="{py:.2}" stroke="#e0e0e0" stroke-width="1"/>"##);
            }
            let _ = write!(svg, r#"<line x1="{}" y1="{py:.2}" x2="{x0}" y2="{py:.2}" stroke="black" stroke-width="1"/>"#, x0 - 5.0);
            let _ = write!(svg, r#"<text x="{}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#, x0 - 8.0, py + 4.0, format_tick(t));
        }

        match self.request.style {
            PlotStyle::Line => {
                let mut d = String::new();
                let mut pen_down = false;
                for (x, y) in series.iter() {
                    if !(x.is_finite() && y.is_finite()) {
                        pen_down = false;
                        continue;
                    }
                    let cmd = if pen_down { 'L' } else { 'M' };
                    let _ = write!(d, "{cmd}{:.2},{:.2} ", xm.map(x), ym.map(y));
                    pen_down = true;
                }
                if !d.is_empty() {
                    let _ = write!(svg, r#"<path d="{}" fill="none" stroke="{color}" stroke-width="2" stroke-linejoin="round"/>"#, d.trim_end());
                }
            }
            PlotStyle::Scatter => {
                for (x, y) in series.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
                    let _ = write!(svg, r#"<circle cx="{:.2}" cy="{:.2}" r="3.5" fill="{color}"/>"#, xm.map(x), ym.map(y));
                }
            }
        }

        let _ = write!(svg, r#"<rect x="{x0}" y="{y1}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#, x1 - x0, y0 - y1);
        let _ = write!(svg, r#"<text x="{}" y="28" font-size="16" text-anchor="middle">{}</text>"#, w / 2.0, escape_xml(&self.request.title));
        let _ = write!(svg, r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">X</text>"#, (x0 + x1) / 2.0, h - 10.0);
        let _ = write!(svg, r#"<text x="16" y="{}" font-size="13" text-anchor="middle">Y</text>"#, (y0 + y1) / 2.0);
        svg.push_str("</svg>");
        svg
    }

    /// Rasterize to straight-alpha RGBA.
    pub fn render(&self) -> Result<RgbaImage> {
        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();
        let tree = usvg::Tree::from_str(&self.to_svg(), &opt)
            .map_err(|e| PlotError::render(format!("invalid figure SVG: {e}")))?;
        let mut pixmap = tiny_skia::Pixmap::new(self.width, self.height)
            .ok_or_else(|| PlotError::render(format!("invalid figure size {}x{}", self.width, self.height)))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for p in pixmap.pixels() {
            let c = p.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| PlotError::render("pixel buffer size mismatch"))
    }

    /// Render and write to `path`; returns the path actually written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let (path, format) = image_target(path.as_ref());
        let img = self.render()?;
        match format {
            // JPEG carries no alpha channel.
            ImageFormat::Jpeg => DynamicImage::ImageRgba8(img)
                .to_rgb8()
                .save_with_format(&path, ImageFormat::Jpeg)?,
            _ => img.save_with_format(&path, ImageFormat::Png)?,
        }
        log::info!("Saved figure to {:?}", path);
        Ok(path)
    }
}

/// Resolve the output path and codec from the extension.
///
/// `png`, `jpg` and `jpeg` are honored; anything else gets `.png` appended.
pub fn image_target(path: &Path) -> (PathBuf, ImageFormat) {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => (path.to_path_buf(), ImageFormat::Png),
        Some("jpg") | Some("jpeg") => (path.to_path_buf(), ImageFormat::Jpeg),
        _ => {
            let mut s = path.as_os_str().to_os_string();
            s.push(".png");
            (PathBuf::from(s), ImageFormat::Png)
        }
    }
}

/// A decoded raster image ready to be shown.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Straight-alpha RGBA, row-major.
    pub rgba: Vec<u8>,
}

impl LoadedImage {
    /// Size and pixels scaled down, aspect kept, so neither side exceeds
    /// `max_side`. Images already within bounds are returned as is.
    pub fn fit_within(&self, max_side: u32) -> ([u32; 2], Vec<u8>) {
        let max_side = max_side.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_side {
            return ([self.width, self.height], self.rgba.clone());
        }
        let scale = max_side as f64 / longest as f64;
        let w = ((self.width as f64 * scale).round() as u32).clamp(1, max_side);
        let h = ((self.height as f64 * scale).round() as u32).clamp(1, max_side);
        let Some(src) = RgbaImage::from_raw(self.width, self.height, self.rgba.clone()) else {
            return ([self.width, self.height], self.rgba.clone());
        };
        let small = imageops::resize(&src, w, h, FilterType::Triangle);
        log::info!(
            "Downscaled {:?} from {}x{} to {}x{} for display",
            self.path, self.width, self.height, w, h
        );
        ([w, h], small.into_raw())
    }
}

pub fn load_image<P: AsRef<Path>>(path: P) -> Result<LoadedImage> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    log::info!("Loaded image {:?} ({}x{})", path, width, height);
    Ok(LoadedImage {
        path: path.to_path_buf(),
        width,
        height,
        rgba: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round_and_inside() {
        let t = nice_ticks(-0.3, 9.7, 5);
        assert_eq!(t, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn tick_labels_trim_zeros() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(0.0), "0");
    }

    #[test]
    fn flat_range_is_widened() {
        assert_eq!(padded(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn near_max_range_maps_to_finite_pixels() {
        let m = AxisMap::new((-1e308, 1e308), 0.0, 100.0);
        assert!(m.lo.is_finite() && m.hi.is_finite());
        let (a, b) = (m.map(-1e308), m.map(1e308));
        assert!(a.is_finite() && b.is_finite() && a < b);

        let full = AxisMap::new((-f64::MAX, f64::MAX), 0.0, 100.0);
        assert_eq!((full.lo, full.hi), (-f64::MAX, f64::MAX));
        assert_eq!(full.map(f64::MAX), 100.0);
        assert!(!nice_ticks(full.lo, full.hi, 5).is_empty());
    }

    #[test]
    fn unknown_extension_gets_png() {
        let (p, f) = image_target(Path::new("/tmp/plot.bmp"));
        assert_eq!(p, PathBuf::from("/tmp/plot.bmp.png"));
        assert_eq!(f, ImageFormat::Png);
        let (p, f) = image_target(Path::new("/tmp/plot.JPG"));
        assert_eq!(p, PathBuf::from("/tmp/plot.JPG"));
        assert_eq!(f, ImageFormat::Jpeg);
    }

    #[test]
    fn title_is_escaped() {
        let series = crate::data::series::NumericSeries::new(vec![0.0], vec![0.0]).unwrap();
        let req = PlotRequest::new(
            series,
            "a<b & c",
            crate::data::plot_kind::PlotColor::Red,
            PlotStyle::Scatter,
        );
        let svg = Figure::new(&req, 100, 100).to_svg();
        assert!(svg.contains("a&lt;b &amp; c"));
        assert!(svg.contains("<circle"));
    }
}
