use std::io::Write;
use std::path::Path;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::display::DisplayState;
use super::plot_kind::generated_export_series;
use super::series::NumericSeries;

/// Where "export data to CSV" takes its rows from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvExportSource {
    /// Fresh `linspace(0, 10, 100)` against uniform randoms, whatever is on screen.
    #[default]
    Generated,
    /// The plot currently shown; falls back to generated data when none is.
    Displayed,
}

/// Pick the series to export for the given source and display.
pub fn series_for_export(
    source: CsvExportSource,
    display: &DisplayState,
    rng: &mut dyn RngCore,
) -> NumericSeries {
    match (source, display.plot()) {
        (CsvExportSource::Displayed, Some(req)) => req.series.clone(),
        (CsvExportSource::Displayed, None) => {
            log::debug!("no plot displayed, exporting generated data");
            generated_export_series(rng)
        }
        (CsvExportSource::Generated, _) => generated_export_series(rng),
    }
}

/// Write `X,Y` then one row per point.
pub fn write_csv<W: Write>(mut w: W, series: &NumericSeries) -> std::io::Result<()> {
    writeln!(w, "X,Y")?;
    for (x, y) in series.iter() {
        writeln!(w, "{},{}", x, y)?;
    }
    w.flush()
}

pub fn write_csv_path<P: AsRef<Path>>(path: P, series: &NumericSeries) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(f), series)
}
