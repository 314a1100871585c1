//! Configuration for the PlotDesk window and exports.

use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::data::export::CsvExportSource;
use crate::error::{PlotError, Result};

/// User-adjustable settings. Every field has a default, so a config file
/// only needs the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotDeskConfig {
    /// Window title.
    pub title: String,
    /// Initial inner window size in logical pixels.
    pub window_size: [f32; 2],
    /// Text shown before anything is plotted and after "reset view".
    pub welcome_text: String,
    /// Pixel size of figures written by "save graph".
    pub figure_size: [u32; 2],
    /// Data source for "export data to CSV".
    pub csv_export_source: CsvExportSource,
    /// Draw grid lines, both on screen and in saved figures.
    pub show_grid: bool,
}

impl Default for PlotDeskConfig {
    fn default() -> Self {
        Self {
            title: "Графическое приложение".to_string(),
            window_size: [800.0, 600.0],
            welcome_text: "Qt домашка по уппрпо!".to_string(),
            figure_size: [640, 480],
            csv_export_source: CsvExportSource::Generated,
            show_grid: true,
        }
    }
}

impl PlotDeskConfig {
    /// `~/.plotdesk/config.yaml`, if `HOME` is set.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".plotdesk").join("config.yaml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .map_err(|e| PlotError::config(format!("Failed to read {:?}: {}", path, e)))?;
        serde_yaml::from_str(&s)
            .map_err(|e| PlotError::config(format!("Deserialization error in {:?}: {}", path, e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self)
            .map_err(|e| PlotError::config(format!("Serialization error: {}", e)))?;
        fs::write(path, s)?;
        Ok(())
    }

    /// Load the explicit path if given, else the default path if it exists,
    /// else defaults. A missing explicit file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Window options derived from this config.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let [w, h] = self.window_size;
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(egui::vec2(w, h)),
            ..Default::default()
        }
    }
}
