//! Application settings, read from an optional JSON file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "TOURISM_VIZ_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tourism_viz.json";
pub const DEFAULT_CSV_PATH: &str = "data/Tourist-VisitorsArrivalandExpenditure.csv";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub csv_path: PathBuf,
    pub chart: ChartSettings,
    pub export: ExportSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            chart: ChartSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub height: f32,
    pub point_radius: f32,
    pub bubble_radius_min: f32,
    pub bubble_radius_max: f32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: 600.0,
            point_radius: 6.0,
            bubble_radius_min: 4.0,
            bubble_radius_max: 18.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let settings: AppSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON configuration: {:?}", path))?;
        Ok(settings)
    }

    /// Load from `$TOURISM_VIZ_CONFIG` or `tourism_viz.json`; defaults if the file is absent.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_or_default(&dir.path().join("none.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.chart.point_radius, 6.0);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "csv_path": "other.csv", "chart": {{ "bubble_radius_max": 24.0 }} }}"#
        )
        .unwrap();

        let settings = AppSettings::load_or_default(file.path()).unwrap();
        assert_eq!(settings.csv_path, PathBuf::from("other.csv"));
        assert_eq!(settings.chart.bubble_radius_max, 24.0);
        assert_eq!(settings.chart.bubble_radius_min, 4.0);
        assert_eq!(settings.export, ExportSettings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(AppSettings::load_or_default(file.path()).is_err());
    }
}
