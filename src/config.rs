//! Plot job configuration
//!
//! Every field has a default matching the bundled datasets, so the binaries
//! run without any configuration file. A `gapplot.toml` in the working
//! directory overrides individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostic::{absorb, DiagnosticSink};
use crate::error::{Error, Result};

/// File looked up by [`PlotsConfig::discover`]
pub const CONFIG_FILE: &str = "gapplot.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct PlotsConfig {
    pub life_expectancy: LifeExpectancyJob,
    pub population: PopulationJob,
    pub gdp_life: GdpLifeJob,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeExpectancyJob {
    pub path: String,
    pub country: String,
}

impl Default for LifeExpectancyJob {
    fn default() -> Self {
        LifeExpectancyJob {
            path: "life_expectancy_years.csv".to_string(),
            country: "Germany".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopulationJob {
    pub path: String,
    pub countries: Vec<String>,
}

impl Default for PopulationJob {
    fn default() -> Self {
        PopulationJob {
            path: "population_total.csv".to_string(),
            countries: vec!["Germany".to_string(), "Netherlands".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GdpLifeJob {
    pub gdp_path: String,
    pub life_path: String,
    pub year: i32,
}

impl Default for GdpLifeJob {
    fn default() -> Self {
        GdpLifeJob {
            gdp_path: "income_per_person_gdppercapita_ppp_inflaction_adjusted.csv".to_string(),
            life_path: "life_expectancy_years.csv".to_string(),
            year: 1900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for image files
    pub dir: PathBuf,
    /// Image size in pixels
    pub width: u32,
    pub height: u32,
    /// Terminal chart size in characters
    pub text_width: usize,
    pub text_height: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("."),
            width: 800,
            height: 600,
            text_width: 60,
            text_height: 16,
        }
    }
}

impl PlotsConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// [`CONFIG_FILE`] from the working directory, or the defaults.
    ///
    /// An unreadable or malformed file is reported and the defaults are used.
    pub fn discover(sink: &mut dyn DiagnosticSink) -> Self {
        Self::discover_in(Path::new("."), sink)
    }

    pub fn discover_in(dir: &Path, sink: &mut dyn DiagnosticSink) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        absorb("config", Self::from_file(&path), sink).unwrap_or_default()
    }
}
