use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dataset::CAMPUS_BLOCKS;
use crate::filter::EfficiencyRange;

/// Seed of the default campus dataset.
pub const DEFAULT_SEED: u64 = 21;

/// Dirichlet concentration per system type (HVAC, Lighting, Computers & IT,
/// Lab Equipment, Other Appliances).
pub const DEFAULT_CONCENTRATION: [f64; 5] = [3.5, 2.0, 2.5, 2.0, 1.0];

/// Configuration for mock dataset generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed of the random stream. Same seed, same dataset.
    pub seed: u64,
    /// Block names, unique. Rows are generated in this order.
    pub blocks: Vec<String>,
    /// Dirichlet concentration parameters, one per system type.
    pub concentration: [f64; 5],
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            blocks: CAMPUS_BLOCKS.iter().map(|b| b.to_string()).collect(),
            concentration: DEFAULT_CONCENTRATION,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Which aggregate bundle the dashboard computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Overview,
    SystemTypeAnalysis,
}

/// Initial filter state of a dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Selected blocks. `None` selects every block of the dataset.
    pub selected_blocks: Option<Vec<String>>,
    pub efficiency_range: EfficiencyRange,
    pub view_mode: ViewMode,
    /// Number of rows in the top consumers table.
    pub top_n: usize,
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self {
            selected_blocks: None,
            efficiency_range: EfficiencyRange::default(),
            view_mode: ViewMode::Overview,
            top_n: 5,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a dashboard session needs, as read from a JSON file.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub generator: GeneratorConfig,
    pub dashboard: DashboardConfig,
}

impl DashboardSettings {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse dashboard settings")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let settings: DashboardSettings = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let generator = GeneratorConfig::new();
        assert_eq!(generator.seed, 21);
        assert_eq!(generator.blocks.len(), 12);
        assert_eq!(generator.concentration, [3.5, 2.0, 2.5, 2.0, 1.0]);

        let dashboard = DashboardConfig::default();
        assert_eq!(dashboard.selected_blocks, None);
        assert_eq!(dashboard.efficiency_range, EfficiencyRange::new(60, 95));
        assert_eq!(dashboard.view_mode, ViewMode::Overview);
        assert_eq!(dashboard.top_n, 5);
    }

    #[test]
    fn test_partial_json() -> Result<()> {
        let settings = DashboardSettings::from_json_str(
            r#"{
                "generator": { "seed": 7 },
                "dashboard": {
                    "efficiency_range": { "min": 70, "max": 90 },
                    "view_mode": "SystemTypeAnalysis"
                }
            }"#,
        )?;
        assert_eq!(settings.generator.seed, 7);
        assert_eq!(settings.generator.blocks.len(), 12);
        assert_eq!(settings.dashboard.efficiency_range, EfficiencyRange::new(70, 90));
        assert_eq!(settings.dashboard.view_mode, ViewMode::SystemTypeAnalysis);
        assert_eq!(settings.dashboard.top_n, 5);
        Ok(())
    }

    #[test]
    fn test_empty_json_is_default() -> Result<()> {
        let settings = DashboardSettings::from_json_str("{}")?;
        assert_eq!(settings, DashboardSettings::default());
        Ok(())
    }

    #[test]
    fn test_invalid_json() {
        assert!(DashboardSettings::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("campus_energy_missing_settings.json");
        let err = DashboardSettings::from_json_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
