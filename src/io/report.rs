//! JSON report of a dashboard view.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dashboard::DashboardView;

/// Serializes `view` as pretty-printed JSON.
pub fn view_to_json(view: &DashboardView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize dashboard view")
}

/// Writes `view` as pretty-printed JSON to `path`.
pub fn write_view_json(path: &Path, view: &DashboardView) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, view)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardConfig, ViewMode};
    use crate::dashboard::Dashboard;
    use crate::dataset::Dataset;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_overview_json() -> Result<()> {
        let dashboard = Dashboard::new(Arc::new(Dataset::campus()?), &DashboardConfig::new());
        let json: serde_json::Value = serde_json::from_str(&view_to_json(&dashboard.view())?)?;
        assert_eq!(json["view_mode"], "Overview");
        assert!(json["kpis"]["total_energy_kwh"].is_u64());
        assert!(json.get("overview").is_some());
        assert!(json.get("system_analysis").is_none());
        assert!(json["blocks"][0].get("peakEnergyKwh").is_some());
        Ok(())
    }

    #[test]
    fn test_write_system_view_json() -> Result<()> {
        let config = DashboardConfig {
            view_mode: ViewMode::SystemTypeAnalysis,
            ..DashboardConfig::new()
        };
        let dashboard = Dashboard::new(Arc::new(Dataset::campus()?), &config);
        let dir = tempdir()?;
        let path = dir.path().join("view.json");
        write_view_json(&path, &dashboard.view())?;

        let content = std::fs::read_to_string(&path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(json["system_analysis"]["top_consumers"].as_array().unwrap().len(), 5);
        Ok(())
    }
}
