//! Dashboard session: filter state over a shared dataset.
//!
//! The dataset is generated once and shared read-only. Every change of the
//! selection is followed by [`Dashboard::view`], which recomputes the filtered
//! tables and aggregates from scratch.

use std::sync::Arc;

use serde::Serialize;

use crate::aggregate::{
    BlockShare, Kpis, PivotTable, SystemStats, SystemTotal, TopSystemShare, energy_share,
    per_system_stats, pivot, system_totals, top_n, top_system_share,
};
use crate::config::{DashboardConfig, ViewMode};
use crate::dataset::{BlockRecord, Dataset, SystemBreakdownRecord};
use crate::filter::{EfficiencyRange, FilterCriteria, filter_blocks, filter_systems};

/// Aggregates shown in [`ViewMode::Overview`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewAggregates {
    pub energy_share: Vec<BlockShare>,
}

/// Aggregates shown in [`ViewMode::SystemTypeAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemAnalysis {
    pub totals: Vec<SystemTotal>,
    pub pivot: PivotTable,
    pub top_consumers: Vec<SystemBreakdownRecord>,
    pub stats: Vec<SystemStats>,
    pub top_share: Option<TopSystemShare>,
}

impl SystemAnalysis {
    pub fn from_rows(rows: &[SystemBreakdownRecord], n: usize) -> Self {
        let totals = system_totals(rows);
        let top_share = top_system_share(&totals);
        Self {
            pivot: pivot(rows),
            top_consumers: top_n(rows, n),
            stats: per_system_stats(rows),
            totals,
            top_share,
        }
    }

    /// One-line summary of the largest consumer, if there is one.
    pub fn insight(&self) -> Option<String> {
        let top = self.top_share?;
        Some(format!(
            "{} is the largest energy consumer, accounting for {:.1}% of total usage.",
            top.system_type, top.share_pct
        ))
    }
}

/// Result of one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub view_mode: ViewMode,
    pub blocks: Vec<BlockRecord>,
    pub systems: Vec<SystemBreakdownRecord>,
    pub kpis: Kpis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<OverviewAggregates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_analysis: Option<SystemAnalysis>,
}

/// Filter state of one session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    criteria: FilterCriteria,
    view_mode: ViewMode,
    top_n: usize,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let selected = match &config.selected_blocks {
            Some(blocks) => blocks.clone(),
            None => dataset.block_names(),
        };
        let criteria = Self::criteria_for(&dataset, selected, config.efficiency_range);
        Self {
            dataset,
            criteria,
            view_mode: config.view_mode,
            top_n: config.top_n,
        }
    }

    fn criteria_for(
        dataset: &Dataset,
        selected: Vec<String>,
        efficiency: EfficiencyRange,
    ) -> FilterCriteria {
        for name in selected.iter().filter(|n| !dataset.contains_block(n)) {
            tracing::warn!(block = %name, "selected block is not in the dataset");
        }
        let criteria = FilterCriteria::new(selected, efficiency);
        tracing::debug!(
            selected = criteria.selected_count(),
            min = efficiency.min,
            max = efficiency.max,
            "block selection changed"
        );
        criteria
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn select_blocks<I, S>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: Vec<String> = blocks.into_iter().map(Into::into).collect();
        self.criteria = Self::criteria_for(&self.dataset, selected, self.criteria.efficiency());
    }

    pub fn set_efficiency_range(&mut self, range: EfficiencyRange) {
        self.criteria.set_efficiency(range);
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Filters the dataset and computes the aggregates of the current view mode.
    pub fn view(&self) -> DashboardView {
        let blocks = filter_blocks(self.dataset.blocks(), &self.criteria);
        let systems = filter_systems(self.dataset.systems(), &self.criteria);
        let kpis = Kpis::from_rows(&blocks);

        let (overview, system_analysis) = match self.view_mode {
            ViewMode::Overview => (
                Some(OverviewAggregates {
                    energy_share: energy_share(&blocks),
                }),
                None,
            ),
            ViewMode::SystemTypeAnalysis => {
                (None, Some(SystemAnalysis::from_rows(&systems, self.top_n)))
            }
        };

        DashboardView {
            view_mode: self.view_mode,
            blocks,
            systems,
            kpis,
            overview,
            system_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn campus() -> Result<Arc<Dataset>> {
        Ok(Arc::new(Dataset::campus()?))
    }

    #[test]
    fn test_default_session_selects_all_blocks() -> Result<()> {
        let dashboard = Dashboard::new(campus()?, &DashboardConfig::default());
        assert_eq!(dashboard.criteria().selected_count(), 12);
        assert_eq!(dashboard.criteria().efficiency(), EfficiencyRange::new(60, 95));

        let view = dashboard.view();
        assert_eq!(view.view_mode, ViewMode::Overview);
        assert!(view.overview.is_some());
        assert!(view.system_analysis.is_none());
        assert_eq!(view.systems.len(), 60);
        Ok(())
    }

    #[test]
    fn test_system_view() -> Result<()> {
        let mut dashboard = Dashboard::new(campus()?, &DashboardConfig::default());
        dashboard.set_view_mode(ViewMode::SystemTypeAnalysis);
        let view = dashboard.view();
        let analysis = view.system_analysis.unwrap();
        assert_eq!(analysis.totals.len(), 5);
        assert_eq!(analysis.top_consumers.len(), 5);
        assert_eq!(analysis.pivot.rows.len(), 12);
        assert!(analysis.insight().unwrap().contains("largest energy consumer"));
        Ok(())
    }

    #[test]
    fn test_recompute_on_selection_change() -> Result<()> {
        let mut dashboard = Dashboard::new(campus()?, &DashboardConfig::default());
        dashboard.set_efficiency_range(EfficiencyRange::full());
        dashboard.select_blocks(["Canteens", "M Block - Labs"]);
        let view = dashboard.view();
        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.systems.len(), 10);

        dashboard.select_blocks(Vec::<String>::new());
        let view = dashboard.view();
        assert!(view.blocks.is_empty());
        assert_eq!(view.kpis.total_energy_kwh, 0);
        assert_eq!(view.kpis.avg_efficiency_pct, None);
        Ok(())
    }

    #[test]
    fn test_range_change_keeps_selection() -> Result<()> {
        let config = DashboardConfig {
            selected_blocks: Some(vec!["Canteens".to_string()]),
            ..DashboardConfig::default()
        };
        let mut dashboard = Dashboard::new(campus()?, &config);
        dashboard.set_efficiency_range(EfficiencyRange::full());
        assert_eq!(dashboard.criteria().selected_count(), 1);
        assert!(dashboard.criteria().is_selected("Canteens"));
        assert_eq!(dashboard.view().blocks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_empty_system_view_has_no_insight() -> Result<()> {
        let config = DashboardConfig {
            selected_blocks: Some(vec![]),
            view_mode: ViewMode::SystemTypeAnalysis,
            ..DashboardConfig::default()
        };
        let view = Dashboard::new(campus()?, &config).view();
        let analysis = view.system_analysis.unwrap();
        assert!(analysis.pivot.is_empty());
        assert!(analysis.insight().is_none());
        Ok(())
    }
}
