use serde::Serialize;

use crate::name::HasBlock;

/// CO2 emitted per kWh drawn, in kg.
pub const CO2_KG_PER_KWH: f64 = 0.78;

/// Campus blocks tracked by the default dataset, in generation order.
pub const CAMPUS_BLOCKS: [&str; 12] = [
    "M Block - Classrooms",
    "M Block - Labs",
    "M Block - Auditorium",
    "Old Building - A Block",
    "Old Building - B Block",
    "Old Building - C Block",
    "Old Building - D Block",
    "Old Building - E Block",
    "Old Building - F Block",
    "Old Building - G Block",
    "Old Building - Lower Floor Labs",
    "Canteens",
];

/// Daily energy metrics of one campus block.
///
/// The derived columns are computed once in [`BlockRecord::new`] and
/// there is no way to change the sampled metrics afterwards, so they
/// always agree with the base metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    block: String,
    peak_energy_kwh: u32,
    non_peak_energy_kwh: u32,
    efficiency_score_pct: u32,
    solar_offset_pct: u32,
    total_energy_kwh: u64,
    grid_dependency_pct: u32,
    co2_impact_kg_per_day: f64,
}

impl BlockRecord {
    /// Builds a record from sampled metrics and fills in the derived columns.
    ///
    /// `solar_offset_pct` above 100 saturates the grid dependency at 0.
    pub fn new(
        block: impl Into<String>,
        peak_energy_kwh: u32,
        non_peak_energy_kwh: u32,
        efficiency_score_pct: u32,
        solar_offset_pct: u32,
    ) -> Self {
        let total_energy_kwh = u64::from(peak_energy_kwh) + u64::from(non_peak_energy_kwh);
        Self {
            block: block.into(),
            peak_energy_kwh,
            non_peak_energy_kwh,
            efficiency_score_pct,
            solar_offset_pct,
            total_energy_kwh,
            grid_dependency_pct: 100u32.saturating_sub(solar_offset_pct),
            co2_impact_kg_per_day: total_energy_kwh as f64 * CO2_KG_PER_KWH,
        }
    }

    pub fn peak_energy_kwh(&self) -> u32 {
        self.peak_energy_kwh
    }

    pub fn non_peak_energy_kwh(&self) -> u32 {
        self.non_peak_energy_kwh
    }

    pub fn efficiency_score_pct(&self) -> u32 {
        self.efficiency_score_pct
    }

    pub fn solar_offset_pct(&self) -> u32 {
        self.solar_offset_pct
    }

    pub fn total_energy_kwh(&self) -> u64 {
        self.total_energy_kwh
    }

    pub fn grid_dependency_pct(&self) -> u32 {
        self.grid_dependency_pct
    }

    pub fn co2_impact_kg_per_day(&self) -> f64 {
        self.co2_impact_kg_per_day
    }
}

impl HasBlock for BlockRecord {
    fn block(&self) -> &str {
        &self.block
    }
}
