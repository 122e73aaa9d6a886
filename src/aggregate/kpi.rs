use serde::Serialize;

use crate::dataset::BlockRecord;
use crate::numeric::{mean, sum};

/// Total energy in kWh per day. Exact: the inputs are integers.
pub fn total_energy(rows: &[BlockRecord]) -> u64 {
    rows.iter().map(|r| r.total_energy_kwh()).sum()
}

/// Mean solar offset in %, `None` for no rows.
pub fn avg_solar_offset(rows: &[BlockRecord]) -> Option<f64> {
    let values: Vec<f64> = rows.iter().map(|r| r.solar_offset_pct() as f64).collect();
    mean(&values)
}

/// Mean efficiency score in %, `None` for no rows.
pub fn avg_efficiency(rows: &[BlockRecord]) -> Option<f64> {
    let values: Vec<f64> = rows.iter().map(|r| r.efficiency_score_pct() as f64).collect();
    mean(&values)
}

/// Total CO2 impact in kg per day.
pub fn total_co2(rows: &[BlockRecord]) -> f64 {
    let values: Vec<f64> = rows.iter().map(|r| r.co2_impact_kg_per_day()).collect();
    sum(&values)
}

/// Headline metrics, truncated towards zero for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_energy_kwh: u64,
    /// `None` when no rows passed the filter.
    pub avg_solar_offset_pct: Option<u64>,
    /// `None` when no rows passed the filter.
    pub avg_efficiency_pct: Option<u64>,
    pub total_co2_kg_per_day: u64,
}

impl Kpis {
    pub fn from_rows(rows: &[BlockRecord]) -> Self {
        Self {
            total_energy_kwh: total_energy(rows),
            avg_solar_offset_pct: avg_solar_offset(rows).map(truncate),
            avg_efficiency_pct: avg_efficiency(rows).map(truncate),
            total_co2_kg_per_day: truncate(total_co2(rows)),
        }
    }
}

// All inputs are non-negative, so `as` truncates towards zero.
fn truncate(x: f64) -> u64 {
    x.trunc() as u64
}
