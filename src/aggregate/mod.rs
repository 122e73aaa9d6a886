//! Summary statistics over filtered tables.
//!
//! Every function here is total: empty input gives zero sums, `None` means,
//! and empty tables.

pub mod kpi;
pub mod pivot;
pub mod series;
pub mod systems;

pub use kpi::{Kpis, avg_efficiency, avg_solar_offset, total_co2, total_energy};
pub use pivot::{PivotRow, PivotTable, pivot};
pub use series::{BlockShare, energy_share};
pub use systems::{
    SystemStats, SystemTotal, TopSystemShare, breakdown_total, per_system_stats, system_totals,
    top_n, top_system_share,
};
