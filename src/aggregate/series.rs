use serde::Serialize;

use crate::dataset::BlockRecord;
use crate::name::HasBlock;
use crate::numeric::share_pct;

/// A block's slice of the filtered energy total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockShare {
    pub block: String,
    pub energy_kwh: u64,
    pub share_pct: f64,
}

/// Per-block share of total energy, in row order.
///
/// Empty when there are no rows or the total is zero.
pub fn energy_share(rows: &[BlockRecord]) -> Vec<BlockShare> {
    let total: u64 = rows.iter().map(|r| r.total_energy_kwh()).sum();
    rows.iter()
        .filter_map(|r| {
            let share = share_pct(r.total_energy_kwh() as f64, total as f64)?;
            Some(BlockShare {
                block: r.block().to_string(),
                energy_kwh: r.total_energy_kwh(),
                share_pct: share,
            })
        })
        .collect()
}
