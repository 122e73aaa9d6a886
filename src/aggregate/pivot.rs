use serde::Serialize;

use crate::dataset::{SystemBreakdownRecord, SystemType};
use crate::name::{HasBlock, distinct_blocks};
use crate::numeric::round_to;

/// One block row of the pivot table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub block: String,
    /// Energy per column of [`PivotTable::columns`], rounded to 2 decimals.
    /// `None` where the block has no row for that system type.
    pub values: Vec<Option<f64>>,
    /// Sum of the present `values`.
    pub total: f64,
}

/// Block x system type matrix of summed energy in kWh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotTable {
    /// System types present in the input, sorted by label.
    pub columns: Vec<SystemType>,
    /// Rows sorted by `total`, largest first. Equal totals keep block name order.
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pivots breakdown rows into a block x system type table with a total column.
pub fn pivot(rows: &[SystemBreakdownRecord]) -> PivotTable {
    let mut columns: Vec<SystemType> = SystemType::ALL
        .into_iter()
        .filter(|s| rows.iter().any(|r| r.system_type == *s))
        .collect();
    columns.sort_by_key(|s| s.label());

    let mut blocks = distinct_blocks(rows);
    blocks.sort();

    let mut table_rows: Vec<PivotRow> = blocks
        .into_iter()
        .map(|block| {
            let values: Vec<Option<f64>> = columns
                .iter()
                .map(|system_type| {
                    let mut cell: Option<f64> = None;
                    for r in rows
                        .iter()
                        .filter(|r| r.block() == block && r.system_type == *system_type)
                    {
                        *cell.get_or_insert(0.0) += r.energy_kwh;
                    }
                    cell.map(|v| round_to(v, 2))
                })
                .collect();
            let total: f64 = values.iter().flatten().sum();
            PivotRow {
                block,
                values,
                total,
            }
        })
        .collect();

    table_rows.sort_by(|a, b| b.total.total_cmp(&a.total));

    PivotTable {
        columns,
        rows: table_rows,
    }
}
