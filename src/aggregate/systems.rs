//! Aggregates over the per-system energy breakdown.
//!
//! Groups are ordered by system type label ("Computers & IT" first), and every
//! sort below is stable, so ties keep that order.

use serde::Serialize;

use crate::dataset::{SystemBreakdownRecord, SystemType};
use crate::numeric::{mean, round_to, share_pct, sum};

/// Summed energy of one system type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemTotal {
    pub system_type: SystemType,
    pub energy_kwh: f64,
}

/// Mean and total energy of one system type across blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemStats {
    pub system_type: SystemType,
    pub avg_per_block_kwh: f64,
    pub total_kwh: f64,
}

/// The largest consumer and its share of all consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopSystemShare {
    pub system_type: SystemType,
    pub energy_kwh: f64,
    /// Share of the grand total in %, rounded to 1 decimal.
    pub share_pct: f64,
}

/// Total energy over breakdown rows in kWh.
pub fn breakdown_total(rows: &[SystemBreakdownRecord]) -> f64 {
    let values: Vec<f64> = rows.iter().map(|r| r.energy_kwh).collect();
    sum(&values)
}

fn group_by_system(rows: &[SystemBreakdownRecord]) -> Vec<(SystemType, Vec<f64>)> {
    let mut groups: Vec<(SystemType, Vec<f64>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(s, _)| *s == row.system_type) {
            Some((_, values)) => values.push(row.energy_kwh),
            None => groups.push((row.system_type, vec![row.energy_kwh])),
        }
    }
    groups.sort_by_key(|(s, _)| s.label());
    groups
}

/// Energy per system type, largest first.
pub fn system_totals(rows: &[SystemBreakdownRecord]) -> Vec<SystemTotal> {
    let mut totals: Vec<SystemTotal> = group_by_system(rows)
        .into_iter()
        .map(|(system_type, values)| SystemTotal {
            system_type,
            energy_kwh: sum(&values),
        })
        .collect();
    totals.sort_by(|a, b| b.energy_kwh.total_cmp(&a.energy_kwh));
    totals
}

/// The `n` rows with the largest energy, largest first.
pub fn top_n(rows: &[SystemBreakdownRecord], n: usize) -> Vec<SystemBreakdownRecord> {
    let mut sorted: Vec<&SystemBreakdownRecord> = rows.iter().collect();
    sorted.sort_by(|a, b| b.energy_kwh.total_cmp(&a.energy_kwh));
    sorted.into_iter().take(n).cloned().collect()
}

/// Mean and sum per system type, rounded to 2 decimals.
pub fn per_system_stats(rows: &[SystemBreakdownRecord]) -> Vec<SystemStats> {
    group_by_system(rows)
        .into_iter()
        .filter_map(|(system_type, values)| {
            let avg = mean(&values)?;
            Some(SystemStats {
                system_type,
                avg_per_block_kwh: round_to(avg, 2),
                total_kwh: round_to(sum(&values), 2),
            })
        })
        .collect()
}

/// Share of the first (largest) entry of `totals`.
///
/// `None` for empty totals or a zero grand total.
pub fn top_system_share(totals: &[SystemTotal]) -> Option<TopSystemShare> {
    let top = totals.first()?;
    let grand_total: f64 = totals.iter().map(|t| t.energy_kwh).sum();
    let share = share_pct(top.energy_kwh, grand_total)?;
    Some(TopSystemShare {
        system_type: top.system_type,
        energy_kwh: top.energy_kwh,
        share_pct: round_to(share, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(block: &str, system_type: SystemType, energy_kwh: f64) -> SystemBreakdownRecord {
        SystemBreakdownRecord {
            block: block.to_string(),
            system_type,
            energy_kwh,
            percentage: 0.0,
        }
    }

    fn rows() -> Vec<SystemBreakdownRecord> {
        vec![
            row("a", SystemType::Hvac, 300.0),
            row("a", SystemType::Lighting, 100.0),
            row("a", SystemType::OtherAppliances, 50.0),
            row("b", SystemType::Hvac, 200.0),
            row("b", SystemType::Lighting, 250.0),
            row("b", SystemType::OtherAppliances, 50.0),
        ]
    }

    #[test]
    fn test_system_totals_sorted_descending() {
        let totals = system_totals(&rows());
        let order: Vec<SystemType> = totals.iter().map(|t| t.system_type).collect();
        assert_eq!(
            order,
            vec![SystemType::Hvac, SystemType::Lighting, SystemType::OtherAppliances]
        );
        assert_eq!(totals[0].energy_kwh, 500.0);
        assert_eq!(totals[1].energy_kwh, 350.0);
    }

    #[test]
    fn test_system_totals_ties_follow_label_order() {
        let rows = vec![
            row("a", SystemType::Hvac, 10.0),
            row("a", SystemType::LabEquipment, 10.0),
            row("a", SystemType::ComputersIt, 10.0),
        ];
        let order: Vec<SystemType> = system_totals(&rows)
            .iter()
            .map(|t| t.system_type)
            .collect();
        assert_eq!(
            order,
            vec![
                SystemType::ComputersIt,
                SystemType::Hvac,
                SystemType::LabEquipment
            ]
        );
    }

    #[test]
    fn test_system_totals_match_breakdown_total() {
        let rows = rows();
        let totals: f64 = system_totals(&rows).iter().map(|t| t.energy_kwh).sum();
        assert!((totals - breakdown_total(&rows)).abs() < 1e-9);
    }

    #[test]
    fn test_top_n() {
        let top = top_n(&rows(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].energy_kwh, 300.0);
        assert_eq!(top[1].energy_kwh, 250.0);
    }

    #[test]
    fn test_top_n_ties_keep_table_order() {
        let top = top_n(&rows(), 6);
        // Both 50.0 rows: block "a" before block "b".
        assert_eq!(top[4].block, "a");
        assert_eq!(top[5].block, "b");
        assert_eq!(top_n(&rows(), 10).len(), 6);
    }

    #[test]
    fn test_per_system_stats() {
        let stats = per_system_stats(&rows());
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].system_type, SystemType::Hvac);
        assert_eq!(stats[0].avg_per_block_kwh, 250.0);
        assert_eq!(stats[0].total_kwh, 500.0);
        assert_eq!(stats[1].avg_per_block_kwh, 175.0);
    }

    #[test]
    fn test_per_system_stats_in_label_order() {
        let rows: Vec<SystemBreakdownRecord> = SystemType::ALL
            .iter()
            .map(|s| row("a", *s, 1.0))
            .collect();
        let labels: Vec<&str> = per_system_stats(&rows)
            .iter()
            .map(|s| s.system_type.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Computers & IT",
                "HVAC",
                "Lab Equipment",
                "Lighting",
                "Other Appliances"
            ]
        );
    }

    #[test]
    fn test_top_system_share() {
        let totals = system_totals(&rows());
        let top = top_system_share(&totals).unwrap();
        assert_eq!(top.system_type, SystemType::Hvac);
        // 500 / 950 = 52.63 %
        assert_eq!(top.share_pct, 52.6);
    }

    #[test]
    fn test_empty_input() {
        assert!(system_totals(&[]).is_empty());
        assert!(top_n(&[], 5).is_empty());
        assert!(per_system_stats(&[]).is_empty());
        assert_eq!(top_system_share(&[]), None);
        assert_eq!(breakdown_total(&[]), 0.0);
    }
}
