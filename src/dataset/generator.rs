use std::collections::HashSet;

use anyhow::{Result, anyhow};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Dirichlet, Distribution};

use super::{BlockRecord, SystemBreakdownRecord, SystemType};
use crate::config::GeneratorConfig;
use crate::name::HasBlock;
use crate::numeric::round_to;

// Half-open sampling ranges of the base metrics.
const PEAK_ENERGY_KWH: (u32, u32) = (400, 1200);
const NON_PEAK_ENERGY_KWH: (u32, u32) = (200, 700);
const EFFICIENCY_SCORE_PCT: (u32, u32) = (55, 95);
const SOLAR_OFFSET_PCT: (u32, u32) = (20, 60);

/// Immutable mock dataset: one row per block plus the per-system breakdown.
///
/// Construct it once and share it read-only (e.g. behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    seed: u64,
    blocks: Vec<BlockRecord>,
    systems: Vec<SystemBreakdownRecord>,
}

impl Dataset {
    /// Generates the dataset described by `config`.
    ///
    /// Random values are drawn from a single `ChaCha8Rng` stream:
    /// 1) each base metric column for all blocks (peak, non-peak,
    ///    efficiency, solar offset),
    /// 2) one Dirichlet weight vector per block, in block order.
    ///
    /// Fails only on invalid configuration (empty or duplicate block names,
    /// non-positive concentration).
    pub fn generate(config: &GeneratorConfig) -> Result<Self> {
        validate_blocks(&config.blocks)?;
        let dirichlet = Dirichlet::new(&config.concentration[..]).map_err(|e| {
            anyhow!(
                "Invalid Dirichlet concentration {:?}: {e:?}",
                config.concentration
            )
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let n = config.blocks.len();

        let peak = sample_column(&mut rng, PEAK_ENERGY_KWH, n);
        let non_peak = sample_column(&mut rng, NON_PEAK_ENERGY_KWH, n);
        let efficiency = sample_column(&mut rng, EFFICIENCY_SCORE_PCT, n);
        let solar = sample_column(&mut rng, SOLAR_OFFSET_PCT, n);

        let blocks: Vec<BlockRecord> = config
            .blocks
            .iter()
            .enumerate()
            .map(|(i, name)| {
                BlockRecord::new(name.as_str(), peak[i], non_peak[i], efficiency[i], solar[i])
            })
            .collect();

        let mut systems = Vec::with_capacity(n * SystemType::ALL.len());
        for block in &blocks {
            let weights: Vec<f64> = dirichlet.sample(&mut rng);
            let energy = split_energy(block.total_energy_kwh() as f64, &weights);
            let columns = SystemType::ALL.iter().zip(weights).zip(energy);
            for ((system_type, w), energy_kwh) in columns {
                systems.push(SystemBreakdownRecord {
                    block: block.block().to_string(),
                    system_type: *system_type,
                    energy_kwh,
                    percentage: round_to(w * 100.0, 1),
                });
            }
        }

        tracing::debug!(
            seed = config.seed,
            blocks = blocks.len(),
            systems = systems.len(),
            "generated mock dataset"
        );

        Ok(Self {
            seed: config.seed,
            blocks,
            systems,
        })
    }

    /// Default campus dataset (12 blocks, seed 21).
    pub fn campus() -> Result<Self> {
        Self::generate(&GeneratorConfig::new())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn blocks(&self) -> &[BlockRecord] {
        &self.blocks
    }

    pub fn systems(&self) -> &[SystemBreakdownRecord] {
        &self.systems
    }

    pub fn block_names(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.block().to_string()).collect()
    }

    pub fn contains_block(&self, name: &str) -> bool {
        self.blocks.iter().any(|b| b.block() == name)
    }
}

fn validate_blocks(blocks: &[String]) -> Result<()> {
    anyhow::ensure!(!blocks.is_empty(), "Dataset needs at least one block");
    let mut seen = HashSet::new();
    for name in blocks {
        anyhow::ensure!(!name.trim().is_empty(), "Block name must not be empty");
        anyhow::ensure!(seen.insert(name.as_str()), "Duplicate block name: {name}");
    }
    Ok(())
}

/// Splits `total` by `weights` into parts rounded to 2 decimals.
///
/// The rounding remainder goes to the largest part, so the parts add up to
/// `total` to the cent.
fn split_energy(total: f64, weights: &[f64]) -> Vec<f64> {
    let mut parts: Vec<f64> = weights.iter().map(|w| round_to(total * w, 2)).collect();
    let largest = weights
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    if let Some(i) = largest {
        let remainder = round_to(total - parts.iter().sum::<f64>(), 2);
        parts[i] = round_to(parts[i] + remainder, 2);
    }
    parts
}

fn sample_column(rng: &mut impl Rng, (lo, hi): (u32, u32), n: usize) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}
