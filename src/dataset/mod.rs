//! Synthetic campus energy dataset.
//!
//! [`Dataset`] holds two tables generated from a seed:
//! - [`BlockRecord`]: one row per campus block,
//! - [`SystemBreakdownRecord`]: one row per (block, [`SystemType`]) pair,
//!   splitting the block's total energy with Dirichlet weights.

pub mod block;
pub mod generator;
pub mod system;

pub use block::{BlockRecord, CAMPUS_BLOCKS, CO2_KG_PER_KWH};
pub use generator::Dataset;
pub use system::{SystemBreakdownRecord, SystemType};
