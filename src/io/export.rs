//! CSV export of the filtered tables.
//!
//! Each table is written with a header row (also for empty tables) followed by
//! one line per record. Column names match the serialized record fields.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;

use crate::dataset::{BlockRecord, SystemBreakdownRecord};

/// File name of the filtered block table export.
pub const OVERVIEW_FILE_NAME: &str = "energy_overview.csv";
/// File name of the filtered system breakdown export.
pub const SYSTEMS_FILE_NAME: &str = "system_energy_data.csv";

pub const OVERVIEW_COLUMNS: [&str; 8] = [
    "block",
    "peakEnergyKwh",
    "nonPeakEnergyKwh",
    "efficiencyScorePct",
    "solarOffsetPct",
    "totalEnergyKwh",
    "gridDependencyPct",
    "co2ImpactKgPerDay",
];

pub const SYSTEM_COLUMNS: [&str; 4] = ["block", "systemType", "energyKwh", "percentage"];

/// Paths of the two export artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub overview: PathBuf,
    pub systems: PathBuf,
}

fn write_table<W: Write, T: Serialize>(writer: W, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(columns)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn table_to_string<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, columns, rows)?;
    String::from_utf8(buf).context("CSV output is not valid UTF-8")
}

/// Filtered block table as CSV text.
pub fn overview_to_csv(rows: &[BlockRecord]) -> Result<String> {
    table_to_string(&OVERVIEW_COLUMNS, rows)
}

/// Filtered system breakdown table as CSV text.
pub fn systems_to_csv(rows: &[SystemBreakdownRecord]) -> Result<String> {
    table_to_string(&SYSTEM_COLUMNS, rows)
}

fn write_table_file<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_table(BufWriter::new(file), columns, rows)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))
}

/// Writes both export artifacts into `dir`, creating it if needed.
pub fn export_tables(
    dir: &Path,
    blocks: &[BlockRecord],
    systems: &[SystemBreakdownRecord],
) -> Result<ExportPaths> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let paths = ExportPaths {
        overview: dir.join(OVERVIEW_FILE_NAME),
        systems: dir.join(SYSTEMS_FILE_NAME),
    };
    write_table_file(&paths.overview, &OVERVIEW_COLUMNS, blocks)?;
    write_table_file(&paths.systems, &SYSTEM_COLUMNS, systems)?;

    tracing::info!(
        overview = %paths.overview.display(),
        systems = %paths.systems.display(),
        blocks = blocks.len(),
        system_rows = systems.len(),
        "exported tables"
    );
    Ok(paths)
}
