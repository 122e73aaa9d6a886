//! Campus energy dashboard CLI.
//!
//! Generates the mock dataset, applies the selected filters and prints the
//! headline metrics plus the aggregates of the chosen view. Optionally writes
//! the filtered tables as CSV and the whole view as a JSON report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_energy::io::{export_tables, view_to_json, write_view_json};
use campus_energy::{
    Dashboard, DashboardSettings, DashboardView, Dataset, EfficiencyRange, HasBlock, ViewMode,
};

/// Smart campus energy efficiency dashboard
#[derive(Parser)]
#[command(name = "campus-energy")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed of the mock dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Block to include (repeatable; default: all blocks)
    #[arg(short, long = "block")]
    blocks: Vec<String>,

    /// Lower bound of the efficiency score band (%)
    #[arg(long)]
    min_efficiency: Option<u32>,

    /// Upper bound of the efficiency score band (%)
    #[arg(long)]
    max_efficiency: Option<u32>,

    /// View mode
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Rows in the top consumers table
    #[arg(long)]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Directory to write energy_overview.csv and system_energy_data.csv into
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// File to write the current view into as pretty-printed JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewArg {
    Overview,
    Systems,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Overview => ViewMode::Overview,
            ViewArg::Systems => ViewMode::SystemTypeAnalysis,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = load_settings(&cli)?;
    let dataset = Arc::new(Dataset::generate(&settings.generator)?);
    let view = Dashboard::new(dataset, &settings.dashboard).view();

    match cli.format {
        OutputFormat::Table => print_view(&view),
        OutputFormat::Json => println!("{}", view_to_json(&view)?),
    }

    if let Some(dir) = &cli.export_dir {
        let paths = export_tables(dir, &view.blocks, &view.systems)?;
        eprintln!(
            "Exported {} and {}",
            paths.overview.display(),
            paths.systems.display()
        );
    }

    if let Some(path) = &cli.report {
        write_view_json(path, &view)?;
        eprintln!("Wrote report {}", path.display());
    }

    Ok(())
}

/// Settings file (if any) with command line overrides applied.
fn load_settings(cli: &Cli) -> Result<DashboardSettings> {
    let mut settings = match &cli.config {
        Some(path) => DashboardSettings::from_json_file(path)?,
        None => DashboardSettings::default(),
    };

    if let Some(seed) = cli.seed {
        settings.generator.seed = seed;
    }
    if !cli.blocks.is_empty() {
        settings.dashboard.selected_blocks = Some(cli.blocks.clone());
    }
    let range = settings.dashboard.efficiency_range;
    settings.dashboard.efficiency_range = EfficiencyRange::new(
        cli.min_efficiency.unwrap_or(range.min),
        cli.max_efficiency.unwrap_or(range.max),
    );
    if let Some(view) = cli.view {
        settings.dashboard.view_mode = view.into();
    }
    if let Some(top) = cli.top {
        settings.dashboard.top_n = top;
    }
    Ok(settings)
}

fn or_na(value: Option<u64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn print_view(view: &DashboardView) {
    let kpis = &view.kpis;
    println!("Total Energy (kWh/day):  {}", kpis.total_energy_kwh);
    println!("Avg Solar Offset (%):    {}", or_na(kpis.avg_solar_offset_pct));
    println!("Avg Efficiency (%):      {}", or_na(kpis.avg_efficiency_pct));
    println!("CO2 Impact (kg/day):     {}", kpis.total_co2_kg_per_day);
    println!();

    if let Some(overview) = &view.overview {
        println!(
            "{:<34} {:>6} {:>9} {:>6} {:>6} {:>6} {:>9}",
            "Block", "Peak", "Non-Peak", "Eff%", "Solar%", "Grid%", "CO2 kg"
        );
        for b in &view.blocks {
            println!(
                "{:<34} {:>6} {:>9} {:>6} {:>6} {:>6} {:>9.2}",
                b.block(),
                b.peak_energy_kwh(),
                b.non_peak_energy_kwh(),
                b.efficiency_score_pct(),
                b.solar_offset_pct(),
                b.grid_dependency_pct(),
                b.co2_impact_kg_per_day()
            );
        }
        println!();
        println!("Energy distribution share");
        for share in &overview.energy_share {
            println!("  {:<32} {:>5.1}%", share.block, share.share_pct);
        }
    }

    if let Some(analysis) = &view.system_analysis {
        println!("Energy by system type (kWh)");
        for total in &analysis.totals {
            println!("  {:<18} {:>10.2}", total.system_type, total.energy_kwh);
        }
        println!();

        print!("{:<34}", "Block");
        for column in &analysis.pivot.columns {
            print!(" {:>16}", column.label());
        }
        println!(" {:>10}", "Total");
        for row in &analysis.pivot.rows {
            print!("{:<34}", row.block);
            for value in &row.values {
                match value {
                    Some(v) => print!(" {:>16.2}", v),
                    None => print!(" {:>16}", "-"),
                }
            }
            println!(" {:>10.2}", row.total);
        }
        println!();

        println!("Top {} energy-intensive systems", analysis.top_consumers.len());
        for r in &analysis.top_consumers {
            println!("  {:<32} {:<18} {:>8.2}", r.block, r.system_type, r.energy_kwh);
        }
        println!();

        println!("{:<18} {:>20} {:>12}", "System", "Avg per Block (kWh)", "Total (kWh)");
        for s in &analysis.stats {
            println!(
                "{:<18} {:>20.2} {:>12.2}",
                s.system_type, s.avg_per_block_kwh, s.total_kwh
            );
        }

        if let Some(insight) = analysis.insight() {
            println!();
            println!("{insight}");
        }
    }
}
