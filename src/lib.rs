pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod io;
pub mod name;
pub mod numeric;

// Prelude
pub use config::{DashboardConfig, DashboardSettings, GeneratorConfig, ViewMode};
pub use dashboard::{Dashboard, DashboardView, SystemAnalysis};
pub use dataset::{BlockRecord, Dataset, SystemBreakdownRecord, SystemType};
pub use filter::{EfficiencyRange, FilterCriteria, filter_blocks, filter_systems};
pub use name::HasBlock;
