pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{CsvRoster, PromptRoster};
pub use config::toml_config::TomlConfig;
pub use core::{
    engine::{EngineOutcome, ProgressEngine},
    progress::{report_progress, PlanLine, ProgressReport, LUCKY_EGG_TARGET},
};
pub use domain::{
    model::{EvolutionPlan, Holding},
    ports::RosterSource,
    services::optimize,
};
pub use utils::error::{CalcError, Result};
