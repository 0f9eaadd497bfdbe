#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_minimum, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "candy-calc")]
#[command(about = "Plan transfers and evolutions to fill a Lucky Egg")]
pub struct CliConfig {
    /// CSV roster with columns name,owned,currency,currency_per_evolution
    #[arg(long, conflicts_with = "config")]
    pub roster_csv: Option<String>,

    /// TOML roster with optional [progress] target and [[holdings]] entries
    #[arg(short, long)]
    pub config: Option<String>,

    /// Evolutions to aim for; overrides the TOML target
    #[arg(long)]
    pub target: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also simulate transferring and evolving, and print what is left
    #[arg(long)]
    pub apply: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster_csv {
            validate_non_empty_string("roster_csv", path)?;
        }
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
        }
        if let Some(target) = self.target {
            validate_minimum("target", target, 1)?;
        }
        Ok(())
    }
}
