use crate::adapters::{CsvRoster, PromptRoster};
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;

impl CliConfig {
    /// Picks the roster source named on the command line, falling back to
    /// the interactive prompt on stdin/stdout.
    pub fn roster_source(&self) -> Result<Box<dyn RosterSource>> {
        if let Some(path) = &self.roster_csv {
            tracing::info!("📁 Reading roster from CSV: {}", path);
            return Ok(Box::new(CsvRoster::new(path)));
        }

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            return Ok(Box::new(TomlConfig::from_file(path)?));
        }

        tracing::debug!("No roster file given, prompting");
        Ok(Box::new(PromptRoster::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        )))
    }
}
