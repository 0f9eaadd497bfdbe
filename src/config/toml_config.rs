use crate::domain::model::Holding;
use crate::domain::ports::RosterSource;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{count_from_i64, validate_minimum, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TomlConfig {
    pub progress: ProgressConfig,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressConfig {
    pub target: Option<u32>,
}

/// The file as written. Numbers stay signed until range-checked so that a
/// negative count is reported like it is for the other roster sources.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    progress: RawProgress,
    #[serde(default)]
    holdings: Vec<RawHolding>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProgress {
    target: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawHolding {
    name: String,
    owned: i64,
    currency: i64,
    currency_per_evolution: i64,
}

impl RawHolding {
    fn into_holding(self) -> Result<Holding> {
        Ok(Holding {
            owned: count_from_i64("owned", self.owned)?,
            currency: count_from_i64("currency", self.currency)?,
            currency_per_evolution: count_from_i64(
                "currency_per_evolution",
                self.currency_per_evolution,
            )?,
            name: self.name,
        })
    }
}

impl TomlConfig {
    /// Load a roster from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a roster from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let raw: RawConfig =
            toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let target = raw
            .progress
            .target
            .map(|target| count_from_i64("progress.target", target))
            .transpose()?;
        let holdings = raw
            .holdings
            .into_iter()
            .map(RawHolding::into_holding)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            progress: ProgressConfig { target },
            holdings,
        })
    }

    /// Replace `${VAR}` with the value of the environment variable
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        // whole-line comments are copied verbatim
        let mut missing = Vec::new();
        let mut result = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                result.push_str(line);
                continue;
            }
            let replaced = re.replace_all(line, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    missing.push(var_name.to_string());
                    String::new()
                })
            });
            result.push_str(&replaced);
        }

        if !missing.is_empty() {
            return Err(CalcError::ConfigError {
                message: format!("Unset environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result)
    }

    pub fn target(&self) -> Option<u32> {
        self.progress.target
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(target) = self.progress.target {
            validate_minimum("progress.target", target, 1)?;
        }
        for holding in &self.holdings {
            holding.validate()?;
        }
        Ok(())
    }
}

impl RosterSource for TomlConfig {
    fn load(&mut self) -> Result<Vec<Holding>> {
        self.validate()?;
        tracing::debug!("Loaded {} holdings from TOML", self.holdings.len());
        Ok(self.holdings.clone())
    }

    fn target(&self) -> Option<u32> {
        self.progress.target
    }
}
