use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot transfer {requested} creatures, only {owned} owned")]
    Overdraw { requested: u32, owned: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CalcError {
    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => {
                "Counts must be whole non-negative numbers and candy per evolution at least 2"
            }
            CalcError::Overdraw { .. } => "Transfer at most as many creatures as you own",
            CalcError::ConfigError { .. } => {
                "Check the TOML syntax and that every ${VAR} is set in the environment"
            }
            CalcError::IoError(_) => "Make sure the file exists and is readable",
            CalcError::CsvError(_) => {
                "Use the header name,owned,currency,currency_per_evolution"
            }
            CalcError::SerializationError(_) => "Try the text output format instead",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidInput { .. }
            | CalcError::Overdraw { .. }
            | CalcError::ConfigError { .. }
            | CalcError::CsvError(_) => 1,
            CalcError::IoError(_) | CalcError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
