// Adapters layer: roster sources backed by a terminal session or a CSV file.
// The TOML roster lives with the rest of the configuration under src/config.

pub mod csv_roster;
pub mod prompt;

pub use csv_roster::CsvRoster;
pub use prompt::PromptRoster;
