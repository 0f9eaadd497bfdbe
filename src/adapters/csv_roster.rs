use crate::domain::model::Holding;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use crate::utils::validation::parse_count;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One CSV row as typed by the user. Counts stay text until validated so
/// that a negative number is reported as such.
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    owned: String,
    currency: String,
    currency_per_evolution: String,
}

impl RosterRow {
    fn into_holding(self) -> Result<Holding> {
        Holding::new(
            self.name.trim(),
            parse_count("owned", &self.owned)?,
            parse_count("currency", &self.currency)?,
            parse_count("currency_per_evolution", &self.currency_per_evolution)?,
        )
    }
}

/// Reads holdings from a CSV file with the header
/// `name,owned,currency,currency_per_evolution`.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Vec<Holding>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut holdings = Vec::new();
        for row in csv_reader.deserialize::<RosterRow>() {
            holdings.push(row?.into_holding()?);
        }
        Ok(holdings)
    }
}

impl RosterSource for CsvRoster {
    fn load(&mut self) -> Result<Vec<Holding>> {
        let file = std::fs::File::open(&self.path)?;
        let holdings = Self::read_from(file)?;
        tracing::debug!(
            "Loaded {} holdings from {}",
            holdings.len(),
            self.path.display()
        );
        Ok(holdings)
    }
}
