use crate::domain::model::Holding;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use crate::utils::validation::parse_count;
use std::io::{BufRead, Write};

/// Asks for holdings one species at a time until a blank name (or end of
/// input) is given.
pub struct PromptRoster<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptRoster<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `question` and reads one line. `None` means end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_count(&mut self, field: &str, question: &str) -> Result<u32> {
        let answer = self.ask(question)?.unwrap_or_default();
        parse_count(field, &answer)
    }
}

impl<R: BufRead, W: Write> RosterSource for PromptRoster<R, W> {
    fn load(&mut self) -> Result<Vec<Holding>> {
        let mut holdings = Vec::new();

        loop {
            let name = match self.ask("Creature name? (blank to end) ")? {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => break,
            };

            let owned = self.ask_count("owned", &format!("Currently owned number of {}: ", name))?;
            let currency =
                self.ask_count("currency", &format!("Number of {} candies owned: ", name))?;
            let per_evolution = self.ask_count(
                "currency_per_evolution",
                &format!("Candies required to evolve one {}: ", name),
            )?;

            let holding = Holding::new(name, owned, currency, per_evolution)?;
            tracing::debug!("Read holding: {}", holding);
            holdings.push(holding);
        }

        Ok(holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;
    use std::io::Cursor;

    fn load(script: &str) -> Result<Vec<Holding>> {
        PromptRoster::new(Cursor::new(script.to_string()), Vec::new()).load()
    }

    #[test]
    fn test_reads_until_blank_name() {
        let holdings = load("Pidgey\n13\n144\n12\nWeedle\n30\n5\n12\n\nignored\n").unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0], Holding::new("Pidgey", 13, 144, 12).unwrap());
        assert_eq!(holdings[1].name, "Weedle");
    }

    #[test]
    fn test_end_of_input_ends_the_loop() {
        let holdings = load("Pidgey\n13\n144\n12\n").unwrap();
        assert_eq!(holdings.len(), 1);
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_name_ends_the_loop() {
        assert!(load("   \nPidgey\n1\n1\n12\n").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_negative_counts() {
        let result = load("Pidgey\n-2\n144\n12\n");
        assert!(matches!(result, Err(CalcError::InvalidInput { ref field, .. }) if field == "owned"));
    }

    #[test]
    fn test_rejects_cost_of_one() {
        assert!(load("Pidgey\n2\n144\n1\n").is_err());
    }

    #[test]
    fn test_truncated_entry_is_an_error() {
        assert!(load("Pidgey\n13\n").is_err());
    }

    #[test]
    fn test_prompts_name_the_species() {
        let mut roster = PromptRoster::new(Cursor::new("Pidgey\n13\n144\n12\n\n"), Vec::new());
        roster.load().unwrap();

        let transcript = String::from_utf8(roster.into_output()).unwrap();
        assert!(transcript.starts_with("Creature name? (blank to end) "));
        assert!(transcript.contains("Currently owned number of Pidgey: "));
        assert!(transcript.contains("Number of Pidgey candies owned: "));
        assert!(transcript.contains("Candies required to evolve one Pidgey: "));
    }
}
