use crate::domain::model::Holding;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evolutions a Lucky Egg's duration comfortably covers.
pub const LUCKY_EGG_TARGET: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLine {
    pub name: String,
    pub transfers: u32,
    pub evolutions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub lines: Vec<PlanLine>,
    pub total_evolutions: u64,
    pub target: u32,
    pub remaining: u64,
}

impl ProgressReport {
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

pub fn report_progress(holdings: &[Holding], target: u32) -> Result<ProgressReport> {
    let mut lines = Vec::with_capacity(holdings.len());
    let mut total_evolutions = 0u64;

    for holding in holdings {
        let plan = holding.plan()?;
        total_evolutions += u64::from(plan.evolutions);
        lines.push(PlanLine {
            name: holding.name.clone(),
            transfers: plan.transfers,
            evolutions: plan.evolutions,
        });
    }

    Ok(ProgressReport {
        lines,
        total_evolutions,
        target,
        remaining: u64::from(target).saturating_sub(total_evolutions),
    })
}

fn evolutions_noun(count: u64) -> &'static str {
    if count == 1 {
        "evolution"
    } else {
        "evolutions"
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}:", line.name)?;
            writeln!(
                f,
                "\tTransfer {} for a total of {} {}.",
                line.transfers,
                line.evolutions,
                evolutions_noun(u64::from(line.evolutions))
            )?;
        }

        if self.is_complete() {
            write!(f, "No more creatures needed! Get to evolving!")
        } else {
            write!(
                f,
                "You need {} more {}.",
                self.remaining,
                evolutions_noun(self.remaining)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Holding> {
        vec![
            Holding::new("Pidgey", 13, 144, 12).unwrap(),
            Holding::new("Weedle", 30, 5, 12).unwrap(),
            Holding::new("Rattata", 1, 25, 25).unwrap(),
        ]
    }

    #[test]
    fn test_sums_planned_evolutions() {
        let report = report_progress(&roster(), LUCKY_EGG_TARGET).unwrap();

        assert_eq!(report.total_evolutions, 16);
        assert_eq!(report.remaining, 44);
        assert!(!report.is_complete());
        assert_eq!(
            report.lines[1],
            PlanLine {
                name: "Weedle".to_string(),
                transfers: 18,
                evolutions: 2,
            }
        );
    }

    #[test]
    fn test_render_pluralizes_per_line() {
        let rendered = report_progress(&roster(), LUCKY_EGG_TARGET)
            .unwrap()
            .to_string();

        assert_eq!(
            rendered,
            "Pidgey:\n\tTransfer 0 for a total of 13 evolutions.\n\
             Weedle:\n\tTransfer 18 for a total of 2 evolutions.\n\
             Rattata:\n\tTransfer 0 for a total of 1 evolution.\n\
             You need 44 more evolutions."
        );
    }

    #[test]
    fn test_target_reached() {
        let report = report_progress(&roster(), 16).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.remaining, 0);
        assert!(report
            .to_string()
            .ends_with("No more creatures needed! Get to evolving!"));
    }

    #[test]
    fn test_one_remaining_is_singular() {
        let report = report_progress(&roster(), 17).unwrap();
        assert!(report.to_string().ends_with("You need 1 more evolution."));
    }

    #[test]
    fn test_empty_roster() {
        let report = report_progress(&[], LUCKY_EGG_TARGET).unwrap();
        assert_eq!(report.to_string(), "You need 60 more evolutions.");
    }
}
