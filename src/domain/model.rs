use crate::domain::services::optimize;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_currency_per_evolution, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the optimizer for one holding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionPlan {
    pub evolutions: u32,
    pub transfers: u32,
}

/// The inventory of one species: how many creatures and how much candy are
/// in storage. It does not represent a single creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub owned: u32,
    pub currency: u32,
    pub currency_per_evolution: u32,
}

impl Holding {
    pub fn new(
        name: impl Into<String>,
        owned: u32,
        currency: u32,
        currency_per_evolution: u32,
    ) -> Result<Self> {
        let holding = Self {
            name: name.into(),
            owned,
            currency,
            currency_per_evolution,
        };
        holding.validate()?;
        Ok(holding)
    }

    pub fn plan(&self) -> Result<EvolutionPlan> {
        optimize(self.owned, self.currency, self.currency_per_evolution)
    }

    /// Moves `count` creatures into candy, one candy each.
    pub fn transfer(&mut self, count: u32) -> Result<()> {
        if count > self.owned {
            return Err(CalcError::Overdraw {
                requested: count,
                owned: self.owned,
            });
        }
        let currency = self.currency.checked_add(count).ok_or_else(|| {
            CalcError::invalid("currency", self.currency, "Transfer would overflow the candy count")
        })?;

        self.owned -= count;
        self.currency = currency;
        Ok(())
    }

    /// Evolves one creature if there is a creature and enough candy.
    /// Returns whether anything changed.
    pub fn evolve(&mut self) -> bool {
        if self.owned == 0 || self.currency < self.currency_per_evolution {
            return false;
        }
        self.owned -= 1;
        self.currency -= self.currency_per_evolution - 1;
        true
    }

    /// Transfers and evolves as the optimizer recommends. Applied in one step
    /// in `u64`; the candy count between transfers and evolutions can exceed
    /// `u32` even though the end state fits.
    pub fn evolve_all(&mut self) -> Result<EvolutionPlan> {
        let plan = self.plan()?;
        if plan.transfers > self.owned {
            return Err(CalcError::Overdraw {
                requested: plan.transfers,
                owned: self.owned,
            });
        }

        let candy = u64::from(self.currency) + u64::from(plan.transfers);
        let spent = u64::from(plan.evolutions) * u64::from(self.currency_per_evolution - 1);
        let remaining = candy
            .checked_sub(spent)
            .and_then(|left| u32::try_from(left).ok())
            .ok_or_else(|| {
                CalcError::invalid("currency", self.currency, "Plan does not fit the candy count")
            })?;

        self.owned -= plan.transfers + plan.evolutions;
        self.currency = remaining;

        tracing::debug!(
            "{}: transferred {}, evolved {}, left with {} owned and {} candy",
            self.name,
            plan.transfers,
            plan.evolutions,
            self.owned,
            self.currency
        );
        Ok(plan)
    }
}

impl Validate for Holding {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_currency_per_evolution(self.currency_per_evolution)
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.owned, self.currency)
    }
}
