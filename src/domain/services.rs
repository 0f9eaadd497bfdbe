use crate::domain::model::EvolutionPlan;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_currency_per_evolution;

/// Finds the transfer count that yields the most evolutions.
///
/// Each evolution is gated on `currency >= req`, consumes `req` candy and
/// hands one back, so with `t` transfers the candy side allows
/// `(currency + t - 1) / (req - 1)` evolutions and the creature side allows
/// `owned - t`. Evolution `e` is reachable iff `e <= owned` and
/// `e * req <= owned + currency - 1`, which gives the maximum directly; the
/// transfer count is then the least `t` that lifts the candy side to `e`.
pub fn optimize(owned: u32, currency: u32, req: u32) -> Result<EvolutionPlan> {
    validate_currency_per_evolution(req)?;

    let owned = u64::from(owned);
    let currency = u64::from(currency);
    let req = u64::from(req);

    let pool = owned + currency;
    if pool == 0 {
        return Ok(EvolutionPlan::default());
    }

    let evolutions = owned.min((pool - 1) / req);
    let transfers = if evolutions == 0 {
        0
    } else {
        (evolutions * (req - 1) + 1).saturating_sub(currency)
    };

    // both are bounded by `owned`, which came from a u32
    Ok(EvolutionPlan {
        evolutions: evolutions as u32,
        transfers: transfers as u32,
    })
}

/// Evolutions reachable with exactly `transfers` creatures transferred first.
pub fn evolutions_after_transfer(owned: u32, currency: u32, req: u32, transfers: u32) -> Result<u32> {
    validate_currency_per_evolution(req)?;
    if transfers > owned {
        return Err(CalcError::Overdraw {
            requested: transfers,
            owned,
        });
    }

    let remaining = u64::from(owned - transfers);
    let candy = u64::from(currency) + u64::from(transfers);
    let by_candy = candy.saturating_sub(1) / u64::from(req - 1);

    Ok(remaining.min(by_candy) as u32)
}
