pub mod engine;
pub mod progress;

pub use crate::domain::model::{EvolutionPlan, Holding};
pub use crate::domain::ports::RosterSource;
pub use crate::domain::services::optimize;
pub use crate::utils::error::Result;
