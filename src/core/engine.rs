use crate::core::progress::{report_progress, ProgressReport, LUCKY_EGG_TARGET};
use crate::core::RosterSource;
use crate::domain::model::Holding;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub report: ProgressReport,
    /// Holdings after `evolve_all`, when the engine was asked to apply plans.
    pub evolved: Option<Vec<Holding>>,
}

pub struct ProgressEngine<S: RosterSource> {
    source: S,
    target: Option<u32>,
    apply: bool,
}

impl<S: RosterSource> ProgressEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            target: None,
            apply: false,
        }
    }

    /// Target that wins over whatever the roster source carries.
    pub fn with_target(mut self, target: Option<u32>) -> Self {
        self.target = target;
        self
    }

    pub fn with_apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    pub fn run(&mut self) -> Result<EngineOutcome> {
        tracing::debug!("Loading roster...");
        let holdings = self.source.load()?;
        tracing::info!("Loaded {} holdings", holdings.len());

        let target = self
            .target
            .or_else(|| self.source.target())
            .unwrap_or(LUCKY_EGG_TARGET);

        let report = report_progress(&holdings, target)?;
        for line in &report.lines {
            tracing::debug!(
                "{}: transfer {} for {} evolutions",
                line.name,
                line.transfers,
                line.evolutions
            );
        }
        tracing::info!(
            "Planned {} of {} evolutions",
            report.total_evolutions,
            report.target
        );

        let evolved = if self.apply {
            let mut evolved = holdings;
            for holding in &mut evolved {
                holding.evolve_all()?;
            }
            Some(evolved)
        } else {
            None
        };

        Ok(EngineOutcome { report, evolved })
    }
}
