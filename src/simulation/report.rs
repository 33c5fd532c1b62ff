//! Simulation output.

use serde::{Deserialize, Serialize};

use crate::metrics::SeekMetrics;
use crate::models::SeekSequence;
use crate::policies::Policy;

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the sequence.
    pub policy: Policy,
    /// Positions visited by the head.
    pub sequence: SeekSequence,
    /// Movement metrics of `sequence`.
    pub metrics: SeekMetrics,
}

impl SimulationReport {
    /// Builds a report, computing metrics from the sequence.
    pub fn new(policy: Policy, sequence: SeekSequence) -> Self {
        let metrics = SeekMetrics::calculate(&sequence);
        Self {
            policy,
            sequence,
            metrics,
        }
    }

    /// Total head movement.
    pub fn thm(&self) -> u64 {
        self.metrics.thm
    }

    /// Fractional THM reduction relative to `baseline`.
    ///
    /// 0.25 means 25% less head movement; negative values mean more.
    /// Returns 0.0 when the baseline did not move.
    pub fn improvement_over(&self, baseline: &SimulationReport) -> f64 {
        if baseline.thm() == 0 {
            return 0.0;
        }
        (baseline.thm() as f64 - self.thm() as f64) / baseline.thm() as f64
    }
}

/// Report with the lowest THM. Ties keep the earliest report.
pub fn best_policy(reports: &[SimulationReport]) -> Option<&SimulationReport> {
    reports.iter().min_by_key(|r| r.thm())
}
