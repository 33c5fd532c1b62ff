//! Head movement metrics.
//!
//! Derives movement figures from any seek sequence, independent of the
//! policy that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | THM | Σ \|seq[i] - seq[i-1]\| |
//! | Movements | \|seq[i] - seq[i-1]\| per step |
//! | Average seek length | THM / number of steps |
//! | Max movement | Largest single step |
//! | Direction changes | Reversals of travel, ignoring zero-length steps |
//!
//! The per-step list drives animation timing in front ends: a longer
//! movement takes proportionally longer to draw.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::Track;

/// Total Head Movement: sum of absolute differences between consecutive
/// positions. Zero for sequences of length 0 or 1. Saturates at `u64::MAX`.
///
/// # Example
/// ```
/// use u_disksched::metrics::total_head_movement;
///
/// assert_eq!(total_head_movement(&[50, 82, 170, 43]), 247);
/// ```
pub fn total_head_movement(seq: &[Track]) -> u64 {
    seq.windows(2)
        .map(|w| w[1].abs_diff(w[0]))
        .fold(0, u64::saturating_add)
}

/// Absolute movement of each step, `seq.len() - 1` entries (empty for
/// sequences of length 0 or 1).
pub fn per_step_movements(seq: &[Track]) -> Vec<u64> {
    seq.windows(2).map(|w| w[1].abs_diff(w[0])).collect()
}

/// Movement summary of a seek sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekMetrics {
    /// Total head movement (tracks).
    pub thm: u64,
    /// Per-step movements (tracks).
    pub movements: Vec<u64>,
    /// Mean movement per step (0.0 when there are no steps).
    pub average_seek_length: f64,
    /// Largest single movement (0 when there are no steps).
    pub max_movement: u64,
    /// Number of times the head reverses its travel direction.
    pub direction_changes: usize,
}

impl SeekMetrics {
    /// Computes all metrics for a seek sequence.
    pub fn calculate(seq: &[Track]) -> Self {
        let movements = per_step_movements(seq);
        let thm = movements.iter().copied().fold(0, u64::saturating_add);
        let max_movement = movements.iter().copied().max().unwrap_or(0);
        let average_seek_length = if movements.is_empty() {
            0.0
        } else {
            thm as f64 / movements.len() as f64
        };

        Self {
            thm,
            movements,
            average_seek_length,
            max_movement,
            direction_changes: count_direction_changes(seq),
        }
    }

    /// Number of head moves.
    pub fn step_count(&self) -> usize {
        self.movements.len()
    }
}

fn count_direction_changes(seq: &[Track]) -> usize {
    let mut changes = 0;
    let mut previous = Ordering::Equal;
    for w in seq.windows(2) {
        let step = w[1].cmp(&w[0]);
        if step == Ordering::Equal {
            continue;
        }
        if previous != Ordering::Equal && step != previous {
            changes += 1;
        }
        previous = step;
    }
    changes
}
