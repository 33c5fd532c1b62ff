//! Simulation runs and policy comparison.
//!
//! Bundles the four simulation parameters plus a policy name into a
//! serializable request, runs it through the registry, and attaches the
//! movement metrics to the resulting sequence.
//!
//! # Comparison
//!
//! `Simulator::compare` runs several policies on the same input so their
//! total head movement can be ranked against the FCFS baseline.

mod report;
mod simulator;

pub use report::{best_policy, SimulationReport};
pub use simulator::{SimulationRequest, Simulator};
