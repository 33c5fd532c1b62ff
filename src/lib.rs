//! Disk head scheduling simulation for the U-Engine ecosystem.
//!
//! Given a queue of track requests, an initial head position, a disk size
//! and (for sweeping policies) a direction, computes the order in which
//! the head visits tracks and the head movement that order costs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `Direction`, `SeekSequence`
//! - **`policies`**: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK and the `Policy` enum
//! - **`registry`**: Name → policy dispatch (`resolve_and_run`)
//! - **`metrics`**: Total head movement and per-step movements
//! - **`validation`**: Parsing and range checks for user input
//! - **`simulation`**: Serializable run requests, reports, policy comparison
//! - **`workload`**: Random request queues
//!
//! # Example
//!
//! ```
//! use u_disksched::models::Direction;
//!
//! let seq = u_disksched::run("C-SCAN", &[82, 170, 43, 140, 24, 16, 190], 50, 200, Some(Direction::Right)).unwrap();
//! assert_eq!(seq.as_slice(), &[50, 82, 140, 170, 190, 199, 0, 16, 24, 43]);
//!
//! let m = u_disksched::metrics(&seq);
//! assert_eq!(m.thm, 391);
//! assert_eq!(m.movements[5], 199); // the wrap-around jump
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod error;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod registry;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulingError};
pub use metrics::SeekMetrics;
pub use models::{Direction, SeekSequence, Track};
pub use policies::Policy;
pub use registry::resolve_and_run as run;

/// Movement metrics of a seek sequence.
pub fn metrics(seq: &[Track]) -> SeekMetrics {
    SeekMetrics::calculate(seq)
}
