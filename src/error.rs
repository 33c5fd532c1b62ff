//! Error types for policy dispatch and seek sequence construction.
//!
//! All conditions stem from invalid caller input; none are transient, so
//! callers are expected to correct the input and re-invoke rather than retry.

use thiserror::Error;

use crate::policies::Policy;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchedulingError>;

/// Failure raised by the registry or by a scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// The policy name is not one of the registered names.
    #[error("unknown policy '{name}', valid options: {}", .valid.join(", "))]
    UnknownPolicy {
        /// The name that failed to resolve.
        name: String,
        /// All registered policy names.
        valid: Vec<&'static str>,
    },
    /// A sweeping policy was invoked without a direction.
    #[error("{policy} requires a direction (left or right)")]
    MissingDirection {
        /// The policy that needed the direction.
        policy: Policy,
    },
    /// A policy that consults the disk edges received a non-positive size.
    #[error("{policy} requires a positive disk size, got {disk_size}")]
    InvalidDiskSize {
        /// The policy that rejected the size.
        policy: Policy,
        /// The rejected size.
        disk_size: i64,
    },
    /// Text could not be parsed as a direction.
    #[error("invalid direction '{0}', expected 'left' or 'right'")]
    InvalidDirection(String),
}
