//! Policy registry: name → policy dispatch.
//!
//! The table is a process-wide constant; it is never mutated at runtime.
//! This is the single entry point a form, CLI or animation front end
//! calls with the user's chosen policy name.

use log::{debug, warn};
use std::str::FromStr;

use crate::error::{Result, SchedulingError};
use crate::models::{Direction, SeekSequence, Track};
use crate::policies::Policy;

/// Registered policies, keyed by canonical name.
const POLICY_TABLE: [(&str, Policy); 6] = [
    ("FCFS", Policy::Fcfs),
    ("SSTF", Policy::Sstf),
    ("SCAN", Policy::Scan),
    ("C-SCAN", Policy::CScan),
    ("LOOK", Policy::Look),
    ("C-LOOK", Policy::CLook),
];

/// Registered policy names, in table order.
pub fn names() -> Vec<&'static str> {
    POLICY_TABLE.iter().map(|(name, _)| *name).collect()
}

/// Resolves a policy by its canonical name (case-sensitive).
///
/// # Errors
/// [`SchedulingError::UnknownPolicy`] listing every registered name.
pub fn resolve(name: &str) -> Result<Policy> {
    POLICY_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, policy)| *policy)
        .ok_or_else(|| SchedulingError::UnknownPolicy {
            name: name.to_string(),
            valid: names(),
        })
}

/// Resolves `name` and builds its seek sequence.
///
/// Performs no validation of `requests`, `head` or `disk_size` beyond
/// what the resolved policy itself requires.
///
/// # Example
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::registry::resolve_and_run;
///
/// let seq = resolve_and_run("LOOK", &[82, 170, 43], 50, 200, Some(Direction::Left)).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 43, 82, 170]);
///
/// assert!(resolve_and_run("ELEVATOR", &[82], 50, 200, None).is_err());
/// ```
pub fn resolve_and_run(
    name: &str,
    requests: &[Track],
    head: Track,
    disk_size: i64,
    direction: Option<Direction>,
) -> Result<SeekSequence> {
    let policy = resolve(name).inspect_err(|e| warn!("{e}"))?;
    debug!(
        "running {policy}: {} requests, head {head}, disk size {disk_size}, direction {:?}",
        requests.len(),
        direction
    );

    let seq = policy
        .build(requests, head, disk_size, direction)
        .inspect_err(|e| warn!("{e}"))?;
    debug!("{policy} produced {} positions", seq.len());
    Ok(seq)
}

impl FromStr for Policy {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}
