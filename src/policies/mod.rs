//! Disk head scheduling policies.
//!
//! Each policy is a pure function from a request queue, an initial head
//! position, a disk size and an optional direction to the [`SeekSequence`]
//! the head follows. The six policies form a closed set behind the
//! [`Policy`] enum; they share a signature but no state.
//!
//! # Policies
//!
//! | Policy | Reorders | Direction | Visits disk edges |
//! |--------|----------|-----------|-------------------|
//! | FCFS | no | ignored | no |
//! | SSTF | nearest first | ignored | no |
//! | SCAN | sweep, reverse | required | yes, then reverses |
//! | C-SCAN | sweep, wrap | required | yes, jumps to opposite edge |
//! | LOOK | sweep, reverse | required | no |
//! | C-LOOK | sweep, wrap | required | no |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2 (HDD Scheduling)

mod fcfs;
mod look;
mod scan;
mod sstf;

pub use fcfs::fcfs;
pub use look::{c_look, look};
pub use scan::{c_scan, scan};
pub use sstf::sstf;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SchedulingError};
use crate::models::{Direction, SeekSequence, Track};

/// A disk scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First Come First Serve.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator: sweep to the disk edge, then reverse.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN: sweep to the edge, jump to the opposite edge.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// Sweep to the last request, then reverse.
    #[serde(rename = "LOOK")]
    Look,
    /// Circular LOOK: sweep to the last request, jump to the farthest one.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Policy {
    /// Every policy, in registry order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Canonical policy name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// Policy description.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Serve",
            Policy::Sstf => "Shortest Seek Time First",
            Policy::Scan => "Elevator",
            Policy::CScan => "Circular SCAN",
            Policy::Look => "Look-ahead elevator",
            Policy::CLook => "Circular LOOK",
        }
    }

    /// Whether the policy needs a [`Direction`].
    pub fn requires_direction(self) -> bool {
        !matches!(self, Policy::Fcfs | Policy::Sstf)
    }

    /// Whether the policy consults the disk size for edge positions.
    pub fn uses_disk_edges(self) -> bool {
        matches!(self, Policy::Scan | Policy::CScan)
    }

    /// Builds the seek sequence for this policy.
    ///
    /// # Errors
    /// - [`SchedulingError::MissingDirection`] if the policy sweeps and
    ///   `direction` is `None`.
    /// - [`SchedulingError::InvalidDiskSize`] if the policy visits disk
    ///   edges and `disk_size <= 0`.
    pub fn build(
        self,
        requests: &[Track],
        head: Track,
        disk_size: i64,
        direction: Option<Direction>,
    ) -> Result<SeekSequence> {
        match self {
            Policy::Fcfs => fcfs(requests, head, disk_size, direction),
            Policy::Sstf => sstf(requests, head, disk_size, direction),
            Policy::Scan => scan(requests, head, disk_size, direction),
            Policy::CScan => c_scan(requests, head, disk_size, direction),
            Policy::Look => look(requests, head, disk_size, direction),
            Policy::CLook => c_look(requests, head, disk_size, direction),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requests split around the head position.
///
/// `below` and `above` are sorted ascending; callers reverse as needed.
#[derive(Debug, Default)]
struct Partition {
    at_head: Vec<Track>,
    below: Vec<Track>,
    above: Vec<Track>,
}

impl Partition {
    fn around(requests: &[Track], head: Track) -> Self {
        let mut partition = Self::default();
        for &track in requests {
            match track.cmp(&head) {
                std::cmp::Ordering::Less => partition.below.push(track),
                std::cmp::Ordering::Equal => partition.at_head.push(track),
                std::cmp::Ordering::Greater => partition.above.push(track),
            }
        }
        partition.below.sort_unstable();
        partition.above.sort_unstable();
        partition
    }
}

fn require_direction(policy: Policy, direction: Option<Direction>) -> Result<Direction> {
    direction.ok_or(SchedulingError::MissingDirection { policy })
}

/// Highest addressable track.
fn last_track(policy: Policy, disk_size: i64) -> Result<Track> {
    if disk_size <= 0 {
        return Err(SchedulingError::InvalidDiskSize { policy, disk_size });
    }
    Ok(disk_size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE: [Track; 7] = [82, 170, 43, 140, 24, 16, 190];

    #[test]
    fn test_partition() {
        let p = Partition::around(&[82, 50, 43, 170, 50, 16], 50);
        assert_eq!(p.at_head, vec![50, 50]);
        assert_eq!(p.below, vec![16, 43]);
        assert_eq!(p.above, vec![82, 170]);
    }

    #[test]
    fn test_every_policy_starts_at_head() {
        for policy in Policy::ALL {
            for dir in [Direction::Left, Direction::Right] {
                let seq = policy.build(&QUEUE, 50, 200, Some(dir)).unwrap();
                assert_eq!(seq[0], 50, "{policy} {dir}");
            }
        }
    }

    #[test]
    fn test_every_policy_services_each_request_once() {
        let requests = [82, 170, 43, 43, 140, 24, 50, 16, 190, 199, 0];
        for policy in Policy::ALL {
            for dir in [Direction::Left, Direction::Right] {
                let seq = policy.build(&requests, 50, 200, Some(dir)).unwrap();
                let mut leftover = seq.visits().to_vec();
                for track in requests {
                    let pos = leftover.iter().position(|&t| t == track);
                    assert!(pos.is_some(), "{policy} {dir}: {track} not serviced");
                    leftover.remove(pos.unwrap());
                }

                // Only edge visits may remain, and only for edge policies
                if policy.uses_disk_edges() {
                    assert!(leftover.iter().all(|&t| t == 0 || t == 199), "{policy} {dir}");
                } else {
                    assert!(leftover.is_empty(), "{policy} {dir}");
                }
            }
        }
    }

    #[test]
    fn test_empty_queue_is_well_defined() {
        for policy in Policy::ALL {
            let seq = policy.build(&[], 50, 200, Some(Direction::Right)).unwrap();
            assert_eq!(seq[0], 50);
            if !policy.uses_disk_edges() {
                assert_eq!(seq, vec![50]);
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let requests = QUEUE.to_vec();
        for policy in Policy::ALL {
            policy
                .build(&requests, 50, 200, Some(Direction::Left))
                .unwrap();
        }
        assert_eq!(requests, QUEUE.to_vec());
    }

    #[test]
    fn test_missing_direction() {
        for policy in Policy::ALL {
            let result = policy.build(&QUEUE, 50, 200, None);
            if policy.requires_direction() {
                assert_eq!(result, Err(SchedulingError::MissingDirection { policy }));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn test_invalid_disk_size_only_for_edge_policies() {
        for policy in Policy::ALL {
            for disk_size in [0, -5] {
                let result = policy.build(&QUEUE, 50, disk_size, Some(Direction::Right));
                if policy.uses_disk_edges() {
                    assert_eq!(
                        result,
                        Err(SchedulingError::InvalidDiskSize { policy, disk_size })
                    );
                } else {
                    assert!(result.is_ok());
                }
            }
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Policy::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
        let policy: Policy = serde_json::from_str("\"C-LOOK\"").unwrap();
        assert_eq!(policy, Policy::CLook);
    }
}
