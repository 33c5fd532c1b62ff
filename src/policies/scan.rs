//! Edge-visiting sweeps: SCAN and C-SCAN.
//!
//! Both sweep toward a disk edge and must reach it before turning around
//! (SCAN) or wrapping to the opposite edge (C-SCAN), even when no request
//! sits at the edge. The edge is skipped only when the head is already
//! there, judged by the immediately preceding position alone.

use super::{last_track, require_direction, Partition, Policy};
use crate::error::Result;
use crate::models::{Direction, SeekSequence, Track};

/// SCAN (elevator).
///
/// Services requests at the head, sweeps in `direction` to the disk edge,
/// then reverses and services the rest.
///
/// # Errors
/// `MissingDirection` without a direction, `InvalidDiskSize` when
/// `disk_size <= 0`.
///
/// # Example
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::policies::scan;
///
/// let seq = scan(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Some(Direction::Right)).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 82, 140, 170, 190, 199, 43, 24, 16]);
/// ```
pub fn scan(
    requests: &[Track],
    head: Track,
    disk_size: i64,
    direction: Option<Direction>,
) -> Result<SeekSequence> {
    let direction = require_direction(Policy::Scan, direction)?;
    let far_edge = last_track(Policy::Scan, disk_size)?;

    let Partition {
        at_head,
        below,
        above,
    } = Partition::around(requests, head);

    let mut seq = SeekSequence::with_capacity(head, requests.len() + 1);
    seq.extend(at_head);

    match direction {
        Direction::Left => {
            seq.extend(below.into_iter().rev());
            seq.push_unless_last(0);
            seq.extend(above);
        }
        Direction::Right => {
            seq.extend(above);
            seq.push_unless_last(far_edge);
            seq.extend(below.into_iter().rev());
        }
    }

    Ok(seq)
}

/// Circular SCAN.
///
/// Sweeps in `direction` to the disk edge, then, if requests remain on
/// the other side, jumps to the opposite edge and keeps sweeping in the
/// same direction. The jump services nothing but counts as head movement.
///
/// # Errors
/// `MissingDirection` without a direction, `InvalidDiskSize` when
/// `disk_size <= 0`.
///
/// # Example
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::policies::c_scan;
///
/// let seq = c_scan(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Some(Direction::Right)).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 82, 140, 170, 190, 199, 0, 16, 24, 43]);
/// ```
pub fn c_scan(
    requests: &[Track],
    head: Track,
    disk_size: i64,
    direction: Option<Direction>,
) -> Result<SeekSequence> {
    let direction = require_direction(Policy::CScan, direction)?;
    let far_edge = last_track(Policy::CScan, disk_size)?;

    let Partition {
        at_head,
        below,
        above,
    } = Partition::around(requests, head);

    let mut seq = SeekSequence::with_capacity(head, requests.len() + 2);
    seq.extend(at_head);

    match direction {
        Direction::Right => {
            seq.extend(above);
            seq.push_unless_last(far_edge);
            if !below.is_empty() {
                seq.push(0);
                seq.extend(below);
            }
        }
        Direction::Left => {
            seq.extend(below.into_iter().rev());
            seq.push_unless_last(0);
            if !above.is_empty() {
                seq.push(far_edge);
                seq.extend(above.into_iter().rev());
            }
        }
    }

    Ok(seq)
}
