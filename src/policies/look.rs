//! Request-bounded sweeps: LOOK and C-LOOK.
//!
//! Same partitioning as SCAN/C-SCAN, but the head never travels past the
//! outermost request, so `disk_size` is not consulted.

use super::{require_direction, Partition, Policy};
use crate::error::Result;
use crate::models::{Direction, SeekSequence, Track};

/// LOOK.
///
/// Sweeps in `direction` to the last request on that side, then reverses
/// immediately without visiting the disk edge.
///
/// # Example
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::policies::look;
///
/// let seq = look(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Some(Direction::Right)).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 82, 140, 170, 190, 43, 24, 16]);
/// ```
pub fn look(
    requests: &[Track],
    head: Track,
    _disk_size: i64,
    direction: Option<Direction>,
) -> Result<SeekSequence> {
    let direction = require_direction(Policy::Look, direction)?;
    let Partition {
        at_head,
        below,
        above,
    } = Partition::around(requests, head);

    let mut seq = SeekSequence::with_capacity(head, requests.len());
    seq.extend(at_head);

    match direction {
        Direction::Left => {
            seq.extend(below.into_iter().rev());
            seq.extend(above);
        }
        Direction::Right => {
            seq.extend(above);
            seq.extend(below.into_iter().rev());
        }
    }

    Ok(seq)
}

/// Circular LOOK.
///
/// Sweeps in `direction` to the last request on that side, then jumps
/// straight to the farthest request on the other side and continues in
/// the same direction.
///
/// # Example
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::policies::c_look;
///
/// let seq = c_look(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Some(Direction::Right)).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 82, 140, 170, 190, 16, 24, 43]);
/// ```
pub fn c_look(
    requests: &[Track],
    head: Track,
    _disk_size: i64,
    direction: Option<Direction>,
) -> Result<SeekSequence> {
    let direction = require_direction(Policy::CLook, direction)?;
    let Partition {
        at_head,
        below,
        above,
    } = Partition::around(requests, head);

    let mut seq = SeekSequence::with_capacity(head, requests.len());
    seq.extend(at_head);

    match direction {
        Direction::Right => {
            seq.extend(above);
            seq.extend(below);
        }
        Direction::Left => {
            seq.extend(below.into_iter().rev());
            seq.extend(above.into_iter().rev());
        }
    }

    Ok(seq)
}
