//! First Come First Serve.

use crate::error::Result;
use crate::models::{Direction, SeekSequence, Track};

/// First Come First Serve.
///
/// Services requests in arrival order with no reordering. This is the
/// baseline other policies are measured against. `disk_size` and
/// `direction` are accepted for a uniform signature and ignored.
///
/// # Example
/// ```
/// use u_disksched::policies::fcfs;
///
/// let seq = fcfs(&[82, 170, 43], 50, 200, None).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 82, 170, 43]);
/// ```
pub fn fcfs(
    requests: &[Track],
    head: Track,
    _disk_size: i64,
    _direction: Option<Direction>,
) -> Result<SeekSequence> {
    let mut seq = SeekSequence::with_capacity(head, requests.len());
    seq.extend(requests.iter().copied());
    Ok(seq)
}
