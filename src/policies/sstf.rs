//! Shortest Seek Time First.

use log::trace;

use crate::error::Result;
use crate::models::{Direction, SeekSequence, Track};

/// Shortest Seek Time First.
///
/// Greedy nearest-neighbor: repeatedly services the pending request
/// closest to the *current* head position. Equidistant requests are
/// resolved in favour of the one that comes first in the pending list,
/// which keeps its arrival order as requests are removed.
///
/// # Complexity
/// O(n²): every pick rescans the pending list.
///
/// # Example
/// ```
/// use u_disksched::policies::sstf;
///
/// let seq = sstf(&[82, 170, 43, 140, 24, 16, 190], 50, 200, None).unwrap();
/// assert_eq!(seq.as_slice(), &[50, 43, 24, 16, 82, 140, 170, 190]);
/// ```
pub fn sstf(
    requests: &[Track],
    head: Track,
    _disk_size: i64,
    _direction: Option<Direction>,
) -> Result<SeekSequence> {
    let mut seq = SeekSequence::with_capacity(head, requests.len());
    let mut pending = requests.to_vec();
    let mut current = head;

    while !pending.is_empty() {
        let mut closest = 0;
        let mut min_distance = pending[0].abs_diff(current);
        for (i, &track) in pending.iter().enumerate().skip(1) {
            let distance = track.abs_diff(current);
            // Strict comparison: the first of equidistant requests wins
            if distance < min_distance {
                min_distance = distance;
                closest = i;
            }
        }

        let chosen = pending.remove(closest);
        trace!("SSTF: head {current} -> {chosen} (distance {min_distance})");
        seq.push(chosen);
        current = chosen;
    }

    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sstf_textbook_queue() {
        let seq = sstf(&[82, 170, 43, 140, 24, 16, 190], 50, 200, None).unwrap();
        assert_eq!(seq, vec![50, 43, 24, 16, 82, 140, 170, 190]);
    }

    #[test]
    fn test_sstf_each_pick_is_nearest() {
        let requests = [98, 183, 37, 122, 14, 124, 65, 67];
        let seq = sstf(&requests, 53, 200, None).unwrap();
        assert_eq!(seq, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);

        let mut pending = requests.to_vec();
        for pair in seq.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let nearest = pending.iter().map(|t| t.abs_diff(from)).min().unwrap();
            assert_eq!(to.abs_diff(from), nearest);
            let pos = pending.iter().position(|&t| t == to).unwrap();
            pending.remove(pos);
        }
        assert!(pending.is_empty());
    }

    #[test]
    fn test_sstf_tie_takes_first_in_queue() {
        // 40 and 60 are both 10 away from 50
        let seq = sstf(&[60, 40], 50, 100, None).unwrap();
        assert_eq!(seq, vec![50, 60, 40]);

        let seq = sstf(&[40, 60], 50, 100, None).unwrap();
        assert_eq!(seq, vec![50, 40, 60]);
    }

    #[test]
    fn test_sstf_tie_order_survives_removal() {
        // After servicing 50, both 45 and 55 are 5 away; 55 arrived first
        let seq = sstf(&[55, 50, 45], 50, 100, None).unwrap();
        assert_eq!(seq, vec![50, 50, 55, 45]);
    }

    #[test]
    fn test_sstf_duplicates() {
        let seq = sstf(&[30, 30, 70], 50, 100, None).unwrap();
        assert_eq!(seq, vec![50, 30, 30, 70]);
    }

    #[test]
    fn test_sstf_empty() {
        let seq = sstf(&[], 7, 10, None).unwrap();
        assert_eq!(seq, vec![7]);
    }
}
