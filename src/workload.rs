//! Random request workloads.
//!
//! Generates request queues for experiments and policy comparisons.
//! The caller supplies the RNG, so seeded generators give reproducible
//! workloads.

use rand::Rng;

use crate::models::Track;

/// Draws `count` tracks uniformly from `[0, disk_size - 1]`.
///
/// Duplicates may occur. Returns an empty queue when `disk_size <= 0`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_disksched::workload::random_requests;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let requests = random_requests(10, 200, &mut rng);
/// assert_eq!(requests.len(), 10);
/// assert!(requests.iter().all(|&t| (0..200).contains(&t)));
/// ```
pub fn random_requests<R: Rng>(count: usize, disk_size: i64, rng: &mut R) -> Vec<Track> {
    if disk_size <= 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.random_range(0..disk_size)).collect()
}

/// Draws a head position uniformly from `[0, disk_size - 1]`.
///
/// Returns `None` when `disk_size <= 0`.
pub fn random_head<R: Rng>(disk_size: i64, rng: &mut R) -> Option<Track> {
    (disk_size > 0).then(|| rng.random_range(0..disk_size))
}

/// Draws `count` tracks clustered around `center` within `spread` tracks,
/// clamped to the disk. Models localized access patterns where SSTF and
/// LOOK shine.
pub fn clustered_requests<R: Rng>(
    count: usize,
    disk_size: i64,
    center: Track,
    spread: i64,
    rng: &mut R,
) -> Vec<Track> {
    if disk_size <= 0 {
        return Vec::new();
    }
    let spread = spread.max(0);
    (0..count)
        .map(|_| {
            let offset = rng.random_range(-spread..=spread);
            center.saturating_add(offset).clamp(0, disk_size - 1)
        })
        .collect()
}
