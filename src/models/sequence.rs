//! Seek sequence (solution) model.
//!
//! A seek sequence is the ordered list of tracks the head visits while
//! servicing a request queue. The first element is always the initial
//! head position; SCAN and C-SCAN may add disk-edge positions that
//! service no request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use super::Track;

/// Ordered track positions visited by the disk head.
///
/// Dereferences to `[Track]`, so slice methods (`len`, `iter`, `first`,
/// `windows`, indexing) are available directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeekSequence(Vec<Track>);

impl SeekSequence {
    /// Starts a sequence at the initial head position.
    pub fn starting_at(head: Track) -> Self {
        Self(vec![head])
    }

    /// Starts a sequence with room for `additional` visits after the head.
    pub(crate) fn with_capacity(head: Track, additional: usize) -> Self {
        let mut positions = Vec::with_capacity(additional + 1);
        positions.push(head);
        Self(positions)
    }

    /// Appends a visit.
    pub(crate) fn push(&mut self, track: Track) {
        self.0.push(track);
    }

    /// Appends a visit unless the head already sits at `track`.
    ///
    /// Only the immediately preceding position is compared.
    pub(crate) fn push_unless_last(&mut self, track: Track) {
        if self.0.last() != Some(&track) {
            self.0.push(track);
        }
    }

    /// Initial head position (`None` only for a default-constructed sequence).
    pub fn head(&self) -> Option<Track> {
        self.0.first().copied()
    }

    /// Visits after the initial head position.
    pub fn visits(&self) -> &[Track] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Number of head moves (`len - 1`, or 0 for an empty sequence).
    pub fn step_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Borrows the positions as a slice.
    pub fn as_slice(&self) -> &[Track] {
        &self.0
    }

    /// Consumes the sequence, returning the positions.
    pub fn into_vec(self) -> Vec<Track> {
        self.0
    }
}

impl Deref for SeekSequence {
    type Target = [Track];

    fn deref(&self) -> &[Track] {
        &self.0
    }
}

impl AsRef<[Track]> for SeekSequence {
    fn as_ref(&self) -> &[Track] {
        &self.0
    }
}

impl Extend<Track> for SeekSequence {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl From<Vec<Track>> for SeekSequence {
    fn from(positions: Vec<Track>) -> Self {
        Self(positions)
    }
}

impl From<SeekSequence> for Vec<Track> {
    fn from(seq: SeekSequence) -> Self {
        seq.0
    }
}

impl PartialEq<Vec<Track>> for SeekSequence {
    fn eq(&self, other: &Vec<Track>) -> bool {
        &self.0 == other
    }
}

impl fmt::Display for SeekSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{track}")?;
        }
        Ok(())
    }
}
