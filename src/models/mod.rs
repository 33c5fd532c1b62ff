//! Disk scheduling domain models.
//!
//! Provides the core data types shared by every scheduling policy:
//! track numbers, sweep direction, and the seek sequence a policy produces.
//!
//! # Domain Mappings
//!
//! | u-disksched | Hardware | Textbook |
//! |-------------|----------|----------|
//! | Track | Cylinder | Request position |
//! | Direction | Arm travel | Sweep direction |
//! | SeekSequence | Head trace | Order of service |

mod direction;
mod sequence;

pub use direction::Direction;
pub use sequence::SeekSequence;

/// A track (cylinder) number.
///
/// Valid tracks lie in `[0, disk_size - 1]`. Range checks belong to the
/// input boundary (see [`crate::validation`]); policies accept any value.
pub type Track = i64;
