//! Head sweep direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchedulingError;

/// Direction of head travel for sweeping policies.
///
/// Required by SCAN, C-SCAN, LOOK and C-LOOK. FCFS and SSTF ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Decreasing track numbers, toward track 0.
    Left,
    /// Increasing track numbers, toward `disk_size - 1`.
    Right,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase label (`"left"` / `"right"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(SchedulingError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" Right ".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(err, SchedulingError::InvalidDirection("up".into()));
    }

    #[test]
    fn test_reversed_and_display() {
        assert_eq!(Direction::Left.reversed(), Direction::Right);
        assert_eq!(Direction::Right.reversed(), Direction::Left);
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let dir: Direction = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(dir, Direction::Right);
    }
}
