//! Input validation for disk scheduling simulations.
//!
//! The policies assume well-formed input. Front ends (forms, CLIs) use
//! these helpers to parse user text and reject bad input before calling
//! the registry. Detects:
//! - Empty request queues
//! - Non-integer tokens
//! - Non-positive disk sizes
//! - Head positions and request tracks outside `[0, disk_size - 1]`

use thiserror::Error;

use crate::models::Track;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request queue contains no tracks.
    EmptyQueue,
    /// A token is not an integer.
    InvalidToken,
    /// Disk size is zero or negative.
    InvalidDiskSize,
    /// The initial head lies outside the disk.
    HeadOutOfRange,
    /// A requested track lies outside the disk.
    TrackOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a comma-separated request queue such as `"82, 170,43"`.
///
/// Whitespace around tokens is ignored and empty tokens are skipped, so
/// trailing commas are accepted.
///
/// # Errors
/// `InvalidToken` for the first non-integer token, `EmptyQueue` if no
/// tokens remain.
pub fn parse_request_queue(text: &str) -> Result<Vec<Track>, ValidationError> {
    let mut requests = Vec::new();
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let track = token.parse::<Track>().map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::InvalidToken,
                format!("Request queue must contain only integers, found '{token}'"),
            )
        })?;
        requests.push(track);
    }

    if requests.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyQueue,
            "Request queue must contain at least one track",
        ));
    }
    Ok(requests)
}

/// Parses a single integer field (head position, disk size).
///
/// `field` names the input in the error message.
pub fn parse_field(field: &str, text: &str) -> Result<i64, ValidationError> {
    text.trim().parse::<i64>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidToken,
            format!("{field} must be a valid integer, found '{}'", text.trim()),
        )
    })
}

/// Validates simulation input.
///
/// Checks:
/// 1. The request queue is not empty
/// 2. Disk size is positive
/// 3. The head lies in `[0, disk_size - 1]`
/// 4. Every request lies in `[0, disk_size - 1]`
///
/// Range checks (3, 4) are skipped when the disk size is invalid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(requests: &[Track], head: Track, disk_size: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if requests.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyQueue,
            "Request queue must contain at least one track",
        ));
    }

    if disk_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskSize,
            format!("Disk size must be a positive integer, got {disk_size}"),
        ));
    } else {
        let range = 0..disk_size;

        if !range.contains(&head) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HeadOutOfRange,
                format!(
                    "Initial head {head} must be between 0 and {}",
                    disk_size - 1
                ),
            ));
        }

        for &track in requests {
            if !range.contains(&track) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TrackOutOfRange,
                    format!(
                        "Track {track} is out of range, must be between 0 and {}",
                        disk_size - 1
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
