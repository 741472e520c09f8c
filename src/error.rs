//! Error taxonomy shared by every fallible operation.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Failure categories.
///
/// Variants carry no payload and have stable numeric values so a binding layer
/// can map them onto its own error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// Resolution argument outside `0..=15`, or a target resolution on the wrong side
  /// of the cell's own resolution.
  #[error("resolution out of range")]
  InvalidResolution = 1,
  /// A digit is out of range for its position.
  #[error("digit out of range for its position")]
  InvalidDigit = 2,
  /// The handle does not decode to a valid cell.
  #[error("malformed cell index")]
  MalformedIndex = 3,
  /// The requested direction does not exist from this cell.
  #[error("direction is not available from this cell")]
  InvalidDirection = 4,
  /// A set operation was given cells at more than one resolution.
  #[error("cells span multiple resolutions")]
  MixedResolution = 5,
  /// Coordinate or numeric argument outside its domain (NaN, latitude beyond a pole, negative k).
  #[error("argument outside its domain")]
  DomainError = 6,
  /// Base cell number outside `0..=121`.
  #[error("base cell out of range")]
  InvalidBaseCell = 7,
  /// Two-cell operation on cells of different resolutions.
  #[error("cells have different resolutions")]
  ResolutionMismatch = 8,
  /// A local coordinate frame cannot be unfolded across pentagon distortion.
  #[error("pentagon distortion encountered")]
  PentagonDistortion = 9,
  /// The cells are too far apart to share a local coordinate frame.
  #[error("cells are too far apart")]
  TooFar = 10,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    assert_eq!(GridError::InvalidResolution.to_string(), "resolution out of range");
    assert_eq!(GridError::MixedResolution.to_string(), "cells span multiple resolutions");
  }

  #[test]
  fn test_error_codes_are_stable() {
    assert_eq!(GridError::InvalidResolution as u32, 1);
    assert_eq!(GridError::DomainError as u32, 6);
    assert_eq!(GridError::TooFar as u32, 10);
  }

  #[test]
  fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&GridError::MalformedIndex);
  }
}
