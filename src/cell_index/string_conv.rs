// src/cell_index/string_conv.rs

use super::codec::is_valid_cell;
use crate::error::{GridError, Result};
use crate::types::CellIndex;
use std::fmt;
use std::str::FromStr;

/// Parses the hexadecimal form of a cell.
///
/// Accepts 15 or 16 hex digits in either case; the result must be a valid cell.
pub fn parse_cell(s: &str) -> Result<CellIndex> {
  if !(15..=16).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(GridError::MalformedIndex);
  }
  let h = u64::from_str_radix(s, 16)
    .map(CellIndex)
    .map_err(|_| GridError::MalformedIndex)?;
  if !is_valid_cell(h) {
    return Err(GridError::MalformedIndex);
  }
  Ok(h)
}

/// Lowercase hexadecimal form, zero padded to 15 digits.
#[must_use]
pub fn format_cell(h: CellIndex) -> String {
  h.to_string()
}

impl FromStr for CellIndex {
  type Err = GridError;

  fn from_str(s: &str) -> Result<Self> {
    parse_cell(s)
  }
}

impl fmt::Display for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:015x}", self.0)
  }
}

impl fmt::LowerHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}
