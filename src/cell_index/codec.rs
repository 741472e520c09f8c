// src/cell_index/codec.rs

use super::{
  get_base_cell, get_high_bit, get_index_digit, get_mode, get_reserved_bits, get_resolution, init_cell,
  set_index_digit,
};
use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{CELL_MODE, MAX_RES, NUM_BASE_CELLS, PER_DIGIT_OFFSET};
use crate::error::{GridError, Result};
use crate::types::{CellIndex, Direction};

/// The digit sequence of a cell: one digit per resolution from 1 up to the
/// cell's own resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digits {
  digits: [Direction; MAX_RES as usize],
  len: usize,
}

impl Digits {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      digits: [Direction::Center; MAX_RES as usize],
      len: 0,
    }
  }

  /// Builds a sequence from raw digit values.
  ///
  /// Fails with `InvalidResolution` for more than 15 digits and `InvalidDigit`
  /// for any value above 6.
  pub fn from_slice(values: &[u8]) -> Result<Self> {
    if values.len() > MAX_RES as usize {
      return Err(GridError::InvalidResolution);
    }
    let mut out = Self::new();
    for &value in values {
      out.push(Direction::try_from(value)?)?;
    }
    Ok(out)
  }

  /// Appends one digit. `InvalidDigit` is never a digit.
  pub fn push(&mut self, digit: Direction) -> Result<()> {
    if digit == Direction::InvalidDigit {
      return Err(GridError::InvalidDigit);
    }
    if self.len == self.digits.len() {
      return Err(GridError::InvalidResolution);
    }
    self.digits[self.len] = digit;
    self.len += 1;
    Ok(())
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[must_use]
  pub fn as_slice(&self) -> &[Direction] {
    &self.digits[..self.len]
  }

  /// Digit for resolution `res` (1-based).
  #[must_use]
  pub fn get(&self, res: usize) -> Option<Direction> {
    res.checked_sub(1).and_then(|i| self.as_slice().get(i)).copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
    self.as_slice().iter().copied()
  }

  /// First digit that is not `Center`.
  #[must_use]
  pub fn leading_non_zero(&self) -> Option<Direction> {
    self.iter().find(|&d| d != Direction::Center)
  }
}

/// The fields of a decoded cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedCell {
  pub resolution: i32,
  pub base_cell: i32,
  pub digits: Digits,
}

impl DecodedCell {
  /// Packs the fields back into an index.
  pub fn encode(&self) -> Result<CellIndex> {
    check_fields(self.resolution, self.base_cell, &self.digits)?;
    Ok(pack(self.resolution, self.base_cell, &self.digits))
  }
}

fn check_fields(res: i32, base_cell: i32, digits: &Digits) -> Result<()> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  if digits.len() != res as usize {
    return Err(GridError::InvalidDigit);
  }
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return Err(GridError::InvalidBaseCell);
  }
  if is_base_cell_pentagon(base_cell) && digits.leading_non_zero() == Some(Direction::KAxes) {
    return Err(GridError::InvalidDigit);
  }
  Ok(())
}

fn pack(res: i32, base_cell: i32, digits: &Digits) -> CellIndex {
  let mut h = init_cell(res, base_cell, Direction::Center);
  for (r, digit) in (1..).zip(digits.iter()) {
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Packs a resolution, base cell and digit sequence into a cell index.
///
/// `digits` must hold exactly `res` values, each in `0..=6`. Cells on a
/// pentagon base cell may not have 1 (K) as their first non-zero digit.
///
/// # Errors
///
/// `InvalidResolution` outside `0..=15`, `InvalidBaseCell` outside `0..=121`,
/// `InvalidDigit` for a bad digit or a digit count that differs from `res`.
pub fn encode(res: i32, base_cell: i32, digits: &[u8]) -> Result<CellIndex> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidResolution);
  }
  let digits = Digits::from_slice(digits).map_err(|_| GridError::InvalidDigit)?;
  check_fields(res, base_cell, &digits)?;
  Ok(pack(res, base_cell, &digits))
}

/// Unpacks a cell index, rejecting anything that is not a valid cell.
///
/// # Errors
///
/// `MalformedIndex` when the high bit, mode or reserved bits are wrong, the
/// base cell is out of range, a used digit is 7, an unused digit is not 7, or
/// a pentagon cell starts with a K digit.
pub fn decode(h: CellIndex) -> Result<DecodedCell> {
  if get_high_bit(h) != 0 || get_mode(h) != CELL_MODE || get_reserved_bits(h) != 0 {
    return Err(GridError::MalformedIndex);
  }

  let res = get_resolution(h);
  let base_cell = get_base_cell(h);
  if base_cell >= NUM_BASE_CELLS {
    return Err(GridError::MalformedIndex);
  }

  let mut digits = Digits::new();
  for r in 1..=res {
    digits.push(get_index_digit(h, r)).map_err(|_| GridError::MalformedIndex)?;
  }

  // unused digits are all ones
  let unused_bits = (MAX_RES - res) as u32 * PER_DIGIT_OFFSET;
  let unused_mask = (1u64 << unused_bits) - 1;
  if h.0 & unused_mask != unused_mask {
    return Err(GridError::MalformedIndex);
  }

  if is_base_cell_pentagon(base_cell) && digits.leading_non_zero() == Some(Direction::KAxes) {
    return Err(GridError::MalformedIndex);
  }

  Ok(DecodedCell {
    resolution: res,
    base_cell,
    digits,
  })
}

/// Whether `h` is a well-formed cell index.
#[must_use]
pub fn is_valid_cell(h: CellIndex) -> bool {
  decode(h).is_ok()
}
