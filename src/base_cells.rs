//! Resolution 0 cell tables.
//!
//! The static tables are indexed by base cell number. Per-cell metadata that is
//! derived from them (the faces a base cell touches) is computed on first use.

use crate::constants::{INVALID_BASE_CELL, NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::error::{GridError, Result};
use crate::types::{CellShape, CoordIJK, Direction, FaceIJK};
use std::sync::OnceLock;
use tracing::debug;

const NO: i32 = INVALID_BASE_CELL;

/// Neighbouring base cell in each direction; `NO` where a pentagon has no K neighbour.
#[rustfmt::skip]
static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [  0,   1,   5,   2,   4,   3,   8],
  [  1,   7,   6,   9,   0,   3,   2],
  [  2,   6,  10,  11,   0,   1,   5],
  [  3,  13,   1,   7,   4,  12,   0],
  [  4,  NO,  15,   8,   3,   0,  12],
  [  5,   2,  18,  10,   8,   0,  16],
  [  6,  14,  11,  17,   1,   9,   2],
  [  7,  21,   9,  19,   3,  13,   1],
  [  8,   5,  22,  16,   4,   0,  15],
  [  9,  19,  14,  20,   1,   7,   6],
  [ 10,  11,  24,  23,   5,   2,  18],
  [ 11,  17,  23,  25,   2,   6,  10],
  [ 12,  28,  13,  26,   4,  15,   3],
  [ 13,  26,  21,  29,   3,  12,   7],
  [ 14,  NO,  17,  27,   9,  20,   6],
  [ 15,  22,  28,  31,   4,   8,  12],
  [ 16,  18,  33,  30,   8,   5,  22],
  [ 17,  11,  14,   6,  35,  25,  27],
  [ 18,  24,  30,  32,   5,  10,  16],
  [ 19,  34,  20,  36,   7,  21,   9],
  [ 20,  14,  19,   9,  40,  27,  36],
  [ 21,  38,  19,  34,  13,  29,   7],
  [ 22,  16,  41,  33,  15,   8,  31],
  [ 23,  24,  11,  10,  39,  37,  25],
  [ 24,  NO,  32,  37,  10,  23,  18],
  [ 25,  23,  17,  11,  45,  39,  35],
  [ 26,  42,  29,  43,  12,  28,  13],
  [ 27,  40,  35,  46,  14,  20,  17],
  [ 28,  31,  42,  44,  12,  15,  26],
  [ 29,  43,  38,  47,  13,  26,  21],
  [ 30,  32,  48,  50,  16,  18,  33],
  [ 31,  41,  44,  53,  15,  22,  28],
  [ 32,  30,  24,  18,  52,  50,  37],
  [ 33,  30,  49,  48,  22,  16,  41],
  [ 34,  19,  38,  21,  54,  36,  51],
  [ 35,  46,  45,  56,  17,  27,  25],
  [ 36,  20,  34,  19,  55,  40,  54],
  [ 37,  39,  52,  57,  24,  23,  32],
  [ 38,  NO,  34,  51,  29,  47,  21],
  [ 39,  37,  25,  23,  59,  57,  45],
  [ 40,  27,  36,  20,  60,  46,  55],
  [ 41,  49,  53,  61,  22,  33,  31],
  [ 42,  58,  43,  62,  28,  44,  26],
  [ 43,  62,  47,  64,  26,  42,  29],
  [ 44,  53,  58,  65,  28,  31,  42],
  [ 45,  39,  35,  25,  63,  59,  56],
  [ 46,  60,  56,  68,  27,  40,  35],
  [ 47,  38,  43,  29,  69,  51,  64],
  [ 48,  49,  30,  33,  67,  66,  50],
  [ 49,  NO,  61,  66,  33,  48,  41],
  [ 50,  48,  32,  30,  70,  67,  52],
  [ 51,  69,  54,  71,  38,  47,  34],
  [ 52,  57,  70,  74,  32,  37,  50],
  [ 53,  61,  65,  75,  31,  41,  44],
  [ 54,  71,  55,  73,  34,  51,  36],
  [ 55,  40,  54,  36,  72,  60,  73],
  [ 56,  68,  63,  77,  35,  46,  45],
  [ 57,  59,  74,  78,  37,  39,  52],
  [ 58,  NO,  62,  76,  44,  65,  42],
  [ 59,  63,  78,  79,  39,  45,  57],
  [ 60,  72,  68,  80,  40,  55,  46],
  [ 61,  53,  49,  41,  81,  75,  66],
  [ 62,  43,  58,  42,  82,  64,  76],
  [ 63,  NO,  56,  45,  79,  59,  77],
  [ 64,  47,  62,  43,  84,  69,  82],
  [ 65,  58,  53,  44,  86,  76,  75],
  [ 66,  67,  81,  85,  49,  48,  61],
  [ 67,  66,  50,  48,  87,  85,  70],
  [ 68,  56,  60,  46,  90,  77,  80],
  [ 69,  51,  64,  47,  89,  71,  84],
  [ 70,  67,  52,  50,  83,  87,  74],
  [ 71,  89,  73,  91,  51,  69,  54],
  [ 72,  NO,  73,  55,  80,  60,  88],
  [ 73,  91,  72,  88,  54,  71,  55],
  [ 74,  78,  83,  92,  52,  57,  70],
  [ 75,  65,  61,  53,  94,  86,  81],
  [ 76,  86,  82,  96,  58,  65,  62],
  [ 77,  63,  68,  56,  93,  79,  90],
  [ 78,  74,  59,  57,  95,  92,  79],
  [ 79,  78,  63,  59,  93,  95,  77],
  [ 80,  68,  72,  60,  99,  90,  88],
  [ 81,  85,  94, 101,  61,  66,  75],
  [ 82,  96,  84,  98,  62,  76,  64],
  [ 83,  NO,  74,  70, 100,  87,  92],
  [ 84,  69,  82,  64,  97,  89,  98],
  [ 85,  87, 101, 102,  66,  67,  81],
  [ 86,  76,  75,  65, 104,  96,  94],
  [ 87,  83, 102, 100,  67,  70,  85],
  [ 88,  72,  91,  73,  99,  80, 105],
  [ 89,  97,  91, 103,  69,  84,  71],
  [ 90,  77,  80,  68, 106,  93,  99],
  [ 91,  73,  89,  71, 105,  88, 103],
  [ 92,  83,  78,  74, 108, 100,  95],
  [ 93,  79,  90,  77, 109,  95, 106],
  [ 94,  86,  81,  75, 107, 104, 101],
  [ 95,  92,  79,  78, 109, 108,  93],
  [ 96, 104,  98, 110,  76,  86,  82],
  [ 97,  NO,  98,  84, 103,  89, 111],
  [ 98, 110,  97, 111,  82,  96,  84],
  [ 99,  80, 105,  88, 106,  90, 113],
  [100, 102,  83,  87, 108, 114,  92],
  [101, 102, 107, 112,  81,  85,  94],
  [102, 101,  87,  85, 114, 112, 100],
  [103,  91,  97,  89, 116, 105, 111],
  [104, 107, 110, 115,  86,  94,  96],
  [105,  88, 103,  91, 113,  99, 116],
  [106,  93,  99,  90, 117, 109, 113],
  [107,  NO, 101,  94, 115, 104, 112],
  [108, 100,  95,  92, 118, 114, 109],
  [109, 108,  93,  95, 117, 118, 106],
  [110,  98, 104,  96, 119, 111, 115],
  [111,  97, 110,  98, 116, 103, 119],
  [112, 107, 102, 101, 120, 115, 114],
  [113,  99, 116, 105, 117, 106, 121],
  [114, 112, 100, 102, 118, 120, 108],
  [115, 110, 107, 104, 120, 119, 112],
  [116, 103, 119, 111, 113, 105, 121],
  [117,  NO, 109, 118, 113, 121, 106],
  [118, 120, 108, 114, 117, 121, 109],
  [119, 111, 115, 110, 121, 116, 120],
  [120, 115, 114, 112, 121, 119, 118],
  [121, 116, 120, 119, 117, 113, 118],
];

/// Counter-clockwise 60 degree rotations into the coordinate system of each neighbour.
#[rustfmt::skip]
static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [ 0,  5,  0,  0,  1,  5,  1],
  [ 0,  0,  1,  0,  1,  0,  1],
  [ 0,  0,  0,  0,  0,  5,  0],
  [ 0,  5,  0,  0,  2,  5,  1],
  [ 0, -1,  1,  0,  3,  4,  2],
  [ 0,  0,  1,  0,  1,  0,  1],
  [ 0,  0,  0,  3,  5,  5,  0],
  [ 0,  0,  0,  0,  0,  5,  0],
  [ 0,  5,  0,  0,  0,  5,  1],
  [ 0,  0,  1,  3,  0,  0,  1],
  [ 0,  0,  1,  3,  0,  0,  1],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  5,  0,  0,  3,  5,  1],
  [ 0,  0,  1,  0,  1,  0,  1],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  5,  0,  0,  4,  5,  1],
  [ 0,  0,  0,  0,  0,  5,  0],
  [ 0,  3,  3,  3,  3,  0,  3],
  [ 0,  0,  0,  3,  5,  5,  0],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  3,  3,  3,  0,  3,  0],
  [ 0,  0,  0,  3,  5,  5,  0],
  [ 0,  0,  1,  0,  1,  0,  1],
  [ 0,  3,  3,  3,  0,  3,  0],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  0,  0,  3,  0,  0,  3],
  [ 0,  0,  0,  0,  0,  5,  0],
  [ 0,  3,  0,  0,  0,  3,  3],
  [ 0,  0,  1,  0,  1,  0,  1],
  [ 0,  0,  1,  3,  0,  0,  1],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  0,  0,  0,  5,  0],
  [ 0,  3,  3,  3,  3,  0,  3],
  [ 0,  0,  1,  3,  0,  0,  1],
  [ 0,  3,  3,  3,  3,  0,  3],
  [ 0,  0,  3,  0,  3,  0,  3],
  [ 0,  0,  0,  3,  0,  0,  3],
  [ 0,  3,  0,  0,  0,  3,  3],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  3,  0,  0,  3,  3,  0],
  [ 0,  3,  0,  0,  3,  3,  0],
  [ 0,  0,  0,  3,  5,  5,  0],
  [ 0,  0,  0,  3,  5,  5,  0],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  1,  3,  0,  0,  1],
  [ 0,  0,  3,  0,  0,  3,  3],
  [ 0,  0,  0,  3,  0,  3,  0],
  [ 0,  3,  3,  3,  0,  3,  0],
  [ 0,  3,  3,  3,  0,  3,  0],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  0,  0,  3,  0,  0,  3],
  [ 0,  3,  0,  0,  0,  3,  3],
  [ 0,  0,  3,  0,  3,  0,  3],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  3,  0,  3,  0,  3],
  [ 0,  0,  3,  0,  0,  3,  3],
  [ 0,  3,  3,  3,  0,  0,  3],
  [ 0,  0,  0,  3,  0,  3,  0],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  3,  3,  3,  3,  3,  0],
  [ 0,  3,  3,  3,  3,  3,  0],
  [ 0,  3,  3,  3,  3,  0,  3],
  [ 0,  3,  3,  3,  3,  0,  3],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  0,  0,  3,  0,  0,  3],
  [ 0,  3,  3,  3,  0,  3,  0],
  [ 0,  3,  0,  0,  0,  3,  3],
  [ 0,  3,  0,  0,  3,  3,  0],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  3,  0,  0,  3,  3,  0],
  [ 0,  0,  3,  0,  0,  3,  3],
  [ 0,  0,  0,  3,  0,  3,  0],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  3,  3,  3,  0,  0,  3],
  [ 0,  3,  3,  3,  0,  0,  3],
  [ 0,  0,  0,  3,  0,  0,  3],
  [ 0,  3,  0,  0,  0,  3,  3],
  [ 0,  0,  0,  3,  0,  5,  0],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  1,  3,  1,  0,  1],
  [ 0,  0,  1,  3,  1,  0,  1],
  [ 0,  0,  3,  0,  3,  0,  3],
  [ 0,  0,  3,  0,  3,  0,  3],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  0,  3,  0,  0,  3,  3],
  [ 0,  0,  0,  3,  0,  3,  0],
  [ 0,  3,  0,  0,  3,  3,  0],
  [ 0,  3,  3,  3,  3,  3,  0],
  [ 0,  0,  0,  3,  0,  5,  0],
  [ 0,  3,  3,  3,  3,  3,  0],
  [ 0,  0,  0,  0,  0,  0,  1],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  0,  3,  0,  5,  0],
  [ 0,  5,  0,  0,  5,  5,  0],
  [ 0,  0,  3,  0,  0,  3,  3],
  [ 0,  0,  0,  0,  0,  0,  1],
  [ 0,  0,  0,  3,  0,  3,  0],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  3,  3,  3,  0,  0,  3],
  [ 0,  5,  0,  0,  5,  5,  0],
  [ 0,  0,  1,  3,  1,  0,  1],
  [ 0,  3,  3,  3,  0,  0,  3],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  1,  3,  1,  0,  1],
  [ 0,  3,  3,  3,  3,  3,  0],
  [ 0,  0,  0,  0,  0,  0,  1],
  [ 0,  0,  1,  0,  3,  5,  1],
  [ 0, -1,  3,  0,  5,  2,  0],
  [ 0,  5,  0,  0,  5,  5,  0],
  [ 0,  0,  1,  0,  4,  5,  1],
  [ 0,  3,  3,  3,  0,  0,  0],
  [ 0,  0,  0,  3,  0,  5,  0],
  [ 0,  0,  0,  3,  0,  5,  0],
  [ 0,  0,  1,  0,  2,  5,  1],
  [ 0,  0,  0,  0,  0,  0,  1],
  [ 0,  0,  1,  3,  1,  0,  1],
  [ 0,  5,  0,  0,  5,  5,  0],
  [ 0, -1,  1,  0,  3,  4,  2],
  [ 0,  0,  1,  0,  0,  5,  1],
  [ 0,  0,  0,  0,  0,  0,  1],
  [ 0,  5,  0,  0,  5,  5,  0],
  [ 0,  0,  1,  0,  1,  5,  1],
];

/// Home face and normalized IJK coordinate of each base cell.
#[rustfmt::skip]
static BASE_CELL_HOMES: [(i32, [i32; 3]); NUM_BASE_CELLS as usize] = [
  ( 1, [1, 0, 0]), ( 2, [1, 1, 0]), ( 1, [0, 0, 0]), ( 2, [1, 0, 0]),
  ( 0, [2, 0, 0]), ( 1, [1, 1, 0]), ( 1, [0, 0, 1]), ( 2, [0, 0, 0]),
  ( 0, [1, 0, 0]), ( 2, [0, 1, 0]), ( 1, [0, 1, 0]), ( 1, [0, 1, 1]),
  ( 3, [1, 0, 0]), ( 3, [1, 1, 0]), (11, [2, 0, 0]), ( 4, [1, 0, 0]),
  ( 0, [0, 0, 0]), ( 6, [0, 1, 0]), ( 0, [0, 0, 1]), ( 2, [0, 1, 1]),
  ( 7, [0, 0, 1]), ( 2, [0, 0, 1]), ( 0, [1, 1, 0]), ( 6, [0, 0, 1]),
  (10, [2, 0, 0]), ( 6, [0, 0, 0]), ( 3, [0, 0, 0]), (11, [1, 0, 0]),
  ( 4, [1, 1, 0]), ( 3, [0, 1, 0]), ( 0, [0, 1, 1]), ( 4, [0, 0, 0]),
  ( 5, [0, 1, 0]), ( 0, [0, 1, 0]), ( 7, [0, 1, 0]), (11, [1, 1, 0]),
  ( 7, [0, 0, 0]), (10, [1, 0, 0]), (12, [2, 0, 0]), ( 6, [1, 0, 1]),
  ( 7, [1, 0, 1]), ( 4, [0, 0, 1]), ( 3, [0, 0, 1]), ( 3, [0, 1, 1]),
  ( 4, [0, 1, 0]), ( 6, [1, 0, 0]), (11, [0, 0, 0]), ( 8, [0, 0, 1]),
  ( 5, [0, 0, 1]), (14, [2, 0, 0]), ( 5, [0, 0, 0]), (12, [1, 0, 0]),
  (10, [1, 1, 0]), ( 4, [0, 1, 1]), (12, [1, 1, 0]), ( 7, [1, 0, 0]),
  (11, [0, 1, 0]), (10, [0, 0, 0]), (13, [2, 0, 0]), (10, [0, 0, 1]),
  (11, [0, 0, 1]), ( 9, [0, 1, 0]), ( 8, [0, 1, 0]), ( 6, [2, 0, 0]),
  ( 8, [0, 0, 0]), ( 9, [0, 0, 1]), (14, [1, 0, 0]), ( 5, [1, 0, 1]),
  (16, [0, 1, 1]), ( 8, [1, 0, 1]), ( 5, [1, 0, 0]), (12, [0, 0, 0]),
  ( 7, [2, 0, 0]), (12, [0, 1, 0]), (10, [0, 1, 0]), ( 9, [0, 0, 0]),
  (13, [1, 0, 0]), (16, [0, 0, 1]), (15, [0, 1, 1]), (15, [0, 1, 0]),
  (16, [0, 1, 0]), (14, [1, 1, 0]), (13, [1, 1, 0]), ( 5, [2, 0, 0]),
  ( 8, [1, 0, 0]), (14, [0, 0, 0]), ( 9, [1, 0, 1]), (14, [0, 0, 1]),
  (17, [0, 0, 1]), (12, [0, 0, 1]), (16, [0, 0, 0]), (17, [0, 1, 1]),
  (15, [0, 0, 1]), (16, [1, 0, 1]), ( 9, [1, 0, 0]), (15, [0, 0, 0]),
  (13, [0, 0, 0]), ( 8, [2, 0, 0]), (13, [0, 1, 0]), (17, [1, 0, 1]),
  (19, [0, 1, 0]), (14, [0, 1, 0]), (19, [0, 1, 1]), (17, [0, 1, 0]),
  (13, [0, 0, 1]), (17, [0, 0, 0]), (16, [1, 0, 0]), ( 9, [2, 0, 0]),
  (15, [1, 0, 1]), (15, [1, 0, 0]), (18, [0, 1, 1]), (18, [0, 0, 1]),
  (19, [0, 0, 1]), (17, [1, 0, 0]), (19, [0, 0, 0]), (18, [0, 1, 0]),
  (18, [1, 0, 1]), (19, [2, 0, 0]), (19, [1, 0, 0]), (18, [0, 0, 0]),
  (19, [1, 0, 1]), (18, [1, 0, 0]),
];

/// Pentagon base cells with their clockwise offset faces. The polar pentagons have none.
#[rustfmt::skip]
static PENTAGONS: [(i32, Option<[i32; 2]>); 12] = [
  (4, None),
  (14, Some([2, 6])),
  (24, Some([1, 5])),
  (38, Some([3, 7])),
  (49, Some([0, 9])),
  (58, Some([4, 8])),
  (63, Some([11, 15])),
  (72, Some([12, 16])),
  (83, Some([10, 19])),
  (97, Some([13, 17])),
  (107, Some([14, 18])),
  (117, None),
];

/// `(base cell, counter-clockwise rotations)` indexed by `[i][j][k]` on one face.
type FaceBaseCells = [[[(u8, u8); 3]; 3]; 3];

/// Base cell and its counter-clockwise rotation for each resolution 0 IJK on each face.
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [FaceBaseCells; NUM_ICOSA_FACES as usize] = [
  // face 0
  [
    [[( 16, 0), ( 18, 0), ( 24, 0)], [( 33, 0), ( 30, 0), ( 32, 3)], [( 49, 1), ( 48, 3), ( 50, 3)]],
    [[(  8, 0), (  5, 5), ( 10, 5)], [( 22, 0), ( 16, 0), ( 18, 0)], [( 41, 1), ( 33, 0), ( 30, 0)]],
    [[(  4, 0), (  0, 5), (  2, 5)], [( 15, 1), (  8, 0), (  5, 5)], [( 31, 1), ( 22, 0), ( 16, 0)]],
  ],
  // face 1
  [
    [[(  2, 0), (  6, 0), ( 14, 0)], [( 10, 0), ( 11, 0), ( 17, 3)], [( 24, 1), ( 23, 3), ( 25, 3)]],
    [[(  0, 0), (  1, 5), (  9, 5)], [(  5, 0), (  2, 0), (  6, 0)], [( 18, 1), ( 10, 0), ( 11, 0)]],
    [[(  4, 1), (  3, 5), (  7, 5)], [(  8, 1), (  0, 0), (  1, 5)], [( 16, 1), (  5, 0), (  2, 0)]],
  ],
  // face 2
  [
    [[(  7, 0), ( 21, 0), ( 38, 0)], [(  9, 0), ( 19, 0), ( 34, 3)], [( 14, 1), ( 20, 3), ( 36, 3)]],
    [[(  3, 0), ( 13, 5), ( 29, 5)], [(  1, 0), (  7, 0), ( 21, 0)], [(  6, 1), (  9, 0), ( 19, 0)]],
    [[(  4, 2), ( 12, 5), ( 26, 5)], [(  0, 1), (  3, 0), ( 13, 5)], [(  2, 1), (  1, 0), (  7, 0)]],
  ],
  // face 3
  [
    [[( 26, 0), ( 42, 0), ( 58, 0)], [( 29, 0), ( 43, 0), ( 62, 3)], [( 38, 1), ( 47, 3), ( 64, 3)]],
    [[( 12, 0), ( 28, 5), ( 44, 5)], [( 13, 0), ( 26, 0), ( 42, 0)], [( 21, 1), ( 29, 0), ( 43, 0)]],
    [[(  4, 3), ( 15, 5), ( 31, 5)], [(  3, 1), ( 12, 0), ( 28, 5)], [(  7, 1), ( 13, 0), ( 26, 0)]],
  ],
  // face 4
  [
    [[( 31, 0), ( 41, 0), ( 49, 0)], [( 44, 0), ( 53, 0), ( 61, 3)], [( 58, 1), ( 65, 3), ( 75, 3)]],
    [[( 15, 0), ( 22, 5), ( 33, 5)], [( 28, 0), ( 31, 0), ( 41, 0)], [( 42, 1), ( 44, 0), ( 53, 0)]],
    [[(  4, 4), (  8, 5), ( 16, 5)], [( 12, 1), ( 15, 0), ( 22, 5)], [( 26, 1), ( 28, 0), ( 31, 0)]],
  ],
  // face 5
  [
    [[( 50, 0), ( 48, 0), ( 49, 3)], [( 32, 0), ( 30, 3), ( 33, 3)], [( 24, 3), ( 18, 3), ( 16, 3)]],
    [[( 70, 0), ( 67, 0), ( 66, 3)], [( 52, 3), ( 50, 0), ( 48, 0)], [( 37, 3), ( 32, 0), ( 30, 3)]],
    [[( 83, 0), ( 87, 3), ( 85, 3)], [( 74, 3), ( 70, 0), ( 67, 0)], [( 57, 1), ( 52, 3), ( 50, 0)]],
  ],
  // face 6
  [
    [[( 25, 0), ( 23, 0), ( 24, 3)], [( 17, 0), ( 11, 3), ( 10, 3)], [( 14, 3), (  6, 3), (  2, 3)]],
    [[( 45, 0), ( 39, 0), ( 37, 3)], [( 35, 3), ( 25, 0), ( 23, 0)], [( 27, 3), ( 17, 0), ( 11, 3)]],
    [[( 63, 0), ( 59, 3), ( 57, 3)], [( 56, 3), ( 45, 0), ( 39, 0)], [( 46, 3), ( 35, 3), ( 25, 0)]],
  ],
  // face 7
  [
    [[( 36, 0), ( 20, 0), ( 14, 3)], [( 34, 0), ( 19, 3), (  9, 3)], [( 38, 3), ( 21, 3), (  7, 3)]],
    [[( 55, 0), ( 40, 0), ( 27, 3)], [( 54, 3), ( 36, 0), ( 20, 0)], [( 51, 3), ( 34, 0), ( 19, 3)]],
    [[( 72, 0), ( 60, 3), ( 46, 3)], [( 73, 3), ( 55, 0), ( 40, 0)], [( 71, 3), ( 54, 3), ( 36, 0)]],
  ],
  // face 8
  [
    [[( 64, 0), ( 47, 0), ( 38, 3)], [( 62, 0), ( 43, 3), ( 29, 3)], [( 58, 3), ( 42, 3), ( 26, 3)]],
    [[( 84, 0), ( 69, 0), ( 51, 3)], [( 82, 3), ( 64, 0), ( 47, 0)], [( 76, 3), ( 62, 0), ( 43, 3)]],
    [[( 97, 0), ( 89, 3), ( 71, 3)], [( 98, 3), ( 84, 0), ( 69, 0)], [( 96, 3), ( 82, 3), ( 64, 0)]],
  ],
  // face 9
  [
    [[( 75, 0), ( 65, 0), ( 58, 3)], [( 61, 0), ( 53, 3), ( 44, 3)], [( 49, 3), ( 41, 3), ( 31, 3)]],
    [[( 94, 0), ( 86, 0), ( 76, 3)], [( 81, 3), ( 75, 0), ( 65, 0)], [( 66, 3), ( 61, 0), ( 53, 3)]],
    [[(107, 0), (104, 3), ( 96, 3)], [(101, 3), ( 94, 0), ( 86, 0)], [( 85, 3), ( 81, 3), ( 75, 0)]],
  ],
  // face 10
  [
    [[( 57, 0), ( 59, 0), ( 63, 3)], [( 74, 0), ( 78, 3), ( 79, 3)], [( 83, 3), ( 92, 3), ( 95, 3)]],
    [[( 37, 0), ( 39, 3), ( 45, 3)], [( 52, 0), ( 57, 0), ( 59, 0)], [( 70, 3), ( 74, 0), ( 78, 3)]],
    [[( 24, 0), ( 23, 3), ( 25, 3)], [( 32, 3), ( 37, 0), ( 39, 3)], [( 50, 3), ( 52, 0), ( 57, 0)]],
  ],
  // face 11
  [
    [[( 46, 0), ( 60, 0), ( 72, 3)], [( 56, 0), ( 68, 3), ( 80, 3)], [( 63, 3), ( 77, 3), ( 90, 3)]],
    [[( 27, 0), ( 40, 3), ( 55, 3)], [( 35, 0), ( 46, 0), ( 60, 0)], [( 45, 3), ( 56, 0), ( 68, 3)]],
    [[( 14, 0), ( 20, 3), ( 36, 3)], [( 17, 3), ( 27, 0), ( 40, 3)], [( 25, 3), ( 35, 0), ( 46, 0)]],
  ],
  // face 12
  [
    [[( 71, 0), ( 89, 0), ( 97, 3)], [( 73, 0), ( 91, 3), (103, 3)], [( 72, 3), ( 88, 3), (105, 3)]],
    [[( 51, 0), ( 69, 3), ( 84, 3)], [( 54, 0), ( 71, 0), ( 89, 0)], [( 55, 3), ( 73, 0), ( 91, 3)]],
    [[( 38, 0), ( 47, 3), ( 64, 3)], [( 34, 3), ( 51, 0), ( 69, 3)], [( 36, 3), ( 54, 0), ( 71, 0)]],
  ],
  // face 13
  [
    [[( 96, 0), (104, 0), (107, 3)], [( 98, 0), (110, 3), (115, 3)], [( 97, 3), (111, 3), (119, 3)]],
    [[( 76, 0), ( 86, 3), ( 94, 3)], [( 82, 0), ( 96, 0), (104, 0)], [( 84, 3), ( 98, 0), (110, 3)]],
    [[( 58, 0), ( 65, 3), ( 75, 3)], [( 62, 3), ( 76, 0), ( 86, 3)], [( 64, 3), ( 82, 0), ( 96, 0)]],
  ],
  // face 14
  [
    [[( 85, 0), ( 87, 0), ( 83, 3)], [(101, 0), (102, 3), (100, 3)], [(107, 3), (112, 3), (114, 3)]],
    [[( 66, 0), ( 67, 3), ( 70, 3)], [( 81, 0), ( 85, 0), ( 87, 0)], [( 94, 3), (101, 0), (102, 3)]],
    [[( 49, 0), ( 48, 3), ( 50, 3)], [( 61, 3), ( 66, 0), ( 67, 3)], [( 75, 3), ( 81, 0), ( 85, 0)]],
  ],
  // face 15
  [
    [[( 95, 0), ( 92, 0), ( 83, 0)], [( 79, 0), ( 78, 0), ( 74, 3)], [( 63, 1), ( 59, 3), ( 57, 3)]],
    [[(109, 0), (108, 0), (100, 5)], [( 93, 1), ( 95, 0), ( 92, 0)], [( 77, 1), ( 79, 0), ( 78, 0)]],
    [[(117, 4), (118, 5), (114, 5)], [(106, 1), (109, 0), (108, 0)], [( 90, 1), ( 93, 1), ( 95, 0)]],
  ],
  // face 16
  [
    [[( 90, 0), ( 77, 0), ( 63, 0)], [( 80, 0), ( 68, 0), ( 56, 3)], [( 72, 1), ( 60, 3), ( 46, 3)]],
    [[(106, 0), ( 93, 0), ( 79, 5)], [( 99, 1), ( 90, 0), ( 77, 0)], [( 88, 1), ( 80, 0), ( 68, 0)]],
    [[(117, 3), (109, 5), ( 95, 5)], [(113, 1), (106, 0), ( 93, 0)], [(105, 1), ( 99, 1), ( 90, 0)]],
  ],
  // face 17
  [
    [[(105, 0), ( 88, 0), ( 72, 0)], [(103, 0), ( 91, 0), ( 73, 3)], [( 97, 1), ( 89, 3), ( 71, 3)]],
    [[(113, 0), ( 99, 0), ( 80, 5)], [(116, 1), (105, 0), ( 88, 0)], [(111, 1), (103, 0), ( 91, 0)]],
    [[(117, 2), (106, 5), ( 90, 5)], [(121, 1), (113, 0), ( 99, 0)], [(119, 1), (116, 1), (105, 0)]],
  ],
  // face 18
  [
    [[(119, 0), (111, 0), ( 97, 0)], [(115, 0), (110, 0), ( 98, 3)], [(107, 1), (104, 3), ( 96, 3)]],
    [[(121, 0), (116, 0), (103, 5)], [(120, 1), (119, 0), (111, 0)], [(112, 1), (115, 0), (110, 0)]],
    [[(117, 1), (113, 5), (105, 5)], [(118, 1), (121, 0), (116, 0)], [(114, 1), (120, 1), (119, 0)]],
  ],
  // face 19
  [
    [[(114, 0), (112, 0), (107, 0)], [(100, 0), (102, 0), (101, 3)], [( 83, 1), ( 87, 3), ( 85, 3)]],
    [[(118, 0), (120, 0), (115, 5)], [(108, 1), (114, 0), (112, 0)], [( 92, 1), (100, 0), (102, 0)]],
    [[(117, 0), (121, 5), (119, 5)], [(109, 1), (118, 0), (120, 0)], [( 95, 1), (108, 1), (114, 0)]],
  ],
];

/// Metadata of one resolution 0 cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCell {
  number: i32,
  home: FaceIJK,
  shape: CellShape,
  cw_offset_faces: Option<[i32; 2]>,
  faces: [i32; 5],
  face_count: usize,
}

impl BaseCell {
  #[must_use]
  pub fn number(&self) -> i32 {
    self.number
  }

  /// Home face and the cell's IJK position on it.
  #[must_use]
  pub fn home(&self) -> FaceIJK {
    self.home
  }

  #[must_use]
  pub fn shape(&self) -> CellShape {
    self.shape
  }

  #[must_use]
  pub fn is_pentagon(&self) -> bool {
    self.shape == CellShape::Pentagon
  }

  /// Pentagons centred on the poles (base cells 4 and 117).
  #[must_use]
  pub fn is_polar_pentagon(&self) -> bool {
    self.is_pentagon() && self.cw_offset_faces.is_none()
  }

  /// For non-polar pentagons, the two faces whose coordinate systems are
  /// rotated clockwise relative to the pentagon's home face.
  #[must_use]
  pub fn cw_offset_faces(&self) -> Option<[i32; 2]> {
    self.cw_offset_faces
  }

  /// Faces on which the base cell centre lies, ascending.
  #[must_use]
  pub fn faces(&self) -> &[i32] {
    &self.faces[..self.face_count]
  }
}

fn pentagon_entry(base_cell: i32) -> Option<&'static (i32, Option<[i32; 2]>)> {
  PENTAGONS.iter().find(|(bc, _)| *bc == base_cell)
}

fn build_metadata() -> Vec<BaseCell> {
  let mut cells: Vec<BaseCell> = (0..NUM_BASE_CELLS)
    .map(|number| {
      let pentagon = pentagon_entry(number);
      BaseCell {
        number,
        home: home_face_ijk(number),
        shape: if pentagon.is_some() {
          CellShape::Pentagon
        } else {
          CellShape::Hexagon
        },
        cw_offset_faces: pentagon.and_then(|(_, cw)| *cw),
        faces: [0; 5],
        face_count: 0,
      }
    })
    .collect();

  for (face, table) in FACE_IJK_BASE_CELLS.iter().enumerate() {
    for (i, plane) in table.iter().enumerate() {
      for (j, row) in plane.iter().enumerate() {
        for (k, &(bc, _)) in row.iter().enumerate() {
          // resolution 0 positions lie in the face triangle: normalized with sum <= 2
          if i + j + k > 2 || i.min(j).min(k) != 0 {
            continue;
          }
          let cell = &mut cells[usize::from(bc)];
          if cell.face_count < cell.faces.len() {
            cell.faces[cell.face_count] = face as i32;
            cell.face_count += 1;
          }
        }
      }
    }
  }

  debug!(base_cells = cells.len(), "base cell metadata initialised");
  cells
}

fn metadata() -> &'static [BaseCell] {
  static METADATA: OnceLock<Vec<BaseCell>> = OnceLock::new();
  METADATA.get_or_init(build_metadata)
}

/// Metadata for base cell `number`.
pub fn base_cell(number: i32) -> Result<&'static BaseCell> {
  usize::try_from(number)
    .ok()
    .and_then(|n| metadata().get(n))
    .ok_or(GridError::InvalidBaseCell)
}

/// All 122 base cells in number order.
#[must_use]
pub fn base_cells() -> &'static [BaseCell] {
  metadata()
}

#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  pentagon_entry(base_cell).is_some()
}

#[inline]
#[must_use]
pub(crate) fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

/// Whether `face` is one of the clockwise offset faces of pentagon `base_cell`.
#[must_use]
pub(crate) fn is_cw_offset(base_cell: i32, face: i32) -> bool {
  matches!(pentagon_entry(base_cell), Some((_, Some(faces))) if faces.contains(&face))
}

/// Home face and coordinate. `base_cell` must be in range.
#[must_use]
pub(crate) fn home_face_ijk(base_cell: i32) -> FaceIJK {
  let (face, [i, j, k]) = BASE_CELL_HOMES[base_cell as usize];
  FaceIJK {
    face,
    coord: CoordIJK { i, j, k },
  }
}

fn face_ijk_entry(h: &FaceIJK) -> Option<(u8, u8)> {
  let f = usize::try_from(h.face).ok()?;
  let i = usize::try_from(h.coord.i).ok()?;
  let j = usize::try_from(h.coord.j).ok()?;
  let k = usize::try_from(h.coord.k).ok()?;
  FACE_IJK_BASE_CELLS.get(f)?.get(i)?.get(j)?.get(k).copied()
}

/// Base cell at a resolution 0 face position, or `None` outside `0..=2` on any axis.
#[must_use]
pub(crate) fn face_ijk_to_base_cell(h: &FaceIJK) -> Option<i32> {
  face_ijk_entry(h).map(|(bc, _)| i32::from(bc))
}

/// Counter-clockwise rotations from the face's coordinate system into the base cell's.
#[must_use]
pub(crate) fn face_ijk_to_base_cell_ccw_rot60(h: &FaceIJK) -> Option<i32> {
  face_ijk_entry(h).map(|(_, rot)| i32::from(rot))
}

/// Neighbouring base cell in `dir`, or `INVALID_BASE_CELL`.
#[must_use]
pub(crate) fn base_cell_neighbor(base_cell: i32, dir: Direction) -> i32 {
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

#[must_use]
pub(crate) fn base_cell_neighbor_rotations(base_cell: i32, dir: Direction) -> i32 {
  BASE_CELL_NEIGHBOR_60CCW_ROTS[base_cell as usize][dir as usize]
}

/// Direction from `origin` to the adjacent base cell `neighbor`.
///
/// Returns `InvalidDigit` when the cells are not adjacent.
#[must_use]
pub(crate) fn base_cell_direction(origin: i32, neighbor: i32) -> Direction {
  Direction::NEIGHBORS
    .into_iter()
    .chain(std::iter::once(Direction::Center))
    .find(|&dir| base_cell_neighbor(origin, dir) == neighbor)
    .unwrap_or(Direction::InvalidDigit)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pentagon_count_and_polar() {
    let pentagons: Vec<i32> = base_cells().iter().filter(|c| c.is_pentagon()).map(BaseCell::number).collect();
    assert_eq!(pentagons, vec![4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117]);
    let polar: Vec<i32> = base_cells()
      .iter()
      .filter(|c| c.is_polar_pentagon())
      .map(BaseCell::number)
      .collect();
    assert_eq!(polar, vec![4, 117]);
    for bc in pentagons {
      assert_eq!(base_cell_neighbor(bc, Direction::KAxes), INVALID_BASE_CELL, "pentagon {bc} has no K neighbour");
    }
  }

  #[test]
  fn test_home_round_trips_through_face_table() {
    for cell in base_cells() {
      let home = cell.home();
      assert_eq!(face_ijk_to_base_cell(&home), Some(cell.number()));
      assert_eq!(face_ijk_to_base_cell_ccw_rot60(&home), Some(0), "home has no rotation");
      assert!(cell.faces().contains(&home.face), "home face listed for {}", cell.number());
    }
  }

  #[test]
  fn test_face_counts() {
    let mut counts = [0; 6];
    for cell in base_cells() {
      counts[cell.faces().len()] += 1;
      if cell.is_pentagon() {
        assert_eq!(cell.faces().len(), 5, "pentagon {} sits on an icosahedron vertex", cell.number());
      }
    }
    assert_eq!(counts, [0, 80, 30, 0, 0, 12]);
    assert_eq!(base_cell(117).map(BaseCell::faces), Ok(&[15, 16, 17, 18, 19][..]));
  }

  #[test]
  fn test_base_cell_lookup_bounds() {
    assert_eq!(base_cell(-1), Err(GridError::InvalidBaseCell));
    assert_eq!(base_cell(122), Err(GridError::InvalidBaseCell));
    assert_eq!(base_cell(0).map(BaseCell::number), Ok(0));
    let out_of_face = FaceIJK {
      face: 0,
      coord: CoordIJK { i: 3, j: 0, k: 0 },
    };
    assert_eq!(face_ijk_to_base_cell(&out_of_face), None);
  }

  #[test]
  fn test_neighbor_tables_are_symmetric() {
    for origin in 0..NUM_BASE_CELLS {
      for dir in Direction::NEIGHBORS {
        let n = base_cell_neighbor(origin, dir);
        if n == INVALID_BASE_CELL {
          continue;
        }
        let back = base_cell_direction(n, origin);
        assert!(back.is_movement(), "{n} points back to {origin}");
        assert_eq!(base_cell_direction(origin, n), dir);
      }
    }
    assert_eq!(base_cell_direction(0, 0), Direction::Center);
    assert_eq!(base_cell_direction(0, 121), Direction::InvalidDigit);
  }

  #[test]
  fn test_cw_offsets() {
    assert!(is_cw_offset(14, 2));
    assert!(is_cw_offset(14, 6));
    assert!(!is_cw_offset(14, 1));
    assert!(!is_cw_offset(4, 0), "polar pentagons have no offset faces");
    assert!(!is_cw_offset(0, 2), "hexagons have no offset faces");
    assert_eq!(base_cell(107).map(BaseCell::cw_offset_faces), Ok(Some([14, 18])));
  }
}
