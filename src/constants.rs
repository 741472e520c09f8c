//! Grid constants: numeric parameters of the projection and the index bit layout.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;

/// General purpose threshold for floating point comparisons.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// Angular tolerance used when comparing coordinates, about 0.1mm on the ground.
pub const EPSILON_RAD: f64 = 0.000_000_001 * (consts::PI / 180.0);

/// sqrt(3) / 2.0, also sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// Square root of 7.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 0.377_964_473_009_227_2;
/// One third.
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// One seventh.
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III axes, asin(sqrt(3.0 / 28.0)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers (WGS84 authalic radius).
pub const EARTH_RADIUS_KM: f64 = 6_371.007_180_918_475;

/// Scale from resolution 0 hex2d unit length to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of `RES0_U_GNOMONIC`.
pub const INV_RES0_U_GNOMONIC: f64 = 2.618_033_988_749_896;

/// Finest resolution.
pub const MAX_RES: i32 = 15;
/// Faces of the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Resolution 0 cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Pentagons at every resolution.
pub const NUM_PENTAGONS: i32 = 12;
pub const NUM_HEX_VERTS: usize = 6;
pub const NUM_PENT_VERTS: usize = 5;
/// Worst case is a Class III pentagon: 5 vertices plus 5 edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

// Index bit layout.
pub const MODE_OFFSET: u32 = 59;
pub const RESERVED_OFFSET: u32 = 56;
pub const RES_OFFSET: u32 = 52;
pub const BC_OFFSET: u32 = 45;
pub const PER_DIGIT_OFFSET: u32 = 3;

pub const HIGH_BIT_MASK: u64 = 1 << 63;
pub const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
pub const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
pub const RES_MASK: u64 = 0b1111 << RES_OFFSET;
pub const BC_MASK: u64 = 0b111_1111 << BC_OFFSET;
pub const DIGIT_MASK: u64 = 0b111;
/// All fifteen digit slots set to 7.
pub const DIGITS_MASK: u64 = (1 << BC_OFFSET) - 1;

/// Mode value of a cell index.
pub const CELL_MODE: u8 = 1;

/// Mode 0, resolution 0, base cell 0, every digit 7.
pub const INDEX_INIT: u64 = 0x0000_1FFF_FFFF_FFFF;

/// Base cell number marking "no neighbour" (the collapsed pentagon direction).
pub const INVALID_BASE_CELL: i32 = 127;

/// Maximum edge length in radians at each resolution, sampled at base cell centres.
#[rustfmt::skip]
pub const MAX_EDGE_LENGTH_RADS: [f64; (MAX_RES + 1) as usize] = [
  0.215_772_062_651_30, 0.083_087_670_684_95, 0.031_489_704_364_39, 0.011_906_628_714_39,
  0.004_500_533_309_08, 0.001_701_055_236_19, 0.000_642_939_176_78, 0.000_243_008_206_59,
  0.000_091_848_470_87, 0.000_034_715_459_01, 0.000_013_121_210_17, 0.000_004_959_351_29,
  0.000_001_874_458_60, 0.000_000_708_478_76, 0.000_000_267_779_80, 0.000_000_101_211_25,
];

/// Average hexagon area in km^2 at each resolution.
#[rustfmt::skip]
pub(crate) const HEXAGON_AREA_AVG_KM2: [f64; (MAX_RES + 1) as usize] = [
  4.357_449_416_078_383e+06, 6.097_884_417_941_332e+05, 8.680_178_039_899_720e+04, 1.239_343_465_508_816e+04,
  1.770_347_654_491_307e+03, 2.529_038_581_819_449e+02, 3.612_906_216_441_245e+01, 5.161_293_359_717_191e+00,
  7.373_275_975_944_177e-01, 1.053_325_134_272_067e-01, 1.504_750_190_766_435e-02, 2.149_643_129_451_879e-03,
  3.070_918_756_316_060e-04, 4.387_026_794_728_296e-05, 6.267_181_135_324_313e-06, 8.953_115_907_605_790e-07,
];

/// Average hexagon edge length in km at each resolution.
#[rustfmt::skip]
pub(crate) const HEXAGON_EDGE_LENGTH_AVG_KM: [f64; (MAX_RES + 1) as usize] = [
  1281.256011, 483.056_839_1, 182.512_956_5, 68.979_221_79,
  26.071_759_68, 9.854_090_990, 3.724_532_667, 1.406_475_763,
  0.531_414_010, 0.200_786_148, 0.075_863_783, 0.028_663_897,
  0.010_830_188, 0.004_092_010, 0.001_546_100, 0.000_584_169,
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_index_init_layout() {
    assert_eq!(INDEX_INIT, DIGITS_MASK, "init value is all digits unused");
    assert_eq!(INDEX_INIT & (MODE_MASK | RES_MASK | BC_MASK | RESERVED_MASK | HIGH_BIT_MASK), 0);
  }

  #[test]
  fn test_masks_do_not_overlap() {
    let masks = [HIGH_BIT_MASK, MODE_MASK, RESERVED_MASK, RES_MASK, BC_MASK, DIGITS_MASK];
    let mut seen = 0u64;
    for m in masks {
      assert_eq!(seen & m, 0);
      seen |= m;
    }
    assert_eq!(seen, u64::MAX, "layout covers all 64 bits");
  }

  #[test]
  fn test_irrational_constants() {
    assert!((M_SQRT7 * M_SQRT7 - 7.0).abs() < 1e-12);
    assert!((M_SQRT7 * M_RSQRT7 - 1.0).abs() < 1e-15);
    assert!((RES0_U_GNOMONIC * INV_RES0_U_GNOMONIC - 1.0).abs() < 1e-15);
    assert!((M_AP7_ROT_RADS - (3.0f64 / 28.0).sqrt().asin()).abs() < 1e-15);
  }
}
