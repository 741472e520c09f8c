//! Icosahedral projection: faces, gnomonic face coordinates and the per-face
//! IJK lattices, including the crossing of face edges.

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7, NUM_ICOSA_FACES,
  RES0_U_GNOMONIC,
};
use crate::coords::ijk::to_hex_coord;
use crate::coords::is_class_iii;
use crate::error::{GridError, Result};
use crate::geo::{az_distance_rads, azimuth_rads, pos_angle_rads};
use crate::math::{to_geo_coord, to_vector3};
use crate::types::{CellBoundary, CoordIJK, FaceCoord, FaceIJK, GeoCoord, Vec2d, Vec3d};
use std::sync::OnceLock;
use tracing::trace;

/// How to move into an adjacent face's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceOrientIJK {
  pub(crate) face: i32,
  /// Resolution 0 translation relative to the primary face.
  pub(crate) translate: CoordIJK,
  /// Counter-clockwise 60 degree rotations relative to the primary face.
  pub(crate) ccw_rot60: i32,
}

const fn orient(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK { i, j, k },
    ccw_rot60,
  }
}

pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// Largest coordinate sum still on the face, by Class II resolution.
#[rustfmt::skip]
const MAX_DIM_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Resolution 0 unit length expressed at each Class II resolution.
#[rustfmt::skip]
const UNIT_SCALE_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Vertex offsets of a cell centre in the aperture 3 substrate grid.
const VERTS_CII: [CoordIJK; 6] = [
  CoordIJK::new(2, 1, 0),
  CoordIJK::new(1, 2, 0),
  CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2),
  CoordIJK::new(1, 0, 2),
  CoordIJK::new(2, 0, 1),
];

const VERTS_CIII: [CoordIJK; 6] = [
  CoordIJK::new(5, 4, 0),
  CoordIJK::new(1, 5, 0),
  CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5),
  CoordIJK::new(4, 0, 5),
  CoordIJK::new(5, 0, 1),
];

/// Dot products closer than this count as a tie between faces.
const FACE_TIE_TOLERANCE: f64 = 1e-12;

/// Face centres as coordinates.
#[rustfmt::skip]
static FACE_CENTER_GEO: [GeoCoord; NUM_ICOSA_FACES as usize] = [
  GeoCoord::new(0.803_582_649_718_989_94, 1.248_397_419_617_396),
  GeoCoord::new(1.307_747_883_455_638_2, 2.536_945_009_877_921),
  GeoCoord::new(1.054_751_253_523_952, -1.347_517_358_900_396_6),
  GeoCoord::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75),
  GeoCoord::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94),
  GeoCoord::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7),
  GeoCoord::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6),
  GeoCoord::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4),
  GeoCoord::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74),
  GeoCoord::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349),
  GeoCoord::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5),
  GeoCoord::new(0.230_961_644_455_383_64, -2.635_097_066_257_444),
  GeoCoord::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5),
  GeoCoord::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62),
  GeoCoord::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508),
  GeoCoord::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5),
  GeoCoord::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3),
  GeoCoord::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397),
  GeoCoord::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1),
  GeoCoord::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6),
];

/// Face centres on the unit sphere.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d::new(0.219_930_779_140_460_6, 0.658_369_178_027_499_6, 0.719_847_537_892_618_2),
  Vec3d::new(-0.213_923_483_450_142_1, 0.147_817_182_955_070_3, 0.965_601_793_521_420_5),
  Vec3d::new(0.109_262_527_878_479_7, -0.481_195_157_287_321, 0.869_777_512_128_725_3),
  Vec3d::new(0.742_856_730_158_679_1, -0.359_394_167_827_802_8, 0.564_800_593_651_703_3),
  Vec3d::new(0.811_253_470_914_096_9, 0.344_895_323_763_938_4, 0.472_138_773_641_393),
  Vec3d::new(-0.105_549_814_961_392_1, 0.979_445_729_641_141_3, 0.171_887_461_000_936_5),
  Vec3d::new(-0.807_540_757_997_009_2, 0.153_355_248_589_881_8, 0.569_526_199_488_268_8),
  Vec3d::new(-0.284_614_806_978_790_7, -0.864_408_097_265_420_6, 0.414_479_255_247_354),
  Vec3d::new(0.740_562_147_385_448_2, -0.667_329_956_456_552_4, -0.078_983_764_632_673_77),
  Vec3d::new(0.851_230_398_647_429_3, 0.472_234_378_858_268_1, -0.228_913_738_868_780_8),
  Vec3d::new(-0.740_562_147_385_448_1, 0.667_329_956_456_552_4, 0.078_983_764_632_673_77),
  Vec3d::new(-0.851_230_398_647_429_2, -0.472_234_378_858_268_2, 0.228_913_738_868_780_8),
  Vec3d::new(0.105_549_814_961_391_9, -0.979_445_729_641_141_3, -0.171_887_461_000_936_5),
  Vec3d::new(0.807_540_757_997_009_2, -0.153_355_248_589_881_9, -0.569_526_199_488_268_8),
  Vec3d::new(0.284_614_806_978_790_8, 0.864_408_097_265_420_4, -0.414_479_255_247_354),
  Vec3d::new(-0.742_856_730_158_679_1, 0.359_394_167_827_802_7, -0.564_800_593_651_703_3),
  Vec3d::new(-0.811_253_470_914_097_1, -0.344_895_323_763_938_2, -0.472_138_773_641_393),
  Vec3d::new(-0.219_930_779_140_460_7, -0.658_369_178_027_499_6, -0.719_847_537_892_618_2),
  Vec3d::new(0.213_923_483_450_142, -0.147_817_182_955_070_4, -0.965_601_793_521_420_5),
  Vec3d::new(-0.109_262_527_878_479_6, 0.481_195_157_287_321, -0.869_777_512_128_725_3),
];

/// Azimuths from each face centre to the face's three vertices; the first is the i-axis.
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7],
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796],
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7],
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5],
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3],
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4],
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346],
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6],
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7],
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6],
];

/// Each face itself, then its neighbours across the IJ, KI and JK edges.
#[rustfmt::skip]
static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [orient( 0, 0, 0, 0, 0), orient( 4, 2, 0, 2, 1), orient( 1, 2, 2, 0, 5), orient( 5, 0, 2, 2, 3)],
  [orient( 1, 0, 0, 0, 0), orient( 0, 2, 0, 2, 1), orient( 2, 2, 2, 0, 5), orient( 6, 0, 2, 2, 3)],
  [orient( 2, 0, 0, 0, 0), orient( 1, 2, 0, 2, 1), orient( 3, 2, 2, 0, 5), orient( 7, 0, 2, 2, 3)],
  [orient( 3, 0, 0, 0, 0), orient( 2, 2, 0, 2, 1), orient( 4, 2, 2, 0, 5), orient( 8, 0, 2, 2, 3)],
  [orient( 4, 0, 0, 0, 0), orient( 3, 2, 0, 2, 1), orient( 0, 2, 2, 0, 5), orient( 9, 0, 2, 2, 3)],
  [orient( 5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient( 0, 0, 2, 2, 3)],
  [orient( 6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient( 1, 0, 2, 2, 3)],
  [orient( 7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient( 2, 0, 2, 2, 3)],
  [orient( 8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient( 3, 0, 2, 2, 3)],
  [orient( 9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient( 4, 0, 2, 2, 3)],
  [orient(10, 0, 0, 0, 0), orient( 5, 2, 2, 0, 3), orient( 6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)],
  [orient(11, 0, 0, 0, 0), orient( 6, 2, 2, 0, 3), orient( 7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)],
  [orient(12, 0, 0, 0, 0), orient( 7, 2, 2, 0, 3), orient( 8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)],
  [orient(13, 0, 0, 0, 0), orient( 8, 2, 2, 0, 3), orient( 9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)],
  [orient(14, 0, 0, 0, 0), orient( 9, 2, 2, 0, 3), orient( 5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)],
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)],
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)],
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)],
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)],
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)],
];

/// Quadrant of `from` through which `to` is reached: 0 for the face itself,
/// `None` when the faces do not share an edge.
pub(crate) fn adjacent_face_dir(from: i32, to: i32) -> Option<usize> {
  static ADJACENT: OnceLock<[[Option<usize>; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize]> = OnceLock::new();
  let table = ADJACENT.get_or_init(|| {
    let mut table = [[None; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize];
    for (f, row) in FACE_NEIGHBORS.iter().enumerate() {
      table[f][f] = Some(0);
      for quadrant in [IJ_QUADRANT, KI_QUADRANT, JK_QUADRANT] {
        table[f][row[quadrant].face as usize] = Some(quadrant);
      }
    }
    trace!("face adjacency table initialised");
    table
  });
  let from = usize::try_from(from).ok()?;
  let to = usize::try_from(to).ok()?;
  *table.get(from)?.get(to)?
}

/// Result of moving a coordinate into the face that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  OnFace,
  /// On a face edge; only possible with substrate grids.
  FaceEdge,
  /// Moved onto a new face.
  NewFace,
}

/// Distance outside the resolution 0 face triangle, or 0 inside it.
///
/// The triangle has vertices `(2, 0)`, `(-1, sqrt3)` and `(-1, -sqrt3)`; each
/// edge lies at distance 1 from the centre.
fn off_face_residual(p: &Vec2d) -> f64 {
  let normals = [(0.5, M_SQRT3_2), (-1.0, 0.0), (0.5, -M_SQRT3_2)];
  normals
    .iter()
    .map(|(nx, ny)| nx * p.x + ny * p.y - 1.0)
    .fold(0.0, f64::max)
}

/// Gnomonic coordinate of `g` on `face`, in resolution 0 Class II hex units.
///
/// `sqd` is the squared chord distance from the face centre.
fn face_local(g: &GeoCoord, face: usize, sqd: f64) -> Vec2d {
  let r = (1.0 - sqd * 0.5).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return Vec2d::default();
  }
  let theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face][0] - pos_angle_rads(azimuth_rads(&FACE_CENTER_GEO[face], g)));
  let r = r.tan() * INV_RES0_U_GNOMONIC;
  Vec2d::new(r * theta.cos(), r * theta.sin())
}

/// The face whose centre is closest to `v`, and `v`'s coordinate on it.
///
/// Exact ties go to the lower face index. When another face is within
/// floating tolerance of the best, the candidate whose coordinate lies least
/// outside its face triangle wins.
#[must_use]
pub fn select_face(v: &Vec3d) -> FaceCoord {
  let dots: [f64; NUM_ICOSA_FACES as usize] = std::array::from_fn(|f| FACE_CENTER_POINT[f].dot(v));
  let mut best = 0;
  for (face, dot) in dots.iter().enumerate().skip(1) {
    if *dot > dots[best] {
      best = face;
    }
  }

  let g = to_geo_coord(v);
  let local_on = |face: usize| face_local(&g, face, FACE_CENTER_POINT[face].square_dist(v));
  let mut chosen = best;
  let mut local = local_on(best);

  for (face, dot) in dots.iter().enumerate() {
    if face == best || dots[best] - dot > FACE_TIE_TOLERANCE {
      continue;
    }
    let candidate = local_on(face);
    let (r_cand, r_cur) = (off_face_residual(&candidate), off_face_residual(&local));
    if r_cand < r_cur || (r_cand == r_cur && face < chosen) {
      trace!(face, previous = chosen, "face near-tie resolved by residual");
      chosen = face;
      local = candidate;
    }
  }

  FaceCoord {
    face: chosen as i32,
    local,
  }
}

/// Inverse gnomonic projection of a face coordinate onto the unit sphere.
///
/// Fails with `DomainError` for a face outside `0..20` or a non-finite coordinate.
pub fn unproject(fc: &FaceCoord) -> Result<Vec3d> {
  if !(0..NUM_ICOSA_FACES).contains(&fc.face) || !fc.local.x.is_finite() || !fc.local.y.is_finite() {
    return Err(GridError::DomainError);
  }
  Ok(to_vector3(&hex2d_to_geo(&fc.local, fc.face, 0, false)))
}

/// Planar hex coordinate of a face coordinate in the grid of `res`.
///
/// Scales by `sqrt(7)` per resolution and rotates into the Class III
/// orientation on odd resolutions.
pub(crate) fn face_coord_to_hex2d(fc: &FaceCoord, res: i32) -> Vec2d {
  let mut r = fc.local.mag();
  if r < EPSILON {
    return Vec2d::default();
  }
  let mut theta = fc.local.y.atan2(fc.local.x);
  if is_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }
  for _ in 0..res {
    r *= M_SQRT7;
  }
  Vec2d::new(r * theta.cos(), r * theta.sin())
}

/// Face and IJK coordinate of the cell containing `g` at `res`.
pub(crate) fn geo_to_face_ijk(g: &GeoCoord, res: i32) -> Result<FaceIJK> {
  let fc = select_face(&to_vector3(g));
  let cube = to_hex_coord(&fc, res)?;
  Ok(FaceIJK {
    face: fc.face,
    coord: cube.to_ijk(),
  })
}

/// Coordinate of a planar hex point on `face` at `res`.
///
/// `substrate` marks points on the aperture 3 vertex grid (one third the
/// spacing, and in Class II orientation for Class III resolutions).
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoCoord {
  let f = face as usize;
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[f];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= M_RSQRT7;
  }

  if substrate {
    r *= M_ONETHIRD;
    if is_class_iii(res) {
      r *= M_RSQRT7;
    }
  }

  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - theta);
  az_distance_rads(&FACE_CENTER_GEO[f], theta, r)
}

/// Centre coordinate of a cell.
pub(crate) fn face_ijk_to_geo(h: &FaceIJK, res: i32) -> GeoCoord {
  hex2d_to_geo(&h.coord.to_hex2d(), h.face, res, false)
}

impl FaceIJK {
  /// Moves a Class II coordinate onto the face that contains it.
  ///
  /// `pent_leading_4` handles pentagon cells whose leading digit is I, which
  /// must be rotated about the pentagon vertex before the KI crossing.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
    let mut overage = Overage::OnFace;
    let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
    if substrate {
      max_dim *= 3;
    }

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == max_dim {
      return Overage::FaceEdge;
    }
    if sum > max_dim {
      overage = Overage::NewFace;

      let quadrant = if self.coord.k > 0 && self.coord.j > 0 {
        JK_QUADRANT
      } else if self.coord.k > 0 {
        if pent_leading_4 {
          // rotate about the pentagon vertex
          let origin = CoordIJK::new(max_dim, 0, 0);
          self.coord = (self.coord - origin).rotate60_cw() + origin;
        }
        KI_QUADRANT
      } else {
        IJ_QUADRANT
      };
      let orient = FACE_NEIGHBORS[self.face as usize][quadrant];
      self.face = orient.face;

      for _ in 0..orient.ccw_rot60 {
        self.coord = self.coord.rotate60_ccw();
      }

      let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
      if substrate {
        unit_scale *= 3;
      }
      self.coord = (self.coord + orient.translate.scale(unit_scale)).normalize();

      if substrate && self.coord.i + self.coord.j + self.coord.k == max_dim {
        overage = Overage::FaceEdge;
      }
    }
    overage
  }

  /// Repeats the Class II adjustment for a pentagon vertex until it settles.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: i32) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }
}

/// Substrate-grid vertices of a cell.
///
/// Returns the centre moved onto the substrate grid, the substrate
/// resolution, and the vertices (only the first five are meaningful for
/// pentagons).
pub(crate) fn face_ijk_to_verts(h: &FaceIJK, res: i32) -> (FaceIJK, i32, [FaceIJK; 6]) {
  let offsets = if is_class_iii(res) { VERTS_CIII } else { VERTS_CII };

  let mut center = h.coord.down_ap3().down_ap3r();
  let mut adj_res = res;
  if is_class_iii(res) {
    center = center.down_ap7r();
    adj_res += 1;
  }

  let verts = offsets.map(|offset| FaceIJK {
    face: h.face,
    coord: (center + offset).normalize(),
  });
  (FaceIJK { face: h.face, coord: center }, adj_res, verts)
}

/// Icosahedron edge between `face` and its neighbour in `quadrant`, in substrate units.
fn face_edge(quadrant: Option<usize>, adj_res: i32) -> (Vec2d, Vec2d) {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize]);
  let v0 = Vec2d::new(3.0 * max_dim, 0.0);
  let v1 = Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim);
  let v2 = Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim);
  match quadrant {
    Some(IJ_QUADRANT) => (v0, v1),
    Some(JK_QUADRANT) => (v1, v2),
    _ => (v2, v0),
  }
}

/// Boundary of a hexagonal cell, with extra vertices where Class III edges
/// cross an icosahedron edge.
pub(crate) fn face_ijk_to_cell_boundary(h: &FaceIJK, res: i32) -> CellBoundary {
  let (center, adj_res, verts) = face_ijk_to_verts(h, res);
  let mut boundary = CellBoundary::default();
  let n = verts.len();

  let mut last_face = -1;
  let mut last_overage = Overage::OnFace;
  for vert in 0..=n {
    let v = vert % n;
    let mut fijk = verts[v];
    let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

    // Class III edges can cross an icosahedron edge between two vertices;
    // add the crossing point as an extra vertex.
    if is_class_iii(res) && vert > 0 && fijk.face != last_face && last_overage != Overage::FaceEdge {
      let orig0 = verts[(v + n - 1) % n].coord.to_hex2d();
      let orig1 = verts[v].coord.to_hex2d();

      let face2 = if last_face == center.face { fijk.face } else { last_face };
      let (edge0, edge1) = face_edge(adjacent_face_dir(center.face, face2), adj_res);

      let inter = Vec2d::intersect(&orig0, &orig1, &edge0, &edge1);
      if !orig0.almost_equals(&inter) && !orig1.almost_equals(&inter) {
        boundary.push(hex2d_to_geo(&inter, center.face, adj_res, true));
      }
    }

    if vert < n {
      boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
    }

    last_face = fijk.face;
    last_overage = overage;
  }
  boundary
}

/// Boundary of a pentagonal cell.
pub(crate) fn face_ijk_pent_to_cell_boundary(h: &FaceIJK, res: i32) -> CellBoundary {
  let (_, adj_res, all_verts) = face_ijk_to_verts(h, res);
  let verts = &all_verts[..5];
  let mut boundary = CellBoundary::default();
  let n = verts.len();

  let mut last = FaceIJK::default();
  for vert in 0..=n {
    let mut fijk = verts[vert % n];
    fijk.adjust_pent_vert_overage(adj_res);

    // every Class III pentagon edge crosses an icosahedron edge
    if is_class_iii(res) && vert > 0 {
      let orig0 = last.coord.to_hex2d();

      // express the current vertex in the previous vertex's face
      let to_last = adjacent_face_dir(fijk.face, last.face).unwrap_or(0);
      let orient = FACE_NEIGHBORS[fijk.face as usize][to_last];
      let mut tmp = fijk.coord;
      for _ in 0..orient.ccw_rot60 {
        tmp = tmp.rotate60_ccw();
      }
      tmp = (tmp + orient.translate.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3)).normalize();
      let orig1 = tmp.to_hex2d();

      let (edge0, edge1) = face_edge(adjacent_face_dir(orient.face, fijk.face), adj_res);
      let inter = Vec2d::intersect(&orig0, &orig1, &edge0, &edge1);
      boundary.push(hex2d_to_geo(&inter, orient.face, adj_res, true));
    }

    if vert < n {
      boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
    }

    last = fijk;
  }
  boundary
}

/// Faces touched by the vertices of a cell; hexagons use all six vertices,
/// pentagons five.
pub(crate) fn vertex_faces(h: &FaceIJK, res: i32, pentagon: bool) -> Vec<i32> {
  let (_, adj_res, verts) = face_ijk_to_verts(h, res);
  let count = if pentagon { 5 } else { 6 };
  let mut faces: Vec<i32> = verts[..count]
    .iter()
    .map(|v| {
      let mut v = *v;
      if pentagon {
        v.adjust_pent_vert_overage(adj_res);
      } else {
        v.adjust_overage_class_ii(adj_res, false, true);
      }
      v.face
    })
    .collect();
  faces.sort_unstable();
  faces.dedup();
  faces
}
