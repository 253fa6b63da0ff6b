//! Fixed lookup tables for the range-classification algorithm.
//!
//! Unicode 6.0 Table 3-7, collapsed into a 9-range classification plus the
//! two "special leader" adjustment tables (`DF_EE`, `EF_FE`). Each table is
//! 16 entries, duplicated to fill both 128-bit lanes of a 32-byte vector,
//! since `vpshufb`-style shuffles operate per lane.

use crate::simd::Simd8x32;

/// High nibble of the first byte -> expected continuation count (0..=3).
const FIRST_LEN: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 3];

/// High nibble of the first byte -> tentative range index for a leader (8 or 0).
const FIRST_RANGE: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 8, 8, 8];

/// Range index -> minimum legal byte value.
///
/// Index 0: ASCII. 1-3: generic continuation. 4: second byte after E0.
/// 5: second byte after ED. 6: second byte after F0. 7: second byte after
/// F4. 8: non-ASCII leader. 9-15: unsatisfiable (min > max).
const RANGE_MIN: [u8; 16] = [
    0x00, 0x80, 0x80, 0x80, 0xA0, 0x80, 0x90, 0x80, 0xC2, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F,
];

/// Range index -> maximum legal byte value. See [`RANGE_MIN`] for the index layout.
const RANGE_MAX: [u8; 16] = [
    0x7F, 0xBF, 0xBF, 0xBF, 0xBF, 0x9F, 0xBF, 0x8F, 0xF4, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
];

/// Adjustment added to the second-byte range index after a leader E0 (+2) or
/// ED (+3); zero for every other leader.
const DF_EE: [u8; 16] = [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0];

/// Adjustment added to the second-byte range index after a leader F0 (+3) or
/// F4 (+4); zero for every other leader.
const EF_FE: [u8; 16] = [0, 3, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

pub(crate) fn first_len() -> Simd8x32 {
    Simd8x32::dup16(FIRST_LEN)
}

pub(crate) fn first_range() -> Simd8x32 {
    Simd8x32::dup16(FIRST_RANGE)
}

pub(crate) fn range_min() -> Simd8x32 {
    Simd8x32::dup16(RANGE_MIN)
}

pub(crate) fn range_max() -> Simd8x32 {
    Simd8x32::dup16(RANGE_MAX)
}

pub(crate) fn df_ee() -> Simd8x32 {
    Simd8x32::dup16(DF_EE)
}

pub(crate) fn ef_fe() -> Simd8x32 {
    Simd8x32::dup16(EF_FE)
}
