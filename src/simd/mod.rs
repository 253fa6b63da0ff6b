use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::simd::Simd;
use core::simd::num::SimdUint;

/// 32-element u8 SIMD vector for UTF-8 range classification.
///
/// Wraps a 256-bit portable SIMD vector. Operations that map onto a single
/// native instruction (byte shuffle, cross-block concatenation, saturating
/// arithmetic, signed compare, high-nibble extraction) are implemented per
/// architecture in `x86` or `portable`; construction helpers and bitwise
/// combinators are implemented once here.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Simd8x32 {
    value: Simd<u8, 32>,
}

impl Simd8x32 {
    /// All-zero vector: the look-behind state before the first block is accepted.
    #[inline]
    pub(crate) fn splat(v: u8) -> Self {
        Self { value: Simd::splat(v) }
    }

    /// Builds a 32-lane vector from a 16-entry table duplicated into both
    /// 128-bit halves, matching the per-lane semantics of a 256-bit byte shuffle.
    #[inline]
    pub(crate) fn dup16(half: [u8; 16]) -> Self {
        let mut full = [0u8; 32];
        full[..16].copy_from_slice(&half);
        full[16..].copy_from_slice(&half);
        Self { value: Simd::from_array(full) }
    }

    /// Unaligned load of a 32-byte block. `data` must have at least 32 bytes.
    #[inline]
    pub(crate) fn load(data: &[u8]) -> Self {
        Self { value: Simd::from_slice(&data[..32]) }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u8; 32] {
        self.value.to_array()
    }

    /// Whole-vector "any lane nonzero" test: the accumulated-error check.
    #[inline]
    pub(crate) fn any_nonzero(&self) -> bool {
        self.value.reduce_or() != 0
    }
}

// common trait implementations
impl BitAnd for Simd8x32 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self { value: self.value & rhs.value }
    }
}

impl BitOr for Simd8x32 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self { value: self.value | rhs.value }
    }
}

impl BitOrAssign for Simd8x32 {
    fn bitor_assign(&mut self, rhs: Self) {
        self.value |= rhs.value;
    }
}

impl core::ops::Add for Simd8x32 {
    type Output = Self;

    /// Bytewise wrapping add (`epi8` add wraps mod 256 regardless of signedness).
    fn add(self, rhs: Self) -> Self::Output {
        Self { value: self.value + rhs.value }
    }
}

impl core::ops::Sub for Simd8x32 {
    type Output = Self;

    /// Bytewise wrapping sub (`epi8` sub wraps mod 256 regardless of signedness).
    fn sub(self, rhs: Self) -> Self::Output {
        Self { value: self.value - rhs.value }
    }
}

impl From<Simd<u8, 32>> for Simd8x32 {
    fn from(value: Simd<u8, 32>) -> Self {
        Self { value }
    }
}

impl From<Simd8x32> for Simd<u8, 32> {
    fn from(value: Simd8x32) -> Self {
        value.value
    }
}

// architecture-specific implementations: byte shuffle, cross-block shift,
// saturating/wrapping arithmetic, signed compare, high-nibble extraction.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;

// scalar emulation for every other target, including aarch64: spec.md's
// portability note explicitly licenses the vector path degrading to scalar
// emulation off x86 rather than hand-rolling a 256-bit shuffle/alignr
// equivalent from two 128-bit NEON halves (see DESIGN.md).
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
mod portable;