use super::Simd8x32;

use core::simd::Simd;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

impl Simd8x32 {
    /// Byte shuffle by the low 4 bits of each index lane (`vpshufb`); any
    /// lane whose index has the high bit set reads as zero. `table` must be
    /// a 16-entry table duplicated into both 128-bit halves (`dup16`), since
    /// the instruction shuffles within each 128-bit lane independently.
    #[inline]
    pub(crate) fn shuffle(&self, table: Simd8x32) -> Simd8x32 {
        let t = __m256i::from(table);
        let idx = __m256i::from(*self);

        let r = unsafe { _mm256_shuffle_epi8(t, idx) };

        Simd8x32::from(r)
    }

    /// Per-byte high nibble, computed via a 16-bit right shift (there is no
    /// 8-bit shift instruction) masked with 0x0F afterward.
    #[inline]
    pub(crate) fn high_nibble(&self) -> Simd8x32 {
        let v = __m256i::from(*self);

        let shifted = unsafe { _mm256_srli_epi16::<4>(v) };

        Simd8x32::from(shifted) & Simd8x32::splat(0x0F)
    }

    #[inline]
    pub(crate) fn saturating_add(&self, other: Simd8x32) -> Simd8x32 {
        let a = __m256i::from(*self);
        let b = __m256i::from(other);

        Simd8x32::from(unsafe { _mm256_adds_epu8(a, b) })
    }

    #[inline]
    pub(crate) fn saturating_sub(&self, other: Simd8x32) -> Simd8x32 {
        let a = __m256i::from(*self);
        let b = __m256i::from(other);

        Simd8x32::from(unsafe { _mm256_subs_epu8(a, b) })
    }

    /// Bytewise signed compare-greater; each lane is 0xFF or 0x00.
    #[inline]
    pub(crate) fn gt_signed(&self, other: Simd8x32) -> Simd8x32 {
        let a = __m256i::from(*self);
        let b = __m256i::from(other);

        Simd8x32::from(unsafe { _mm256_cmpgt_epi8(a, b) })
    }

    /// Cross-block concatenation: lane `i` of the result holds
    /// `(prev ++ self)[32 - N + i]`, i.e. the last `N` bytes of `prev`
    /// shifted in ahead of `self`. `N` is 1, 2 or 3.
    ///
    /// `_mm256_alignr_epi8` shifts within each 128-bit lane independently,
    /// so the cross-lane boundary is bridged with `_mm256_permute2x128_si256`
    /// first, exactly as in the reference implementation.
    #[inline]
    pub(crate) fn concat_shift<const N: i32>(&self, prev: Simd8x32) -> Simd8x32
    where
        [(); (16 - N) as usize]:,
    {
        let cur = __m256i::from(*self);
        let p = __m256i::from(prev);

        let mixed = unsafe { _mm256_permute2x128_si256::<0x21>(p, cur) };
        let r = unsafe { _mm256_alignr_epi8::<{ 16 - N }>(cur, mixed) };

        Simd8x32::from(r)
    }

    /// The last four bytes of the vector, in ascending offset order.
    #[inline]
    pub(crate) fn last_four_bytes(&self) -> [u8; 4] {
        let v = __m256i::from(*self);

        let lane = unsafe { _mm256_extract_epi32::<7>(v) };

        (lane as u32).to_le_bytes()
    }
}

impl From<Simd8x32> for __m256i {
    fn from(value: Simd8x32) -> Self {
        Simd::from(value).into()
    }
}

impl From<__m256i> for Simd8x32 {
    fn from(value: __m256i) -> Self {
        Simd8x32::from(Simd::from(value))
    }
}
