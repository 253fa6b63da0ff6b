use super::Simd8x32;

use core::simd::{Simd, cmp::SimdPartialOrd, num::SimdUint};

impl Simd8x32 {
    /// Byte shuffle by the low 4 bits of each index lane, zeroing any lane
    /// whose index has the high bit set — the portable emulation of the
    /// `vpshufb`-style instruction `x86::shuffle` uses natively. `table` must
    /// be a 16-entry table duplicated into both halves (`dup16`); since both
    /// halves agree, it does not matter which one `swizzle_dyn` reads from.
    #[inline]
    pub(crate) fn shuffle(&self, table: Simd8x32) -> Simd8x32 {
        let masked_indices = self.value & Simd::splat(0x0f);
        let result = table.value.swizzle_dyn(masked_indices);

        let mask = self.value.simd_lt(Simd::splat(0x80));
        let final_result = mask.select(result, Simd::splat(0));

        Simd8x32::from(final_result)
    }

    /// Per-byte high nibble: `(b >> 4) & 0x0F`, done directly rather than via
    /// the 16-bit-shift trick `x86::high_nibble` uses to dodge a missing
    /// 8-bit shift instruction.
    #[inline]
    pub(crate) fn high_nibble(&self) -> Simd8x32 {
        let mut result = [0u8; 32];
        let input = self.value.to_array();
        for i in 0..32 {
            result[i] = input[i] >> 4;
        }
        Simd8x32::from(Simd::from_array(result))
    }

    #[inline]
    pub(crate) fn saturating_add(&self, other: Simd8x32) -> Simd8x32 {
        Simd8x32::from(self.value.saturating_add(other.value))
    }

    #[inline]
    pub(crate) fn saturating_sub(&self, other: Simd8x32) -> Simd8x32 {
        Simd8x32::from(self.value.saturating_sub(other.value))
    }

    /// Bytewise signed compare-greater; each lane is 0xFF or 0x00.
    #[inline]
    pub(crate) fn gt_signed(&self, other: Simd8x32) -> Simd8x32 {
        let mut result = [0u8; 32];
        let a = self.value.to_array();
        let b = other.value.to_array();
        for i in 0..32 {
            result[i] = if (a[i] as i8) > (b[i] as i8) { 0xFF } else { 0 };
        }
        Simd8x32::from(Simd::from_array(result))
    }

    /// Cross-block concatenation: lane `i` of the result holds
    /// `(prev ++ self)[32 - N + i]`, per spec's `concat_shift` formula.
    #[inline]
    pub(crate) fn concat_shift<const N: i32>(&self, prev: Simd8x32) -> Simd8x32
    where
        [(); (16 - N) as usize]:,
    {
        let prev_array = prev.value.to_array();
        let curr_array = self.value.to_array();

        let mut result = [0u8; 32];
        for i in 0..32 {
            let src_idx = 32 - N as usize + i;
            result[i] = if src_idx < 32 {
                prev_array[src_idx]
            } else {
                curr_array[src_idx - 32]
            };
        }

        Simd8x32::from(Simd::from_array(result))
    }

    /// The last four bytes of the vector, in ascending offset order.
    #[inline]
    pub(crate) fn last_four_bytes(&self) -> [u8; 4] {
        let array = self.value.to_array();
        [array[28], array[29], array[30], array[31]]
    }
}
