//! Vectorized range-classification validator.
//!
//! Processes the input in fixed 32-byte blocks. For each block, every lane
//! gets a *range index* (0..=8, or 9..=15 for an internally-inconsistent
//! classification) identifying which `(min, max)` pair its byte must fall
//! in, then all 32 lanes are checked in parallel. A 32-byte look-behind
//! (the previous block's raw bytes and its `first_len` classification)
//! lets a sequence straddling a block boundary be classified as if the
//! buffer were contiguous, without rereading memory.
//!
//! Any remainder shorter than one block, and the refinement of the error
//! position after a block is rejected, are delegated to [`crate::scalar`].

use crate::error::Utf8Error;
use crate::scalar;
use crate::simd::Simd8x32;
use crate::tables;

const BLOCK: usize = 32;

/// Validates `data`, using the vectorized bulk path while at least one full
/// 32-byte block remains and handing the rest to the scalar validator.
pub fn validate(data: &[u8]) -> Result<(), Utf8Error> {
    let mut idx = 0usize;
    // sentinel: no block has been accepted yet. Becomes `consumed + 1` once
    // at least one block commits, so the final `-1` cancels the sentinel.
    let mut err_idx: isize = 1;

    if data.len() >= BLOCK {
        let mut prev_input = Simd8x32::splat(0);
        let mut prev_first_len = Simd8x32::splat(0);

        while data.len() - idx >= BLOCK {
            let input = Simd8x32::load(&data[idx..]);

            match classify_block(input, prev_input, prev_first_len) {
                Some(first_len) => {
                    prev_input = input;
                    prev_first_len = first_len;
                    idx += BLOCK;
                    err_idx += BLOCK as isize;
                }
                None => break,
            }
        }

        if err_idx == 1 {
            // the very first block was rejected (or len < 32, loop never ran):
            // re-run the scalar validator over the whole original buffer.
            return scalar::validate(data);
        }

        // the last committed block may end mid-sequence; rewind to that
        // sequence's leader so the scalar validator re-sees it.
        let lookahead = trailing_lookahead(prev_input) as isize;
        idx -= lookahead as usize;
        err_idx -= lookahead;
    }

    match scalar::validate(&data[idx..]) {
        Ok(()) => Ok(()),
        Err(tail_err) => {
            let offset = err_idx + tail_err.valid_up_to() as isize - 1;
            Err(Utf8Error::at(offset as usize))
        }
    }
}

/// Classifies one 32-byte block against the look-behind state from the
/// previous block. Returns this block's `first_len` lane (to become
/// `prev_first_len` for the next block) on success, or `None` if any
/// lane's byte falls outside its computed range.
fn classify_block(input: Simd8x32, prev_input: Simd8x32, prev_first_len: Simd8x32) -> Option<Simd8x32> {
    let high_nibbles = input.high_nibble();

    // first_len: 0 for 00-7F, 1 for C0-DF, 2 for E0-EF, 3 for F0-FF
    let first_len = high_nibbles.shuffle(tables::first_len());
    // leading non-ASCII bytes get tentative range 8; everything else 0
    let mut range = high_nibbles.shuffle(tables::first_range());

    // second byte of a sequence: range index = first_len of the previous byte
    range |= first_len.concat_shift::<1>(prev_first_len);

    // third byte: range index = saturating_sub(first_len two bytes back, 1)
    // (0 stays 0, 1 stays 0, 2 becomes 1, 3 becomes 2)
    let two_back = first_len.concat_shift::<2>(prev_first_len);
    range |= two_back.saturating_sub(Simd8x32::splat(1));

    // fourth byte: range index = saturating_sub(first_len three bytes back, 2)
    // (only 3 survives, becoming 1)
    let three_back = first_len.concat_shift::<3>(prev_first_len);
    range |= three_back.saturating_sub(Simd8x32::splat(2));

    // adjust the second-byte range for the four special leaders E0, ED, F0, F4;
    // overlaps with an already-set range push the index into the
    // unsatisfiable 9..15 band, which is how a leader/continuation clash
    // is detected without a separate branch.
    let shift1 = input.concat_shift::<1>(prev_input);
    let pos = shift1 - Simd8x32::splat(0xEF);

    let mut adjust = pos.saturating_sub(Simd8x32::splat(240)).shuffle(tables::df_ee());
    adjust = adjust + pos.saturating_add(Simd8x32::splat(112)).shuffle(tables::ef_fe());

    range = range + adjust;

    let min = range.shuffle(tables::range_min());
    let max = range.shuffle(tables::range_max());

    let mut error = min.gt_signed(input);
    error |= input.gt_signed(max);

    if error.any_nonzero() { None } else { Some(first_len) }
}

/// How many trailing bytes of the last committed block belong to a
/// multibyte sequence whose leader lies earlier in that block: the
/// rightmost non-continuation byte among the last four, counted from the end.
fn trailing_lookahead(prev_input: Simd8x32) -> usize {
    let tail = prev_input.last_four_bytes();

    if tail[3] > 0xBF {
        1
    } else if tail[2] > 0xBF {
        2
    } else if tail[1] > 0xBF {
        3
    } else {
        0
    }
}
