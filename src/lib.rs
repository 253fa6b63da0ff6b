//! # rangeutf8
//!
//! Validates whether a byte buffer is well-formed UTF-8 per Unicode 6.0
//! Table 3-7, reporting the byte offset of the first malformed sequence on
//! rejection. A vectorized 256-bit range-classification bulk path
//! ([`vector::validate`]) cooperates with a scalar reference validator
//! ([`scalar::validate`]) used for the buffer tail and to refine the error
//! position after a block is rejected.
//!
//! This crate only validates; it does not decode code points, repair
//! overlong or surrogate encodings, or provide a `&str` conversion —
//! that belongs one layer up.

#![no_std]
#![feature(portable_simd)]
#![feature(generic_const_exprs)]

mod error;
mod scalar;
mod simd;
mod tables;
mod vector;

pub use error::Utf8Error;

/// A UTF-8 validation result.
pub type Result<T> = core::result::Result<T, Utf8Error>;

/// Validates `data` as well-formed UTF-8.
///
/// Uses the vectorized range-classification path for the bulk of the
/// buffer and the scalar validator for the tail and for error-position
/// refinement. On failure, the error reports the offset of the first
/// malformed sequence's leading byte.
///
/// # Examples
///
/// ```rust
/// assert!(rangeutf8::validate(b"hello world!").is_ok());
/// assert!(rangeutf8::validate(b"\xC0\x80").is_err());
/// ```
#[inline]
pub fn validate(data: &[u8]) -> Result<()> {
    vector::validate(data)
}

/// Validates `data` as well-formed UTF-8 using only the scalar, byte-at-a-
/// time reference algorithm. Exported because it doubles as the vector
/// path's tail engine; useful on its own on targets without the vector
/// backend's target features enabled.
///
/// # Examples
///
/// ```rust
/// assert!(rangeutf8::validate_scalar(b"hello world!").is_ok());
/// assert!(rangeutf8::validate_scalar(b"\xC0\x80").is_err());
/// ```
#[inline]
pub fn validate_scalar(data: &[u8]) -> Result<()> {
    scalar::validate(data)
}
