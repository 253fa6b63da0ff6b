/// A UTF-8 validation error.
///
/// Carries the zero-based byte offset of the first malformed sequence, in
/// the spirit of [`core::str::Utf8Error::valid_up_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error {
    valid_up_to: usize,
}

impl Utf8Error {
    pub(crate) fn at(valid_up_to: usize) -> Self {
        Self { valid_up_to }
    }

    /// Returns the offset of the first byte that is part of a malformed
    /// sequence, i.e. the length of the longest valid prefix.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid utf-8 sequence at byte {}", self.valid_up_to)
    }
}

impl core::error::Error for Utf8Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn reports_offset() {
        let err = Utf8Error::at(30);
        assert_eq!(err.valid_up_to(), 30);
    }

    #[test]
    fn displays_offset() {
        struct Buf([u8; 64], usize);
        impl Write for Buf {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                let bytes = s.as_bytes();
                self.0[self.1..self.1 + bytes.len()].copy_from_slice(bytes);
                self.1 += bytes.len();
                Ok(())
            }
        }

        let err = Utf8Error::at(7);
        let mut buf = Buf([0; 64], 0);
        write!(buf, "{err}").unwrap();
        assert_eq!(&buf.0[..buf.1], b"invalid utf-8 sequence at byte 7");
    }
}
