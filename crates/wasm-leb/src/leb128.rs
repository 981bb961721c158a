//! Low-level LEB128 encoders.
//!
//! Every integer in a WebAssembly binary (indices, counts, immediates) is
//! written as a little-endian base-128 varint: seven value bits per byte, with
//! the high bit set on every byte except the last. Signed integers use the
//! two's complement form, where the last byte's bit 6 is the sign.
//!
//! The encoders here write into a fixed-size buffer and hand it back as an
//! [`ExactSizeIterator`], so they can be chained into a sink without an
//! intermediate allocation.

use crate::{Error, ErrorKind, Result};
use std::ops::Range;

/// The longest a 64-bit integer can be once encoded as LEB128.
pub const MAX_LEN: usize = 10;

/// Bits of payload carried by each encoded byte.
const GROUP_BITS: u32 = 7;
const GROUP_MASK: i64 = 0x7f;
const CONTINUATION: u8 = 0x80;
const SIGN: u8 = 0x40;

/// Encode an `i64` as a SLEB128.
///
/// ```
/// assert_eq!(wasm_leb::encode_signed_leb128(-128), [0x80, 0x7f]);
/// assert_eq!(wasm_leb::encode_signed_leb128(624485), [0xe5, 0x8e, 0x26]);
/// ```
pub fn encode_signed_leb128(n: i64) -> Vec<u8> {
    signed(n).collect()
}

/// Encode a `u64` as a ULEB128.
pub fn encode_unsigned_leb128(n: u64) -> Vec<u8> {
    unsigned(n).collect()
}

/// Encode an `i64` as a SLEB128, yielding the bytes without allocating.
pub fn signed(mut n: i64) -> Leb128 {
    let mut out = Leb128::new();
    loop {
        let group = (n & GROUP_MASK) as u8;
        // Arithmetic shift: the sign is carried into every remaining group.
        n >>= GROUP_BITS;
        let done = (n == 0 && group & SIGN == 0) || (n == -1 && group & SIGN != 0);
        if done {
            out.push(group);
            return out;
        }
        out.push(group | CONTINUATION);
    }
}

/// Encode a `u64` as a ULEB128, yielding the bytes without allocating.
pub fn unsigned(mut n: u64) -> Leb128 {
    let mut out = Leb128::new();
    loop {
        let group = (n & GROUP_MASK as u64) as u8;
        n >>= GROUP_BITS;
        if n == 0 {
            out.push(group);
            return out;
        }
        out.push(group | CONTINUATION);
    }
}

/// Encode a `u32` as a ULEB128.
pub fn u32(n: u32) -> Leb128 {
    unsigned(n.into())
}

/// Encode an `i32` as a SLEB128.
pub fn s32(x: i32) -> Leb128 {
    signed(x.into())
}

/// Encode an `i64` that uses at most 33 bits as a SLEB128.
///
/// This is the encoding of a type index inside a block type.
///
/// # Panics
///
/// Panics if more than 33 bits are used.
///
/// ```
/// wasm_leb::leb128::s33((1 << 32) - 1);
/// ```
///
/// ```should_panic
/// wasm_leb::leb128::s33(1 << 32);
/// ```
///
/// ```
/// wasm_leb::leb128::s33(-1 << 32);
/// ```
///
/// ```should_panic
/// wasm_leb::leb128::s33((-1 << 32) - 1);
/// ```
pub fn s33(x: i64) -> Leb128 {
    assert!(fits_signed(x, 33), "{x} does not fit in 33 bits");
    signed(x)
}

/// Encode an `i64` as a SLEB128.
pub fn s64(x: i64) -> Leb128 {
    signed(x)
}

/// Append the SLEB128 form of `n` to `sink`, returning the number of bytes
/// written.
pub fn write_signed<S>(sink: &mut S, n: i64) -> usize
where
    S: Extend<u8>,
{
    let bytes = signed(n);
    let len = bytes.len();
    sink.extend(bytes);
    len
}

/// Append the ULEB128 form of `n` to `sink`, returning the number of bytes
/// written.
pub fn write_unsigned<S>(sink: &mut S, n: u64) -> usize
where
    S: Extend<u8>,
{
    let bytes = unsigned(n);
    let len = bytes.len();
    sink.extend(bytes);
    len
}

/// The number of bytes `n` occupies as a SLEB128.
pub fn encoded_len_signed(n: i64) -> usize {
    signed(n).len()
}

/// The number of bytes `n` occupies as a ULEB128.
pub fn encoded_len_unsigned(n: u64) -> usize {
    unsigned(n).len()
}

/// Encode `n` as a SLEB128 after checking that it fits in a `bits`-wide two's
/// complement integer.
///
/// ```
/// use wasm_leb::leb128::checked_signed;
///
/// assert!(checked_signed(-128, 8).is_ok());
/// assert!(checked_signed(128, 8).is_err());
/// ```
pub fn checked_signed(n: i64, bits: u32) -> Result<Leb128> {
    check_width(bits)?;
    if !fits_signed(n, bits) {
        return Err(Error::signed_out_of_range(n, bits));
    }
    Ok(signed(n))
}

/// Encode `n` as a ULEB128 after checking that it fits in `bits` bits.
pub fn checked_unsigned(n: u64, bits: u32) -> Result<Leb128> {
    check_width(bits)?;
    if bits < u64::BITS && n >> bits != 0 {
        return Err(Error::unsigned_out_of_range(n, bits));
    }
    Ok(unsigned(n))
}

fn check_width(bits: u32) -> Result<()> {
    if bits == 0 || bits > u64::BITS {
        return Err(ErrorKind::InvalidWidth(bits).into());
    }
    Ok(())
}

fn fits_signed(n: i64, bits: u32) -> bool {
    let shift = i64::BITS - bits;
    (n << shift) >> shift == n
}

/// The bytes of a single LEB128-encoded integer.
///
/// Returned by the encoders in this module.
#[derive(Clone, Debug)]
pub struct Leb128 {
    buf: [u8; MAX_LEN],
    range: Range<usize>,
}

impl Leb128 {
    fn new() -> Self {
        Leb128 {
            buf: [0; MAX_LEN],
            range: 0..0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.range.end] = byte;
        self.range.end += 1;
    }

    /// The bytes that have not been yielded yet.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.range.clone()]
    }
}

impl Iterator for Leb128 {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        Some(self.buf[self.range.next()?])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Leb128 {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_known_values() {
        assert_eq!(encode_signed_leb128(0), [0x00]);
        assert_eq!(encode_signed_leb128(-1), [0x7f]);
        assert_eq!(encode_signed_leb128(127), [0xff, 0x00]);
        assert_eq!(encode_signed_leb128(-128), [0x80, 0x7f]);
        assert_eq!(encode_signed_leb128(624485), [0xe5, 0x8e, 0x26]);
    }

    #[test]
    fn signed_sign_bit_boundaries() {
        assert_eq!(encode_signed_leb128(1), [0x01]);
        assert_eq!(encode_signed_leb128(63), [0x3f]);
        assert_eq!(encode_signed_leb128(64), [0xc0, 0x00]);
        assert_eq!(encode_signed_leb128(-64), [0x40]);
        assert_eq!(encode_signed_leb128(-65), [0xbf, 0x7f]);
        assert_eq!(encode_signed_leb128(128), [0x80, 0x01]);
        assert_eq!(encode_signed_leb128(-129), [0xff, 0x7e]);
    }

    #[test]
    fn signed_extremes() {
        let mut min = vec![0x80; 9];
        min.push(0x7f);
        assert_eq!(encode_signed_leb128(i64::MIN), min);

        let mut max = vec![0xff; 9];
        max.push(0x00);
        assert_eq!(encode_signed_leb128(i64::MAX), max);

        assert_eq!(
            encode_signed_leb128(i32::MIN.into()),
            [0x80, 0x80, 0x80, 0x80, 0x78]
        );
        assert_eq!(
            encode_signed_leb128(i32::MAX.into()),
            [0xff, 0xff, 0xff, 0xff, 0x07]
        );
    }

    #[test]
    fn negative_values_beyond_32_bits() {
        // A zero-filling shift never reaches -1 for these.
        assert_eq!(
            encode_signed_leb128(-(1 << 40)),
            [0x80, 0x80, 0x80, 0x80, 0x80, 0x60]
        );
        assert_eq!(
            encode_signed_leb128(-(1 << 40) - 1),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0x5f]
        );
    }

    #[test]
    fn unsigned_known_values() {
        assert_eq!(encode_unsigned_leb128(0), [0x00]);
        assert_eq!(encode_unsigned_leb128(127), [0x7f]);
        assert_eq!(encode_unsigned_leb128(128), [0x80, 0x01]);
        assert_eq!(encode_unsigned_leb128(624485), [0xe5, 0x8e, 0x26]);

        let mut max = vec![0xff; 9];
        max.push(0x01);
        assert_eq!(encode_unsigned_leb128(u64::MAX), max);
    }

    #[test]
    fn width_helpers() {
        assert_eq!(u32(u32::MAX).collect::<Vec<_>>(), [0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(s32(-1).collect::<Vec<_>>(), [0x7f]);
        assert_eq!(s64(-1).collect::<Vec<_>>(), [0x7f]);
        assert_eq!(s33((1 << 32) - 1).len(), 5);
    }

    #[test]
    fn iterator_is_exact() {
        let mut bytes = signed(624485);
        assert_eq!(bytes.len(), 3);
        assert_eq!(bytes.as_slice(), [0xe5, 0x8e, 0x26]);
        assert_eq!(bytes.next(), Some(0xe5));
        assert_eq!(bytes.len(), 2);
        assert_eq!(bytes.as_slice(), [0x8e, 0x26]);
    }

    #[test]
    fn write_into_sink() {
        let mut sink = vec![0xaa];
        assert_eq!(write_signed(&mut sink, -128), 2);
        assert_eq!(write_unsigned(&mut sink, 300), 2);
        assert_eq!(sink, [0xaa, 0x80, 0x7f, 0xac, 0x02]);
    }

    #[test]
    fn encoded_lengths() {
        assert_eq!(encoded_len_signed(0), 1);
        assert_eq!(encoded_len_signed(127), 2);
        assert_eq!(encoded_len_signed(i64::MIN), MAX_LEN);
        assert_eq!(encoded_len_unsigned(127), 1);
        assert_eq!(encoded_len_unsigned(u64::MAX), MAX_LEN);
    }

    #[test]
    fn checked_signed_bounds() {
        assert!(checked_signed(127, 8).is_ok());
        assert!(checked_signed(-128, 8).is_ok());
        assert!(checked_signed(i64::MIN, 64).is_ok());
        assert!(checked_signed(i32::MIN.into(), 32).is_ok());

        let err = checked_signed(128, 8).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::OutOfRange {
                value: 128,
                bits: 8,
                signedness: crate::Signedness::Signed,
            }
        );
        assert!(checked_signed(-129, 8).is_err());
        assert!(checked_signed(i64::from(i32::MAX) + 1, 32).is_err());
    }

    #[test]
    fn checked_unsigned_bounds() {
        assert!(checked_unsigned(255, 8).is_ok());
        assert!(checked_unsigned(u64::MAX, 64).is_ok());
        assert!(checked_unsigned(256, 8).is_err());
        assert!(checked_unsigned(1, 1).is_ok());
        assert!(checked_unsigned(2, 1).is_err());
    }

    #[test]
    fn checked_rejects_bad_widths() {
        assert_eq!(
            checked_signed(0, 0).unwrap_err().kind(),
            &ErrorKind::InvalidWidth(0)
        );
        assert_eq!(
            checked_unsigned(0, 65).unwrap_err().kind(),
            &ErrorKind::InvalidWidth(65)
        );
    }
}
