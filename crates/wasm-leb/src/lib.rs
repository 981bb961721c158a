//! LEB128 integers and length-prefixed vectors for WebAssembly binaries.
//!
//! The two building blocks of the binary format live here:
//!
//! * [`leb128`]: variable-length integers. [`encode_signed_leb128`] is the
//!   signed form used for constants and block types, and
//!   [`encode_unsigned_leb128`] the unsigned form used for indices and counts.
//! * [`vector`]: length-prefixed vectors. [`frame_vector`] flattens a nested
//!   [`ByteTree`] and prefixes its element count.
//!
//! Section kinds, control opcodes and value types are provided as enums
//! ([`SectionId`], [`Opcode`], [`ValType`]) that only turn into numbers when
//! they are written out.
//!
//! # Example
//!
//! Encoding the type section of a module with a single `[i32 i32] -> [i32]`
//! function type:
//!
//! ```
//! use wasm_leb::{frame_bytes, Encode, FuncType, SectionId, ValType, PREAMBLE};
//!
//! let mut module = PREAMBLE.to_vec();
//!
//! let mut types = Vec::new();
//! vec![FuncType::new([ValType::I32, ValType::I32], [ValType::I32])].encode(&mut types);
//!
//! module.push(SectionId::Type.into());
//! module.extend(frame_bytes(&types));
//!
//! assert_eq!(
//!     module[PREAMBLE.len()..],
//!     [0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f]
//! );
//! ```

#![deny(missing_docs, missing_debug_implementations)]

mod code;
mod error;
mod symbols;
mod types;

pub mod leb128;
pub mod vector;

pub use code::*;
pub use error::*;
pub use leb128::{encode_signed_leb128, encode_unsigned_leb128};
pub use symbols::*;
pub use types::*;
pub use vector::{frame_bytes, frame_name, frame_vector, frame_vector_checked, ByteTree};

/// All WebAssembly modules start with the bytes `\0asm`.
pub const MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];

/// The binary format version, little endian, following [`MAGIC`].
pub const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// The preamble of a module: [`MAGIC`] followed by [`VERSION`].
#[rustfmt::skip]
pub const PREAMBLE: [u8; 8] = [
    // Magic
    0x00, 0x61, 0x73, 0x6d,
    // Version
    0x01, 0x00, 0x00, 0x00,
];

/// Implemented by types that can be encoded into a byte sink.
pub trait Encode {
    /// Encode the type into the given byte sink.
    fn encode(&self, sink: &mut Vec<u8>);
}

impl<T: Encode + ?Sized> Encode for &'_ T {
    fn encode(&self, sink: &mut Vec<u8>) {
        T::encode(self, sink)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, sink: &mut Vec<u8>) {
        leb128::write_unsigned(sink, self.len() as u64);
        for item in self {
            item.encode(sink);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, sink: &mut Vec<u8>) {
        <[T]>::encode(self, sink)
    }
}

impl Encode for str {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(frame_name(self));
    }
}

impl Encode for u32 {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(leb128::u32(*self));
    }
}

impl Encode for u64 {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(leb128::unsigned(*self));
    }
}

impl Encode for i32 {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(leb128::s32(*self));
    }
}

impl Encode for i64 {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(leb128::s64(*self));
    }
}

impl Encode for ByteTree {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.extend(frame_vector(self));
    }
}

impl Encode for ValType {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.push(self.code());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preamble() {
        assert_eq!(PREAMBLE[..4], MAGIC);
        assert_eq!(PREAMBLE[4..], VERSION);
        assert_eq!(
            PREAMBLE,
            [0x00, b'a', b's', b'm', 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn integers() {
        let mut sink = Vec::new();
        127u32.encode(&mut sink);
        127i32.encode(&mut sink);
        (-1i64).encode(&mut sink);
        u64::from(u32::MAX).encode(&mut sink);
        assert_eq!(
            sink,
            [0x7f, 0xff, 0x00, 0x7f, 0xff, 0xff, 0xff, 0xff, 0x0f]
        );
    }

    #[test]
    fn slices_are_count_prefixed() {
        let mut sink = Vec::new();
        [300u32, 1].encode(&mut sink);
        assert_eq!(sink, [0x02, 0xac, 0x02, 0x01]);

        sink.clear();
        Vec::<u32>::new().encode(&mut sink);
        assert_eq!(sink, [0x00]);
    }

    #[test]
    fn strings() {
        let mut sink = Vec::new();
        "add".encode(&mut sink);
        assert_eq!(sink, [0x03, b'a', b'd', b'd']);
    }

    #[test]
    fn byte_trees_are_framed() {
        let mut sink = vec![SectionId::Function.into()];
        ByteTree::from([0x00u8, 0x01]).encode(&mut sink);
        assert_eq!(sink, [0x03, 0x02, 0x00, 0x01]);
    }
}
