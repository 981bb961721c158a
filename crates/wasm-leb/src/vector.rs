//! Length-prefixed vectors.
//!
//! A vector in the binary format is its element count as a ULEB128 followed
//! by the elements. The framer here takes a [`ByteTree`], flattens it depth
//! first and prefixes the number of leaves. The prefix counts leaves, which is
//! also the byte length of the payload because every leaf is one byte.

use crate::{leb128, Error, Result};

/// A byte, or an ordered sequence of nested byte-trees.
///
/// Instruction bodies and section payloads are most easily assembled as
/// nested pieces; [`frame_vector`] flattens them in order.
///
/// A `ByteTree` owns its children, so it is always finite and acyclic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Deserialize),
    serde(untagged, expecting = "a byte or a nested array of bytes")
)]
pub enum ByteTree {
    /// A single byte.
    Byte(u8),
    /// A nested sequence.
    Seq(Vec<ByteTree>),
}

impl ByteTree {
    /// Build a sequence out of anything convertible into byte-trees.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ByteTree>,
    {
        ByteTree::Seq(items.into_iter().map(Into::into).collect())
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        ByteTree::Seq(Vec::new())
    }

    /// Flatten this tree into its bytes, depth first.
    pub fn flatten(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.leaf_count());
        self.flatten_into(&mut bytes);
        bytes
    }

    /// Append the flattened bytes of this tree to `out`.
    pub fn flatten_into(&self, out: &mut Vec<u8>) {
        match self {
            ByteTree::Byte(b) => out.push(*b),
            ByteTree::Seq(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    /// The number of bytes in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ByteTree::Byte(_) => 1,
            ByteTree::Seq(items) => items.iter().map(ByteTree::leaf_count).sum(),
        }
    }

    /// Whether this tree holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }

    /// How many sequences deep this tree nests.
    ///
    /// A lone byte has depth 0 and a flat sequence, empty or not, has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ByteTree::Byte(_) => 0,
            ByteTree::Seq(items) => 1 + items.iter().map(ByteTree::depth).max().unwrap_or(0),
        }
    }

    fn flatten_bounded(&self, out: &mut Vec<u8>, remaining: usize, limit: usize) -> Result<()> {
        match self {
            ByteTree::Byte(b) => out.push(*b),
            ByteTree::Seq(_) if remaining == 0 => return Err(Error::too_deep(limit)),
            ByteTree::Seq(items) => {
                for item in items {
                    item.flatten_bounded(out, remaining - 1, limit)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for ByteTree {
    fn default() -> Self {
        ByteTree::empty()
    }
}

impl From<u8> for ByteTree {
    fn from(b: u8) -> Self {
        ByteTree::Byte(b)
    }
}

impl<T: Into<ByteTree>> From<Vec<T>> for ByteTree {
    fn from(items: Vec<T>) -> Self {
        ByteTree::seq(items)
    }
}

impl<T: Into<ByteTree>, const N: usize> From<[T; N]> for ByteTree {
    fn from(items: [T; N]) -> Self {
        ByteTree::seq(items)
    }
}

impl From<&[u8]> for ByteTree {
    fn from(bytes: &[u8]) -> Self {
        ByteTree::seq(bytes.iter().copied())
    }
}

impl From<leb128::Leb128> for ByteTree {
    fn from(bytes: leb128::Leb128) -> Self {
        ByteTree::seq(bytes)
    }
}

impl<T: Into<ByteTree>> FromIterator<T> for ByteTree {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ByteTree::seq(iter)
    }
}

/// Flatten `tree` and prefix it with its element count as a ULEB128.
///
/// ```
/// use wasm_leb::{frame_vector, ByteTree};
///
/// assert_eq!(frame_vector(&ByteTree::empty()), [0x00]);
/// assert_eq!(frame_vector(&[1u8, 2, 3].into()), [0x03, 0x01, 0x02, 0x03]);
/// ```
///
/// Trees are recursed without a limit; use [`frame_vector_checked`] for input
/// whose nesting is not under your control.
pub fn frame_vector(tree: &ByteTree) -> Vec<u8> {
    let count = tree.leaf_count();
    let mut bytes = Vec::with_capacity(leb128::MAX_LEN + count);
    leb128::write_unsigned(&mut bytes, count as u64);
    tree.flatten_into(&mut bytes);
    bytes
}

/// Like [`frame_vector`], but fails if `tree` nests more than `max_depth`
/// sequences deep (see [`ByteTree::depth`]).
pub fn frame_vector_checked(tree: &ByteTree, max_depth: usize) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    tree.flatten_bounded(&mut payload, max_depth, max_depth)?;
    Ok(frame_bytes(&payload))
}

/// Prefix an already flat slice with its length.
pub fn frame_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(leb128::MAX_LEN + bytes.len());
    leb128::write_unsigned(&mut framed, bytes.len() as u64);
    framed.extend_from_slice(bytes);
    framed
}

/// Encode a name: its UTF-8 byte length followed by the bytes.
pub fn frame_name(name: &str) -> Vec<u8> {
    frame_bytes(name.as_bytes())
}
