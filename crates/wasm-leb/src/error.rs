use std::fmt;

/// An error encountered by one of the checked encoders or a symbol table
/// lookup.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(transparent)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    /// Construct a new `Error` from an `ErrorKind`.
    pub fn new(kind: ErrorKind) -> Self {
        kind.into()
    }

    /// Construct an error for a signed value that needs more than `bits` bits.
    pub fn signed_out_of_range(value: i64, bits: u32) -> Self {
        ErrorKind::OutOfRange {
            value: i128::from(value),
            bits,
            signedness: Signedness::Signed,
        }
        .into()
    }

    /// Construct an error for an unsigned value that needs more than `bits`
    /// bits.
    pub fn unsigned_out_of_range(value: u64, bits: u32) -> Self {
        ErrorKind::OutOfRange {
            value: i128::from(value),
            bits,
            signedness: Signedness::Unsigned,
        }
        .into()
    }

    /// Construct an error for a byte-tree nested deeper than `limit`.
    pub fn too_deep(limit: usize) -> Self {
        ErrorKind::TooDeep { limit }.into()
    }

    /// Construct an error for a name missing from the symbol table `table`.
    pub fn unknown_name(table: &'static str, name: impl Into<String>) -> Self {
        ErrorKind::UnknownName {
            table,
            name: name.into(),
        }
        .into()
    }

    /// Construct an error for a code missing from the symbol table `table`.
    pub fn unknown_code(table: &'static str, code: u8) -> Self {
        ErrorKind::UnknownCode { table, code }.into()
    }

    /// Get the kind of error that this is.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }
}

/// The kind of error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The integer does not fit in the requested bit width.
    #[error("{value} does not fit in {bits} bits ({signedness})")]
    OutOfRange {
        /// The rejected value.
        value: i128,
        /// The bit width that was requested.
        bits: u32,
        /// Whether the width was interpreted as two's complement.
        signedness: Signedness,
    },

    /// A bit width outside of `1..=64` was requested.
    #[error("invalid integer width {0}, expected 1 through 64")]
    InvalidWidth(u32),

    /// The byte-tree nests deeper than allowed.
    #[error("byte-tree nesting exceeds the limit of {limit}")]
    TooDeep {
        /// The maximum depth that was allowed.
        limit: usize,
    },

    /// The name is not part of the symbol table.
    #[error("unknown {table} name `{name}`")]
    UnknownName {
        /// Which table was searched.
        table: &'static str,
        /// The name that was looked up.
        name: String,
    },

    /// The code is not part of the symbol table.
    #[error("unknown {table} code 0x{code:02x}")]
    UnknownCode {
        /// Which table was searched.
        table: &'static str,
        /// The code that was looked up.
        code: u8,
    },
}

/// How an integer width is interpreted in [`ErrorKind::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// Two's complement.
    Signed,
    /// Plain binary.
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
        })
    }
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
