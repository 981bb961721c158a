//! Closed name/code tables.
//!
//! Section kinds, control opcodes and value types are each a small enum whose
//! discriminant is the code written to the binary. `symbol_table!` generates
//! the enum along with its lookups in both directions.

use crate::{Error, Result};

macro_rules! symbol_table {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident in $table:literal {
            $(
                $(#[$vattr:meta])*
                $variant:ident = $code:literal,
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vattr])*
                $variant = $code,
            )*
        }

        impl $name {
            /// Every entry of the table, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The canonical name of this entry.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }

            /// The code written to the binary for this entry.
            #[inline]
            pub fn code(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(entry: $name) -> u8 {
                entry as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(code: u8) -> Result<Self> {
                match code {
                    $($code => Ok($name::$variant),)*
                    _ => Err(Error::unknown_code($table, code)),
                }
            }
        }

        impl core::str::FromStr for $name {
            type Err = Error;

            fn from_str(name: &str) -> Result<Self> {
                match name {
                    $(stringify!($variant) => Ok($name::$variant),)*
                    _ => Err(Error::unknown_name($table, name)),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

symbol_table! {
    /// Known section identifiers of WebAssembly modules.
    pub enum SectionId in "section" {
        /// The custom section.
        Custom = 0,
        /// The type section.
        Type = 1,
        /// The import section.
        Import = 2,
        /// The function section.
        Function = 3,
        /// The table section.
        Table = 4,
        /// The memory section.
        Memory = 5,
        /// The global section.
        Global = 6,
        /// The export section.
        Export = 7,
        /// The start section.
        Start = 8,
        /// The element section.
        Element = 9,
        /// The code section.
        Code = 10,
        /// The data section.
        Data = 11,
        /// The data count section.
        DataCount = 12,
    }
}

symbol_table! {
    /// Control instruction opcodes.
    pub enum Opcode in "opcode" {
        /// Traps unconditionally.
        Unreachable = 0x00,
        /// Does nothing.
        Nop = 0x01,
        /// Opens a block whose label branches to its end.
        Block = 0x02,
        /// Opens a block whose label branches to its start.
        Loop = 0x03,
        /// Opens a block executed when the popped `i32` is nonzero.
        If = 0x04,
        /// Starts the alternative of an `if` block.
        Else = 0x05,
        /// Closes the innermost block.
        End = 0x0b,
        /// Branches to a label.
        Br = 0x0c,
        /// Branches to a label when the popped `i32` is nonzero.
        BrIf = 0x0d,
        /// Branches to one of a vector of labels, indexed by the popped `i32`.
        BrTable = 0x0e,
        /// Returns from the current function.
        Return = 0x0f,
        /// Calls a function by index.
        Call = 0x10,
        /// Calls a function through a table.
        CallIndirect = 0x11,
        /// Pops and discards a value.
        Drop = 0x1a,
        /// Chooses between two numeric operands.
        Select = 0x1b,
        /// Chooses between two operands of an explicit type.
        SelectT = 0x1c,
    }
}

symbol_table! {
    /// The value types of the format.
    pub enum ValType in "value type" {
        /// A reference to anything outside the module.
        ExternRef = 0x6f,
        /// A reference to a function.
        FuncRef = 0x70,
        /// A 128-bit vector.
        V128 = 0x7b,
        /// A 64-bit float.
        F64 = 0x7c,
        /// A 32-bit float.
        F32 = 0x7d,
        /// A 64-bit integer.
        I64 = 0x7e,
        /// A 32-bit integer.
        I32 = 0x7f,
    }
}

/// The tag that introduces a function type.
pub const FUNC_TYPE: u8 = 0x60;

/// The block type of a block that produces no values.
pub const EMPTY_BLOCK_TYPE: u8 = 0x40;

/// Look up the code of the section kind called `name`.
///
/// ```
/// assert_eq!(wasm_leb::name_to_code("Code").unwrap(), 10);
/// assert!(wasm_leb::name_to_code("Tag").is_err());
/// ```
pub fn name_to_code(name: &str) -> Result<u8> {
    name.parse::<SectionId>().map(u8::from)
}

/// Look up the name of the section kind with id `code`.
pub fn code_to_name(code: u8) -> Result<&'static str> {
    SectionId::try_from(code).map(SectionId::name)
}
