use crate::{leb128, Encode, Opcode, ValType, EMPTY_BLOCK_TYPE};

/// The type of a `block`, `loop` or `if`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `[] -> []`
    Empty,
    /// `[] -> [t]`
    Result(ValType),
    /// The `n`th type in the type section.
    FunctionType(u32),
}

impl Encode for BlockType {
    fn encode(&self, sink: &mut Vec<u8>) {
        match *self {
            Self::Empty => sink.push(EMPTY_BLOCK_TYPE),
            Self::Result(ty) => ty.encode(sink),
            Self::FunctionType(f) => sink.extend(leb128::s33(f.into())),
        }
    }
}

/// A control instruction together with its immediates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `unreachable`
    Unreachable,
    /// `nop`
    Nop,
    /// `block` with its type.
    Block(BlockType),
    /// `loop` with its type.
    Loop(BlockType),
    /// `if` with its type.
    If(BlockType),
    /// `else`
    Else,
    /// `end`
    End,
    /// `br` with a relative label index.
    Br(u32),
    /// `br_if` with a relative label index.
    BrIf(u32),
    /// `br_table` with its label vector and default label.
    BrTable(Vec<u32>, u32),
    /// `return`
    Return,
    /// `call` with a function index.
    Call(u32),
    /// `call_indirect`
    CallIndirect {
        /// Index of the expected function type.
        type_index: u32,
        /// Index of the table to call through.
        table_index: u32,
    },
    /// `drop`
    Drop,
    /// `select` over numeric operands.
    Select,
    /// `select` with explicit operand types.
    SelectT(Vec<ValType>),
}

impl Instruction {
    /// The opcode this instruction starts with.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Unreachable => Opcode::Unreachable,
            Instruction::Nop => Opcode::Nop,
            Instruction::Block(_) => Opcode::Block,
            Instruction::Loop(_) => Opcode::Loop,
            Instruction::If(_) => Opcode::If,
            Instruction::Else => Opcode::Else,
            Instruction::End => Opcode::End,
            Instruction::Br(_) => Opcode::Br,
            Instruction::BrIf(_) => Opcode::BrIf,
            Instruction::BrTable(..) => Opcode::BrTable,
            Instruction::Return => Opcode::Return,
            Instruction::Call(_) => Opcode::Call,
            Instruction::CallIndirect { .. } => Opcode::CallIndirect,
            Instruction::Drop => Opcode::Drop,
            Instruction::Select => Opcode::Select,
            Instruction::SelectT(_) => Opcode::SelectT,
        }
    }
}

impl Encode for Instruction {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.push(self.opcode().into());
        match self {
            Instruction::Block(bt) | Instruction::Loop(bt) | Instruction::If(bt) => bt.encode(sink),
            Instruction::Br(l) | Instruction::BrIf(l) => l.encode(sink),
            Instruction::BrTable(ls, l) => {
                ls.encode(sink);
                l.encode(sink);
            }
            Instruction::Call(f) => f.encode(sink),
            Instruction::CallIndirect {
                type_index,
                table_index,
            } => {
                type_index.encode(sink);
                table_index.encode(sink);
            }
            Instruction::SelectT(tys) => tys.encode(sink),
            Instruction::Unreachable
            | Instruction::Nop
            | Instruction::Else
            | Instruction::End
            | Instruction::Return
            | Instruction::Drop
            | Instruction::Select => {}
        }
    }
}
