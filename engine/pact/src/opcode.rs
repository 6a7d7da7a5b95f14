//! Instruction set of the Pact bytecode.
//!
//! Instructions are variable length and self describing. A comparator is two
//! bytes whose leading control byte is always below [`CONJUNCTION_TAG`]; a
//! conjunction is a single byte that is always at or above it. A reader of
//! the flat instruction stream can therefore tell the two apart from the
//! first byte alone.
//!
//! Comparator control byte:
//!
//! ```text
//!   7   6   5   4        3      2   1   0
//! +---+---+---+------+------+-----------+
//! | 0 | 0 | 0 | inv  | load |  OpComp   |
//! +---+---+---+------+------+-----------+
//! ```
//!
//! The operand byte that follows packs `lhs` in the high nibble and `rhs` in
//! the low nibble.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PactError, PactResult};

/// Base value of every conjunction byte.
pub const CONJUNCTION_TAG: u8 = 0x20;
/// Largest operand index representable in a comparator nibble.
pub const MAX_OPERAND_INDEX: u8 = 0x0F;

const OP_MASK: u8 = 0b0000_0111;
const LOAD_SHIFT: u8 = 3;
const INVERT_FLAG: u8 = 0x10;

/// Operand sourcing scheme of a comparator.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpLoad {
    /// Compare an input field against a data table constant.
    InputVsUser = 0,
    /// Compare two input fields.
    InputVsInput = 1,
}

impl OpLoad {
    pub fn from_u8(value: u8) -> PactResult<Self> {
        match value {
            0 => Ok(OpLoad::InputVsUser),
            1 => Ok(OpLoad::InputVsInput),
            other => Err(PactError::UnknownOpcode {
                kind: "load",
                code: other,
            }),
        }
    }
}

/// Comparison operator. Occupies the low three bits of a control byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpComp {
    Eq = 0,
    Gt = 1,
    Gte = 2,
    /// Set membership.
    In = 3,
}

impl OpComp {
    pub fn from_u8(value: u8) -> PactResult<Self> {
        match value {
            0 => Ok(OpComp::Eq),
            1 => Ok(OpComp::Gt),
            2 => Ok(OpComp::Gte),
            3 => Ok(OpComp::In),
            other => Err(PactError::UnknownOpcode {
                kind: "comparator",
                code: other,
            }),
        }
    }
}

/// Conjunction operator.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpConj {
    And = 0,
    Or = 1,
    Xor = 2,
}

impl OpConj {
    pub fn from_u8(value: u8) -> PactResult<Self> {
        match value {
            0 => Ok(OpConj::And),
            1 => Ok(OpConj::Or),
            2 => Ok(OpConj::Xor),
            other => Err(PactError::UnknownOpcode {
                kind: "conjunction",
                code: other,
            }),
        }
    }
}

impl TryFrom<u8> for OpLoad {
    type Error = PactError;

    fn try_from(value: u8) -> PactResult<Self> {
        Self::from_u8(value)
    }
}

impl TryFrom<u8> for OpComp {
    type Error = PactError;

    fn try_from(value: u8) -> PactResult<Self> {
        Self::from_u8(value)
    }
}

impl TryFrom<u8> for OpConj {
    type Error = PactError;

    fn try_from(value: u8) -> PactResult<Self> {
        Self::from_u8(value)
    }
}

/// Operand references of a comparator, one nibble each.
///
/// Under [`OpLoad::InputVsUser`] `lhs` is an input field and `rhs` a data
/// table slot; under [`OpLoad::InputVsInput`] both are input fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpIndices {
    lhs: u8,
    rhs: u8,
}

impl OpIndices {
    pub fn new(lhs: u8, rhs: u8) -> PactResult<Self> {
        if lhs > MAX_OPERAND_INDEX {
            return Err(PactError::InvalidOperand {
                operand: "lhs",
                index: lhs,
            });
        }
        if rhs > MAX_OPERAND_INDEX {
            return Err(PactError::InvalidOperand {
                operand: "rhs",
                index: rhs,
            });
        }
        Ok(Self { lhs, rhs })
    }

    pub fn lhs(&self) -> u8 {
        self.lhs
    }

    pub fn rhs(&self) -> u8 {
        self.rhs
    }

    pub fn to_byte(self) -> u8 {
        (self.lhs << 4) | self.rhs
    }
}

/// Two-byte comparison instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Comparator {
    load: OpLoad,
    op: OpComp,
    indices: OpIndices,
    invert: bool,
}

impl Comparator {
    pub const ENCODED_LEN: usize = 2;

    pub fn new(load: OpLoad, op: OpComp, lhs: u8, rhs: u8, invert: bool) -> PactResult<Self> {
        Ok(Self {
            load,
            op,
            indices: OpIndices::new(lhs, rhs)?,
            invert,
        })
    }

    /// Build a comparator from raw opcode values as supplied by foreign callers.
    pub fn from_raw(load: u8, op: u8, lhs: u8, rhs: u8, invert: bool) -> PactResult<Self> {
        Self::new(OpLoad::from_u8(load)?, OpComp::from_u8(op)?, lhs, rhs, invert)
    }

    pub fn load(&self) -> OpLoad {
        self.load
    }

    pub fn op(&self) -> OpComp {
        self.op
    }

    pub fn indices(&self) -> OpIndices {
        self.indices
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn control_byte(&self) -> u8 {
        let mut value = (self.op as u8 & OP_MASK) | ((self.load as u8) << LOAD_SHIFT);
        if self.invert {
            value |= INVERT_FLAG;
        }
        value
    }

    pub fn encode(&self) -> [u8; 2] {
        [self.control_byte(), self.indices.to_byte()]
    }
}

/// Single-byte instruction combining preceding comparator results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Conjunction {
    op: OpConj,
    invert: bool,
}

impl Conjunction {
    pub const ENCODED_LEN: usize = 1;

    pub fn new(op: OpConj, invert: bool) -> Self {
        Self { op, invert }
    }

    pub fn from_raw(op: u8, invert: bool) -> PactResult<Self> {
        Ok(Self::new(OpConj::from_u8(op)?, invert))
    }

    pub fn op(&self) -> OpConj {
        self.op
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn tag_byte(&self) -> u8 {
        let mut value = CONJUNCTION_TAG | (self.op as u8 & OP_MASK);
        if self.invert {
            value |= INVERT_FLAG;
        }
        value
    }

    pub fn encode(&self) -> [u8; 1] {
        [self.tag_byte()]
    }
}

/// Any Pact instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    Comp(Comparator),
    Conj(Conjunction),
}

impl OpCode {
    pub fn encoded_len(&self) -> usize {
        match self {
            OpCode::Comp(_) => Comparator::ENCODED_LEN,
            OpCode::Conj(_) => Conjunction::ENCODED_LEN,
        }
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            OpCode::Comp(comp) => buf.extend_from_slice(&comp.encode()),
            OpCode::Conj(conj) => buf.push(conj.tag_byte()),
        }
    }
}

impl From<Comparator> for OpCode {
    fn from(comp: Comparator) -> Self {
        OpCode::Comp(comp)
    }
}

impl From<Conjunction> for OpCode {
    fn from(conj: Conjunction) -> Self {
        OpCode::Conj(conj)
    }
}

/// The leading byte of an instruction.
impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        match op {
            OpCode::Comp(comp) => comp.control_byte(),
            OpCode::Conj(conj) => conj.tag_byte(),
        }
    }
}
