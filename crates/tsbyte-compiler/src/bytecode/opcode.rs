//! Bytecode operation codes.
//!
//! Each opcode is a single byte, with operands following inline (big-endian).

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Bytecode operation codes.
///
/// The VM is a stack-based machine: constants push one value, calls pop
/// their arguments and push the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // =========================================================================
    // Constants
    // =========================================================================
    /// Push constant from pool (8-bit index).
    /// Operand: u8 constant index
    Constant = 0,
    /// Push constant from pool (32-bit index).
    /// Operand: u32 constant index
    ConstantWide,
    /// Push a 32-bit integer.
    /// Operand: u32 two's complement value
    ConstI32,
    /// Push a 64-bit integer from its halves.
    /// Operand: u32 high bits, u32 low bits
    ConstI64,

    // =========================================================================
    // Stack Operations
    // =========================================================================
    /// Pop top of stack.
    Pop,

    // =========================================================================
    // Host Calls
    // =========================================================================
    /// Call a host function.
    /// Operand: u32 constant index (HostHash) + u16 arg count
    Call,
}

impl OpCode {
    /// Convert from u8, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        OpCode::try_from(value).ok()
    }

    /// Get the size of operands for this opcode in bytes.
    ///
    /// This does NOT include the opcode byte itself.
    pub fn operand_size(&self) -> usize {
        match self {
            OpCode::Pop => 0,
            OpCode::Constant => 1,
            OpCode::ConstantWide | OpCode::ConstI32 => 4,
            OpCode::Call => 6,
            OpCode::ConstI64 => 8,
        }
    }

    /// Get the name of this opcode for debugging.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::Constant => "CONSTANT",
            OpCode::ConstantWide => "CONSTANT_WIDE",
            OpCode::ConstI32 => "CONST_I32",
            OpCode::ConstI64 => "CONST_I64",
            OpCode::Pop => "POP",
            OpCode::Call => "CALL",
        }
    }
}
