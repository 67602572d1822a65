//! Bytecode types for the tsbyte compiler.
//!
//! - [`OpCode`] - The instruction set for the VM
//! - [`BytecodeChunk`] - The module's instruction stream
//! - [`Constant`] and [`ConstantPool`] - Module-level constant storage
//! - [`BytecodeModule`] - The [`ModuleBuilder`](crate::emit::ModuleBuilder) producing a [`CompiledModule`]

mod chunk;
mod constant;
mod encode;
mod module;
mod opcode;

pub use chunk::BytecodeChunk;
pub use constant::{Constant, ConstantPool};
pub use encode::{FORMAT_VERSION, MAGIC};
pub use module::{BytecodeModule, Checkpoint, CompiledModule, HostImport, InstrRef};
pub use opcode::OpCode;
