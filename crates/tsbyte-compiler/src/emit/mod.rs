//! Instruction emission.
//!
//! [`ModuleBuilder`] is the write-only sink lowering emits into. The shipped
//! implementation is [`BytecodeModule`](crate::bytecode::BytecodeModule); any
//! other backend (a recorder in tests, a different binary format) can sit
//! behind the same trait.
//!
//! [`ModuleEmitter`] is the thin adapter the lowering passes talk to. It
//! forwards each call to the builder, tracks the source line, counts what it
//! emitted and traces every instruction.
//!
//! # Example
//!
//! ```
//! use tsbyte_compiler::bytecode::{BytecodeModule, OpCode};
//! use tsbyte_compiler::emit::ModuleEmitter;
//!
//! let mut module = BytecodeModule::new();
//! let mut emitter = ModuleEmitter::new(&mut module);
//! emitter.set_line(1);
//! emitter.emit_i32(42);
//! emitter.emit_string("hi", "String");
//!
//! let compiled = module.finish(Vec::new());
//! compiled.code.assert_opcodes(&[
//!     OpCode::ConstI32,
//!     OpCode::Pop,
//!     OpCode::Constant,
//!     OpCode::Call,
//!     OpCode::Pop,
//! ]);
//! ```

use std::fmt;

use log::trace;

/// A sink for module instructions.
///
/// Every operation returns an opaque handle to the instruction it created.
/// Handles passed as call arguments are consumed by that call; handles never
/// consumed are top-level expressions of the module.
pub trait ModuleBuilder {
    /// Handle to a created instruction.
    type Instr: Copy + fmt::Debug;
    /// Saved builder state for [`rollback`](ModuleBuilder::rollback).
    type Checkpoint: Copy + fmt::Debug;

    /// Append a 32-bit integer constant.
    fn i32_const(&mut self, value: i32) -> Self::Instr;

    /// Append a 64-bit float constant.
    fn f64_const(&mut self, value: f64) -> Self::Instr;

    /// Append a 64-bit integer constant given as its high and low 32 bits.
    ///
    /// The value is `((high as u64) << 32 | low as u64) as i64`.
    fn i64_const(&mut self, high: u32, low: u32) -> Self::Instr;

    /// Append raw string data, the argument of a host string constructor.
    fn string_data(&mut self, text: &str) -> Self::Instr;

    /// Append a call to the host function `callee`.
    fn call(&mut self, callee: &str, args: &[Self::Instr]) -> Self::Instr;

    /// Source line for instructions created from now on.
    fn set_line(&mut self, _line: u32) {}

    /// Capture the current state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Discard everything created since `checkpoint`.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

/// Counts of what a [`ModuleEmitter`] emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitCounts {
    pub i32_constants: usize,
    pub i64_constants: usize,
    pub f64_constants: usize,
    pub strings: usize,
}

impl EmitCounts {
    /// Total number of literals emitted.
    pub fn total(&self) -> usize {
        self.i32_constants + self.i64_constants + self.f64_constants + self.strings
    }
}

/// Saved state of a [`ModuleEmitter`] and its builder.
#[derive(Debug, Clone, Copy)]
pub struct EmitterCheckpoint<C> {
    module: C,
    counts: EmitCounts,
    line: u32,
}

/// Adapter between the lowering passes and a [`ModuleBuilder`].
pub struct ModuleEmitter<'m, B: ModuleBuilder> {
    builder: &'m mut B,
    current_line: u32,
    counts: EmitCounts,
}

impl<'m, B: ModuleBuilder> ModuleEmitter<'m, B> {
    /// Create an emitter writing into `builder`.
    pub fn new(builder: &'m mut B) -> Self {
        Self {
            builder,
            current_line: 1,
            counts: EmitCounts::default(),
        }
    }

    /// Set current source line for debug info.
    pub fn set_line(&mut self, line: u32) {
        self.current_line = line;
        self.builder.set_line(line);
    }

    /// Get current source line.
    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    /// What this emitter has emitted so far.
    pub fn counts(&self) -> EmitCounts {
        self.counts
    }

    // ==========================================================================
    // Constants
    // ==========================================================================

    /// Emit a 32-bit integer constant.
    pub fn emit_i32(&mut self, value: i32) -> B::Instr {
        let instr = self.builder.i32_const(value);
        trace!("line {}: i32.const {value} -> {instr:?}", self.current_line);
        self.counts.i32_constants += 1;
        instr
    }

    /// Emit a 64-bit float constant.
    pub fn emit_f64(&mut self, value: f64) -> B::Instr {
        let instr = self.builder.f64_const(value);
        trace!("line {}: f64.const {value} -> {instr:?}", self.current_line);
        self.counts.f64_constants += 1;
        instr
    }

    /// Emit a 64-bit integer constant from its halves.
    pub fn emit_i64(&mut self, high: u32, low: u32) -> B::Instr {
        let instr = self.builder.i64_const(high, low);
        trace!(
            "line {}: i64.const {high:#010x}:{low:#010x} -> {instr:?}",
            self.current_line
        );
        self.counts.i64_constants += 1;
        instr
    }

    /// Emit a host string built from `text` by calling `constructor`.
    pub fn emit_string(&mut self, text: &str, constructor: &str) -> B::Instr {
        let data = self.builder.string_data(text);
        let instr = self.builder.call(constructor, &[data]);
        trace!(
            "line {}: call {constructor}({text:?}) -> {instr:?}",
            self.current_line
        );
        self.counts.strings += 1;
        instr
    }

    // ==========================================================================
    // Checkpoints
    // ==========================================================================

    /// Capture the builder state, the counts and the current line.
    pub fn checkpoint(&self) -> EmitterCheckpoint<B::Checkpoint> {
        EmitterCheckpoint {
            module: self.builder.checkpoint(),
            counts: self.counts,
            line: self.current_line,
        }
    }

    /// Discard everything emitted since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: EmitterCheckpoint<B::Checkpoint>) {
        trace!("rollback to {:?}", checkpoint.module);
        self.builder.rollback(checkpoint.module);
        self.counts = checkpoint.counts;
        self.current_line = checkpoint.line;
    }
}
