//! tsbyte - lowers a type-checked TypeScript program into a stack-based
//! bytecode module.
//!
//! The crate re-exports the workspace crates under one roof:
//!
//! - [`core`]: syntax kinds, descriptors, options, errors and the
//!   [`TypeChecker`] seam
//! - [`program`]: an in-memory [`TypeChecker`] assembled with
//!   [`ProgramBuilder`](program::ProgramBuilder)
//! - [`compiler`]: classification, lowering and the bytecode module
//!
//! # Example
//!
//! ```
//! use tsbyte::prelude::*;
//!
//! let mut builder = ProgramBuilder::new();
//! let file = builder.add_file("point.ts");
//! let root = builder.root(file).unwrap();
//! let point = builder.class_declaration(root, "Point", ModifierFlags::EXPORT).unwrap();
//! builder.constructor(point, &[("x", "number"), ("y", "number")]).unwrap();
//! let program = builder.build();
//!
//! let result = tsbyte::compile(&program, CompilerOptions::default());
//! assert!(result.is_success());
//! assert_eq!(result.classes[0].name, "Point");
//! assert_eq!(result.module.exports.len(), 1);
//! ```

pub use tsbyte_compiler as compiler;
pub use tsbyte_core as core;
pub use tsbyte_program as program;

pub use tsbyte_compiler::{CompilationResult, CompilationStats, Compiler};
pub use tsbyte_core::{
    ClassDescriptor, CompilationError, CompilerOptions, LiteralError, SignatureDescriptor,
    SymbolDescriptor, TypeChecker,
};

/// Compile a program with `options`.
///
/// Shorthand for `Compiler::new(options).compile(checker)`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile<C: TypeChecker + ?Sized>(
    checker: &C,
    options: CompilerOptions,
) -> CompilationResult {
    Compiler::new(options).compile(checker)
}

// Re-export main types
pub mod prelude {
    pub use crate::compile;
    pub use tsbyte_compiler::bytecode::{BytecodeModule, CompiledModule, OpCode};
    pub use tsbyte_compiler::{
        CompilationResult, CompilationStats, Compiler, Disposition, ModuleBuilder, ModuleEmitter,
        SkipReason, classify,
    };
    pub use tsbyte_core::{
        ClassDescriptor, CompilationError, CompilerOptions, LiteralError, ModifierFlags, ModuleKind,
        OverflowPolicy, ScriptTarget, SignatureDescriptor, SymbolDescriptor, SyntaxKind,
        TypeChecker,
    };
    pub use tsbyte_program::{Program, ProgramBuilder};
}
