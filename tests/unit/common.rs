//! Shared fixtures.

use tsbyte::core::{FileId, NodeId};
use tsbyte::prelude::*;

/// A builder holding one source file, with that file's root node.
pub fn single_file(name: &str) -> (ProgramBuilder, FileId, NodeId) {
    let mut builder = ProgramBuilder::new();
    let file = builder.add_file(name);
    let root = builder.root(file).unwrap();
    (builder, file, root)
}

/// Compile with default options.
pub fn compile_default(program: &Program) -> CompilationResult {
    compile(program, CompilerOptions::default())
}

/// Names of the extracted classes, in order.
pub fn class_names(result: &CompilationResult) -> Vec<&str> {
    result.classes.iter().map(|c| c.name.as_str()).collect()
}
