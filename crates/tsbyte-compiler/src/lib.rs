//! tsbyte compiler
//!
//! Lowers a type-checked program into a stack-based bytecode module.
//!
//! ## Architecture
//!
//! - **Classification**: every [`SyntaxKind`](tsbyte_core::SyntaxKind) maps to
//!   one [`Disposition`] at compile time
//! - **Export walk**: per source file, visit visible declarations and dispatch
//!   them on their disposition
//! - **Lowering**: literals become constants through the [`ModuleEmitter`];
//!   classes become [`ClassDescriptor`]s
//!
//! ## Modules
//!
//! - [`bytecode`]: Bytecode types and the [`BytecodeModule`](bytecode::BytecodeModule) builder
//! - [`classify`]: Node kind classification
//! - [`context`]: Per-compilation lowering state
//! - [`emit`]: The module builder seam and the emitter adapter
//! - [`literals`]: Constant lowering
//! - [`passes`]: The export walk
//! - [`signatures`]: Construct signature extraction

pub mod bytecode;
pub mod classify;
pub mod context;
pub mod emit;
pub mod literals;
pub mod passes;
pub mod signatures;

pub use classify::{Disposition, SkipReason, classify};
pub use context::{CompilationStats, LoweringContext};
pub use emit::{EmitCounts, EmitterCheckpoint, ModuleBuilder, ModuleEmitter};
pub use literals::ConstantLowering;
pub use passes::ExportWalk;
pub use signatures::{SignatureExtractor, UnresolvedClass};

// Re-export CompilationError from core for convenience
pub use tsbyte_core::CompilationError;

use log::debug;
use tsbyte_core::{ClassDescriptor, CompilerOptions, TypeChecker};

use crate::bytecode::{BytecodeModule, CompiledModule};

/// What lowering produced, independent of the module builder.
#[derive(Debug, Clone, Default)]
pub struct LoweringOutput {
    /// Descriptors of visible classes in file order, then document order.
    pub classes: Vec<ClassDescriptor>,
    /// One entry per file that failed; its output was discarded.
    pub errors: Vec<CompilationError>,
    pub stats: CompilationStats,
    pub counts: EmitCounts,
}

/// Result of compilation.
#[derive(Debug, Clone)]
pub struct CompilationResult {
    /// The compiled module.
    pub module: CompiledModule,
    /// Descriptors of every visible class, embedded or not.
    pub classes: Vec<ClassDescriptor>,
    /// Any errors that occurred.
    pub errors: Vec<CompilationError>,
    pub stats: CompilationStats,
}

impl CompilationResult {
    /// Check if compilation succeeded (no errors).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The main compiler entry point.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile a program into a bytecode module.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile<C: TypeChecker + ?Sized>(&self, checker: &C) -> CompilationResult {
        let mut module = BytecodeModule::new();
        let output = self.lower(checker, &mut module);

        let exports = if self.options.embed_descriptors {
            output.classes.clone()
        } else {
            Vec::new()
        };

        let mut compiled = module.finish(exports);
        compiled.target = self.options.target;
        compiled.module_kind = self.options.module;

        CompilationResult {
            module: compiled,
            classes: output.classes,
            errors: output.errors,
            stats: output.stats,
        }
    }

    /// Lower a program into any module builder.
    ///
    /// Files are lowered in compilation order; declaration files are
    /// skipped. A file that fails is rolled back entirely: the builder, the
    /// emit counts, the descriptor list and the statistics return to their
    /// state before the file, and the error is recorded.
    pub fn lower<C: TypeChecker + ?Sized, B: ModuleBuilder>(
        &self,
        checker: &C,
        builder: &mut B,
    ) -> LoweringOutput {
        let mut ctx = LoweringContext::new(builder);
        let mut errors = Vec::new();

        for &file in checker.source_files() {
            let name = checker.file_name(file);
            if checker.is_declaration_file(file) {
                debug!("{name}: declaration file, skipped");
                ctx.stats_mut().declaration_files_skipped += 1;
                continue;
            }

            let checkpoint = ctx.checkpoint();
            let walk = ExportWalk::new(checker, &mut ctx, &self.options, file);
            match walk.run(checker.file_root(file)) {
                Ok(()) => ctx.stats_mut().files_lowered += 1,
                Err(source) => {
                    debug!("{name}: {source}; discarding the file's output");
                    ctx.rollback(checkpoint);
                    ctx.stats_mut().files_failed += 1;
                    errors.push(CompilationError::new(name, source));
                }
            }
        }

        let counts = ctx.counts();
        let (classes, stats) = ctx.finish();
        debug!(
            "lowered {} file(s): {} class(es), {} literal(s), {} deferred node(s), {} error(s)",
            stats.files_lowered,
            stats.classes_extracted,
            stats.literals_lowered,
            stats.deferred_nodes,
            errors.len()
        );

        LoweringOutput {
            classes,
            errors,
            stats,
            counts,
        }
    }
}
