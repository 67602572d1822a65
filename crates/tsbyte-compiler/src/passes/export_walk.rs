//! Export walk - select the externally visible declarations of a file.
//!
//! The walk visits the direct children of a file's `SourceFile` node. A node
//! is visible when it carries the `export` modifier or sits directly under
//! the `SourceFile`. Invisible nodes are pruned with their whole subtree.
//!
//! Visible nodes are dispatched on their [`Disposition`]:
//!
//! - `ClassDecl`: extract the class descriptor
//! - `Recurse` (namespaces): visit the children with the same rule; the
//!   `ModuleBlock` body of a namespace is transparent
//! - `LowerNumeric` / `LowerString`: lower the literal into the pending slot
//! - `Skip`: nothing; not-yet-lowered kinds are counted
//!
//! Classes inside function bodies or class members are never reached: the
//! walk only descends through namespaces.

use log::{debug, trace};
use tsbyte_core::{CompilerOptions, FileId, LiteralError, NodeId, SyntaxKind, TypeChecker};

use crate::classify::{Disposition, SkipReason, classify};
use crate::context::LoweringContext;
use crate::emit::ModuleBuilder;
use crate::literals::ConstantLowering;
use crate::signatures::SignatureExtractor;

/// Walks one source file, feeding visible declarations to lowering.
pub struct ExportWalk<'a, 'm, C: TypeChecker + ?Sized, B: ModuleBuilder> {
    checker: &'a C,
    ctx: &'a mut LoweringContext<'m, B>,
    lowering: ConstantLowering<'a>,
    extractor: SignatureExtractor<'a, C>,
    file_name: &'a str,
}

impl<'a, 'm, C: TypeChecker + ?Sized, B: ModuleBuilder> ExportWalk<'a, 'm, C, B> {
    /// Create a walk over `file`.
    pub fn new(
        checker: &'a C,
        ctx: &'a mut LoweringContext<'m, B>,
        options: &'a CompilerOptions,
        file: FileId,
    ) -> Self {
        Self {
            checker,
            ctx,
            lowering: ConstantLowering::new(options),
            extractor: SignatureExtractor::new(checker),
            file_name: checker.file_name(file),
        }
    }

    /// Walk the file rooted at `root`.
    ///
    /// Stops at the first literal that cannot be lowered. The caller decides
    /// what happens to what the walk already emitted.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, root: NodeId) -> Result<(), LiteralError> {
        let checker = self.checker;
        for &child in checker.children(root) {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: NodeId) -> Result<(), LiteralError> {
        if !is_exported(self.checker, node) {
            let kind = self.checker.kind(node);
            trace!("{}: pruned {kind:?} {node}", self.file_name);
            self.ctx.stats_mut().nodes_pruned += 1;
            return Ok(());
        }
        self.dispatch(node)
    }

    fn dispatch(&mut self, node: NodeId) -> Result<(), LiteralError> {
        let checker = self.checker;
        let kind = checker.kind(node);
        let disposition = classify(kind);
        trace!("{}: {kind:?} {node} -> {disposition:?}", self.file_name);

        match disposition {
            Disposition::ClassDecl => self.visit_class(node),
            Disposition::Recurse => {
                for &child in checker.children(node) {
                    if checker.kind(child) == SyntaxKind::ModuleBlock {
                        self.dispatch(child)?;
                    } else {
                        self.visit(child)?;
                    }
                }
            }
            Disposition::LowerNumeric | Disposition::LowerString => {
                let span = checker.span(node);
                let emitter = self.ctx.emitter();
                emitter.set_line(span.line);
                let text = checker.text(node);
                let instr = self.lowering.lower(kind, text, span, emitter)?;
                self.ctx.set_pending(instr);
                self.ctx.stats_mut().literals_lowered += 1;
            }
            Disposition::Skip(SkipReason::NotYetLowered) => {
                self.ctx.stats_mut().deferred_nodes += 1;
            }
            Disposition::Skip(_) => {}
        }
        Ok(())
    }

    fn visit_class(&mut self, node: NodeId) {
        match self.extractor.extract_class(node, self.file_name) {
            Ok(class) => {
                trace!(
                    "{}: class {} with {} constructor(s)",
                    self.file_name,
                    class.name,
                    class.constructor_count()
                );
                self.ctx.stats_mut().classes_extracted += 1;
                self.ctx.push_class(class);
            }
            Err(reason) => {
                debug!(
                    "{}: skipping class at {}: {}",
                    self.file_name,
                    self.checker.span(node),
                    reason
                );
                self.ctx.stats_mut().classes_skipped += 1;
            }
        }
    }
}

/// Whether `node` is externally visible: exported explicitly, or declared
/// directly in a source file.
pub fn is_exported<C: TypeChecker + ?Sized>(checker: &C, node: NodeId) -> bool {
    checker.combined_modifier_flags(node).is_exported() || checker.is_parent_source_file(node)
}
