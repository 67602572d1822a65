//! LoweringContext - state threaded through one compilation.
//!
//! The context owns everything a compilation accumulates: the emitter over
//! the module builder, the pending instruction slot, the class descriptors
//! extracted so far and the statistics. It is created per compilation and
//! never shared, so lowering several programs in parallel only needs one
//! context (and one builder) per program.

use tsbyte_core::ClassDescriptor;

use crate::emit::{EmitCounts, EmitterCheckpoint, ModuleBuilder, ModuleEmitter};

/// Counters collected while lowering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilationStats {
    /// Source files lowered without error.
    pub files_lowered: usize,
    /// Declaration files, which are never lowered.
    pub declaration_files_skipped: usize,
    /// Source files rolled back after a literal error.
    pub files_failed: usize,
    /// Nodes that failed the visibility check, subtrees included.
    pub nodes_pruned: usize,
    pub classes_extracted: usize,
    /// Visible classes the checker could not resolve.
    pub classes_skipped: usize,
    pub literals_lowered: usize,
    /// Visible nodes of kinds that are not lowered yet.
    pub deferred_nodes: usize,
}

/// Saved state of a [`LoweringContext`].
#[derive(Debug, Clone, Copy)]
pub struct ContextCheckpoint<C, I> {
    emitter: EmitterCheckpoint<C>,
    classes: usize,
    pending: Option<I>,
    stats: CompilationStats,
}

/// Mutable state of one compilation.
pub struct LoweringContext<'m, B: ModuleBuilder> {
    emitter: ModuleEmitter<'m, B>,
    /// Result of the most recent literal. Overwritten, never accumulated.
    pending: Option<B::Instr>,
    classes: Vec<ClassDescriptor>,
    stats: CompilationStats,
}

impl<'m, B: ModuleBuilder> LoweringContext<'m, B> {
    pub fn new(builder: &'m mut B) -> Self {
        Self {
            emitter: ModuleEmitter::new(builder),
            pending: None,
            classes: Vec::new(),
            stats: CompilationStats::default(),
        }
    }

    pub fn emitter(&mut self) -> &mut ModuleEmitter<'m, B> {
        &mut self.emitter
    }

    // ==========================================================================
    // Pending value
    // ==========================================================================

    /// Make `instr` the pending value, returning the one it replaces.
    pub fn set_pending(&mut self, instr: B::Instr) -> Option<B::Instr> {
        self.pending.replace(instr)
    }

    /// The pending value, if any literal was lowered.
    pub fn pending(&self) -> Option<B::Instr> {
        self.pending
    }

    /// Take the pending value, leaving the slot empty.
    pub fn take_pending(&mut self) -> Option<B::Instr> {
        self.pending.take()
    }

    // ==========================================================================
    // Descriptors and statistics
    // ==========================================================================

    pub fn push_class(&mut self, class: ClassDescriptor) {
        self.classes.push(class);
    }

    /// Descriptors extracted so far, in traversal order.
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn stats(&self) -> &CompilationStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut CompilationStats {
        &mut self.stats
    }

    pub fn counts(&self) -> EmitCounts {
        self.emitter.counts()
    }

    // ==========================================================================
    // Checkpoints
    // ==========================================================================

    /// Capture the emitter and builder state along with the context's own.
    pub fn checkpoint(&self) -> ContextCheckpoint<B::Checkpoint, B::Instr> {
        ContextCheckpoint {
            emitter: self.emitter.checkpoint(),
            classes: self.classes.len(),
            pending: self.pending,
            stats: self.stats,
        }
    }

    /// Discard instructions, emit counts, descriptors and statistics
    /// recorded since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: ContextCheckpoint<B::Checkpoint, B::Instr>) {
        self.emitter.rollback(checkpoint.emitter);
        self.classes.truncate(checkpoint.classes);
        self.pending = checkpoint.pending;
        self.stats = checkpoint.stats;
    }

    /// Finish the compilation, returning the descriptors and statistics.
    pub fn finish(self) -> (Vec<ClassDescriptor>, CompilationStats) {
        (self.classes, self.stats)
    }
}
