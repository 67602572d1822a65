//! Errors raised while building a [`Program`](crate::Program).

use thiserror::Error;

use tsbyte_core::{FileId, NodeId, SignatureId, SymbolId, SyntaxKind};

/// Misuse of the [`ProgramBuilder`](crate::ProgramBuilder) API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("unknown file: {0}")]
    UnknownFile(FileId),

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("unknown symbol: {0}")]
    UnknownSymbol(SymbolId),

    #[error("unknown signature: {0}")]
    UnknownSignature(SignatureId),

    /// Constructors can only be added to class declarations with a resolved type.
    #[error("{node} is a {kind:?}, not a resolved class declaration")]
    NotAClass { node: NodeId, kind: SyntaxKind },

    /// `SourceFile` nodes are created by `add_file`, never as children.
    #[error("a SourceFile node cannot be nested under {parent}")]
    NestedSourceFile { parent: NodeId },
}
