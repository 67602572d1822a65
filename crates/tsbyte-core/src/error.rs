//! Error types for lowering.
//!
//! ```text
//! CompilationError (file name + cause)
//! └── LiteralError   - a literal whose source text cannot be lowered
//! ```

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::{Span, SyntaxKind};

// ============================================================================
// Literal Errors
// ============================================================================

/// A literal node whose text could not be turned into a constant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Numeric literal text that is not a valid number.
    #[error("invalid numeric literal '{text}' at {span}")]
    InvalidNumber { text: String, span: Span },

    /// Big-integer literal text that is not a valid integer.
    #[error("invalid bigint literal '{text}' at {span}")]
    InvalidBigInt { text: String, span: Span },

    /// Big-integer literal that does not fit in 64 bits.
    #[error("bigint literal '{text}' at {span} does not fit in 64 bits")]
    BigIntOutOfRange { text: String, span: Span },

    /// Integral numeric literal outside the signed 32-bit range, rejected by
    /// `OverflowPolicy::Reject`.
    #[error("integer literal {value} at {span} is outside the 32-bit range")]
    IntegerOutOfRange {
        value: OrderedFloat<f64>,
        span: Span,
    },

    /// String literal text with broken quoting or escapes.
    #[error("invalid string literal {text} at {span}: {detail}")]
    InvalidString {
        text: String,
        span: Span,
        detail: String,
    },

    /// A node of a kind that is not a lowerable literal.
    #[error("cannot lower {kind:?} at {span} as a constant")]
    UnexpectedKind { kind: SyntaxKind, span: Span },
}

impl LiteralError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            LiteralError::InvalidNumber { span, .. } => *span,
            LiteralError::InvalidBigInt { span, .. } => *span,
            LiteralError::BigIntOutOfRange { span, .. } => *span,
            LiteralError::IntegerOutOfRange { span, .. } => *span,
            LiteralError::InvalidString { span, .. } => *span,
            LiteralError::UnexpectedKind { span, .. } => *span,
        }
    }
}

// ============================================================================
// Compilation Errors
// ============================================================================

/// A failure while lowering one source file.
///
/// The compiler discards everything the failing file emitted and carries on
/// with the next file, so one compilation can report several of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}: {source}")]
pub struct CompilationError {
    /// Name of the file being lowered.
    pub file: String,
    #[source]
    pub source: LiteralError,
}

impl CompilationError {
    pub fn new(file: impl Into<String>, source: LiteralError) -> Self {
        Self {
            file: file.into(),
            source,
        }
    }

    /// Location of the failure inside `file`.
    pub fn span(&self) -> Span {
        self.source.span()
    }
}
