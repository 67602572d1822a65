//! The type-checked AST provider seam.
//!
//! Parsing, binding and type checking happen elsewhere. The lowering engine
//! only asks the questions listed on [`TypeChecker`] and never mutates the
//! program. Handles ([`NodeId`], [`SymbolId`], ...) are minted by the
//! implementation and are only meaningful to the checker that produced them.

use crate::{FileId, ModifierFlags, NodeId, SignatureId, Span, SymbolId, SyntaxKind, TypeId};

/// Category of a documentation display part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayPartKind {
    #[default]
    Text,
    LineBreak,
    Space,
    Keyword,
    Punctuation,
    ParameterName,
    /// `{@link ...}` target.
    Link,
}

/// One fragment of a documentation comment as reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayPart {
    pub text: String,
    pub kind: DisplayPartKind,
}

impl DisplayPart {
    /// A plain text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: DisplayPartKind::Text,
        }
    }

    /// A line break fragment.
    pub fn line_break() -> Self {
        Self {
            text: "\n".to_string(),
            kind: DisplayPartKind::LineBreak,
        }
    }
}

/// Flatten documentation parts to plain text by concatenating their text.
///
/// ```
/// use tsbyte_core::{DisplayPart, display_parts_to_string};
///
/// let parts = [DisplayPart::text("A point."), DisplayPart::line_break(), DisplayPart::text("2D.")];
/// assert_eq!(display_parts_to_string(&parts), "A point.\n2D.");
/// ```
pub fn display_parts_to_string(parts: &[DisplayPart]) -> String {
    parts.iter().map(|part| part.text.as_str()).collect()
}

/// Queries the lowering engine makes against a type-checked program.
///
/// Implementations must be deterministic: the same program answers the same
/// query the same way, and child lists preserve source order.
pub trait TypeChecker {
    // ==========================================================================
    // Files
    // ==========================================================================

    /// Source files of the compilation, in compilation order.
    fn source_files(&self) -> &[FileId];

    /// Display name of a source file.
    fn file_name(&self, file: FileId) -> &str;

    /// Whether the file only contains type declarations (a `.d.ts` file).
    fn is_declaration_file(&self, file: FileId) -> bool;

    /// The `SourceFile` node of a file.
    fn file_root(&self, file: FileId) -> NodeId;

    // ==========================================================================
    // Syntax
    // ==========================================================================

    fn kind(&self, node: NodeId) -> SyntaxKind;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Direct children of a node in source order (one level only).
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Source text of the node, exactly as written (quotes and all).
    fn text(&self, node: NodeId) -> &str;

    fn span(&self, node: NodeId) -> Span;

    /// The name node of a declaration, if it has one.
    ///
    /// `export default class {}` has no name.
    fn declaration_name(&self, node: NodeId) -> Option<NodeId>;

    /// Modifier flags of a declaration combined with those inherited from
    /// its enclosing declaration list and statement.
    fn combined_modifier_flags(&self, node: NodeId) -> ModifierFlags;

    /// Whether the node's parent is a `SourceFile`.
    fn is_parent_source_file(&self, node: NodeId) -> bool {
        self.parent(node)
            .is_some_and(|parent| self.kind(parent) == SyntaxKind::SourceFile)
    }

    // ==========================================================================
    // Symbols
    // ==========================================================================

    /// Symbol bound at a node (usually a declaration's name).
    fn symbol_at_location(&self, node: NodeId) -> Option<SymbolId>;

    fn symbol_name(&self, symbol: SymbolId) -> &str;

    /// Raw documentation comment parts of a symbol.
    fn symbol_documentation(&self, symbol: SymbolId) -> &[DisplayPart];

    /// The declaration that introduces the symbol's value, if any.
    fn value_declaration(&self, symbol: SymbolId) -> Option<NodeId>;

    // ==========================================================================
    // Types
    // ==========================================================================

    /// Type of a symbol as seen at `location`. `None` when the checker cannot
    /// resolve it there.
    fn type_of_symbol_at_location(&self, symbol: SymbolId, location: NodeId) -> Option<TypeId>;

    /// Construct signatures of a type, in declaration order.
    fn construct_signatures(&self, ty: TypeId) -> &[SignatureId];

    /// Parameter symbols of a signature, in declaration order.
    fn signature_parameters(&self, signature: SignatureId) -> &[SymbolId];

    fn signature_return_type(&self, signature: SignatureId) -> TypeId;

    fn signature_documentation(&self, signature: SignatureId) -> &[DisplayPart];

    /// Human-readable rendering of a type.
    fn type_to_string(&self, ty: TypeId) -> String;
}
