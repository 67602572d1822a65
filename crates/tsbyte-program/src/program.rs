//! Program - an in-memory type-checked program.
//!
//! [`Program`] stores a resolved AST together with the symbols, types and
//! construct signatures the checker bound to it, and answers the
//! [`TypeChecker`] queries from that storage.
//!
//! # Storage Model
//!
//! - **Nodes**: a flat arena indexed by [`NodeId`]; each node records its kind,
//!   parent, ordered children, source text, span, own modifiers, declared name
//!   and bound symbol.
//! - **Symbols / Types / Signatures**: flat arenas indexed by their handles.
//!   Types are interned by display string, so `number` is one [`TypeId`].
//! - **Files**: compilation order is insertion order.
//!
//! Programs are built with [`ProgramBuilder`](crate::ProgramBuilder) and are
//! immutable afterwards.

use tsbyte_core::{
    DisplayPart, FileId, ModifierFlags, NodeId, SignatureId, Span, SymbolId, SyntaxKind,
    TypeChecker, TypeId,
};

#[derive(Debug, Clone)]
pub(crate) struct FileData {
    pub name: String,
    pub declaration: bool,
    pub root: NodeId,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub kind: SyntaxKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub text: String,
    pub span: Span,
    pub modifiers: ModifierFlags,
    /// Name node of a declaration.
    pub name: Option<NodeId>,
    /// Symbol bound at this node.
    pub symbol: Option<SymbolId>,
}

#[derive(Debug, Clone)]
pub(crate) struct SymbolData {
    pub name: String,
    pub documentation: Vec<DisplayPart>,
    pub value_declaration: Option<NodeId>,
    /// Type of the symbol at its declaration; `None` when unresolved.
    pub ty: Option<TypeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct TypeData {
    pub display: String,
    pub construct_signatures: Vec<SignatureId>,
}

#[derive(Debug, Clone)]
pub(crate) struct SignatureData {
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
    pub documentation: Vec<DisplayPart>,
}

/// A type-checked program held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub(crate) file_ids: Vec<FileId>,
    pub(crate) files: Vec<FileData>,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) symbols: Vec<SymbolData>,
    pub(crate) types: Vec<TypeData>,
    pub(crate) signatures: Vec<SignatureData>,
}

impl Program {
    /// Number of nodes across all files.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of source files, declaration files included.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Find a file by name.
    pub fn file_by_name(&self, name: &str) -> Option<FileId> {
        self.files
            .iter()
            .position(|file| file.name == name)
            .map(|index| FileId::new(index as u32))
    }

    fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.as_usize()]
    }

    fn symbol(&self, symbol: SymbolId) -> &SymbolData {
        &self.symbols[symbol.as_usize()]
    }

    fn signature(&self, signature: SignatureId) -> &SignatureData {
        &self.signatures[signature.as_usize()]
    }
}

impl TypeChecker for Program {
    fn source_files(&self) -> &[FileId] {
        &self.file_ids
    }

    fn file_name(&self, file: FileId) -> &str {
        &self.files[file.as_usize()].name
    }

    fn is_declaration_file(&self, file: FileId) -> bool {
        self.files[file.as_usize()].declaration
    }

    fn file_root(&self, file: FileId) -> NodeId {
        self.files[file.as_usize()].root
    }

    fn kind(&self, node: NodeId) -> SyntaxKind {
        self.node(node).kind
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    fn span(&self, node: NodeId) -> Span {
        self.node(node).span
    }

    fn declaration_name(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).name
    }

    fn combined_modifier_flags(&self, node: NodeId) -> ModifierFlags {
        let data = self.node(node);
        let mut flags = data.modifiers;

        // `export const a = 1` puts the modifier on the statement, two levels up.
        if data.kind == SyntaxKind::VariableDeclaration {
            let list = data
                .parent
                .filter(|&parent| self.kind(parent) == SyntaxKind::VariableDeclarationList);
            if let Some(list) = list {
                flags |= self.node(list).modifiers;
                if let Some(statement) = self.node(list).parent {
                    if self.kind(statement) == SyntaxKind::VariableStatement {
                        flags |= self.node(statement).modifiers;
                    }
                }
            }
        }

        flags
    }

    fn symbol_at_location(&self, node: NodeId) -> Option<SymbolId> {
        self.node(node).symbol
    }

    fn symbol_name(&self, symbol: SymbolId) -> &str {
        &self.symbol(symbol).name
    }

    fn symbol_documentation(&self, symbol: SymbolId) -> &[DisplayPart] {
        &self.symbol(symbol).documentation
    }

    fn value_declaration(&self, symbol: SymbolId) -> Option<NodeId> {
        self.symbol(symbol).value_declaration
    }

    fn type_of_symbol_at_location(&self, symbol: SymbolId, _location: NodeId) -> Option<TypeId> {
        self.symbol(symbol).ty
    }

    fn construct_signatures(&self, ty: TypeId) -> &[SignatureId] {
        &self.types[ty.as_usize()].construct_signatures
    }

    fn signature_parameters(&self, signature: SignatureId) -> &[SymbolId] {
        &self.signature(signature).parameters
    }

    fn signature_return_type(&self, signature: SignatureId) -> TypeId {
        self.signature(signature).return_type
    }

    fn signature_documentation(&self, signature: SignatureId) -> &[DisplayPart] {
        &self.signature(signature).documentation
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        self.types[ty.as_usize()].display.clone()
    }
}
