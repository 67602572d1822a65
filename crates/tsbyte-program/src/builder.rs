//! ProgramBuilder - assembles a [`Program`] node by node.
//!
//! The builder plays the part of parser, binder and checker at once: callers
//! add syntax nodes under existing parents and the declaration helpers
//! ([`class_declaration`](ProgramBuilder::class_declaration),
//! [`constructor`](ProgramBuilder::constructor), ...) bind the symbols and
//! types a checker would have produced for them.
//!
//! Spans are assigned in creation order: every node takes the next line of
//! its file, starting at line 1 for the `SourceFile` node.
//!
//! # Example
//!
//! ```
//! use tsbyte_core::{ModifierFlags, TypeChecker};
//! use tsbyte_program::ProgramBuilder;
//!
//! let mut builder = ProgramBuilder::new();
//! let file = builder.add_file("point.ts");
//! let root = builder.root(file).unwrap();
//! let point = builder.class_declaration(root, "Point", ModifierFlags::EXPORT).unwrap();
//! builder.constructor(point, &[("x", "number"), ("y", "number")]).unwrap();
//! let program = builder.build();
//!
//! assert_eq!(program.source_files(), &[file]);
//! ```

use rustc_hash::FxHashMap;

use tsbyte_core::{
    DisplayPart, FileId, ModifierFlags, NodeId, SignatureId, Span, SymbolId, SyntaxKind, TypeId,
};

use crate::ProgramError;
use crate::program::{FileData, NodeData, Program, SignatureData, SymbolData, TypeData};

/// Node handles of a namespace declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceNodes {
    /// The `ModuleDeclaration` node.
    pub declaration: NodeId,
    /// The `ModuleBlock` body; namespace members go here.
    pub body: NodeId,
}

/// Static and instance types of a class declaration.
#[derive(Debug, Clone, Copy)]
struct ClassTypes {
    constructor_type: TypeId,
    instance_type: TypeId,
}

/// Incrementally builds a [`Program`].
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    program: Program,
    /// Interned types by display string.
    type_index: FxHashMap<String, TypeId>,
    classes: FxHashMap<NodeId, ClassTypes>,
    /// Next line number per file.
    next_line: Vec<u32>,
    node_files: Vec<FileId>,
}

impl ProgramBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Files
    // ==========================================================================

    /// Add a source file to the end of the compilation order.
    pub fn add_file(&mut self, name: impl Into<String>) -> FileId {
        self.push_file(name.into(), false)
    }

    /// Add a declaration (`.d.ts`) file to the end of the compilation order.
    pub fn add_declaration_file(&mut self, name: impl Into<String>) -> FileId {
        self.push_file(name.into(), true)
    }

    /// The `SourceFile` node of a file.
    pub fn root(&self, file: FileId) -> Result<NodeId, ProgramError> {
        self.program
            .files
            .get(file.as_usize())
            .map(|data| data.root)
            .ok_or(ProgramError::UnknownFile(file))
    }

    fn push_file(&mut self, name: String, declaration: bool) -> FileId {
        let file = FileId::new(self.program.files.len() as u32);
        self.next_line.push(1);
        let root = self.push_node(file, None, SyntaxKind::SourceFile, name.clone());
        self.program.files.push(FileData {
            name,
            declaration,
            root,
        });
        self.program.file_ids.push(file);
        file
    }

    // ==========================================================================
    // Syntax
    // ==========================================================================

    /// Append a node as the last child of `parent`.
    pub fn node(
        &mut self,
        parent: NodeId,
        kind: SyntaxKind,
        text: impl Into<String>,
    ) -> Result<NodeId, ProgramError> {
        self.check_node(parent)?;
        if kind == SyntaxKind::SourceFile {
            return Err(ProgramError::NestedSourceFile { parent });
        }

        let file = self.node_files[parent.as_usize()];
        let node = self.push_node(file, Some(parent), kind, text.into());
        self.program.nodes[parent.as_usize()].children.push(node);
        Ok(node)
    }

    /// Replace the node's own modifier flags.
    pub fn set_modifiers(
        &mut self,
        node: NodeId,
        flags: ModifierFlags,
    ) -> Result<(), ProgramError> {
        self.check_node(node)?;
        self.program.nodes[node.as_usize()].modifiers = flags;
        Ok(())
    }

    /// Override the span assigned at creation.
    pub fn set_span(&mut self, node: NodeId, span: Span) -> Result<(), ProgramError> {
        self.check_node(node)?;
        self.program.nodes[node.as_usize()].span = span;
        Ok(())
    }

    fn push_node(
        &mut self,
        file: FileId,
        parent: Option<NodeId>,
        kind: SyntaxKind,
        text: String,
    ) -> NodeId {
        let node = NodeId::new(self.program.nodes.len() as u32);
        let line = &mut self.next_line[file.as_usize()];
        let span = Span::new(*line, 1, text.len() as u32);
        *line += 1;

        self.program.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
            text,
            span,
            modifiers: ModifierFlags::empty(),
            name: None,
            symbol: None,
        });
        self.node_files.push(file);
        node
    }

    fn check_node(&self, node: NodeId) -> Result<(), ProgramError> {
        if node.as_usize() < self.program.nodes.len() {
            Ok(())
        } else {
            Err(ProgramError::UnknownNode(node))
        }
    }

    // ==========================================================================
    // Symbols and types
    // ==========================================================================

    /// Intern a type by its display string.
    pub fn intern_type(&mut self, display: &str) -> TypeId {
        if let Some(&ty) = self.type_index.get(display) {
            return ty;
        }
        let ty = self.push_type(display.to_string());
        self.type_index.insert(display.to_string(), ty);
        ty
    }

    /// Create a type that is never shared, such as a class's constructor type.
    fn push_type(&mut self, display: String) -> TypeId {
        let ty = TypeId::new(self.program.types.len() as u32);
        self.program.types.push(TypeData {
            display,
            construct_signatures: Vec::new(),
        });
        ty
    }

    /// Create a symbol.
    pub fn symbol(
        &mut self,
        name: impl Into<String>,
        value_declaration: Option<NodeId>,
        ty: Option<TypeId>,
    ) -> SymbolId {
        let symbol = SymbolId::new(self.program.symbols.len() as u32);
        self.program.symbols.push(SymbolData {
            name: name.into(),
            documentation: Vec::new(),
            value_declaration,
            ty,
        });
        symbol
    }

    /// Symbol bound at a declaration's name, if any.
    pub fn declared_symbol(&self, declaration: NodeId) -> Option<SymbolId> {
        let name = self.program.nodes.get(declaration.as_usize())?.name?;
        self.program.nodes[name.as_usize()].symbol
    }

    /// Bind `symbol` at `node`.
    pub fn bind(&mut self, node: NodeId, symbol: SymbolId) -> Result<(), ProgramError> {
        self.check_node(node)?;
        self.check_symbol(symbol)?;
        self.program.nodes[node.as_usize()].symbol = Some(symbol);
        Ok(())
    }

    /// Set a symbol's documentation comment. Lines become separate text parts.
    pub fn set_documentation(&mut self, symbol: SymbolId, text: &str) -> Result<(), ProgramError> {
        self.check_symbol(symbol)?;
        self.program.symbols[symbol.as_usize()].documentation = documentation_parts(text);
        Ok(())
    }

    /// Set a construct signature's documentation comment.
    pub fn set_signature_documentation(
        &mut self,
        signature: SignatureId,
        text: &str,
    ) -> Result<(), ProgramError> {
        let data = self
            .program
            .signatures
            .get_mut(signature.as_usize())
            .ok_or(ProgramError::UnknownSignature(signature))?;
        data.documentation = documentation_parts(text);
        Ok(())
    }

    fn check_symbol(&self, symbol: SymbolId) -> Result<(), ProgramError> {
        if symbol.as_usize() < self.program.symbols.len() {
            Ok(())
        } else {
            Err(ProgramError::UnknownSymbol(symbol))
        }
    }

    // ==========================================================================
    // Declarations
    // ==========================================================================

    /// Declare `class Name {}` under `parent`, bound and fully resolved.
    ///
    /// A class left without explicit constructors gets the implicit
    /// `new () => Name` signature when the program is built.
    pub fn class_declaration(
        &mut self,
        parent: NodeId,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        let class =
            self.named_declaration(parent, SyntaxKind::ClassDeclaration, "class", name, flags)?;

        let constructor_type = self.push_type(format!("typeof {name}"));
        let instance_type = self.intern_type(name);
        let symbol = self.symbol(name, Some(class), Some(constructor_type));
        self.bind_name(class, symbol)?;

        self.classes.insert(
            class,
            ClassTypes {
                constructor_type,
                instance_type,
            },
        );
        Ok(class)
    }

    /// Declare a named class the checker could not bind a symbol to.
    pub fn unbound_class_declaration(
        &mut self,
        parent: NodeId,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        self.named_declaration(parent, SyntaxKind::ClassDeclaration, "class", name, flags)
    }

    /// Declare a named class whose symbol has no resolvable type.
    pub fn unresolved_class_declaration(
        &mut self,
        parent: NodeId,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        let class =
            self.named_declaration(parent, SyntaxKind::ClassDeclaration, "class", name, flags)?;
        let symbol = self.symbol(name, Some(class), None);
        self.bind_name(class, symbol)?;
        Ok(class)
    }

    /// Declare `export default class {}`: a class without a name.
    pub fn anonymous_class_declaration(
        &mut self,
        parent: NodeId,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        let class = self.node(parent, SyntaxKind::ClassDeclaration, "class {}")?;
        self.set_modifiers(class, flags)?;
        Ok(class)
    }

    /// Add `constructor(params)` to a class and register its construct signature.
    ///
    /// Parameters are `(name, type)` pairs in declaration order.
    pub fn constructor(
        &mut self,
        class: NodeId,
        params: &[(&str, &str)],
    ) -> Result<SignatureId, ProgramError> {
        self.check_node(class)?;
        let types = self
            .classes
            .get(&class)
            .copied()
            .ok_or(ProgramError::NotAClass {
                node: class,
                kind: self.program.nodes[class.as_usize()].kind,
            })?;

        let rendered: Vec<String> = params
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect();
        let constructor = self.node(
            class,
            SyntaxKind::Constructor,
            format!("constructor({}) {{}}", rendered.join(", ")),
        )?;

        let mut parameters = Vec::with_capacity(params.len());
        for (text, (name, ty)) in rendered.into_iter().zip(params) {
            let parameter = self.node(constructor, SyntaxKind::Parameter, text)?;
            let ident = self.node(parameter, SyntaxKind::Identifier, *name)?;
            let param_type = self.intern_type(ty);
            let symbol = self.symbol(*name, Some(parameter), Some(param_type));
            self.bind(ident, symbol)?;
            self.program.nodes[parameter.as_usize()].name = Some(ident);
            parameters.push(symbol);
        }
        self.node(constructor, SyntaxKind::Block, "{}")?;

        Ok(self.push_signature(types, parameters))
    }

    /// Add a constructor whose parameter `index` has no resolvable type.
    pub fn constructor_with_unresolved_parameter(
        &mut self,
        class: NodeId,
        params: &[(&str, &str)],
        index: usize,
    ) -> Result<SignatureId, ProgramError> {
        let signature = self.constructor(class, params)?;
        let parameter = self.program.signatures[signature.as_usize()]
            .parameters
            .get(index)
            .copied();
        if let Some(symbol) = parameter {
            self.program.symbols[symbol.as_usize()].ty = None;
        }
        Ok(signature)
    }

    fn push_signature(&mut self, types: ClassTypes, parameters: Vec<SymbolId>) -> SignatureId {
        let signature = SignatureId::new(self.program.signatures.len() as u32);
        self.program.signatures.push(SignatureData {
            parameters,
            return_type: types.instance_type,
            documentation: Vec::new(),
        });
        self.program.types[types.constructor_type.as_usize()]
            .construct_signatures
            .push(signature);
        signature
    }

    /// Declare `namespace Name {}` under `parent`.
    pub fn namespace(
        &mut self,
        parent: NodeId,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NamespaceNodes, ProgramError> {
        let declaration = self.named_declaration(
            parent,
            SyntaxKind::ModuleDeclaration,
            "namespace",
            name,
            flags,
        )?;
        let symbol = self.symbol(name, Some(declaration), None);
        self.bind_name(declaration, symbol)?;
        let body = self.node(declaration, SyntaxKind::ModuleBlock, "{}")?;
        Ok(NamespaceNodes { declaration, body })
    }

    /// Declare `function name() {}` under `parent` and return its body block.
    pub fn function_declaration(
        &mut self,
        parent: NodeId,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        let function = self.named_declaration(
            parent,
            SyntaxKind::FunctionDeclaration,
            "function",
            name,
            flags,
        )?;
        self.node(function, SyntaxKind::Block, "{}")
    }

    fn named_declaration(
        &mut self,
        parent: NodeId,
        kind: SyntaxKind,
        keyword: &str,
        name: &str,
        flags: ModifierFlags,
    ) -> Result<NodeId, ProgramError> {
        let declaration = self.node(parent, kind, format!("{keyword} {name} {{}}"))?;
        self.set_modifiers(declaration, flags)?;
        let ident = self.node(declaration, SyntaxKind::Identifier, name)?;
        self.program.nodes[declaration.as_usize()].name = Some(ident);
        Ok(declaration)
    }

    /// Bind `symbol` at the declaration's name node.
    fn bind_name(&mut self, declaration: NodeId, symbol: SymbolId) -> Result<(), ProgramError> {
        let name = self.program.nodes[declaration.as_usize()]
            .name
            .ok_or(ProgramError::UnknownNode(declaration))?;
        self.bind(name, symbol)
    }

    // ==========================================================================
    // Build
    // ==========================================================================

    /// Finish the program.
    pub fn build(mut self) -> Program {
        let mut implicit: Vec<ClassTypes> = self
            .classes
            .values()
            .copied()
            .filter(|types| {
                self.program.types[types.constructor_type.as_usize()]
                    .construct_signatures
                    .is_empty()
            })
            .collect();
        // Signature ids should not depend on hash map order.
        implicit.sort_by_key(|types| types.constructor_type);
        for types in implicit {
            self.push_signature(types, Vec::new());
        }
        self.program
    }
}

fn documentation_parts(text: &str) -> Vec<DisplayPart> {
    let mut parts = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            parts.push(DisplayPart::line_break());
        }
        parts.push(DisplayPart::text(line));
    }
    parts
}
