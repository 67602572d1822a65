//! Signature extraction - class construct signatures as descriptor records.
//!
//! For a class declaration the extractor resolves the class symbol at the
//! declaration's name, reads the construct signatures of the symbol's type in
//! the order the checker reports them, and serializes each one:
//!
//! ```text
//! export class Point { constructor(x: number, y: number) {} }
//!
//! ClassDescriptor "Point" : "typeof Point"
//! └── SignatureDescriptor (x: number, y: number) -> "Point"
//! ```
//!
//! A class whose name, symbol or type cannot be resolved is unextractable,
//! and the export walk skips it rather than failing the file. A parameter
//! whose type cannot be resolved keeps its place in the signature with the
//! type name `any`.

use log::debug;
use thiserror::Error;
use tsbyte_core::{
    ClassDescriptor, NodeId, SignatureDescriptor, SignatureId, SymbolDescriptor, SymbolId,
    TypeChecker, display_parts_to_string,
};

/// Type name given to a parameter whose type the checker cannot resolve.
pub const UNRESOLVED_TYPE_NAME: &str = "any";

/// Why a class declaration produced no descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedClass {
    /// `export default class {}` has nothing to bind a symbol to.
    #[error("class declaration has no name")]
    Unnamed,

    #[error("no symbol is bound at class '{name}'")]
    UnboundSymbol { name: String },

    #[error("type of class '{name}' could not be resolved")]
    UnresolvedType { name: String },
}

/// Builds descriptor records from checker queries.
pub struct SignatureExtractor<'c, C: TypeChecker + ?Sized> {
    checker: &'c C,
}

impl<'c, C: TypeChecker + ?Sized> SignatureExtractor<'c, C> {
    pub fn new(checker: &'c C) -> Self {
        Self { checker }
    }

    /// Extract the descriptor of the class declared at `declaration`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn extract_class(
        &self,
        declaration: NodeId,
        file_name: &str,
    ) -> Result<ClassDescriptor, UnresolvedClass> {
        let checker = self.checker;
        let name_node = checker
            .declaration_name(declaration)
            .ok_or(UnresolvedClass::Unnamed)?;
        let symbol =
            checker
                .symbol_at_location(name_node)
                .ok_or_else(|| UnresolvedClass::UnboundSymbol {
                    name: checker.text(name_node).to_string(),
                })?;
        let name = checker.symbol_name(symbol);

        let location = checker.value_declaration(symbol).unwrap_or(declaration);
        let ty = checker
            .type_of_symbol_at_location(symbol, location)
            .ok_or_else(|| UnresolvedClass::UnresolvedType {
                name: name.to_string(),
            })?;

        let constructors = checker
            .construct_signatures(ty)
            .iter()
            .map(|&signature| self.serialize_signature(signature))
            .collect();

        Ok(ClassDescriptor {
            name: name.to_string(),
            file_name: file_name.to_string(),
            documentation: display_parts_to_string(checker.symbol_documentation(symbol)),
            type_name: checker.type_to_string(ty),
            constructors,
        })
    }

    /// Serialize one construct signature.
    pub fn serialize_signature(&self, signature: SignatureId) -> SignatureDescriptor {
        let checker = self.checker;
        let parameters = checker
            .signature_parameters(signature)
            .iter()
            .map(|&parameter| self.serialize_symbol(parameter))
            .collect();

        SignatureDescriptor {
            parameters,
            return_type: checker.type_to_string(checker.signature_return_type(signature)),
            documentation: display_parts_to_string(checker.signature_documentation(signature)),
        }
    }

    /// Serialize a symbol with its type at its own declaration.
    ///
    /// A symbol without a declaration, or without a type there, is described
    /// as [`UNRESOLVED_TYPE_NAME`].
    pub fn serialize_symbol(&self, symbol: SymbolId) -> SymbolDescriptor {
        let checker = self.checker;
        let name = checker.symbol_name(symbol);
        let type_name = match checker
            .value_declaration(symbol)
            .and_then(|declaration| checker.type_of_symbol_at_location(symbol, declaration))
        {
            Some(ty) => checker.type_to_string(ty),
            None => {
                debug!(
                    "type of '{}' could not be resolved, using '{}'",
                    name, UNRESOLVED_TYPE_NAME
                );
                UNRESOLVED_TYPE_NAME.to_string()
            }
        };

        SymbolDescriptor {
            name: name.to_string(),
            documentation: display_parts_to_string(checker.symbol_documentation(symbol)),
            type_name,
        }
    }
}
