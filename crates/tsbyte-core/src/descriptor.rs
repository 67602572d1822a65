//! Caller-facing records describing exported classes.
//!
//! Descriptors are produced once per exported class during lowering and never
//! mutated afterwards. They are returned to the caller and, optionally,
//! embedded in the compiled module's export section for host binding.

use crate::HostHash;

/// A named, typed, documented binding (a class or a parameter).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolDescriptor {
    /// Binding name.
    pub name: String,
    /// Documentation comment flattened to plain text.
    pub documentation: String,
    /// Type of the binding rendered by the checker.
    pub type_name: String,
}

/// One construct signature of an exported class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureDescriptor {
    /// Parameters in declaration order.
    pub parameters: Vec<SymbolDescriptor>,
    /// Rendered return type (the instance type for constructors).
    pub return_type: String,
    /// Documentation comment flattened to plain text.
    pub documentation: String,
}

/// An exported class and its construct signatures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDescriptor {
    pub name: String,
    /// Name of the source file that declared the class.
    pub file_name: String,
    pub documentation: String,
    /// Rendered type of the class symbol itself (`typeof Name`).
    pub type_name: String,
    /// Construct signatures in the order the checker reports them.
    pub constructors: Vec<SignatureDescriptor>,
}

impl ClassDescriptor {
    /// Host binding identity of this class.
    pub fn host_hash(&self) -> HostHash {
        HostHash::from_class(&self.name)
    }

    /// Number of construct signatures.
    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    /// Look up a construct signature by its parameter count.
    pub fn constructor_with_arity(&self, arity: usize) -> Option<&SignatureDescriptor> {
        self.constructors
            .iter()
            .find(|sig| sig.parameters.len() == arity)
    }
}

impl SignatureDescriptor {
    /// Parameter names in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }
}
