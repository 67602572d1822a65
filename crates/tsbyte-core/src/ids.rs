//! Opaque handles into the type-checked program.
//!
//! Every handle is a plain index owned and interpreted by the
//! [`TypeChecker`](crate::TypeChecker) implementation that produced it. The
//! lowering engine copies handles around but never looks inside them.

use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the underlying index.
            #[inline]
            pub const fn index(self) -> u32 {
                self.0
            }

            /// The index as a `usize`, for slice access.
            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self::new(index)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_handle!(
    /// A source file of the compilation.
    FileId,
    "file"
);

define_handle!(
    /// A syntax node of the checked AST.
    NodeId,
    "node"
);

define_handle!(
    /// A named binding resolved by the checker.
    SymbolId,
    "symbol"
);

define_handle!(
    /// A resolved type.
    TypeId,
    "type"
);

define_handle!(
    /// A call or construct signature of a type.
    SignatureId,
    "sig"
);
