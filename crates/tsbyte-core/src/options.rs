//! Compiler options.
//!
//! ```
//! use tsbyte_core::{CompilerOptions, OverflowPolicy, ScriptTarget};
//!
//! let options = CompilerOptions::default()
//!     .with_target(ScriptTarget::ES2020)
//!     .with_overflow(OverflowPolicy::Reject);
//! assert_eq!(options.target, ScriptTarget::ES2020);
//! assert_eq!(options.string_constructor, "String");
//! ```

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Language level the program was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ScriptTarget {
    ES3 = 0,
    #[default]
    ES5 = 1,
    ES2015 = 2,
    ES2016 = 3,
    ES2017 = 4,
    ES2018 = 5,
    ES2019 = 6,
    ES2020 = 7,
    ES2021 = 8,
    ES2022 = 9,
    ESNext = 99,
}

/// Module system the program was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ModuleKind {
    None = 0,
    #[default]
    CommonJS = 1,
    AMD = 2,
    UMD = 3,
    System = 4,
    ES2015 = 5,
    ES2020 = 6,
    ES2022 = 7,
    ESNext = 99,
    Node16 = 100,
    NodeNext = 199,
}

/// What to do with an integral numeric literal outside the signed 32-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OverflowPolicy {
    /// Emit it as a 64-bit constant split into high and low halves. Values
    /// beyond the signed 64-bit range stay 64-bit floats.
    #[default]
    WidenToI64 = 0,
    /// Fail with `LiteralError::IntegerOutOfRange`.
    Reject = 1,
}

/// Options controlling a compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Language level the program was checked against. Lowering does not
    /// depend on it; it is recorded in the compiled module's header.
    pub target: ScriptTarget,
    /// Module system the program was checked against, recorded alongside
    /// `target`.
    pub module: ModuleKind,
    pub overflow: OverflowPolicy,
    /// Host function called with the string data of every string literal.
    pub string_constructor: String,
    /// Write class descriptors into the encoded module's export section.
    pub embed_descriptors: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            target: ScriptTarget::default(),
            module: ModuleKind::default(),
            overflow: OverflowPolicy::default(),
            string_constructor: "String".to_string(),
            embed_descriptors: true,
        }
    }
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: ScriptTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_module(mut self, module: ModuleKind) -> Self {
        self.module = module;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_string_constructor(mut self, name: impl Into<String>) -> Self {
        self.string_constructor = name.into();
        self
    }

    pub fn with_embed_descriptors(mut self, embed: bool) -> Self {
        self.embed_descriptors = embed;
        self
    }
}
