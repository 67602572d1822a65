//! Declaration modifier flags.

use bitflags::bitflags;

bitflags! {
    /// Combined modifiers of a declaration.
    ///
    /// Bit values follow the TypeScript checker's `ModifierFlags`, so a provider
    /// can pass its computed flags through [`ModifierFlags::from_bits_truncate`].
    /// "Combined" means the provider has already folded in modifiers inherited
    /// from enclosing declaration lists (e.g. `export const a = 1, b = 2`).
    ///
    /// ```
    /// use tsbyte_core::ModifierFlags;
    ///
    /// let flags = ModifierFlags::EXPORT | ModifierFlags::DEFAULT;
    /// assert!(flags.is_exported());
    /// assert!(!ModifierFlags::AMBIENT.is_exported());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        /// `export`
        const EXPORT = 1 << 0;
        /// `declare`
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ACCESSOR = 1 << 7;
        const ABSTRACT = 1 << 8;
        const ASYNC = 1 << 9;
        /// `export default`
        const DEFAULT = 1 << 10;
        const CONST = 1 << 11;
        const HAS_COMPUTED_JSDOC_MODIFIERS = 1 << 12;
        /// `@deprecated` JSDoc tag.
        const DEPRECATED = 1 << 13;
        const OVERRIDE = 1 << 14;
        /// `in` variance annotation on a type parameter.
        const IN = 1 << 15;
        /// `out` variance annotation on a type parameter.
        const OUT = 1 << 16;
        const DECORATOR = 1 << 17;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits()
            | Self::READONLY.bits()
            | Self::OVERRIDE.bits();
        const NON_PUBLIC_ACCESSIBILITY_MODIFIER = Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const TYPESCRIPT_MODIFIER = Self::AMBIENT.bits()
            | Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::READONLY.bits()
            | Self::ABSTRACT.bits()
            | Self::CONST.bits()
            | Self::OVERRIDE.bits()
            | Self::IN.bits()
            | Self::OUT.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

impl ModifierFlags {
    /// Whether the declaration carries an explicit `export` modifier.
    #[inline]
    pub const fn is_exported(self) -> bool {
        self.contains(ModifierFlags::EXPORT)
    }

    /// Whether the declaration is ambient (`declare`).
    #[inline]
    pub const fn is_ambient(self) -> bool {
        self.contains(ModifierFlags::AMBIENT)
    }
}
