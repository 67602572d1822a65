//! Deterministic identity for host bindings.
//!
//! A compiled module refers to host functions (such as the string constructor)
//! and exports class descriptors for the host to bind. Both are keyed by a
//! [`HostHash`] computed from the name with XXHash64, so the VM can resolve a
//! binding with a single map lookup and identical names always agree across
//! modules.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants.
///
/// Functions and classes sharing a name must not share a hash.
pub mod hash_constants {
    /// Domain marker for host function imports.
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for exported class bindings.
    pub const CLASS: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for exported class constructors.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Separator used when folding a constructor's ordinal into the hash.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;
}

/// A deterministic 64-bit hash identifying a host function or exported class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HostHash(pub u64);

impl HostHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: HostHash = HostHash(0);

    /// Hash of a host function import.
    ///
    /// ```
    /// use tsbyte_core::HostHash;
    ///
    /// assert_eq!(HostHash::from_function("String"), HostHash::from_function("String"));
    /// assert_ne!(HostHash::from_function("String"), HostHash::from_class("String"));
    /// ```
    #[inline]
    pub fn from_function(name: &str) -> Self {
        HostHash(hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0))
    }

    /// Hash of an exported class binding.
    #[inline]
    pub fn from_class(name: &str) -> Self {
        HostHash(hash_constants::CLASS ^ xxh64(name.as_bytes(), 0))
    }

    /// Hash of the `ordinal`-th construct signature of an exported class.
    ///
    /// Constructors are anonymous, so they are identified by owner and position.
    #[inline]
    pub fn from_constructor(owner: HostHash, ordinal: usize) -> Self {
        let hash = (hash_constants::CONSTRUCTOR ^ owner.0)
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(ordinal as u64);
        HostHash(hash)
    }

    /// Whether this is the empty hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for HostHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostHash({:#018x})", self.0)
    }
}

impl fmt::Display for HostHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
