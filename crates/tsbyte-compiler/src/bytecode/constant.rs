//! Constant pool for compiled modules.
//!
//! The constant pool stores values that are referenced by bytecode
//! instructions: 64-bit floats, string data and host function hashes.

use rustc_hash::FxHashMap;
use tsbyte_core::HostHash;

/// Values stored in the constant pool.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 bytes of a string literal.
    ///
    /// NOT a host string. The VM passes this to the host string constructor
    /// to produce the actual string value.
    StringData(Vec<u8>),
    /// Host function hash (callee of a `Call`).
    HostHash(HostHash),
}

impl Constant {
    /// Section tag used by the module encoding.
    pub fn tag(&self) -> u8 {
        match self {
            Constant::Float64(_) => 0,
            Constant::StringData(_) => 1,
            Constant::HostHash(_) => 2,
        }
    }
}

/// Module-level constant pool with deduplication.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    constants: Vec<Constant>,
    /// Deduplication index: maps constant to its index.
    index: FxHashMap<ConstantKey, u32>,
}

/// Key for constant deduplication (hashable version of Constant).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ConstantKey {
    /// Bit pattern, so `-0.0` and `0.0` stay distinct.
    Float64(u64),
    StringData(Vec<u8>),
    HostHash(HostHash),
}

impl ConstantPool {
    /// Create a new empty constant pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constant, returning its index (deduplicated).
    pub fn add(&mut self, constant: Constant) -> u32 {
        let key = Self::to_key(&constant);
        if let Some(&index) = self.index.get(&key) {
            return index;
        }

        let index = self.constants.len() as u32;
        self.constants.push(constant);
        self.index.insert(key, index);
        index
    }

    /// Add a 64-bit float constant.
    pub fn add_f64(&mut self, value: f64) -> u32 {
        self.add(Constant::Float64(value))
    }

    /// Add string data (UTF-8 bytes).
    pub fn add_string(&mut self, text: &str) -> u32 {
        self.add(Constant::StringData(text.as_bytes().to_vec()))
    }

    /// Add a host function hash.
    pub fn add_host_hash(&mut self, hash: HostHash) -> u32 {
        self.add(Constant::HostHash(hash))
    }

    /// Get constant by index.
    pub fn get(&self, index: u32) -> Option<&Constant> {
        self.constants.get(index as usize)
    }

    /// Get all constants (for serialization).
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Drop every constant at index `len` and above.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.constants.len() {
            return;
        }
        self.constants.truncate(len);
        self.index.retain(|_, index| (*index as usize) < len);
    }

    fn to_key(constant: &Constant) -> ConstantKey {
        match constant {
            Constant::Float64(v) => ConstantKey::Float64(v.to_bits()),
            Constant::StringData(b) => ConstantKey::StringData(b.clone()),
            Constant::HostHash(h) => ConstantKey::HostHash(*h),
        }
    }
}
