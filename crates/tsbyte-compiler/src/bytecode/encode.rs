//! Binary encoding of a [`CompiledModule`].
//!
//! ```text
//! magic      "TSBC"
//! version    u16
//! target     u8 script target, u8 module kind
//! constants  u32 count, then per constant: u8 tag + payload
//!              0 Float64     u64 bit pattern
//!              1 StringData  bytes
//!              2 HostHash    u64
//! imports    u32 count, then per import: u64 hash + string name
//! exports    u32 count, then per class:
//!              u64 hash, name, file name, documentation, type,
//!              u32 constructor count, then per constructor:
//!                u64 hash, return type, documentation,
//!                u32 parameter count, then per parameter: name, type, documentation
//! code       bytes
//! ```
//!
//! Integers are big-endian. Strings and byte blobs are prefixed with their
//! u32 length.

use tsbyte_core::{ClassDescriptor, HostHash, SignatureDescriptor, SymbolDescriptor};

use super::{CompiledModule, Constant};

/// File magic of an encoded module.
pub const MAGIC: [u8; 4] = *b"TSBC";

/// Current encoding version.
pub const FORMAT_VERSION: u16 = 1;

struct ModuleWriter {
    out: Vec<u8>,
}

impl ModuleWriter {
    fn u8(&mut self, value: u8) {
        self.out.push(value);
    }

    fn u16(&mut self, value: u16) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn u64(&mut self, value: u64) {
        self.out.extend_from_slice(&value.to_be_bytes());
    }

    fn len(&mut self, len: usize) {
        self.u32(len as u32);
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.len(bytes.len());
        self.out.extend_from_slice(bytes);
    }

    fn str(&mut self, text: &str) {
        self.bytes(text.as_bytes());
    }

    fn constant(&mut self, constant: &Constant) {
        self.u8(constant.tag());
        match constant {
            Constant::Float64(value) => self.u64(value.to_bits()),
            Constant::StringData(data) => self.bytes(data),
            Constant::HostHash(hash) => self.u64(hash.0),
        }
    }

    fn class(&mut self, class: &ClassDescriptor) {
        let hash = class.host_hash();
        self.u64(hash.0);
        self.str(&class.name);
        self.str(&class.file_name);
        self.str(&class.documentation);
        self.str(&class.type_name);
        self.len(class.constructors.len());
        for (ordinal, signature) in class.constructors.iter().enumerate() {
            self.signature(HostHash::from_constructor(hash, ordinal), signature);
        }
    }

    fn signature(&mut self, hash: HostHash, signature: &SignatureDescriptor) {
        self.u64(hash.0);
        self.str(&signature.return_type);
        self.str(&signature.documentation);
        self.len(signature.parameters.len());
        for parameter in &signature.parameters {
            self.parameter(parameter);
        }
    }

    fn parameter(&mut self, parameter: &SymbolDescriptor) {
        self.str(&parameter.name);
        self.str(&parameter.type_name);
        self.str(&parameter.documentation);
    }
}

impl CompiledModule {
    /// Encode the module to its binary form.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = ModuleWriter {
            out: Vec::with_capacity(16 + self.code.len()),
        };

        writer.out.extend_from_slice(&MAGIC);
        writer.u16(FORMAT_VERSION);
        writer.u8(self.target.into());
        writer.u8(self.module_kind.into());

        writer.len(self.constants.len());
        for constant in self.constants.constants() {
            writer.constant(constant);
        }

        writer.len(self.imports.len());
        for import in &self.imports {
            writer.u64(import.hash.0);
            writer.str(&import.name);
        }

        writer.len(self.exports.len());
        for class in &self.exports {
            writer.class(class);
        }

        writer.bytes(self.code.code());
        writer.out
    }
}
