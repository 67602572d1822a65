//! The bytecode module builder.
//!
//! [`BytecodeModule`] implements [`ModuleBuilder`] by recording instructions
//! as a small expression graph: constants are leaves, calls own the
//! instructions passed as their arguments. Instructions that no call
//! consumed are the module's top-level expressions.
//!
//! [`finish`](BytecodeModule::finish) flattens the graph into stack code.
//! Top-level expressions are emitted in creation order, each in post-order
//! (arguments before the call) and followed by `Pop`.

use rustc_hash::FxHashMap;
use tsbyte_core::{ClassDescriptor, HostHash, ModuleKind, ScriptTarget};

use super::{BytecodeChunk, ConstantPool, OpCode};
use crate::emit::ModuleBuilder;

/// Handle to an instruction of a [`BytecodeModule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstrRef(u32);

impl InstrRef {
    /// Get the underlying index.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Saved state of a [`BytecodeModule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    instrs: usize,
    constants: usize,
    imports: usize,
    line: u32,
}

/// A host function the module calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostImport {
    pub hash: HostHash,
    pub name: String,
}

#[derive(Debug, Clone)]
enum Instr {
    I32(i32),
    I64 { high: u32, low: u32 },
    /// Pool constant (float or string data).
    Constant(u32),
    Call {
        /// Pool index of the callee's `HostHash`.
        callee: u32,
        args: Vec<InstrRef>,
    },
}

#[derive(Debug, Clone)]
struct Node {
    instr: Instr,
    line: u32,
    /// Passed as an argument to a call.
    consumed: bool,
}

/// Builds a bytecode module.
#[derive(Debug, Default)]
pub struct BytecodeModule {
    nodes: Vec<Node>,
    constants: ConstantPool,
    imports: Vec<HostImport>,
    import_index: FxHashMap<HostHash, usize>,
    current_line: u32,
}

/// A finished module.
#[derive(Debug, Clone, Default)]
pub struct CompiledModule {
    /// Language level and module system the program was checked against,
    /// recorded in the header for the loader.
    pub target: ScriptTarget,
    pub module_kind: ModuleKind,
    pub constants: ConstantPool,
    /// Host functions in first-use order.
    pub imports: Vec<HostImport>,
    /// Class descriptors exported for host binding.
    pub exports: Vec<ClassDescriptor>,
    pub code: BytecodeChunk,
}

impl BytecodeModule {
    /// Create an empty module.
    pub fn new() -> Self {
        Self {
            current_line: 1,
            ..Default::default()
        }
    }

    /// Number of instructions created so far.
    pub fn instruction_count(&self) -> usize {
        self.nodes.len()
    }

    /// Top-level expressions, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = InstrRef> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.consumed)
            .map(|(index, _)| InstrRef(index as u32))
    }

    /// Constants added so far.
    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    /// Host functions called so far.
    pub fn imports(&self) -> &[HostImport] {
        &self.imports
    }

    fn push(&mut self, instr: Instr) -> InstrRef {
        let index = InstrRef(self.nodes.len() as u32);
        self.nodes.push(Node {
            instr,
            line: self.current_line,
            consumed: false,
        });
        index
    }

    fn import(&mut self, name: &str) -> u32 {
        let hash = HostHash::from_function(name);
        if !self.import_index.contains_key(&hash) {
            self.import_index.insert(hash, self.imports.len());
            self.imports.push(HostImport {
                hash,
                name: name.to_string(),
            });
        }
        self.constants.add_host_hash(hash)
    }

    /// Flatten the module into stack code.
    pub fn finish(self, exports: Vec<ClassDescriptor>) -> CompiledModule {
        let mut code = BytecodeChunk::with_capacity(self.nodes.len() * 4);
        for root in self.roots() {
            self.emit_tree(root, &mut code);
            let line = self.nodes[root.0 as usize].line;
            code.write_op(OpCode::Pop, line);
        }

        CompiledModule {
            target: ScriptTarget::default(),
            module_kind: ModuleKind::default(),
            constants: self.constants,
            imports: self.imports,
            exports,
            code,
        }
    }

    fn emit_tree(&self, instr: InstrRef, code: &mut BytecodeChunk) {
        let node = &self.nodes[instr.0 as usize];
        let line = node.line;
        match &node.instr {
            Instr::I32(value) => {
                code.write_op(OpCode::ConstI32, line);
                code.write_u32(*value as u32, line);
            }
            Instr::I64 { high, low } => {
                code.write_op(OpCode::ConstI64, line);
                code.write_u32(*high, line);
                code.write_u32(*low, line);
            }
            Instr::Constant(index) => {
                if *index < 256 {
                    code.write_op(OpCode::Constant, line);
                    code.write_byte(*index as u8, line);
                } else {
                    code.write_op(OpCode::ConstantWide, line);
                    code.write_u32(*index, line);
                }
            }
            Instr::Call { callee, args } => {
                for &arg in args {
                    self.emit_tree(arg, code);
                }
                code.write_op(OpCode::Call, line);
                code.write_u32(*callee, line);
                code.write_u16(args.len() as u16, line);
            }
        }
    }
}

impl ModuleBuilder for BytecodeModule {
    type Instr = InstrRef;
    type Checkpoint = Checkpoint;

    fn i32_const(&mut self, value: i32) -> InstrRef {
        self.push(Instr::I32(value))
    }

    fn f64_const(&mut self, value: f64) -> InstrRef {
        let index = self.constants.add_f64(value);
        self.push(Instr::Constant(index))
    }

    fn i64_const(&mut self, high: u32, low: u32) -> InstrRef {
        self.push(Instr::I64 { high, low })
    }

    fn string_data(&mut self, text: &str) -> InstrRef {
        let index = self.constants.add_string(text);
        self.push(Instr::Constant(index))
    }

    /// # Panics
    ///
    /// Panics if an argument is not an instruction of this module or was
    /// already consumed by another call.
    fn call(&mut self, callee: &str, args: &[InstrRef]) -> InstrRef {
        debug_assert!(args.len() <= u16::MAX as usize);
        for arg in args {
            let node = &mut self.nodes[arg.0 as usize];
            assert!(!node.consumed, "{arg:?} is already a call argument");
            node.consumed = true;
        }
        let callee = self.import(callee);
        self.push(Instr::Call {
            callee,
            args: args.to_vec(),
        })
    }

    fn set_line(&mut self, line: u32) {
        self.current_line = line;
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            instrs: self.nodes.len(),
            constants: self.constants.len(),
            imports: self.imports.len(),
            line: self.current_line,
        }
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        // Un-consume arguments of dropped calls that predate the checkpoint.
        let dropped: Vec<InstrRef> = self.nodes[checkpoint.instrs.min(self.nodes.len())..]
            .iter()
            .filter_map(|node| match &node.instr {
                Instr::Call { args, .. } => Some(args.clone()),
                _ => None,
            })
            .flatten()
            .filter(|arg| (arg.0 as usize) < checkpoint.instrs)
            .collect();
        for arg in dropped {
            self.nodes[arg.0 as usize].consumed = false;
        }

        self.nodes.truncate(checkpoint.instrs);
        self.constants.truncate(checkpoint.constants);
        self.imports.truncate(checkpoint.imports);
        let kept = checkpoint.imports;
        self.import_index.retain(|_, index| *index < kept);
        self.current_line = checkpoint.line;
    }
}
