//! Constant lowering.
//!
//! Turns a literal node into exactly one module instruction:
//!
//! | Literal | Instruction |
//! |---|---|
//! | integral number in `i32` range | `i32.const` |
//! | integral number outside it | `i64.const high low`, `f64.const`, or an error (see [`OverflowPolicy`]) |
//! | fractional number, `-0`, `NaN`, infinities | `f64.const` |
//! | big integer | `i64.const high low` of its 64-bit two's complement pattern |
//! | string | `call <string constructor>(string data)` |

mod number;
mod string;

pub use number::{BigIntError, NumericConstant, join_i64, parse_bigint, parse_number, split_i64};
pub use string::decode_string;

use ordered_float::OrderedFloat;
use tsbyte_core::{CompilerOptions, LiteralError, OverflowPolicy, Span, SyntaxKind};

use crate::classify::{Disposition, classify};
use crate::emit::{ModuleBuilder, ModuleEmitter};

/// Lowers literal nodes into module constants.
#[derive(Debug, Clone, Copy)]
pub struct ConstantLowering<'o> {
    overflow: OverflowPolicy,
    string_constructor: &'o str,
}

impl<'o> ConstantLowering<'o> {
    pub fn new(options: &'o CompilerOptions) -> Self {
        Self {
            overflow: options.overflow,
            string_constructor: &options.string_constructor,
        }
    }

    /// Lower a literal node of `kind` whose source text is `text`.
    ///
    /// Fails with [`LiteralError::UnexpectedKind`] for nodes that are not
    /// numeric, big-integer or string literals.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn lower<B: ModuleBuilder>(
        &self,
        kind: SyntaxKind,
        text: &str,
        span: Span,
        emitter: &mut ModuleEmitter<'_, B>,
    ) -> Result<B::Instr, LiteralError> {
        match (classify(kind), kind) {
            (Disposition::LowerNumeric, SyntaxKind::BigIntLiteral) => {
                self.lower_bigint(text, span, emitter)
            }
            (Disposition::LowerNumeric, _) => self.lower_number(text, span, emitter),
            (Disposition::LowerString, _) => self.lower_string(text, span, emitter),
            _ => Err(LiteralError::UnexpectedKind { kind, span }),
        }
    }

    /// Lower a numeric literal.
    pub fn lower_number<B: ModuleBuilder>(
        &self,
        text: &str,
        span: Span,
        emitter: &mut ModuleEmitter<'_, B>,
    ) -> Result<B::Instr, LiteralError> {
        let value = parse_number(text).ok_or_else(|| LiteralError::InvalidNumber {
            text: text.to_string(),
            span,
        })?;
        let constant = NumericConstant::from_f64(value, self.overflow).ok_or(
            LiteralError::IntegerOutOfRange {
                value: OrderedFloat(value),
                span,
            },
        )?;

        Ok(match constant {
            NumericConstant::I32(value) => emitter.emit_i32(value),
            NumericConstant::I64 { high, low } => emitter.emit_i64(high, low),
            NumericConstant::F64(value) => emitter.emit_f64(value),
        })
    }

    /// Lower a big-integer literal.
    pub fn lower_bigint<B: ModuleBuilder>(
        &self,
        text: &str,
        span: Span,
        emitter: &mut ModuleEmitter<'_, B>,
    ) -> Result<B::Instr, LiteralError> {
        let bits = parse_bigint(text).map_err(|err| match err {
            BigIntError::Invalid => LiteralError::InvalidBigInt {
                text: text.to_string(),
                span,
            },
            BigIntError::OutOfRange => LiteralError::BigIntOutOfRange {
                text: text.to_string(),
                span,
            },
        })?;
        Ok(emitter.emit_i64((bits >> 32) as u32, bits as u32))
    }

    /// Lower a string literal into a host string constructed from its
    /// decoded value.
    pub fn lower_string<B: ModuleBuilder>(
        &self,
        text: &str,
        span: Span,
        emitter: &mut ModuleEmitter<'_, B>,
    ) -> Result<B::Instr, LiteralError> {
        let value = decode_string(text).map_err(|detail| LiteralError::InvalidString {
            text: text.to_string(),
            span,
            detail: detail.to_string(),
        })?;
        Ok(emitter.emit_string(&value, self.string_constructor))
    }
}
