//! Node classification.
//!
//! [`classify`] maps every [`SyntaxKind`] to exactly one [`Disposition`]:
//! what lowering does when it meets a node of that kind. The match has no
//! wildcard arm, so a kind added to `SyntaxKind` without a disposition here
//! is a compile error. The same holds for any downstream match:
//!
//! ```compile_fail,E0004
//! use tsbyte_core::SyntaxKind;
//!
//! fn is_numeric(kind: SyntaxKind) -> bool {
//!     match kind {
//!         SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => true,
//!         SyntaxKind::StringLiteral => false,
//!     }
//! }
//! ```
//!
//! Most kinds are [`SkipReason::NotYetLowered`]: they are real program
//! constructs that this backend does not lower yet. They are skipped out
//! loud (logged and counted), never silently.

use std::fmt;

use tsbyte_core::SyntaxKind;

/// Why a node produces nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Comments and whitespace.
    Trivia,
    /// Punctuation, identifiers and end-of-file markers.
    Token,
    Keyword,
    /// Type-only syntax erased at runtime.
    TypeSyntax,
    JsDoc,
    /// Nodes synthesized by the checker or emitter, never written in source.
    Synthetic,
    /// A runtime construct this backend does not lower yet.
    NotYetLowered,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Trivia => "trivia",
            SkipReason::Token => "token",
            SkipReason::Keyword => "keyword",
            SkipReason::TypeSyntax => "type syntax",
            SkipReason::JsDoc => "jsdoc",
            SkipReason::Synthetic => "synthetic",
            SkipReason::NotYetLowered => "not yet lowered",
        };
        f.write_str(text)
    }
}

/// What lowering does with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Produces no instruction and no descriptor.
    Skip(SkipReason),
    /// Numeric or big-integer literal: encode as a constant.
    LowerNumeric,
    /// String literal: construct a host string from its text.
    LowerString,
    /// Container whose children are visited.
    Recurse,
    /// Class declaration: extract its construct signatures.
    ClassDecl,
}

impl Disposition {
    pub const fn is_skip(self) -> bool {
        matches!(self, Disposition::Skip(_))
    }

    /// Whether the node is a literal that lowers to an instruction.
    pub const fn is_literal(self) -> bool {
        matches!(self, Disposition::LowerNumeric | Disposition::LowerString)
    }
}

const NOT_YET_LOWERED: Disposition = Disposition::Skip(SkipReason::NotYetLowered);

/// Classify a node kind.
pub const fn classify(kind: SyntaxKind) -> Disposition {
    match kind {
        // Tokens and trivia
        SyntaxKind::Unknown | SyntaxKind::EndOfFileToken => Disposition::Skip(SkipReason::Token),
        SyntaxKind::SingleLineCommentTrivia
        | SyntaxKind::MultiLineCommentTrivia
        | SyntaxKind::NewLineTrivia
        | SyntaxKind::WhitespaceTrivia
        | SyntaxKind::ShebangTrivia
        | SyntaxKind::ConflictMarkerTrivia => Disposition::Skip(SkipReason::Trivia),

        // Literals and template pieces
        SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => Disposition::LowerNumeric,
        SyntaxKind::StringLiteral => Disposition::LowerString,
        SyntaxKind::JsxText
        | SyntaxKind::JsxTextAllWhiteSpaces
        | SyntaxKind::RegularExpressionLiteral
        | SyntaxKind::NoSubstitutionTemplateLiteral
        | SyntaxKind::TemplateHead
        | SyntaxKind::TemplateMiddle
        | SyntaxKind::TemplateTail => NOT_YET_LOWERED,

        // Punctuation
        SyntaxKind::OpenBraceToken
        | SyntaxKind::CloseBraceToken
        | SyntaxKind::OpenParenToken
        | SyntaxKind::CloseParenToken
        | SyntaxKind::OpenBracketToken
        | SyntaxKind::CloseBracketToken
        | SyntaxKind::DotToken
        | SyntaxKind::DotDotDotToken
        | SyntaxKind::SemicolonToken
        | SyntaxKind::CommaToken
        | SyntaxKind::QuestionDotToken
        | SyntaxKind::LessThanToken
        | SyntaxKind::LessThanSlashToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken
        | SyntaxKind::EqualsGreaterThanToken
        | SyntaxKind::PlusToken
        | SyntaxKind::MinusToken
        | SyntaxKind::AsteriskToken
        | SyntaxKind::AsteriskAsteriskToken
        | SyntaxKind::SlashToken
        | SyntaxKind::PercentToken
        | SyntaxKind::PlusPlusToken
        | SyntaxKind::MinusMinusToken
        | SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken
        | SyntaxKind::AmpersandToken
        | SyntaxKind::BarToken
        | SyntaxKind::CaretToken
        | SyntaxKind::ExclamationToken
        | SyntaxKind::TildeToken
        | SyntaxKind::AmpersandAmpersandToken
        | SyntaxKind::BarBarToken
        | SyntaxKind::QuestionToken
        | SyntaxKind::ColonToken
        | SyntaxKind::AtToken
        | SyntaxKind::QuestionQuestionToken
        | SyntaxKind::BacktickToken
        | SyntaxKind::HashToken
        | SyntaxKind::EqualsToken
        | SyntaxKind::PlusEqualsToken
        | SyntaxKind::MinusEqualsToken
        | SyntaxKind::AsteriskEqualsToken
        | SyntaxKind::AsteriskAsteriskEqualsToken
        | SyntaxKind::SlashEqualsToken
        | SyntaxKind::PercentEqualsToken
        | SyntaxKind::LessThanLessThanEqualsToken
        | SyntaxKind::GreaterThanGreaterThanEqualsToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        | SyntaxKind::AmpersandEqualsToken
        | SyntaxKind::BarEqualsToken
        | SyntaxKind::BarBarEqualsToken
        | SyntaxKind::AmpersandAmpersandEqualsToken
        | SyntaxKind::QuestionQuestionEqualsToken
        | SyntaxKind::CaretEqualsToken => Disposition::Skip(SkipReason::Token),

        // Identifiers
        SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier => {
            Disposition::Skip(SkipReason::Token)
        }

        // Reserved words
        SyntaxKind::BreakKeyword
        | SyntaxKind::CaseKeyword
        | SyntaxKind::CatchKeyword
        | SyntaxKind::ClassKeyword
        | SyntaxKind::ConstKeyword
        | SyntaxKind::ContinueKeyword
        | SyntaxKind::DebuggerKeyword
        | SyntaxKind::DefaultKeyword
        | SyntaxKind::DeleteKeyword
        | SyntaxKind::DoKeyword
        | SyntaxKind::ElseKeyword
        | SyntaxKind::EnumKeyword
        | SyntaxKind::ExportKeyword
        | SyntaxKind::ExtendsKeyword
        | SyntaxKind::FalseKeyword
        | SyntaxKind::FinallyKeyword
        | SyntaxKind::ForKeyword
        | SyntaxKind::FunctionKeyword
        | SyntaxKind::IfKeyword
        | SyntaxKind::ImportKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::InstanceOfKeyword
        | SyntaxKind::NewKeyword
        | SyntaxKind::NullKeyword
        | SyntaxKind::ReturnKeyword
        | SyntaxKind::SuperKeyword
        | SyntaxKind::SwitchKeyword
        | SyntaxKind::ThisKeyword
        | SyntaxKind::ThrowKeyword
        | SyntaxKind::TrueKeyword
        | SyntaxKind::TryKeyword
        | SyntaxKind::TypeOfKeyword
        | SyntaxKind::VarKeyword
        | SyntaxKind::VoidKeyword
        | SyntaxKind::WhileKeyword
        | SyntaxKind::WithKeyword => Disposition::Skip(SkipReason::Keyword),

        // Future reserved words (strict mode)
        SyntaxKind::ImplementsKeyword
        | SyntaxKind::InterfaceKeyword
        | SyntaxKind::LetKeyword
        | SyntaxKind::PackageKeyword
        | SyntaxKind::PrivateKeyword
        | SyntaxKind::ProtectedKeyword
        | SyntaxKind::PublicKeyword
        | SyntaxKind::StaticKeyword
        | SyntaxKind::YieldKeyword => Disposition::Skip(SkipReason::Keyword),

        // Contextual keywords
        SyntaxKind::AbstractKeyword
        | SyntaxKind::AccessorKeyword
        | SyntaxKind::AsKeyword
        | SyntaxKind::AssertsKeyword
        | SyntaxKind::AssertKeyword
        | SyntaxKind::AnyKeyword
        | SyntaxKind::AsyncKeyword
        | SyntaxKind::AwaitKeyword
        | SyntaxKind::BooleanKeyword
        | SyntaxKind::ConstructorKeyword
        | SyntaxKind::DeclareKeyword
        | SyntaxKind::GetKeyword
        | SyntaxKind::InferKeyword
        | SyntaxKind::IntrinsicKeyword
        | SyntaxKind::IsKeyword
        | SyntaxKind::KeyOfKeyword
        | SyntaxKind::ModuleKeyword
        | SyntaxKind::NamespaceKeyword
        | SyntaxKind::NeverKeyword
        | SyntaxKind::OutKeyword
        | SyntaxKind::ReadonlyKeyword
        | SyntaxKind::RequireKeyword
        | SyntaxKind::NumberKeyword
        | SyntaxKind::ObjectKeyword
        | SyntaxKind::SatisfiesKeyword
        | SyntaxKind::SetKeyword
        | SyntaxKind::StringKeyword
        | SyntaxKind::SymbolKeyword
        | SyntaxKind::TypeKeyword
        | SyntaxKind::UndefinedKeyword
        | SyntaxKind::UniqueKeyword
        | SyntaxKind::UnknownKeyword
        | SyntaxKind::FromKeyword
        | SyntaxKind::GlobalKeyword
        | SyntaxKind::BigIntKeyword
        | SyntaxKind::OverrideKeyword
        | SyntaxKind::OfKeyword => Disposition::Skip(SkipReason::Keyword),

        // Names
        SyntaxKind::QualifiedName | SyntaxKind::ComputedPropertyName => NOT_YET_LOWERED,

        // Signature and class elements
        SyntaxKind::TypeParameter => Disposition::Skip(SkipReason::TypeSyntax),
        SyntaxKind::Parameter | SyntaxKind::Decorator => NOT_YET_LOWERED,
        SyntaxKind::PropertySignature => Disposition::Skip(SkipReason::TypeSyntax),
        SyntaxKind::PropertyDeclaration => NOT_YET_LOWERED,
        SyntaxKind::MethodSignature => Disposition::Skip(SkipReason::TypeSyntax),
        SyntaxKind::MethodDeclaration
        | SyntaxKind::ClassStaticBlockDeclaration
        | SyntaxKind::Constructor
        | SyntaxKind::GetAccessor
        | SyntaxKind::SetAccessor => NOT_YET_LOWERED,
        SyntaxKind::CallSignature | SyntaxKind::ConstructSignature | SyntaxKind::IndexSignature => {
            Disposition::Skip(SkipReason::TypeSyntax)
        }

        // Type nodes
        SyntaxKind::TypePredicate
        | SyntaxKind::TypeReference
        | SyntaxKind::FunctionType
        | SyntaxKind::ConstructorType
        | SyntaxKind::TypeQuery
        | SyntaxKind::TypeLiteral
        | SyntaxKind::ArrayType
        | SyntaxKind::TupleType
        | SyntaxKind::OptionalType
        | SyntaxKind::RestType
        | SyntaxKind::UnionType
        | SyntaxKind::IntersectionType
        | SyntaxKind::ConditionalType
        | SyntaxKind::InferType
        | SyntaxKind::ParenthesizedType
        | SyntaxKind::ThisType
        | SyntaxKind::TypeOperator
        | SyntaxKind::IndexedAccessType
        | SyntaxKind::MappedType
        | SyntaxKind::LiteralType
        | SyntaxKind::NamedTupleMember
        | SyntaxKind::TemplateLiteralType
        | SyntaxKind::TemplateLiteralTypeSpan
        | SyntaxKind::ImportType => Disposition::Skip(SkipReason::TypeSyntax),

        // Binding patterns
        SyntaxKind::ObjectBindingPattern
        | SyntaxKind::ArrayBindingPattern
        | SyntaxKind::BindingElement => NOT_YET_LOWERED,

        // Expressions
        SyntaxKind::ArrayLiteralExpression
        | SyntaxKind::ObjectLiteralExpression
        | SyntaxKind::PropertyAccessExpression
        | SyntaxKind::ElementAccessExpression
        | SyntaxKind::CallExpression
        | SyntaxKind::NewExpression
        | SyntaxKind::TaggedTemplateExpression
        | SyntaxKind::TypeAssertionExpression
        | SyntaxKind::ParenthesizedExpression
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunction
        | SyntaxKind::DeleteExpression
        | SyntaxKind::TypeOfExpression
        | SyntaxKind::VoidExpression
        | SyntaxKind::AwaitExpression
        | SyntaxKind::PrefixUnaryExpression
        | SyntaxKind::PostfixUnaryExpression
        | SyntaxKind::BinaryExpression
        | SyntaxKind::ConditionalExpression
        | SyntaxKind::TemplateExpression
        | SyntaxKind::YieldExpression
        | SyntaxKind::SpreadElement
        | SyntaxKind::ClassExpression
        | SyntaxKind::OmittedExpression
        | SyntaxKind::ExpressionWithTypeArguments
        | SyntaxKind::AsExpression
        | SyntaxKind::NonNullExpression
        | SyntaxKind::MetaProperty => NOT_YET_LOWERED,
        SyntaxKind::SyntheticExpression => Disposition::Skip(SkipReason::Synthetic),
        SyntaxKind::SatisfiesExpression => NOT_YET_LOWERED,

        // Expression and class element helpers
        SyntaxKind::TemplateSpan | SyntaxKind::SemicolonClassElement => NOT_YET_LOWERED,

        // Statements
        SyntaxKind::Block
        | SyntaxKind::EmptyStatement
        | SyntaxKind::VariableStatement
        | SyntaxKind::ExpressionStatement
        | SyntaxKind::IfStatement
        | SyntaxKind::DoStatement
        | SyntaxKind::WhileStatement
        | SyntaxKind::ForStatement
        | SyntaxKind::ForInStatement
        | SyntaxKind::ForOfStatement
        | SyntaxKind::ContinueStatement
        | SyntaxKind::BreakStatement
        | SyntaxKind::ReturnStatement
        | SyntaxKind::WithStatement
        | SyntaxKind::SwitchStatement
        | SyntaxKind::LabeledStatement
        | SyntaxKind::ThrowStatement
        | SyntaxKind::TryStatement
        | SyntaxKind::DebuggerStatement => NOT_YET_LOWERED,

        // Declarations and module elements
        SyntaxKind::VariableDeclaration
        | SyntaxKind::VariableDeclarationList
        | SyntaxKind::FunctionDeclaration => NOT_YET_LOWERED,
        SyntaxKind::ClassDeclaration => Disposition::ClassDecl,
        SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration => {
            Disposition::Skip(SkipReason::TypeSyntax)
        }
        SyntaxKind::EnumDeclaration => NOT_YET_LOWERED,
        SyntaxKind::ModuleDeclaration | SyntaxKind::ModuleBlock => Disposition::Recurse,
        SyntaxKind::CaseBlock => NOT_YET_LOWERED,
        SyntaxKind::NamespaceExportDeclaration => Disposition::Skip(SkipReason::TypeSyntax),
        SyntaxKind::ImportEqualsDeclaration
        | SyntaxKind::ImportDeclaration
        | SyntaxKind::ImportClause
        | SyntaxKind::NamespaceImport
        | SyntaxKind::NamedImports
        | SyntaxKind::ImportSpecifier
        | SyntaxKind::ExportAssignment
        | SyntaxKind::ExportDeclaration
        | SyntaxKind::NamedExports
        | SyntaxKind::NamespaceExport
        | SyntaxKind::ExportSpecifier => NOT_YET_LOWERED,
        SyntaxKind::MissingDeclaration => Disposition::Skip(SkipReason::Synthetic),
        SyntaxKind::ExternalModuleReference => NOT_YET_LOWERED,

        // JSX
        SyntaxKind::JsxElement
        | SyntaxKind::JsxSelfClosingElement
        | SyntaxKind::JsxOpeningElement
        | SyntaxKind::JsxClosingElement
        | SyntaxKind::JsxFragment
        | SyntaxKind::JsxOpeningFragment
        | SyntaxKind::JsxClosingFragment
        | SyntaxKind::JsxAttribute
        | SyntaxKind::JsxAttributes
        | SyntaxKind::JsxSpreadAttribute
        | SyntaxKind::JsxExpression => NOT_YET_LOWERED,

        // Clauses
        SyntaxKind::CaseClause
        | SyntaxKind::DefaultClause
        | SyntaxKind::HeritageClause
        | SyntaxKind::CatchClause
        | SyntaxKind::AssertClause
        | SyntaxKind::AssertEntry
        | SyntaxKind::ImportTypeAssertionContainer => NOT_YET_LOWERED,

        // Object literal members
        SyntaxKind::PropertyAssignment
        | SyntaxKind::ShorthandPropertyAssignment
        | SyntaxKind::SpreadAssignment => NOT_YET_LOWERED,

        // Enum members
        SyntaxKind::EnumMember => NOT_YET_LOWERED,

        // Top-level nodes
        SyntaxKind::UnparsedPrologue
        | SyntaxKind::UnparsedPrepend
        | SyntaxKind::UnparsedText
        | SyntaxKind::UnparsedInternalText
        | SyntaxKind::UnparsedSyntheticReference => Disposition::Skip(SkipReason::Synthetic),
        SyntaxKind::SourceFile => Disposition::Recurse,
        SyntaxKind::Bundle | SyntaxKind::UnparsedSource | SyntaxKind::InputFiles => {
            Disposition::Skip(SkipReason::Synthetic)
        }

        // JSDoc
        SyntaxKind::JSDocTypeExpression
        | SyntaxKind::JSDocNameReference
        | SyntaxKind::JSDocMemberName
        | SyntaxKind::JSDocAllType
        | SyntaxKind::JSDocUnknownType
        | SyntaxKind::JSDocNullableType
        | SyntaxKind::JSDocNonNullableType
        | SyntaxKind::JSDocOptionalType
        | SyntaxKind::JSDocFunctionType
        | SyntaxKind::JSDocVariadicType
        | SyntaxKind::JSDocNamepathType
        | SyntaxKind::JSDoc
        | SyntaxKind::JSDocComment
        | SyntaxKind::JSDocText
        | SyntaxKind::JSDocTypeLiteral
        | SyntaxKind::JSDocSignature
        | SyntaxKind::JSDocLink
        | SyntaxKind::JSDocLinkCode
        | SyntaxKind::JSDocLinkPlain
        | SyntaxKind::JSDocTag
        | SyntaxKind::JSDocAugmentsTag
        | SyntaxKind::JSDocImplementsTag
        | SyntaxKind::JSDocAuthorTag
        | SyntaxKind::JSDocDeprecatedTag
        | SyntaxKind::JSDocClassTag
        | SyntaxKind::JSDocPublicTag
        | SyntaxKind::JSDocPrivateTag
        | SyntaxKind::JSDocProtectedTag
        | SyntaxKind::JSDocReadonlyTag
        | SyntaxKind::JSDocOverrideTag
        | SyntaxKind::JSDocCallbackTag
        | SyntaxKind::JSDocEnumTag
        | SyntaxKind::JSDocParameterTag
        | SyntaxKind::JSDocReturnTag
        | SyntaxKind::JSDocThisTag
        | SyntaxKind::JSDocTypeTag
        | SyntaxKind::JSDocTemplateTag
        | SyntaxKind::JSDocTypedefTag
        | SyntaxKind::JSDocSeeTag
        | SyntaxKind::JSDocPropertyTag => Disposition::Skip(SkipReason::JsDoc),

        // Synthesized nodes
        SyntaxKind::SyntaxList
        | SyntaxKind::NotEmittedStatement
        | SyntaxKind::PartiallyEmittedExpression
        | SyntaxKind::CommaListExpression
        | SyntaxKind::MergeDeclarationMarker
        | SyntaxKind::EndOfDeclarationMarker
        | SyntaxKind::SyntheticReferenceExpression => Disposition::Skip(SkipReason::Synthetic),
    }
}
