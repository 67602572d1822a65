//! The closed enumeration of syntactic categories.
//!
//! [`SyntaxKind`] is the kind tag carried by every node of the type-checked
//! AST. Tags are dense `u16` values starting at zero, laid out in the same
//! order the TypeScript compiler assigns them, so a provider backed by a real
//! checker can hand its raw kind values straight to [`SyntaxKind::try_from`].
//!
//! The enum is not `#[non_exhaustive]`. A match over it without a wildcard
//! arm stops compiling when a category is added.
//!
//! Range markers such as [`SyntaxKind::FIRST_KEYWORD`] mirror the aliases the
//! checker defines; they are associated constants rather than variants so the
//! enumeration itself has exactly one variant per category.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Syntactic category of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum SyntaxKind {
    // =========================================================================
    // Tokens and trivia
    // =========================================================================
    Unknown = 0,
    EndOfFileToken,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    NewLineTrivia,
    WhitespaceTrivia,
    ShebangTrivia,
    ConflictMarkerTrivia,

    // =========================================================================
    // Literals and template pieces
    // =========================================================================
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    JsxText,
    JsxTextAllWhiteSpaces,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // =========================================================================
    // Punctuation
    // =========================================================================
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    LessThanSlashToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,
    BacktickToken,
    HashToken,
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    CaretEqualsToken,

    // =========================================================================
    // Identifiers
    // =========================================================================
    Identifier,
    PrivateIdentifier,

    // =========================================================================
    // Reserved words
    // =========================================================================
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // =========================================================================
    // Future reserved words (strict mode)
    // =========================================================================
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // =========================================================================
    // Contextual keywords
    // =========================================================================
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AssertKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,

    // =========================================================================
    // Names
    // =========================================================================
    QualifiedName,
    ComputedPropertyName,

    // =========================================================================
    // Signature and class elements
    // =========================================================================
    TypeParameter,
    Parameter,
    Decorator,
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    ClassStaticBlockDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,

    // =========================================================================
    // Type nodes
    // =========================================================================
    TypePredicate,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    OptionalType,
    RestType,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    ThisType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    NamedTupleMember,
    TemplateLiteralType,
    TemplateLiteralTypeSpan,
    ImportType,

    // =========================================================================
    // Binding patterns
    // =========================================================================
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // =========================================================================
    // Expressions
    // =========================================================================
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    TypeAssertionExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    YieldExpression,
    SpreadElement,
    ClassExpression,
    OmittedExpression,
    ExpressionWithTypeArguments,
    AsExpression,
    NonNullExpression,
    MetaProperty,
    SyntheticExpression,
    SatisfiesExpression,

    // =========================================================================
    // Expression and class element helpers
    // =========================================================================
    TemplateSpan,
    SemicolonClassElement,

    // =========================================================================
    // Statements
    // =========================================================================
    Block,
    EmptyStatement,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    DebuggerStatement,

    // =========================================================================
    // Declarations and module elements
    // =========================================================================
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ModuleBlock,
    CaseBlock,
    NamespaceExportDeclaration,
    ImportEqualsDeclaration,
    ImportDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ExportAssignment,
    ExportDeclaration,
    NamedExports,
    NamespaceExport,
    ExportSpecifier,
    MissingDeclaration,
    ExternalModuleReference,

    // =========================================================================
    // JSX
    // =========================================================================
    JsxElement,
    JsxSelfClosingElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxAttribute,
    JsxAttributes,
    JsxSpreadAttribute,
    JsxExpression,

    // =========================================================================
    // Clauses
    // =========================================================================
    CaseClause,
    DefaultClause,
    HeritageClause,
    CatchClause,
    AssertClause,
    AssertEntry,
    ImportTypeAssertionContainer,

    // =========================================================================
    // Object literal members
    // =========================================================================
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,

    // =========================================================================
    // Enum members
    // =========================================================================
    EnumMember,

    // =========================================================================
    // Top-level nodes
    // =========================================================================
    UnparsedPrologue,
    UnparsedPrepend,
    UnparsedText,
    UnparsedInternalText,
    UnparsedSyntheticReference,
    SourceFile,
    Bundle,
    UnparsedSource,
    InputFiles,

    // =========================================================================
    // JSDoc
    // =========================================================================
    JSDocTypeExpression,
    JSDocNameReference,
    JSDocMemberName,
    JSDocAllType,
    JSDocUnknownType,
    JSDocNullableType,
    JSDocNonNullableType,
    JSDocOptionalType,
    JSDocFunctionType,
    JSDocVariadicType,
    JSDocNamepathType,
    JSDoc,
    JSDocComment,
    JSDocText,
    JSDocTypeLiteral,
    JSDocSignature,
    JSDocLink,
    JSDocLinkCode,
    JSDocLinkPlain,
    JSDocTag,
    JSDocAugmentsTag,
    JSDocImplementsTag,
    JSDocAuthorTag,
    JSDocDeprecatedTag,
    JSDocClassTag,
    JSDocPublicTag,
    JSDocPrivateTag,
    JSDocProtectedTag,
    JSDocReadonlyTag,
    JSDocOverrideTag,
    JSDocCallbackTag,
    JSDocEnumTag,
    JSDocParameterTag,
    JSDocReturnTag,
    JSDocThisTag,
    JSDocTypeTag,
    JSDocTemplateTag,
    JSDocTypedefTag,
    JSDocSeeTag,
    JSDocPropertyTag,

    // =========================================================================
    // Synthesized nodes
    // =========================================================================
    SyntaxList,
    NotEmittedStatement,
    PartiallyEmittedExpression,
    CommaListExpression,
    MergeDeclarationMarker,
    EndOfDeclarationMarker,
    SyntheticReferenceExpression,
}

impl SyntaxKind {
    /// Number of kind tags. Tags are dense in `0..COUNT`.
    pub const COUNT: usize = SyntaxKind::SyntheticReferenceExpression as usize + 1;

    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_TOKEN: SyntaxKind = SyntaxKind::Unknown;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::LAST_KEYWORD;
    pub const FIRST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::SingleLineCommentTrivia;
    pub const LAST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::ConflictMarkerTrivia;
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const LAST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::TemplateTail;
    pub const FIRST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::LessThanToken;
    pub const LAST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_STATEMENT: SyntaxKind = SyntaxKind::VariableStatement;
    pub const LAST_STATEMENT: SyntaxKind = SyntaxKind::DebuggerStatement;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;
    pub const FIRST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocTypeExpression;
    pub const LAST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocPropertyTag;
    pub const FIRST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocTag;
    pub const LAST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocPropertyTag;

    /// Raw tag value.
    #[inline]
    pub const fn tag(self) -> u16 {
        self as u16
    }

    #[inline]
    const fn between(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        self.tag() >= first.tag() && self.tag() <= last.tag()
    }

    /// Iterate over every kind in tag order.
    pub fn iter() -> impl Iterator<Item = SyntaxKind> {
        (0..Self::COUNT as u16).filter_map(|tag| SyntaxKind::try_from(tag).ok())
    }

    /// Comment, whitespace, newline, shebang and conflict-marker trivia.
    pub const fn is_trivia(self) -> bool {
        self.between(Self::FIRST_TRIVIA_TOKEN, Self::LAST_TRIVIA_TOKEN)
    }

    /// Literal tokens, including template pieces.
    pub const fn is_literal(self) -> bool {
        self.between(Self::FIRST_LITERAL_TOKEN, Self::LAST_LITERAL_TOKEN)
    }

    pub const fn is_template_literal_token(self) -> bool {
        self.between(Self::FIRST_TEMPLATE_TOKEN, Self::LAST_TEMPLATE_TOKEN)
    }

    pub const fn is_punctuation(self) -> bool {
        self.between(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    pub const fn is_assignment_operator(self) -> bool {
        self.between(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    pub const fn is_keyword(self) -> bool {
        self.between(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// Any token kind: trivia, literals, punctuation, identifiers and keywords.
    pub const fn is_token(self) -> bool {
        self.between(Self::FIRST_TOKEN, Self::LAST_TOKEN)
    }

    pub const fn is_type_node(self) -> bool {
        self.between(Self::FIRST_TYPE_NODE, Self::LAST_TYPE_NODE)
    }

    pub const fn is_statement(self) -> bool {
        self.between(Self::FIRST_STATEMENT, Self::LAST_STATEMENT)
    }

    pub const fn is_jsdoc(self) -> bool {
        self.between(Self::FIRST_JSDOC_NODE, Self::LAST_JSDOC_NODE)
    }

    /// Declarations that introduce a namespace-like scope.
    pub const fn is_module_like(self) -> bool {
        matches!(self, Self::ModuleDeclaration | Self::ModuleBlock)
    }
}
