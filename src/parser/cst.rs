//! Syntax kinds for the C#-like language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the
//! parser). Logos derives token recognition; node kinds lack token/regex attributes.
//! `KLang` implements Rowan's `Language` trait for tree construction.

#![allow(dead_code)] // Some items are for future use

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Keywords first (contiguous, for `is_keyword`), then
/// operators/punctuation, then miscellaneous tokens, then trivia, then node kinds,
/// then the `__LAST` sentinel.
///
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Keywords (contiguous block, see `is_keyword`) ---
    #[token("abstract")]
    KwAbstract = 0,
    #[token("as")]
    KwAs,
    #[token("base")]
    KwBase,
    #[token("bool")]
    KwBool,
    #[token("break")]
    KwBreak,
    #[token("byte")]
    KwByte,
    #[token("case")]
    KwCase,
    #[token("catch")]
    KwCatch,
    #[token("char")]
    KwChar,
    #[token("checked")]
    KwChecked,
    #[token("class")]
    KwClass,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("decimal")]
    KwDecimal,
    #[token("default")]
    KwDefault,
    #[token("delegate")]
    KwDelegate,
    #[token("do")]
    KwDo,
    #[token("double")]
    KwDouble,
    #[token("else")]
    KwElse,
    #[token("enum")]
    KwEnum,
    #[token("event")]
    KwEvent,
    #[token("explicit")]
    KwExplicit,
    #[token("extern")]
    KwExtern,
    #[token("false")]
    KwFalse,
    #[token("finally")]
    KwFinally,
    #[token("fixed")]
    KwFixed,
    #[token("float")]
    KwFloat,
    #[token("for")]
    KwFor,
    #[token("foreach")]
    KwForeach,
    #[token("goto")]
    KwGoto,
    #[token("if")]
    KwIf,
    #[token("implicit")]
    KwImplicit,
    #[token("in")]
    KwIn,
    #[token("int")]
    KwInt,
    #[token("interface")]
    KwInterface,
    #[token("internal")]
    KwInternal,
    #[token("is")]
    KwIs,
    #[token("lock")]
    KwLock,
    #[token("long")]
    KwLong,
    #[token("namespace")]
    KwNamespace,
    #[token("new")]
    KwNew,
    #[token("null")]
    KwNull,
    #[token("object")]
    KwObject,
    #[token("operator")]
    KwOperator,
    #[token("out")]
    KwOut,
    #[token("override")]
    KwOverride,
    #[token("params")]
    KwParams,
    #[token("private")]
    KwPrivate,
    #[token("protected")]
    KwProtected,
    #[token("public")]
    KwPublic,
    #[token("readonly")]
    KwReadonly,
    #[token("ref")]
    KwRef,
    #[token("return")]
    KwReturn,
    #[token("sbyte")]
    KwSbyte,
    #[token("sealed")]
    KwSealed,
    #[token("short")]
    KwShort,
    #[token("sizeof")]
    KwSizeof,
    #[token("stackalloc")]
    KwStackalloc,
    #[token("static")]
    KwStatic,
    #[token("string")]
    KwString,
    #[token("struct")]
    KwStruct,
    #[token("switch")]
    KwSwitch,
    #[token("this")]
    KwThis,
    #[token("throw")]
    KwThrow,
    #[token("true")]
    KwTrue,
    #[token("try")]
    KwTry,
    #[token("typeof")]
    KwTypeof,
    #[token("uint")]
    KwUint,
    #[token("ulong")]
    KwUlong,
    #[token("unchecked")]
    KwUnchecked,
    #[token("unsafe")]
    KwUnsafe,
    #[token("ushort")]
    KwUshort,
    #[token("using")]
    KwUsing,
    #[token("virtual")]
    KwVirtual,
    #[token("void")]
    KwVoid,
    #[token("volatile")]
    KwVolatile,
    #[token("while")]
    KwWhile,
    /// Sentinel marking the end of the contiguous keyword block. Not a real token.
    #[doc(hidden)]
    __LastKeyword,

    // --- Punctuation / operators ---
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("@")]
    At,

    #[token("?")]
    Question,

    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    #[token("+=")]
    PlusEquals,
    #[token("-=")]
    MinusEquals,
    #[token("*=")]
    StarEquals,
    #[token("/=")]
    SlashEquals,
    #[token("%=")]
    PercentEquals,
    #[token("&=")]
    AmpEquals,
    #[token("|=")]
    PipeEquals,
    #[token("^=")]
    CaretEquals,
    #[token("<<=")]
    LtLtEquals,
    #[token(">>=")]
    GtGtEquals,

    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    #[token("==")]
    EqualsEquals,
    #[token("!=")]
    BangEquals,
    #[token("<=")]
    LtEquals,
    #[token(">=")]
    GtEquals,

    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,

    #[token("->")]
    Arrow,

    #[token("=")]
    Equals,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // --- Miscellaneous ---
    /// Matched before `Identifier` so keywords above win by Logos priority.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"@\x22(?:[^\x22]|\x22\x22)*\x22")]
    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[doc(hidden)]
    StringLiteral,

    #[regex(r"'(?:[^'\\\n]|\\.)*'?")]
    #[doc(hidden)]
    CharacterLiteral,

    #[regex(r"0[xX][0-9a-fA-F]*([uUlL]|[uU][lL]|[lL][uU])?")]
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[fFdDmMlLuU]*")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[doc(hidden)]
    NumericLiteral,

    #[regex(r"[ \t]*#[^\n]*")]
    PreprocessorDirective,

    EndOfFile,
    Unknown,

    // --- Trivia ---
    #[regex(r"[ \t\r]+")]
    Whitespace,
    #[token("\n")]
    EndOfLine,
    #[regex(r"//[^\n]*")]
    SingleLineComment,
    #[regex(r"/\*([^*]|\*[^/])*\*?")]
    MultiLineComment,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    UsingDirective,
    QualifiedName,

    AttributeSection,
    AttributeTargetSpecifier,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,

    NamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    EnumMemberDeclaration,
    DelegateDeclaration,
    BaseTypeList,

    FieldDeclaration,
    VariableDeclarator,
    EventFieldDeclaration,
    EventDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorInitializer,
    DestructorDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    IncompleteMember,
    ExplicitInterfaceSpecifier,
    AccessorDeclaration,
    AccessorList,

    ParameterList,
    Parameter,

    PredefinedType,
    SimpleType,
    PointerType,
    ArrayType,
    ArrayRankSpecifier,

    Block,
    IfStatement,
    ElseClause,
    SwitchStatement,
    SwitchSection,
    CaseSwitchLabel,
    DefaultSwitchLabel,
    ForStatement,
    ForInitializer,
    ForEachStatement,
    WhileStatement,
    DoStatement,
    BreakStatement,
    ContinueStatement,
    GotoStatement,
    GotoCaseStatement,
    GotoDefaultStatement,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    CatchDeclaration,
    FinallyClause,
    CheckedStatement,
    UncheckedStatement,
    LockStatement,
    UsingStatement,
    FixedStatement,
    UnsafeStatement,
    LabeledStatement,
    LocalDeclarationStatement,
    VariableDeclaration,
    ExpressionStatement,
    EmptyStatement,

    LiteralExpression,
    IdentifierName,
    ThisExpression,
    BaseExpression,
    ParenthesizedExpression,
    MemberAccessExpression,
    PointerMemberAccessExpression,
    InvocationExpression,
    ArgumentList,
    Argument,
    ElementAccessExpression,
    BracketedArgumentList,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    AssignmentExpression,
    IsExpression,
    AsExpression,
    CastExpression,
    ObjectCreationExpression,
    ArrayCreationExpression,
    ArrayInitializer,
    StackAllocExpression,
    SizeOfExpression,
    TypeOfExpression,
    CheckedExpression,
    UncheckedExpression,
    ErrorExpression,
    EmptyExpression,

    /// Wraps unexpected/skipped tokens during error recovery.
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u16) < (__LastKeyword as u16)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | EndOfLine | SingleLineComment | MultiLineComment
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Unknown)
    }

    /// Reclassifies an `Identifier`'s text as a contextual keyword, if it matches one.
    /// The token's stored kind and text are never rewritten; this is a parser-side lookup
    /// consulted only where the surrounding production expects a contextual keyword.
    pub fn contextual_keyword_text(text: &str) -> Option<ContextualKeyword> {
        Some(match text {
            "get" => ContextualKeyword::Get,
            "set" => ContextualKeyword::Set,
            "add" => ContextualKeyword::Add,
            "remove" => ContextualKeyword::Remove,
            "assembly" => ContextualKeyword::Assembly,
            "field" => ContextualKeyword::Field,
            "event" => ContextualKeyword::Event,
            "method" => ContextualKeyword::Method,
            "module" => ContextualKeyword::Module,
            "param" => ContextualKeyword::Param,
            "property" => ContextualKeyword::Property,
            "return" => ContextualKeyword::Return,
            "type" => ContextualKeyword::Type,
            _ => return None,
        })
    }
}

/// Contextual keywords: lexed as plain `Identifier` tokens, reclassified by the parser
/// only when the surrounding production demands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextualKeyword {
    Get,
    Set,
    Add,
    Remove,
    Assembly,
    Field,
    Event,
    Method,
    Module,
    Param,
    Property,
    Return,
    Type,
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KLang {}

impl Language for KLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<KLang>;
pub type SyntaxToken = rowan::SyntaxToken<KLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// Number of `u64` words backing [`TokenSet`]. The lineage's query-language parser used a
/// single `u64` (capacity 64); this language's keyword and node-kind surface is much
/// larger, so the bitset is widened to a small fixed-size word array while keeping the
/// same `new`/`single`/`contains`/`union` const-fn API.
const TOKEN_SET_WORDS: usize = 4;

/// Bitset of `SyntaxKind`s for O(1) membership testing, backed by `TOKEN_SET_WORDS` words
/// (capacity `TOKEN_SET_WORDS * 64` discriminants).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; TOKEN_SET_WORDS]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; TOKEN_SET_WORDS]);

    /// Panics at compile time if any kind's discriminant exceeds the bitset capacity.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                (kind as usize) < TOKEN_SET_WORDS * 64,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(
            (kind as usize) < TOKEN_SET_WORDS * 64,
            "SyntaxKind value exceeds TokenSet capacity"
        );
        let mut bits = [0u64; TOKEN_SET_WORDS];
        bits[(kind / 64) as usize] = 1 << (kind % 64);
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if (kind as usize) >= TOKEN_SET_WORDS * 64 {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < TOKEN_SET_WORDS {
            bits[i] = self.0[i] | other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..(TOKEN_SET_WORDS as u16 * 64) {
            if self.0[(i / 64) as usize] & (1 << (i % 64)) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const MODIFIERS: TokenSet = TokenSet::new(&[
        KwPublic,
        KwProtected,
        KwInternal,
        KwPrivate,
        KwStatic,
        KwVirtual,
        KwOverride,
        KwAbstract,
        KwSealed,
        KwNew,
        KwReadonly,
        KwVolatile,
        KwExtern,
        KwUnsafe,
        KwConst,
    ]);

    pub const PREDEFINED_TYPES: TokenSet = TokenSet::new(&[
        KwBool, KwByte, KwChar, KwDecimal, KwDouble, KwFloat, KwInt, KwLong, KwObject, KwSbyte,
        KwShort, KwString, KwUint, KwUlong, KwUshort, KwVoid,
    ]);

    pub const TYPE_START: TokenSet = PREDEFINED_TYPES.union(TokenSet::new(&[Identifier]));

    /// Tokens that can begin a type-declaration (nested or top-level).
    pub const TYPE_DECL_START: TokenSet =
        TokenSet::new(&[KwClass, KwStruct, KwInterface, KwEnum, KwDelegate]);

    pub const NAMESPACE_MEMBER_START: TokenSet =
        TYPE_DECL_START.union(TokenSet::new(&[KwNamespace]));

    pub const ACCESSIBILITY_MODIFIERS: TokenSet =
        TokenSet::new(&[KwPublic, KwProtected, KwInternal, KwPrivate]);

    /// FIRST set of a primary expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        KwThis,
        KwBase,
        KwTrue,
        KwFalse,
        KwNull,
        KwNew,
        KwTypeof,
        KwSizeof,
        KwStackalloc,
        KwChecked,
        KwUnchecked,
        ParenOpen,
        Identifier,
        NumericLiteral,
        StringLiteral,
        CharacterLiteral,
        Plus,
        Minus,
        Bang,
        Tilde,
        Star,
        Amp,
        PlusPlus,
        MinusMinus,
    ])
    .union(PREDEFINED_TYPES);

    pub const STATEMENT_START: TokenSet = TokenSet::new(&[
        BraceOpen,
        KwIf,
        KwSwitch,
        KwFor,
        KwForeach,
        KwWhile,
        KwDo,
        KwBreak,
        KwContinue,
        KwGoto,
        KwReturn,
        KwThrow,
        KwTry,
        KwChecked,
        KwUnchecked,
        KwLock,
        KwUsing,
        KwFixed,
        KwUnsafe,
        Semicolon,
        KwConst,
    ])
    .union(TYPE_START)
    .union(EXPR_FIRST);

    pub const MEMBER_MODIFIER_OR_START: TokenSet = MODIFIERS
        .union(TYPE_DECL_START)
        .union(TYPE_START)
        .union(TokenSet::new(&[
            KwImplicit,
            KwExplicit,
            KwEvent,
            Tilde,
            BracketOpen,
        ]));

    pub const DECLARATION_RECOVERY: TokenSet =
        MEMBER_MODIFIER_OR_START.union(TokenSet::new(&[BraceClose]));
}
