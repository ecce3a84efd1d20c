//! Typed accessors over the raw [`SyntaxNode`] tree.
//!
//! The physical tree is Rowan's homogeneous green/red tree (see `cst.rs`); this module
//! layers typed, per-node-kind views on top of it. `Optional<T>` and `SeparatedList<T>`
//! are not separate storage - they are typed views computed from a node's ordered
//! children. Cast is infallible for a matching `SyntaxKind` - validation happens in the
//! parser, not here.

use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn child_node<T>(node: &SyntaxNode, cast: impl Fn(SyntaxNode) -> Option<T>) -> Option<T> {
    node.children().find_map(cast)
}

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

fn child_tokens(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| t.kind() == kind)
}

/// Present-or-absent view over a single optional child.
#[derive(Debug, Clone)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    pub fn new(value: Option<T>) -> Self {
        Self(value)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.0
    }
}

/// Parallel `elements`/`separators` view over a node's children.
/// `separators.len()` is always `elements.len()` or `elements.len() - 1`.
#[derive(Debug, Clone)]
pub struct SeparatedList<T> {
    elements: Vec<T>,
    separators: Vec<SyntaxToken>,
}

impl<T> SeparatedList<T> {
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn separators(&self) -> &[SyntaxToken] {
        &self.separators
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Walks `node`'s direct children in order, casting element nodes with `cast` and
/// collecting `Comma` tokens as separators.
fn separated_list<T>(node: &SyntaxNode, cast: impl Fn(SyntaxNode) -> Option<T>) -> SeparatedList<T> {
    let mut elements = Vec::new();
    let mut separators = Vec::new();
    for child in node.children_with_tokens() {
        match child {
            SyntaxElement::Node(n) => {
                if let Some(el) = cast(n) {
                    elements.push(el);
                }
            }
            SyntaxElement::Token(t) if t.kind() == SyntaxKind::Comma => {
                separators.push(t);
            }
            _ => {}
        }
    }
    SeparatedList { elements, separators }
}

ast_node!(CompilationUnit, CompilationUnit);
impl CompilationUnit {
    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }

    pub fn members(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }
}

ast_node!(UsingDirective, UsingDirective);
impl UsingDirective {
    pub fn alias(&self) -> Optional<SyntaxToken> {
        Optional::new(child_token(&self.0, SyntaxKind::Identifier))
    }

    pub fn name(&self) -> Option<QualifiedName> {
        child_node(&self.0, QualifiedName::cast)
    }
}

ast_node!(QualifiedName, QualifiedName);
impl QualifiedName {
    /// The full dotted text of the name, e.g. `System.Collections.Generic`.
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::Identifier | SyntaxKind::Dot))
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        child_tokens(&self.0, SyntaxKind::Identifier)
    }
}

/// Tag distinguishing which declaration kind a `Declaration` wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    EnumMember,
    Delegate,
    Field,
    EventField,
    Event,
    Property,
    Indexer,
    Method,
    Constructor,
    Destructor,
    Operator,
    ConversionOperator,
    IncompleteMember,
}

/// Tagged union over every declaration node kind. Modeled as an enum rather than a
/// heterogeneous base reference, so callers switch on `kind()` instead of downcasting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Namespace(NamespaceDeclaration),
    Class(ClassDeclaration),
    Struct(StructDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
    EnumMember(EnumMemberDeclaration),
    Delegate(DelegateDeclaration),
    Field(FieldDeclaration),
    EventField(EventFieldDeclaration),
    Event(EventDeclaration),
    Property(PropertyDeclaration),
    Indexer(IndexerDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Destructor(DestructorDeclaration),
    Operator(OperatorDeclaration),
    ConversionOperator(ConversionOperatorDeclaration),
    Incomplete(IncompleteMember),
}

impl Declaration {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        Some(match node.kind() {
            SyntaxKind::NamespaceDeclaration => Declaration::Namespace(NamespaceDeclaration(node)),
            SyntaxKind::ClassDeclaration => Declaration::Class(ClassDeclaration(node)),
            SyntaxKind::StructDeclaration => Declaration::Struct(StructDeclaration(node)),
            SyntaxKind::InterfaceDeclaration => Declaration::Interface(InterfaceDeclaration(node)),
            SyntaxKind::EnumDeclaration => Declaration::Enum(EnumDeclaration(node)),
            SyntaxKind::EnumMemberDeclaration => Declaration::EnumMember(EnumMemberDeclaration(node)),
            SyntaxKind::DelegateDeclaration => Declaration::Delegate(DelegateDeclaration(node)),
            SyntaxKind::FieldDeclaration => Declaration::Field(FieldDeclaration(node)),
            SyntaxKind::EventFieldDeclaration => Declaration::EventField(EventFieldDeclaration(node)),
            SyntaxKind::EventDeclaration => Declaration::Event(EventDeclaration(node)),
            SyntaxKind::PropertyDeclaration => Declaration::Property(PropertyDeclaration(node)),
            SyntaxKind::IndexerDeclaration => Declaration::Indexer(IndexerDeclaration(node)),
            SyntaxKind::MethodDeclaration => Declaration::Method(MethodDeclaration(node)),
            SyntaxKind::ConstructorDeclaration => Declaration::Constructor(ConstructorDeclaration(node)),
            SyntaxKind::DestructorDeclaration => Declaration::Destructor(DestructorDeclaration(node)),
            SyntaxKind::OperatorDeclaration => Declaration::Operator(OperatorDeclaration(node)),
            SyntaxKind::ConversionOperatorDeclaration => {
                Declaration::ConversionOperator(ConversionOperatorDeclaration(node))
            }
            SyntaxKind::IncompleteMember => Declaration::Incomplete(IncompleteMember(node)),
            _ => return None,
        })
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Namespace(_) => DeclarationKind::Namespace,
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Struct(_) => DeclarationKind::Struct,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::Enum(_) => DeclarationKind::Enum,
            Declaration::EnumMember(_) => DeclarationKind::EnumMember,
            Declaration::Delegate(_) => DeclarationKind::Delegate,
            Declaration::Field(_) => DeclarationKind::Field,
            Declaration::EventField(_) => DeclarationKind::EventField,
            Declaration::Event(_) => DeclarationKind::Event,
            Declaration::Property(_) => DeclarationKind::Property,
            Declaration::Indexer(_) => DeclarationKind::Indexer,
            Declaration::Method(_) => DeclarationKind::Method,
            Declaration::Constructor(_) => DeclarationKind::Constructor,
            Declaration::Destructor(_) => DeclarationKind::Destructor,
            Declaration::Operator(_) => DeclarationKind::Operator,
            Declaration::ConversionOperator(_) => DeclarationKind::ConversionOperator,
            Declaration::Incomplete(_) => DeclarationKind::IncompleteMember,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Declaration::Namespace(n) => n.as_cst(),
            Declaration::Class(n) => n.as_cst(),
            Declaration::Struct(n) => n.as_cst(),
            Declaration::Interface(n) => n.as_cst(),
            Declaration::Enum(n) => n.as_cst(),
            Declaration::EnumMember(n) => n.as_cst(),
            Declaration::Delegate(n) => n.as_cst(),
            Declaration::Field(n) => n.as_cst(),
            Declaration::EventField(n) => n.as_cst(),
            Declaration::Event(n) => n.as_cst(),
            Declaration::Property(n) => n.as_cst(),
            Declaration::Indexer(n) => n.as_cst(),
            Declaration::Method(n) => n.as_cst(),
            Declaration::Constructor(n) => n.as_cst(),
            Declaration::Destructor(n) => n.as_cst(),
            Declaration::Operator(n) => n.as_cst(),
            Declaration::ConversionOperator(n) => n.as_cst(),
            Declaration::Incomplete(n) => n.as_cst(),
        }
    }

    /// Modifier tokens attached directly to this declaration, in source order.
    pub fn modifiers(&self) -> Vec<SyntaxToken> {
        self.as_cst()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| super::cst::token_sets::MODIFIERS.contains(t.kind()))
            .collect()
    }
}

ast_node!(NamespaceDeclaration, NamespaceDeclaration);
impl NamespaceDeclaration {
    pub fn name(&self) -> Option<QualifiedName> {
        child_node(&self.0, QualifiedName::cast)
    }
    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }
    pub fn members(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }
}

ast_node!(ClassDeclaration, ClassDeclaration);
impl ClassDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn base_types(&self) -> Option<BaseTypeList> {
        child_node(&self.0, BaseTypeList::cast)
    }
    pub fn members(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }
}

ast_node!(StructDeclaration, StructDeclaration);
impl StructDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn base_types(&self) -> Option<BaseTypeList> {
        child_node(&self.0, BaseTypeList::cast)
    }
    pub fn members(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }
}

ast_node!(InterfaceDeclaration, InterfaceDeclaration);
impl InterfaceDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn base_types(&self) -> Option<BaseTypeList> {
        child_node(&self.0, BaseTypeList::cast)
    }
    pub fn members(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }
}

ast_node!(BaseTypeList, BaseTypeList);
impl BaseTypeList {
    pub fn types(&self) -> SeparatedList<Type> {
        separated_list(&self.0, Type::cast)
    }
}

ast_node!(EnumDeclaration, EnumDeclaration);
impl EnumDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn base_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn members(&self) -> SeparatedList<EnumMemberDeclaration> {
        separated_list(&self.0, EnumMemberDeclaration::cast)
    }
}

ast_node!(EnumMemberDeclaration, EnumMemberDeclaration);
impl EnumMemberDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn value(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(DelegateDeclaration, DelegateDeclaration);
impl DelegateDeclaration {
    pub fn return_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
}

ast_node!(ParameterList, ParameterList);
impl ParameterList {
    pub fn parameters(&self) -> SeparatedList<Parameter> {
        separated_list(&self.0, Parameter::cast)
    }
}

ast_node!(Parameter, Parameter);
impl Parameter {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(FieldDeclaration, FieldDeclaration);
impl FieldDeclaration {
    pub fn is_const(&self) -> bool {
        child_token(&self.0, SyntaxKind::KwConst).is_some()
    }
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn declarators(&self) -> SeparatedList<VariableDeclarator> {
        separated_list(&self.0, VariableDeclarator::cast)
    }
}

ast_node!(VariableDeclarator, VariableDeclarator);
impl VariableDeclarator {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn initializer(&self) -> Optional<Expr> {
        Optional::new(child_node(&self.0, Expr::cast))
    }
}

ast_node!(EventFieldDeclaration, EventFieldDeclaration);
impl EventFieldDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn declarators(&self) -> SeparatedList<VariableDeclarator> {
        separated_list(&self.0, VariableDeclarator::cast)
    }
}

ast_node!(EventDeclaration, EventDeclaration);
impl EventDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn accessors(&self) -> Option<AccessorList> {
        child_node(&self.0, AccessorList::cast)
    }
}

ast_node!(PropertyDeclaration, PropertyDeclaration);
impl PropertyDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn accessors(&self) -> Option<AccessorList> {
        child_node(&self.0, AccessorList::cast)
    }
}

ast_node!(IndexerDeclaration, IndexerDeclaration);
impl IndexerDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
    pub fn accessors(&self) -> Option<AccessorList> {
        child_node(&self.0, AccessorList::cast)
    }
}

ast_node!(AccessorList, AccessorList);
impl AccessorList {
    pub fn accessors(&self) -> impl Iterator<Item = AccessorDeclaration> + '_ {
        self.0.children().filter_map(AccessorDeclaration::cast)
    }
}

ast_node!(AccessorDeclaration, AccessorDeclaration);
impl AccessorDeclaration {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(MethodDeclaration, MethodDeclaration);
impl MethodDeclaration {
    pub fn explicit_interface(&self) -> Optional<ExplicitInterfaceSpecifier> {
        Optional::new(child_node(&self.0, ExplicitInterfaceSpecifier::cast))
    }
    pub fn return_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(ExplicitInterfaceSpecifier, ExplicitInterfaceSpecifier);
impl ExplicitInterfaceSpecifier {
    pub fn name(&self) -> Option<QualifiedName> {
        child_node(&self.0, QualifiedName::cast)
    }
}

ast_node!(ConstructorDeclaration, ConstructorDeclaration);
impl ConstructorDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
    pub fn initializer(&self) -> Optional<ConstructorInitializer> {
        Optional::new(child_node(&self.0, ConstructorInitializer::cast))
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(ConstructorInitializer, ConstructorInitializer);
impl ConstructorInitializer {
    /// `this` or `base`, the keyword this initializer delegates to.
    pub fn target_keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::KwThis | SyntaxKind::KwBase))
    }
    pub fn arguments(&self) -> Option<ArgumentList> {
        child_node(&self.0, ArgumentList::cast)
    }
}

ast_node!(DestructorDeclaration, DestructorDeclaration);
impl DestructorDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(OperatorDeclaration, OperatorDeclaration);
impl OperatorDeclaration {
    pub fn return_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn operator_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                !t.kind().is_trivia()
                    && !matches!(
                        t.kind(),
                        SyntaxKind::KwPublic | SyntaxKind::KwStatic | SyntaxKind::KwOperator
                    )
                    && !matches!(t.kind(), SyntaxKind::Identifier)
            })
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(ConversionOperatorDeclaration, ConversionOperatorDeclaration);
impl ConversionOperatorDeclaration {
    pub fn is_implicit(&self) -> bool {
        child_token(&self.0, SyntaxKind::KwImplicit).is_some()
    }
    pub fn target_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn parameters(&self) -> Option<ParameterList> {
        child_node(&self.0, ParameterList::cast)
    }
    pub fn body(&self) -> Optional<Block> {
        Optional::new(child_node(&self.0, Block::cast))
    }
}

ast_node!(IncompleteMember, IncompleteMember);

// --- Types ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Predefined(PredefinedType),
    Simple(SimpleType),
    Qualified(QualifiedName),
    Pointer(PointerType),
    Array(ArrayType),
}

impl Type {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        Some(match node.kind() {
            SyntaxKind::PredefinedType => Type::Predefined(PredefinedType(node)),
            SyntaxKind::SimpleType => Type::Simple(SimpleType(node)),
            SyntaxKind::QualifiedName => Type::Qualified(QualifiedName(node)),
            SyntaxKind::PointerType => Type::Pointer(PointerType(node)),
            SyntaxKind::ArrayType => Type::Array(ArrayType(node)),
            _ => return None,
        })
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Type::Predefined(n) => n.as_cst(),
            Type::Simple(n) => n.as_cst(),
            Type::Qualified(n) => n.as_cst(),
            Type::Pointer(n) => n.as_cst(),
            Type::Array(n) => n.as_cst(),
        }
    }
}

ast_node!(PredefinedType, PredefinedType);
impl PredefinedType {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_keyword())
    }
}

ast_node!(SimpleType, SimpleType);
impl SimpleType {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(PointerType, PointerType);
impl PointerType {
    pub fn element_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
}

ast_node!(ArrayType, ArrayType);
impl ArrayType {
    pub fn element_type(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn rank_specifiers(&self) -> impl Iterator<Item = ArrayRankSpecifier> + '_ {
        self.0.children().filter_map(ArrayRankSpecifier::cast)
    }
    /// An array creation parsed this node speculatively in expression position; this
    /// is false when a rank specifier carries a size expression, which is only valid
    /// in `new T[n]`, not in a type reference.
    pub fn is_valid_type(&self) -> bool {
        self.rank_specifiers().all(|r| r.sizes().is_empty())
    }
}

ast_node!(ArrayRankSpecifier, ArrayRankSpecifier);
impl ArrayRankSpecifier {
    pub fn sizes(&self) -> SeparatedList<Expr> {
        separated_list(&self.0, Expr::cast)
    }
}

// --- Statements ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Block(Block),
    If(IfStatement),
    Switch(SwitchStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    While(WhileStatement),
    Do(DoStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Goto(GotoStatement),
    GotoCase(GotoCaseStatement),
    GotoDefault(GotoDefaultStatement),
    Return(ReturnStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    Checked(CheckedStatement),
    Unchecked(UncheckedStatement),
    Lock(LockStatement),
    Using(UsingStatement),
    Fixed(FixedStatement),
    Unsafe(UnsafeStatement),
    Labeled(LabeledStatement),
    LocalDeclaration(LocalDeclarationStatement),
    Expression(ExpressionStatement),
    Empty(EmptyStatement),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        Some(match node.kind() {
            SyntaxKind::Block => Statement::Block(Block(node)),
            SyntaxKind::IfStatement => Statement::If(IfStatement(node)),
            SyntaxKind::SwitchStatement => Statement::Switch(SwitchStatement(node)),
            SyntaxKind::ForStatement => Statement::For(ForStatement(node)),
            SyntaxKind::ForEachStatement => Statement::ForEach(ForEachStatement(node)),
            SyntaxKind::WhileStatement => Statement::While(WhileStatement(node)),
            SyntaxKind::DoStatement => Statement::Do(DoStatement(node)),
            SyntaxKind::BreakStatement => Statement::Break(BreakStatement(node)),
            SyntaxKind::ContinueStatement => Statement::Continue(ContinueStatement(node)),
            SyntaxKind::GotoStatement => Statement::Goto(GotoStatement(node)),
            SyntaxKind::GotoCaseStatement => Statement::GotoCase(GotoCaseStatement(node)),
            SyntaxKind::GotoDefaultStatement => Statement::GotoDefault(GotoDefaultStatement(node)),
            SyntaxKind::ReturnStatement => Statement::Return(ReturnStatement(node)),
            SyntaxKind::ThrowStatement => Statement::Throw(ThrowStatement(node)),
            SyntaxKind::TryStatement => Statement::Try(TryStatement(node)),
            SyntaxKind::CheckedStatement => Statement::Checked(CheckedStatement(node)),
            SyntaxKind::UncheckedStatement => Statement::Unchecked(UncheckedStatement(node)),
            SyntaxKind::LockStatement => Statement::Lock(LockStatement(node)),
            SyntaxKind::UsingStatement => Statement::Using(UsingStatement(node)),
            SyntaxKind::FixedStatement => Statement::Fixed(FixedStatement(node)),
            SyntaxKind::UnsafeStatement => Statement::Unsafe(UnsafeStatement(node)),
            SyntaxKind::LabeledStatement => Statement::Labeled(LabeledStatement(node)),
            SyntaxKind::LocalDeclarationStatement => {
                Statement::LocalDeclaration(LocalDeclarationStatement(node))
            }
            SyntaxKind::ExpressionStatement => Statement::Expression(ExpressionStatement(node)),
            SyntaxKind::EmptyStatement => Statement::Empty(EmptyStatement(node)),
            _ => return None,
        })
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::Block(n) => n.as_cst(),
            Statement::If(n) => n.as_cst(),
            Statement::Switch(n) => n.as_cst(),
            Statement::For(n) => n.as_cst(),
            Statement::ForEach(n) => n.as_cst(),
            Statement::While(n) => n.as_cst(),
            Statement::Do(n) => n.as_cst(),
            Statement::Break(n) => n.as_cst(),
            Statement::Continue(n) => n.as_cst(),
            Statement::Goto(n) => n.as_cst(),
            Statement::GotoCase(n) => n.as_cst(),
            Statement::GotoDefault(n) => n.as_cst(),
            Statement::Return(n) => n.as_cst(),
            Statement::Throw(n) => n.as_cst(),
            Statement::Try(n) => n.as_cst(),
            Statement::Checked(n) => n.as_cst(),
            Statement::Unchecked(n) => n.as_cst(),
            Statement::Lock(n) => n.as_cst(),
            Statement::Using(n) => n.as_cst(),
            Statement::Fixed(n) => n.as_cst(),
            Statement::Unsafe(n) => n.as_cst(),
            Statement::Labeled(n) => n.as_cst(),
            Statement::LocalDeclaration(n) => n.as_cst(),
            Statement::Expression(n) => n.as_cst(),
            Statement::Empty(n) => n.as_cst(),
        }
    }
}

ast_node!(Block, Block);
impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

ast_node!(IfStatement, IfStatement);
impl IfStatement {
    pub fn condition(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn then_branch(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }
    pub fn else_clause(&self) -> Optional<ElseClause> {
        Optional::new(child_node(&self.0, ElseClause::cast))
    }
}

ast_node!(ElseClause, ElseClause);
impl ElseClause {
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(SwitchStatement, SwitchStatement);
impl SwitchStatement {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn sections(&self) -> impl Iterator<Item = SwitchSection> + '_ {
        self.0.children().filter_map(SwitchSection::cast)
    }
}

ast_node!(SwitchSection, SwitchSection);
impl SwitchSection {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

ast_node!(CaseSwitchLabel, CaseSwitchLabel);
impl CaseSwitchLabel {
    pub fn value(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(DefaultSwitchLabel, DefaultSwitchLabel);

ast_node!(ForStatement, ForStatement);
impl ForStatement {
    pub fn initializer(&self) -> Optional<ForInitializer> {
        Optional::new(child_node(&self.0, ForInitializer::cast))
    }
    pub fn condition(&self) -> Optional<Expr> {
        Optional::new(child_node(&self.0, Expr::cast))
    }
    pub fn incrementors(&self) -> SeparatedList<Expr> {
        separated_list(&self.0, Expr::cast)
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

/// Either a local variable declaration or a comma-separated expression list.
ast_node!(ForInitializer, ForInitializer);
impl ForInitializer {
    pub fn declaration(&self) -> Optional<VariableDeclaration> {
        Optional::new(child_node(&self.0, VariableDeclaration::cast))
    }
    pub fn expressions(&self) -> SeparatedList<Expr> {
        separated_list(&self.0, Expr::cast)
    }
}

ast_node!(VariableDeclaration, VariableDeclaration);
impl VariableDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn declarators(&self) -> SeparatedList<VariableDeclarator> {
        separated_list(&self.0, VariableDeclarator::cast)
    }
}

ast_node!(ForEachStatement, ForEachStatement);
impl ForEachStatement {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn collection(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(WhileStatement, WhileStatement);
impl WhileStatement {
    pub fn condition(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(DoStatement, DoStatement);
impl DoStatement {
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
    pub fn condition(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(BreakStatement, BreakStatement);
ast_node!(ContinueStatement, ContinueStatement);

ast_node!(GotoStatement, GotoStatement);
impl GotoStatement {
    pub fn label(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(GotoCaseStatement, GotoCaseStatement);
impl GotoCaseStatement {
    pub fn value(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(GotoDefaultStatement, GotoDefaultStatement);

ast_node!(ReturnStatement, ReturnStatement);
impl ReturnStatement {
    pub fn value(&self) -> Optional<Expr> {
        Optional::new(child_node(&self.0, Expr::cast))
    }
}

ast_node!(ThrowStatement, ThrowStatement);
impl ThrowStatement {
    pub fn value(&self) -> Optional<Expr> {
        Optional::new(child_node(&self.0, Expr::cast))
    }
}

ast_node!(TryStatement, TryStatement);
impl TryStatement {
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
    pub fn catch_clauses(&self) -> impl Iterator<Item = CatchClause> + '_ {
        self.0.children().filter_map(CatchClause::cast)
    }
    pub fn finally_clause(&self) -> Optional<FinallyClause> {
        Optional::new(child_node(&self.0, FinallyClause::cast))
    }
}

ast_node!(CatchClause, CatchClause);
impl CatchClause {
    pub fn declaration(&self) -> Optional<CatchDeclaration> {
        Optional::new(child_node(&self.0, CatchDeclaration::cast))
    }
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
}

ast_node!(CatchDeclaration, CatchDeclaration);
impl CatchDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn name(&self) -> Optional<SyntaxToken> {
        Optional::new(child_token(&self.0, SyntaxKind::Identifier))
    }
}

ast_node!(FinallyClause, FinallyClause);
impl FinallyClause {
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
}

ast_node!(CheckedStatement, CheckedStatement);
impl CheckedStatement {
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
}

ast_node!(UncheckedStatement, UncheckedStatement);
impl UncheckedStatement {
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
}

ast_node!(LockStatement, LockStatement);
impl LockStatement {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(UsingStatement, UsingStatement);
impl UsingStatement {
    pub fn resource(&self) -> Optional<ForInitializer> {
        Optional::new(child_node(&self.0, ForInitializer::cast))
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(FixedStatement, FixedStatement);
impl FixedStatement {
    pub fn declaration(&self) -> Option<VariableDeclaration> {
        child_node(&self.0, VariableDeclaration::cast)
    }
    pub fn body(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(UnsafeStatement, UnsafeStatement);
impl UnsafeStatement {
    pub fn block(&self) -> Option<Block> {
        child_node(&self.0, Block::cast)
    }
}

ast_node!(LabeledStatement, LabeledStatement);
impl LabeledStatement {
    pub fn label(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
    pub fn statement(&self) -> Option<Statement> {
        child_node(&self.0, Statement::cast)
    }
}

ast_node!(LocalDeclarationStatement, LocalDeclarationStatement);
impl LocalDeclarationStatement {
    pub fn declaration(&self) -> Option<VariableDeclaration> {
        child_node(&self.0, VariableDeclaration::cast)
    }
}

ast_node!(ExpressionStatement, ExpressionStatement);
impl ExpressionStatement {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(EmptyStatement, EmptyStatement);

// --- Expressions ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(LiteralExpression),
    Identifier(IdentifierName),
    This(ThisExpression),
    Base(BaseExpression),
    Parenthesized(ParenthesizedExpression),
    MemberAccess(MemberAccessExpression),
    PointerMemberAccess(PointerMemberAccessExpression),
    Invocation(InvocationExpression),
    ElementAccess(ElementAccessExpression),
    PrefixUnary(PrefixUnaryExpression),
    PostfixUnary(PostfixUnaryExpression),
    Binary(BinaryExpression),
    Conditional(ConditionalExpression),
    Assignment(AssignmentExpression),
    Is(IsExpression),
    As(AsExpression),
    Cast(CastExpression),
    ObjectCreation(ObjectCreationExpression),
    ArrayCreation(ArrayCreationExpression),
    StackAlloc(StackAllocExpression),
    SizeOf(SizeOfExpression),
    TypeOf(TypeOfExpression),
    Checked(CheckedExpression),
    Unchecked(UncheckedExpression),
    PredefinedType(PredefinedType),
    Error(ErrorExpression),
    Empty(EmptyExpression),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        Some(match node.kind() {
            SyntaxKind::LiteralExpression => Expr::Literal(LiteralExpression(node)),
            SyntaxKind::IdentifierName => Expr::Identifier(IdentifierName(node)),
            SyntaxKind::ThisExpression => Expr::This(ThisExpression(node)),
            SyntaxKind::BaseExpression => Expr::Base(BaseExpression(node)),
            SyntaxKind::ParenthesizedExpression => Expr::Parenthesized(ParenthesizedExpression(node)),
            SyntaxKind::MemberAccessExpression => Expr::MemberAccess(MemberAccessExpression(node)),
            SyntaxKind::PointerMemberAccessExpression => {
                Expr::PointerMemberAccess(PointerMemberAccessExpression(node))
            }
            SyntaxKind::InvocationExpression => Expr::Invocation(InvocationExpression(node)),
            SyntaxKind::ElementAccessExpression => Expr::ElementAccess(ElementAccessExpression(node)),
            SyntaxKind::PrefixUnaryExpression => Expr::PrefixUnary(PrefixUnaryExpression(node)),
            SyntaxKind::PostfixUnaryExpression => Expr::PostfixUnary(PostfixUnaryExpression(node)),
            SyntaxKind::BinaryExpression => Expr::Binary(BinaryExpression(node)),
            SyntaxKind::ConditionalExpression => Expr::Conditional(ConditionalExpression(node)),
            SyntaxKind::AssignmentExpression => Expr::Assignment(AssignmentExpression(node)),
            SyntaxKind::IsExpression => Expr::Is(IsExpression(node)),
            SyntaxKind::AsExpression => Expr::As(AsExpression(node)),
            SyntaxKind::CastExpression => Expr::Cast(CastExpression(node)),
            SyntaxKind::ObjectCreationExpression => Expr::ObjectCreation(ObjectCreationExpression(node)),
            SyntaxKind::ArrayCreationExpression => Expr::ArrayCreation(ArrayCreationExpression(node)),
            SyntaxKind::StackAllocExpression => Expr::StackAlloc(StackAllocExpression(node)),
            SyntaxKind::SizeOfExpression => Expr::SizeOf(SizeOfExpression(node)),
            SyntaxKind::TypeOfExpression => Expr::TypeOf(TypeOfExpression(node)),
            SyntaxKind::CheckedExpression => Expr::Checked(CheckedExpression(node)),
            SyntaxKind::UncheckedExpression => Expr::Unchecked(UncheckedExpression(node)),
            SyntaxKind::PredefinedType => Expr::PredefinedType(PredefinedType(node)),
            SyntaxKind::ErrorExpression => Expr::Error(ErrorExpression(node)),
            SyntaxKind::EmptyExpression => Expr::Empty(EmptyExpression(node)),
            _ => return None,
        })
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(n) => n.as_cst(),
            Expr::Identifier(n) => n.as_cst(),
            Expr::This(n) => n.as_cst(),
            Expr::Base(n) => n.as_cst(),
            Expr::Parenthesized(n) => n.as_cst(),
            Expr::MemberAccess(n) => n.as_cst(),
            Expr::PointerMemberAccess(n) => n.as_cst(),
            Expr::Invocation(n) => n.as_cst(),
            Expr::ElementAccess(n) => n.as_cst(),
            Expr::PrefixUnary(n) => n.as_cst(),
            Expr::PostfixUnary(n) => n.as_cst(),
            Expr::Binary(n) => n.as_cst(),
            Expr::Conditional(n) => n.as_cst(),
            Expr::Assignment(n) => n.as_cst(),
            Expr::Is(n) => n.as_cst(),
            Expr::As(n) => n.as_cst(),
            Expr::Cast(n) => n.as_cst(),
            Expr::ObjectCreation(n) => n.as_cst(),
            Expr::ArrayCreation(n) => n.as_cst(),
            Expr::StackAlloc(n) => n.as_cst(),
            Expr::SizeOf(n) => n.as_cst(),
            Expr::TypeOf(n) => n.as_cst(),
            Expr::Checked(n) => n.as_cst(),
            Expr::Unchecked(n) => n.as_cst(),
            Expr::PredefinedType(n) => n.as_cst(),
            Expr::Error(n) => n.as_cst(),
            Expr::Empty(n) => n.as_cst(),
        }
    }
}

ast_node!(LiteralExpression, LiteralExpression);
impl LiteralExpression {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0.children_with_tokens().filter_map(|e| e.into_token()).next()
    }
}

ast_node!(IdentifierName, IdentifierName);
impl IdentifierName {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(ThisExpression, ThisExpression);
ast_node!(BaseExpression, BaseExpression);

ast_node!(ParenthesizedExpression, ParenthesizedExpression);
impl ParenthesizedExpression {
    pub fn inner(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(MemberAccessExpression, MemberAccessExpression);
impl MemberAccessExpression {
    pub fn target(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(PointerMemberAccessExpression, PointerMemberAccessExpression);
impl PointerMemberAccessExpression {
    pub fn target(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Identifier)
    }
}

ast_node!(InvocationExpression, InvocationExpression);
impl InvocationExpression {
    pub fn callee(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn arguments(&self) -> Option<ArgumentList> {
        child_node(&self.0, ArgumentList::cast)
    }
}

ast_node!(ArgumentList, ArgumentList);
impl ArgumentList {
    pub fn arguments(&self) -> SeparatedList<Argument> {
        separated_list(&self.0, Argument::cast)
    }
}

ast_node!(Argument, Argument);
impl Argument {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(ElementAccessExpression, ElementAccessExpression);
impl ElementAccessExpression {
    pub fn target(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn arguments(&self) -> Option<BracketedArgumentList> {
        child_node(&self.0, BracketedArgumentList::cast)
    }
}

ast_node!(BracketedArgumentList, BracketedArgumentList);
impl BracketedArgumentList {
    pub fn arguments(&self) -> SeparatedList<Argument> {
        separated_list(&self.0, Argument::cast)
    }
}

ast_node!(PrefixUnaryExpression, PrefixUnaryExpression);
impl PrefixUnaryExpression {
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0.children_with_tokens().filter_map(|e| e.into_token()).next()
    }
    pub fn operand(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(PostfixUnaryExpression, PostfixUnaryExpression);
impl PostfixUnaryExpression {
    pub fn operand(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0.children_with_tokens().filter_map(|e| e.into_token()).last()
    }
}

ast_node!(BinaryExpression, BinaryExpression);
impl BinaryExpression {
    pub fn left(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }
    pub fn right(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

ast_node!(ConditionalExpression, ConditionalExpression);
impl ConditionalExpression {
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }
    pub fn when_true(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
    pub fn when_false(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(2)
    }
}

ast_node!(AssignmentExpression, AssignmentExpression);
impl AssignmentExpression {
    pub fn target(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }
    pub fn value(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

ast_node!(IsExpression, IsExpression);
impl IsExpression {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
}

ast_node!(AsExpression, AsExpression);
impl AsExpression {
    pub fn expression(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
}

ast_node!(CastExpression, CastExpression);
impl CastExpression {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn operand(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(ObjectCreationExpression, ObjectCreationExpression);
impl ObjectCreationExpression {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
    pub fn arguments(&self) -> Optional<ArgumentList> {
        Optional::new(child_node(&self.0, ArgumentList::cast))
    }
}

ast_node!(ArrayCreationExpression, ArrayCreationExpression);
impl ArrayCreationExpression {
    pub fn ty(&self) -> Option<ArrayType> {
        child_node(&self.0, ArrayType::cast)
    }
    pub fn initializer(&self) -> Optional<ArrayInitializer> {
        Optional::new(child_node(&self.0, ArrayInitializer::cast))
    }
}

ast_node!(ArrayInitializer, ArrayInitializer);
impl ArrayInitializer {
    pub fn elements(&self) -> SeparatedList<Expr> {
        separated_list(&self.0, Expr::cast)
    }
}

ast_node!(StackAllocExpression, StackAllocExpression);
impl StackAllocExpression {
    pub fn ty(&self) -> Option<ArrayType> {
        child_node(&self.0, ArrayType::cast)
    }
}

ast_node!(SizeOfExpression, SizeOfExpression);
impl SizeOfExpression {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
}

ast_node!(TypeOfExpression, TypeOfExpression);
impl TypeOfExpression {
    pub fn ty(&self) -> Option<Type> {
        child_node(&self.0, Type::cast)
    }
}

ast_node!(CheckedExpression, CheckedExpression);
impl CheckedExpression {
    pub fn inner(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(UncheckedExpression, UncheckedExpression);
impl UncheckedExpression {
    pub fn inner(&self) -> Option<Expr> {
        child_node(&self.0, Expr::cast)
    }
}

ast_node!(ErrorExpression, ErrorExpression);
ast_node!(EmptyExpression, EmptyExpression);
