//! The syntax tree interface the visitor engine consumes.
//!
//! Everything in this module models the external parser collaborator
//! described by the node interface: a `kind` tag, `start`/`end`/`full_start`
//! byte offsets, ordered children, and kind-specific accessors. No parser
//! lives here — only the shape its output takes.

/// The node kinds the visitor dispatches on. Anything not listed here
/// recurses generically through `Node::children` (blocks, binary and unary
/// expressions, template literals, JSX, literals, decorators used as plain
/// expressions, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Identifier,
    PrivateIdentifier,

    TypeAliasDeclaration,
    InterfaceDeclaration,
    IndexSignature,

    VariableStatement,
    VariableDeclaration,

    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ExpressionWithTypeArguments,

    ClassDeclaration,
    ClassExpression,
    PropertyDeclaration,

    NonNullExpression,
    AsExpression,
    SatisfiesExpression,
    TypeAssertionExpression,

    FunctionDeclaration,
    MethodDeclaration,
    Constructor,
    FunctionExpression,
    GetAccessor,
    SetAccessor,
    ArrowFunction,

    EnumDeclaration,
    ModuleDeclaration,

    ExpressionStatement,
    Block,

    ImportDeclaration,
    ImportSpecifier,
    ExportDeclaration,
    ExportSpecifier,
    ExportAssignment,
    ImportEqualsDeclaration,

    Parameter,

    /// Anything not given a dedicated rule: fall through to child recursion.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Private,
    Protected,
    Public,
    Abstract,
    Override,
    Declare,
    Readonly,
    Const,
    Default,
    Export,
    In,
    Out,
    Static,
    Accessor,
    Async,
}

impl ModifierKind {
    /// Modifiers that are themselves type-only and must be blanked wherever
    /// they appear (`spec.md` §4.3.6, §4.3.7, §4.3.9).
    pub fn is_erasable(self) -> bool {
        matches!(
            self,
            ModifierKind::Private
                | ModifierKind::Protected
                | ModifierKind::Public
                | ModifierKind::Abstract
                | ModifierKind::Override
                | ModifierKind::Declare
                | ModifierKind::Readonly
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeritageKind {
    Extends,
    Implements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeritageClause {
    pub kind: HeritageKind,
    pub start: u32,
    pub end: u32,
    pub types: Vec<Node>,
}

/// A node in the syntax tree handed to the visitor engine.
///
/// Fields not relevant to a given `kind` are left at their default (`None`,
/// empty `Vec`, `false`) — this mirrors how the real external parser's node
/// objects expose kind-specific properties as optional members of one shape
/// rather than through per-kind traits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKindSlot,
    pub full_start: u32,
    /// First byte of the node's own syntax, trivia excluded. For a member
    /// with `decorators`, this is assumed to be the first decorator's own
    /// `start` (i.e. `start` covers the whole declaration including its
    /// decorators) — `visit_property`/`visit_function_like` rely on this
    /// when blanking an abstract/declare member as one `[start, end)` span,
    /// since that path never calls `visit_decorators` separately.
    pub start: u32,
    pub end: u32,

    /// Source text of an `Identifier`/`PrivateIdentifier` leaf; used to
    /// detect the `this` parameter by name.
    pub text: Option<String>,

    pub modifiers: Vec<Modifier>,
    pub decorators: Vec<Node>,

    pub name: Option<Box<Node>>,
    pub type_parameters: Option<Vec<Node>>,
    pub type_arguments: Option<Vec<Node>>,
    pub type_annotation: Option<Box<Node>>,
    pub question_token: Option<(u32, u32)>,
    pub exclamation_token: Option<(u32, u32)>,
    pub initializer: Option<Box<Node>>,

    pub heritage_clauses: Vec<HeritageClause>,
    pub members: Vec<Node>,

    pub parameters: Vec<Node>,
    pub body: Option<Box<Node>>,

    pub expression: Option<Box<Node>>,
    pub tag: Option<Box<Node>>,
    pub template: Option<Box<Node>>,
    pub arguments: Vec<Node>,

    /// Named import/export bindings (`ImportSpecifier`/`ExportSpecifier`).
    pub elements: Vec<Node>,
    pub is_type_only: bool,
    pub is_export_equals: bool,

    /// Declarations in a `VariableStatement`.
    pub declarations: Vec<Node>,

    /// Generic fallback children, in source order, for kinds with no
    /// dedicated rule.
    pub children: Vec<Node>,
}

/// `NodeKind` wrapped so `Node` can `#[derive(Default)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKindSlot(pub NodeKind);

impl Default for NodeKindSlot {
    fn default() -> Self {
        NodeKindSlot(NodeKind::Other)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind.0
    }

    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifiers.iter().any(|m| m.kind == kind)
    }

    /// Visits direct children in source order: modifiers are not nodes so
    /// they're excluded; everything else that can recurse is covered by the
    /// per-kind rules in `crate::visitor`, which call into these fields
    /// directly rather than going through a single opaque iterator. This
    /// helper exists for the generic `Other` fallback only.
    pub fn for_each_child<'a>(&'a self, mut visit: impl FnMut(&'a Node)) {
        for d in &self.decorators {
            visit(d);
        }
        if let Some(n) = &self.name {
            visit(n);
        }
        if let Some(t) = &self.type_annotation {
            visit(t);
        }
        if let Some(i) = &self.initializer {
            visit(i);
        }
        for h in &self.heritage_clauses {
            for t in &h.types {
                visit(t);
            }
        }
        for m in &self.members {
            visit(m);
        }
        for p in &self.parameters {
            visit(p);
        }
        if let Some(b) = &self.body {
            visit(b);
        }
        if let Some(e) = &self.expression {
            visit(e);
        }
        if let Some(t) = &self.tag {
            visit(t);
        }
        if let Some(t) = &self.template {
            visit(t);
        }
        for a in &self.arguments {
            visit(a);
        }
        for e in &self.elements {
            visit(e);
        }
        for d in &self.declarations {
            visit(d);
        }
        for c in &self.children {
            visit(c);
        }
    }
}
