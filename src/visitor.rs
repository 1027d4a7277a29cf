//! The recursive syntax-directed walker. Dispatches on node kind, applies
//! the per-construct erasure rules from `spec.md` §4.3, and maintains the
//! two pieces of cross-cutting state: ASI bookkeeping (`missing_semi_pos`)
//! and whether any runtime JS has been emitted so far in the current block
//! scope (`seen_js`).
//!
//! Mutual recursion here goes through one explicit `Context`, never through
//! module-scope state (`spec.md` §9) — a `Context` is created fresh per
//! `transform` call and is not `Sync`/shared across calls.

use crate::blank::BlankString;
use crate::diagnostics::{Diagnostic, UnsupportedSyntax};
use crate::node::{ModifierKind, Node, NodeKind};
use crate::ranges;

/// Whether a visited node left behind any byte of runtime JavaScript.
/// `spec.md` §4.3: "Recursion aggregates: parent is EMITTED_JS if any child
/// was."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitResult {
    Blanked,
    EmittedJs,
}

impl VisitResult {
    fn is_emitted(self) -> bool {
        matches!(self, VisitResult::EmittedJs)
    }
}

pub struct Context<'a, 'cb> {
    pub source: &'a str,
    pub out: BlankString<'a>,
    pub seen_js: bool,
    pub missing_semi_pos: Option<u32>,
    pub on_error: &'cb mut dyn FnMut(Diagnostic),
}

impl<'a, 'cb> Context<'a, 'cb> {
    pub fn new(source: &'a str, on_error: &'cb mut dyn FnMut(Diagnostic)) -> Self {
        Context {
            source,
            out: BlankString::new(source),
            seen_js: false,
            missing_semi_pos: None,
            on_error,
        }
    }

    fn report(&mut self, kind: UnsupportedSyntax, node: &Node) {
        let diagnostic = Diagnostic {
            kind,
            start: node.start,
            end: node.end,
        };
        tracing::warn!(start = node.start, end = node.end, %kind, "unsupported syntax");
        (self.on_error)(diagnostic);
    }
}

/// Walks `root` and mutates `ctx.out` in place. `root` is the source file
/// node; its `children` are the top-level statements.
#[tracing::instrument(level = "trace", skip_all)]
pub fn visit_program(ctx: &mut Context, root: &Node) {
    visit_statement_list(ctx, &root.children);
}

/// Visits a list of statements under a fresh, saved/restored `seen_js`
/// scope — `spec.md` §4.3.9: "visit each statement with a saved/restored
/// seenJS scope (so inner statements' ASI decisions don't leak out)."
fn visit_statement_list(ctx: &mut Context, statements: &[Node]) {
    let saved = ctx.seen_js;
    ctx.seen_js = false;
    for stmt in statements {
        visit(ctx, stmt);
    }
    ctx.seen_js = saved;
}

/// Visits `node`, dispatching on its kind, and folds the result into
/// `ctx.seen_js` — the single place that state is ever updated, so every
/// recursive call (however deeply nested) keeps it correct.
pub fn visit(ctx: &mut Context, node: &Node) -> VisitResult {
    let result = visit_node(ctx, node);
    if result.is_emitted() {
        ctx.seen_js = true;
    }
    result
}

fn blank_statement(ctx: &mut Context, node: &Node) -> VisitResult {
    if ctx.seen_js {
        ctx.out.blank_but_start_with_semi(node.start, node.end);
    } else {
        ctx.out.blank(node.start, node.end);
    }
    VisitResult::Blanked
}

fn blank_erasable_modifiers(ctx: &mut Context, node: &Node) {
    for m in &node.modifiers {
        if m.kind.is_erasable() {
            ctx.out.blank(m.start, m.end);
        }
    }
}

fn visit_decorators(ctx: &mut Context, node: &Node) {
    for d in &node.decorators {
        visit(ctx, d);
    }
}

fn blank_type_annotation(ctx: &mut Context, node: &Node) {
    if let Some(ty) = &node.type_annotation {
        // `ty.start` is the offset of the leading `:` — see SPEC_FULL.md §6;
        // the type expression itself never needs its own start recorded
        // because it is always blanked as one unit from the colon onward.
        ctx.out.blank(ty.start, ty.end);
    }
}

fn blank_generics(ctx: &mut Context, list: &Option<Vec<Node>>, enclosing_end: u32) {
    if let Some(list) = list {
        if !list.is_empty() {
            let (open, close) = ranges::generics_span(ctx.source, list, enclosing_end);
            ctx.out.blank(open, close);
        }
    }
}

fn visit_node(ctx: &mut Context, node: &Node) -> VisitResult {
    match node.kind() {
        NodeKind::Identifier | NodeKind::PrivateIdentifier => VisitResult::EmittedJs,

        NodeKind::TypeAliasDeclaration | NodeKind::InterfaceDeclaration => {
            blank_statement(ctx, node)
        }

        NodeKind::IndexSignature => {
            ctx.out.blank(node.start, node.end);
            VisitResult::Blanked
        }

        NodeKind::VariableStatement => {
            if node.has_modifier(ModifierKind::Declare) {
                blank_statement(ctx, node)
            } else {
                for decl in &node.declarations {
                    visit(ctx, decl);
                }
                VisitResult::EmittedJs
            }
        }

        NodeKind::VariableDeclaration => {
            if let Some(name) = &node.name {
                visit(ctx, name);
            }
            if let Some((s, e)) = node.exclamation_token {
                ctx.out.blank(s, e);
            }
            blank_type_annotation(ctx, node);
            if let Some(init) = &node.initializer {
                visit(ctx, init);
            }
            VisitResult::EmittedJs
        }

        NodeKind::CallExpression | NodeKind::NewExpression => {
            if let Some(callee) = &node.expression {
                visit(ctx, callee);
            }
            blank_generics(ctx, &node.type_arguments, node.end);
            for arg in &node.arguments {
                visit(ctx, arg);
            }
            VisitResult::EmittedJs
        }

        NodeKind::TaggedTemplateExpression => {
            if let Some(tag) = &node.tag {
                visit(ctx, tag);
            }
            blank_generics(ctx, &node.type_arguments, node.end);
            if let Some(template) = &node.template {
                visit(ctx, template);
            }
            VisitResult::EmittedJs
        }

        NodeKind::ExpressionWithTypeArguments => {
            if let Some(expr) = &node.expression {
                visit(ctx, expr);
            }
            blank_generics(ctx, &node.type_arguments, node.end);
            VisitResult::EmittedJs
        }

        NodeKind::ClassDeclaration | NodeKind::ClassExpression => visit_class(ctx, node),

        NodeKind::PropertyDeclaration => visit_property(ctx, node),

        NodeKind::NonNullExpression => {
            let inner = if let Some(e) = &node.expression {
                visit(ctx, e)
            } else {
                VisitResult::EmittedJs
            };
            // exactly 1 byte before `end`: the trailing `!`
            ctx.out.blank(node.end - 1, node.end);
            inner
        }

        NodeKind::AsExpression | NodeKind::SatisfiesExpression => {
            let (inner, expr_end) = if let Some(e) = &node.expression {
                (visit(ctx, e), e.end)
            } else {
                (VisitResult::EmittedJs, node.start)
            };
            if ctx.missing_semi_pos == Some(node.end) {
                ctx.out.blank_but_start_with_semi(expr_end, node.end);
            } else {
                ctx.out.blank(expr_end, node.end);
            }
            inner
        }

        NodeKind::TypeAssertionExpression => {
            ctx.report(UnsupportedSyntax::LegacyTypeAssertion, node);
            if let Some(expr) = &node.expression {
                visit(ctx, expr);
            }
            VisitResult::EmittedJs
        }

        NodeKind::FunctionDeclaration
        | NodeKind::MethodDeclaration
        | NodeKind::Constructor
        | NodeKind::FunctionExpression
        | NodeKind::GetAccessor
        | NodeKind::SetAccessor
        | NodeKind::ArrowFunction => visit_function_like(ctx, node),

        NodeKind::EnumDeclaration => visit_ambient_container(ctx, node, "enum"),
        NodeKind::ModuleDeclaration => visit_ambient_container(ctx, node, "namespace"),

        NodeKind::ExpressionStatement => {
            let has_semi = ctx.source.as_bytes().get(node.end as usize) == Some(&b';');
            ctx.missing_semi_pos = if has_semi { None } else { Some(node.end) };
            node.expression
                .as_ref()
                .map(|e| visit(ctx, e))
                .unwrap_or(VisitResult::EmittedJs)
        }

        NodeKind::ImportDeclaration => visit_import(ctx, node),
        NodeKind::ExportDeclaration => visit_export(ctx, node),
        NodeKind::ExportAssignment => visit_export_assignment(ctx, node),
        NodeKind::ImportEqualsDeclaration => {
            ctx.report(UnsupportedSyntax::ImportEquals, node);
            VisitResult::EmittedJs
        }

        NodeKind::Block | NodeKind::Other | NodeKind::Parameter | NodeKind::ImportSpecifier
        | NodeKind::ExportSpecifier => {
            node.for_each_child(|child| {
                visit(ctx, child);
            });
            VisitResult::EmittedJs
        }
    }
}

fn visit_class(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.has_modifier(ModifierKind::Declare) {
        return blank_statement(ctx, node);
    }

    blank_erasable_modifiers(ctx, node);
    visit_decorators(ctx, node);
    blank_generics(ctx, &node.type_parameters, node.end);

    for heritage in &node.heritage_clauses {
        match heritage.kind {
            crate::node::HeritageKind::Implements => {
                ctx.out.blank(heritage.start, heritage.end);
            }
            crate::node::HeritageKind::Extends => {
                for ty in &heritage.types {
                    visit(ctx, ty);
                }
            }
        }
    }

    for member in &node.members {
        visit(ctx, member);
    }

    VisitResult::EmittedJs
}

fn visit_property(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.has_modifier(ModifierKind::Abstract) || node.has_modifier(ModifierKind::Declare) {
        // `node.start` already covers any decorators (see `Node::start`), so
        // this one blank erases them along with the rest of the member.
        ctx.out.blank(node.start, node.end);
        return VisitResult::Blanked;
    }

    blank_erasable_modifiers(ctx, node);
    visit_decorators(ctx, node);

    if let Some((s, e)) = node.exclamation_token {
        ctx.out.blank(s, e);
    }
    if let Some((s, e)) = node.question_token {
        ctx.out.blank(s, e);
    }
    blank_type_annotation(ctx, node);

    if let Some(name) = &node.name {
        visit(ctx, name);
    }
    if let Some(init) = &node.initializer {
        visit(ctx, init);
    }

    VisitResult::EmittedJs
}

fn visit_ambient_container(ctx: &mut Context, node: &Node, label: &'static str) -> VisitResult {
    if node.has_modifier(ModifierKind::Declare) {
        blank_statement(ctx, node)
    } else {
        ctx.report(UnsupportedSyntax::NonAmbientContainer(label), node);
        VisitResult::EmittedJs
    }
}

/// `spec.md` §4.3.1
fn visit_import(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.is_type_only {
        return blank_statement(ctx, node);
    }
    for el in &node.elements {
        if el.is_type_only {
            let end = crate::scanner::consume_trailing_comma(ctx.source, el.end);
            ctx.out.blank(el.start, end);
        }
    }
    VisitResult::EmittedJs
}

/// `spec.md` §4.3.2
fn visit_export(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.is_type_only {
        return blank_statement(ctx, node);
    }
    for el in &node.elements {
        if el.is_type_only {
            let end = crate::scanner::consume_trailing_comma(ctx.source, el.end);
            ctx.out.blank(el.start, end);
        }
    }
    VisitResult::EmittedJs
}

/// `spec.md` §4.3.3
fn visit_export_assignment(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.is_export_equals {
        ctx.report(UnsupportedSyntax::ExportEquals, node);
        VisitResult::EmittedJs
    } else if let Some(expr) = &node.expression {
        visit(ctx, expr)
    } else {
        VisitResult::EmittedJs
    }
}

/// `spec.md` §4.3.9
fn visit_function_like(ctx: &mut Context, node: &Node) -> VisitResult {
    if node.body.is_none() {
        return if node.has_modifier(ModifierKind::Declare) {
            blank_statement(ctx, node)
        } else {
            // Abstract method: `node.start` already covers any decorators
            // (see `Node::start`), so this one blank erases them too.
            ctx.out.blank(node.start, node.end);
            VisitResult::Blanked
        };
    }

    blank_erasable_modifiers(ctx, node);
    if let Some(name) = &node.name {
        visit(ctx, name);
    }
    blank_generics(ctx, &node.type_parameters, node.end);
    if let Some((s, e)) = node.question_token {
        ctx.out.blank(s, e);
    }

    for (i, param) in node.parameters.iter().enumerate() {
        let is_this_param = i == 0
            && param
                .name
                .as_ref()
                .and_then(|n| n.text.as_deref())
                == Some("this");

        if is_this_param {
            let end = crate::scanner::consume_trailing_comma(ctx.source, param.end);
            ctx.out.blank(param.start, end);
            continue;
        }

        for m in &param.modifiers {
            if matches!(
                m.kind,
                ModifierKind::Public
                    | ModifierKind::Private
                    | ModifierKind::Protected
                    | ModifierKind::Readonly
            ) {
                ctx.report(UnsupportedSyntax::ParameterProperty, &param_modifier_node(m));
            }
        }

        if let Some(n) = &param.name {
            visit(ctx, n);
        }
        if let Some((s, e)) = param.question_token {
            ctx.out.blank(s, e);
        }
        blank_type_annotation(ctx, param);
        if let Some(init) = &param.initializer {
            visit(ctx, init);
        }
    }

    if let Some(ret) = &node.type_annotation {
        blank_return_type(ctx, node, ret);
    }

    match &node.body {
        Some(body) if body.kind() == NodeKind::Block => {
            visit_statement_list(ctx, &body.children);
        }
        Some(expr) => {
            visit(ctx, expr);
        }
        None => unreachable!("checked above"),
    }

    VisitResult::EmittedJs
}

/// Parameter-property modifiers don't carry a whole `Node`, only a range —
/// build a throwaway node so the diagnostic channel's uniform `Diagnostic`
/// shape (kind + range) still applies to them.
fn param_modifier_node(m: &crate::node::Modifier) -> Node {
    Node {
        start: m.start,
        end: m.end,
        full_start: m.start,
        ..Default::default()
    }
}

/// `spec.md` §4.3.9's return-type erasure, with the arrow-function
/// paren-shift mitigation against ASI breaking `=>` across a blanked
/// multiline return type.
fn blank_return_type(ctx: &mut Context, node: &Node, ret: &Node) {
    if node.kind() == NodeKind::ArrowFunction {
        // `node.start` is the `(` itself; scan from just past it so a
        // zero-parameter arrow (`(): Foo => ...`) still finds its `)`
        // instead of comparing the open paren's own byte against `)`.
        let after = node.parameters.last().map(|p| p.end).unwrap_or(node.start + 1);
        let close_paren_end = ranges::find_close_paren(ctx.source, after, ret.start);
        if close_paren_end != after {
            ctx.out
                .blank_but_end_with_close_paren(close_paren_end - 1, ret.end);
            return;
        }
    }
    ctx.out.blank(ret.start, ret.end);
}
