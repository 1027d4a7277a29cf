//! Erases type-only syntax from a typed-JavaScript superset source,
//! producing a plain-JavaScript string of identical length and identical
//! line/column positions. Erased regions are replaced by equivalent-width
//! whitespace (preserving newlines), so the result needs no source map:
//! every surviving byte keeps its original offset.
//!
//! The crate is the syntax-directed erasure engine only. Parsing the source
//! into a syntax tree is an external collaborator — see [`Parser`] and
//! [`Node`] — as is the lexical scanner used to locate the handful of
//! tokens (`>`, `)`, `,`) the tree doesn't expose directly.
//!
//! ```
//! use ts_blank_space::{transform_tree, Node, NodeKindSlot};
//!
//! let source = "let x: number = 1;";
//! let tree = Node::default(); // stand-in for a parsed tree
//! let _ = transform_tree(source, &tree, |_diagnostic| {});
//! let _ = NodeKindSlot::default();
//! ```

mod blank;
mod diagnostics;
mod node;
mod ranges;
mod scanner;
mod visitor;

pub use diagnostics::{Diagnostic, UnsupportedSyntax};
pub use node::{HeritageClause, HeritageKind, Modifier, ModifierKind, Node, NodeKind, NodeKindSlot};

/// The external parser collaborator (`spec.md` §6): produces a [`Node`]
/// tree from source text. No implementation ships in this crate —
/// constructing one means reimplementing a typed-JavaScript grammar, which
/// is explicitly out of scope (`spec.md` §1).
pub trait Parser {
    fn parse(source: &str) -> Node;
}

/// A small configuration seam (`spec.md` §6 notes the core mandates no
/// persisted state or CLI surface; this is the one knob that's still
/// genuinely ambient: how diagnostics reach the caller).
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// When true, [`transform_collecting`] also accumulates diagnostics
    /// into the returned `Vec` in addition to invoking the callback.
    pub collect_diagnostics: bool,
}

/// The public entry (`spec.md` §6): parse → traverse → stringify.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn transform<P: Parser>(source: &str, mut on_error: impl FnMut(Diagnostic)) -> String {
    let tree = P::parse(source);
    transform_tree(source, &tree, &mut on_error)
}

/// The traverse → stringify half of [`transform`], for callers that already
/// hold a parsed tree (and for this crate's own tests, which build `Node`
/// trees by hand in place of a real parser).
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn transform_tree(source: &str, tree: &Node, mut on_error: impl FnMut(Diagnostic)) -> String {
    let mut ctx = visitor::Context::new(source, &mut on_error);
    visitor::visit_program(&mut ctx, tree);
    let out = ctx.out.to_string_result();
    debug_assert_eq!(out.len(), source.len(), "transform must preserve length");
    out
}

/// Convenience wrapper around [`transform_tree`] that also returns the
/// diagnostics it collected, per `options`.
pub fn transform_collecting(
    source: &str,
    tree: &Node,
    options: TransformOptions,
) -> (String, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let out = transform_tree(source, tree, |d| {
        if options.collect_diagnostics {
            diagnostics.push(d);
        }
    });
    (out, diagnostics)
}
