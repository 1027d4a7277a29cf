//! Property sweep over two small generated grammar subsets (`spec.md` §8):
//!
//! - `let <name>[!][: <Type>] = <digits>;`, varying whether the definite
//!   assignment assertion and the type annotation are present.
//! - `<callee>[<TypeArg>](<digits>);`, varying whether the call carries an
//!   explicit type argument list, exercising the scanner-backed
//!   `generics_span` lookup independently of the variable-declaration cases.
//!
//! For every generated case, `transform_tree` must preserve length, must
//! never touch the identifiers or numeric literals, and must blank only the
//! type-only sites to whitespace (or, for the call case, leave the source
//! untouched entirely when there's no type argument list to erase).
//!
//! Source and tree are built together from the same running offset, rather
//! than independently, so there is no risk of the two drifting apart the way
//! hand-written fixture offsets could.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use ts_blank_space::{transform_tree, Node, NodeKind, NodeKindSlot};

#[derive(Clone, Debug)]
struct VarCase {
    has_bang: bool,
    has_type: bool,
    name: char,
    type_name: char,
    value: u8,
}

impl Arbitrary for VarCase {
    fn arbitrary(g: &mut Gen) -> Self {
        const NAMES: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
        const TYPE_NAMES: [char; 3] = ['T', 'U', 'V'];
        VarCase {
            has_bang: bool::arbitrary(g),
            has_type: bool::arbitrary(g),
            name: NAMES[(u8::arbitrary(g) as usize) % NAMES.len()],
            type_name: TYPE_NAMES[(u8::arbitrary(g) as usize) % TYPE_NAMES.len()],
            value: u8::arbitrary(g) % 100,
        }
    }
}

fn leaf(k: NodeKind, start: u32, end: u32) -> Node {
    Node {
        kind: NodeKindSlot(k),
        full_start: start,
        start,
        end,
        ..Default::default()
    }
}

/// Builds the source text and a matching `Node` tree for one `VarCase`,
/// returning the source alongside the byte ranges that must end up blanked.
fn build(case: &VarCase) -> (String, Node, Option<(u32, u32)>, Option<(u32, u32)>) {
    let mut source = String::from("let ");
    let mut pos = source.len() as u32;

    let name_start = pos;
    source.push(case.name);
    pos += 1;
    let name_end = pos;

    let bang_range = if case.has_bang {
        let s = pos;
        source.push('!');
        pos += 1;
        Some((s, pos))
    } else {
        None
    };

    let type_range = if case.has_type {
        let s = pos;
        source.push(':');
        source.push(' ');
        source.push(case.type_name);
        pos += 3;
        Some((s, pos))
    } else {
        None
    };

    source.push_str(" = ");
    pos += 3;
    let value_start = pos;
    let value_str = case.value.to_string();
    source.push_str(&value_str);
    pos += value_str.len() as u32;
    let value_end = pos;
    source.push(';');
    pos += 1;
    let stmt_end = pos;

    let name_node = Node {
        text: Some(case.name.to_string()),
        ..leaf(NodeKind::Identifier, name_start, name_end)
    };
    let value_node = leaf(NodeKind::Other, value_start, value_end);
    let type_node = type_range.map(|(s, e)| Box::new(leaf(NodeKind::Other, s, e)));

    let declaration = Node {
        name: Some(Box::new(name_node)),
        exclamation_token: bang_range,
        type_annotation: type_node,
        initializer: Some(Box::new(value_node)),
        ..leaf(NodeKind::VariableDeclaration, name_start, value_end)
    };
    let statement = Node {
        declarations: vec![declaration],
        ..leaf(NodeKind::VariableStatement, 0, stmt_end)
    };
    let tree = Node {
        children: vec![statement],
        ..Default::default()
    };

    (source, tree, bang_range, type_range)
}

#[quickcheck]
fn preserves_length_and_blanks_only_type_sites(case: VarCase) -> bool {
    let (source, tree, bang_range, type_range) = build(&case);
    let out = transform_tree(&source, &tree, |_| {});

    if out.len() != source.len() {
        return false;
    }
    if !out.ends_with(';') {
        return false;
    }
    if let Some((s, e)) = bang_range {
        if &out[s as usize..e as usize] != " " {
            return false;
        }
    }
    if let Some((s, e)) = type_range {
        if !out[s as usize..e as usize].bytes().all(|b| b == b' ') {
            return false;
        }
    }
    // the name and the digits are never erasable; they must survive untouched.
    out.starts_with(&format!("let {}", case.name)) && out.contains(&case.value.to_string())
}

#[quickcheck]
fn no_diagnostics_for_plain_variable_declarations(case: VarCase) -> bool {
    let (source, tree, _, _) = build(&case);
    let mut diagnostics = Vec::new();
    let _ = transform_tree(&source, &tree, |d| diagnostics.push(d));
    diagnostics.is_empty()
}

#[derive(Clone, Debug)]
struct CallCase {
    has_generics: bool,
    callee: char,
    type_arg: char,
    arg: u8,
}

impl Arbitrary for CallCase {
    fn arbitrary(g: &mut Gen) -> Self {
        const CALLEES: [char; 4] = ['f', 'g', 'h', 'k'];
        const TYPE_ARGS: [char; 3] = ['T', 'U', 'V'];
        CallCase {
            has_generics: bool::arbitrary(g),
            callee: CALLEES[(u8::arbitrary(g) as usize) % CALLEES.len()],
            type_arg: TYPE_ARGS[(u8::arbitrary(g) as usize) % TYPE_ARGS.len()],
            arg: u8::arbitrary(g) % 100,
        }
    }
}

/// Builds the source text and a matching `Node` tree for one `CallCase`,
/// returning the source alongside the byte range of the type argument list
/// (the closing `>` of which is never in the tree — only the scanner finds
/// it, per `spec.md` §4.3.5), if one is present.
fn build_call(case: &CallCase) -> (String, Node, Option<(u32, u32)>) {
    let mut source = String::new();
    let mut pos = 0u32;

    let callee_start = pos;
    source.push(case.callee);
    pos += 1;
    let callee_end = pos;

    let type_arg = if case.has_generics {
        source.push('<');
        pos += 1;
        let s = pos;
        source.push(case.type_arg);
        pos += 1;
        let e = pos;
        source.push('>');
        pos += 1;
        Some((s, e))
    } else {
        None
    };

    source.push('(');
    pos += 1;
    let arg_start = pos;
    let arg_str = case.arg.to_string();
    source.push_str(&arg_str);
    pos += arg_str.len() as u32;
    let arg_end = pos;
    source.push(')');
    pos += 1;
    let call_end = pos;
    source.push(';');
    pos += 1;

    let callee_node = Node {
        text: Some(case.callee.to_string()),
        ..leaf(NodeKind::Identifier, callee_start, callee_end)
    };
    let arg_node = leaf(NodeKind::Other, arg_start, arg_end);
    // the open `<` sits immediately after the callee; the close `>` sits
    // immediately after the type argument's own end — `generics_span`
    // derives both from exactly these two facts (see `src/ranges.rs`).
    let generics_range = type_arg.map(|(_, e)| (callee_end, e + 1));
    let type_arguments = type_arg.map(|(s, e)| vec![leaf(NodeKind::Other, s, e)]);

    let call = Node {
        expression: Some(Box::new(callee_node)),
        type_arguments,
        arguments: vec![arg_node],
        ..leaf(NodeKind::CallExpression, callee_start, call_end)
    };
    let statement = Node {
        expression: Some(Box::new(call)),
        ..leaf(NodeKind::ExpressionStatement, callee_start, call_end)
    };
    let tree = Node {
        children: vec![statement],
        ..Default::default()
    };

    (source, tree, generics_range)
}

#[quickcheck]
fn call_expression_generics_preserve_length_and_blank_cleanly(case: CallCase) -> bool {
    let (source, tree, generics_range) = build_call(&case);
    let out = transform_tree(&source, &tree, |_| {});

    if out.len() != source.len() {
        return false;
    }
    match generics_range {
        Some((s, e)) => out[s as usize..e as usize].bytes().all(|b| b == b' '),
        None => out == source,
    }
}
