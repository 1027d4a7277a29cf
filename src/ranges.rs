//! Range utilities: computing erase spans from node positions, including
//! trailing-comma consumption (delegated to `crate::scanner`) and newline
//! detection between two offsets.

use crate::node::Node;
use crate::scanner::{self, Punct};

/// True if `source[start..end]` contains at least one `\n`.
pub fn has_newline(source: &str, start: u32, end: u32) -> bool {
    source.as_bytes()[start as usize..end as usize].contains(&b'\n')
}

/// The half-open range of a type-argument or type-parameter list, including
/// its delimiting `<`/`>`, per `spec.md` §4.3.5.
///
/// `list` is the ordered elements (already known to be non-empty — callers
/// only reach here when `type_arguments`/`type_parameters` is `Some`).
/// The opening `<` sits one byte before the first element; the closing `>`
/// is not in the tree and is located with the scanner, bounded by
/// `enclosing_end` (the caller's best bound on how far the scan may run —
/// typically the declaring node's `end`, or the position just before an
/// argument list's `(` for call/new expressions, see `crate::visitor`).
pub fn generics_span(source: &str, list: &[Node], enclosing_end: u32) -> (u32, u32) {
    let first = list.first().expect("generics_span requires a non-empty list");
    let last = list.last().expect("generics_span requires a non-empty list");
    let open = first.start - 1;
    let close = scanner::scan_for_token(source, last.end, enclosing_end, Punct::GreaterThan);
    (open, close)
}

/// Locates the `)` closing a parameter list, scanning from `after` (the end
/// of the last parameter, or the position right after `(` if there are no
/// parameters) up to `bound`.
pub fn find_close_paren(source: &str, after: u32, bound: u32) -> u32 {
    scanner::scan_for_token(source, after, bound, Punct::CloseParen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_newline_in_range() {
        let src = "a(\n)";
        assert!(has_newline(src, 0, src.len() as u32));
        assert!(!has_newline(src, 0, 1));
    }
}
