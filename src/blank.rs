//! `BlankString`: a mutable text buffer that overwrites byte ranges with
//! whitespace while preserving newline positions and total length.
//!
//! This is the abstraction that makes the whole erasure scheme source-map
//! free: every surviving byte keeps its original offset, so a blanked range
//! is indistinguishable, length- and line-wise, from the code it replaced.

/// Owns the original source and a parallel, mutable output buffer.
///
/// Invariants (checked by debug assertions, not re-validated on every call
/// for performance — `spec.md` §4.1 marks these operations `O(end-start)`):
/// - `output.len() == input.len()` always.
/// - For every newline byte in `input`, the same position in `output` is a
///   newline.
/// - A blanked byte is `b' '`, except the forms below.
#[derive(Debug, Clone)]
pub struct BlankString<'a> {
    input: &'a str,
    output: Vec<u8>,
}

impl<'a> BlankString<'a> {
    pub fn new(input: &'a str) -> Self {
        BlankString {
            input,
            output: input.as_bytes().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn fill_preserving_newlines(&mut self, start: u32, end: u32, fill: u8) {
        let start = start as usize;
        let end = end as usize;
        debug_assert!(start <= end, "blank range must not be inverted");
        debug_assert!(end <= self.output.len(), "blank range must be in bounds");
        for i in start..end {
            self.output[i] = if self.input.as_bytes()[i] == b'\n' {
                b'\n'
            } else {
                fill
            };
        }
    }

    /// Overwrite `[start, end)` with spaces, preserving newlines.
    pub fn blank(&mut self, start: u32, end: u32) {
        self.fill_preserving_newlines(start, end, b' ');
    }

    /// As `blank`, but the first byte of the range becomes `;`.
    ///
    /// Requires `start < end` and that `input[start]` is not a newline —
    /// callers (the statement-blanking discipline in `crate::visitor`) only
    /// reach this once they know the statement begins on a real character.
    pub fn blank_but_start_with_semi(&mut self, start: u32, end: u32) {
        debug_assert!(start < end, "semicolon-first blank needs a non-empty range");
        self.blank(start, end);
        debug_assert_ne!(
            self.input.as_bytes()[start as usize],
            b'\n',
            "cannot overwrite a newline with a semicolon"
        );
        self.output[start as usize] = b';';
    }

    /// As `blank`, but the last byte of the range becomes `)`.
    pub fn blank_but_end_with_close_paren(&mut self, start: u32, end: u32) {
        debug_assert!(start < end, "close-paren blank needs a non-empty range");
        self.blank(start, end);
        self.output[(end - 1) as usize] = b')';
    }

    pub fn to_string_result(&self) -> String {
        // The buffer only ever replaces ASCII bytes (space/`;`/`)`) inside
        // ranges taken from a valid UTF-8 source, so re-assembling as UTF-8
        // cannot fail on well-formed input.
        String::from_utf8(self.output.clone()).expect("blanked buffer is valid UTF-8")
    }
}
