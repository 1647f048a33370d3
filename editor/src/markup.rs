//! Formatting splices behind the editor toolbar.
//!
//! Pure functions over the document text and the current selection: wrap the
//! selection in inline markers (bold, italic, code, links) or start a block
//! (headings, lists, quotes) at the beginning of the current line. Each
//! returns the new document plus the cursor position the editor should move
//! to. Offsets are byte positions; out-of-range or mid-character offsets are
//! snapped to the nearest valid boundary before splicing.

use std::ops::Range;

/// Placeholder inserted when wrapping an empty selection, so the caller has
/// something selected to type over.
const EMPTY_SELECTION_PLACEHOLDER: &str = "text";

/// Result of a toolbar splice: the new document and the new cursor offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    pub cursor: usize,
}

fn snap_to_boundary(doc: &str, offset: usize) -> usize {
    let mut offset = offset.min(doc.len());
    while offset > 0 && !doc.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn normalize_selection(doc: &str, selection: Range<usize>) -> (usize, usize) {
    let start = snap_to_boundary(doc, selection.start);
    let end = snap_to_boundary(doc, selection.end).max(start);
    (start, end)
}

/// Wrap the selection with `before`/`after` (e.g. `**`/`**` for bold,
/// `[`/`](url)` for a link). An empty selection wraps a placeholder word.
/// The cursor lands just after `before`, at the start of the wrapped text.
#[must_use]
pub fn wrap_inline(doc: &str, selection: Range<usize>, before: &str, after: &str) -> Splice {
    let (start, end) = normalize_selection(doc, selection);
    let selected = if start == end { EMPTY_SELECTION_PLACEHOLDER } else { &doc[start..end] };

    let mut text = String::with_capacity(doc.len() + before.len() + selected.len() + after.len());
    text.push_str(&doc[..start]);
    text.push_str(before);
    text.push_str(selected);
    text.push_str(after);
    text.push_str(&doc[end..]);

    Splice { text, cursor: start + before.len() }
}

/// Start a block with `prefix` (e.g. `"# "`, `"- "`, `"> "`): the text from
/// the start of the current line through the selection end is replaced by
/// the prefix, on its own line unless already at the start of the document.
/// The cursor lands after the inserted text.
#[must_use]
pub fn insert_block(doc: &str, selection: Range<usize>, prefix: &str) -> Splice {
    let (start, end) = normalize_selection(doc, selection);
    let line_start = doc[..start].rfind('\n').map_or(0, |i| i + 1);

    let insert_text = if line_start == 0 {
        prefix.to_owned()
    } else {
        format!("\n{prefix}")
    };

    let mut text = String::with_capacity(doc.len() + insert_text.len());
    text.push_str(&doc[..line_start]);
    text.push_str(&insert_text);
    text.push_str(&doc[end..]);

    Splice { text, cursor: line_start + insert_text.len() }
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
