use super::*;

// =============================================================================
// wrap_inline
// =============================================================================

#[test]
fn wrap_inline_wraps_the_selection() {
    let splice = wrap_inline("make this bold", 5..9, "**", "**");
    assert_eq!(splice.text, "make **this** bold");
    assert_eq!(splice.cursor, 7); // just after the opening marker
}

#[test]
fn wrap_inline_empty_selection_inserts_placeholder() {
    let splice = wrap_inline("hello ", 6..6, "*", "*");
    assert_eq!(splice.text, "hello *text*");
    assert_eq!(splice.cursor, 7);
}

#[test]
fn wrap_inline_link_markers_are_asymmetric() {
    let splice = wrap_inline("see docs", 4..8, "[", "](url)");
    assert_eq!(splice.text, "see [docs](url)");
    assert_eq!(splice.cursor, 5);
}

#[test]
fn wrap_inline_at_document_start() {
    let splice = wrap_inline("word", 0..4, "`", "`");
    assert_eq!(splice.text, "`word`");
    assert_eq!(splice.cursor, 1);
}

#[test]
fn wrap_inline_clamps_out_of_range_selection() {
    let splice = wrap_inline("short", 2..99, "**", "**");
    assert_eq!(splice.text, "sh**ort**");
}

#[test]
fn wrap_inline_snaps_mid_character_offsets() {
    // "é" is two bytes; offset 1 falls inside it and must snap back to 0.
    let splice = wrap_inline("ému", 1..3, "*", "*");
    assert_eq!(splice.text, "*ém*u");
    assert_eq!(splice.cursor, 1);
}

// =============================================================================
// insert_block
// =============================================================================

#[test]
fn insert_block_at_document_start_has_no_leading_newline() {
    let splice = insert_block("title", 0..0, "# ");
    assert_eq!(splice.text, "# title");
    assert_eq!(splice.cursor, 2);
}

#[test]
fn insert_block_mid_document_starts_a_new_line() {
    let doc = "line one\nline two";
    // Cursor sitting at the start of "line two".
    let splice = insert_block(doc, 9..9, "- ");
    assert_eq!(splice.text, "line one\n\n- line two");
    assert_eq!(splice.cursor, 12);
}

#[test]
fn insert_block_replaces_line_up_to_selection_end() {
    let doc = "intro\ndelete me and keep this";
    // Selection covers "delete me and " on the second line.
    let splice = insert_block(doc, 6..20, "> ");
    assert_eq!(splice.text, "intro\n\n> keep this");
}

#[test]
fn insert_block_on_first_line_replaces_prefix_of_it() {
    let splice = insert_block("heading text", 0..8, "## ");
    assert_eq!(splice.text, "## text");
    assert_eq!(splice.cursor, 3);
}

#[test]
fn splice_feeds_back_into_further_splices() {
    // Toolbar actions compose: wrap after a block insert.
    let first = insert_block("notes", 0..0, "# ");
    let second = wrap_inline(&first.text, 2..7, "**", "**");
    assert_eq!(second.text, "# **notes**");
}
