use super::*;

fn board(author: Uuid, is_public: bool, editors: Vec<Uuid>) -> BoardRow {
    BoardRow {
        id: Uuid::new_v4(),
        author_id: author,
        title: "Test Board".into(),
        is_public,
        editors,
        data: String::new(),
        created_at: "2026-01-01T00:00:00Z".into(),
    }
}

// =============================================================================
// can_read
// =============================================================================

#[test]
fn public_board_readable_by_anyone_including_anonymous() {
    let b = board(Uuid::new_v4(), true, vec![]);
    assert!(can_read(&b, None));
    assert!(can_read(&b, Some(Uuid::new_v4())));
}

#[test]
fn private_board_readable_by_author() {
    let author = Uuid::new_v4();
    let b = board(author, false, vec![]);
    assert!(can_read(&b, Some(author)));
}

#[test]
fn private_board_readable_by_editor() {
    let editor = Uuid::new_v4();
    let b = board(Uuid::new_v4(), false, vec![editor]);
    assert!(can_read(&b, Some(editor)));
}

#[test]
fn private_board_unreadable_by_stranger_and_anonymous() {
    let b = board(Uuid::new_v4(), false, vec![Uuid::new_v4()]);
    assert!(!can_read(&b, Some(Uuid::new_v4())));
    assert!(!can_read(&b, None));
}

// =============================================================================
// can_write
// =============================================================================

#[test]
fn author_writable_regardless_of_visibility_or_editor_list() {
    let author = Uuid::new_v4();
    for is_public in [true, false] {
        let b = board(author, is_public, vec![Uuid::new_v4()]);
        assert!(can_write(&b, Some(author)));
    }
}

#[test]
fn editor_writable() {
    let editor = Uuid::new_v4();
    let b = board(Uuid::new_v4(), false, vec![Uuid::new_v4(), editor]);
    assert!(can_write(&b, Some(editor)));
}

#[test]
fn public_board_not_writable_by_non_editor() {
    // Read-open does not mean write-open.
    let b = board(Uuid::new_v4(), true, vec![]);
    assert!(!can_write(&b, Some(Uuid::new_v4())));
}

#[test]
fn anonymous_never_writable() {
    let b = board(Uuid::new_v4(), true, vec![]);
    assert!(!can_write(&b, None));
}
