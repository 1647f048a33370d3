use super::*;

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let api = HttpApi::new("http://localhost:3000/");
    assert_eq!(
        api.endpoint("/api/board/shared"),
        "http://localhost:3000/api/board/shared"
    );
}

#[test]
fn endpoint_builds_content_url() {
    let api = HttpApi::new("https://boards.example.com");
    let board_id = Uuid::nil();
    assert_eq!(
        api.endpoint(&format!("/api/board/{board_id}/content")),
        "https://boards.example.com/api/board/00000000-0000-0000-0000-000000000000/content"
    );
}

#[test]
fn cookie_header_absent_without_token() {
    let api = HttpApi::new("http://localhost:3000");
    assert_eq!(api.cookie_header(), None);
}

#[test]
fn cookie_header_carries_session_token() {
    let api = HttpApi::new("http://localhost:3000").with_session_token("abc123");
    assert_eq!(api.cookie_header(), Some("session_token=abc123".into()));
}

#[test]
fn save_error_messages_are_user_presentable() {
    assert_eq!(
        SaveError::Denied("403 Forbidden".into()).to_string(),
        "save rejected: 403 Forbidden"
    );
    assert_eq!(
        SaveError::Transport("connection refused".into()).to_string(),
        "transport error: connection refused"
    );
}

#[tokio::test]
async fn unreachable_server_surfaces_transport_error() {
    // Port 1 is never listening; the request must fail as Transport, not panic.
    let api = HttpApi::new("http://127.0.0.1:1");
    let result = api.save(Uuid::new_v4(), "content").await;
    assert!(matches!(result, Err(SaveError::Transport(_))));
}

#[test]
fn board_detail_deserializes_from_api_shape() {
    let json = r##"{
        "id": "7f3e6a2f-8c1d-4a6e-9b0a-1c2d3e4f5a6b",
        "author_id": "00000000-0000-0000-0000-000000000001",
        "title": "Notes",
        "is_public": true,
        "editors": ["00000000-0000-0000-0000-000000000002"],
        "data": "# hi",
        "created_at": "2026-02-03T04:05:06Z"
    }"##;
    let detail: BoardDetail = serde_json::from_str(json).expect("deserialize");
    assert_eq!(detail.title, "Notes");
    assert!(detail.is_public);
    assert_eq!(detail.editors.len(), 1);
    assert_eq!(detail.data, "# hi");
}
