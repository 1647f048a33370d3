use super::*;

fn temp_store() -> LocalBlobStore {
    let root = std::env::temp_dir().join(format!("markboard-storage-test-{}", uuid::Uuid::new_v4()));
    LocalBlobStore::new(root, "/uploads".into())
}

#[test]
fn generate_filename_keeps_extension() {
    let name = generate_filename("avatar.png");
    assert!(name.ends_with(".png"), "got {name}");
}

#[test]
fn generate_filename_without_extension_has_none() {
    let name = generate_filename("avatar");
    assert!(!name.contains('.'), "got {name}");
}

#[test]
fn generate_filename_is_unique_across_calls() {
    assert_ne!(generate_filename("a.png"), generate_filename("a.png"));
}

#[tokio::test]
async fn upload_writes_file_and_returns_prefixed_url() {
    let store = temp_store();
    let blob = store
        .upload("avatar.png", "image/png", vec![1, 2, 3])
        .await
        .expect("upload should succeed");

    assert!(blob.public_url.starts_with("/uploads/"));
    let stored_name = blob.public_url.trim_start_matches("/uploads/");
    let on_disk = tokio::fs::read(store.root().join(stored_name))
        .await
        .expect("stored file should exist");
    assert_eq!(on_disk, vec![1, 2, 3]);
}

#[tokio::test]
async fn upload_rejects_non_image_content_types() {
    let store = temp_store();
    let result = store.upload("notes.txt", "text/plain", vec![0]).await;
    assert!(matches!(result, Err(StorageError::UnsupportedContentType(_))));
}
