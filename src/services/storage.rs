//! Blob store for profile images.
//!
//! DESIGN
//! ======
//! The route layer only sees the [`BlobStore`] trait: upload bytes, get back
//! a public URL. The local-filesystem implementation writes under a
//! configurable root and relies on the router's static file service to serve
//! the files back under the same URL prefix. Filenames are random so uploads
//! never collide or overwrite each other.

use std::path::PathBuf;

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use crate::services::session::bytes_to_hex;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored blob, addressable by public URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredBlob {
    pub public_url: String,
}

/// Opaque binary storage used for profile image uploads.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` and return its public URL. Only image content types are
    /// accepted.
    ///
    /// # Errors
    ///
    /// `UnsupportedContentType` for non-image uploads, or an I/O error if
    /// the write fails.
    async fn upload(&self, filename: &str, content_type: &str, data: Vec<u8>) -> Result<StoredBlob, StorageError>;
}

/// Local-filesystem blob store.
pub struct LocalBlobStore {
    /// Root directory for all uploads (e.g. `./data/uploads`).
    root: PathBuf,
    /// Public URL prefix the router serves `root` under (e.g. `/uploads`).
    url_prefix: String,
}

impl LocalBlobStore {
    #[must_use]
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self { root, url_prefix }
    }

    /// Build from `UPLOAD_DIR` / `UPLOAD_URL_PREFIX` with local defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./data/uploads".into());
        let url_prefix = std::env::var("UPLOAD_URL_PREFIX").unwrap_or_else(|_| "/uploads".into());
        Self::new(PathBuf::from(root), url_prefix)
    }

    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

/// Random collision-free filename: timestamp, random hex, original extension.
fn generate_filename(original: &str) -> String {
    let extension = original.rsplit('.').next().filter(|ext| *ext != original);
    let random: [u8; 8] = rand::rng().random();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());

    match extension {
        Some(ext) => format!("{timestamp}_{}.{ext}", bytes_to_hex(&random)),
        None => format!("{timestamp}_{}", bytes_to_hex(&random)),
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn upload(&self, filename: &str, content_type: &str, data: Vec<u8>) -> Result<StoredBlob, StorageError> {
        if !content_type.starts_with("image/") {
            return Err(StorageError::UnsupportedContentType(content_type.to_owned()));
        }

        let stored_name = generate_filename(filename);
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&stored_name), &data).await?;

        info!(name = %stored_name, bytes = data.len(), "stored uploaded image");
        Ok(StoredBlob { public_url: format!("{}/{stored_name}", self.url_prefix) })
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
