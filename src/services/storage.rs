//! Local-disk image storage for product uploads.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

/// One image part pulled out of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: PathBuf,
    pub public_url: String,
}

/// Replace everything outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe.is_empty() {
        "image".to_string()
    } else {
        safe
    }
}

pub fn is_image(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    public_prefix: String,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create upload dir {}", self.dir.display()))
    }

    /// Stored name is `<millis>-<tag>-<sanitized original>`.
    pub fn stored_name(original: &str) -> String {
        let tag = Uuid::new_v4().simple().to_string();
        format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            &tag[..8],
            sanitize_filename(original)
        )
    }

    pub async fn save(&self, image: &UploadedImage) -> anyhow::Result<StoredImage> {
        let name = Self::stored_name(&image.file_name);
        let path = self.dir.join(&name);
        tokio::fs::write(&path, &image.bytes)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;
        Ok(StoredImage {
            path,
            public_url: format!("{}/{}", self.public_prefix, name),
        })
    }

    /// Writes every image or none: on failure the ones already written are removed.
    pub async fn save_all(&self, images: &[UploadedImage]) -> anyhow::Result<Vec<StoredImage>> {
        self.ensure_dir().await?;
        let mut stored = Vec::with_capacity(images.len());
        for image in images {
            match self.save(image).await {
                Ok(s) => stored.push(s),
                Err(err) => {
                    self.remove(&stored).await;
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }

    pub async fn remove(&self, stored: &[StoredImage]) {
        for s in stored {
            if let Err(err) = tokio::fs::remove_file(&s.path).await {
                tracing::warn!(error = %err, path = %s.path.display(), "failed to remove upload");
            }
        }
    }
}
