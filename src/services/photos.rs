use std::path::PathBuf;

use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppResult;

pub const SCALP_PHOTOS_DIR: &str = "scalp_photos";
pub const PROFILE_PHOTOS_DIR: &str = "profile_photos";

#[derive(Debug)]
pub struct PhotoUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Disk-backed photo storage. Stored names are prefixed with a UUID so
/// repeated uploads of the same client file name never overwrite each other.
#[derive(Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn ensure_directories(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.root.join(SCALP_PHOTOS_DIR)).await?;
        tokio::fs::create_dir_all(self.root.join(PROFILE_PHOTOS_DIR)).await?;
        Ok(())
    }

    pub async fn store_scalp_photo(&self, upload: &PhotoUpload) -> AppResult<String> {
        self.save(SCALP_PHOTOS_DIR, upload).await
    }

    pub async fn store_profile_photo(&self, upload: &PhotoUpload) -> AppResult<String> {
        self.save(PROFILE_PHOTOS_DIR, upload).await
    }

    #[instrument(name = "photos.save", skip(self, upload), fields(file_name = %upload.file_name))]
    async fn save(&self, subdir: &str, upload: &PhotoUpload) -> AppResult<String> {
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(&upload.file_name));
        let path = self.root.join(subdir).join(&stored_name);

        tokio::fs::write(&path, &upload.data).await?;

        tracing::info!(path = %path.display(), bytes = upload.data.len(), "Photo stored");

        Ok(format!("/{subdir}/{stored_name}"))
    }
}

/// Keeps alphanumerics, dots, dashes and underscores; everything else
/// (path separators included) becomes a dash.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("scalp_01.jpg"), "scalp_01.jpg");
    }

    #[test]
    fn test_sanitize_replaces_path_separators() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "..-..-etc-passwd");
        assert_eq!(sanitize_file_name("a\\b c.png"), "a-b-c.png");
    }

    #[test]
    fn test_sanitize_empty_name_falls_back() {
        assert_eq!(sanitize_file_name(""), "photo");
    }
}
