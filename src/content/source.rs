//! Where content documents come from
//!
//! Documents are addressed by a path relative to a content root. The root is
//! either a local directory or an `http(s)://` base URL; both behave the same
//! way from the viewer's point of view: one suspending fetch per document,
//! no retries, any failure is a [`FetchError`].

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

/// Lesson manifest, relative to the content root
pub const LESSON_MANIFEST: &str = "Reading_and_Writing/lessons_manifest.json";

/// Directory holding individual lesson documents
pub const LESSON_DIR: &str = "Reading_and_Writing";

/// Math lecture manifest, relative to the content root
pub const LECTURE_MANIFEST: &str = "Math/lectures.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of a lesson document named in the manifest
pub fn lesson_path(file: &str) -> String {
    format!("{}/{}", LESSON_DIR, file)
}

/// A content root
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Files under a local directory
    Directory(PathBuf),
    /// Documents under a base URL (always ends with `/`)
    Http { client: reqwest::Client, base: String },
}

impl ContentSource {
    /// Interpret a `--content` argument
    pub fn parse(root: &str) -> Result<Self, FetchError> {
        if root.starts_with("http://") || root.starts_with("https://") {
            Self::http(root)
        } else {
            Ok(ContentSource::Directory(PathBuf::from(root)))
        }
    }

    fn http(base: &str) -> Result<Self, FetchError> {
        let host = base.split_once("://").map(|(_, rest)| rest).unwrap_or("");
        if host.trim_matches('/').is_empty() {
            return Err(FetchError::InvalidBase {
                base: base.to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(ContentSource::Http { client, base })
    }

    /// Human-readable root, for the status bar and logs
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Directory(dir) => dir.display().to_string(),
            ContentSource::Http { base, .. } => base.clone(),
        }
    }

    /// Fetch and decode one JSON document
    pub async fn fetch_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, FetchError> {
        tracing::debug!(path = relative, root = %self.describe(), "fetching content");
        let bytes = self.fetch_bytes(relative).await?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
            path: relative.to_string(),
            source,
        })
    }

    async fn fetch_bytes(&self, relative: &str) -> Result<Vec<u8>, FetchError> {
        match self {
            ContentSource::Directory(dir) => {
                let path = relative
                    .split('/')
                    .filter(|part| !part.is_empty())
                    .fold(dir.clone(), |acc, part| acc.join(part));
                tokio::fs::read(&path).await.map_err(|source| FetchError::Io {
                    path: relative.to_string(),
                    source,
                })
            }
            ContentSource::Http { client, base } => {
                let url = format!("{}{}", base, relative.trim_start_matches('/'));
                let http_err = |source| FetchError::Http {
                    path: relative.to_string(),
                    source,
                };

                let response = client.get(&url).send().await.map_err(http_err)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        path: relative.to_string(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await.map_err(http_err)?;
                Ok(body.to_vec())
            }
        }
    }
}
