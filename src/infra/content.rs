//! Content source implementations: the build-time snapshot and live files on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    application::content::{ContentError, ContentSource},
    config::ContentSettings,
    domain::content::RawContent,
};

static SNAPSHOT_BODY: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/index.md"));
static SNAPSHOT_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/index.html"));
static SNAPSHOT_STYLESHEET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/index.css"));

/// The document, template and stylesheet embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

impl EmbeddedContent {
    pub fn snapshot() -> RawContent {
        RawContent::new(SNAPSHOT_BODY, SNAPSHOT_TEMPLATE, SNAPSHOT_STYLESHEET)
    }
}

#[async_trait]
impl ContentSource for EmbeddedContent {
    async fn load(&self) -> Result<RawContent, ContentError> {
        Ok(Self::snapshot())
    }
}

/// Re-reads the three artifacts from disk on every load.
#[derive(Debug, Clone)]
pub struct FilesystemContent {
    document: PathBuf,
    template: PathBuf,
    stylesheet: PathBuf,
}

impl FilesystemContent {
    pub fn new(
        document: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
        stylesheet: impl Into<PathBuf>,
    ) -> Self {
        Self {
            document: document.into(),
            template: template.into(),
            stylesheet: stylesheet.into(),
        }
    }

    pub fn from_settings(settings: &ContentSettings) -> Self {
        Self::new(
            settings.document.clone(),
            settings.template.clone(),
            settings.stylesheet.clone(),
        )
    }

    /// Resolve all three paths against `root`.
    pub fn rooted_at(root: &Path, settings: &ContentSettings) -> Self {
        Self::new(
            root.join(&settings.document),
            root.join(&settings.template),
            root.join(&settings.stylesheet),
        )
    }
}

#[async_trait]
impl ContentSource for FilesystemContent {
    async fn load(&self) -> Result<RawContent, ContentError> {
        let body = read_bytes(&self.document).await?;
        let template_source = read_text(&self.template).await?;
        let stylesheet = read_text(&self.stylesheet).await?;

        Ok(RawContent {
            body,
            template_source,
            stylesheet,
        })
    }
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>, ContentError> {
    fs::read(path).await.map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

async fn read_text(path: &Path) -> Result<String, ContentError> {
    let bytes = read_bytes(path).await?;
    String::from_utf8(bytes).map_err(|_| ContentError::Encoding {
        path: path.to_path_buf(),
    })
}
