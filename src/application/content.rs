//! Content source capability: where the document, template and stylesheet come from.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::RawContent;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read {}: file is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

impl ContentError {
    /// Path of the artifact that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::Read { path, .. } | ContentError::Encoding { path } => path.as_path(),
        }
    }
}

/// Supplies the raw page artifacts.
///
/// Implementations are chosen once at startup and never mixed within a run.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<RawContent, ContentError>;
}
