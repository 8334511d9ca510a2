//! Model bundle persistence
//!
//! The trained artifact is a single binary file holding the fitted
//! vectorizer and the classifier weights, serialized with bincode.
//! Loading performs no provenance checks beyond decoding and a shape
//! consistency check; there is no retry.

use crate::classifier::LogisticRegression;
use crate::vectorizer::DictVectorizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// On-disk format version understood by this build
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write model file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode model bundle: {0}")]
    Decode(String),
    #[error("failed to encode model bundle: {0}")]
    Encode(String),
    #[error("unsupported bundle format version {0}, expected {FORMAT_VERSION}")]
    UnsupportedVersion(u32),
    #[error(
        "bundle shape mismatch: vectorizer produces {vectorizer_width} features, \
         classifier expects {classifier_width}"
    )]
    ShapeMismatch {
        vectorizer_width: usize,
        classifier_width: usize,
    },
}

/// Trained model bundle: fitted vectorizer plus classifier weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub format_version: u32,
    pub model_version: String,
    pub vectorizer: DictVectorizer,
    pub classifier: LogisticRegression,
}

impl ModelBundle {
    pub fn new(
        model_version: impl Into<String>,
        vectorizer: DictVectorizer,
        classifier: LogisticRegression,
    ) -> Result<Self, ArtifactError> {
        let bundle = Self {
            format_version: FORMAT_VERSION,
            model_version: model_version.into(),
            vectorizer,
            classifier,
        };
        bundle.check_shape()?;
        Ok(bundle)
    }

    /// Deserialize a bundle from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle: ModelBundle =
            bincode::deserialize(&bytes).map_err(|err| ArtifactError::Decode(err.to_string()))?;
        if bundle.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(bundle.format_version));
        }
        bundle.check_shape()?;
        info!(
            model_version = %bundle.model_version,
            features = bundle.vectorizer.width(),
            size_bytes = bytes.len(),
            "Loaded model bundle"
        );
        Ok(bundle)
    }

    /// Serialize the bundle to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ArtifactError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let bytes =
            bincode::serialize(self).map_err(|err| ArtifactError::Encode(err.to_string()))?;
        fs::write(path, bytes).map_err(|source| ArtifactError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn check_shape(&self) -> Result<(), ArtifactError> {
        let vectorizer_width = self.vectorizer.width();
        let classifier_width = self.classifier.n_features();
        if vectorizer_width != classifier_width {
            return Err(ArtifactError::ShapeMismatch {
                vectorizer_width,
                classifier_width,
            });
        }
        Ok(())
    }
}
