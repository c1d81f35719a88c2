//! Token-level word embeddings from a pretrained subword model.
//!
//! [`FastTextEmbeddings`] loads a model once at construction (from a local
//! path or a cached download) and then annotates tokens in place: each token
//! gets a fixed-length vector stored under the adapter's name. Lookups that
//! fail for any reason yield a zero vector rather than an error, so a batch
//! of sentences always comes back fully annotated.

pub mod model;

use ndarray::Array1;

use crate::config::EmbeddingConfig;
use crate::data::{EmbedTarget, Sentence};
use crate::error::{Result, WordcastError};
use model::ModelBackend;

/// Adapter that attaches pretrained word vectors to tokens.
///
/// Immutable after construction: the model, the dimensionality, and the name
/// key never change. Multiple adapters can coexist, each writing under its
/// own name.
#[derive(Debug)]
pub struct FastTextEmbeddings {
    /// Resolved model location; also the key vectors are stored under.
    name: String,
    /// Tag whose value replaces the raw token text as the lookup key.
    field: Option<String>,
    dims: usize,
    model: ModelBackend,
}

impl FastTextEmbeddings {
    /// Load an embedding model as described by `config`.
    ///
    /// A missing or nonexistent local path fails with
    /// [`WordcastError::Configuration`]; when `use_local` is false the
    /// location is resolved through the download cache first. Backend parse
    /// failures propagate as [`WordcastError::Load`].
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let location = config
            .path
            .as_deref()
            .ok_or_else(|| WordcastError::Configuration("(unset)".to_string()))?;

        let resolved = if config.use_local {
            let path = crate::config::expand_tilde(location);
            if !path.exists() {
                return Err(WordcastError::Configuration(location.to_string()));
            }
            path
        } else {
            crate::fetch::cached_path(location, &crate::config::expand_tilde(&config.cache_dir))?
        };

        let model = ModelBackend::load(&resolved, config.legacy_loader)?;
        let dims = model.dims();
        tracing::info!(model = %resolved.display(), dims, "embedding model loaded");

        Ok(Self::from_model(
            resolved.to_string_lossy().into_owned(),
            config.field.clone(),
            model,
        ))
    }

    fn from_model(name: String, field: Option<String>, model: ModelBackend) -> Self {
        let dims = model.dims();
        Self {
            name,
            field,
            dims,
            model,
        }
    }

    /// The name vectors are stored under: the resolved model location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vector dimensionality. Fixed at construction; every vector this
    /// adapter attaches has exactly this length.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Query the model directly. `None` when the model cannot produce a
    /// vector for `word`.
    pub fn lookup(&self, word: &str) -> Option<Array1<f32>> {
        self.model.lookup(word)
    }

    /// Annotate every token of every sentence in place, returning the same
    /// slice for chaining.
    ///
    /// Tokens are visited in order. Re-running on already-annotated sentences
    /// overwrites the vectors under this adapter's name.
    pub fn embed<'a>(&self, sentences: &'a mut [Sentence]) -> &'a mut [Sentence] {
        for sentence in sentences.iter_mut() {
            for token in sentence.tokens_mut() {
                self.embed_token(token);
            }
        }
        sentences
    }

    /// Annotate a single token.
    ///
    /// The lookup key is the raw token text, or the value of the configured
    /// `field` tag when one is set. A token missing that tag, like any other
    /// failed lookup, gets a zero vector; this path never errors.
    pub fn embed_token<T: EmbedTarget>(&self, token: &mut T) {
        let key = match &self.field {
            Some(field) => token.tag_value(field),
            None => Some(token.text()),
        };
        let vector = key
            .and_then(|key| self.model.lookup(key))
            .unwrap_or_else(|| Array1::zeros(self.dims));
        token.set_embedding(&self.name, vector);
    }
}

impl std::fmt::Display for FastTextEmbeddings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
