//! Loader backends for pretrained embedding models.
//!
//! Two on-disk layouts are supported. The native fastText binary keeps its
//! subword table, so out-of-vocabulary words can still be approximated from
//! character n-grams. The legacy path converts an older word2vec-format
//! model; it has no subword information and unknown words produce nothing.
//! The choice is made once at load time and callers never branch on it again.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use finalfusion::compat::fasttext::ReadFastText;
use finalfusion::compat::word2vec::ReadWord2Vec;
use finalfusion::embeddings::Embeddings;
use finalfusion::storage::NdArray;
use finalfusion::vocab::{FastTextSubwordVocab, SimpleVocab};
use ndarray::Array1;

use crate::error::{Result, WordcastError};

/// A loaded embedding model, one variant per supported layout.
#[derive(Debug)]
pub enum ModelBackend {
    /// fastText binary with subword information.
    Native(Embeddings<FastTextSubwordVocab, NdArray>),
    /// word2vec-format conversion of an older trained model.
    Legacy(Embeddings<SimpleVocab, NdArray>),
}

impl ModelBackend {
    /// Load a model file, selecting the reader by `legacy_loader`.
    pub fn load(path: &Path, legacy_loader: bool) -> Result<Self> {
        let file = File::open(path).map_err(|e| WordcastError::io(path, e))?;
        let mut reader = BufReader::new(file);
        if legacy_loader {
            Ok(Self::Legacy(Embeddings::read_word2vec_binary(&mut reader)?))
        } else {
            Ok(Self::Native(Embeddings::read_fasttext(&mut reader)?))
        }
    }

    /// Vector dimensionality of the loaded model.
    pub fn dims(&self) -> usize {
        match self {
            Self::Native(embeddings) => embeddings.dims(),
            Self::Legacy(embeddings) => embeddings.dims(),
        }
    }

    /// Look up the vector for `word`. Returns `None` when the backend cannot
    /// produce one (legacy backend on any unseen word; native backend only
    /// when no known n-grams remain to compose from).
    pub fn lookup(&self, word: &str) -> Option<Array1<f32>> {
        match self {
            Self::Native(embeddings) => embeddings.embedding(word).map(|v| v.into_owned()),
            Self::Legacy(embeddings) => embeddings.embedding(word).map(|v| v.into_owned()),
        }
    }
}
