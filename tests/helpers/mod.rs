#![allow(dead_code)]

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use finalfusion::compat::word2vec::WriteWord2Vec;
use finalfusion::embeddings::Embeddings;
use finalfusion::norms::NdNorms;
use finalfusion::storage::NdArray;
use finalfusion::vocab::SimpleVocab;
use ndarray::{Array1, Array2};
use tempfile::TempDir;

use wordcast::config::EmbeddingConfig;

/// Toy vocabulary. Each word maps to a 3-dimensional unit basis vector, so
/// expected lookups stay exact after the reader re-normalizes rows.
pub const TOY_WORDS: [&str; 3] = ["cat", "dog", "mat"];

/// Build the toy model in memory.
pub fn toy_embeddings() -> Embeddings<SimpleVocab, NdArray> {
    let vocab = SimpleVocab::new(
        TOY_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<String>>(),
    );
    let mut matrix: Array2<f32> = Array2::zeros((TOY_WORDS.len(), 3));
    for (i, mut row) in matrix.outer_iter_mut().enumerate() {
        row[i] = 1.0;
    }
    let norms = NdNorms::new(Array1::ones(TOY_WORDS.len()));
    Embeddings::new(None, vocab, NdArray::new(matrix), norms)
}

/// Write the toy model into `dir` as a word2vec binary the legacy loader
/// can read. Returns the model path.
pub fn toy_model_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("toy.bin");
    let mut writer = BufWriter::new(File::create(&path).unwrap());
    toy_embeddings()
        .write_word2vec_binary(&mut writer, true)
        .unwrap();
    path
}

/// Config pointing at a local legacy-format model file.
pub fn legacy_config(path: &Path) -> EmbeddingConfig {
    EmbeddingConfig {
        path: Some(path.to_string_lossy().into_owned()),
        legacy_loader: true,
        ..Default::default()
    }
}
