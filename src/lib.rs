//! Attach pretrained subword-aware word embeddings to tokenized sentences.
//!
//! Wordcast bridges fastText-family embedding models and token-annotation
//! pipelines: load a trained `.bin` model once, then call
//! [`FastTextEmbeddings::embed`](embedding::FastTextEmbeddings::embed) on a
//! batch of sentences to give every token a fixed-length vector. Words the
//! model has never seen are approximated from character n-grams (native
//! loader) or fall back to a zero vector (legacy loader, or any failed
//! lookup).
//!
//! ```no_run
//! use wordcast::config::EmbeddingConfig;
//! use wordcast::data::Sentence;
//! use wordcast::embedding::FastTextEmbeddings;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = EmbeddingConfig {
//!     path: Some("/data/models/cc.en.300.bin".into()),
//!     ..Default::default()
//! };
//! let adapter = FastTextEmbeddings::new(&config)?;
//!
//! let mut sentences = vec![Sentence::new("The cat sat on the mat")];
//! adapter.embed(&mut sentences);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`data`] — Sentence/token types and the [`EmbedTarget`](data::EmbedTarget) capability trait
//! - [`embedding`] — The adapter and its two loader backends
//! - [`fetch`] — Download-and-cache resolution for remote model locations
//! - [`error`] — Crate error types

pub mod config;
pub mod data;
pub mod embedding;
pub mod error;
pub mod fetch;
