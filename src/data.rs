//! Sentence and token types.
//!
//! Defines [`Token`] (text, named tags, named embeddings), [`Sentence`]
//! (an ordered token sequence), and [`EmbedTarget`] — the small capability
//! surface an embedding adapter needs from a token. The adapter works against
//! [`EmbedTarget`], never the concrete types, so callers with their own token
//! representation only have to implement the trait.

use std::collections::HashMap;

use ndarray::Array1;
use serde::Serialize;

/// Capability a token type must offer to receive embeddings.
pub trait EmbedTarget {
    /// The raw token text.
    fn text(&self) -> &str;

    /// The value of a named tag (e.g. `"lemma"`, `"pos"`), if the token has it.
    fn tag_value(&self, field: &str) -> Option<&str>;

    /// Attach a vector under `name`, replacing any vector already stored
    /// under that name.
    fn set_embedding(&mut self, name: &str, vector: Array1<f32>);
}

/// A single token with optional tag values and named embedding vectors.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub text: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    tags: HashMap<String, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    embeddings: HashMap<String, Array1<f32>>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: HashMap::new(),
            embeddings: HashMap::new(),
        }
    }

    /// Set a named tag value (e.g. a lemma or POS tag).
    pub fn set_tag(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(field.into(), value.into());
    }

    /// The embedding stored under `name`, if any.
    pub fn embedding(&self, name: &str) -> Option<&Array1<f32>> {
        self.embeddings.get(name)
    }

    /// Names of all embeddings attached to this token.
    pub fn embedding_names(&self) -> impl Iterator<Item = &str> {
        self.embeddings.keys().map(String::as_str)
    }
}

impl EmbedTarget for Token {
    fn text(&self) -> &str {
        &self.text
    }

    fn tag_value(&self, field: &str) -> Option<&str> {
        self.tags.get(field).map(String::as_str)
    }

    fn set_embedding(&mut self, name: &str, vector: Array1<f32>) {
        self.embeddings.insert(name.to_string(), vector);
    }
}

/// An ordered sequence of tokens.
#[derive(Debug, Clone, Serialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from plain text by splitting on whitespace.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(Token::new).collect(),
        }
    }

    /// Build a sentence from already-tokenized text.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
            first = false;
        }
        Ok(())
    }
}
