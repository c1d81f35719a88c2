use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WordcastConfig {
    pub logging: LoggingConfig,
    pub embedding: EmbeddingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

/// Settings for locating and loading the embedding model.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Model location: a local `.bin` path, or a URL when `use_local` is false.
    pub path: Option<String>,
    /// When true, `path` must exist on the local filesystem.
    pub use_local: bool,
    /// Load through the word2vec-format converter instead of the native
    /// fastText reader. Needed for models trained with fastText < 0.9.1.
    pub legacy_loader: bool,
    /// Token tag to use as the lookup key instead of the raw token text.
    pub field: Option<String>,
    /// Directory where remote models are cached.
    pub cache_dir: String,
}

impl Default for WordcastConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        let cache_dir = default_wordcast_dir()
            .join("embeddings")
            .to_string_lossy()
            .into_owned();
        Self {
            path: None,
            use_local: true,
            legacy_loader: false,
            field: None,
            cache_dir,
        }
    }
}

/// Returns `~/.wordcast/`
pub fn default_wordcast_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".wordcast")
}

/// Returns the default config file path: `~/.wordcast/config.toml`
pub fn default_config_path() -> PathBuf {
    default_wordcast_dir().join("config.toml")
}

impl WordcastConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            WordcastConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (WORDCAST_MODEL, WORDCAST_CACHE,
    /// WORDCAST_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WORDCAST_MODEL") {
            self.embedding.path = Some(val);
        }
        if let Ok(val) = std::env::var("WORDCAST_CACHE") {
            self.embedding.cache_dir = val;
        }
        if let Ok(val) = std::env::var("WORDCAST_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }

    /// Resolve the cache directory, expanding `~` if needed.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        expand_tilde(&self.embedding.cache_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WordcastConfig::default();
        assert_eq!(config.logging.log_level, "info");
        assert!(config.embedding.path.is_none());
        assert!(config.embedding.use_local);
        assert!(!config.embedding.legacy_loader);
        assert!(config.embedding.cache_dir.ends_with("embeddings"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[logging]
log_level = "debug"

[embedding]
path = "/data/models/cc.en.300.bin"
legacy_loader = true
field = "lemma"
"#;
        let config: WordcastConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(
            config.embedding.path.as_deref(),
            Some("/data/models/cc.en.300.bin")
        );
        assert!(config.embedding.legacy_loader);
        assert_eq!(config.embedding.field.as_deref(), Some("lemma"));
        // defaults still apply for unset fields
        assert!(config.embedding.use_local);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = WordcastConfig::default();
        std::env::set_var("WORDCAST_MODEL", "/tmp/override.bin");
        std::env::set_var("WORDCAST_CACHE", "/tmp/cache");
        std::env::set_var("WORDCAST_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.embedding.path.as_deref(), Some("/tmp/override.bin"));
        assert_eq!(config.embedding.cache_dir, "/tmp/cache");
        assert_eq!(config.logging.log_level, "trace");

        // Clean up
        std::env::remove_var("WORDCAST_MODEL");
        std::env::remove_var("WORDCAST_CACHE");
        std::env::remove_var("WORDCAST_LOG_LEVEL");
    }

    #[test]
    fn expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        let expanded = expand_tilde("~/models");
        assert!(expanded.ends_with("models"));
        assert!(!expanded.to_string_lossy().contains('~'));
    }
}
