pub mod annotate;
pub mod info;
pub mod lookup;

use anyhow::{Context, Result};
use wordcast::config::WordcastConfig;

/// Model-selection flags shared by the commands that load a model.
/// Anything left unset falls back to the config file.
#[derive(clap::Args)]
pub struct ModelArgs {
    /// Model location: a local `.bin` path, or a URL with --remote
    #[arg(long)]
    pub model: Option<String>,
    /// Treat the model location as remote; download and cache it
    #[arg(long)]
    pub remote: bool,
    /// Load through the word2vec-format converter (fastText < 0.9.1)
    #[arg(long)]
    pub legacy: bool,
    /// Token tag to use as the lookup key instead of the token text
    #[arg(long)]
    pub field: Option<String>,
}

impl ModelArgs {
    /// Overlay these flags onto the loaded config.
    pub fn apply(&self, config: &mut WordcastConfig) {
        if let Some(model) = &self.model {
            config.embedding.path = Some(model.clone());
        }
        if self.remote {
            config.embedding.use_local = false;
        }
        if self.legacy {
            config.embedding.legacy_loader = true;
        }
        if let Some(field) = &self.field {
            config.embedding.field = Some(field.clone());
        }
    }
}

/// Download a remote model into the cache directory (no-op if already cached).
pub fn model_fetch(config: &WordcastConfig, location: Option<&str>) -> Result<()> {
    let location = location
        .or(config.embedding.path.as_deref())
        .context("no model location given and none configured")?;

    let cache_dir = config.resolved_cache_dir();
    let path = wordcast::fetch::cached_path(location, &cache_dir)?;
    println!("Model available at {}", path.display());
    Ok(())
}
