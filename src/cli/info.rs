//! CLI `info` command — display details about the configured model.

use anyhow::Result;

use wordcast::config::WordcastConfig;
use wordcast::embedding::FastTextEmbeddings;

/// Load the model and print its resolved location, dimensionality, backend,
/// and lookup key source.
pub fn info(config: &WordcastConfig) -> Result<()> {
    let adapter = FastTextEmbeddings::new(&config.embedding)?;

    let backend = if config.embedding.legacy_loader {
        "legacy (word2vec conversion)"
    } else {
        "native (fastText)"
    };

    println!("Model:      {adapter}");
    println!("Dimensions: {}", adapter.dims());
    println!("Backend:    {backend}");
    println!(
        "Lookup key: {}",
        config.embedding.field.as_deref().unwrap_or("(token text)")
    );

    Ok(())
}
