//! CLI `lookup` command — print a single word's vector as JSON.

use anyhow::Result;

use wordcast::config::WordcastConfig;
use wordcast::embedding::FastTextEmbeddings;

/// Print the model's vector for `word`, or `null` when the model cannot
/// produce one (annotation would substitute a zero vector in that case).
pub fn lookup(config: &WordcastConfig, word: &str) -> Result<()> {
    let adapter = FastTextEmbeddings::new(&config.embedding)?;

    match adapter.lookup(word) {
        Some(vector) => println!("{}", serde_json::to_string(&vector)?),
        None => println!("null"),
    }

    Ok(())
}
