//! CLI `annotate` command — embed tokenized sentences and emit JSON lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use wordcast::config::WordcastConfig;
use wordcast::data::Sentence;
use wordcast::embedding::FastTextEmbeddings;

/// Read one whitespace-tokenized sentence per line, embed every token, and
/// print each annotated sentence as a JSON object on its own line.
pub fn annotate(config: &WordcastConfig, input: Option<&Path>) -> Result<()> {
    let adapter = FastTextEmbeddings::new(&config.embedding)?;

    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        let mut sentences = [Sentence::new(&line)];
        adapter.embed(&mut sentences);
        serde_json::to_writer(&mut out, &sentences[0])?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
