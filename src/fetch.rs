//! Remote model resolution and caching.
//!
//! A model location that is not a local path is resolved to a file inside the
//! configured cache directory, downloading it on first use. Downloads are
//! atomic (tmp + rename) so an interrupted fetch never leaves a half-written
//! model that a later construction would try to parse.

use std::io::Write;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Result, WordcastError};

/// Resolve a remote model location to a local cached file, downloading it
/// into `cache_dir` if it is not already present.
pub fn cached_path(location: &str, cache_dir: &Path) -> Result<PathBuf> {
    let dest = cache_dir.join(artifact_file_name(location));

    if dest.exists() {
        tracing::debug!(path = %dest.display(), "model already cached");
        return Ok(dest);
    }

    std::fs::create_dir_all(cache_dir).map_err(|e| WordcastError::io(cache_dir, e))?;

    tracing::info!(url = location, dest = %dest.display(), "downloading model");
    download_file(location, &dest)?;
    Ok(dest)
}

/// Cache file name for a model location: the last path segment of the URL,
/// ignoring any query string.
pub fn artifact_file_name(location: &str) -> String {
    let without_query = location.split(['?', '#']).next().unwrap_or(location);
    without_query
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(without_query)
        .to_string()
}

/// Download a file from a URL with a progress bar. Uses atomic write (tmp + rename).
fn download_file(url: &str, dest: &Path) -> Result<()> {
    let fetch_err = |source| WordcastError::Fetch {
        url: url.to_string(),
        source,
    };

    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("##-"),
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };

    let tmp_path = dest.with_extension("tmp");
    let file =
        std::fs::File::create(&tmp_path).map_err(|e| WordcastError::io(&tmp_path, e))?;

    // Stream to disk; model files can run to gigabytes.
    let mut writer = pb.wrap_write(file);
    std::io::copy(&mut response, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| WordcastError::io(&tmp_path, e))?;
    drop(writer);

    std::fs::rename(&tmp_path, dest).map_err(|e| WordcastError::io(dest, e))?;

    pb.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_from_url() {
        assert_eq!(
            artifact_file_name("https://example.com/models/cc.en.300.bin"),
            "cc.en.300.bin"
        );
        assert_eq!(
            artifact_file_name("https://example.com/models/cc.en.300.bin?download=1"),
            "cc.en.300.bin"
        );
        assert_eq!(
            artifact_file_name("https://example.com/models/wiki.bin/"),
            "wiki.bin"
        );
    }

    #[test]
    fn cached_file_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("model.bin");
        std::fs::write(&cached, b"not a real model").unwrap();

        // No network: an existing cache entry is returned as-is.
        let resolved =
            cached_path("https://unreachable.invalid/model.bin", dir.path()).unwrap();
        assert_eq!(resolved, cached);
    }
}
