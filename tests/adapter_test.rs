mod helpers;

use helpers::{legacy_config, toy_model_file};
use wordcast::config::EmbeddingConfig;
use wordcast::embedding::FastTextEmbeddings;
use wordcast::error::WordcastError;

#[test]
fn unset_location_is_a_configuration_error() {
    let config = EmbeddingConfig::default();
    let err = FastTextEmbeddings::new(&config).unwrap_err();
    assert!(matches!(err, WordcastError::Configuration(_)));
}

#[test]
fn nonexistent_local_path_is_a_configuration_error() {
    let config = EmbeddingConfig {
        path: Some("/definitely/not/here.bin".into()),
        ..Default::default()
    };
    let err = FastTextEmbeddings::new(&config).unwrap_err();
    assert!(matches!(err, WordcastError::Configuration(ref loc) if loc.contains("here.bin")));
}

#[test]
fn unparseable_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.bin");
    std::fs::write(&path, b"this is not a model").unwrap();

    let err = FastTextEmbeddings::new(&legacy_config(&path)).unwrap_err();
    assert!(matches!(err, WordcastError::Load(_)));
}

#[test]
fn loads_legacy_model_and_reports_dims() {
    let dir = tempfile::tempdir().unwrap();
    let path = toy_model_file(&dir);

    let adapter = FastTextEmbeddings::new(&legacy_config(&path)).unwrap();
    assert_eq!(adapter.dims(), 3);
    // Display and the storage name are both the resolved model location.
    assert_eq!(adapter.name(), path.to_string_lossy());
    assert_eq!(adapter.to_string(), adapter.name());
}

#[test]
fn dims_is_stable_across_calls() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = FastTextEmbeddings::new(&legacy_config(&toy_model_file(&dir))).unwrap();
    let first = adapter.dims();
    for _ in 0..3 {
        assert_eq!(adapter.dims(), first);
    }
}
