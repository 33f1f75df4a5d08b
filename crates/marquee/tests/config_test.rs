use marquee::{MarqueeConfig, build_pipeline};
use marquee_models::ImageProvider;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        MarqueeConfig::load_from(None, &dir.path().join("marquee.toml"), env(&[])).unwrap();

    assert_eq!(config.image_provider(), "openai");
    assert_eq!(config.image_model(), "dall-e-3");
    assert_eq!(config.image_size(), "1024x1024");
    assert_eq!(config.hf_model(), "stabilityai/stable-diffusion-xl-base-1.0");
    assert_eq!(config.max_in_flight(), &1);
    assert_eq!(
        config.classifier_dir(),
        &PathBuf::from("models/genre_classifier_distilbert")
    );
    assert_eq!(config.bind_address(), "127.0.0.1:8000");
    assert_eq!(config.openai_api_key(), &None);
    assert_eq!(config.request_timeout_secs(), &None);
}

#[test]
fn test_files_and_env_override_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().join("home.toml");
    let local = dir.path().join("marquee.toml");
    fs::write(&home, "image_size = \"512x512\"\nhf_model = \"home/model\"\n").unwrap();
    fs::write(&local, "hf_model = \"local/model\"\nmax_in_flight = 3\n").unwrap();

    let config = MarqueeConfig::load_from(
        Some(&home),
        &local,
        env(&[
            ("IMAGE_PROVIDER", "HuggingFace"),
            ("HF_API_KEY", "hf_env"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]),
    )
    .unwrap();

    assert_eq!(config.image_size(), "512x512");
    assert_eq!(config.hf_model(), "local/model");
    assert_eq!(config.max_in_flight(), &3);
    assert_eq!(*config.generation_options().max_in_flight(), 3);

    let backend = config.backend_config().unwrap();
    assert_eq!(backend.provider(), &ImageProvider::HuggingFace);
    assert_eq!(backend.hf_api_key().as_deref(), Some("hf_env"));
    assert_eq!(backend.hf_model(), "local/model");
    assert_eq!(backend.request_timeout(), &Some(Duration::from_secs(30)));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("marquee.toml");
    fs::write(&local, "max_in_flight = [not toml").unwrap();

    let err = MarqueeConfig::load_from(None, &local, env(&[])).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_missing_credential_fails_pipeline_build() {
    let dir = tempfile::tempdir().unwrap();
    let config = MarqueeConfig::load_from(
        None,
        &dir.path().join("absent.toml"),
        env(&[("IMAGE_PROVIDER", "openai")]),
    )
    .unwrap();

    let err = build_pipeline(&config).err().unwrap();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn test_pipeline_build_does_not_load_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let config = MarqueeConfig::load_from(
        None,
        &dir.path().join("absent.toml"),
        env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("CLASSIFIER_DIR", "/nonexistent/artifact"),
        ]),
    )
    .unwrap();

    let pipeline = build_pipeline(&config).unwrap();
    assert_eq!(pipeline.backend().provider_name(), "openai");
    assert!(!pipeline.classifier().is_loaded());
    assert!(pipeline.classifier().load().unwrap_err().is_artifact_missing());
}

#[test]
fn test_debug_redacts_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let config = MarqueeConfig::load_from(
        None,
        &dir.path().join("absent.toml"),
        env(&[("OPENAI_API_KEY", "sk-very-secret")]),
    )
    .unwrap();

    assert!(!format!("{:?}", config).contains("sk-very-secret"));
}
