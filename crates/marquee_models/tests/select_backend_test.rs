use marquee_models::{
    DEFAULT_HF_MODEL, ImageBackendConfig, ImageProvider, select_backend,
};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_provider_names() {
    assert_eq!(ImageProvider::from_setting("huggingface"), ImageProvider::HuggingFace);
    assert_eq!(ImageProvider::from_setting("HUGGINGFACE"), ImageProvider::HuggingFace);
    assert_eq!(ImageProvider::from_setting("openai"), ImageProvider::OpenAi);
    assert_eq!(ImageProvider::from_setting("stability"), ImageProvider::OpenAi);
    assert_eq!(ImageProvider::from_setting(""), ImageProvider::OpenAi);
    assert_eq!(ImageProvider::HuggingFace.to_string(), "huggingface");
}

#[test]
fn test_selects_configured_provider() {
    let config = ImageBackendConfig::builder()
        .provider(ImageProvider::HuggingFace)
        .hf_api_key(Some("hf_test".to_string()))
        .build()
        .unwrap();

    let backend = select_backend(&config).unwrap();
    assert_eq!(backend.provider_name(), "huggingface");
    assert_eq!(backend.model_name(), DEFAULT_HF_MODEL);

    let config = ImageBackendConfig::builder()
        .openai_api_key(Some("sk-test".to_string()))
        .image_model("gpt-image-1")
        .build()
        .unwrap();

    let backend = select_backend(&config).unwrap();
    assert_eq!(backend.provider_name(), "openai");
    assert_eq!(backend.model_name(), "gpt-image-1");
}

#[tokio::test]
async fn test_missing_credential_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "url": "https://images.example.com/never.png" }]
        })))
        .expect(0)
        .mount(&server)
        .await;

    // The OpenAI key is present but HuggingFace is selected.
    let config = ImageBackendConfig::builder()
        .provider(ImageProvider::HuggingFace)
        .openai_api_key(Some("sk-test".to_string()))
        .openai_base_url(server.uri())
        .hf_base_url(server.uri())
        .build()
        .unwrap();

    let err = select_backend(&config).err().unwrap();
    assert!(err.is_configuration());

    let config = ImageBackendConfig::builder()
        .openai_api_key(Some(String::new()))
        .openai_base_url(server.uri())
        .build()
        .unwrap();

    let err = select_backend(&config).err().unwrap();
    assert!(err.is_configuration());

    server.verify().await;
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[test]
fn test_debug_redacts_credentials() {
    let config = ImageBackendConfig::builder()
        .openai_api_key(Some("sk-very-secret".to_string()))
        .build()
        .unwrap();

    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("<redacted>"));
}
