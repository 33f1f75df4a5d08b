use marquee_core::PNG_MEDIA_TYPE;
use marquee_error::{MarqueeErrorKind, ProviderErrorKind};
use marquee_interface::ImageBackend;
use marquee_models::HuggingFaceImageClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0xFF];

fn client_for(server: &MockServer) -> HuggingFaceImageClient {
    HuggingFaceImageClient::new(Some("hf_test".to_string()), MODEL)
        .unwrap()
        .with_base_url(server.uri())
}

#[tokio::test]
async fn test_generate_wraps_bytes_inline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}", MODEL)))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({ "inputs": "Movie poster, a haunted lighthouse" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(PNG_BYTES),
        )
        .expect(1)
        .mount(&server)
        .await;

    let image = client_for(&server)
        .generate("Movie poster, a haunted lighthouse")
        .await
        .unwrap();

    assert!(!image.is_remote());
    assert_eq!(image.inline_bytes(), Some(PNG_BYTES));
    assert_eq!(image.media_type(), Some(PNG_MEDIA_TYPE));
    assert!(image.to_string().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_empty_body_is_external_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("anything").await.unwrap_err();
    assert!(err.is_external_service());
}

#[tokio::test]
async fn test_json_body_is_unexpected_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "warning": "cold" })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("anything").await.unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Provider(e) => {
            assert_eq!(e.provider, "huggingface");
            assert!(matches!(e.kind, ProviderErrorKind::UnexpectedResponse(_)));
        }
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_model_loading_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model stabilityai/stable-diffusion-xl-base-1.0 is currently loading"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("anything").await.unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Provider(e) => match &e.kind {
            ProviderErrorKind::Api { status, message } => {
                assert_eq!(*status, 503);
                assert!(message.contains("currently loading"));
            }
            other => panic!("Expected Api kind, got {:?}", other),
        },
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[test]
fn test_blank_token_is_configuration_error() {
    let err = HuggingFaceImageClient::new(Some("   ".to_string()), MODEL).unwrap_err();
    assert!(err.is_configuration());
    assert!(format!("{}", err).contains("HF_API_KEY"));
}
