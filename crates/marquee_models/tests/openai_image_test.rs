use marquee_core::ImageRef;
use marquee_error::{MarqueeErrorKind, ProviderErrorKind};
use marquee_interface::ImageBackend;
use marquee_models::OpenAiImageClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiImageClient {
    OpenAiImageClient::new(Some("sk-test".to_string()), "dall-e-3")
        .unwrap()
        .with_base_url(server.uri())
}

#[tokio::test]
async fn test_generate_returns_remote_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({
            "model": "dall-e-3",
            "prompt": "Movie poster, a heist",
            "size": "1024x1024",
            "n": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1_700_000_000,
            "data": [{ "url": "https://images.example.com/poster.png" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = client_for(&server)
        .generate("Movie poster, a heist")
        .await
        .unwrap();

    assert_eq!(image, ImageRef::remote("https://images.example.com/poster.png"));
}

#[tokio::test]
async fn test_size_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_json(json!({
            "model": "dall-e-3",
            "prompt": "wide",
            "size": "1792x1024",
            "n": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "url": "https://images.example.com/wide.png" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = client_for(&server)
        .with_size("1792x1024")
        .generate("wide")
        .await
        .unwrap();
    assert!(image.is_remote());
}

#[tokio::test]
async fn test_missing_url_is_external_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "b64_json": "AAAA" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("anything").await.unwrap_err();
    assert!(err.is_external_service());
    match err.kind() {
        MarqueeErrorKind::Provider(e) => {
            assert_eq!(e.provider, "openai");
            assert!(matches!(e.kind, ProviderErrorKind::UnexpectedResponse(_)));
        }
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Your request was rejected by the safety system." }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("anything").await.unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Provider(e) => match &e.kind {
            ProviderErrorKind::Api { status, message } => {
                assert_eq!(*status, 400);
                assert!(message.contains("safety system"));
            }
            other => panic!("Expected Api kind, got {:?}", other),
        },
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(500))
                .set_body_json(json!({ "data": [{ "url": "https://late.example.com" }] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server)
        .with_timeout(std::time::Duration::from_millis(50))
        .unwrap();
    let err = client.generate("slow").await.unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Provider(e) => {
            assert!(matches!(e.kind, ProviderErrorKind::Timeout(_)))
        }
        other => panic!("Expected provider error, got {:?}", other),
    }
}

#[test]
fn test_missing_key_is_configuration_error() {
    let err = OpenAiImageClient::new(None, "dall-e-3").unwrap_err();
    assert!(err.is_configuration());
    assert!(format!("{}", err).contains("OPENAI_API_KEY"));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_live_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = OpenAiImageClient::new(std::env::var("OPENAI_API_KEY").ok(), "dall-e-3")?;
    let image = client
        .generate("Movie poster, a lighthouse keeper during a storm")
        .await?;

    assert!(image.is_remote());
    println!("Image: {}", image);
    Ok(())
}
