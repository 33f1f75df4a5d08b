//! Tests for request, analysis and campaign records.

use marquee_core::{
    AnalysisResult, Campaign, CampaignRequest, GeneratedImage, ImageRef, VariantKind,
};
use marquee_error::ValidationErrorKind;
use strum::IntoEnumIterator;

fn analysis_builder() -> marquee_core::AnalysisResultBuilder {
    let mut builder = AnalysisResult::builder();
    builder
        .title("A Legendary Jedi Rises To Confront")
        .tagline("A dynamic and energetic mission you'll never forget.")
        .genre("Action")
        .mood("dynamic and energetic")
        .color_palette("high-contrast oranges and blues")
        .visual_style_keywords(vec![
            "dynamic composition".to_string(),
            "motion blur".to_string(),
            "epic scale".to_string(),
        ]);
    builder
}

#[test]
fn test_request_rejects_blank_summary() {
    let err = CampaignRequest::new(" \n\t", None).unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::EmptySummary);
}

#[test]
fn test_request_keeps_summary_verbatim() {
    let request =
        CampaignRequest::new("  A heist goes wrong. ", Some("noir, grainy".to_string())).unwrap();
    assert_eq!(request.summary(), "  A heist goes wrong. ");
    assert_eq!(request.style_hint(), Some("noir, grainy"));
}

#[test]
fn test_analysis_builder_accepts_valid_fields() {
    let analysis = analysis_builder().build().unwrap();
    assert_eq!(analysis.mood(), "dynamic and energetic");
    assert_eq!(analysis.visual_style_keywords().len(), 3);
}

#[test]
fn test_analysis_builder_rejects_empty_field() {
    let err = analysis_builder().mood("").build().unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::EmptyField("mood".to_string()));
}

#[test]
fn test_analysis_builder_rejects_missing_keywords() {
    let err = analysis_builder()
        .visual_style_keywords(Vec::<String>::new())
        .build()
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::EmptyField("visual_style_keywords".to_string())
    );
}

#[test]
fn test_analysis_builder_rejects_long_title() {
    let err = analysis_builder().title("x".repeat(61)).build().unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::TitleTooLong { length: 61, max: 60 }
    );
}

#[test]
fn test_analysis_builder_rejects_unset_field() {
    let mut builder = AnalysisResult::builder();
    builder.title("Only A Title");
    assert!(builder.build().is_err());
}

#[test]
fn test_variant_order_and_names() {
    let names: Vec<&str> = VariantKind::iter().map(|v| v.as_str()).collect();
    assert_eq!(
        names,
        vec!["theatrical poster", "streaming thumbnail", "social media teaser"]
    );
    for variant in VariantKind::iter() {
        assert_eq!(variant.to_string(), variant.as_str());
    }
}

#[test]
fn test_variant_names_agree_across_forms() {
    for variant in VariantKind::iter() {
        let json = serde_json::to_value(variant).unwrap();
        assert_eq!(json, variant.as_str());
        assert_eq!(serde_json::from_value::<VariantKind>(json).unwrap(), variant);
        assert_eq!(variant.as_str().parse::<VariantKind>().unwrap(), variant);
    }
    assert!(serde_json::from_str::<VariantKind>("\"TheatricalPoster\"").is_err());
}

#[test]
fn test_campaign_json_shape() {
    let analysis = analysis_builder().build().unwrap();
    let images = VariantKind::iter()
        .map(|variant| {
            GeneratedImage::new(
                variant,
                format!("prompt for {}", variant),
                ImageRef::remote(format!("https://cdn.example.com/{}.png", variant.as_str().len())),
            )
        })
        .collect();
    let campaign = Campaign::assemble(analysis, images);

    let json = serde_json::to_value(&campaign).unwrap();
    assert_eq!(json["genre"], "Action");
    assert_eq!(json["title"], "A Legendary Jedi Rises To Confront");
    let variants = json["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 3);
    assert_eq!(variants[0]["id"], 0);
    assert_eq!(variants[0]["variant"], "theatrical poster");
    assert_eq!(variants[2]["id"], 2);
    assert_eq!(variants[2]["variant"], "social media teaser");
    assert_eq!(variants[1]["prompt"], "prompt for streaming thumbnail");
    assert!(variants[1]["image_ref"].as_str().unwrap().starts_with("https://"));
}
