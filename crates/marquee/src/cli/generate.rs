//! One-shot generation command handlers.

use super::GenerateArgs;
use marquee::{MarqueeConfig, build_pipeline, save_campaign, save_image};
use marquee_core::CampaignRequest;
use marquee_error::MarqueeResult;
use tracing::info;

fn to_request(args: &GenerateArgs) -> MarqueeResult<CampaignRequest> {
    Ok(CampaignRequest::new(
        args.summary.as_str(),
        args.style_hint.clone(),
    )?)
}

/// Generate one poster, print it as JSON and optionally save the image.
pub async fn run_poster(config: &MarqueeConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let request = to_request(&args)?;
    let pipeline = build_pipeline(config)?;

    let poster = pipeline.run_single(&request).await?;
    println!("{}", serde_json::to_string_pretty(&poster)?);

    if let Some(dir) = &args.out {
        let path = dir.join("poster.png");
        save_image(poster.image_ref(), &path).await?;
        info!(path = %path.display(), "Poster saved");
    }
    Ok(())
}

/// Generate a campaign, print it as JSON and optionally save every variant.
pub async fn run_campaign(config: &MarqueeConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let request = to_request(&args)?;
    let pipeline = build_pipeline(config)?;
    pipeline.classifier().load()?;

    let campaign = pipeline.run_campaign(&request).await?;
    println!("{}", serde_json::to_string_pretty(&campaign)?);

    if let Some(dir) = &args.out {
        let written = save_campaign(&campaign, dir).await?;
        info!(count = written.len(), dir = %dir.display(), "Campaign saved");
    }
    Ok(())
}
