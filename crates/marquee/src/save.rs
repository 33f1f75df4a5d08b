//! Writing generated images to disk.

use marquee_core::{Campaign, ImageRef};
use marquee_error::{ConfigError, MarqueeResult, ProviderError, ProviderErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

const DOWNLOAD: &str = "download";

/// Resolve an image to bytes and write it to `path`.
///
/// Inline images are written as-is; remote ones are fetched with one GET.
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns a provider error if the download fails and a configuration error
/// if the file cannot be written.
#[instrument(skip_all, fields(path = %path.display(), remote = image.is_remote()))]
pub async fn save_image(image: &ImageRef, path: &Path) -> MarqueeResult<()> {
    let bytes = match image {
        ImageRef::Inline { data, .. } => data.clone(),
        ImageRef::Remote { url } => fetch(url).await?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            ConfigError::new(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| ConfigError::new(format!("Cannot write {}: {}", path.display(), e)))?;

    info!(bytes = bytes.len(), "Saved image");
    Ok(())
}

async fn fetch(url: &str) -> MarqueeResult<Vec<u8>> {
    debug!(url, "Downloading image");
    let transport = |e: reqwest::Error| {
        error!(error = ?e, "Image download failed");
        ProviderError::new(DOWNLOAD, ProviderErrorKind::Transport(e.to_string()))
    };

    let response = reqwest::get(url).await.map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        error!(status = %status, "Image download rejected");
        return Err(ProviderError::new(
            DOWNLOAD,
            ProviderErrorKind::Api {
                status: status.as_u16(),
                message: format!("GET {} failed", url),
            },
        )
        .into());
    }
    let bytes = response.bytes().await.map_err(transport)?;
    Ok(bytes.to_vec())
}

/// File name for a campaign variant: `{id}_{variant_with_underscores}.png`.
///
/// ```
/// use marquee::variant_file_name;
/// use marquee_core::VariantKind;
///
/// assert_eq!(
///     variant_file_name(1, VariantKind::StreamingThumbnail),
///     "1_streaming_thumbnail.png"
/// );
/// ```
pub fn variant_file_name(id: usize, variant: marquee_core::VariantKind) -> String {
    format!("{}_{}.png", id, variant.as_str().replace(' ', "_"))
}

/// Save every variant of a campaign under `dir`, returning the written paths
/// in variant order.
///
/// # Errors
///
/// Stops at the first image that cannot be resolved or written.
pub async fn save_campaign(campaign: &Campaign, dir: &Path) -> MarqueeResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(campaign.variants().len());
    for variant in campaign.variants() {
        let path = dir.join(variant_file_name(*variant.id(), *variant.variant()));
        save_image(variant.image_ref(), &path).await?;
        written.push(path);
    }
    Ok(written)
}
