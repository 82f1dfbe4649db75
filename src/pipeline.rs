use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::ai::{self, AiService, Review};
use crate::config::{Config, Provider};

/// Map a file path's extension to the MIME type sent to the provider.
///
/// Unknown or missing extensions fall back to `image/jpeg` — classification
/// never fails, the provider rejects payloads it cannot read.
pub fn media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Construct the adapter for the chosen provider.
///
/// This is where a missing key for an explicitly requested provider
/// surfaces, with the exact variable named.
pub fn build_service(provider: Provider, config: &Config) -> Result<Box<dyn AiService>> {
    let Some(api_key) = config.credentials.get(provider) else {
        bail!(
            "{} not set (required for provider \"{}\")",
            provider.env_key(),
            provider
        );
    };
    let api_key = api_key.to_string();
    let model = provider.model().to_string();

    Ok(match provider {
        Provider::Anthropic => Box::new(ai::AnthropicService::new(api_key, model)),
        Provider::OpenAi => Box::new(ai::OpenAiService::new(api_key, model)),
        Provider::Google => Box::new(ai::GoogleService::new(api_key, model)),
    })
}

/// Review a single photograph.
///
/// The full flow: select the provider, read and base64-encode the image,
/// make one critique call, parse the response into a [`Review`], and stamp
/// it with the provider that produced it. Exactly one outbound request per
/// call; any failure propagates, nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use photo_review::config::Config;
/// use photo_review::pipeline::review_photo;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let review = review_photo(Path::new("photo.jpg"), &config).await?;
/// println!("{} ({}/100)", review.overall_grade, review.overall_score);
/// # Ok(())
/// # }
/// ```
pub async fn review_photo(path: &Path, config: &Config) -> Result<Review> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let provider = config.select_provider()?;
    let service = build_service(provider, config)?;

    let image_bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let image_base64 =
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &image_bytes);
    let media_type = media_type(path);
    let prompt = ai::build_prompt();

    log::info!("Reviewing: {} (via {})", path.display(), service.name());

    let raw = service.critique(&image_base64, &prompt, media_type).await?;

    let mut review = ai::parse_review(&raw)?;
    review.provider = Some(provider);

    log::info!(
        "Review complete — grade {} ({}/100)",
        review.overall_grade,
        review.overall_score
    );

    Ok(review)
}
