mod anthropic;
mod google;
mod openai;

pub use anthropic::AnthropicService;
pub use google::GoogleService;
pub use openai::OpenAiService;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::Provider;

/// Structured photography critique returned by AI vision analysis.
///
/// Built once per invocation by [`parse_review`] and never mutated after
/// the orchestrator stamps the `provider` field. Field order here is the
/// stable order of the JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Letter grade, A+ through F.
    pub overall_grade: String,
    /// Numeric score, 1–100.
    #[serde(deserialize_with = "de_score")]
    pub overall_score: u8,
    pub ratings: Ratings,
    /// 2–3 specific strengths.
    pub strengths: Vec<String>,
    /// 2–3 specific areas for improvement.
    pub improvements: Vec<String>,
    pub summary: String,
    /// One word, e.g. "serene", "dramatic".
    pub mood: String,
    /// Genre, e.g. "landscape", "street".
    pub style: String,
    /// Which backend produced the critique. Absent in the raw AI output;
    /// filled in by the pipeline before the review is formatted.
    #[serde(default)]
    pub provider: Option<Provider>,
}

/// Per-category scores, 1–10 each.
///
/// Exactly these six categories, in this order. A response missing one or
/// carrying an extra key fails to parse — there is no partial review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ratings {
    #[serde(deserialize_with = "de_score")]
    pub composition: u8,
    #[serde(deserialize_with = "de_score")]
    pub lighting: u8,
    #[serde(deserialize_with = "de_score")]
    pub exposure: u8,
    #[serde(deserialize_with = "de_score")]
    pub subject: u8,
    #[serde(deserialize_with = "de_score")]
    pub creativity: u8,
    #[serde(deserialize_with = "de_score")]
    pub technical: u8,
}

/// Accept a score as a JSON number or a numeric string.
///
/// The prompt's JSON template shows scores as quoted placeholders, and
/// models sometimes echo that quoting back ("82" instead of 82).
fn de_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("score out of range: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|_| D::Error::custom(format!("score is not numeric: {s:?}"))),
        other => Err(D::Error::custom(format!("invalid score value: {other}"))),
    }
}

/// Trait for vision-AI critique backends.
///
/// Each implementation builds its provider's request shape around the same
/// prompt and base64 image payload, makes one HTTP call, and returns the
/// raw completion text — [`parse_review`] handles normalization. The
/// library ships three implementations: [`AnthropicService`],
/// [`OpenAiService`], and [`GoogleService`].
#[async_trait::async_trait]
pub trait AiService: Send + Sync + std::fmt::Debug {
    /// The display name of this service (e.g., "Anthropic", "OpenAI").
    fn name(&self) -> &str;

    /// Send the image for critique and return the raw response text.
    ///
    /// * `image_base64` — The image bytes encoded as base64
    /// * `prompt` — The critique prompt (use [`build_prompt`] for the default)
    /// * `media_type` — The MIME type of the image (e.g., `"image/jpeg"`)
    async fn critique(
        &self,
        image_base64: &str,
        prompt: &str,
        media_type: &str,
    ) -> Result<String>;
}

/// Build the photography-critique prompt that asks for structured JSON.
pub fn build_prompt() -> String {
    r#"You are an expert photography critic with decades of experience in fine art, commercial, and documentary photography. Your reviews are insightful, constructive, and specific.

Analyze this photograph and provide a detailed critique. Consider:

1. **Composition** - Rule of thirds, leading lines, framing, balance, negative space
2. **Lighting** - Quality, direction, color temperature, mood, highlights/shadows
3. **Exposure** - Brightness, dynamic range, histogram distribution
4. **Subject & Focus** - Subject clarity, depth of field, focal point effectiveness
5. **Creativity & Impact** - Originality, emotional resonance, storytelling
6. **Technical Execution** - Sharpness, noise, color accuracy, post-processing

Provide your response in this exact JSON format:
{
  "overall_grade": "A letter grade from A+ to F",
  "overall_score": "Numeric score from 1-100",
  "ratings": {
    "composition": "Score 1-10",
    "lighting": "Score 1-10",
    "exposure": "Score 1-10",
    "subject": "Score 1-10",
    "creativity": "Score 1-10",
    "technical": "Score 1-10"
  },
  "strengths": ["List 2-3 specific strengths"],
  "improvements": ["List 2-3 specific areas for improvement"],
  "summary": "A concise 2-3 sentence overall assessment",
  "mood": "One word describing the mood/feeling (e.g., serene, dramatic, melancholic)",
  "style": "Photography style/genre (e.g., landscape, portrait, street, documentary)"
}

Be honest but encouraging. Focus on actionable feedback."#
        .to_string()
}

/// Parse raw AI response text into a [`Review`].
///
/// Models wrap the JSON in markdown fences or surround it with prose;
/// the interior of a ```json fence is preferred, otherwise the whole text
/// is scanned. There is no recovery beyond that — a response without a
/// parseable object is an error, never a partial review.
pub fn parse_review(text: &str) -> Result<Review> {
    log::debug!("Raw AI response:\n{text}");

    let Some(candidate) = extract_json_span(text) else {
        bail!("Could not parse AI response: no JSON object found");
    };

    serde_json::from_str(candidate).context("Could not parse AI response")
}

/// Find the JSON object span in the response text.
///
/// The span runs from the first `{` to the last `}` of the chosen region.
/// That greedy match is intentional: the AI output is trusted to contain
/// one well-formed object, so brace counting buys nothing. If a ```json
/// fence is present, only its interior is searched.
fn extract_json_span(text: &str) -> Option<&str> {
    let region = fenced_json_block(text).unwrap_or(text);
    let start = region.find('{')?;
    let end = region.rfind('}')?;
    (end > start).then(|| &region[start..=end])
}

/// Extract the interior of the first ```json fenced block, if any.
fn fenced_json_block(text: &str) -> Option<&str> {
    let open = text.find("```json")?;
    let body = &text[open + "```json".len()..];
    let close = body.find("```")?;
    Some(&body[..close])
}
