use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

use super::AiService;

#[derive(Debug)]
pub struct GoogleService {
    api_key: String,
    model: String,
    client: Client,
}

impl GoogleService {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AiService for GoogleService {
    fn name(&self) -> &str {
        "Google"
    }

    async fn critique(
        &self,
        image_base64: &str,
        prompt: &str,
        media_type: &str,
    ) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt },
                        {
                            "inline_data": {
                                "mime_type": media_type,
                                "data": image_base64
                            }
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": 1024
            }
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Google request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("Failed to read Google response")?;

        if !status.is_success() {
            anyhow::bail!("Google API error ({}): {}", status, text);
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).context("Failed to parse Google response JSON")?;

        let content = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .context("No content in Google response")?;

        Ok(content.to_string())
    }
}
