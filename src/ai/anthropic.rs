use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

use super::AiService;

#[derive(Debug)]
pub struct AnthropicService {
    api_key: String,
    model: String,
    client: Client,
}

impl AnthropicService {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AiService for AnthropicService {
    fn name(&self) -> &str {
        "Anthropic"
    }

    async fn critique(
        &self,
        image_base64: &str,
        prompt: &str,
        media_type: &str,
    ) -> Result<String> {
        // Messages API content blocks: image first, then the text prompt.
        let body = json!({
            "model": self.model,
            "max_tokens": 1024,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": media_type,
                                "data": image_base64
                            }
                        },
                        {
                            "type": "text",
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await
            .context("Anthropic request failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("Failed to read Anthropic response")?;

        if !status.is_success() {
            anyhow::bail!("Anthropic API error ({}): {}", status, text);
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).context("Failed to parse Anthropic response JSON")?;

        let content = json["content"][0]["text"]
            .as_str()
            .context("No content in Anthropic response")?;

        Ok(content.to_string())
    }
}
