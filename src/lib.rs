//! # photo-review
//!
//! AI photo critic — send a photograph to a vision model (Anthropic, OpenAI,
//! or Google) and get back a structured critique: letter grade, numeric
//! score, six per-category ratings, strengths, improvements, mood, and style.
//!
//! ## Quick Start
//!
//! The pipeline module handles the full select → critique → parse flow:
//!
//! ```rust,no_run
//! use photo_review::config::Config;
//! use photo_review::pipeline::review_photo;
//! use photo_review::output;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads AI_PROVIDER and the *_API_KEY variables once, up front.
//!     let config = Config::from_env()?;
//!
//!     let review = review_photo(Path::new("photo.jpg"), &config).await?;
//!
//!     println!("{}", output::to_json(&review)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! For more control, pick the provider and call the adapter directly:
//!
//! ```rust,no_run
//! use photo_review::ai::{AiService, OpenAiService, build_prompt, parse_review};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let path = Path::new("photo.jpg");
//!
//!     let bytes = std::fs::read(path)?;
//!     let b64 = base64::Engine::encode(
//!         &base64::engine::general_purpose::STANDARD, &bytes,
//!     );
//!
//!     let service = OpenAiService::new("sk-...".into(), "gpt-4o-mini".into());
//!     let raw = service.critique(&b64, &build_prompt(), "image/jpeg").await?;
//!
//!     let review = parse_review(&raw)?;
//!     println!("Grade: {} ({}/100)", review.overall_grade, review.overall_score);
//!     Ok(())
//! }
//! ```
//!
//! ## Providers
//!
//! | Provider | Credential | Model |
//! |----------|------------|-------|
//! | `anthropic` | `ANTHROPIC_API_KEY` | claude-3-5-sonnet-20241022 |
//! | `openai` | `OPENAI_API_KEY` | gpt-4o-mini |
//! | `google` | `GOOGLE_API_KEY` | gemini-2.0-flash |
//!
//! `AI_PROVIDER` selects a backend explicitly; when `auto` (the default),
//! credentials are probed in the table's order and the first present wins.
//!
//! ## Modules
//!
//! - [`ai`] — provider trait and adapters, the critique prompt, and the
//!   response normalizer
//! - [`config`] — provider identifiers, credentials, and selection
//! - [`output`] — JSON and YAML front-matter formatters
//! - [`pipeline`] — media type classification and the review orchestrator

pub mod ai;
pub mod config;
pub mod output;
pub mod pipeline;
