use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use photo_review::{config, output, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "review",
    version,
    about = "AI photo critic — structured photography critiques from vision models"
)]
struct Cli {
    /// Image file to review
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Output as JSON (default)
    #[arg(long)]
    json: bool,

    /// Output as YAML for document front matter
    #[arg(long, conflicts_with = "json")]
    yaml: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // --json is the default; --yaml switches to the front-matter fragment.
    let want_yaml = cli.yaml && !cli.json;

    let config = config::Config::from_env()?;
    let review = pipeline::review_photo(&cli.image, &config).await?;

    if want_yaml {
        println!("{}", output::to_front_matter(&review));
    } else {
        println!("{}", output::to_json(&review)?);
    }

    Ok(())
}
