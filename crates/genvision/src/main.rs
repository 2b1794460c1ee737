//! GenVision command-line assistant.
//!
//! Sends a prompt and/or an image to Gemini and prints the cleaned response,
//! or writes it into an HTML page.

use anyhow::{Context, Result};
use clap::Parser;
use genvision::{
    AnimationSet, GeminiClient, GenVisionConfig, PageContent, Pipeline, UserInput,
    init_tracing, load_image, render_page,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "genvision")]
#[command(about = "GEN Vision AI Assistant - ask Gemini about a prompt and an image")]
#[command(version)]
struct Args {
    /// Prompt text
    #[arg(short, long)]
    prompt: Option<String>,

    /// Image to attach (jpg, jpeg or png)
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "GENVISION_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured model
    #[arg(short, long)]
    model: Option<String>,

    /// Write a rendered HTML page here instead of printing text
    #[arg(long)]
    html: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing("info").context("Failed to initialize tracing")?;

    let args = Args::parse();
    info!("Starting GenVision");

    let mut config = GenVisionConfig::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.set_model(model);
    }
    debug!(?config, "Configuration loaded");

    let client = GeminiClient::new(config.gemini_config()?)?;
    let pipeline = Pipeline::new(client);
    let presentation = config.presentation();

    let image = match &args.image {
        Some(path) => Some(load_image(path)?),
        None => None,
    };

    let animations = AnimationSet::load_from_dir(config.assets().dir());
    eprintln!("{}", presentation.loading_text(&animations));

    let input = UserInput::new(args.prompt, image);
    let (content, code) = match pipeline.run(input).await {
        Ok(response) => {
            info!("Response received");
            (PageContent::Response(response), ExitCode::SUCCESS)
        }
        Err(e) if e.is_invalid_request() => {
            warn!("Nothing to submit");
            (
                PageContent::Error("Please enter a prompt or choose an image.".to_string()),
                ExitCode::from(2),
            )
        }
        Err(e) => {
            error!(error = %e, "Submission failed");
            (PageContent::Error(e.kind.to_string()), ExitCode::FAILURE)
        }
    };

    match &args.html {
        Some(path) => {
            let page = render_page(presentation, &animations, &content);
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote page");
        }
        None => match &content {
            PageContent::Response(response) => {
                println!("{}", presentation.response_heading());
                println!("{}", response.display_text());
            }
            PageContent::Error(message) => eprintln!("{}", message),
            PageContent::Idle => {}
        },
    }

    Ok(code)
}
