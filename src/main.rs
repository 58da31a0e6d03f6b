#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{logging, SiteConfig};

use crate::context::LaunchOptions;

/// Folio - portfolio viewer
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with profile card and image galleries")]
struct Args {
    /// Site config (JSON); defaults to <config dir>/folio/site.json, then the demo site
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language code, overrides the config's language
    #[arg(short, long)]
    language: Option<String>,

    /// Directory or URL prefix for relative image paths, overrides the config
    #[arg(short, long)]
    assets: Option<String>,

    /// Open this gallery on start
    #[arg(short, long)]
    gallery: Option<String>,

    /// Reduced motion: no typewriter, no avatar rotation
    #[arg(long)]
    suspend_animations: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let mut site = SiteConfig::load_or_demo(args.config.as_deref())?;
    if let Some(language) = args.language {
        site.language = language;
    }
    if let Some(assets) = args.assets {
        site.base_path = assets;
    }
    if let Some(ref id) = args.gallery {
        // Fail early on a typo rather than opening an empty route
        site.gallery(id)?;
    }

    let title = if site.profile.name.is_empty() {
        "Folio".to_string()
    } else {
        format!("Folio - {}", site.profile.name)
    };

    tracing::info!(
        language = %site.language,
        base_path = %site.base_path,
        galleries = site.galleries.len(),
        "Starting '{}'",
        title
    );

    context::init(
        site,
        LaunchOptions {
            suspend_animations: args.suspend_animations,
            initial_gallery: args.gallery,
        },
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
