//! ThinkBlog - a minimal markdown blog for mdBook.

mod cli;
mod config;
mod generator;
mod logger;
mod manifest;
mod post;
mod serve;
mod utils;
mod viewer;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ViewArgs};
use config::SiteConfig;
use generator::generate_all;
use serve::serve_site;
use viewer::{DirFetcher, Document, Fetcher, HttpFetcher, Location, Markdown, Router, SiteMeta};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match cli.command() {
        Commands::Build => generate_all(&config),
        Commands::View(args) => {
            let html = view_site(&config, args)?;
            print!("{html}");
            Ok(())
        }
        Commands::Serve { .. } => serve_site(&config),
    }
}

/// Run the viewer once against a directory or http base and return the page.
fn view_site(config: &SiteConfig, args: ViewArgs) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let document = match args.from.clone() {
        Some(base) if base.starts_with("http://") || base.starts_with("https://") => {
            runtime.block_on(run_viewer(HttpFetcher::new(&base), config, args))
        }
        Some(dir) => runtime.block_on(run_viewer(
            DirFetcher::new(config.root.join(dir)),
            config,
            args,
        )),
        None => runtime.block_on(run_viewer(
            DirFetcher::new(&config.build.source),
            config,
            args,
        )),
    };

    Ok(document.to_html())
}

/// Start at `--post`, replay the navigation flags in order, then search.
async fn run_viewer<F: Fetcher>(fetcher: F, config: &SiteConfig, args: ViewArgs) -> Document {
    let location = args
        .post
        .as_deref()
        .map(Location::with_post)
        .unwrap_or_default();
    let markdown = if args.plain {
        Markdown::none()
    } else {
        Markdown::cmark()
    };

    let mut router = Router::new(
        fetcher,
        Document::new(&config.base.language),
        markdown,
        SiteMeta::from(config),
        location,
    );
    router.start().await;

    for slug in &args.then {
        router.navigate_to_post(slug).await;
    }
    for _ in 0..args.back {
        if !router.back().await {
            break;
        }
    }
    for _ in 0..args.forward {
        if !router.forward().await {
            break;
        }
    }
    if let Some(query) = &args.search {
        router.search(query);
    }
    router.into_surface()
}
