use anyhow::Context;
use clap::Parser;
use log::info;

use essential_feed::api::{RemoteFeedLoader, ReqwestHttpClient};
use essential_feed::cli::{Cli, Commands};
use essential_feed::config::Config;
use essential_feed::domain::{load_blocking, FeedItem};
use essential_feed::errors::FeederResult;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Load { url, json } => cmd_load(&config, url.as_deref(), json)?,
    }

    Ok(())
}

fn cmd_load(config: &Config, url: Option<&str>, json: bool) -> FeederResult<()> {
    let feed_url = config.feed_url(url)?;
    let client = ReqwestHttpClient::from_config(config)?;
    let loader = RemoteFeedLoader::new(feed_url, client);

    info!("Loading feed from {}", loader.url());
    let items = load_blocking(&loader)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("Feed is empty.");
        return Ok(());
    }

    println!("Loaded {} items:\n", items.len());
    for item in &items {
        print_item(item);
    }

    Ok(())
}

fn print_item(item: &FeedItem) {
    println!("  {}", item.id);
    println!("    Image: {}", item.image_url);
    if let Some(description) = &item.description {
        println!("    Description: {}", description);
    }
    if let Some(location) = &item.location {
        println!("    Location: {}", location);
    }
    println!();
}
