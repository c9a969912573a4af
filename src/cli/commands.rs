use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "essential-feed")]
#[command(about = "Load a remote JSON feed of image items")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed once and print its items
    Load {
        /// Feed URL (defaults to FEED_URL)
        #[arg(short, long)]
        url: Option<String>,

        /// Print items as a JSON array
        #[arg(long)]
        json: bool,
    },
}
