use anyhow::Context;
use clap::{Parser, Subcommand};

use openparking_core::Datasource;
use openparking_herrenberg::Herrenberg;

#[derive(Debug, Parser)]
#[command(name = "openparking-cli")]
#[command(about = "OpenParking connector command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered datasources.
    Sources,
    /// Fetch a datasource and print its canonical data point as JSON.
    Fetch {
        /// Datasource slug, e.g. "herrenberg".
        slug: String,
        /// Override the feed URL (useful against a local fixture server).
        #[arg(long, env = "OPENPARKING_FEED_URL")]
        feed_url: Option<String>,
        /// HTTP timeout for the feed request.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sources => {
            use openparking_herrenberg::client;
            println!("{}  {}  {}", client::SLUG, client::NAME, client::INFO_URL);
        }
        Commands::Fetch {
            slug,
            feed_url,
            timeout_secs,
        } => {
            anyhow::ensure!(
                slug == openparking_herrenberg::client::SLUG,
                "unknown datasource \"{slug}\""
            );

            let source = match feed_url {
                Some(url) => Herrenberg::with_feed_url(timeout_secs, &url)?,
                None => Herrenberg::new(timeout_secs)?,
            };

            tracing::info!(slug = %slug, "fetching feed");
            let point = source.data().await.context("fetching data point")?;
            println!("{}", serde_json::to_string_pretty(&point)?);
        }
    }

    Ok(())
}
