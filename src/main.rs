use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use kworb_scraping::api;
use kworb_scraping::chart;
use kworb_scraping::chart::parser::MissingChangePolicy;
use kworb_scraping::config::{ApiKey, Config, EnrichMode, EnrichmentConfig};
use kworb_scraping::enrich::{enrich_records, EnrichOptions};
use kworb_scraping::fs_json_util::write_json_pretty;
use kworb_scraping::youtube::api::YouTubeClient;
use kworb_scraping::youtube::scrape::ScrapeLookup;
use log::info;
use reqwest::Url;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    /// Where to write the snapshot (overwritten every run)
    #[arg(default_value = "youtube_vn_daily.json")]
    output_path: PathBuf,
    #[arg(long, default_value = chart::CHART_URL)]
    chart_url: Url,
    /// Skip the per-record video lookup entirely
    #[arg(long)]
    no_enrich: bool,
    /// Fill in only the watch link, without the details lookup
    #[arg(long)]
    no_details: bool,
    /// How to look up videos: the Data API (needs YOUTUBE_API_KEY) or the
    /// keyless results-page scrape
    #[arg(long, value_enum, default_value = "api")]
    strategy: Strategy,
    /// Fallback for a missing streams-change cell
    #[arg(long, value_enum, default_value = "empty")]
    missing_change: MissingChangePolicy,
    /// Pause between consecutive video lookups, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Clone, ValueEnum)]
enum Strategy {
    Api,
    Scrape,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let enrichment = if opts.no_enrich {
        None
    } else {
        let mode = match opts.strategy {
            Strategy::Api => EnrichMode::Api {
                api_key: ApiKey::from_env()?,
                fetch_details: !opts.no_details,
            },
            Strategy::Scrape => EnrichMode::Scrape,
        };
        Some(EnrichmentConfig {
            mode,
            delay: Duration::from_millis(opts.delay_ms),
        })
    };
    let config = Config {
        chart_url: opts.chart_url,
        output_path: opts.output_path,
        missing_change: opts.missing_change,
        enrichment,
    };
    run(config).await
}

async fn run(config: Config) -> anyhow::Result<()> {
    let client = api::reqwest_client()?;
    info!("Fetching {}", config.chart_url);
    let page = api::fetch_chart(&client, &config.chart_url).await?;

    let document = Html::parse_document(&page.body);
    let mut snapshot = chart::parser::parse(&document, config.missing_change)?;
    snapshot.fetched_at = page.fetched_at;
    info!(
        "Parsed {} records (chart date: {})",
        snapshot.records.len(),
        snapshot.chart_date
    );

    if let Some(enrichment) = &config.enrichment {
        match &enrichment.mode {
            EnrichMode::Api {
                api_key,
                fetch_details,
            } => {
                let lookup = YouTubeClient::new(client.clone(), api_key.clone());
                let options = EnrichOptions {
                    fetch_details: *fetch_details,
                    delay: enrichment.delay,
                };
                enrich_records(&lookup, &mut snapshot.records, &options).await;
            }
            EnrichMode::Scrape => {
                let lookup = ScrapeLookup::new(client.clone());
                let options = EnrichOptions {
                    fetch_details: false,
                    delay: enrichment.delay,
                };
                enrich_records(&lookup, &mut snapshot.records, &options).await;
            }
        }
    }

    write_json_pretty(&config.output_path, &snapshot)?;
    info!("Successfully saved data to {:?}.", config.output_path);
    Ok(())
}
