use std::path::PathBuf;

use clap::Parser;
use kworb_scraping::chart::parser::{self, MissingChangePolicy};
use kworb_scraping::chart::schema::ChartSnapshot;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
    #[arg(long, value_enum, default_value = "empty")]
    missing_change: MissingChangePolicy,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);

    let result = parser::parse(&html, opts.missing_change)?;
    let serialized = serde_json::to_string_pretty(&result)?;
    println!("{serialized}");
    let deserialized: ChartSnapshot = serde_json::from_str(&serialized)?;

    assert_eq!(result, deserialized);

    Ok(())
}
