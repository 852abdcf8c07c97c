use anyhow::bail;
use chrono::NaiveDate;
use itertools::Itertools;
use log::warn;
use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::chart::schema::{ChartRecord, ChartSnapshot};
use crate::selector;

const DEFAULT_TITLE: &str = "YouTube Vietnam Daily Chart";
const FALLBACK_NOTE: &str = "Showing streams in the past two days.";

/// Fallback for a chart row whose streams-change cell is absent or blank.
/// The published documents used both conventions at different times; `Empty`
/// is the current one.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum MissingChangePolicy {
    #[default]
    Empty,
    Zero,
}

impl MissingChangePolicy {
    fn fallback(self) -> &'static str {
        match self {
            MissingChangePolicy::Empty => "",
            MissingChangePolicy::Zero => "0",
        }
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
#[error("chart table `#dailytable` was not found in the page")]
pub struct TableNotFound;

/// Parses the chart page into a snapshot with empty enrichment fields.
/// Everything about the title block degrades to fixed fallbacks; only a
/// missing data table is fatal.
pub fn parse(html: &Html, policy: MissingChangePolicy) -> anyhow::Result<ChartSnapshot> {
    let title_element = html.select(selector!("span.pagetitle")).next();
    let title = title_element
        .and_then(|span| span.select(selector!("strong")).next())
        .map(|strong| strong.text().collect::<String>().trim().to_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let chart_date = parse_chart_date(&title);
    let note = title_element
        .and_then(find_note)
        .unwrap_or_else(|| FALLBACK_NOTE.to_owned());

    let table = html
        .select(selector!("table#dailytable"))
        .next()
        .ok_or(TableNotFound)?;
    let records = table
        .select(selector!("tbody tr"))
        .enumerate()
        .filter_map(|(index, row)| match parse_row(row, policy) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping row {}: {e:#}", index + 1);
                None
            }
        })
        .collect_vec();

    Ok(ChartSnapshot::builder()
        .chart_date(chart_date)
        .note(note)
        .records(records)
        .build())
}

/// The date is the segment between the first and second hyphen of the title,
/// up to an optional ` | ...` suffix.  "2025/08/28" is rendered as
/// "28/08/2025"; anything else passes through untouched.
fn parse_chart_date(title: &str) -> String {
    let Some(token) = title.split('-').nth(1) else {
        return "Unknown".to_owned();
    };
    let token = token.split_once('|').map_or(token, |(before, _)| before);
    reformat_date(token.trim())
}

fn reformat_date(token: &str) -> String {
    match NaiveDate::parse_from_str(token, "%Y/%m/%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => token.to_owned(),
    }
}

/// The note is a bare text node somewhere after the title span, between `<br>`
/// tags.  Scanning the following text nodes for the "Showing" marker survives
/// markup shuffles that exact sibling positions would not.
fn find_note(title_element: ElementRef) -> Option<String> {
    title_element.next_siblings().find_map(|node| {
        let text = node.value().as_text()?.trim();
        text.contains("Showing").then(|| text.to_owned())
    })
}

fn parse_row(row: ElementRef, policy: MissingChangePolicy) -> anyhow::Result<ChartRecord> {
    let cells = row.select(selector!("td")).map(cell_text).collect_vec();
    let (position, position_change, track, streams) = match &cells[..] {
        [position, position_change, track, streams, ..] => {
            (position, position_change, track, streams)
        }
        _ => bail!("expected at least 4 cells, found {}", cells.len()),
    };
    let streams_change = match cells.get(4).map(String::as_str) {
        None | Some("") => policy.fallback().to_owned(),
        Some(value) => strip_commas(value),
    };
    Ok(ChartRecord::builder()
        .position(position.clone())
        .position_change(position_change.clone())
        .track(track.clone().into())
        .streams(strip_commas(streams))
        .streams_change(streams_change)
        .build())
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_owned()
}

fn strip_commas(value: &str) -> String {
    value.replace(',', "")
}
