// src/scrape/mod.rs
//
// Orchestration: which pages to visit, which tables to take from them, and
// in what order the results land in each dataset.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use scraper::Html;
use tracing::info;

use crate::export::Dataset;
use crate::extract::tables::{ARTICLE_TABLE, COLLAPSIBLE_TABLE_1};
use crate::extract::{extract_rows, find_data_table, pick_table, TableIndex};
use crate::fetch;

/// Series with current-format pages, in output order.
pub static SERIES_LIST: &[u32] = &[2, 3, 5, 6, 9, 10, 12, 13];

pub static NEW_FORMAT_HEADERS: &[&str] =
    &["Series", "Episode", "AirDate", "Chaser", "Contribution", "Result"];

pub static OLD_FORMAT_HEADERS: &[&str] = &[
    "Series", "Episode", "AirDate", "Chaser", "P1", "P2", "P3", "P4", "Result",
];

/// Where each legacy series lives on the compiled page: selector plus
/// position among its matches. Positional against live wiki content, so
/// validate against a fixture snapshot before trusting a change here.
pub static LEGACY_PICKS: &[(&str, &str, TableIndex)] = &[
    ("7", COLLAPSIBLE_TABLE_1, TableIndex::FromStart(1)),
    ("8", COLLAPSIBLE_TABLE_1, TableIndex::FromStart(2)),
    ("11", ARTICLE_TABLE, TableIndex::FromEnd(2)),
];

/// Rows from one current-format page: locate its data table, extract with
/// `label` injected.
pub fn new_format_page_rows(doc: &Html, label: &str) -> Result<Vec<Vec<String>>> {
    let table = find_data_table(doc)?;
    Ok(extract_rows(table, label))
}

/// Rows from the compiled legacy page, in `LEGACY_PICKS` order.
pub fn old_format_rows(doc: &Html) -> Result<Vec<Vec<String>>> {
    let mut out = Vec::new();
    for &(label, css, index) in LEGACY_PICKS {
        let table = pick_table(doc, css, index)
            .with_context(|| format!("locating legacy table for series {}", label))?;
        out.extend(extract_rows(table, label));
    }
    Ok(out)
}

/// Dataset A: one current-format page per series, visited in list order.
pub fn scrape_new_format(client: &Client) -> Result<Dataset> {
    let mut dataset = Dataset::new(NEW_FORMAT_HEADERS);
    for &series in SERIES_LIST {
        let url = fetch::series_page_url(series);
        let body = fetch::page_text(client, &url)
            .with_context(|| format!("fetching series {} page", series))?;
        let doc = Html::parse_document(&body);
        let rows = new_format_page_rows(&doc, &series.to_string())
            .with_context(|| format!("extracting series {} from {}", series, url))?;
        info!(series, rows = rows.len(), "scraped series page");
        dataset.append(rows);
    }
    Ok(dataset)
}

/// Dataset B: the compiled page, fetched once, with three legacy tables
/// picked out of it.
pub fn scrape_old_format(client: &Client) -> Result<Dataset> {
    let body = fetch::page_text(client, fetch::COMPILED_PAGE_URL)
        .context("fetching compiled legacy page")?;
    let doc = Html::parse_document(&body);
    let rows = old_format_rows(&doc).context("extracting legacy tables")?;
    info!(rows = rows.len(), "scraped compiled page");

    let mut dataset = Dataset::new(OLD_FORMAT_HEADERS);
    dataset.append(rows);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compiled-page stand-in with three collapsibleTable1 tables and three
    // article-tables, shaped like the real legacy layouts.
    static COMPILED_FIXTURE: &str = r#"<html><body>
        <table id="collapsibleTable1"><tr><td>s1e1</td></tr></table>
        <table id="collapsibleTable1"><tr><td>s7e1</td></tr><tr><td>s7e2</td></tr></table>
        <table id="collapsibleTable1"><tr><td>s8e1</td></tr></table>
        <table class="article-table"><tr><td>s10e1</td></tr></table>
        <table class="article-table"><tr><td>s11e1</td></tr></table>
        <table class="article-table"><tr><td>s12e1</td></tr></table>
    </body></html>"#;

    #[test]
    fn legacy_groups_come_out_in_pick_order() {
        let doc = Html::parse_document(COMPILED_FIXTURE);
        let rows = old_format_rows(&doc).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(labels, vec!["7", "7", "8", "11"]);
        assert_eq!(rows[0][1], "s7e1");
        assert_eq!(rows[3][1], "s11e1");
    }

    #[test]
    fn legacy_pick_failure_names_the_series() {
        let doc = Html::parse_document("<html><body><p>empty</p></body></html>");
        let err = old_format_rows(&doc).unwrap_err();
        assert!(err.to_string().contains("series 7"));
    }

    #[test]
    fn new_format_rows_carry_the_series_label() {
        let doc = Html::parse_document(
            r#"<html><body><table class="article-table">
                <tr><th>Episode</th></tr>
                <tr><td>1</td><td>Win</td></tr>
            </table></body></html>"#,
        );
        let rows = new_format_page_rows(&doc, "9").unwrap();
        assert_eq!(rows, vec![vec!["9", "1", "Win"]]);
    }

    #[test]
    fn new_format_without_a_table_is_fatal() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(new_format_page_rows(&doc, "9").is_err());
    }

    #[test]
    fn series_list_is_the_fixed_publication_order() {
        assert_eq!(SERIES_LIST, &[2, 3, 5, 6, 9, 10, 12, 13]);
        let legacy: Vec<&str> = LEGACY_PICKS.iter().map(|p| p.0).collect();
        assert_eq!(legacy, vec!["7", "8", "11"]);
    }
}
