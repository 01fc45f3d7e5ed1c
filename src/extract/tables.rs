// src/extract/tables.rs

use anyhow::{bail, Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Data tables on current-format series pages.
pub static ARTICLE_TABLE: &str = "table.article-table";

/// Fallback for series pages that use the collapsible layout instead.
pub static COLLAPSIBLE_TABLE_0: &str = "table#collapsibleTable0";

/// Collapsible tables on the compiled legacy page. Several tables share this
/// id, so callers pick one by position.
pub static COLLAPSIBLE_TABLE_1: &str = "table#collapsibleTable1";

/// Ordered search strategies for current-format pages. Tried in sequence;
/// the first selector that matches anything wins.
static TABLE_STRATEGIES: &[&str] = &[ARTICLE_TABLE, COLLAPSIBLE_TABLE_0];

/// Position of a table among all tables matching a selector.
///
/// `FromEnd(1)` is the last match, `FromEnd(2)` the second-to-last. The
/// legacy-page positions are load-bearing configuration; see the picks in
/// `scrape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIndex {
    FromStart(usize),
    FromEnd(usize),
}

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector should be valid")
}

/// Locate the single data table on a current-format page: try each strategy
/// in order, take the first table of the first strategy that matches.
pub fn find_data_table(doc: &Html) -> Result<ElementRef<'_>> {
    for css in TABLE_STRATEGIES {
        let selector = parse_selector(css);
        if let Some(table) = doc.select(&selector).next() {
            debug!(selector = css, "located data table");
            return Ok(table);
        }
    }
    bail!("no data table matched any of {:?}", TABLE_STRATEGIES)
}

/// Pick one table by selector and position. Fails if fewer tables match
/// than the position requires.
pub fn pick_table<'a>(doc: &'a Html, css: &str, index: TableIndex) -> Result<ElementRef<'a>> {
    let selector = parse_selector(css);
    let matches: Vec<ElementRef<'a>> = doc.select(&selector).collect();
    let slot = match index {
        TableIndex::FromStart(n) => Some(n),
        TableIndex::FromEnd(n) => matches.len().checked_sub(n),
    };
    slot.and_then(|n| matches.get(n).copied())
        .with_context(|| {
            format!(
                "wanted table {:?} of selector {:?} but only {} matched",
                index,
                css,
                matches.len()
            )
        })
}
