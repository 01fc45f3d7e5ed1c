// src/extract/rows.rs

use scraper::{ElementRef, Selector};

/// Characters stripped from cell text. The wiki pages carry no-break spaces
/// and a stray U+00C2 from a historical double-encoding of the same.
static CELL_DENYLIST: &[char] = &['\u{00a0}', '\u{00c2}'];

/// Normalize one cell: drop denylisted characters, then trim trailing
/// whitespace. Idempotent on already-clean text.
pub fn clean_cell(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !CELL_DENYLIST.contains(c)).collect();
    stripped.trim_end().to_string()
}

/// Extract every data row from one table node. Each emitted row starts with
/// `label`, followed by the cleaned text of each `<td>` in document order.
/// Rows without any `<td>` (header and separator rows) are dropped.
pub fn extract_rows(table: ElementRef<'_>, label: &str) -> Vec<Vec<String>> {
    let tr = Selector::parse("tr").expect("static CSS selector should be valid");
    let td = Selector::parse("td").expect("static CSS selector should be valid");

    let mut out = Vec::new();
    for table_row in table.select(&tr) {
        let mut row = vec![label.to_string()];
        for cell in table_row.select(&td) {
            row.push(clean_cell(&cell.text().collect::<String>()));
        }
        if row.len() == 1 {
            continue;
        }
        out.push(row);
    }
    out
}
