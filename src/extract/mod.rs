// src/extract/mod.rs
//
// HTML table extraction: locating the data table on a page and turning its
// rows into cleaned string records.

pub mod rows;
pub mod tables;

pub use rows::extract_rows;
pub use tables::{find_data_table, pick_table, TableIndex};
