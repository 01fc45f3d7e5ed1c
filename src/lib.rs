// src/lib.rs

pub mod export;
pub mod extract;
pub mod fetch;
pub mod scrape;
