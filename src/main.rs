use anyhow::Result;
use chasescrape::{export, fetch, scrape};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

static NEW_FORMAT_PATH: &str = "data/newformat_chase.csv";
static OLD_FORMAT_PATH: &str = "data/oldformat_chase.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let client = fetch::build_client()?;

    // ─── 2) current-format series pages ──────────────────────────────
    let new_format = scrape::scrape_new_format(&client)?;
    export::write_csv(&new_format, NEW_FORMAT_PATH)?;

    // ─── 3) compiled legacy page ─────────────────────────────────────
    let old_format = scrape::scrape_old_format(&client)?;
    export::write_csv(&old_format, OLD_FORMAT_PATH)?;

    info!("all done");
    Ok(())
}
