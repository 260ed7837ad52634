// src/cli.rs
use std::{fs, path::PathBuf, time::Duration};

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::{
    config::CrawlOptions,
    document::Document,
    progress::TracingProgress,
    scrape,
};

/// Crawl the BIS research listing and print new publications as JSON.
#[derive(Debug, Parser)]
#[command(name = "bis_scrape", version)]
pub struct Args {
    /// Stop after collecting this many documents.
    #[arg(short = 'n', long)]
    pub max_documents: Option<usize>,

    /// Listing pages to visit.
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Seconds to wait between listing pages.
    #[arg(long)]
    pub delay: Option<u64>,

    /// Only keep publications dated after this day (YYYY-MM-DD).
    #[arg(long, value_parser = parse_day)]
    pub since: Option<NaiveDate>,

    /// Override the site host (e.g. a local mirror).
    #[arg(long)]
    pub host: Option<String>,

    /// JSON file holding the newest document of the previous run.
    #[arg(long)]
    pub last_document: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

fn parse_day(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{s}: {e}"))
}

impl Args {
    pub fn to_options(&self) -> Result<CrawlOptions> {
        let mut opts = CrawlOptions::default();
        if let Some(host) = &self.host {
            opts = opts.with_host(host.as_str());
        }
        if let Some(n) = self.max_documents {
            opts = opts.with_max_documents(n);
        }
        if let Some(p) = self.max_pages {
            opts = opts.with_max_pages(p);
        }
        if let Some(secs) = self.delay {
            opts = opts.with_page_delay(Duration::from_secs(secs));
        }
        if let Some(day) = self.since {
            opts = opts.with_start_date(day);
        }
        if let Some(path) = &self.last_document {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            let doc: Document = serde_json::from_str(&text)
                .wrap_err_with(|| format!("parsing {}", path.display()))?;
            opts = opts.with_last_document(doc);
        }
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let opts = args.to_options()?;
    let mut progress = TracingProgress::default();
    let docs = scrape::collect_documents(opts, &mut progress)?;

    let json = serde_json::to_string_pretty(&docs)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json).wrap_err_with(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} documents to {}", docs.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
