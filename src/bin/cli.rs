// src/bin/cli.rs
fn main() -> color_eyre::eyre::Result<()> {
    bis_scrape::cli::run()
}
