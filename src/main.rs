use anyhow::Result;
use clap::Parser;

use folio::cli::Args;
use folio::config::SiteConfig;

fn main() -> Result<()> {
    folio::logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading site config");
            SiteConfig::load(path)?
        }
        None => {
            tracing::info!("no --config given; using built-in site content");
            SiteConfig::builtin()?
        }
    };

    folio::app::run(config, &args.prefs)
}
