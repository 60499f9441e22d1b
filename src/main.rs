use champdex::core::config::{self, ChampdexConfig, CliOverrides};
use champdex::tui;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "champdex", about = "Browse the League of Legends champion catalog")]
struct Args {
    /// Catalog host (defaults to the public Data Dragon CDN)
    #[arg(long)]
    base_url: Option<String>,

    /// Catalog locale, e.g. en_US or pt_BR
    #[arg(short, long)]
    locale: Option<String>,

    /// Log level written to champdex.log
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: stdout belongs to the terminal UI. Started before the
    // config load so its messages land in the log; the logger itself passes
    // everything and the global max level does the filtering.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("champdex.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(config::bootstrap_log_level(args.log_level.as_deref()));

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        ChampdexConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            base_url: args.base_url.as_deref(),
            locale: args.locale.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "champdex starting up (catalog {} / {})",
        resolved.base_url,
        resolved.locale
    );

    tui::run(resolved)
}
