use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use storefront::core::config::{CliOverrides, load_config, resolve};
use storefront::tui;

#[derive(Parser)]
#[command(
    name = "storefront",
    about = "Browse a product catalog or look up where you are"
)]
struct Args {
    /// Base URL of the product catalog API
    #[arg(long, value_name = "URL")]
    catalog_url: Option<String>,

    /// Location provider: "ip" or "fixed"
    #[arg(long, value_name = "PROVIDER")]
    location: Option<String>,

    /// Answer the location permission prompt with "denied"
    #[arg(long)]
    deny_location: bool,

    /// Log level written to storefront.log (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger first so config loading is logged too; the
    // configured level is applied once the config is resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("storefront.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            eprintln!("storefront: {e}");
            std::process::exit(1);
        }
    };

    let config = resolve(
        &file_config,
        &CliOverrides {
            catalog_url: args.catalog_url,
            location: args.location,
            deny_location: args.deny_location,
            log_level: args.log_level,
        },
    );
    log::set_max_level(config.log_filter());

    log::info!(
        "Storefront starting up: catalog={}, location={:?}, permission={:?}",
        config.catalog_base_url,
        config.location_source,
        config.permission
    );

    tui::run(config)
}
