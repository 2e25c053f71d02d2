use clap::Parser;
use dashhead::SourceKind;
use dashhead::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "dashhead", about = "Dashboard shell with an animated search header")]
struct Args {
    /// Where to load the project collection from
    #[arg(short, long, value_enum)]
    source: Option<SourceKind>,

    /// Route to open on startup (e.g. /projects or /projects/3)
    #[arg(short, long)]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to dashhead.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("dashhead.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::DashConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.source, args.route.as_deref());

    log::info!(
        "Dashhead starting up with source: {:?}, route: {}",
        resolved.source,
        resolved.initial_route
    );

    dashhead::tui::run(resolved)
}
