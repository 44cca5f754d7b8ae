use clap::Parser;
use safar::Language;
use safar::core::config::{self, CliOverrides, SafarConfig};
use safar::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "safar", about = "Terminal travel planner")]
struct Args {
    /// Interface language
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Tab to open on startup (home, planner, trips, profile, destinations)
    #[arg(short, long)]
    tab: Option<String>,

    /// Disable screen transitions
    #[arg(long)]
    no_animations: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to safar.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("safar.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("safar: {e}; using default settings");
        log::warn!("Config load failed: {}", e);
        SafarConfig::default()
    });

    let cli = CliOverrides {
        language: args.lang,
        start_tab: args.tab,
        no_animations: args.no_animations,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Safar starting up (language: {}, start tab: {})",
        resolved.language.code(),
        resolved.start_tab
    );

    tui::run(resolved)
}
