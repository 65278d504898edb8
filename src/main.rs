use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use taskboard::core::Board;
use taskboard::core::config;
use taskboard::tui;
use taskboard::tui::theme::Theme;

#[derive(Parser)]
#[command(name = "taskboard", about = "Three-column task board for the terminal")]
struct Args {
    /// Config file (default: ~/.taskboard/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with no items, ignoring configured ones
    #[arg(long)]
    empty: bool,

    /// Print the starting board as plain text and exit
    #[arg(long)]
    dump: bool,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let (file_config, source) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("taskboard: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.log_file.as_deref(), args.empty);

    // Initialize file logger - stdout belongs to the board
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &source {
        config::ConfigSource::Defaults(_) => log::warn!("{source}"),
        _ => log::info!("{source}"),
    }
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }

    log::info!(
        "Taskboard starting with {} seed items (log level {})",
        resolved.seed.len(),
        resolved.log_level
    );

    let board = Board::new(&resolved.titles, resolved.seed);

    if args.dump {
        print!("{}", board.view());
        return Ok(());
    }

    tui::run(board, Theme::from_colors(&resolved.theme))
}
