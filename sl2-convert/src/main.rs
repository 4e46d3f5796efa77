use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use sl2_convert::{pipeline, ConvertConfig};

#[derive(Parser, Debug)]
#[command(
    name = "sl2-convert",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert Lowrance SL2 sonar logs to CSV",
    long_about = None,
)]
struct Cli {
    /// Путь к входному .sl2 файлу
    input: PathBuf,
    /// Путь к выходному .csv файлу
    output: PathBuf,
    /// Строка прогресса каждые N записей (0 — отключить)
    #[arg(long, default_value = "10000")]
    progress_every: u64,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let config = ConvertConfig {
        input_path: cli.input,
        output_path: cli.output,
        progress_every: cli.progress_every,
    };

    let summary = match pipeline::run(&config) {
        Ok(s) => s,
        Err(e) => {
            if e.is_header_error() {
                error!("Not a supported SL2 file: {e}");
            } else {
                error!("Conversion failed: {e}");
            }
            std::process::exit(1);
        }
    };

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Rows written    : {}", summary.rows);
    info!("  Bytes processed : {}", summary.bytes_processed);
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("✓ Conversion complete: {:?}", config.output_path);
}
