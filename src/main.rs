//! c_cpp_properties.json generator for Arduino ESP32/ESP8266 sketches

use std::path::Path;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use arduino_cpp_props::config::{Args, Board, OUTPUT_FILE};
use arduino_cpp_props::generator;
use arduino_cpp_props::install::InstallPaths;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let Ok(board) = args.board.parse::<Board>() else {
        println!("Invalid Input");
        std::process::exit(1);
    };

    // One-shot guard: an existing configuration is left untouched.
    if Path::new(OUTPUT_FILE).exists() {
        println!("All Well");
        return Ok(());
    }

    info!("Generating {} for board {}", OUTPUT_FILE, board);

    let home = dirs::home_dir().ok_or("could not determine the user's home directory")?;
    let paths = InstallPaths::resolve(&home);

    generator::generate_properties(&paths, board, Path::new(OUTPUT_FILE)).inspect_err(|e| {
        error!("Generation failed: {}", e);
    })?;

    Ok(())
}

fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    if let Some(log_file) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    debug!("Logging initialized with level: {}", args.log_level);
    Ok(())
}
