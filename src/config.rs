//! CLI surface and board selection

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Name of the generated configuration file, fixed by convention.
pub const OUTPUT_FILE: &str = "c_cpp_properties.json";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "arduino-cpp-props")]
#[command(about = "Generate c_cpp_properties.json for Arduino ESP32/ESP8266 sketches")]
#[command(version)]
pub struct Args {
    /// Board family to generate the configuration for (esp32 or esp8266)
    pub board: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file path (defaults to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Supported board families. Each has its own SDK tree, cross-compiler
/// and core headers under the Arduino15 packages directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Esp32,
    Esp8266,
}

impl Board {
    /// Directory-name marker of this family ("esp32" / "esp8266").
    pub fn family(self) -> &'static str {
        match self {
            Board::Esp32 => "esp32",
            Board::Esp8266 => "esp8266",
        }
    }

    /// The family whose core tree must not leak into this board's
    /// include paths.
    pub fn other(self) -> Board {
        match self {
            Board::Esp32 => Board::Esp8266,
            Board::Esp8266 => Board::Esp32,
        }
    }
}

impl FromStr for Board {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "esp32" => Ok(Board::Esp32),
            "esp8266" => Ok(Board::Esp8266),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family())
    }
}
