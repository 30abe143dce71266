//! Locate installed Arduino ESP32/ESP8266 toolchain components and emit a
//! c_cpp_properties.json editor configuration.

pub mod config;
pub mod defines;
pub mod error;
pub mod generator;
pub mod install;
pub mod properties;
pub mod scan;
pub mod toolchain;

pub use config::{Args, Board, OUTPUT_FILE};
pub use error::{PropsError, Result};
pub use install::InstallPaths;
