//! Output document model for c_cpp_properties.json

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::defines::{COMPILER_ARGS, DEFINES};
use crate::error::Result;

/// Schema version understood by the consuming editor.
pub const FORMAT_VERSION: u32 = 4;

const CONFIGURATION_NAME: &str = "Arduino";
const INTELLISENSE_MODE: &str = "gcc-x86";
const C_STANDARD: &str = "gnu11";
const CPP_STANDARD: &str = "gnu++11";

/// Top-level c_cpp_properties.json document.
#[derive(Debug, Serialize)]
pub struct PropertiesFile {
    pub version: u32,
    pub configurations: Vec<Configuration>,
}

/// One named configuration block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub name: String,
    /// Full path of the cross-compiler executable
    pub compiler_path: String,
    pub compiler_args: Vec<String>,
    pub intelli_sense_mode: String,
    /// Directories searched when resolving #include directives
    pub include_path: Vec<String>,
    /// Headers injected into every translation unit
    pub forced_include: Vec<String>,
    pub c_standard: String,
    pub cpp_standard: String,
    pub defines: Vec<String>,
}

impl PropertiesFile {
    /// Assemble the document from the resolved paths plus the static
    /// flag/define tables.
    pub fn new(compiler: PathBuf, include_path: Vec<String>, forced_header: PathBuf) -> Self {
        let configuration = Configuration {
            name: CONFIGURATION_NAME.to_string(),
            compiler_path: compiler.to_string_lossy().into_owned(),
            compiler_args: COMPILER_ARGS.iter().map(|s| s.to_string()).collect(),
            intelli_sense_mode: INTELLISENSE_MODE.to_string(),
            include_path,
            forced_include: vec![forced_header.to_string_lossy().into_owned()],
            c_standard: C_STANDARD.to_string(),
            cpp_standard: CPP_STANDARD.to_string(),
            defines: DEFINES.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            version: FORMAT_VERSION,
            configurations: vec![configuration],
        }
    }

    /// Serialize to indented JSON and write `path`, replacing any
    /// existing content.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
