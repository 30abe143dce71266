//! Board core, version and cross-compiler resolution
//!
//! The Arduino15 layout keeps one directory entry per installed version.
//! When an install carries several, the lexicographically greatest name
//! wins and the losing candidates are logged.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Board;
use crate::error::{PropsError, Result};

/// Both ESP families ship an xtensa cross-compiler whose binary carries
/// this suffix.
const COMPILER_SUFFIX: &str = "-elf-gcc.exe";
const TOOL_MARKER: &str = "xtensa";

/// A board family's resolved core tree under `<sdk_root>/hardware`.
#[derive(Debug, Clone)]
pub struct BoardCore {
    /// `<sdk_root>/hardware/<board>`
    pub core_path: PathBuf,
    /// Name of the selected version directory, taken as authoritative.
    pub version: String,
}

impl BoardCore {
    /// The versioned core tree that gets scanned for include paths.
    pub fn version_dir(&self) -> PathBuf {
        self.core_path.join(&self.version)
    }

    /// The header injected into every translation unit.
    pub fn header_path(&self, board: Board) -> PathBuf {
        self.version_dir()
            .join("cores")
            .join(board.family())
            .join("Arduino.h")
    }
}

/// Select the lexicographically greatest entry of `dir` whose name
/// satisfies `pred`. `None` when the directory is unreadable or nothing
/// matches.
fn select_entry<F>(dir: &Path, pred: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let entries = fs::read_dir(dir).ok()?;
    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|n| pred(n))
        .collect();
    names.sort();
    if names.len() > 1 {
        warn!(
            "Multiple candidates under {}: {:?}, picking {}",
            dir.display(),
            names,
            names[names.len() - 1]
        );
    }
    names.pop()
}

/// Select the lexicographically greatest entry of `dir`.
pub fn newest_entry(dir: &Path) -> Option<String> {
    select_entry(dir, |_| true)
}

/// Resolve the board's core tree and version under `sdk_root`.
pub fn resolve_board_core(sdk_root: &Path, board: Board) -> Result<BoardCore> {
    let core_path = sdk_root.join("hardware").join(board.family());
    let version =
        newest_entry(&core_path).ok_or_else(|| PropsError::CoreNotFound(core_path.clone()))?;
    debug!("Resolved {} core version {}", board, version);
    Ok(BoardCore { core_path, version })
}

/// Locate the cross-compiler executable:
/// `<sdk_root>/tools/<xtensa-*>/<version>/bin/<*-elf-gcc.exe>`.
pub fn resolve_compiler(sdk_root: &Path) -> Result<PathBuf> {
    let tools_dir = sdk_root.join("tools");

    let tool = select_entry(&tools_dir, |n| n.contains(TOOL_MARKER)).ok_or_else(|| {
        PropsError::CompilerNotFound(format!(
            "no '{}' toolchain under {}",
            TOOL_MARKER,
            tools_dir.display()
        ))
    })?;
    let tool_dir = tools_dir.join(tool);

    let version = newest_entry(&tool_dir).ok_or_else(|| {
        PropsError::CompilerNotFound(format!("no version directory under {}", tool_dir.display()))
    })?;
    let bin_dir = tool_dir.join(version).join("bin");

    let binary = select_entry(&bin_dir, |n| n.ends_with(COMPILER_SUFFIX)).ok_or_else(|| {
        PropsError::CompilerNotFound(format!(
            "no '*{}' binary under {}",
            COMPILER_SUFFIX,
            bin_dir.display()
        ))
    })?;

    Ok(bin_dir.join(binary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_compiler_tree(sdk: &Path, tool: &str, version: &str, binary: &str) {
        let bin = sdk.join("tools").join(tool).join(version).join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join(binary), b"").unwrap();
    }

    #[test]
    fn test_resolve_compiler_single_install() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        make_compiler_tree(
            &sdk,
            "xtensa-esp32-elf-gcc",
            "gcc8_4_0-esp-2021r2-patch5",
            "xtensa-esp32-elf-gcc.exe",
        );

        let compiler = resolve_compiler(&sdk).unwrap();
        assert_eq!(
            compiler,
            sdk.join("tools/xtensa-esp32-elf-gcc/gcc8_4_0-esp-2021r2-patch5/bin/xtensa-esp32-elf-gcc.exe")
        );
    }

    #[test]
    fn test_resolve_compiler_ignores_non_xtensa_tools() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(sdk.join("tools/esptool_py/4.5.1")).unwrap();
        fs::create_dir_all(sdk.join("tools/mklittlefs/3.0.0")).unwrap();
        make_compiler_tree(&sdk, "xtensa-esp32-elf-gcc", "1.0", "xtensa-esp32-elf-gcc.exe");

        let compiler = resolve_compiler(&sdk).unwrap();
        assert!(compiler.to_string_lossy().contains("xtensa-esp32-elf-gcc"));
    }

    #[test]
    fn test_resolve_compiler_picks_greatest_version() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        make_compiler_tree(&sdk, "xtensa-esp32-elf-gcc", "gcc8_2_0", "xtensa-esp32-elf-gcc.exe");
        make_compiler_tree(&sdk, "xtensa-esp32-elf-gcc", "gcc8_4_0", "xtensa-esp32-elf-gcc.exe");

        let compiler = resolve_compiler(&sdk).unwrap();
        assert!(compiler.to_string_lossy().contains("gcc8_4_0"));
    }

    #[test]
    fn test_resolve_compiler_missing_tools() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(sdk.join("tools")).unwrap();

        let err = resolve_compiler(&sdk).unwrap_err();
        assert!(matches!(err, PropsError::CompilerNotFound(_)));
    }

    #[test]
    fn test_resolve_compiler_missing_binary() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(sdk.join("tools/xtensa-esp32-elf-gcc/1.0/bin")).unwrap();

        let err = resolve_compiler(&sdk).unwrap_err();
        assert!(matches!(err, PropsError::CompilerNotFound(_)));
    }

    #[test]
    fn test_resolve_board_core() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(sdk.join("hardware/esp32/2.0.11")).unwrap();

        let core = resolve_board_core(&sdk, Board::Esp32).unwrap();
        assert_eq!(core.version, "2.0.11");
        assert_eq!(
            core.header_path(Board::Esp32),
            sdk.join("hardware/esp32/2.0.11/cores/esp32/Arduino.h")
        );
    }

    #[test]
    fn test_resolve_board_core_picks_greatest_version() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp8266");
        fs::create_dir_all(sdk.join("hardware/esp8266/3.0.2")).unwrap();
        fs::create_dir_all(sdk.join("hardware/esp8266/3.1.2")).unwrap();

        let core = resolve_board_core(&sdk, Board::Esp8266).unwrap();
        assert_eq!(core.version, "3.1.2");
    }

    #[test]
    fn test_resolve_board_core_missing() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(&sdk).unwrap();

        let err = resolve_board_core(&sdk, Board::Esp32).unwrap_err();
        assert!(matches!(err, PropsError::CoreNotFound(_)));
    }

    #[test]
    fn test_newest_entry_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(newest_entry(tmp.path()).is_none());
        assert!(newest_entry(&tmp.path().join("missing")).is_none());
    }
}
