//! Resolution of the fixed Arduino install locations
//!
//! Everything is probed once from the user's home directory; the result is
//! an immutable value passed to the later stages. Missing locations are
//! tolerated and surface as `None`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Board;
use crate::toolchain;

/// Resolved install locations under the user's home directory.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    /// `<home>/AppData/Local/Arduino15`, the toolchain root.
    pub arduino_root: Option<PathBuf>,
    /// `<arduino_root>/packages/esp32`
    pub esp32_root: Option<PathBuf>,
    /// `<arduino_root>/packages/esp8266`
    pub esp8266_root: Option<PathBuf>,
    /// `<arduino_root>/packages/arduino/tools/avr-gcc/<ver>/avr/include/avr`
    pub avr_include: Option<PathBuf>,
    /// Sketch-library folder, preferring the OneDrive-synced documents.
    pub library_root: PathBuf,
}

impl InstallPaths {
    /// Probe the conventional install locations once.
    pub fn resolve(home: &Path) -> Self {
        let arduino_root = existing(home.join("AppData").join("Local").join("Arduino15"));

        let (esp32_root, esp8266_root, avr_include) = match &arduino_root {
            Some(root) => {
                let packages = root.join("packages");
                (
                    existing(packages.join("esp32")),
                    existing(packages.join("esp8266")),
                    resolve_avr_include(&packages),
                )
            }
            None => (None, None, None),
        };

        let library_root = if home.join("OneDrive").join("Documents").exists() {
            home.join("OneDrive").join("Documents").join("Arduino").join("libraries")
        } else {
            home.join("Documents").join("Arduino").join("libraries")
        };

        let paths = Self {
            arduino_root,
            esp32_root,
            esp8266_root,
            avr_include,
            library_root,
        };
        debug!("Resolved install paths: {:?}", paths);
        paths
    }

    /// SDK root of the selected board family.
    pub fn sdk_root(&self, board: Board) -> Option<&Path> {
        match board {
            Board::Esp32 => self.esp32_root.as_deref(),
            Board::Esp8266 => self.esp8266_root.as_deref(),
        }
    }

    /// Root of the family that must stay out of the include paths.
    pub fn ignored_root(&self, board: Board) -> Option<&Path> {
        self.sdk_root(board.other())
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

fn resolve_avr_include(packages: &Path) -> Option<PathBuf> {
    let avr_gcc = packages.join("arduino").join("tools").join("avr-gcc");
    let version = toolchain::newest_entry(&avr_gcc)?;
    Some(avr_gcc.join(version).join("avr").join("include").join("avr"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_bare_home() {
        let home = TempDir::new().unwrap();
        let paths = InstallPaths::resolve(home.path());

        assert!(paths.arduino_root.is_none());
        assert!(paths.esp32_root.is_none());
        assert!(paths.esp8266_root.is_none());
        assert!(paths.avr_include.is_none());
        assert_eq!(
            paths.library_root,
            home.path().join("Documents/Arduino/libraries")
        );
    }

    #[test]
    fn test_resolve_installed_families() {
        let home = TempDir::new().unwrap();
        let packages = home.path().join("AppData/Local/Arduino15/packages");
        fs::create_dir_all(packages.join("esp32")).unwrap();

        let paths = InstallPaths::resolve(home.path());
        assert!(paths.arduino_root.is_some());
        assert_eq!(paths.esp32_root.as_deref(), Some(packages.join("esp32").as_path()));
        assert!(paths.esp8266_root.is_none());
    }

    #[test]
    fn test_resolve_prefers_onedrive_documents() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("OneDrive/Documents")).unwrap();
        fs::create_dir_all(home.path().join("Documents")).unwrap();

        let paths = InstallPaths::resolve(home.path());
        assert_eq!(
            paths.library_root,
            home.path().join("OneDrive/Documents/Arduino/libraries")
        );
    }

    #[test]
    fn test_resolve_avr_include_newest_version() {
        let home = TempDir::new().unwrap();
        let avr_gcc = home
            .path()
            .join("AppData/Local/Arduino15/packages/arduino/tools/avr-gcc");
        fs::create_dir_all(avr_gcc.join("5.4.0-atmel3.6.1-arduino2")).unwrap();
        fs::create_dir_all(avr_gcc.join("7.3.0-atmel3.6.1-arduino7")).unwrap();

        let paths = InstallPaths::resolve(home.path());
        assert_eq!(
            paths.avr_include.unwrap(),
            avr_gcc.join("7.3.0-atmel3.6.1-arduino7/avr/include/avr")
        );
    }

    #[test]
    fn test_sdk_and_ignored_roots() {
        let home = TempDir::new().unwrap();
        let packages = home.path().join("AppData/Local/Arduino15/packages");
        fs::create_dir_all(packages.join("esp32")).unwrap();
        fs::create_dir_all(packages.join("esp8266")).unwrap();

        let paths = InstallPaths::resolve(home.path());
        assert_eq!(
            paths.sdk_root(Board::Esp32),
            Some(packages.join("esp32").as_path())
        );
        assert_eq!(
            paths.ignored_root(Board::Esp32),
            Some(packages.join("esp8266").as_path())
        );
        assert_eq!(
            paths.ignored_root(Board::Esp8266),
            Some(packages.join("esp32").as_path())
        );
    }
}
