//! Directory discovery and include-path filtering
//!
//! Library folders are assumed shallow and are listed one level deep;
//! board-family SDK trees (any path containing "esp32" or "esp8266") are
//! walked recursively.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Synthetic first include entry covering the sketch workspace itself.
pub const WORKSPACE_GLOB: &str = "${workspaceFolder}/**";

/// Recursive-wildcard marker the editor expects on each include entry.
const RECURSIVE_SUFFIX: &str = "\\**";

/// Any path containing one of these (case-insensitive) is irrelevant to
/// ESP code intelligence: test/example trees, VCS metadata and cores for
/// other architectures.
const DENY_KEYWORDS: &[&str] = &[
    "test", "tests", "example", "examples", "git", "tmp", "avr", "extras", "samd", "amebad",
    "rp2040",
];

const FAMILY_MARKERS: &[&str] = &["esp32", "esp8266"];

/// Append every immediate subdirectory of `root` to `dirs`, recursing when
/// `root` belongs to a board-family tree. Entries are visited in name
/// order so repeated runs produce identical listings. Unreadable
/// directories are skipped.
pub fn discover_dirs(root: &Path, dirs: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(root) {
        Ok(e) => e,
        Err(_) => return,
    };

    let root_text = root.to_string_lossy();
    let recurse = FAMILY_MARKERS.iter().any(|m| root_text.contains(m));

    let mut children: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    children.sort();

    for child in children {
        dirs.push(child.clone());
        if recurse {
            discover_dirs(&child, dirs);
        }
    }
}

/// Turn discovered directories into the editor's include-path list.
///
/// Denylisted paths and paths under the other board family's root are
/// dropped; the workspace glob always comes first; every surviving path is
/// suffixed with the recursive wildcard. Discovery order is preserved.
pub fn build_include_paths(dirs: &[PathBuf], ignored_root: Option<&Path>) -> Vec<String> {
    let ignored = ignored_root.map(|p| p.to_string_lossy().into_owned());

    let mut include_paths = vec![WORKSPACE_GLOB.to_string()];

    for dir in dirs {
        let text = dir.to_string_lossy();
        let lower = text.to_lowercase();

        if DENY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            debug!("Dropping denylisted path {}", text);
            continue;
        }
        if let Some(ignored) = &ignored {
            if text.contains(ignored.as_str()) {
                debug!("Dropping other-family path {}", text);
                continue;
            }
        }

        include_paths.push(format!("{}{}", text, RECURSIVE_SUFFIX));
    }

    include_paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_glob_always_first() {
        let paths = build_include_paths(&[PathBuf::from("/opt/libs/Foo")], None);
        assert_eq!(paths[0], WORKSPACE_GLOB);

        let empty = build_include_paths(&[], None);
        assert_eq!(empty, vec![WORKSPACE_GLOB.to_string()]);
    }

    #[test]
    fn test_denylist_drops_keyword_paths() {
        let dirs = vec![
            PathBuf::from("/opt/libs/Foo"),
            PathBuf::from("/opt/libs/FooTest"),
            PathBuf::from("/opt/libs/Bar/examples"),
            PathBuf::from("/opt/libs/.git"),
            PathBuf::from("/opt/libs/rp2040-core"),
        ];
        let paths = build_include_paths(&dirs, None);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], "/opt/libs/Foo\\**");
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        let dirs = vec![
            PathBuf::from("/opt/libs/UnitTESTS"),
            PathBuf::from("/opt/libs/AmebaD_core"),
            PathBuf::from("/opt/libs/Examples"),
        ];
        let paths = build_include_paths(&dirs, None);
        assert_eq!(paths, vec![WORKSPACE_GLOB.to_string()]);
    }

    #[test]
    fn test_other_family_root_excluded() {
        let dirs = vec![
            PathBuf::from("/arduino/packages/esp32/hardware/esp32/2.0.11/cores"),
            PathBuf::from("/arduino/packages/esp8266/hardware/esp8266/3.1.2/cores"),
        ];
        let paths = build_include_paths(&dirs, Some(Path::new("/arduino/packages/esp8266")));
        assert_eq!(paths.len(), 2);
        assert!(paths[1].starts_with("/arduino/packages/esp32"));
    }

    #[test]
    fn test_missing_other_family_excludes_nothing() {
        let dirs = vec![PathBuf::from("/opt/libs/Foo")];
        let paths = build_include_paths(&dirs, None);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_recursive_suffix_appended() {
        let paths = build_include_paths(&[PathBuf::from("/opt/libs/Servo")], None);
        assert_eq!(paths[1], "/opt/libs/Servo\\**");
    }

    #[test]
    fn test_discover_library_root_is_shallow() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Servo/src")).unwrap();
        fs::create_dir_all(tmp.path().join("Wire")).unwrap();

        let mut dirs = Vec::new();
        discover_dirs(tmp.path(), &mut dirs);

        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Servo", "Wire"]);
    }

    #[test]
    fn test_discover_family_tree_is_recursive() {
        let tmp = TempDir::new().unwrap();
        let sdk = tmp.path().join("esp32");
        fs::create_dir_all(sdk.join("cores/esp32/libb")).unwrap();
        fs::create_dir_all(sdk.join("variants")).unwrap();

        let mut dirs = Vec::new();
        discover_dirs(&sdk, &mut dirs);

        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.strip_prefix(&sdk).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cores", "cores/esp32", "cores/esp32/libb", "variants"]);
    }

    #[test]
    fn test_discover_missing_root_is_noop() {
        let mut dirs = Vec::new();
        discover_dirs(Path::new("/nonexistent_dir_xyz"), &mut dirs);
        assert!(dirs.is_empty());
    }
}
