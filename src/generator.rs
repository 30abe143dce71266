//! Pipeline driving discovery, resolution and document assembly

use std::path::Path;

use tracing::{debug, info};

use crate::config::Board;
use crate::error::{PropsError, Result};
use crate::install::InstallPaths;
use crate::properties::PropertiesFile;
use crate::{scan, toolchain};

/// Generate the configuration document for `board` and write it to
/// `output`. Any resolution failure aborts before the file is touched.
pub fn generate_properties(paths: &InstallPaths, board: Board, output: &Path) -> Result<()> {
    let sdk_root = paths.sdk_root(board).ok_or_else(|| PropsError::SdkNotFound {
        board: board.to_string(),
    })?;

    let core = toolchain::resolve_board_core(sdk_root, board)?;
    info!("Using {} core version {}", board, core.version);

    let compiler = toolchain::resolve_compiler(sdk_root)?;
    debug!("Cross-compiler: {}", compiler.display());

    let mut dirs = Vec::new();
    scan::discover_dirs(&paths.library_root, &mut dirs);
    scan::discover_dirs(&core.version_dir(), &mut dirs);
    debug!("Discovered {} directories", dirs.len());

    let include_path = scan::build_include_paths(&dirs, paths.ignored_root(board));
    info!("Keeping {} include paths", include_path.len());

    let doc = PropertiesFile::new(compiler, include_path, core.header_path(board));
    doc.write_to(output)?;
    info!("Wrote {}", output.display());
    Ok(())
}
