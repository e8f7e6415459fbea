//! Shader source discovery

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{GenError, Result};
use crate::model::ShaderFile;

/// Collect every file below `source_dir`, whatever its extension.
///
/// Files are returned in traversal order. With `sort` set, entries within
/// each directory are visited by file name so the result does not depend on
/// the filesystem's directory order.
pub fn discover(source_dir: &Path, sort: bool) -> Result<Vec<ShaderFile>> {
    let mut walker = WalkDir::new(source_dir).follow_links(false);
    if sort {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(source_dir, e))?;

        // `Path::is_file` follows symlinks, so linked shader files are kept
        if !entry.path().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        tracing::debug!("Found shader {}", entry.path().display());
        files.push(ShaderFile::new(entry.path(), filename));
    }

    Ok(files)
}

fn walk_error(source_dir: &Path, err: walkdir::Error) -> GenError {
    let missing_root = err.depth() == 0
        && err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);

    if missing_root {
        GenError::DirectoryNotFound(source_dir.to_path_buf())
    } else {
        GenError::Walk {
            path: source_dir.to_path_buf(),
            source: err,
        }
    }
}
