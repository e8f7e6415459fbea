//! Error types for shader header generation

use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GenError>;

/// Every failure aborts the run; nothing is retried or cleaned up.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Shader source tree does not exist
    #[error("shader source directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Traversal failed below the source root
    #[error("failed to walk shader directory {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Output directory could not be created
    #[error("failed to create output directory {}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered shader could not be read as UTF-8 text
    #[error("failed to read shader file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Shader has no line after the version directive
    #[error(
        "malformed shader file {}: expected a version line followed by source, found {lines} line(s)",
        .path.display()
    )]
    MalformedShaderFile { path: PathBuf, lines: usize },

    /// Two files map to the same declaration name
    #[error(
        "duplicate declaration name `{name}` derived from {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateDeclarationName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Generated header could not be written
    #[error("failed to write generated header {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header text could not be formatted
    #[error("failed to render generated header")]
    Render(#[from] std::fmt::Error),

    /// Config file could not be read or parsed
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_file() {
        let err = GenError::MalformedShaderFile {
            path: PathBuf::from("shaders/empty.frag"),
            lines: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("shaders/empty.frag"));
        assert!(msg.contains("found 1 line(s)"));
    }

    #[test]
    fn test_io_source_is_chained() {
        use std::error::Error;

        let err = GenError::FileWrite {
            path: PathBuf::from("out/shaders.generated.h"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
