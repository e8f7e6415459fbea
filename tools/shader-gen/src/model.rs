//! Intermediate representation for generated shader headers

use std::path::PathBuf;

/// Single shader source discovered under the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFile {
    pub path: PathBuf,
    /// Base name including every extension, e.g. `pbr.frag`
    pub filename: String,
}

impl ShaderFile {
    pub fn new(path: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
        }
    }
}

/// One `static const char*` definition in the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    pub name: String,
    /// Preamble lines followed by the shader's lines after the version directive
    pub lines: Vec<String>,
}

/// The generated header as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub namespace: String,
    /// Declarations in discovery order
    pub declarations: Vec<GeneratedDeclaration>,
}
