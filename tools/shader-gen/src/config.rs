//! shader-gen.toml configuration
//!
//! Every key is optional; missing keys fall back to the layout the renderer
//! build expects:
//!
//! ```toml
//! source_dir = "data/shaders/glsl"
//! output_dir = "scripts/temp"
//! output_file = "shaders.generated.h"
//! preamble = ["#version 300 es", "precision highp float;", "precision highp int;"]
//! suffix = "_c_str"
//! namespace = "generated"
//! sort = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "shader-gen.toml";

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root of the shader source tree
    pub source_dir: PathBuf,
    /// Directory receiving the generated header (created if absent)
    pub output_dir: PathBuf,
    /// File name of the generated header
    pub output_file: String,
    /// Lines replacing each shader's version directive
    pub preamble: Vec<String>,
    /// Appended to every declaration name
    pub suffix: String,
    /// C++ namespace wrapping all declarations
    pub namespace: String,
    /// Sort directory entries by file name instead of using traversal order
    pub sort: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("data/shaders/glsl"),
            output_dir: PathBuf::from("scripts/temp"),
            output_file: "shaders.generated.h".to_string(),
            preamble: vec![
                "#version 300 es".to_string(),
                "precision highp float;".to_string(),
                "precision highp int;".to_string(),
            ],
            suffix: "_c_str".to_string(),
            namespace: "generated".to_string(),
            sort: false,
        }
    }
}

/// Values supplied on the command line, applied over the file config
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub output_file: Option<String>,
    pub sort: bool,
}

impl GeneratorConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|message| GenError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Resolve the effective config: an explicit file must exist, otherwise
    /// `shader-gen.toml` in the working directory is used when present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.source_dir {
            self.source_dir = dir;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(file) = overrides.output_file {
            self.output_file = file;
        }
        if overrides.sort {
            self.sort = true;
        }
        self
    }

    /// Full path of the generated header
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
