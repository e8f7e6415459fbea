//! Shader header generator library
//!
//! Embeds every GLSL source under a directory into one C++ header, each file
//! becoming a `static const char*` string literal whose version directive is
//! replaced by a fixed GLSL ES preamble.

pub mod config;
pub mod discover;
pub mod error;
pub mod model;
pub mod render;
pub mod transform;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use config::{GeneratorConfig, Overrides};
pub use error::{GenError, Result};
pub use model::{GeneratedDeclaration, OutputDocument, ShaderFile};

/// Create the output directory and any missing parents.
///
/// Another build step may create the same directory concurrently; losing that
/// race surfaces as `AlreadyExists` and is ignored as long as a directory is
/// what now exists at `output_dir`.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        return Ok(());
    }

    match std::fs::create_dir_all(output_dir) {
        Ok(()) => {
            tracing::debug!("Created output directory {}", output_dir.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && output_dir.is_dir() => {
            tracing::debug!("Output directory {} created concurrently", output_dir.display());
            Ok(())
        }
        Err(source) => Err(GenError::DirectoryCreate {
            path: output_dir.to_path_buf(),
            source,
        }),
    }
}

/// Fail if two shaders would produce the same declaration name.
///
/// Runs before any shader is read so a collision never reaches the header.
pub fn check_unique_names(shaders: &[ShaderFile], suffix: &str) -> Result<()> {
    let mut seen: HashMap<String, &Path> = HashMap::with_capacity(shaders.len());

    for shader in shaders {
        let name = transform::declaration_name(&shader.filename, suffix);
        if let Some(first) = seen.get(name.as_str()) {
            return Err(GenError::DuplicateDeclarationName {
                name,
                first: first.to_path_buf(),
                second: shader.path.clone(),
            });
        }
        seen.insert(name, &shader.path);
    }

    Ok(())
}

/// Transform discovered shaders into a document, preserving their order
pub fn build_document(shaders: &[ShaderFile], config: &GeneratorConfig) -> Result<OutputDocument> {
    check_unique_names(shaders, &config.suffix)?;

    let declarations = shaders
        .iter()
        .map(|shader| transform::transform(shader, &config.preamble, &config.suffix))
        .collect::<Result<Vec<_>>>()?;

    Ok(OutputDocument {
        namespace: config.namespace.clone(),
        declarations,
    })
}

/// Discover, transform and render the header without touching the output
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    let shaders = discover::discover(&config.source_dir, config.sort)?;
    let document = build_document(&shaders, config)?;
    render::render_document(&document)
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub declarations: usize,
}

/// Generate the header and overwrite the output file
pub fn run(config: &GeneratorConfig) -> Result<RunReport> {
    let shaders = discover::discover(&config.source_dir, config.sort)?;
    tracing::info!(
        "Found {} shader file(s) in {}",
        shaders.len(),
        config.source_dir.display()
    );

    ensure_output_dir(&config.output_dir)?;

    let document = build_document(&shaders, config)?;
    let header = render::render_document(&document)?;

    let output_path = config.output_path();
    std::fs::write(&output_path, header).map_err(|source| GenError::FileWrite {
        path: output_path.clone(),
        source,
    })?;

    tracing::info!(
        "Wrote {} declaration(s) to {}",
        document.declarations.len(),
        output_path.display()
    );

    Ok(RunReport {
        output_path,
        declarations: document.declarations.len(),
    })
}

/// Check whether the header on disk matches what would be generated.
///
/// A missing header counts as out of sync.
pub fn check(config: &GeneratorConfig) -> Result<bool> {
    let fresh = generate(config)?;
    let output_path = config.output_path();

    let existing = match std::fs::read_to_string(&output_path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("Generated header missing: {}", output_path.display());
            return Ok(false);
        }
        Err(source) => {
            return Err(GenError::FileRead {
                path: output_path,
                source,
            });
        }
    };

    let in_sync = fresh == existing;
    if in_sync {
        tracing::info!("Generated header in sync: {}", output_path.display());
    } else {
        tracing::info!("Generated header out of sync: {}", output_path.display());
    }
    Ok(in_sync)
}

/// Discovered shaders paired with their declaration names, in output order
pub fn list(config: &GeneratorConfig) -> Result<Vec<(ShaderFile, String)>> {
    let shaders = discover::discover(&config.source_dir, config.sort)?;
    check_unique_names(&shaders, &config.suffix)?;

    Ok(shaders
        .into_iter()
        .map(|shader| {
            let name = transform::declaration_name(&shader.filename, &config.suffix);
            (shader, name)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_for(root: &Path) -> GeneratorConfig {
        GeneratorConfig {
            source_dir: root.join("glsl"),
            output_dir: root.join("temp"),
            sort: true,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = ensure_output_dir(&blocker.join("temp")).unwrap_err();
        assert!(matches!(err, GenError::DirectoryCreate { .. }));
    }

    #[test]
    fn test_ensure_output_dir_path_is_file() {
        let dir = tempdir().unwrap();
        let occupied = dir.path().join("temp");
        std::fs::write(&occupied, "").unwrap();

        let err = ensure_output_dir(&occupied).unwrap_err();
        match err {
            GenError::DirectoryCreate { path, .. } => assert_eq!(path, occupied),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_output_dir_is_file() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("quad.vert"), "#version 330\nvoid main() {}\n")
            .unwrap();
        std::fs::write(&config.output_dir, "").unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, GenError::DirectoryCreate { .. }));
    }

    #[test]
    fn test_run_write_failure() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("quad.vert"), "#version 330\nvoid main() {}\n")
            .unwrap();

        // A directory already sits where the header should go
        std::fs::create_dir_all(config.output_path()).unwrap();

        let err = run(&config).unwrap_err();
        match err {
            GenError::FileWrite { path, .. } => assert_eq!(path, config.output_path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let shaders = vec![
            ShaderFile::new("glsl/a/pbr.frag", "pbr.frag"),
            ShaderFile::new("glsl/b/pbr.frag", "pbr.frag"),
        ];

        let err = check_unique_names(&shaders, "_c_str").unwrap_err();
        match err {
            GenError::DuplicateDeclarationName { name, first, second } => {
                assert_eq!(name, "pbr_frag_c_str");
                assert_eq!(first, PathBuf::from("glsl/a/pbr.frag"));
                assert_eq!(second, PathBuf::from("glsl/b/pbr.frag"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dot_and_underscore_collide() {
        let shaders = vec![
            ShaderFile::new("pbr.frag", "pbr.frag"),
            ShaderFile::new("pbr_frag", "pbr_frag"),
        ];
        assert!(check_unique_names(&shaders, "_c_str").is_err());
    }

    #[test]
    fn test_run_writes_header() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        std::fs::write(
            config.source_dir.join("basic.frag.glsl"),
            "#version 300 es\nvoid main() {\n  gl_FragColor = vec4(1.0);\n}\n",
        )
        .unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.declarations, 1);
        assert_eq!(report.output_path, dir.path().join("temp/shaders.generated.h"));

        let header = std::fs::read_to_string(&report.output_path).unwrap();
        assert!(header.contains("static const char* basic_frag_glsl_c_str =\n"));
        assert!(header.contains("\t\"  gl_FragColor = vec4(1.0);\\n\"\\\n"));
    }

    #[test]
    fn test_malformed_file_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("short.vert"), "#version 330\n").unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, GenError::MalformedShaderFile { .. }));
        assert!(!config.output_path().exists());
    }

    #[test]
    fn test_check_detects_drift() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        let shader = config.source_dir.join("quad.vert");
        std::fs::write(&shader, "#version 330\nvoid main() {}\n").unwrap();

        assert!(!check(&config).unwrap());

        run(&config).unwrap();
        assert!(check(&config).unwrap());

        std::fs::write(&shader, "#version 330\nvoid main() { }\n").unwrap();
        assert!(!check(&config).unwrap());
    }

    #[test]
    fn test_list_pairs_names() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        std::fs::write(config.source_dir.join("cubemap.vert"), "").unwrap();
        std::fs::write(config.source_dir.join("brdf.frag"), "").unwrap();

        let names: Vec<_> = list(&config)
            .unwrap()
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names, vec!["brdf_frag_c_str", "cubemap_vert_c_str"]);
    }
}
