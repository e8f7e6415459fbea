//! shader-gen - embeds GLSL sources into a generated C++ header
//!
//! # Usage
//!
//! ```bash
//! # Regenerate scripts/temp/shaders.generated.h from data/shaders/glsl
//! shader-gen
//!
//! # Fail if the committed header is stale (CI)
//! shader-gen check
//!
//! # Show which declaration each shader produces
//! shader-gen list --source assets/glsl
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shader_gen::{GeneratorConfig, Overrides};

#[derive(Parser)]
#[command(name = "shader-gen")]
#[command(about = "Embed shader sources into a generated C++ header")]
#[command(version)]
struct Cli {
    /// Config file (default: shader-gen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Shader source directory
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// Directory for the generated header
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// File name of the generated header
    #[arg(short = 'f', long, global = true)]
    output_file: Option<String>,

    /// Visit directory entries in file-name order
    #[arg(long, global = true)]
    sort: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header (default)
    Generate,

    /// Check that the generated header is in sync with the shader sources
    Check,

    /// List discovered shaders and their declaration names
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = GeneratorConfig::resolve(cli.config.as_deref())
        .context("Failed to load generator config")?
        .with_overrides(Overrides {
            source_dir: cli.source,
            output_dir: cli.output_dir,
            output_file: cli.output_file,
            sort: cli.sort,
        });

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let report = shader_gen::run(&config).context("Shader header generation failed")?;
            println!(
                "✓ Generated {} ({} shaders)",
                report.output_path.display(),
                report.declarations
            );
        }
        Commands::Check => {
            let in_sync = shader_gen::check(&config).context("Failed to check shader header")?;
            if !in_sync {
                anyhow::bail!(
                    "{} is out of sync. Run 'shader-gen generate' to regenerate.",
                    config.output_path().display()
                );
            }
            println!("✓ {} is in sync", config.output_path().display());
        }
        Commands::List => {
            for (shader, name) in shader_gen::list(&config)? {
                println!("{}  {}", name, shader.path.display());
            }
        }
    }

    Ok(())
}
