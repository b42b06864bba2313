//! Forma CLI entry point

mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use config::FormaConfig;
use forma_css::generate_all_css;
use forma_spec::registry;
use forma_theme::TokenTables;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "forma", version, about = "Design-token component compiler")]
struct Cli {
    /// Path to forma.toml
    #[arg(short, long, global = true, default_value = "forma.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit component stylesheets plus the theme variable sheet
    Emit {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit only the named components
        #[arg(long)]
        only: Vec<String>,
    },
    /// List registered components with their variants and sizes
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = FormaConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Emit { out, only } => emit(&config, out, &only),
        Command::List => {
            list();
            Ok(())
        }
    }
}

fn emit(config: &FormaConfig, out: Option<PathBuf>, only: &[String]) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| PathBuf::from(&config.emit.output));

    let mut specs = registry();
    if !only.is_empty() {
        specs.retain(|spec| only.iter().any(|name| name == spec.name));
        if specs.is_empty() {
            bail!("no registered component matches {:?}", only);
        }
    }

    let tables = if config.tokens.is_empty() {
        TokenTables::builtin().clone()
    } else {
        config.tokens.apply(TokenTables::builtin())
    };

    let files = generate_all_css(&specs, &tables, &out_dir)?;

    let mut warnings = 0usize;
    for file in &files {
        for diag in file.diagnostics.iter() {
            warnings += 1;
            tracing::warn!(path = %file.path.display(), %diag, "emission diagnostic");
        }
    }

    println!(
        "Generated {} file(s) in {} ({} warning(s))",
        files.len(),
        out_dir.display(),
        warnings
    );
    Ok(())
}

fn list() {
    for spec in registry() {
        let variants: Vec<&str> = spec.variants.keys().copied().collect();
        let sizes: Vec<&str> = spec.sizes.keys().copied().collect();
        println!(
            "{} <{}>\n  variants: {} (default: {})\n  sizes:    {} (default: {})",
            spec.name,
            spec.element,
            variants.join(", "),
            spec.default_variant,
            sizes.join(", "),
            spec.default_size,
        );
    }
}
