//! CLI argument surface and command dispatch for the `sprig` binary.

pub mod present;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;
use thiserror::Error;

use sprig_codegen::{ClassifyOptions, ComponentKind, GenerateOptions, MarkupGenerator};
use sprig_fetch::DesignSource;

/// Convert design trees into `@sprig/ui` component markup.
#[derive(Debug, Parser)]
#[command(name = "sprig", version, about)]
pub struct Cli {
    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate component markup from a design document.
    Generate(GenerateArgs),
    /// List the supported component kinds.
    Components,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to a captured simplified-document JSON file.
    #[arg(long, conflicts_with = "key")]
    pub file: Option<PathBuf>,

    /// Design file key to fetch from the design source.
    #[arg(long)]
    pub key: Option<String>,

    /// Design source base URL.
    #[arg(long, default_value = "https://design-source.sprig.dev")]
    pub base_url: String,

    /// Access token for the design source.
    #[arg(long)]
    pub token: Option<String>,

    /// Write the combined output to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip the stylesheet block.
    #[arg(long)]
    pub no_styles: bool,

    /// Skip per-fragment comments naming widget kind and source node.
    #[arg(long)]
    pub no_debug_comments: bool,

    /// Emit the design tool's raw node identifiers as element ids.
    #[arg(long)]
    pub raw_ids: bool,

    /// Skip the import-suggestion comment.
    #[arg(long)]
    pub no_imports: bool,

    /// Do not wrap the output in an outer container element.
    #[arg(long)]
    pub no_wrap: bool,

    /// Render INSTANCE nodes as generic markup instead of Button mappings.
    #[arg(long)]
    pub keep_instances: bool,
}

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fetch(#[from] sprig_fetch::FetchError),

    #[error(transparent)]
    Codegen(#[from] sprig_codegen::CodegenError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

/// Run one CLI invocation.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Components => {
            for kind in ComponentKind::ALL {
                println!("{:<16} {}", kind.name(), kind.class_name());
            }
            Ok(())
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let doc = match (&args.file, &args.key) {
        (Some(path), _) => sprig_fetch::load_document(path)?,
        (None, Some(key)) => {
            let mut source = DesignSource::new(args.base_url.as_str());
            if let Some(token) = &args.token {
                source = source.with_token(token.as_str());
            }
            source.fetch_document(key)?
        }
        (None, None) => {
            return Err(CliError::Usage(
                "pass --file <path> or --key <file-key>".to_string(),
            ))
        }
    };

    info!(
        "generating markup for {} top-level nodes",
        doc.nodes.len()
    );

    let options = GenerateOptions {
        include_styles: !args.no_styles,
        debug_comments: !args.no_debug_comments,
        normalize_ids: !args.raw_ids,
        import_suggestions: !args.no_imports,
        wrap_root: !args.no_wrap,
        classify: ClassifyOptions {
            instance_as_button: !args.keep_instances,
        },
    };

    let generator = MarkupGenerator::new(options)?;
    let result = generator.generate(&doc)?;
    let output = present::combine(&result);

    match &args.out {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{output}"),
    }
    Ok(())
}
