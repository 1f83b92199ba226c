pub mod catalog;
pub mod export;
pub mod schema;
pub mod wizard;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smorg")]
#[command(
    author,
    version,
    about = "Guided terminal planner for building a smorgasbord of engagement rhythms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive five-step wizard
    Wizard(WizardArgs),

    /// List catalog items, optionally filtered
    Catalog(CatalogArgs),

    /// Render a saved session snapshot into the export document
    Export(ExportArgs),

    /// Print JSON Schema for catalog file validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct WizardArgs {
    /// Path to config file
    #[arg(short, long, default_value = "smorg.yaml")]
    pub config: PathBuf,

    /// Replacement catalog file (overrides config and the built-in set)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct CatalogArgs {
    /// Path to config file
    #[arg(short, long, default_value = "smorg.yaml")]
    pub config: PathBuf,

    /// Replacement catalog file (overrides config and the built-in set)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Free-text query over title, description, and contributor
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Only this cadence (daily, weekly, monthly, semester, yearly)
    #[arg(long)]
    pub cadence: Option<String>,

    /// Only this engagement kind (prayer, study, hospitality, ...)
    #[arg(long)]
    pub kind: Option<String>,

    /// Emit matching items as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct ExportArgs {
    /// Session snapshot JSON (written by the wizard's :save command)
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,

    /// Path to config file
    #[arg(short, long, default_value = "smorg.yaml")]
    pub config: PathBuf,

    /// Output document path (default: export.filename from config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,

    /// Print the plain-text rendering to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Also open the print view after rendering
    #[arg(long)]
    pub print: bool,
}
