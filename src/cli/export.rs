//! CLI handler for the `export` subcommand: render a saved session
//! snapshot without entering the wizard.

use anyhow::{Context, Result};

use super::ExportArgs;
use crate::config::Config;
use crate::export::sink::{open_print_view, save_document};
use crate::export::{render, text};
use crate::session::Session;

pub fn execute(args: ExportArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;

    let content = std::fs::read_to_string(&args.session)
        .with_context(|| format!("Failed to read session from {}", args.session.display()))?;
    let session: Session = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse session from {}", args.session.display()))?;

    let title = args.title.as_deref().unwrap_or(&config.export.title);
    let doc = render(&session, title);

    if args.stdout {
        print!("{}", text::to_text(&doc));
    } else {
        let out = args.out.unwrap_or(config.export.filename);
        save_document(&doc, &out)?;
        println!("Wrote {}", out.display());
    }

    if args.print {
        if open_print_view(&doc) {
            println!("Opened print view");
        } else {
            println!("Print view could not be opened");
        }
    }

    Ok(())
}
