//! Wizard command - launches the interactive terminal walkthrough

use anyhow::Result;

use super::catalog::resolve_catalog;
use super::WizardArgs;
use crate::config::Config;
use crate::tui::run_wizard;

pub fn execute(args: WizardArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let catalog = resolve_catalog(args.catalog.or_else(|| config.catalog.clone()))?;
    run_wizard(catalog, config.export)
}
