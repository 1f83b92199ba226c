//! CLI handler for the `catalog` subcommand: headless filtered listing.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use super::CatalogArgs;
use crate::catalog::{filter, Cadence, Catalog, EngagementKind, FilterSpec};
use crate::config::Config;

pub fn execute(args: CatalogArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let catalog = resolve_catalog(args.catalog.or(config.catalog))?;

    let spec = FilterSpec {
        query: args.query,
        cadence: args
            .cadence
            .as_deref()
            .map(|raw| raw.parse::<Cadence>().map_err(|e| anyhow!(e)))
            .transpose()?,
        kind: args
            .kind
            .as_deref()
            .map(|raw| raw.parse::<EngagementKind>().map_err(|e| anyhow!(e)))
            .transpose()?,
    };

    let matched = filter(&catalog.items, &spec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    for item in &matched {
        println!(
            "{:<18} {:<10} {:<12} {} [{}]",
            item.id, item.cadence, item.kind, item.title, item.contributor
        );
    }
    println!("{} of {} items", matched.len(), catalog.items.len());
    Ok(())
}

/// Load the replacement catalog if one was named, else the built-in set.
pub fn resolve_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(&path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}
