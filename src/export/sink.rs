//! The two external sinks for a rendered document: a word-processor
//! compatible file on disk and a browser print view. Neither is allowed
//! to take the core down; a sink that cannot open is abandoned.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};
use uuid::Uuid;

use super::document::Document;
use super::html::{to_html, to_print_html};
use crate::error::ExportError;
use crate::session::Session;

/// Write the document as a word-processor openable file (HTML content
/// behind a `.doc` name, as word processors accept).
pub fn save_document(doc: &Document, path: &Path) -> Result<(), ExportError> {
    fs::write(path, to_html(doc)).map_err(|e| ExportError::WriteDocument {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Wrote document to {}", path.display());
    Ok(())
}

/// Persist a session snapshot as pretty JSON so it can be reloaded or
/// fed to the `export` subcommand later.
pub fn save_session(session: &Session, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json).map_err(|e| ExportError::WriteDocument {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Saved session to {}", path.display());
    Ok(())
}

/// Open a print view: write a self-printing HTML page to the system temp
/// directory and hand it to the platform opener. Returns whether the
/// surface was opened; failure is logged and swallowed.
pub fn open_print_view(doc: &Document) -> bool {
    let Some(path) = write_print_file(doc) else {
        return false;
    };
    if launch_opener(&path) {
        true
    } else {
        warn!("No opener could display {}", path.display());
        false
    }
}

fn write_print_file(doc: &Document) -> Option<PathBuf> {
    let path = std::env::temp_dir().join(format!("smorg-print-{}.html", Uuid::new_v4()));
    match fs::write(&path, to_print_html(doc)) {
        Ok(()) => Some(path),
        Err(e) => {
            warn!("Failed to write print view {}: {}", path.display(), e);
            None
        }
    }
}

fn launch_opener(path: &Path) -> bool {
    let commands: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("open", &[])]
    } else if cfg!(target_os = "windows") {
        &[("cmd", &["/C", "start", ""])]
    } else {
        &[("xdg-open", &[])]
    };

    for (cmd, args) in commands {
        let spawned = Command::new(cmd)
            .args(*args)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if spawned.is_ok() {
            return true;
        }
    }
    false
}
