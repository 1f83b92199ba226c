//! Plain-text formatting of a rendered document, used by the TUI
//! preview pane and `export --stdout`.

use super::document::{Document, Field, NOT_PROVIDED, NO_ITEMS};

pub fn to_text(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push('\n');
    out.push_str(&"=".repeat(doc.title.chars().count()));
    out.push_str("\n\n");

    out.push_str("Pre-Course Check-in\n-------------------\n");
    for field in &doc.check_in {
        push_field(&mut out, field);
    }

    out.push_str("\nPlan\n----\n");
    for group in &doc.plan {
        out.push_str(&format!("{}:\n", group.cadence.heading()));
        if group.entries.is_empty() {
            out.push_str(&format!("  ({})\n", NO_ITEMS));
        } else {
            for entry in &group.entries {
                out.push_str(&format!(
                    "  - {} ({} · {})\n",
                    entry.title, entry.activity, entry.kind
                ));
                if !entry.description.is_empty() {
                    out.push_str(&format!("    {}\n", entry.description));
                }
            }
        }
    }

    out.push_str("\nV/P/S Notes\n-----------\n");
    for field in &doc.vps {
        push_field(&mut out, field);
    }

    out
}

fn push_field(out: &mut String, field: &Field) {
    let value = field.value.as_deref().unwrap_or(NOT_PROVIDED);
    out.push_str(&format!("{}: {}\n", field.label, value));
}
