//! HTML formatting of a rendered document. One body builder feeds both
//! the downloadable word-processor file and the print view; the print
//! variant only adds the onload print trigger.

use super::document::{Document, Field, NOT_PROVIDED, NO_ITEMS};

const STYLE: &str = "body{font-family:system-ui,Segoe UI,Arial,Helvetica,sans-serif;\
line-height:1.4;padding:24px} h1{margin:0 0 8px} h2{margin:18px 0 8px} \
h3{margin:12px 0 6px} ul{margin:6px 0 14px}";

/// Standalone HTML suitable for the download sink (word-processor
/// compatible) and the inline preview.
pub fn to_html(doc: &Document) -> String {
    wrap_page(doc, "")
}

/// Same page with a script that triggers printing once loaded.
pub fn to_print_html(doc: &Document) -> String {
    wrap_page(doc, "<script>window.onload=()=>window.print()</script>")
}

fn wrap_page(doc: &Document, extra: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>\
         <style>{}</style></head><body>{}</body>{}</html>",
        escape(&doc.title),
        STYLE,
        body(doc),
        extra
    )
}

fn body(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h1>{}</h1>", escape(&doc.title)));

    out.push_str("<h2>Pre-Course Check-in</h2>");
    for field in &doc.check_in {
        push_field(&mut out, field);
    }

    out.push_str("<h2>Plan</h2>");
    for group in &doc.plan {
        out.push_str(&format!("<h3>{}</h3>", group.cadence.heading()));
        if group.entries.is_empty() {
            out.push_str(&format!("<p><i>{}</i></p>", NO_ITEMS));
        } else {
            out.push_str("<ul>");
            for entry in &group.entries {
                out.push_str(&format!(
                    "<li><b>{}</b> <i>({} · {})</i><br/><span>{}</span></li>",
                    escape(&entry.title),
                    entry.activity,
                    entry.kind,
                    escape(&entry.description)
                ));
            }
            out.push_str("</ul>");
        }
    }

    out.push_str("<h2>V/P/S Notes</h2>");
    for field in &doc.vps {
        push_field(&mut out, field);
    }

    out
}

fn push_field(out: &mut String, field: &Field) {
    match &field.value {
        Some(value) => out.push_str(&format!(
            "<p><b>{}:</b> {}</p>",
            field.label,
            escape(value)
        )),
        None => out.push_str(&format!(
            "<p><b>{}:</b> <i>{}</i></p>",
            field.label, NOT_PROVIDED
        )),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
