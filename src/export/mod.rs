//! Export pipeline: session snapshot → structured document → per-sink
//! formatting (preview, download, print).

pub mod document;
pub mod html;
pub mod sink;
pub mod text;

pub use document::{render, Document};
