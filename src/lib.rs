//! # untable
//!
//! Table metadata extraction for Rust.
//!
//! This library recovers tabular metadata — inferred captions, dimensions,
//! measurement units, and table numbers — from spreadsheet (XLSX/XLS),
//! word-processor (DOCX), and HTML payloads, and walks nested archive
//! containers (ZIP, tar) to find documents inside them. Captions are not
//! modeled by any of these file formats; they are inferred from surrounding
//! paragraph and cell text with per-format heuristics.
//!
//! ## Quick Start
//!
//! ```
//! use untable::{extract_node, DocumentNode, ExtractOptions};
//!
//! fn main() -> untable::Result<()> {
//!     let node = DocumentNode {
//!         id: 1,
//!         node_type: "text/html".into(),
//!         path: "/pages/revenue.htm".into(),
//!         document: Some(
//!             "<h2>Таблица 1.2 Выручка (тыс. руб.)</h2>\
//!              <table><tr><td>10</td><td>20</td></tr></table>"
//!                 .into(),
//!         ),
//!         file: None,
//!     };
//!
//!     let result = extract_node(&node, &ExtractOptions::default())?;
//!     let table = &result.tables[0];
//!     assert_eq!(table.number.as_deref(), Some("1.2"));
//!     assert_eq!(table.unit.as_deref(), Some("тыс. руб."));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Caption inference**: grid, flow, and markup heuristics per format
//! - **Unit and number recovery**: parsed out of the inferred caption
//! - **Nested archives**: recursive walk with per-entry failure isolation
//!   and a depth guard
//! - **Format dispatch**: by declared content type with extension fallback

pub mod caption;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use dispatch::{resolve_format, DocumentFormat};
pub use error::{Error, Result};
pub use extract::{
    extract_bytes, extract_node, ExtractOptions, Extraction, NodeExtraction,
    DEFAULT_MAX_ARCHIVE_DEPTH, DEFAULT_MAX_CAPTION_LEN,
};
pub use model::{ArchiveEntry, DocumentNode, TableDescriptor, TableInfo};
pub use store::{fetch_and_extract, DocumentStore};
