//! Table extraction module.

mod archive;
mod docx;
mod grid;
mod html;
mod options;

pub use options::{ExtractOptions, DEFAULT_MAX_ARCHIVE_DEPTH, DEFAULT_MAX_CAPTION_LEN};

use crate::dispatch::{resolve_format, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::{DocumentNode, TableDescriptor, TableInfo};
use std::collections::HashMap;

/// Result of extracting one payload: the recovered tables plus, for archive
/// payloads, the per-entry failures absorbed during the walk. Non-archive
/// payloads always have an empty failure map.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Recovered tables, in document/entry-enumeration order.
    pub tables: Vec<TableInfo>,

    /// Archive entry name (slash-qualified for nested containers) to the
    /// failure message recorded for it.
    pub failures: HashMap<String, String>,
}

impl Extraction {
    fn from_tables(tables: Vec<TableInfo>) -> Self {
        Self {
            tables,
            failures: HashMap::new(),
        }
    }
}

/// Result of extracting one document node: tables carry the owning node's
/// identity.
#[derive(Debug, Clone, Default)]
pub struct NodeExtraction {
    /// Fully attributed table records.
    pub tables: Vec<TableDescriptor>,

    /// Per-entry failures, non-empty only for archive nodes.
    pub failures: HashMap<String, String>,
}

/// Extract table metadata from a raw payload dispatched as `format`.
///
/// HTML payloads are decoded as UTF-8, lossily; callers holding an already
/// decoded HTML string should go through [`extract_node`] instead.
pub fn extract_bytes(
    data: &[u8],
    format: DocumentFormat,
    options: &ExtractOptions,
) -> Result<Extraction> {
    match format {
        DocumentFormat::Xlsx => grid::extract_xlsx(data).map(Extraction::from_tables),
        DocumentFormat::Xls => grid::extract_xls(data).map(Extraction::from_tables),
        DocumentFormat::Docx => docx::extract_docx(data, options).map(Extraction::from_tables),
        DocumentFormat::Html => {
            let html = String::from_utf8_lossy(data);
            html::extract_html(&html, options).map(Extraction::from_tables)
        }
        DocumentFormat::Archive => archive::walk(data, options, 1),
    }
}

/// Extract table metadata from a document node.
///
/// Dispatches by the node's declared type and path extension, extracts, and
/// attributes every table to the node. Any failure is wrapped with the node
/// id and path so batch callers can record it and move on.
pub fn extract_node(node: &DocumentNode, options: &ExtractOptions) -> Result<NodeExtraction> {
    let extraction =
        extract_node_inner(node, options).map_err(|e| e.for_node(node.id, &node.path))?;
    Ok(NodeExtraction {
        tables: extraction
            .tables
            .into_iter()
            .map(|table| table.into_descriptor(node.id, &node.path))
            .collect(),
        failures: extraction.failures,
    })
}

fn extract_node_inner(node: &DocumentNode, options: &ExtractOptions) -> Result<Extraction> {
    let format = resolve_format(node, options)?;
    if format == DocumentFormat::Html {
        // Prefer the assembled HTML payload over the raw binary.
        if let Some(document) = &node.document {
            return html::extract_html(document, options).map(Extraction::from_tables);
        }
    }
    let file = node.file.as_deref().ok_or(Error::MissingPayload)?;
    extract_bytes(file, format, options)
}
