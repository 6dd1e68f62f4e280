//! Format dispatch: choosing an extractor for a document node.

use crate::error::{Error, Result};
use crate::extract::ExtractOptions;
use crate::model::DocumentNode;

/// Supported document formats, each backed by one extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Modern spreadsheet container (grid extractor).
    Xlsx,
    /// Legacy spreadsheet container (grid extractor).
    Xls,
    /// Word-processor document (flow extractor).
    Docx,
    /// HTML document (markup extractor).
    Html,
    /// Archive container (recursive walker).
    Archive,
}

impl DocumentFormat {
    /// Resolve a declared content type to a format.
    ///
    /// HTML content types are matched by their `text/html` prefix so that
    /// any charset qualifier is accepted; the bare `htm` keyword some store
    /// records carry is accepted too.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type.starts_with("text/html") || content_type == "htm" {
            return Some(Self::Html);
        }
        match content_type {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Some(Self::Xlsx),
            "application/vnd.ms-excel" => Some(Self::Xls),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/zip" | "application/x-zip-compressed" => Some(Self::Archive),
            "application/x-tar" | "application/gzip" => Some(Self::Archive),
            _ => None,
        }
    }

    /// Resolve a lowercase file extension to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            "docx" => Some(Self::Docx),
            "htm" | "html" => Some(Self::Html),
            "zip" | "tar" | "tgz" | "gz" => Some(Self::Archive),
            _ => None,
        }
    }

    /// Short format tag used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Docx => "docx",
            Self::Html => "html",
            Self::Archive => "archive",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Choose the extraction format for a document node.
///
/// Order of precedence: the denylist, then the unprocessed-node markers,
/// then the declared content type, then the path extension. A node matching
/// none of these fails with [`Error::UnsupportedFormat`] carrying both
/// signals for diagnostics.
pub fn resolve_format(node: &DocumentNode, options: &ExtractOptions) -> Result<DocumentFormat> {
    if options.denylist.contains(&node.id) {
        return Err(Error::Denylisted { id: node.id });
    }
    if options.error_markers.contains(&node.node_type) {
        return Err(Error::UnprocessedNode {
            declared_type: node.node_type.clone(),
        });
    }
    if let Some(format) = DocumentFormat::from_content_type(&node.node_type) {
        return Ok(format);
    }
    let extension = node.extension();
    if let Some(format) = DocumentFormat::from_extension(&extension) {
        return Ok(format);
    }
    Err(Error::UnsupportedFormat {
        declared_type: node.node_type.clone(),
        extension,
    })
}
