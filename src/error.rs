//! Error types for the untable library.

use std::io;
use thiserror::Error;

/// Result type alias for untable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a payload.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload claims a format but fails structural parsing.
    #[error("{format} payload cannot be read ({detail})")]
    Unreadable {
        /// Format the payload was dispatched as (e.g. "xlsx", "docx").
        format: &'static str,
        /// Message from the underlying decoder.
        detail: String,
    },

    /// The payload is not a readable archive in any supported container format.
    #[error("archive cannot be read ({0})")]
    ArchiveUnreadable(String),

    /// Archive nesting exceeded the configured maximum depth.
    #[error("archive nesting depth {depth} exceeds the maximum of {max}")]
    ArchiveTooDeep {
        /// Depth at which the walk stopped.
        depth: usize,
        /// Configured maximum depth.
        max: usize,
    },

    /// Neither the declared content type nor the path extension maps to an extractor.
    #[error("no extractor found (declared type {declared_type:?}, extension {extension:?})")]
    UnsupportedFormat {
        /// Content type declared by the document node.
        declared_type: String,
        /// Lowercase path extension, empty if there was none.
        extension: String,
    },

    /// The node was never fully captured upstream; its declared type is an
    /// error marker rather than a content type.
    #[error("document node was never captured upstream (declared type {declared_type:?})")]
    UnprocessedNode {
        /// The marker string found in the node's declared type.
        declared_type: String,
    },

    /// The node id is on the configured denylist of known-bad records.
    #[error("node {id} is denylisted for manual processing")]
    Denylisted {
        /// The denylisted node id.
        id: i64,
    },

    /// The node carries neither a binary nor a text payload to extract from.
    #[error("document node has no payload to extract from")]
    MissingPayload,

    /// Failure reported by an external document store implementation.
    #[error("store error: {0}")]
    Store(String),

    /// A per-document failure annotated with the owning node's identity, for
    /// batch-failure bookkeeping by the caller.
    #[error("node {id} ({path}): {source}")]
    Node {
        /// Id of the document node that failed.
        id: i64,
        /// Store path of the document node.
        path: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an underlying decoder error at a format boundary.
    pub(crate) fn unreadable(format: &'static str, detail: impl std::fmt::Display) -> Self {
        Error::Unreadable {
            format,
            detail: detail.to_string(),
        }
    }

    /// Attach node identity to a per-document failure.
    pub(crate) fn for_node(self, id: i64, path: impl Into<String>) -> Self {
        Error::Node {
            id,
            path: path.into(),
            source: Box::new(self),
        }
    }
}
