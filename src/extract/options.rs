//! Extraction options and configuration.

use std::collections::HashSet;

/// Default maximum caption length in characters.
pub const DEFAULT_MAX_CAPTION_LEN: usize = 200;

/// Default maximum archive nesting depth.
pub const DEFAULT_MAX_ARCHIVE_DEPTH: usize = 10;

/// Options for table extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum caption length in characters. Longer reassembled captions
    /// fall back to the immediately preceding paragraph.
    pub max_caption_len: usize,

    /// Maximum archive nesting depth. Exceeding it fails the walk with
    /// [`Error::ArchiveTooDeep`](crate::Error::ArchiveTooDeep).
    pub max_archive_depth: usize,

    /// Declared-type markers for nodes that were never captured upstream.
    /// A node whose declared type is in this set fails dispatch with
    /// [`Error::UnprocessedNode`](crate::Error::UnprocessedNode).
    pub error_markers: HashSet<String>,

    /// Node ids of known-bad records to refuse outright.
    pub denylist: HashSet<i64>,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum caption length.
    pub fn with_max_caption_len(mut self, len: usize) -> Self {
        self.max_caption_len = len;
        self
    }

    /// Set the maximum archive nesting depth.
    pub fn with_max_archive_depth(mut self, depth: usize) -> Self {
        self.max_archive_depth = depth;
        self
    }

    /// Add one unprocessed-node marker.
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_markers.insert(marker.into());
        self
    }

    /// Replace the unprocessed-node marker set.
    pub fn with_error_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Denylist one node id.
    pub fn deny_node(mut self, id: i64) -> Self {
        self.denylist.insert(id);
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_caption_len: DEFAULT_MAX_CAPTION_LEN,
            max_archive_depth: DEFAULT_MAX_ARCHIVE_DEPTH,
            error_markers: HashSet::new(),
            denylist: HashSet::new(),
        }
    }
}
