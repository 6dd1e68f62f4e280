//! Document node and archive entry types.

use serde::{Deserialize, Serialize};

/// One record from the external graph store, read-only to this crate.
///
/// Fetched on demand by id and immutable once fetched. The core never
/// persists nodes; it only consumes their payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Record id in the store.
    pub id: i64,

    /// Declared content type, a MIME string or a format keyword. May also be
    /// an upstream error marker for nodes that were never captured.
    #[serde(rename = "type")]
    pub node_type: String,

    /// Filesystem-like path of the node; its trailing dot-extension is the
    /// fallback format signal.
    pub path: String,

    /// HTML/text payload, if the node carries one.
    pub document: Option<String>,

    /// Binary payload, if the node carries one.
    pub file: Option<Vec<u8>>,
}

impl DocumentNode {
    /// Lowercase extension of the node path, empty if the path has none.
    pub fn extension(&self) -> String {
        extension_of(&self.path).unwrap_or_default()
    }
}

/// One file inside an archive during a walk. Transient: exists only while
/// its entry is being processed, never persisted.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Entry name as stored in the container.
    pub name: String,

    /// Lowercase trailing dot-segment of the entry name.
    pub extension: String,

    /// Decompressed entry bytes.
    pub binary: Vec<u8>,
}

/// Lowercase trailing dot-segment of a name. `None` for names with no dot
/// segment, which are directory-like rather than files.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    let lowered = name.to_lowercase();
    let (_, ext) = lowered.rsplit_once('.')?;
    Some(ext.to_string())
}
