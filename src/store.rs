//! Document store seam.
//!
//! Database connectivity is outside this crate; these are the two lookup
//! operations the extraction core needs from whoever owns the graph store.
//! Implementations should map their own failures to
//! [`Error::Store`](crate::Error::Store).

use crate::error::Result;
use crate::extract::{extract_node, ExtractOptions, NodeExtraction};
use crate::model::DocumentNode;

/// Read-only access to the external graph store.
pub trait DocumentStore {
    /// Fetch one node by id.
    fn fetch_node(&self, id: i64) -> Result<DocumentNode>;

    /// Find nodes whose text payload contains the given text.
    fn search(&self, text: &str) -> Result<Vec<DocumentNode>>;
}

/// Fetch a node by id and extract its tables in one step.
///
/// Failures carry the node id and path where the node was resolvable, so a
/// batch caller can record the failure and continue with the next id.
pub fn fetch_and_extract<S: DocumentStore>(
    store: &S,
    id: i64,
    options: &ExtractOptions,
) -> Result<NodeExtraction> {
    let node = store.fetch_node(id)?;
    extract_node(&node, options)
}
