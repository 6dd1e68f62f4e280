//! Data model for extracted table metadata.

mod node;
mod table;

pub use node::{ArchiveEntry, DocumentNode};
pub(crate) use node::extension_of;
pub use table::{TableDescriptor, TableInfo};
