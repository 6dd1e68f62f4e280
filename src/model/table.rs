//! Table metadata types.

use crate::caption;
use serde::{Deserialize, Serialize};

/// Metadata for one table recovered from a document.
///
/// Produced by the format extractors. `unit` and `number` are derived from
/// `name` at construction time and are never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// 0-based position within the source document.
    pub index: usize,

    /// Inferred caption. Empty when no caption was found.
    pub name: String,

    /// Number of rows.
    pub row_count: usize,

    /// Number of columns.
    pub column_count: usize,

    /// Measurement unit captured from a trailing parenthesized group in the
    /// caption, e.g. `"тыс. руб."` from `"Выручка (тыс. руб.)"`.
    pub unit: Option<String>,

    /// Table number captured from a leading numeric prefix in the caption,
    /// e.g. `"1.2"` from `"Таблица 1.2 Выручка"`.
    pub number: Option<String>,
}

impl TableInfo {
    /// Create table metadata, deriving `unit` and `number` from the caption.
    pub fn new(index: usize, name: impl Into<String>, row_count: usize, column_count: usize) -> Self {
        let name = name.into();
        let unit = caption::find_unit(&name);
        let number = caption::find_number(&name);
        Self {
            index,
            name,
            row_count,
            column_count,
            unit,
            number,
        }
    }

    /// Finish the record by attaching the owning document's identity.
    pub fn into_descriptor(self, source_id: i64, source_path: impl Into<String>) -> TableDescriptor {
        TableDescriptor {
            index: self.index,
            name: self.name,
            row_count: self.row_count,
            column_count: self.column_count,
            unit: self.unit,
            number: self.number,
            source_id,
            source_path: source_path.into(),
        }
    }

    /// Check whether a caption was recovered.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A fully attributed table record: extractor output plus the identity of the
/// document node it came from.
///
/// Immutable once built; construct via [`TableInfo::into_descriptor`] after
/// the owning node is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// 0-based position within the source document.
    pub index: usize,

    /// Inferred caption.
    pub name: String,

    /// Number of rows.
    pub row_count: usize,

    /// Number of columns.
    pub column_count: usize,

    /// Measurement unit derived from the caption.
    pub unit: Option<String>,

    /// Table number derived from the caption.
    pub number: Option<String>,

    /// Id of the owning document node.
    pub source_id: i64,

    /// Store path of the owning document node.
    pub source_path: String,
}
