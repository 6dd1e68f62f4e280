//! Grid extractors: modern (XLSX) and legacy (XLS) spreadsheet containers.
//!
//! Both containers decode to the same cell grid, so they share the
//! materialization step and the caption/sizing heuristics; only the calamine
//! reader type differs.

use crate::caption;
use crate::error::{Error, Result};
use crate::model::TableInfo;
use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};
use std::io::Cursor;

/// Extract table metadata from a modern spreadsheet container, one record
/// per worksheet.
pub fn extract_xlsx(data: &[u8]) -> Result<Vec<TableInfo>> {
    let mut workbook =
        Xlsx::new(Cursor::new(data)).map_err(|e| Error::unreadable("xlsx", e))?;
    extract_sheets(&mut workbook, "xlsx")
}

/// Extract table metadata from a legacy spreadsheet container, one record
/// per worksheet.
pub fn extract_xls(data: &[u8]) -> Result<Vec<TableInfo>> {
    let mut workbook = Xls::new(Cursor::new(data)).map_err(|e| Error::unreadable("xls", e))?;
    extract_sheets(&mut workbook, "xls")
}

fn extract_sheets<RS, R>(workbook: &mut R, format: &'static str) -> Result<Vec<TableInfo>>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let names = workbook.sheet_names().to_owned();
    log::debug!("{format}: {} worksheet(s)", names.len());

    let mut tables = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| Error::unreadable(format, e))?;
        let grid = materialize(&range);
        let caption = caption::grid_caption(&grid);
        tables.push(TableInfo::new(
            index,
            caption,
            caption::grid_row_count(&grid),
            caption::grid_column_count(&grid),
        ));
    }
    Ok(tables)
}

/// Turn a calamine range into a dense grid. Empty and whitespace-only cells
/// become `None`; everything else is rendered as text.
fn materialize(range: &Range<Data>) -> Vec<Vec<Option<String>>> {
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        return None;
                    }
                    let text = cell.to_string();
                    if text.trim().is_empty() {
                        None
                    } else {
                        Some(text)
                    }
                })
                .collect()
        })
        .collect()
}
