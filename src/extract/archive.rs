//! Archive walker: recursive extraction from nested containers.
//!
//! Supported containers are ZIP and (optionally gzipped) tar. Entries are
//! dispatched by their lowercase extension; nested containers recurse up to
//! the configured depth. A failure inside one entry is recorded in the
//! failure map and never aborts the remaining entries; only an unreadable
//! top-level container or exceeding the depth limit fails the whole walk.

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, Extraction};
use crate::dispatch::DocumentFormat;
use crate::model::{extension_of, ArchiveEntry};
use flate2::read::GzDecoder;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const TAR_MAGIC: &[u8] = b"ustar";
const TAR_MAGIC_OFFSET: usize = 257;

/// One enumerated container entry before dispatch. Reading an entry's bytes
/// can fail independently of the container being well-formed, so the bytes
/// carry their own result.
struct RawEntry {
    name: String,
    data: std::result::Result<Vec<u8>, String>,
}

/// Walk a container payload, collecting tables from every readable entry.
///
/// `depth` is 1 for a top-level container and grows by one per nesting
/// level. The flattened output is re-indexed so the walker's own result
/// keeps contiguous indexes; nested failure-map keys are slash-qualified
/// with the enclosing entry name.
pub(crate) fn walk(data: &[u8], options: &ExtractOptions, depth: usize) -> Result<Extraction> {
    if depth > options.max_archive_depth {
        return Err(Error::ArchiveTooDeep {
            depth,
            max: options.max_archive_depth,
        });
    }

    let entries = open_entries(data)?;
    log::debug!("archive (depth {depth}): {} entr(ies)", entries.len());

    let mut extraction = Extraction::default();
    for raw in entries {
        // No dot segment means a directory-like name, skipped silently.
        let Some(extension) = extension_of(&raw.name) else {
            continue;
        };
        let name = raw.name;
        let binary = match raw.data {
            Ok(binary) => binary,
            Err(detail) => {
                log::warn!("archive entry {name:?} cannot be read: {detail}");
                extraction
                    .failures
                    .insert(name, format!("archive entry cannot be read ({detail})"));
                continue;
            }
        };
        let entry = ArchiveEntry {
            name,
            extension,
            binary,
        };
        process_entry(entry, options, depth, &mut extraction)?;
    }

    for (index, table) in extraction.tables.iter_mut().enumerate() {
        table.index = index;
    }
    Ok(extraction)
}

fn process_entry(
    entry: ArchiveEntry,
    options: &ExtractOptions,
    depth: usize,
    extraction: &mut Extraction,
) -> Result<()> {
    match DocumentFormat::from_extension(&entry.extension) {
        None => {
            extraction.failures.insert(
                entry.name,
                format!("no extractor for archive entry (extension {:?})", entry.extension),
            );
        }
        Some(DocumentFormat::Archive) => match walk(&entry.binary, options, depth + 1) {
            Ok(nested) => {
                extraction.tables.extend(nested.tables);
                for (inner_name, detail) in nested.failures {
                    extraction
                        .failures
                        .insert(format!("{}/{inner_name}", entry.name), detail);
                }
            }
            // The depth guard is a whole-walk safety property, not a
            // per-entry condition.
            Err(err @ Error::ArchiveTooDeep { .. }) => return Err(err),
            Err(err) => {
                log::warn!("nested archive {:?} failed: {err}", entry.name);
                extraction.failures.insert(entry.name, err.to_string());
            }
        },
        Some(format) => match super::extract_bytes(&entry.binary, format, options) {
            Ok(inner) => extraction.tables.extend(inner.tables),
            Err(err) => {
                log::warn!("archive entry {:?} failed: {err}", entry.name);
                extraction.failures.insert(entry.name, err.to_string());
            }
        },
    }
    Ok(())
}

/// Probe the payload as ZIP first, then gzipped tar, then bare tar.
fn open_entries(data: &[u8]) -> Result<Vec<RawEntry>> {
    match ZipArchive::new(Cursor::new(data)) {
        Ok(mut archive) => Ok(zip_entries(&mut archive)),
        Err(zip_err) => {
            if data.starts_with(GZIP_MAGIC) {
                tar_entries(GzDecoder::new(data))
            } else if looks_like_tar(data) {
                tar_entries(data)
            } else {
                Err(Error::ArchiveUnreadable(zip_err.to_string()))
            }
        }
    }
}

fn zip_entries(archive: &mut ZipArchive<Cursor<&[u8]>>) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        match archive.by_index(i) {
            Ok(mut file) => {
                if file.is_dir() {
                    continue;
                }
                let name = file.name().to_string();
                let mut buf = Vec::new();
                let data = file
                    .read_to_end(&mut buf)
                    .map(|_| buf)
                    .map_err(|e| e.to_string());
                entries.push(RawEntry { name, data });
            }
            Err(err) => entries.push(RawEntry {
                name: format!("entry #{i}"),
                data: Err(err.to_string()),
            }),
        }
    }
    entries
}

fn tar_entries<R: Read>(reader: R) -> Result<Vec<RawEntry>> {
    let mut archive = tar::Archive::new(reader);
    let mut entries = Vec::new();
    let iter = archive
        .entries()
        .map_err(|e| Error::ArchiveUnreadable(e.to_string()))?;
    for entry in iter {
        let mut entry = entry.map_err(|e| Error::ArchiveUnreadable(e.to_string()))?;
        if entry.header().entry_type().is_dir() {
            continue;
        }
        let name = entry
            .path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut buf = Vec::new();
        let data = entry
            .read_to_end(&mut buf)
            .map(|_| buf)
            .map_err(|e| e.to_string());
        entries.push(RawEntry { name, data });
    }
    Ok(entries)
}

fn looks_like_tar(data: &[u8]) -> bool {
    data.len() > TAR_MAGIC_OFFSET + TAR_MAGIC.len()
        && &data[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + TAR_MAGIC.len()] == TAR_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_unreadable() {
        let err = walk(b"neither zip nor tar", &ExtractOptions::default(), 1).unwrap_err();
        assert!(matches!(err, Error::ArchiveUnreadable(_)));
    }

    #[test]
    fn test_depth_guard_trips_before_opening() {
        let options = ExtractOptions::new().with_max_archive_depth(2);
        let err = walk(b"irrelevant", &options, 3).unwrap_err();
        assert!(matches!(err, Error::ArchiveTooDeep { depth: 3, max: 2 }));
    }

    #[test]
    fn test_looks_like_tar() {
        let mut data = vec![0u8; 512];
        data[TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + 5].copy_from_slice(TAR_MAGIC);
        assert!(looks_like_tar(&data));
        assert!(!looks_like_tar(b"short"));
    }
}
