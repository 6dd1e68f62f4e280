//! Flow extractor: word-processor documents.
//!
//! A DOCX payload is a ZIP container holding `word/document.xml`. The body
//! is an ordered stream of paragraph (`w:p`) and table (`w:tbl`) blocks;
//! paragraphs are fed to the flow-caption tracker and each top-level table
//! closes over the text accumulated since the previous one. Tables nested
//! inside cells are part of their enclosing table, not records of their own.

use crate::caption::CaptionTracker;
use crate::error::{Error, Result};
use crate::extract::ExtractOptions;
use crate::model::TableInfo;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Extract table metadata from a word-processor document.
pub fn extract_docx(data: &[u8], options: &ExtractOptions) -> Result<Vec<TableInfo>> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| Error::unreadable("docx", e))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::unreadable("docx", e))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::unreadable("docx", e))?;
    parse_document_xml(&xml, options.max_caption_len)
}

/// Walk the WordprocessingML body in document order.
fn parse_document_xml(xml: &str, max_caption_len: usize) -> Result<Vec<TableInfo>> {
    let mut reader = Reader::from_str(xml);

    let mut tables = Vec::new();
    let mut tracker = CaptionTracker::new();

    // Depth of w:tbl nesting; 0 means body level.
    let mut table_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut paragraph_text = String::new();
    let mut row_count = 0usize;
    let mut column_count = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"tbl" => {
                    if table_depth == 0 {
                        row_count = 0;
                        column_count = 0;
                    }
                    table_depth += 1;
                }
                b"tr" if table_depth == 1 => row_count += 1,
                b"gridCol" if table_depth == 1 => column_count += 1,
                b"p" if table_depth == 0 => {
                    in_paragraph = true;
                    paragraph_text.clear();
                }
                b"t" if in_paragraph && table_depth == 0 => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"gridCol" if table_depth == 1 => column_count += 1,
                b"tab" | b"br" if in_paragraph && table_depth == 0 => paragraph_text.push(' '),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                if in_text {
                    let text = text.unescape().map_err(|err| Error::unreadable("docx", err))?;
                    paragraph_text.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if table_depth == 0 && in_paragraph => {
                    tracker.push_paragraph(&paragraph_text);
                    in_paragraph = false;
                }
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        let name = tracker.take_flow_caption(max_caption_len);
                        tables.push(TableInfo::new(tables.len(), name, row_count, column_count));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::unreadable("docx", e)),
            Ok(_) => {}
        }
    }

    log::debug!("docx: {} table(s)", tables.len());
    Ok(tables)
}
