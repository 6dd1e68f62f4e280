//! Markup extractor: HTML documents.
//!
//! Tables are located by tag; caption candidates are headings and `p`
//! paragraphs not nested inside a table, visited in document order. Each
//! `table` tag closes over the candidates accumulated since the previous
//! table via the markup-caption heuristic.

use crate::caption::CaptionTracker;
use crate::error::Result;
use crate::extract::ExtractOptions;
use crate::model::TableInfo;
use scraper::{ElementRef, Html};

/// Extract table metadata from an HTML document.
pub fn extract_html(html: &str, options: &ExtractOptions) -> Result<Vec<TableInfo>> {
    let document = Html::parse_document(html);

    let mut tracker = CaptionTracker::new();
    let mut tables = Vec::new();

    for node in document.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        match el.value().name() {
            "table" => {
                let name = tracker.take_markup_caption(options.max_caption_len);
                let (row_count, column_count) = table_size(el);
                tables.push(TableInfo::new(tables.len(), name, row_count, column_count));
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => tracker.push_paragraph(&element_text(el)),
            "p" if !inside_table(el) => tracker.push_paragraph(&element_text(el)),
            _ => {}
        }
    }

    log::debug!("html: {} table(s)", tables.len());
    Ok(tables)
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

fn inside_table(el: ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "table")
}

/// Row count is the number of descendant `tr` tags; column count is the
/// widest row measured in `td` tags.
fn table_size(table: ElementRef) -> (usize, usize) {
    let rows: Vec<ElementRef> = table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
        .collect();

    let column_count = rows
        .iter()
        .map(|row| {
            row.descendants()
                .filter_map(ElementRef::wrap)
                .filter(|e| e.value().name() == "td")
                .count()
        })
        .max()
        .unwrap_or(0);

    (rows.len(), column_count)
}
