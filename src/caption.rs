//! Caption recovery heuristics.
//!
//! Document formats do not model table captions explicitly; this module
//! infers them from surrounding text. Grid formats take their caption from
//! leading rows with at most one filled cell. Flow and markup formats
//! accumulate the paragraphs seen since the previous table and reassemble a
//! caption from the tail of that accumulator.

use regex::Regex;
use std::sync::OnceLock;

static STARTS_WITH_NUMBER: OnceLock<Regex> = OnceLock::new();
static TABLE_NUMBER: OnceLock<Regex> = OnceLock::new();
static TRAILING_UNIT: OnceLock<Regex> = OnceLock::new();

fn starts_with_number_re() -> &'static Regex {
    STARTS_WITH_NUMBER.get_or_init(|| Regex::new(r"^[\d.]+").unwrap())
}

fn table_number_re() -> &'static Regex {
    TABLE_NUMBER.get_or_init(|| Regex::new(r"^(?:Таблица |Табл\. )?([\d.]*)").unwrap())
}

fn trailing_unit_re() -> &'static Regex {
    TRAILING_UNIT.get_or_init(|| Regex::new(r"\(([^()]*)\)$").unwrap())
}

/// Normalize whitespace: newlines become spaces, runs of whitespace collapse
/// to a single space, leading/trailing whitespace is trimmed.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the text opens with a run of digits and dots. Captions carrying a
/// table number usually do.
pub fn starts_with_number(text: &str) -> bool {
    starts_with_number_re().is_match(text)
}

/// Leading numeric prefix of a caption, optionally preceded by a caption
/// word ("Таблица " / "Табл. "). `None` when the caption has no number.
pub fn find_number(name: &str) -> Option<String> {
    let caps = table_number_re().captures(name)?;
    let number = caps.get(1)?.as_str();
    if number.is_empty() {
        None
    } else {
        Some(number.to_string())
    }
}

/// Innermost trailing parenthesized group of a caption, conventionally the
/// measurement unit. `None` when the caption does not end in one.
pub fn find_unit(name: &str) -> Option<String> {
    let caps = trailing_unit_re().captures(name)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Caption of a grid (spreadsheet) sheet.
///
/// Scans rows from the top. A row belongs to the caption while at most one
/// of its cells is filled; the first row that fails this test begins the
/// data body. Caption-row texts are space-joined and normalized. Cells are
/// `None` when empty or whitespace-only.
pub fn grid_caption(grid: &[Vec<Option<String>>]) -> String {
    let n_rows = grid_row_count(grid);
    let n_cols = grid_column_count(grid);

    let mut name = String::new();
    for row in grid.iter().take(n_rows) {
        let mut empty_cells = 0;
        let mut cells_text = String::new();
        for cell in row.iter().take(n_cols) {
            match cell {
                None => empty_cells += 1,
                Some(text) => {
                    cells_text.push_str(text);
                    cells_text.push(' ');
                }
            }
        }
        if empty_cells + 1 >= n_cols {
            name.push_str(&cells_text);
        } else {
            break;
        }
    }

    clean_text(&name)
}

/// Number of rows containing at least one filled cell.
pub fn grid_row_count(grid: &[Vec<Option<String>>]) -> usize {
    grid.iter()
        .filter(|row| row.iter().any(Option::is_some))
        .count()
}

/// Number of columns containing at least one filled cell.
pub fn grid_column_count(grid: &[Vec<Option<String>>]) -> usize {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .filter(|&j| grid.iter().any(|row| row.get(j).is_some_and(Option::is_some)))
        .count()
}

/// Accumulator of paragraph texts preceding a table in a flow or markup
/// document. Reset after every table boundary.
#[derive(Debug, Default)]
pub struct CaptionTracker {
    preceding: Vec<String>,
}

impl CaptionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a paragraph seen before the next table. Whitespace-only
    /// paragraphs are kept as empty strings; they act as caption boundaries.
    pub fn push_paragraph(&mut self, text: &str) {
        self.preceding.push(clean_text(text));
    }

    /// Caption at a table boundary in a flow document, then reset.
    ///
    /// If any accumulated paragraph starts with a numeral, paragraphs are
    /// joined in reverse until the first such paragraph (inclusive) or an
    /// empty paragraph once the caption is non-empty (exclusive). Otherwise
    /// the immediately preceding paragraph is the caption. Captions longer
    /// than `max_len` characters fall back to the preceding paragraph.
    pub fn take_flow_caption(&mut self, max_len: usize) -> String {
        let mut name = String::new();

        if self.preceding.iter().any(|t| starts_with_number(t)) {
            for text in self.preceding.iter().rev() {
                if starts_with_number(text) {
                    name = join_reversed(text, &name);
                    break;
                } else if text.is_empty() && !name.is_empty() {
                    break;
                } else {
                    name = join_reversed(text, &name);
                }
            }
        } else if let Some(last) = self.preceding.last() {
            name = last.clone();
        }

        if name.chars().count() > max_len {
            if let Some(last) = self.preceding.last() {
                name = last.clone();
            }
        }

        self.preceding.clear();
        clean_text(&name)
    }

    /// Caption at a table boundary in a markup document, then reset.
    ///
    /// Joins candidates in reverse until an empty candidate is hit while the
    /// caption is already non-empty. Overlong captions fall back to the last
    /// non-empty candidate before the table.
    pub fn take_markup_caption(&mut self, max_len: usize) -> String {
        let last_not_empty = self
            .preceding
            .iter()
            .rev()
            .find(|t| !t.is_empty())
            .cloned()
            .unwrap_or_default();

        let mut name = String::new();
        for text in self.preceding.iter().rev() {
            if text.is_empty() && !name.is_empty() {
                break;
            }
            name = join_reversed(text, &name);
        }

        if name.chars().count() > max_len {
            name = last_not_empty;
        }

        self.preceding.clear();
        clean_text(&name)
    }
}

fn join_reversed(text: &str, name: &str) -> String {
    format!("{text} {name}")
}
