//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The TUI maps them to ratatui styles; the print mode
//! writes them as plain text.

use crate::fmt::truncate;

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Student track (TUI: yellow).
    Student,
    /// Professional track (TUI: green).
    Professional,
    /// Placeholder or secondary text (TUI: dark gray).
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    /// Preferred width per column; the last one may stretch.
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
}

impl<Id> TableViewModel<Id> {
    /// Plain-text rendering: title, header and one line per row, columns
    /// padded to their preferred widths.
    pub fn to_text(&self) -> String {
        let last = self.widths.len().saturating_sub(1);
        let line = |cells: Vec<&str>| -> String {
            let mut out = String::new();
            for (i, text) in cells.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let width = self.widths.get(i).copied().unwrap_or(0) as usize;
                if i == last {
                    out.push_str(text);
                } else {
                    let text = truncate(text, width);
                    let pad = width.saturating_sub(text.chars().count());
                    out.push_str(&text);
                    out.extend(std::iter::repeat_n(' ', pad));
                }
            }
            out.trim_end().to_string()
        };

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&line(self.headers.iter().map(String::as_str).collect()));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(row.cells.iter().map(|c| c.text.as_str()).collect()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_pads_columns() {
        let vm = TableViewModel {
            title: "Registrations (1 of 1)".to_string(),
            headers: vec!["NAME".to_string(), "TYPE".to_string()],
            widths: vec![8, 12],
            rows: vec![ViewRow {
                id: 1u32,
                cells: vec![
                    ViewCell::plain("Alexandra Rivera".to_string()),
                    ViewCell::plain("Professional".to_string()),
                ],
                style: RowStyleClass::Normal,
            }],
        };
        assert_eq!(
            vm.to_text(),
            "Registrations (1 of 1)\nNAME     TYPE\nAlexand… Professional\n"
        );
    }
}
