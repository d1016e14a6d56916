// =====================================================
// FILE: src/output/panel.rs - CONSOLE OUTPUT PANEL
// =====================================================

use crate::core::constants::PANEL_TITLE;
use crate::output::entry::{EntryId, LogEntry};
use crate::output::scroll::ScrollState;
use crate::ui::style::PanelStyle;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    widgets::{StatefulWidget, Widget},
};
use strip_ansi_escapes::strip;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Toolkit independent description of what the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTree {
    pub title: &'static str,
    pub rows: Vec<PanelRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub key: EntryId,
    pub text: String,
}

pub fn render_tree(entries: &[LogEntry]) -> PanelTree {
    PanelTree {
        title: PANEL_TITLE,
        rows: entries
            .iter()
            .map(|entry| PanelRow {
                key: entry.id(),
                text: entry.text().to_owned(),
            })
            .collect(),
    }
}

/// Title plus one line per entry inside a padded, scrollable area.
#[derive(Debug, Clone)]
pub struct ConsoleOutput<'a> {
    entries: &'a [LogEntry],
    style: PanelStyle,
}

impl<'a> ConsoleOutput<'a> {
    pub fn new(entries: &'a [LogEntry]) -> Self {
        Self {
            entries,
            style: PanelStyle::default(),
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of terminal lines the rows occupy, spacing included.
    pub fn content_height(&self) -> usize {
        content_height(self.entries.len(), self.style.row_spacing)
    }

    fn rows_area(&self, area: Rect) -> Option<Rect> {
        let inner = area.inner(&Margin {
            vertical: self.style.padding,
            horizontal: self.style.padding,
        });
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        Some(Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height - 1,
        })
    }
}

impl StatefulWidget for ConsoleOutput<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        buf.set_style(area, self.style.container_style());

        let Some(rows_area) = self.rows_area(area) else {
            return;
        };

        let width = rows_area.width as usize;
        let title = fit_to_width(PANEL_TITLE, width);
        buf.set_stringn(
            rows_area.x,
            rows_area.y - 1,
            &title,
            width,
            self.style.title_style(),
        );

        let stride = self.style.row_spacing as usize + 1;
        state.update_dimensions(rows_area.height as usize, self.content_height());

        let (start, end) = state.visible_range();
        let row_style = self.style.row_style();
        for line in start..end {
            if line % stride != 0 {
                continue;
            }
            let Some(entry) = self.entries.get(line / stride) else {
                break;
            };
            let text = fit_to_width(&sanitize(entry.text()), width);
            let y = rows_area.y + (line - start) as u16;
            buf.set_stringn(rows_area.x, y, &text, width, row_style);
        }
    }
}

impl Widget for ConsoleOutput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = ScrollState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

fn content_height(rows: usize, row_spacing: u16) -> usize {
    if rows == 0 {
        0
    } else {
        rows + (rows - 1) * row_spacing as usize
    }
}

/// Keeps one entry on one line: escape sequences go, control characters
/// become spaces.
fn sanitize(text: &str) -> String {
    let flattened = text.replace(['\n', '\r', '\t'], " ");
    let stripped =
        String::from_utf8_lossy(&strip(flattened.as_bytes()).unwrap_or_default()).into_owned();
    stripped
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::entry::ConsoleLog;

    #[test]
    fn test_tree_for_empty_sequence() {
        let tree = render_tree(&[]);
        assert_eq!(tree.title, "Console Output:");
        assert!(tree.rows.is_empty());
    }

    #[test]
    fn test_tree_keeps_order_and_keys() {
        let mut log = ConsoleLog::new(10);
        log.extend(["started", "connected", "done"]);

        let tree = render_tree(log.entries());
        let texts: Vec<&str> = tree.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["started", "connected", "done"]);

        let keys: Vec<EntryId> = log.entries().iter().map(|e| e.id()).collect();
        let row_keys: Vec<EntryId> = tree.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, row_keys);
    }

    #[test]
    fn test_tree_is_idempotent() {
        let mut log = ConsoleLog::new(10);
        log.extend(["a", "b"]);
        assert_eq!(render_tree(log.entries()), render_tree(log.entries()));
    }

    #[test]
    fn test_content_height_with_spacing() {
        assert_eq!(content_height(0, 2), 0);
        assert_eq!(content_height(1, 2), 1);
        assert_eq!(content_height(3, 1), 5);
    }

    #[test]
    fn test_sanitize_strips_escapes_and_newlines() {
        assert_eq!(sanitize("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(sanitize("two\nlines\tx"), "two lines x");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 10), "short");
        assert_eq!(fit_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(fit_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(fit_to_width("abc", 0), "");
    }
}
