use colored::Colorize;
use pairz::commands::{CmdMessage, MessageLevel};
use pairz::index::DisplayPair;
use pairz::presenter::ListPresenter;
use std::collections::BTreeSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const SELECTED_MARKER: &str = "●";
const EMPTY_LIST: &str = "No pairs yet. Add one with: pairz add Name=Value";

/// Presenter that prints to the terminal.
///
/// `render` only records the rows; [`TerminalPresenter::flush`] prints them. That way a
/// one-shot command, which renders once at startup and once after its action, prints
/// the list a single time.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    rows: Vec<DisplayPair>,
    selected: BTreeSet<usize>,
    dirty: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark rows as selected. Positions without a row are dropped.
    pub fn select(&mut self, positions: BTreeSet<usize>) -> usize {
        let len = self.rows.len();
        self.selected = positions.into_iter().filter(|&i| i < len).collect();
        self.dirty = true;
        self.selected.len()
    }

    /// Print the list if it changed since the last flush.
    pub fn flush(&mut self) {
        if self.dirty {
            print!("{}", render_list(&self.rows, &self.selected));
            self.dirty = false;
        }
    }

    /// Print the list now, changed or not.
    pub fn reprint(&mut self) {
        self.dirty = true;
        self.flush();
    }
}

impl ListPresenter for TerminalPresenter {
    fn render(&mut self, rows: &[DisplayPair]) {
        self.rows = rows.to_vec();
        self.selected.clear();
        self.dirty = true;
    }

    fn selection(&self) -> BTreeSet<usize> {
        self.selected.clone()
    }

    fn show_message(&mut self, message: &CmdMessage) {
        print_messages(std::slice::from_ref(message));
    }

    // Terminal output scrolls away; there is no standing message to clear.
    fn clear_message(&mut self) {}
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Formats rows as `<position>. <name>=<value>`, positions right-aligned.
pub(super) fn render_list(rows: &[DisplayPair], selected: &BTreeSet<usize>) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }

    let index_width = rows
        .last()
        .map(|row| row.index.to_string().width())
        .unwrap_or(1);

    let mut out = String::new();
    for row in rows {
        let is_selected = selected.contains(&row.index);
        let marker = if is_selected { SELECTED_MARKER } else { " " };
        let idx_str = format!("{:>width$}.", row.index, width = index_width);

        let fixed_width = marker.width() + 1 + idx_str.width() + 1;
        let label = truncate_to_width(&row.label(), LINE_WIDTH.saturating_sub(fixed_width));

        let idx_colored = if is_selected {
            idx_str.yellow().bold()
        } else {
            idx_str.yellow()
        };
        let label_colored = if is_selected {
            label.bold()
        } else {
            label.normal()
        };

        out.push_str(&format!(
            "{} {} {}\n",
            marker.yellow(),
            idx_colored,
            label_colored
        ));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairz::index::index_pairs;
    use pairz::model::Pair;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_positions_and_labels() {
        plain();
        let rows = index_pairs(&Pair::seeds());
        let out = render_list(&rows, &BTreeSet::new());
        assert_eq!(out, "  0. Hello=World\n  1. Happy=Coding\n");
    }

    #[test]
    fn aligns_positions() {
        plain();
        let pairs: Vec<Pair> = (0..11)
            .map(|i| Pair::new(format!("k{}", i), "v").unwrap())
            .collect();
        let out = render_list(&index_pairs(&pairs), &BTreeSet::new());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "   0. k0=v");
        assert_eq!(lines[10], "  10. k10=v");
    }

    #[test]
    fn marks_selected_rows() {
        plain();
        let rows = index_pairs(&Pair::seeds());
        let out = render_list(&rows, &BTreeSet::from([1]));
        assert!(out.contains("● 1. Happy=Coding"));
        assert!(out.contains("  0. Hello=World"));
    }

    #[test]
    fn empty_list_hint() {
        plain();
        assert_eq!(render_list(&[], &BTreeSet::new()), format!("{}\n", EMPTY_LIST));
    }

    #[test]
    fn truncates_long_labels() {
        let long = "a".repeat(150);
        let cut = truncate_to_width(&long, 20);
        assert_eq!(cut.width(), 20);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn select_drops_missing_rows_and_render_clears() {
        let mut presenter = TerminalPresenter::new();
        presenter.render(&index_pairs(&Pair::seeds()));
        assert_eq!(presenter.select(BTreeSet::from([0, 7])), 1);
        assert_eq!(presenter.selection(), BTreeSet::from([0]));

        presenter.render(&index_pairs(&Pair::seeds()));
        assert!(presenter.selection().is_empty());
    }
}
