//! # The Rendering Seam
//!
//! [`ListPresenter`] is everything the controller needs from a UI: show rows, report
//! which rows the user selected, show or clear a status message, and clear the input
//! after a successful add.
//!
//! Rendering is a pure trigger. Presenters never persist anything; the controller
//! persists first and renders second, as two separate calls.
//!
//! A presenter must forget its selection whenever it renders. Row tokens are
//! positions, and positions from a previous render may point at different pairs now.

use crate::commands::CmdMessage;
use crate::index::DisplayPair;
use std::collections::BTreeSet;

pub trait ListPresenter {
    /// Replace the displayed rows. Any held selection is dropped.
    fn render(&mut self, rows: &[DisplayPair]);

    /// Positions of the rows the user currently has selected.
    fn selection(&self) -> BTreeSet<usize>;

    /// Show a status message (e.g. why an add was rejected).
    fn show_message(&mut self, message: &CmdMessage);

    /// Remove any status message.
    fn clear_message(&mut self);

    /// Empty the input field after its content was accepted.
    fn clear_input(&mut self) {}
}

/// A presenter that keeps everything in memory.
///
/// Useful for tests and for embedding pairz where the caller reads the state back
/// instead of drawing it.
#[derive(Debug, Default)]
pub struct BufferPresenter {
    rows: Vec<DisplayPair>,
    selected: BTreeSet<usize>,
    message: Option<CmdMessage>,
    render_count: usize,
    input_clears: usize,
}

impl BufferPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user selecting rows.
    pub fn select<I: IntoIterator<Item = usize>>(&mut self, positions: I) {
        self.selected = positions.into_iter().collect();
    }

    pub fn rows(&self) -> &[DisplayPair] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(DisplayPair::label).collect()
    }

    pub fn message(&self) -> Option<&CmdMessage> {
        self.message.as_ref()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn input_clears(&self) -> usize {
        self.input_clears
    }
}

impl ListPresenter for BufferPresenter {
    fn render(&mut self, rows: &[DisplayPair]) {
        self.rows = rows.to_vec();
        self.selected.clear();
        self.render_count += 1;
    }

    fn selection(&self) -> BTreeSet<usize> {
        self.selected.clone()
    }

    fn show_message(&mut self, message: &CmdMessage) {
        self.message = Some(message.clone());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn clear_input(&mut self) {
        self.input_clears += 1;
    }
}
