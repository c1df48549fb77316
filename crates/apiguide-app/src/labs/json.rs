//! JSON explainer cursor - a keyboard stand-in for hovering a line

use apiguide_core::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonExplainerState {
    cursor: usize,
}

impl JsonExplainerState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, catalog: &Catalog) {
        if self.cursor + 1 < catalog.json_lines.len() {
            self.cursor += 1;
        }
    }

    /// Annotation of the line under the cursor
    pub fn note<'a>(&self, catalog: &'a Catalog) -> Option<&'a str> {
        catalog
            .json_lines
            .get(self.cursor)
            .and_then(|line| line.note.as_deref())
    }
}
