/// Maps byte offsets of a source text to 1-based line and column numbers
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Number of lines in the indexed text
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column of `offset` in `text`, the text this index was built from.
    ///
    /// Columns count characters, not bytes, so they match what editors show.
    pub fn position(&self, text: &str, offset: usize) -> (usize, usize) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = text[line_start..offset].chars().count() + 1;
        (line_idx + 1, column)
    }
}
