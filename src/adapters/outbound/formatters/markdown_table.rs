/// Writes a markdown table with fixed minimum column widths
///
/// Cells are padded to their column's width; longer cells are written as
/// is. Callers escape untrusted text with [`MarkdownTable::escape_cell`].
pub struct MarkdownTable {
    widths: Vec<usize>,
    output: String,
    row: Vec<String>,
}

impl MarkdownTable {
    pub fn new(widths: Vec<usize>) -> Self {
        Self {
            widths,
            output: String::new(),
            row: Vec::new(),
        }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    pub fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Writes the label row and the separator row
    pub fn write_header(&mut self, labels: &[String]) {
        for label in labels {
            self.write_column(label);
        }
        self.end_row();

        let separator: Vec<String> = (0..labels.len())
            .map(|i| "-".repeat(self.width(i).max(3)))
            .collect();
        self.write_cells(&separator);
    }

    pub fn write_column(&mut self, cell: &str) {
        self.row.push(cell.to_string());
    }

    pub fn end_row(&mut self) {
        let row = std::mem::take(&mut self.row);
        self.write_cells(&row);
    }

    /// Returns the table text, ending with a newline
    pub fn finish(mut self) -> String {
        if !self.row.is_empty() {
            self.end_row();
        }
        self.output
    }

    fn width(&self, column: usize) -> usize {
        self.widths.get(column).copied().unwrap_or(0)
    }

    fn write_cells(&mut self, cells: &[String]) {
        self.output.push('|');
        for (i, cell) in cells.iter().enumerate() {
            let width = self.width(i);
            self.output.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        self.output.push('\n');
    }
}
