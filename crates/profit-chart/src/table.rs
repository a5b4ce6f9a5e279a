// File: crates/profit-chart/src/table.rs
// Summary: Box-drawing text table generator for the console summary.

/// A simple text table: headers centered, body cells right-aligned,
/// column widths sized to the widest cell.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        // Four extra columns of air so headers never touch the borders
        let col_widths = headers.iter().map(|h| h.chars().count() + 4).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row of pre-formatted cells, widening columns if needed.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell.chars().count() + 2);
            }
        }
        self.rows.push(row);
    }

    /// Render the table as a framed multi-line string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.border('┌', '┬', '┐'));
        output.push('\n');
        output.push_str(&self.header_row());
        output.push('\n');
        output.push_str(&self.border('├', '┼', '┤'));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&self.body_row(row));
            output.push('\n');
        }
        output.push_str(&self.border('└', '┴', '┘'));
        output.push('\n');
        output
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let mut line = String::new();
        line.push(left);
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(width));
            line.push(if i + 1 < self.col_widths.len() { mid } else { right });
        }
        line
    }

    fn header_row(&self) -> String {
        let mut line = String::from("│");
        for (i, header) in self.headers.iter().enumerate() {
            let width = self.col_widths[i];
            let pad = width.saturating_sub(header.chars().count());
            let left = pad / 2;
            line.push_str(&" ".repeat(left));
            line.push_str(header);
            line.push_str(&" ".repeat(pad - left));
            line.push('│');
        }
        line
    }

    fn body_row(&self, row: &[String]) -> String {
        let mut line = String::from("│");
        for (i, cell) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                let pad = width.saturating_sub(cell.chars().count() + 1);
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
                line.push(' ');
                line.push('│');
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_table() {
        let mut table = Table::new(vec!["Input Amount", "Profit"]);
        table.add_row(vec!["$ 1000.00".to_string(), "$ 150.00".to_string()]);
        table.add_row(vec!["$ 2000.00".to_string(), "$ 280.00".to_string()]);

        let rendered = table.render();
        assert!(rendered.contains("Input Amount"));
        assert!(rendered.contains("$ 1000.00"));
        assert!(rendered.starts_with('┌'));
        assert!(rendered.trim_end().ends_with('┘'));
        assert!(rendered.contains('┼'));
    }

    #[test]
    fn test_rows_right_aligned() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["9.00".to_string()]);
        let rendered = table.render();
        // cell sits against the right border with one space of air
        assert!(rendered.contains(" 9.00 │"));
    }
}
