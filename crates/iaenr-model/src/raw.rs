/// A rectangular table of string cells as delivered by a source.
///
/// Rows may be shorter than the header; missing trailing cells read as null.
/// A `RawTable` is consumed by a level processor and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from string slices; convenient for fixtures.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// True when there are no data rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    /// Returns the cell at (`row`, `column`), or `None` when it is absent or blank.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Keeps only the rows for which `keep` returns true.
    pub fn retain_rows(self, mut keep: impl FnMut(&[String]) -> bool) -> Self {
        Self {
            headers: self.headers,
            rows: self.rows.into_iter().filter(|row| keep(row)).collect(),
        }
    }
}
