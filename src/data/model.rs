use std::collections::BTreeMap;
use std::fmt;

/// Column holding the publication year in the articles table.
pub const YEAR_COLUMN: &str = "year";

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred the way a dataframe reader would.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

/// Plain text as it goes into a table cell or a CSV field. Floats use the
/// shortest representation that parses back to the same value.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Infer a cell from raw field text. Numbers may carry surrounding
    /// whitespace; text is kept verbatim.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            // "nan"/"inf" spelled as words stay text
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }
        CellValue::Text(raw.to_string())
    }

    /// Cell for a categorical column: never inferred as a number.
    pub fn text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// Integer view of the cell. Floats qualify only when integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – rows of named cells in source order
// ---------------------------------------------------------------------------

/// One table row: column_name → value.
pub type Row = BTreeMap<String, CellValue>;

/// A loaded table. Rows keep the order they had in the source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names in header order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell at (`row`, `column`); missing cells read as `Null`.
    pub fn cell(&self, row: usize, column: &str) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL)
    }

    /// Materialise a view as a standalone table.
    #[cfg(test)]
    pub fn select(&self, view: &FilteredView) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: view.iter().map(|i| self.rows[i].clone()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// FilteredView – the rows currently on screen
// ---------------------------------------------------------------------------

/// Ordered row indices into a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    /// Every row of `table` in source order.
    pub fn all(table: &Table) -> Self {
        Self {
            indices: (0..table.len()).collect(),
        }
    }

    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
