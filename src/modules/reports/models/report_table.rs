use rust_decimal::Decimal;
use serde::Serialize;

/// A single report cell
///
/// Rows carry typed scalars until encoding so amounts stay numeric in
/// formats that distinguish numbers from text. Missing optional fields
/// become [`CellValue::Empty`], never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(Decimal),
    Integer(i64),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text cell from an optional value; `None` becomes an empty cell.
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.to_string()),
            None => CellValue::Empty,
        }
    }

    /// Number cell from an optional amount; `None` becomes an empty cell.
    pub fn opt_number(value: Option<Decimal>) -> Self {
        match value {
            Some(v) => CellValue::Number(v),
            None => CellValue::Empty,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(d) => write!(f, "{}", d),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Flat tabular report: ordered headers plus rows of scalar cells
///
/// Created fresh per request and handed to the encoder; every row has
/// exactly `headers.len()` cells.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ReportTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; width must match the header count.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        debug_assert_eq!(
            row.len(),
            self.headers.len(),
            "row width must match header count"
        );
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
