//! Delimited text → [`Table`].
//!
//! Cells are read as text first; each column is then typed as a whole. A
//! column whose non-empty cells all parse as `i64` becomes Int, one whose cells
//! all parse as `f64` becomes Float, anything else stays Text. Empty cells are
//! Null regardless of the column type.

use crate::domain::model::{Table, Value};
use crate::utils::error::{EtlError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

pub fn parse_table(data: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(EtlError::parse("no header row"));
    }

    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        raw_rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|index| infer_kind(raw_rows.iter().map(|row| row[index].as_str())))
        .collect();

    tracing::debug!(
        "Parsed {} columns x {} rows, column kinds: {:?}",
        headers.len(),
        raw_rows.len(),
        kinds
    );

    let mut table = Table::new(headers);
    for raw in raw_rows {
        let row = raw
            .into_iter()
            .zip(&kinds)
            .map(|(cell, kind)| to_value(cell, *kind))
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

fn infer_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Int;
    for cell in cells.filter(|c| !c.is_empty()) {
        let cell = cell.trim();
        if kind == ColumnKind::Int && cell.parse::<i64>().is_err() {
            kind = ColumnKind::Float;
        }
        if kind == ColumnKind::Float && cell.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }
    kind
}

fn to_value(cell: String, kind: ColumnKind) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match kind {
        ColumnKind::Int => cell.trim().parse().map(Value::Int).unwrap_or(Value::Text(cell)),
        ColumnKind::Float => cell.trim().parse().map(Value::Float).unwrap_or(Value::Text(cell)),
        ColumnKind::Text => Value::Text(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_infers_column_types() {
        let csv = "id,name,price\n1,Widget,2.5\n2,Gadget,3\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.columns(), &["id", "name", "price"]);
        assert_eq!(table.row_count(), 2);

        let first = table.row(0).unwrap();
        assert_eq!(first.get("id"), Some(&Value::Int(1)));
        assert_eq!(first.get("name"), Some(&Value::from("Widget")));
        assert_eq!(first.get("price"), Some(&Value::Float(2.5)));
        // one float in the column promotes the whole column
        assert_eq!(table.row(1).unwrap().get("price"), Some(&Value::Float(3.0)));
    }

    #[test]
    fn test_empty_cells_are_null() {
        let csv = "id,cost\n1,50\n2,\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.row(0).unwrap().get("cost"), Some(&Value::Int(50)));
        assert_eq!(table.row(1).unwrap().get("cost"), Some(&Value::Null));
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let csv = "code\n10\nA7\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.row(0).unwrap().get("code"), Some(&Value::from("10")));
        assert_eq!(table.row(1).unwrap().get("code"), Some(&Value::from("A7")));
    }

    #[test]
    fn test_non_finite_floats_parse() {
        let csv = "margin\n0.5\ninf\nNaN\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.row(1).unwrap().get("margin"), Some(&Value::Float(f64::INFINITY)));
        assert_eq!(table.row(2).unwrap().get("margin"), Some(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_header_only_file_yields_empty_table() {
        let table = parse_table(b"id,revenue,cost\n").unwrap();
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = parse_table(b"").unwrap_err();
        assert!(matches!(err, EtlError::ParseError { .. }));
    }

    #[test]
    fn test_ragged_rows_are_parse_error() {
        let err = parse_table(b"a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, EtlError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let err = parse_table(b"name\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, EtlError::ParseError { .. }));
    }
}
