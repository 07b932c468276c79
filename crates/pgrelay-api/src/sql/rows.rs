//! Row serialization
//!
//! Read commands return arbitrary, schema-unknown result sets. Each row is
//! rendered as one JSON object, newline-separated, column name as key. The
//! result set arrives through the simple protocol (every value in its text
//! form); the column types from the prepared statement decide how each cell
//! is rendered:
//!
//! - SQL NULL -> `null`
//! - textual types -> JSON-escaped quoted string
//! - booleans -> `true`/`false` (normalized from the wire `t`/`f`)
//! - numeric types -> the bare text form
//! - everything else -> JSON-escaped quoted string of its text form, so
//!   every emitted line stays parseable

use tokio_postgres::types::Type;
use tokio_postgres::{Column, SimpleQueryMessage};

/// Rendering class of a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Textual,
    Boolean,
    Numeric,
    Other,
}

pub fn classify(ty: &Type) -> CellClass {
    if [
        Type::TEXT,
        Type::VARCHAR,
        Type::BPCHAR,
        Type::CHAR,
        Type::NAME,
        Type::UNKNOWN,
    ]
    .contains(ty)
    {
        CellClass::Textual
    } else if [
        Type::INT2,
        Type::INT4,
        Type::INT8,
        Type::OID,
        Type::FLOAT4,
        Type::FLOAT8,
        Type::NUMERIC,
    ]
    .contains(ty)
    {
        CellClass::Numeric
    } else if *ty == Type::BOOL {
        CellClass::Boolean
    } else {
        CellClass::Other
    }
}

/// Render one cell's JSON value from its text-form wire value.
pub fn render_cell(class: CellClass, value: Option<&str>) -> String {
    let Some(value) = value else {
        return "null".to_string();
    };
    match class {
        CellClass::Boolean => match value {
            "t" | "true" => "true".to_string(),
            _ => "false".to_string(),
        },
        CellClass::Numeric => value.to_string(),
        CellClass::Textual | CellClass::Other => serde_json::Value::from(value).to_string(),
    }
}

/// Render one row as a JSON object, preserving column order.
pub fn row_line(names: &[&str], classes: &[CellClass], values: &[Option<&str>]) -> String {
    let mut line = String::from("{");
    for (i, value) in values.iter().enumerate() {
        if i != 0 {
            line.push(',');
        }
        let name = names.get(i).copied().unwrap_or("");
        let class = classes.get(i).copied().unwrap_or(CellClass::Other);
        line.push_str(&serde_json::Value::from(name).to_string());
        line.push(':');
        line.push_str(&render_cell(class, *value));
    }
    line.push('}');
    line
}

/// Serialize a simple-protocol result set into newline-delimited JSON.
///
/// `columns` comes from preparing the same statement and supplies the types;
/// the messages are consumed in a single pass. Zero rows yield the empty
/// string.
pub fn rows_to_jsonl(columns: &[Column], messages: &[SimpleQueryMessage]) -> String {
    let classes: Vec<CellClass> = columns.iter().map(|c| classify(c.type_())).collect();
    let mut out = String::new();
    for message in messages {
        let SimpleQueryMessage::Row(row) = message else {
            continue;
        };
        let names: Vec<&str> = row.columns().iter().map(|c| c.name()).collect();
        let values: Vec<Option<&str>> = (0..row.len()).map(|i| row.get(i)).collect();
        out.push_str(&row_line(&names, &classes, &values));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_types() {
        assert_eq!(classify(&Type::TEXT), CellClass::Textual);
        assert_eq!(classify(&Type::NAME), CellClass::Textual);
        assert_eq!(classify(&Type::INT4), CellClass::Numeric);
        assert_eq!(classify(&Type::NUMERIC), CellClass::Numeric);
        assert_eq!(classify(&Type::BOOL), CellClass::Boolean);
        assert_eq!(classify(&Type::TIMESTAMPTZ), CellClass::Other);
        assert_eq!(classify(&Type::TEXT_ARRAY), CellClass::Other);
    }

    #[test]
    fn null_cells_render_as_json_null() {
        assert_eq!(render_cell(CellClass::Numeric, None), "null");
        assert_eq!(render_cell(CellClass::Textual, None), "null");
    }

    #[test]
    fn text_cells_are_quoted_and_escaped() {
        assert_eq!(
            render_cell(CellClass::Textual, Some("O'Brien")),
            "\"O'Brien\""
        );
        assert_eq!(
            render_cell(CellClass::Textual, Some("say \"hi\"")),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn numeric_cells_stay_bare() {
        assert_eq!(render_cell(CellClass::Numeric, Some("2.2")), "2.2");
        assert_eq!(render_cell(CellClass::Numeric, Some("-17")), "-17");
    }

    #[test]
    fn boolean_cells_are_normalized() {
        assert_eq!(render_cell(CellClass::Boolean, Some("t")), "true");
        assert_eq!(render_cell(CellClass::Boolean, Some("f")), "false");
    }

    #[test]
    fn other_cells_become_quoted_strings() {
        assert_eq!(
            render_cell(CellClass::Other, Some("2024-01-01 00:00:00")),
            "\"2024-01-01 00:00:00\""
        );
    }

    #[test]
    fn row_line_preserves_column_order() {
        let line = row_line(
            &["id", "name", "deleted"],
            &[CellClass::Numeric, CellClass::Textual, CellClass::Boolean],
            &[Some("1"), Some("O'Brien"), None],
        );
        assert_eq!(line, "{\"id\":1,\"name\":\"O'Brien\",\"deleted\":null}");
    }

    #[test]
    fn never_emits_a_nil_marker() {
        let line = row_line(&["a"], &[CellClass::Other], &[None]);
        assert!(!line.contains("<nil>"));
        assert_eq!(line, "{\"a\":null}");
    }
}
