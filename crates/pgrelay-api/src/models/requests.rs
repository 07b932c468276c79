//! Request payload models
//!
//! Each command with a body decodes into exactly one of these records. Wire
//! field names follow the client vocabulary (`TableName`, `ColumnNames`, ...);
//! `/execSql` has no model because its body is the raw SQL text itself.

use serde::{Deserialize, Serialize};

/// Payload naming a single table (`/d`, `/create`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
}

/// Payload naming a table and one of its columns (`/dc`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "ColumnName")]
    pub column_name: String,
}

/// Payload for `/createIndex`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexRequest {
    #[serde(rename = "IndexName")]
    pub index_name: String,
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "ColumnName")]
    pub column_name: String,
}

/// Payload for `/read`. An empty `ColumnNames` list selects all columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "ColumnNames")]
    pub column_names: Vec<String>,
}

/// One column/value pair of an insert or upsert.
///
/// `Value` is the bare literal text of the value (`2.2`, `O'Brien`); it is
/// bound as a query parameter, never spliced into the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColVal {
    #[serde(rename = "ColumnName")]
    pub column_name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Payload for `/insert` and `/upsert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "Values")]
    pub values: Vec<ColVal>,
}

/// Payload for `/delete`: columns to drop from the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "Cols")]
    pub cols: Vec<String>,
}

/// Payload for `/own`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "Owner")]
    pub owner: String,
}

/// Payload for `/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "UserName")]
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_request_uses_wire_field_names() {
        let req: TableRequest = serde_json::from_str(r#"{"TableName":"document"}"#).unwrap();
        assert_eq!(req.table_name, "document");
    }

    #[test]
    fn insert_request_preserves_value_order() {
        let req: InsertRequest = serde_json::from_str(
            r#"{"TableName":"t","Values":[{"ColumnName":"foo","Value":"2.2"},{"ColumnName":"bar","Value":"3"}]}"#,
        )
        .unwrap();
        assert_eq!(req.values.len(), 2);
        assert_eq!(req.values[0].column_name, "foo");
        assert_eq!(req.values[0].value, "2.2");
        assert_eq!(req.values[1].column_name, "bar");
    }

    #[test]
    fn read_request_allows_empty_column_list() {
        let req: ReadRequest =
            serde_json::from_str(r#"{"TableName":"foo","ColumnNames":[]}"#).unwrap();
        assert!(req.column_names.is_empty());
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(serde_json::from_str::<TableRequest>(r#"{"Table":"document"}"#).is_err());
        assert!(serde_json::from_str::<TableRequest>("not json").is_err());
    }
}
