//! Catalog record models
//!
//! Read-only projections of the PostgreSQL catalog views served by the
//! introspection commands. Each record mirrors one view row as nullable
//! text (plus the boolean flags on `pg_tables`), and serializes with the
//! wire keys the clients already consume (`Schemaname`, `Column_name`, ...).

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// One row of `pg_catalog.pg_tables`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "Schemaname")]
    pub schemaname: Option<String>,
    #[serde(rename = "Tablename")]
    pub tablename: Option<String>,
    #[serde(rename = "Tableowner")]
    pub tableowner: Option<String>,
    #[serde(rename = "Tablespace")]
    pub tablespace: Option<String>,
    #[serde(rename = "Hasindexes")]
    pub hasindexes: bool,
    #[serde(rename = "Hasrules")]
    pub hasrules: bool,
    #[serde(rename = "Hastriggers")]
    pub hastriggers: bool,
    #[serde(rename = "Rowsecurity")]
    pub rowsecurity: bool,
}

impl Table {
    pub fn from_row(row: &Row) -> Self {
        Self {
            schemaname: row.get("schemaname"),
            tablename: row.get("tablename"),
            tableowner: row.get("tableowner"),
            tablespace: row.get("tablespace"),
            hasindexes: row.get("hasindexes"),
            hasrules: row.get("hasrules"),
            hastriggers: row.get("hastriggers"),
            rowsecurity: row.get("rowsecurity"),
        }
    }
}

/// One row of `information_schema.schemata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "Catalog_name")]
    pub catalog_name: Option<String>,
    #[serde(rename = "Schema_name")]
    pub schema_name: Option<String>,
    #[serde(rename = "Schema_owner")]
    pub schema_owner: Option<String>,
    #[serde(rename = "Default_character_set_catalog")]
    pub default_character_set_catalog: Option<String>,
    #[serde(rename = "Default_character_set_schema")]
    pub default_character_set_schema: Option<String>,
    #[serde(rename = "Default_character_set_name")]
    pub default_character_set_name: Option<String>,
    #[serde(rename = "Sql_path")]
    pub sql_path: Option<String>,
}

impl Schema {
    pub fn from_row(row: &Row) -> Self {
        Self {
            catalog_name: row.get("catalog_name"),
            schema_name: row.get("schema_name"),
            schema_owner: row.get("schema_owner"),
            default_character_set_catalog: row.get("default_character_set_catalog"),
            default_character_set_schema: row.get("default_character_set_schema"),
            default_character_set_name: row.get("default_character_set_name"),
            sql_path: row.get("sql_path"),
        }
    }
}

/// One row of `information_schema.routines` (projected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    #[serde(rename = "Specific_schema")]
    pub specific_schema: Option<String>,
    #[serde(rename = "Specific_name")]
    pub specific_name: Option<String>,
    #[serde(rename = "Type_udt_name")]
    pub type_udt_name: Option<String>,
}

impl Function {
    pub fn from_row(row: &Row) -> Self {
        Self {
            specific_schema: row.get("specific_schema"),
            specific_name: row.get("specific_name"),
            type_udt_name: row.get("type_udt_name"),
        }
    }
}

/// One row of `information_schema.columns` (projected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "Column_name")]
    pub column_name: Option<String>,
    #[serde(rename = "Data_type")]
    pub data_type: Option<String>,
    #[serde(rename = "Collation_name")]
    pub collation_name: Option<String>,
    #[serde(rename = "Is_nullable")]
    pub is_nullable: Option<String>,
    #[serde(rename = "Column_default")]
    pub column_default: Option<String>,
}

impl Column {
    pub fn from_row(row: &Row) -> Self {
        Self {
            column_name: row.get("column_name"),
            data_type: row.get("data_type"),
            collation_name: row.get("collation_name"),
            is_nullable: row.get("is_nullable"),
            column_default: row.get("column_default"),
        }
    }
}

/// One row of `pg_indexes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    #[serde(rename = "Schemaname")]
    pub schemaname: Option<String>,
    #[serde(rename = "Tablename")]
    pub tablename: Option<String>,
    #[serde(rename = "Indexname")]
    pub indexname: Option<String>,
    #[serde(rename = "Tablespace")]
    pub tablespace: Option<String>,
    #[serde(rename = "Indexdef")]
    pub indexdef: Option<String>,
}

impl Index {
    pub fn from_row(row: &Row) -> Self {
        Self {
            schemaname: row.get("schemaname"),
            tablename: row.get("tablename"),
            indexname: row.get("indexname"),
            tablespace: row.get("tablespace"),
            indexdef: row.get("indexdef"),
        }
    }
}

/// The data type of a single column (`/dc` response).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataType {
    #[serde(rename = "Data_type")]
    pub data_type: Option<String>,
}

impl DataType {
    pub fn from_row(row: &Row) -> Self {
        Self {
            data_type: row.get("data_type"),
        }
    }
}

/// One row of `pg_user` (projected to the user name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Usename")]
    pub usename: Option<String>,
}

impl User {
    pub fn from_row(row: &Row) -> Self {
        Self {
            usename: row.get("usename"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_serializes_with_wire_keys() {
        let column = Column {
            column_name: Some("id".to_string()),
            data_type: Some("integer".to_string()),
            collation_name: None,
            is_nullable: Some("NO".to_string()),
            column_default: None,
        };
        let json = serde_json::to_string(&column).unwrap();
        assert!(json.contains(r#""Column_name":"id""#));
        assert!(json.contains(r#""Is_nullable":"NO""#));
        assert!(json.contains(r#""Column_default":null"#));
    }

    #[test]
    fn table_round_trips() {
        let table = Table {
            schemaname: Some("public".to_string()),
            tablename: Some("document".to_string()),
            tableowner: Some("postgres".to_string()),
            tablespace: None,
            hasindexes: true,
            hasrules: false,
            hastriggers: false,
            rowsecurity: false,
        };
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tablename.as_deref(), Some("document"));
        assert!(back.hasindexes);
    }
}
