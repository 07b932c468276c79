//! Statement construction
//!
//! Pure functions from decoded command payloads to SQL text plus its bound
//! parameters, one per command kind. Identifiers are validated and quoted
//! (see [`ident`](super::ident)); values never appear in the SQL text — they
//! ride as parameters.

use crate::models::requests::ColVal;
use crate::sql::ident::{self, IdentError};

/// SQL text plus the parameter values bound at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<String>,
}

impl Statement {
    fn fixed(sql: impl Into<String>) -> Statement {
        Statement {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn with_params(sql: impl Into<String>, params: Vec<String>) -> Statement {
        Statement {
            sql: sql.into(),
            params,
        }
    }
}

/// Table name that selects every table in `/d`.
pub const ALL_TABLES: &str = "all";

pub fn list_tables() -> Statement {
    Statement::fixed("SELECT * FROM pg_catalog.pg_tables WHERE schemaname = 'public'")
}

pub fn list_schemas() -> Statement {
    Statement::fixed("SELECT * FROM information_schema.schemata")
}

pub fn list_functions() -> Statement {
    Statement::fixed(
        "SELECT specific_schema, specific_name, type_udt_name \
         FROM information_schema.routines WHERE specific_schema = 'public'",
    )
}

pub fn list_columns(table: &str) -> Statement {
    const PROJECTION: &str =
        "SELECT column_name, data_type, collation_name, is_nullable, column_default \
         FROM information_schema.columns";
    if table == ALL_TABLES {
        Statement::fixed(PROJECTION)
    } else {
        Statement::with_params(
            format!("{PROJECTION} WHERE table_name = $1"),
            vec![table.to_string()],
        )
    }
}

pub fn column_type(table: &str, column: &str) -> Statement {
    Statement::with_params(
        "SELECT data_type FROM information_schema.columns \
         WHERE table_name = $1 AND column_name = $2",
        vec![table.to_string(), column.to_string()],
    )
}

pub fn list_indexes(table: &str) -> Statement {
    Statement::with_params(
        "SELECT * FROM pg_indexes WHERE tablename = $1",
        vec![table.to_string()],
    )
}

pub fn list_users() -> Statement {
    Statement::fixed("SELECT usename FROM pg_user")
}

/// Constraints of `table` that reference no foreign table; the first match
/// is taken as the primary-key constraint.
pub fn pkey_constraint(table: &str) -> Statement {
    Statement::with_params(
        "SELECT conname FROM pg_constraint \
         WHERE conrelid = $1::text::regclass AND confrelid = 0",
        vec![table.to_string()],
    )
}

/// The column constrained by `constraint` on `table`.
pub fn pkey_column(table: &str, constraint: &str) -> Statement {
    Statement::with_params(
        "SELECT column_name FROM information_schema.key_column_usage \
         WHERE table_name = $1 AND constraint_name = $2",
        vec![table.to_string(), constraint.to_string()],
    )
}

pub fn create_table(table: &str) -> Result<Statement, IdentError> {
    Ok(Statement::fixed(format!(
        "CREATE TABLE {}()",
        ident::quote(table)?
    )))
}

pub fn create_index(index: &str, table: &str, column: &str) -> Result<Statement, IdentError> {
    Ok(Statement::fixed(format!(
        "CREATE INDEX {} ON {} ({})",
        ident::quote(index)?,
        ident::quote(table)?,
        ident::quote(column)?
    )))
}

pub fn read_rows(table: &str, columns: &[String]) -> Result<Statement, IdentError> {
    let projection = if columns.is_empty() {
        "*".to_string()
    } else {
        columns
            .iter()
            .map(|c| ident::quote(c))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };
    Ok(Statement::fixed(format!(
        "SELECT {projection} FROM {}",
        ident::quote(table)?
    )))
}

pub fn insert_row(table: &str, values: &[ColVal]) -> Result<Statement, IdentError> {
    let table = ident::quote(table)?;
    let columns = values
        .iter()
        .map(|cv| ident::quote(&cv.column_name))
        .collect::<Result<Vec<_>, _>>()?
        .join(",");
    let placeholders = placeholder_list(values.len());
    let params = values.iter().map(|cv| cv.value.clone()).collect();
    Ok(Statement::with_params(
        format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})"),
        params,
    ))
}

/// Insert-or-update conflicting on `pkey_column`, discovered beforehand via
/// [`pkey_constraint`] and [`pkey_column`]. Each value is bound once and its
/// placeholder reused in the update list.
pub fn upsert_row(
    table: &str,
    values: &[ColVal],
    pkey_column: &str,
) -> Result<Statement, IdentError> {
    let table = ident::quote(table)?;
    let mut columns = Vec::with_capacity(values.len());
    let mut updates = Vec::with_capacity(values.len());
    for (i, cv) in values.iter().enumerate() {
        let column = ident::quote(&cv.column_name)?;
        updates.push(format!("{column} = ${}", i + 1));
        columns.push(column);
    }
    let params = values.iter().map(|cv| cv.value.clone()).collect();
    Ok(Statement::with_params(
        format!(
            "INSERT INTO {table} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {}",
            columns.join(","),
            placeholder_list(values.len()),
            ident::quote(pkey_column)?,
            updates.join(", ")
        ),
        params,
    ))
}

pub fn delete_columns(table: &str, columns: &[String]) -> Result<Statement, IdentError> {
    let quoted = columns
        .iter()
        .map(|c| ident::quote(c))
        .collect::<Result<Vec<_>, _>>()?
        .join(",");
    Ok(Statement::fixed(format!(
        "ALTER TABLE {} DROP COLUMN {quoted}",
        ident::quote(table)?
    )))
}

pub fn set_owner(table: &str, owner: &str) -> Result<Statement, IdentError> {
    Ok(Statement::fixed(format!(
        "ALTER TABLE {} OWNER TO {}",
        ident::quote(table)?,
        ident::quote(owner)?
    )))
}

pub fn create_user(name: &str) -> Result<Statement, IdentError> {
    Ok(Statement::fixed(format!(
        "CREATE USER {}",
        ident::quote(name)?
    )))
}

fn placeholder_list(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colvals(pairs: &[(&str, &str)]) -> Vec<ColVal> {
        pairs
            .iter()
            .map(|(c, v)| ColVal {
                column_name: c.to_string(),
                value: v.to_string(),
            })
            .collect()
    }

    #[test]
    fn create_table_is_empty_parenthesized() {
        let stmt = create_table("foo").unwrap();
        assert_eq!(stmt.sql, "CREATE TABLE \"foo\"()");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn create_table_rejects_bad_identifier() {
        assert!(create_table("foo\"(); DROP TABLE bar; --").is_err());
    }

    #[test]
    fn create_index_quotes_all_three_names() {
        let stmt = create_index("idx_doc_id", "document", "id").unwrap();
        assert_eq!(
            stmt.sql,
            "CREATE INDEX \"idx_doc_id\" ON \"document\" (\"id\")"
        );
    }

    #[test]
    fn read_rows_empty_column_list_selects_star() {
        let stmt = read_rows("foo", &[]).unwrap();
        assert_eq!(stmt.sql, "SELECT * FROM \"foo\"");
    }

    #[test]
    fn read_rows_quotes_each_column() {
        let stmt = read_rows("foo", &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(stmt.sql, "SELECT \"a\", \"b\" FROM \"foo\"");
    }

    #[test]
    fn insert_binds_values_as_parameters() {
        let stmt = insert_row("t", &colvals(&[("a", "1"), ("b", "x")])).unwrap();
        assert_eq!(stmt.sql, "INSERT INTO \"t\" (\"a\",\"b\") VALUES ($1,$2)");
        assert_eq!(stmt.params, vec!["1".to_string(), "x".to_string()]);
    }

    #[test]
    fn upsert_conflicts_on_the_key_and_reuses_placeholders() {
        let stmt = upsert_row("mytable", &colvals(&[("foo", "2.2"), ("bar", "3")]), "id").unwrap();
        assert_eq!(
            stmt.sql,
            "INSERT INTO \"mytable\" (\"foo\",\"bar\") VALUES ($1,$2) \
             ON CONFLICT (\"id\") DO UPDATE SET \"foo\" = $1, \"bar\" = $2"
        );
        assert_eq!(stmt.params, vec!["2.2".to_string(), "3".to_string()]);
    }

    #[test]
    fn delete_columns_drops_each_quoted_column() {
        let stmt = delete_columns("t", &["old".to_string(), "older".to_string()]).unwrap();
        assert_eq!(stmt.sql, "ALTER TABLE \"t\" DROP COLUMN \"old\",\"older\"");
    }

    #[test]
    fn set_owner_and_create_user_quote_names() {
        assert_eq!(
            set_owner("t", "alice").unwrap().sql,
            "ALTER TABLE \"t\" OWNER TO \"alice\""
        );
        assert_eq!(create_user("bob").unwrap().sql, "CREATE USER \"bob\"");
    }

    #[test]
    fn list_columns_wildcard_drops_the_filter() {
        let all = list_columns(ALL_TABLES);
        assert!(!all.sql.contains("WHERE"));
        assert!(all.params.is_empty());

        let one = list_columns("document");
        assert!(one.sql.ends_with("WHERE table_name = $1"));
        assert_eq!(one.params, vec!["document".to_string()]);
    }

    #[test]
    fn column_type_filters_by_table_and_column() {
        let stmt = column_type("foo", "mycol");
        assert!(stmt.sql.contains("table_name = $1 AND column_name = $2"));
        assert_eq!(stmt.params, vec!["foo".to_string(), "mycol".to_string()]);
    }

    #[test]
    fn pkey_discovery_is_parameterized() {
        let constraint = pkey_constraint("mytable");
        assert!(constraint.sql.contains("confrelid = 0"));
        assert_eq!(constraint.params, vec!["mytable".to_string()]);

        let column = pkey_column("mytable", "mytable_pkey");
        assert_eq!(
            column.params,
            vec!["mytable".to_string(), "mytable_pkey".to_string()]
        );
    }
}
