//! Statement execution
//!
//! Two paths share the single connection: catalog reads return typed rows,
//! and the two generic paths used by every other command — transactional
//! execution for mutations, prepare-plus-simple-query for row-returning
//! reads. A server-reported statement failure is a domain error and becomes
//! a [`CommandResult::error`] envelope; everything else (broken connection,
//! failed begin/commit/rollback) is infrastructure trouble and propagates as
//! [`ApiError`].

use tokio_postgres::types::ToSql;
use tokio_postgres::Row;

use crate::error::ApiError;
use crate::models::CommandResult;
use crate::sql::literal::RawLiteral;
use crate::sql::statements::Statement;
use crate::sql::{rows, Database};

/// The message of a server-reported statement error, if that is what `err`
/// is. Driver-level failures return `None`.
pub fn domain_message(err: &tokio_postgres::Error) -> Option<String> {
    err.as_db_error().map(|db| db.message().to_string())
}

impl Database {
    /// Run a catalog query and return its rows. Parameters are bound as
    /// plain text values (they are always table/column/constraint names).
    pub async fn query(&self, stmt: &Statement) -> Result<Vec<Row>, tokio_postgres::Error> {
        let client = self.client.lock().await;
        let params: Vec<&(dyn ToSql + Sync)> = stmt
            .params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();
        client.query(stmt.sql.as_str(), &params).await
    }

    /// Execute a mutating statement inside a transaction.
    ///
    /// Begin, execute with the statement's values bound as text-format
    /// parameters, commit. A statement failure rolls back and yields an
    /// error envelope; begin/commit/rollback failures propagate as
    /// infrastructure errors. Once begun, the transaction guard rolls back
    /// on drop unless committed, so no exit path leaves it open.
    pub async fn execute(&self, stmt: &Statement) -> Result<CommandResult, ApiError> {
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        let literals: Vec<RawLiteral<'_>> = stmt.params.iter().map(|p| RawLiteral(p)).collect();
        let params: Vec<&(dyn ToSql + Sync)> = literals
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();
        match tx.execute(stmt.sql.as_str(), &params).await {
            Ok(affected) => {
                tx.commit().await?;
                Ok(CommandResult::success(format!("{affected} row(s) affected")))
            }
            Err(err) => match domain_message(&err) {
                Some(message) => {
                    tx.rollback().await?;
                    log::warn!("statement rejected: {message}");
                    Ok(CommandResult::error(message))
                }
                None => Err(ApiError::Database(err)),
            },
        }
    }

    /// Run a row-returning statement and serialize the result set as
    /// newline-delimited JSON.
    ///
    /// The statement is prepared first — that supplies the column types for
    /// the serializer and rejects multi-statement input before anything
    /// runs — then executed over the simple protocol so every value arrives
    /// in its text form regardless of type.
    pub async fn query_jsonl(&self, sql: &str) -> Result<CommandResult, ApiError> {
        let client = self.client.lock().await;
        let prepared = match client.prepare(sql).await {
            Ok(prepared) => prepared,
            Err(err) => return reject_or_fail(err),
        };
        let messages = match client.simple_query(sql).await {
            Ok(messages) => messages,
            Err(err) => return reject_or_fail(err),
        };
        let jsonl = rows::rows_to_jsonl(prepared.columns(), &messages);
        Ok(CommandResult::success(jsonl))
    }
}

fn reject_or_fail(err: tokio_postgres::Error) -> Result<CommandResult, ApiError> {
    match domain_message(&err) {
        Some(message) => {
            log::warn!("query rejected: {message}");
            Ok(CommandResult::error(message))
        }
        None => Err(ApiError::Database(err)),
    }
}
