//! Row-level handlers: /read /insert /upsert

use actix_web::HttpResponse;

use super::{decode, envelope_response, run_mutation};
use crate::error::ApiError;
use crate::models::requests::{InsertRequest, ReadRequest};
use crate::models::CommandResult;
use crate::sql::executor::domain_message;
use crate::sql::statements::Statement;
use crate::sql::{statements, Database};

pub(super) async fn read_rows(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: ReadRequest = decode(body)?;
    match statements::read_rows(&req.table_name, &req.column_names) {
        Ok(stmt) => Ok(envelope_response(db.query_jsonl(&stmt.sql).await?)),
        Err(err) => Ok(envelope_response(CommandResult::error(err.to_string()))),
    }
}

pub(super) async fn insert_row(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: InsertRequest = decode(body)?;
    run_mutation(db, statements::insert_row(&req.table_name, &req.values)).await
}

/// Discover the table's primary-key column, then insert-or-update on it.
/// A table without a primary key is a domain error; no DML is attempted.
pub(super) async fn upsert_row(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: InsertRequest = decode(body)?;

    let constraints = match catalog_rows(db, &statements::pkey_constraint(&req.table_name)).await? {
        Ok(rows) => rows,
        Err(result) => return Ok(envelope_response(result)),
    };
    let Some(constraint) = constraints.first() else {
        return Ok(envelope_response(CommandResult::error(format!(
            "table '{}' has no primary key",
            req.table_name
        ))));
    };
    let constraint_name: String = constraint.get("conname");

    let key_columns = match catalog_rows(
        db,
        &statements::pkey_column(&req.table_name, &constraint_name),
    )
    .await?
    {
        Ok(rows) => rows,
        Err(result) => return Ok(envelope_response(result)),
    };
    let Some(key_column) = key_columns.first() else {
        return Ok(envelope_response(CommandResult::error(format!(
            "no key column found for constraint '{constraint_name}' on table '{}'",
            req.table_name
        ))));
    };
    let pkey_column: String = key_column.get("column_name");

    run_mutation(
        db,
        statements::upsert_row(&req.table_name, &req.values, &pkey_column),
    )
    .await
}

/// A catalog query on the upsert path: a server-reported failure (e.g. the
/// table does not exist) is a domain error envelope, not a service failure.
async fn catalog_rows(
    db: &Database,
    stmt: &Statement,
) -> Result<Result<Vec<tokio_postgres::Row>, CommandResult>, ApiError> {
    match db.query(stmt).await {
        Ok(rows) => Ok(Ok(rows)),
        Err(err) => match domain_message(&err) {
            Some(message) => Ok(Err(CommandResult::error(message))),
            None => Err(ApiError::Database(err)),
        },
    }
}
