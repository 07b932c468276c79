//! Catalog introspection handlers: /dt /dn /df /d /dc /idx /du

use actix_web::HttpResponse;

use super::{decode, envelope_response};
use crate::error::ApiError;
use crate::models::catalog::{Column, DataType, Function, Index, Schema, Table, User};
use crate::models::requests::{ColumnRequest, TableRequest};
use crate::models::CommandResult;
use crate::sql::{statements, Database};

pub(super) async fn list_tables(db: &Database) -> Result<HttpResponse, ApiError> {
    let rows = db.query(&statements::list_tables()).await?;
    let tables: Vec<Table> = rows.iter().map(Table::from_row).collect();
    Ok(HttpResponse::Ok().json(tables))
}

pub(super) async fn list_schemas(db: &Database) -> Result<HttpResponse, ApiError> {
    let rows = db.query(&statements::list_schemas()).await?;
    let schemas: Vec<Schema> = rows.iter().map(Schema::from_row).collect();
    Ok(HttpResponse::Ok().json(schemas))
}

pub(super) async fn list_functions(db: &Database) -> Result<HttpResponse, ApiError> {
    let rows = db.query(&statements::list_functions()).await?;
    let functions: Vec<Function> = rows.iter().map(Function::from_row).collect();
    Ok(HttpResponse::Ok().json(functions))
}

pub(super) async fn list_columns(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: TableRequest = decode(body)?;
    let rows = db.query(&statements::list_columns(&req.table_name)).await?;
    let columns: Vec<Column> = rows.iter().map(Column::from_row).collect();
    Ok(HttpResponse::Ok().json(columns))
}

/// Exactly one column must match; zero or several is a domain error.
pub(super) async fn column_type(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: ColumnRequest = decode(body)?;
    let rows = db
        .query(&statements::column_type(&req.table_name, &req.column_name))
        .await?;
    match rows.len() {
        0 => {
            log::warn!(
                "no such column: {}.{}",
                req.table_name,
                req.column_name
            );
            Ok(envelope_response(CommandResult::error(format!(
                "no such column '{}' on table '{}'",
                req.column_name, req.table_name
            ))))
        }
        1 => Ok(HttpResponse::Ok().json(DataType::from_row(&rows[0]))),
        n => {
            log::warn!(
                "column lookup matched {n} columns: {}.{}",
                req.table_name,
                req.column_name
            );
            Ok(envelope_response(CommandResult::error(format!(
                "matched {n} columns named '{}' on table '{}'",
                req.column_name, req.table_name
            ))))
        }
    }
}

pub(super) async fn list_indexes(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: TableRequest = decode(body)?;
    let rows = db.query(&statements::list_indexes(&req.table_name)).await?;
    let indexes: Vec<Index> = rows.iter().map(Index::from_row).collect();
    Ok(HttpResponse::Ok().json(indexes))
}

pub(super) async fn list_users(db: &Database) -> Result<HttpResponse, ApiError> {
    let rows = db.query(&statements::list_users()).await?;
    let users: Vec<User> = rows.iter().map(User::from_row).collect();
    Ok(HttpResponse::Ok().json(users))
}
