//! DDL and administration handlers: /create /createIndex /delete /own /add

use actix_web::HttpResponse;

use super::{decode, run_mutation};
use crate::error::ApiError;
use crate::models::requests::{
    CreateIndexRequest, CreateUserRequest, DeleteRequest, OwnerRequest, TableRequest,
};
use crate::sql::{statements, Database};

pub(super) async fn create_table(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: TableRequest = decode(body)?;
    run_mutation(db, statements::create_table(&req.table_name)).await
}

pub(super) async fn create_index(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: CreateIndexRequest = decode(body)?;
    run_mutation(
        db,
        statements::create_index(&req.index_name, &req.table_name, &req.column_name),
    )
    .await
}

pub(super) async fn delete_columns(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: DeleteRequest = decode(body)?;
    run_mutation(db, statements::delete_columns(&req.table_name, &req.cols)).await
}

pub(super) async fn set_owner(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: OwnerRequest = decode(body)?;
    run_mutation(db, statements::set_owner(&req.table_name, &req.owner)).await
}

pub(super) async fn create_user(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let req: CreateUserRequest = decode(body)?;
    run_mutation(db, statements::create_user(&req.user_name)).await
}
