//! HTTP request handlers
//!
//! [`dispatch`] is the single entry point: it resolves the request path to
//! a [`Command`] and matches exhaustively into the per-command handlers,
//! grouped here by kind.

pub mod ddl;
pub mod dml;
pub mod introspect;
pub mod raw;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Command, CommandResult};
use crate::sql::ident::IdentError;
use crate::sql::statements::Statement;
use crate::sql::Database;

/// Route a request to its command handler. Unknown paths are client errors.
pub async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let Some(command) = Command::from_path(req.path()) else {
        return Ok(HttpResponse::BadRequest().body("invalid request URL"));
    };
    log::debug!("dispatching {:?} ({})", command, req.path());
    match command {
        Command::ListTables => introspect::list_tables(&db).await,
        Command::ListSchemas => introspect::list_schemas(&db).await,
        Command::ListFunctions => introspect::list_functions(&db).await,
        Command::ListColumns => introspect::list_columns(&db, &body).await,
        Command::ColumnType => introspect::column_type(&db, &body).await,
        Command::ListIndexes => introspect::list_indexes(&db, &body).await,
        Command::ListUsers => introspect::list_users(&db).await,
        Command::CreateTable => ddl::create_table(&db, &body).await,
        Command::CreateIndex => ddl::create_index(&db, &body).await,
        Command::DeleteColumns => ddl::delete_columns(&db, &body).await,
        Command::SetOwner => ddl::set_owner(&db, &body).await,
        Command::CreateUser => ddl::create_user(&db, &body).await,
        Command::ReadRows => dml::read_rows(&db, &body).await,
        Command::InsertRow => dml::insert_row(&db, &body).await,
        Command::UpsertRow => dml::upsert_row(&db, &body).await,
        Command::ExecSql => raw::exec_sql(&db, &body).await,
    }
}

/// Decode a JSON request body into the payload type the command expects.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Envelope responses ride HTTP 200 on success and HTTP 500 on a domain
/// error, always as JSON.
fn envelope_response(result: CommandResult) -> HttpResponse {
    if result.is_error() {
        HttpResponse::InternalServerError().json(result)
    } else {
        HttpResponse::Ok().json(result)
    }
}

/// Run a built mutation through the transaction executor; a statement that
/// failed to build (invalid identifier) is a domain error and never reaches
/// the database.
async fn run_mutation(
    db: &Database,
    built: Result<Statement, IdentError>,
) -> Result<HttpResponse, ApiError> {
    match built {
        Ok(stmt) => Ok(envelope_response(db.execute(&stmt).await?)),
        Err(err) => Ok(envelope_response(CommandResult::error(err.to_string()))),
    }
}
