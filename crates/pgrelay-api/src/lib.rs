// pgrelay API library
//
// This crate provides the REST command layer for pgrelay: request/response
// models, command dispatch, SQL statement construction, and the row-to-JSON
// serialization used by read commands.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sql;
