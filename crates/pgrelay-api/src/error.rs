//! Service-level error type
//!
//! `ApiError` covers the transport, decode, and infrastructure failure
//! classes; all of them surface as HTTP 500 with a plain-text diagnostic.
//! Domain-level failures (a statement rejected by the database, a missing
//! primary key) never pass through here — they travel as
//! [`CommandResult::error`](crate::models::CommandResult::error) envelopes.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be decoded into the command's payload type.
    #[error("error decoding request body: {0}")]
    Decode(String),

    /// Driver-level database failure: broken connection, failed
    /// begin/commit/rollback, or any error the server did not report as a
    /// statement error.
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn decode_errors_render_as_plain_500() {
        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("decoding request body"));
    }
}
