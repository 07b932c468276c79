//! Raw SQL handler: /execSql
//!
//! The request body *is* the SQL text — no JSON envelope. A body whose
//! trimmed text begins with the literal token `SELECT` is treated as a read
//! and row-serialized; anything else runs through the transaction executor.

use actix_web::HttpResponse;

use super::envelope_response;
use crate::error::ApiError;
use crate::sql::statements::Statement;
use crate::sql::Database;

pub(super) async fn exec_sql(db: &Database, body: &[u8]) -> Result<HttpResponse, ApiError> {
    let sql = std::str::from_utf8(body)
        .map_err(|err| ApiError::Decode(format!("request body is not UTF-8: {err}")))?;

    if sql.trim_start().starts_with("SELECT") {
        Ok(envelope_response(db.query_jsonl(sql).await?))
    } else {
        let stmt = Statement {
            sql: sql.to_string(),
            params: Vec::new(),
        };
        Ok(envelope_response(db.execute(&stmt).await?))
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn select_detection_is_prefix_of_trimmed_text() {
        // mirrors the branch in exec_sql
        let is_read = |sql: &str| sql.trim_start().starts_with("SELECT");
        assert!(is_read("SELECT 1"));
        assert!(is_read("  \n SELECT * FROM foo"));
        assert!(!is_read("DELETE FROM foo"));
        assert!(!is_read("select 1")); // lowercase is executed, not read
        assert!(!is_read(""));
    }
}
