//! Database access layer
//!
//! One `tokio_postgres::Client` is opened at startup and shared for the
//! process lifetime. Every command execution holds the mutex for its whole
//! database span (query, or begin/execute/commit), so concurrent HTTP
//! requests are serialized onto the connection in FIFO order and no two
//! transactions ever interleave.

pub mod executor;
pub mod ident;
pub mod literal;
pub mod rows;
pub mod statements;

use tokio::sync::Mutex;
use tokio_postgres::{Client, NoTls};

/// Shared handle to the single server connection.
pub struct Database {
    client: Mutex<Client>,
}

impl Database {
    /// Connect to PostgreSQL and spawn the connection driver task.
    ///
    /// The driver task owns the socket; its termination (clean or not) ends
    /// the usefulness of this handle, so it is logged at error level.
    pub async fn connect(url: &str) -> Result<Database, tokio_postgres::Error> {
        let (client, connection) = tokio_postgres::connect(url, NoTls).await?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                log::error!("database connection terminated: {err}");
            }
        });
        Ok(Database {
            client: Mutex::new(client),
        })
    }
}
