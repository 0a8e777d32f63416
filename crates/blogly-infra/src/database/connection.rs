use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, DbConn, DbErr};

/// Configuration for the application database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Echo every SQL statement through the log.
    pub sql_logging: bool,
}

/// Handle on the relational store.
///
/// Opened once at process start, cloned into each repository and closed
/// explicitly at shutdown. The store is the only state shared between
/// requests.
///
/// # Example
/// ```ignore
/// let db = Database::init(&config).await?;
/// let users = SeaOrmUserRepository::new(db.shared());
/// // ... serve requests ...
/// db.close().await?;
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Arc<DbConn>,
}

impl Database {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(config.sql_logging)
            .to_owned();

        let conn = sea_orm::Database::connect(opts).await?;
        tracing::info!(
            backend = ?conn.get_database_backend(),
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Pool handle for a repository.
    pub fn shared(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Check that the store still answers.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }

    /// Close the pool if this is the last handle on it. While repositories
    /// or other clones still hold it, it is released when the last one drops.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                tracing::info!("Closing database connection");
                conn.close().await
            }
            Err(shared) => {
                tracing::debug!(
                    holders = Arc::strong_count(&shared),
                    "Database still shared, deferring close to last holder"
                );
                Ok(())
            }
        }
    }
}
