#![cfg_attr(
    not(any(feature = "pg", feature = "sqlite")),
    allow(unused_imports, unused_variables, dead_code, unreachable_code)
)]

//! Database handle for the lead server.
//!
//! Wraps one pooled sqlx connection (SQLite or PostgreSQL, chosen by DSN scheme)
//! and exposes it as a SeaORM `DatabaseConnection` for repositories.
//!
//! # Features
//! - `sqlite` (default), `pg`: enable the matching sqlx backend
//!
//! # Example
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> db::Result<()> {
//!     use db::{ConnectOpts, DbHandle};
//!
//!     let db = DbHandle::connect("sqlite://data/leads.db", ConnectOpts::default()).await?;
//!     let conn = db.sea(); // hand this to SeaORM repositories
//!     db.close().await;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

#[cfg(feature = "pg")]
use sqlx::postgres::{PgPool, PgPoolOptions};
#[cfg(feature = "sqlite")]
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use sea_orm::DatabaseConnection;
#[cfg(feature = "pg")]
use sea_orm::SqlxPostgresConnector;
#[cfg(feature = "sqlite")]
use sea_orm::SqlxSqliteConnector;

use thiserror::Error;

/// Library-local result type.
pub type Result<T> = std::result::Result<T, DbError>;

/// Typed error for the DB handle and helpers.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Unknown DSN: {0}")]
    UnknownDsn(String),

    #[error("Feature not enabled: {0}")]
    FeatureDisabled(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Sea(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supported engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbEngine {
    Postgres,
    Sqlite,
}

/// Connection options; each driver applies the subset it supports.
#[derive(Clone, Debug)]
pub struct ConnectOpts {
    /// Maximum number of connections in the pool.
    pub max_conns: Option<u32>,
    /// Timeout to acquire a connection from the pool.
    pub acquire_timeout: Option<Duration>,
    /// SQLite `busy_timeout` pragma (file databases only).
    pub sqlite_busy_timeout: Option<Duration>,
    /// For SQLite file DSNs, create parent directories if missing.
    pub create_sqlite_dirs: bool,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            max_conns: Some(10),
            acquire_timeout: Some(Duration::from_secs(30)),
            sqlite_busy_timeout: Some(Duration::from_millis(DEFAULT_SQLITE_BUSY_TIMEOUT_MS)),
            create_sqlite_dirs: true,
        }
    }
}

const DEFAULT_SQLITE_BUSY_TIMEOUT_MS: u64 = 5000;

/// One concrete sqlx pool.
#[derive(Clone, Debug)]
enum DbPool {
    #[cfg(feature = "pg")]
    Postgres(PgPool),
    #[cfg(feature = "sqlite")]
    Sqlite(SqlitePool),
}

/// Main handle.
#[derive(Debug)]
pub struct DbHandle {
    engine: DbEngine,
    pool: DbPool,
    dsn: String,
    sea: DatabaseConnection,
}

impl DbHandle {
    /// Detect engine by DSN scheme. The tail (credentials etc.) is not inspected.
    pub fn detect(dsn: &str) -> Result<DbEngine> {
        let s = dsn.trim_start();
        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            Ok(DbEngine::Postgres)
        } else if s.starts_with("sqlite:") {
            Ok(DbEngine::Sqlite)
        } else {
            Err(DbError::UnknownDsn(redact_credentials_in_dsn(dsn)))
        }
    }

    /// Connect and build handle.
    pub async fn connect(dsn: &str, opts: ConnectOpts) -> Result<Self> {
        let engine = Self::detect(dsn)?;
        match engine {
            #[cfg(feature = "pg")]
            DbEngine::Postgres => {
                let mut o = PgPoolOptions::new();
                if let Some(n) = opts.max_conns {
                    o = o.max_connections(n);
                }
                if let Some(t) = opts.acquire_timeout {
                    o = o.acquire_timeout(t);
                }
                let pool = o.connect(dsn).await?;
                let sea = SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone());
                Ok(Self {
                    engine,
                    pool: DbPool::Postgres(pool),
                    dsn: dsn.to_string(),
                    sea,
                })
            }
            #[cfg(feature = "sqlite")]
            DbEngine::Sqlite => {
                prepare_sqlite_path(dsn, opts.create_sqlite_dirs)?;
                let in_memory = is_sqlite_memory(dsn);

                let mut o = SqlitePoolOptions::new();
                if in_memory {
                    // Every connection to :memory: is a separate database, so the
                    // pool holds exactly one connection for the process lifetime.
                    o = o
                        .max_connections(1)
                        .min_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None);
                } else if let Some(n) = opts.max_conns {
                    o = o.max_connections(n);
                }
                if let Some(t) = opts.acquire_timeout {
                    o = o.acquire_timeout(t);
                }

                let busy_ms = opts
                    .sqlite_busy_timeout
                    .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
                o = o.after_connect(move |conn, _meta| {
                    Box::pin(async move {
                        if in_memory {
                            sqlx::query("PRAGMA journal_mode = DELETE")
                                .execute(&mut *conn)
                                .await?;
                        } else {
                            sqlx::query("PRAGMA journal_mode = WAL")
                                .execute(&mut *conn)
                                .await?;
                            if let Some(ms) = busy_ms {
                                sqlx::query(&format!("PRAGMA busy_timeout = {ms}"))
                                    .execute(&mut *conn)
                                    .await?;
                            }
                        }
                        sqlx::query("PRAGMA synchronous = NORMAL")
                            .execute(&mut *conn)
                            .await?;
                        Ok(())
                    })
                });

                let pool = o.connect(&sqlite_connect_url(dsn)).await?;
                let sea = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone());

                Ok(Self {
                    engine,
                    pool: DbPool::Sqlite(pool),
                    dsn: dsn.to_string(),
                    sea,
                })
            }
            #[cfg(not(feature = "pg"))]
            DbEngine::Postgres => Err(DbError::FeatureDisabled("PostgreSQL feature not enabled")),
            #[cfg(not(feature = "sqlite"))]
            DbEngine::Sqlite => Err(DbError::FeatureDisabled("SQLite feature not enabled")),
        }
    }

    /// Graceful pool close. (Dropping the pool also closes it; this just makes it explicit.)
    pub async fn close(self) {
        match self.pool {
            #[cfg(feature = "pg")]
            DbPool::Postgres(p) => p.close().await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(p) => p.close().await,
        }
    }

    /// Round-trip `SELECT 1` to verify the pool is usable.
    pub async fn ping(&self) -> Result<()> {
        match &self.pool {
            #[cfg(feature = "pg")]
            DbPool::Postgres(p) => {
                sqlx::query("SELECT 1").execute(p).await?;
            }
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(p) => {
                sqlx::query("SELECT 1").execute(p).await?;
            }
        }
        Ok(())
    }

    pub fn engine(&self) -> DbEngine {
        self.engine
    }

    /// DSN used for this connection, with any password masked.
    pub fn dsn(&self) -> String {
        redact_credentials_in_dsn(&self.dsn)
    }

    /// SeaORM connection (clone; cheap handle).
    pub fn sea(&self) -> DatabaseConnection {
        self.sea.clone()
    }
}

/// Mask the password component of a URL-style DSN for logging.
pub fn redact_credentials_in_dsn(dsn: &str) -> String {
    match url::Url::parse(dsn) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => dsn.to_string(),
    }
}

fn is_sqlite_memory(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}

/// sqlx only creates missing SQLite files when asked to.
fn sqlite_connect_url(dsn: &str) -> String {
    if is_sqlite_memory(dsn) || dsn.contains("mode=") {
        dsn.to_string()
    } else if dsn.contains('?') {
        format!("{dsn}&mode=rwc")
    } else {
        format!("{dsn}?mode=rwc")
    }
}

fn prepare_sqlite_path(dsn: &str, create_dirs: bool) -> Result<()> {
    if !create_dirs || is_sqlite_memory(dsn) {
        return Ok(());
    }

    // Handles "sqlite:/path" and "sqlite://path"; URI forms like
    // "sqlite:file:x?..." have no directory to create.
    let raw = dsn
        .strip_prefix("sqlite://")
        .or_else(|| dsn.strip_prefix("sqlite:"))
        .unwrap_or(dsn);
    let path = raw.split('?').next().unwrap_or(raw);

    if !path.starts_with("file:") {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    Ok(())
}

// ===================== tests =====================
