//! Append-only persistence of fetched quotes.
//!
//! The embedded SQLite database is reached through a pool capped at a single
//! connection, so at most one writer exists at any time and concurrent requests
//! queue on the pool instead of contending for the database lock.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::quote::Quote;

const CREATE_TABLE_QUERY: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT NOT NULL,
    codein TEXT NOT NULL,
    bid TEXT NOT NULL,
    ts DATETIME NOT NULL
)"#;

const INSERT_QUOTE_QUERY: &str = "INSERT INTO quotes (code, codein, bid, ts) VALUES (?, ?, ?, ?)";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Destination for fetched quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Append one quote. Existing rows are never touched.
    async fn append(&self, quote: &Quote) -> Result<(), sqlx::Error>;
}

/// SQLite-backed [`QuoteStore`].
#[derive(Clone)]
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    /// Open (creating if missing) the database at `database_url` and make sure
    /// the `quotes` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE_QUERY).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await
    }

    /// Most recently appended quote, if any.
    pub async fn latest(&self) -> Result<Option<Quote>, sqlx::Error> {
        let row = sqlx::query("SELECT code, codein, bid, ts FROM quotes ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok::<Quote, sqlx::Error>(Quote {
                code: row.try_get("code")?,
                codein: row.try_get("codein")?,
                bid: row.try_get("bid")?,
                timestamp: row.try_get::<DateTime<Utc>, _>("ts")?,
            })
        })
        .transpose()
    }

    /// Close the underlying pool; later writes fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn append(&self, quote: &Quote) -> Result<(), sqlx::Error> {
        sqlx::query(INSERT_QUOTE_QUERY)
            .bind(&quote.code)
            .bind(&quote.codein)
            .bind(&quote.bid)
            .bind(quote.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote(bid: &str) -> Quote {
        Quote {
            code: "USD".to_string(),
            codein: "BRL".to_string(),
            bid: bid.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn appends_rows_in_order() {
        let store = SqliteQuoteStore::connect("sqlite::memory:").await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.latest().await.unwrap().is_none());

        store.append(&sample_quote("5.40")).await.unwrap();
        store.append(&sample_quote("5.43")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.bid, "5.43");
        assert_eq!(latest.code, "USD");
        assert_eq!(latest.codein, "BRL");
    }

    #[tokio::test]
    async fn creates_database_file_and_reopens_it() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("quotes.db").display());

        let store = SqliteQuoteStore::connect(&url).await.unwrap();
        store.append(&sample_quote("5.43")).await.unwrap();
        store.close().await;

        let reopened = SqliteQuoteStore::connect(&url).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn append_fails_once_closed() {
        let store = SqliteQuoteStore::connect("sqlite::memory:").await.unwrap();
        store.close().await;
        assert!(store.append(&sample_quote("5.43")).await.is_err());
    }
}
