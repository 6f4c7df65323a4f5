use async_trait::async_trait;
use deadpool_postgres::Pool;

use crate::models::User;
use crate::store::{
    connection::StoreConfig,
    error::Result,
    CredentialStore,
};

/// User store backed by a PostgreSQL JSONB collection
///
/// Each collection is a table with a single `doc` column. No index or unique
/// constraint is created on the email field.
#[derive(Clone)]
pub struct PgUserStore {
    pool: Pool,
    collection: String,
}

impl PgUserStore {
    /// Open the pool, verify connectivity and create the collection if missing
    pub async fn new(config: StoreConfig) -> Result<Self> {
        let collection = config.collection.clone();
        let pool = config.build_pool()?;

        let store = Self { pool, collection };
        store.ensure_collection().await?;

        tracing::info!(
            host = %config.host,
            database = %config.database,
            collection = %store.collection,
            "User store ready"
        );

        Ok(store)
    }

    /// Name of the table backing this collection
    pub fn collection(&self) -> &str {
        &self.collection
    }

    async fn ensure_collection(&self) -> Result<()> {
        let conn = self.pool.get().await?;

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (doc JSONB NOT NULL)",
            self.collection
        );
        conn.batch_execute(&sql).await?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.pool.get().await?;

        let sql = format!(
            "SELECT doc FROM {} WHERE doc->>'email' = $1 LIMIT 1",
            self.collection
        );

        let rows = conn.query(&sql, &[&email]).await?;

        match rows.first() {
            Some(row) => {
                let doc: serde_json::Value = row.try_get(0)?;
                Ok(Some(serde_json::from_value(doc)?))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, user: &User) -> Result<()> {
        let conn = self.pool.get().await?;

        let sql = format!("INSERT INTO {} (doc) VALUES ($1)", self.collection);
        let doc = serde_json::to_value(user)?;

        conn.execute(&sql, &[&doc]).await?;
        Ok(())
    }
}
