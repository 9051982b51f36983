use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::domain::{OperationType, Statement, StatementId, User, UserId};

use super::{MIGRATION_001_INITIAL, StatementRepository, UserRepository};

/// Durable store for users and statements backed by SQLite.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Get the next sequence number and increment the counter.
    async fn next_sequence(&self) -> Result<i64> {
        let row = sqlx::query(
            r#"
            UPDATE sequence_counter
            SET value = value + 1
            WHERE name = 'statement_sequence'
            RETURNING value
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to get next sequence number")?;

        Ok(row.get("value"))
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let id_str: String = row.get("id");
        let created_at_str: String = row.get("created_at");

        Ok(User {
            id: Uuid::parse_str(&id_str).context("Invalid user ID")?,
            name: row.get("name"),
            email: row.get("email"),
            password: row.get("password"),
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }

    fn row_to_statement(row: &sqlx::sqlite::SqliteRow) -> Result<Statement> {
        let id_str: String = row.get("id");
        let user_id_str: String = row.get("user_id");
        let operation_str: String = row.get("operation");
        let created_at_str: String = row.get("created_at");

        Ok(Statement {
            id: Uuid::parse_str(&id_str).context("Invalid statement ID")?,
            sequence: row.get("sequence"),
            user_id: Uuid::parse_str(&user_id_str).context("Invalid user ID")?,
            operation: OperationType::from_str(&operation_str)
                .ok_or_else(|| anyhow::anyhow!("Invalid operation type: {}", operation_str))?,
            amount_cents: row.get("amount_cents"),
            description: row.get("description"),
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn save_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to save user")?;
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl StatementRepository for SqliteStore {
    async fn save_statement(&self, statement: &mut Statement) -> Result<()> {
        let sequence = self.next_sequence().await?;
        statement.sequence = sequence;

        sqlx::query(
            r#"
            INSERT INTO statements (id, sequence, user_id, operation, amount_cents, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(statement.id.to_string())
        .bind(statement.sequence)
        .bind(statement.user_id.to_string())
        .bind(statement.operation.as_str())
        .bind(statement.amount_cents)
        .bind(&statement.description)
        .bind(statement.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to save statement")?;

        Ok(())
    }

    async fn get_statement(&self, id: StatementId) -> Result<Option<Statement>> {
        let row = sqlx::query(
            r#"
            SELECT id, sequence, user_id, operation, amount_cents, description, created_at
            FROM statements
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch statement")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_statement(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_statements_for_user(&self, user_id: UserId) -> Result<Vec<Statement>> {
        let rows = sqlx::query(
            r#"
            SELECT id, sequence, user_id, operation, amount_cents, description, created_at
            FROM statements
            WHERE user_id = ?
            ORDER BY sequence
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list statements for user")?;

        rows.iter().map(Self::row_to_statement).collect()
    }
}
