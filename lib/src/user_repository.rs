use crate::error::DispatcherError;
use crate::recipient::Recipient;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<Recipient>, DispatcherError>;
}

pub struct PostgresUserStore {
    postgres_pool: Pool<Postgres>,
}

impl PostgresUserStore {
    pub fn new(postgres_pool: Pool<Postgres>) -> Self {
        Self { postgres_pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn list_users(&self) -> Result<Vec<Recipient>, DispatcherError> {
        let sql = r#"
        select
            id::text as user_id,
            phone_number
        from users
        "#;

        sqlx::query_as(sql)
            .fetch_all(&self.postgres_pool)
            .await
            .map_err(|error| DispatcherError::new(&error.to_string(), "Failed to list users"))
    }
}
