use std::sync::Arc;

use stackvote_engine::RankingService;
use stackvote_repository::{PostgresTargetRepository, PostgresVoteRepository};

use crate::errors::AppError;

/// `Dependencies` struct holds the wired components of the ranking engine.
///
/// It owns the connection pool and exposes a ready-to-use `RankingService`
/// backed by the PostgreSQL repositories.
pub struct Dependencies {
    pub ranking_service: Arc<RankingService>,
    pub pool: sqlx::PgPool,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// Loads environment variables from `.env` when present, connects to the
    /// database named by `DATABASE_URL`, and wires the repositories into the
    /// ranking service.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or an
    /// `AppError` if the database connection fails.
    pub async fn new() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = sqlx::PgPool::connect(&database_url)
            .await
            .map_err(AppError::Database)?;

        let vote_repository = Arc::new(PostgresVoteRepository::new(pool.clone()));
        let target_repository = Arc::new(PostgresTargetRepository::new(pool.clone()));

        let ranking_service = Arc::new(RankingService::new(vote_repository, target_repository));

        Ok(Dependencies {
            ranking_service,
            pool,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DATABASE_URL");
        }
    }

    #[tokio::test]
    #[serial]
    #[should_panic(expected = "DATABASE_URL must be set")]
    async fn test_dependencies_new_missing_database_url() {
        clear_env_vars();

        let _ = Dependencies::new().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_dependencies_new_invalid_database_url() {
        clear_env_vars();
        unsafe {
            env::set_var("DATABASE_URL", "invalid-database-url");
        }

        let result = Dependencies::new().await;
        assert!(result.is_err());

        if let Err(AppError::Database(_)) = result {
            // Expected error type - test passes
        } else {
            panic!("Expected Database error");
        }

        clear_env_vars();
    }
}
