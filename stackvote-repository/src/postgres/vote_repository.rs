//! PostgreSQL implementation of the vote ledger.
//!
//! Provides a production-ready PostgreSQL backend for the `VoteRepository`
//! trait with connection pooling and transaction safety.
//!
//! ## Database Tables
//!
//! - `votes`: individual voting records, unique per (voter_id, target_id)
//!
//! The cast path runs as a single transaction: the existing row is locked
//! with `SELECT ... FOR UPDATE`, the shared transition table decides
//! between insert, polarity update, and delete, and the transaction
//! commits. Concurrent casts by the same voter on the same target
//! serialize on the row lock.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::postgres::PgRow;
use stackvote_shared::types::{Polarity, Vote, VoteOutcome, VoteTransition, transition};
use uuid::Uuid;

use crate::errors::VoteRepositoryError;
use crate::interfaces::VoteRepository;

/// PostgreSQL implementation of the vote ledger.
pub struct PostgresVoteRepository {
    pool: sqlx::PgPool,
}

impl PostgresVoteRepository {
    /// Creates a new ledger instance over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

fn vote_from_row(row: &PgRow) -> Result<Vote, VoteRepositoryError> {
    let code: i16 = row.try_get("polarity")?;
    let polarity =
        Polarity::from_i16(code).ok_or(VoteRepositoryError::InvalidPolarity(code))?;

    Ok(Vote {
        voter_id: row.try_get("voter_id")?,
        target_id: row.try_get("target_id")?,
        polarity,
        cast_at: row.try_get("cast_at")?,
    })
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn fetch_votes(&self, target_id: Uuid) -> Result<Vec<Vote>, VoteRepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT voter_id, target_id, polarity, cast_at
            FROM votes
            WHERE target_id = $1
            ORDER BY cast_at, voter_id
            "#,
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(vote_from_row).collect()
    }

    async fn fetch_votes_for_targets(
        &self,
        target_ids: &[Uuid],
    ) -> Result<Vec<Vote>, VoteRepositoryError> {
        if target_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT voter_id, target_id, polarity, cast_at
            FROM votes
            WHERE target_id = ANY($1)
            ORDER BY cast_at, voter_id
            "#,
        )
        .bind(target_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(vote_from_row).collect()
    }

    async fn find_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
    ) -> Result<Option<Vote>, VoteRepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT voter_id, target_id, polarity, cast_at
            FROM votes
            WHERE voter_id = $1 AND target_id = $2
            "#,
        )
        .bind(voter_id)
        .bind(target_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(vote_from_row).transpose()
    }

    async fn cast_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
        polarity: Polarity,
        cast_at: DateTime<Utc>,
    ) -> Result<VoteOutcome, VoteRepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(
            r#"
            SELECT polarity
            FROM votes
            WHERE voter_id = $1 AND target_id = $2
            FOR UPDATE
            "#,
        )
        .bind(voter_id)
        .bind(target_id)
        .fetch_optional(&mut *tx)
        .await?;

        let existing = match existing {
            Some(row) => {
                let code: i16 = row.try_get("polarity")?;
                Some(Polarity::from_i16(code).ok_or(VoteRepositoryError::InvalidPolarity(code))?)
            }
            None => None,
        };

        let resolved = transition(existing, polarity);
        match resolved {
            VoteTransition::Create => {
                sqlx::query(
                    r#"
                    INSERT INTO votes (voter_id, target_id, polarity, cast_at)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(voter_id)
                .bind(target_id)
                .bind(polarity.as_i16())
                .bind(cast_at)
                .execute(&mut *tx)
                .await?;
            }
            VoteTransition::Flip => {
                sqlx::query(
                    r#"
                    UPDATE votes
                    SET polarity = $3, cast_at = $4
                    WHERE voter_id = $1 AND target_id = $2
                    "#,
                )
                .bind(voter_id)
                .bind(target_id)
                .bind(polarity.as_i16())
                .bind(cast_at)
                .execute(&mut *tx)
                .await?;
            }
            VoteTransition::Retract => {
                sqlx::query(
                    r#"
                    DELETE FROM votes
                    WHERE voter_id = $1 AND target_id = $2
                    "#,
                )
                .bind(voter_id)
                .bind(target_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(resolved.outcome())
    }
}
