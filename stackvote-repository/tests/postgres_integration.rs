//! Integration tests for the PostgreSQL vote ledger and target store.
//!
//! These tests require a real PostgreSQL database (DATABASE_URL) and are
//! ignored by default.
//!
//! Run with: `cargo test --test postgres_integration -- --ignored`

use chrono::Utc;
use sqlx::Row;
use stackvote_repository::{
    PostgresTargetRepository, PostgresVoteRepository, TargetQuery, TargetRepository,
    VoteRepository,
};
use stackvote_shared::types::{Polarity, VoteOutcome};
use uuid::Uuid;

/// Inserts a category and a target under it, returning the target id.
async fn seed_target(pool: &sqlx::PgPool, name: &str, category_slug: &str) -> Uuid {
    let category_id: Option<Uuid> =
        sqlx::query("SELECT id FROM categories WHERE slug = $1")
            .bind(category_slug)
            .fetch_optional(pool)
            .await
            .unwrap()
            .map(|row| row.get("id"));

    let category_id = match category_id {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4();
            sqlx::query("INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(category_slug)
                .bind(category_slug)
                .execute(pool)
                .await
                .unwrap();
            id
        }
    };

    let target_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO targets (id, name, slug, description, category_id) VALUES ($1, $2, $3, '', $4)",
    )
    .bind(target_id)
    .bind(name)
    .bind(name.to_lowercase())
    .bind(category_id)
    .execute(pool)
    .await
    .unwrap();

    target_id
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_cast_vote_creates_record(pool: sqlx::PgPool) {
    let target_id = seed_target(&pool, "Axum", "web-frameworks").await;
    let ledger = PostgresVoteRepository::new(pool.clone());

    let outcome = ledger
        .cast_vote("user-1", target_id, Polarity::Up, Utc::now())
        .await
        .unwrap();
    assert_eq!(outcome, VoteOutcome::Created);

    let votes = ledger.fetch_votes(target_id).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].polarity, Polarity::Up);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_cast_same_polarity_toggles_off(pool: sqlx::PgPool) {
    let target_id = seed_target(&pool, "Axum", "web-frameworks").await;
    let ledger = PostgresVoteRepository::new(pool.clone());

    ledger
        .cast_vote("user-1", target_id, Polarity::Up, Utc::now())
        .await
        .unwrap();
    let outcome = ledger
        .cast_vote("user-1", target_id, Polarity::Up, Utc::now())
        .await
        .unwrap();

    assert_eq!(outcome, VoteOutcome::Removed);
    assert!(ledger.fetch_votes(target_id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_cast_opposite_polarity_flips_in_place(pool: sqlx::PgPool) {
    let target_id = seed_target(&pool, "Axum", "web-frameworks").await;
    let ledger = PostgresVoteRepository::new(pool.clone());

    ledger
        .cast_vote("user-1", target_id, Polarity::Up, Utc::now())
        .await
        .unwrap();
    let outcome = ledger
        .cast_vote("user-1", target_id, Polarity::Down, Utc::now())
        .await
        .unwrap();

    assert_eq!(outcome, VoteOutcome::Updated);
    let votes = ledger.fetch_votes(target_id).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].polarity, Polarity::Down);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_find_vote_returns_current_record(pool: sqlx::PgPool) {
    let target_id = seed_target(&pool, "Axum", "web-frameworks").await;
    let ledger = PostgresVoteRepository::new(pool.clone());

    assert!(ledger.find_vote("user-1", target_id).await.unwrap().is_none());

    ledger
        .cast_vote("user-1", target_id, Polarity::Down, Utc::now())
        .await
        .unwrap();
    let vote = ledger.find_vote("user-1", target_id).await.unwrap().unwrap();
    assert_eq!(vote.voter_id, "user-1");
    assert_eq!(vote.target_id, target_id);
    assert_eq!(vote.polarity, Polarity::Down);

    ledger
        .cast_vote("user-1", target_id, Polarity::Down, Utc::now())
        .await
        .unwrap();
    assert!(ledger.find_vote("user-1", target_id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_fetch_votes_for_targets_batches(pool: sqlx::PgPool) {
    let first = seed_target(&pool, "Axum", "web-frameworks").await;
    let second = seed_target(&pool, "Actix", "web-frameworks").await;
    let ledger = PostgresVoteRepository::new(pool.clone());

    ledger
        .cast_vote("user-1", first, Polarity::Up, Utc::now())
        .await
        .unwrap();
    ledger
        .cast_vote("user-2", second, Polarity::Down, Utc::now())
        .await
        .unwrap();

    let votes = ledger
        .fetch_votes_for_targets(&[first, second])
        .await
        .unwrap();
    assert_eq!(votes.len(), 2);

    let votes = ledger.fetch_votes_for_targets(&[]).await.unwrap();
    assert!(votes.is_empty());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_fetch_targets_filters_by_category(pool: sqlx::PgPool) {
    seed_target(&pool, "Axum", "web-frameworks").await;
    seed_target(&pool, "Diesel", "orm").await;
    let store = PostgresTargetRepository::new(pool.clone());

    let query = TargetQuery {
        category: Some("web-frameworks".to_string()),
        ..Default::default()
    };
    let targets = store.fetch_targets(&query).await.unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "Axum");
    assert_eq!(targets[0].category.slug, "web-frameworks");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_fetch_targets_filters_by_name_allowlist(pool: sqlx::PgPool) {
    seed_target(&pool, "Axum", "web-frameworks").await;
    seed_target(&pool, "Actix", "web-frameworks").await;
    let store = PostgresTargetRepository::new(pool.clone());

    let query = TargetQuery {
        names: Some(vec!["Actix".to_string()]),
        ..Default::default()
    };
    let targets = store.fetch_targets(&query).await.unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "Actix");
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL database"]
async fn test_fetch_target_by_slug(pool: sqlx::PgPool) {
    let id = seed_target(&pool, "Axum", "web-frameworks").await;
    let store = PostgresTargetRepository::new(pool.clone());

    let target = store.fetch_target_by_slug("axum").await.unwrap().unwrap();
    assert_eq!(target.id, id);

    assert!(store.fetch_target_by_slug("missing").await.unwrap().is_none());
}
