//! PostgreSQL implementation of the target store.
//!
//! Targets are read together with their owning category in one joined
//! query; tags are hydrated in a second batched round trip keyed by
//! target id. Rows come back ordered by `created_at DESC, id` so every
//! caller starts from the same stable enumeration order.
use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use stackvote_shared::types::{Category, Tag, Target};
use uuid::Uuid;

use crate::errors::TargetRepositoryError;
use crate::interfaces::{TargetQuery, TargetRepository};

const SELECT_TARGETS: &str = r#"
SELECT t.id, t.name, t.slug, t.description, t.website, t.github_url, t.created_at,
       c.id AS category_id, c.name AS category_name, c.slug AS category_slug
FROM targets t
JOIN categories c ON c.id = t.category_id
"#;

/// PostgreSQL implementation of the target store.
pub struct PostgresTargetRepository {
    pool: sqlx::PgPool,
}

impl PostgresTargetRepository {
    /// Creates a new store instance over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Hydrates tags for a batch of targets in a single query.
    async fn load_tags(
        &self,
        target_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Tag>>, TargetRepositoryError> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT tt.target_id, tg.id, tg.name, tg.slug
            FROM target_tags tt
            JOIN tags tg ON tg.id = tt.tag_id
            WHERE tt.target_id = ANY($1)
            ORDER BY tg.name
            "#,
        )
        .bind(target_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        let mut tags_by_target: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in rows {
            let target_id: Uuid = row.try_get("target_id")?;
            tags_by_target.entry(target_id).or_default().push(Tag {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                slug: row.try_get("slug")?,
            });
        }

        Ok(tags_by_target)
    }

    /// Assembles full `Target` values from joined rows plus hydrated tags.
    async fn assemble(&self, rows: Vec<PgRow>) -> Result<Vec<Target>, TargetRepositoryError> {
        let mut targets = Vec::with_capacity(rows.len());
        for row in &rows {
            targets.push(target_from_row(row)?);
        }

        let ids: Vec<Uuid> = targets.iter().map(|t| t.id).collect();
        let mut tags_by_target = self.load_tags(&ids).await?;
        for target in &mut targets {
            if let Some(tags) = tags_by_target.remove(&target.id) {
                target.tags = tags;
            }
        }

        Ok(targets)
    }
}

fn target_from_row(row: &PgRow) -> Result<Target, TargetRepositoryError> {
    Ok(Target {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        website: row.try_get("website")?,
        github_url: row.try_get("github_url")?,
        category: Category {
            id: row.try_get("category_id")?,
            name: row.try_get("category_name")?,
            slug: row.try_get("category_slug")?,
        },
        tags: Vec::new(),
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl TargetRepository for PostgresTargetRepository {
    async fn fetch_targets(
        &self,
        query: &TargetQuery,
    ) -> Result<Vec<Target>, TargetRepositoryError> {
        let tags = (!query.tags.is_empty()).then(|| query.tags.clone());

        let sql = format!(
            r#"{SELECT_TARGETS}
            WHERE ($1::text IS NULL OR c.slug = $1)
              AND ($2::text[] IS NULL OR EXISTS (
                    SELECT 1 FROM target_tags tt
                    JOIN tags tg ON tg.id = tt.tag_id
                    WHERE tt.target_id = t.id AND tg.slug = ANY($2)))
              AND ($3::text[] IS NULL OR t.name = ANY($3))
            ORDER BY t.created_at DESC, t.id
            "#
        );

        let rows = sqlx::query(&sql)
            .bind(query.category.clone())
            .bind(tags)
            .bind(query.names.clone())
            .fetch_all(&self.pool)
            .await?;

        self.assemble(rows).await
    }

    async fn fetch_target(&self, id: Uuid) -> Result<Option<Target>, TargetRepositoryError> {
        let sql = format!("{SELECT_TARGETS} WHERE t.id = $1");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn fetch_target_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Target>, TargetRepositoryError> {
        let sql = format!("{SELECT_TARGETS} WHERE t.slug = $1");
        let row = sqlx::query(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}
