use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use stackvote_repository::{TargetQuery, TargetRepository, VoteRepository};
use stackvote_shared::types::{
    CategoryGroup, ListFilter, Polarity, ScoreSnapshot, ScoredTarget, SortKey, SortOrder, Target,
    TargetVotes, TrendingTarget, Vote, VoteOutcome,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::classifier::{STATE_OF_THE_ART_THRESHOLD, apply_allowlist, classify};
use crate::errors::ServiceError;
use crate::score::compute_score;
use crate::trending::{RECENT_VOLUME_CAP, TRENDING_WINDOW_DAYS, compute_trending};

/// The façade over the ranking core.
///
/// Holds injected repositories and serves every list-producing surface:
/// category pages, the trending page, the stack-filter page, and search.
/// Each request captures the vote set once and reuses it, so a single
/// response is internally consistent; nothing is shared between requests.
pub struct RankingService {
    vote_repository: Arc<dyn VoteRepository>,
    target_repository: Arc<dyn TargetRepository>,
}

impl RankingService {
    /// Creates a new `RankingService` instance.
    ///
    /// # Arguments
    ///
    /// * `vote_repository` - The vote ledger accessor.
    /// * `target_repository` - The target store accessor.
    pub fn new(
        vote_repository: Arc<dyn VoteRepository>,
        target_repository: Arc<dyn TargetRepository>,
    ) -> Self {
        Self {
            vote_repository,
            target_repository,
        }
    }

    /// Computes the current vote tally for one target.
    ///
    /// # Errors
    ///
    /// Returns `TargetNotFound` if the target does not exist; repository
    /// errors propagate unchanged.
    pub async fn get_score(&self, target_id: Uuid) -> Result<ScoreSnapshot, ServiceError> {
        let (target, votes) = tokio::try_join!(
            async {
                self.target_repository
                    .fetch_target(target_id)
                    .await
                    .map_err(ServiceError::from)
            },
            async {
                self.vote_repository
                    .fetch_votes(target_id)
                    .await
                    .map_err(ServiceError::from)
            },
        )?;

        if target.is_none() {
            return Err(ServiceError::TargetNotFound(target_id.to_string()));
        }

        Ok(compute_score(&votes))
    }

    /// Fetches one target by slug together with its current score and
    /// classification flag.
    pub async fn get_by_slug(&self, slug: &str) -> Result<ScoredTarget, ServiceError> {
        let target = self
            .target_repository
            .fetch_target_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::TargetNotFound(slug.to_string()))?;

        let votes = self.vote_repository.fetch_votes(target.id).await?;
        let score = compute_score(&votes);

        Ok(ScoredTarget {
            target,
            score,
            state_of_the_art: score.net_score >= STATE_OF_THE_ART_THRESHOLD,
        })
    }

    /// Lists targets ordered by trending score, highest first.
    ///
    /// One `now` is fixed for the whole pass so every item in the
    /// response is ranked against the same instant.
    pub async fn get_trending(&self, limit: usize) -> Result<Vec<TrendingTarget>, ServiceError> {
        let now = Utc::now();
        let candidates = self.scored_candidates(&TargetQuery::default()).await?;

        let mut ranked: Vec<TrendingTarget> = candidates
            .into_iter()
            .map(|candidate| {
                let trending = compute_trending(
                    &candidate.votes,
                    now,
                    TRENDING_WINDOW_DAYS,
                    RECENT_VOLUME_CAP,
                );
                TrendingTarget {
                    target: candidate.target,
                    trending,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.trending.trending_score.cmp(&a.trending.trending_score));
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Lists targets ordered by net score, highest first.
    pub async fn get_popular(&self, limit: usize) -> Result<Vec<ScoredTarget>, ServiceError> {
        let candidates = self.scored_candidates(&TargetQuery::default()).await?;

        let mut ranked: Vec<ScoredTarget> = candidates
            .into_iter()
            .map(|candidate| {
                let score = compute_score(&candidate.votes);
                ScoredTarget {
                    target: candidate.target,
                    score,
                    state_of_the_art: score.net_score >= STATE_OF_THE_ART_THRESHOLD,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.net_score.cmp(&a.score.net_score));
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Returns state-of-the-art implementations grouped by category.
    ///
    /// `allowlist` restricts candidates to exact names before scoring,
    /// serving the stack-filter surface; it never changes the threshold.
    pub async fn get_state_of_the_art(
        &self,
        category: Option<&str>,
        allowlist: Option<&[String]>,
    ) -> Result<Vec<CategoryGroup>, ServiceError> {
        let query = TargetQuery {
            category: category.map(str::to_string),
            ..Default::default()
        };

        let mut candidates = self.scored_candidates(&query).await?;
        if let Some(names) = allowlist {
            candidates = apply_allowlist(candidates, names);
        }

        Ok(classify(&candidates, STATE_OF_THE_ART_THRESHOLD))
    }

    /// Lists targets under the uniform filter/sort/truncate contract.
    ///
    /// `name` and `recent` sort on the targets' own attributes without
    /// touching the ledger. `votes`, `popular`, and `trending` rank by
    /// the corresponding computed metric. For `trending` the score is
    /// computed over the full candidate universe first and the category
    /// filter is applied afterwards, preserving relative ranking rather
    /// than ranking within an already-shrunk pool.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Target>, ServiceError> {
        debug!(sort = ?filter.sort, order = ?filter.order, "listing implementations");

        let mut targets = match filter.sort {
            SortKey::Name | SortKey::Recent => {
                let query = TargetQuery {
                    category: filter.category.clone(),
                    tags: filter.tags.clone(),
                    names: None,
                };
                let mut targets = self.target_repository.fetch_targets(&query).await?;
                match filter.sort {
                    SortKey::Name => {
                        apply_order(&mut targets, filter.order, |a, b| a.name.cmp(&b.name))
                    }
                    _ => apply_order(&mut targets, filter.order, |a, b| {
                        a.created_at.cmp(&b.created_at)
                    }),
                }
                targets
            }
            SortKey::Votes | SortKey::Popular => {
                let query = TargetQuery {
                    category: filter.category.clone(),
                    tags: filter.tags.clone(),
                    names: None,
                };
                let candidates = self.scored_candidates(&query).await?;

                let mut keyed: Vec<(i64, Target)> = candidates
                    .into_iter()
                    .map(|candidate| {
                        let score = compute_score(&candidate.votes);
                        let key = match filter.sort {
                            SortKey::Votes => score.total_votes(),
                            _ => score.net_score,
                        };
                        (key, candidate.target)
                    })
                    .collect();

                apply_order(&mut keyed, filter.order, |a, b| a.0.cmp(&b.0));
                keyed.into_iter().map(|(_, target)| target).collect()
            }
            SortKey::Trending => {
                let now = Utc::now();
                let candidates = self.scored_candidates(&TargetQuery::default()).await?;

                let mut keyed: Vec<(i64, Target)> = candidates
                    .into_iter()
                    .map(|candidate| {
                        let trending = compute_trending(
                            &candidate.votes,
                            now,
                            TRENDING_WINDOW_DAYS,
                            RECENT_VOLUME_CAP,
                        );
                        (trending.trending_score, candidate.target)
                    })
                    .collect();

                apply_order(&mut keyed, filter.order, |a, b| a.0.cmp(&b.0));

                keyed
                    .into_iter()
                    .map(|(_, target)| target)
                    .filter(|target| match &filter.category {
                        Some(slug) => &target.category.slug == slug,
                        None => true,
                    })
                    .collect()
            }
        };

        if let Some(limit) = filter.limit {
            targets.truncate(limit);
        }
        Ok(targets)
    }

    /// Looks up the voter's active vote on one target, if any, so the
    /// detail surface can render the current toggle state.
    ///
    /// # Errors
    ///
    /// Returns `TargetNotFound` if the target does not exist.
    pub async fn get_current_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
    ) -> Result<Option<Polarity>, ServiceError> {
        let target = self.target_repository.fetch_target(target_id).await?;
        if target.is_none() {
            return Err(ServiceError::TargetNotFound(target_id.to_string()));
        }

        let vote = self.vote_repository.find_vote(voter_id, target_id).await?;
        Ok(vote.map(|vote| vote.polarity))
    }

    /// Casts a vote on behalf of a voter, toggling per the ledger
    /// invariant. The only mutating entry point of this subsystem.
    ///
    /// # Errors
    ///
    /// Returns `TargetNotFound` if the target does not exist; ledger
    /// errors propagate unchanged.
    pub async fn cast_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
        polarity: Polarity,
    ) -> Result<VoteOutcome, ServiceError> {
        let target = self.target_repository.fetch_target(target_id).await?;
        if target.is_none() {
            return Err(ServiceError::TargetNotFound(target_id.to_string()));
        }

        let outcome = self
            .vote_repository
            .cast_vote(voter_id, target_id, polarity, Utc::now())
            .await?;

        info!(voter_id, target_id = %target_id, outcome = ?outcome, "vote cast");
        Ok(outcome)
    }

    /// Fetches matching targets and their vote sets in two round trips,
    /// capturing one consistent snapshot for the whole ranking pass.
    async fn scored_candidates(
        &self,
        query: &TargetQuery,
    ) -> Result<Vec<TargetVotes>, ServiceError> {
        let targets = self.target_repository.fetch_targets(query).await?;
        let ids: Vec<Uuid> = targets.iter().map(|target| target.id).collect();
        let votes = self.vote_repository.fetch_votes_for_targets(&ids).await?;

        let mut votes_by_target: HashMap<Uuid, Vec<Vote>> = HashMap::new();
        for vote in votes {
            votes_by_target.entry(vote.target_id).or_default().push(vote);
        }

        Ok(targets
            .into_iter()
            .map(|target| {
                let votes = votes_by_target.remove(&target.id).unwrap_or_default();
                TargetVotes { target, votes }
            })
            .collect())
    }
}

/// Sorts with the comparator, or its inversion for descending order.
///
/// Inverting the comparator rather than reversing the sorted slice keeps
/// ties in their original fetch order for both directions.
fn apply_order<T>(items: &mut [T], order: SortOrder, mut cmp: impl FnMut(&T, &T) -> Ordering) {
    match order {
        SortOrder::Asc => items.sort_by(|a, b| cmp(a, b)),
        SortOrder::Desc => items.sort_by(|a, b| cmp(b, a)),
    }
}
