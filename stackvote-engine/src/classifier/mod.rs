//! State-of-the-art classification.
//!
//! An implementation is state of the art when its net score meets a fixed
//! threshold. Flagged targets are grouped by category and each group is
//! sorted descending by net score; categories with no flagged targets are
//! simply absent from the result.
use std::collections::{HashMap, HashSet};

use stackvote_shared::types::{CategoryGroup, ScoredTarget, TargetVotes};
use uuid::Uuid;

use crate::score::compute_score;

/// Net votes required for the state-of-the-art designation.
pub const STATE_OF_THE_ART_THRESHOLD: i64 = 100;

/// Classifies candidates into state-of-the-art category groups.
///
/// A net score exactly at `threshold` is included. Within a group, ties
/// keep the candidates' original enumeration order; groups are ordered
/// lexicographically by category name for deterministic output.
pub fn classify(candidates: &[TargetVotes], threshold: i64) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index_by_category: HashMap<Uuid, usize> = HashMap::new();

    for candidate in candidates {
        let score = compute_score(&candidate.votes);
        if score.net_score < threshold {
            continue;
        }

        let scored = ScoredTarget {
            target: candidate.target.clone(),
            score,
            state_of_the_art: true,
        };

        match index_by_category.get(&candidate.target.category.id) {
            Some(&index) => groups[index].implementations.push(scored),
            None => {
                index_by_category.insert(candidate.target.category.id, groups.len());
                groups.push(CategoryGroup {
                    category: candidate.target.category.clone(),
                    implementations: vec![scored],
                });
            }
        }
    }

    for group in &mut groups {
        // sort_by is stable, so equal net scores keep enumeration order
        group
            .implementations
            .sort_by(|a, b| b.score.net_score.cmp(&a.score.net_score));
    }
    groups.sort_by(|a, b| a.category.name.cmp(&b.category.name));

    groups
}

/// Restricts candidates to an exact-name allowlist before classification.
///
/// A pure set intersection; it changes neither scoring nor the threshold.
/// An empty allowlist means no filtering, falling back to the full
/// state-of-the-art view.
pub fn apply_allowlist(candidates: Vec<TargetVotes>, names: &[String]) -> Vec<TargetVotes> {
    if names.is_empty() {
        return candidates;
    }

    let allowed: HashSet<&str> = names.iter().map(String::as_str).collect();
    candidates
        .into_iter()
        .filter(|candidate| allowed.contains(candidate.target.name.as_str()))
        .collect()
}
