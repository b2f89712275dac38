//! Score calculation for a single target's vote set.
use stackvote_shared::types::{Polarity, ScoreSnapshot, Vote};

/// Computes the vote tally for one target.
///
/// Pure and deterministic: partition the votes by polarity and take the
/// difference. Order is irrelevant and an empty vote set is a valid
/// zero-valued input, not a failure. Duplicate votes per voter cannot
/// occur here; the ledger enforces that invariant at write time.
pub fn compute_score(votes: &[Vote]) -> ScoreSnapshot {
    let upvotes = votes
        .iter()
        .filter(|vote| vote.polarity == Polarity::Up)
        .count() as i64;
    let downvotes = votes.len() as i64 - upvotes;

    ScoreSnapshot {
        upvotes,
        downvotes,
        net_score: upvotes - downvotes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_vote(voter: &str, polarity: Polarity) -> Vote {
        Vote {
            voter_id: voter.to_string(),
            target_id: Uuid::new_v4(),
            polarity,
            cast_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_vote_set_scores_zero() {
        let score = compute_score(&[]);
        assert_eq!(
            score,
            ScoreSnapshot {
                upvotes: 0,
                downvotes: 0,
                net_score: 0
            }
        );
    }

    #[test]
    fn test_mixed_votes() {
        let votes = vec![
            make_vote("a", Polarity::Up),
            make_vote("b", Polarity::Up),
            make_vote("c", Polarity::Up),
            make_vote("d", Polarity::Down),
        ];

        let score = compute_score(&votes);
        assert_eq!(score.upvotes, 3);
        assert_eq!(score.downvotes, 1);
        assert_eq!(score.net_score, 2);
        assert_eq!(score.total_votes(), 4);
    }

    #[test]
    fn test_order_is_irrelevant() {
        let mut votes = vec![
            make_vote("a", Polarity::Down),
            make_vote("b", Polarity::Up),
            make_vote("c", Polarity::Up),
        ];
        let forward = compute_score(&votes);
        votes.reverse();
        assert_eq!(compute_score(&votes), forward);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let votes = vec![make_vote("a", Polarity::Up), make_vote("b", Polarity::Down)];
        assert_eq!(compute_score(&votes), compute_score(&votes));
    }
}
