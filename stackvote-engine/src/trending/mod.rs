//! Time-windowed trending estimation.
//!
//! A bare net score rewards age: older targets have had more time to
//! accumulate votes. Bare recency rewards noise from one or two votes.
//! The trending score multiplies the recent net score by the recent vote
//! volume, capped so a single burst cannot dominate, and adds the
//! lifetime vote count as a floor and tiebreak.
use chrono::{DateTime, Duration, Utc};
use stackvote_shared::types::{Polarity, TrendingSnapshot, Vote};

/// Recency window for trending computation, in days.
pub const TRENDING_WINDOW_DAYS: i64 = 30;

/// Bound on the recent-volume multiplier, limiting the influence of a
/// single burst of votes.
pub const RECENT_VOLUME_CAP: i64 = 10;

/// Computes the trending metrics for one target.
///
/// `now` is an explicit parameter: callers supply one fixed `now` per
/// ranking pass so a single list computation is internally consistent.
/// Votes with `cast_at` in `[now - window_days, now]` count as recent.
///
/// With zero recent votes the score degrades to the lifetime vote count,
/// a pure popularity fallback.
pub fn compute_trending(
    votes: &[Vote],
    now: DateTime<Utc>,
    window_days: i64,
    cap: i64,
) -> TrendingSnapshot {
    let window_start = now - Duration::days(window_days);

    let mut recent_upvotes = 0i64;
    let mut recent_vote_volume = 0i64;
    for vote in votes {
        if vote.cast_at >= window_start && vote.cast_at <= now {
            recent_vote_volume += 1;
            if vote.polarity == Polarity::Up {
                recent_upvotes += 1;
            }
        }
    }

    let recent_net_score = recent_upvotes - (recent_vote_volume - recent_upvotes);
    let trending_score =
        recent_net_score * recent_vote_volume.min(cap) + votes.len() as i64;

    TrendingSnapshot {
        recent_net_score,
        recent_vote_volume,
        trending_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_vote(voter: &str, polarity: Polarity, cast_at: DateTime<Utc>) -> Vote {
        Vote {
            voter_id: voter.to_string(),
            target_id: Uuid::new_v4(),
            polarity,
            cast_at,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2026-08-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_no_recent_votes_falls_back_to_lifetime_count() {
        let now = fixed_now();
        let old = now - Duration::days(90);
        let votes: Vec<Vote> = (0..100)
            .map(|i| make_vote(&format!("voter-{i}"), Polarity::Up, old))
            .collect();

        let trending = compute_trending(&votes, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);
        assert_eq!(trending.recent_vote_volume, 0);
        assert_eq!(trending.recent_net_score, 0);
        assert_eq!(trending.trending_score, 100);
    }

    #[test]
    fn test_recent_agreement_is_amplified() {
        let now = fixed_now();
        let recent = now - Duration::days(1);
        let votes = vec![
            make_vote("a", Polarity::Up, recent),
            make_vote("b", Polarity::Up, recent),
            make_vote("c", Polarity::Up, recent),
            make_vote("d", Polarity::Down, recent),
        ];

        let trending = compute_trending(&votes, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);
        assert_eq!(trending.recent_net_score, 2);
        assert_eq!(trending.recent_vote_volume, 4);
        // 2 * min(4, 10) + 4
        assert_eq!(trending.trending_score, 12);
    }

    #[test]
    fn test_volume_beyond_cap_does_not_grow_multiplier() {
        let now = fixed_now();
        let recent = now - Duration::days(1);

        let at_cap: Vec<Vote> = (0..10)
            .map(|i| make_vote(&format!("voter-{i}"), Polarity::Up, recent))
            .collect();
        let beyond_cap: Vec<Vote> = (0..15)
            .map(|i| make_vote(&format!("voter-{i}"), Polarity::Up, recent))
            .collect();

        let at = compute_trending(&at_cap, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);
        let beyond = compute_trending(&beyond_cap, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);

        // 10 * 10 + 10
        assert_eq!(at.trending_score, 110);
        // multiplier stays at cap: 15 * 10 + 15, not 15 * 15 + 15
        assert_eq!(beyond.trending_score, 165);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = fixed_now();
        let on_boundary = now - Duration::days(TRENDING_WINDOW_DAYS);
        let just_outside = on_boundary - Duration::seconds(1);

        let votes = vec![
            make_vote("a", Polarity::Up, on_boundary),
            make_vote("b", Polarity::Up, just_outside),
        ];

        let trending = compute_trending(&votes, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);
        assert_eq!(trending.recent_vote_volume, 1);
    }

    #[test]
    fn test_future_votes_are_not_recent() {
        let now = fixed_now();
        let votes = vec![make_vote("a", Polarity::Up, now + Duration::days(1))];

        let trending = compute_trending(&votes, now, TRENDING_WINDOW_DAYS, RECENT_VOLUME_CAP);
        assert_eq!(trending.recent_vote_volume, 0);
        assert_eq!(trending.trending_score, 1);
    }
}
