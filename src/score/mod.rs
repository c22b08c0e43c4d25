//! Fundability scoring.
//!
//! Additive threshold buckets over public repository metrics, capped at 100.
//! This is the single shared implementation; every surface that shows a score
//! goes through [`compute`] so displayed numbers never drift.

use crate::types::scoring::{ScoreBreakdown, ScoreInput, Tier};
use chrono::{DateTime, Utc};

pub fn compute(input: &ScoreInput, now: DateTime<Utc>) -> ScoreBreakdown {
    // A repo with no signal at all scores a flat zero; the floor constants in
    // the ratio/watchers/issues buckets only apply once any metric is present.
    if is_empty(input) {
        return ScoreBreakdown {
            stars: 0,
            fork_ratio: 0,
            watchers: 0,
            issues: 0,
            description: 0,
            topics: 0,
            recency: 0,
            total: 0,
            tier: Tier::EarlyStage,
        };
    }

    let stars = stars_bucket(input.stars);
    let fork_ratio = fork_ratio_bucket(input.forks, input.stars);
    let watchers = watchers_bucket(input.watchers);
    let issues = issues_bucket(input.open_issues);
    let description = if input.has_description { 5 } else { 0 };
    let topics = if input.has_topics { 5 } else { 0 };
    let recency = recency_bucket(input.pushed_at, now);

    let total =
        (stars + fork_ratio + watchers + issues + description + topics + recency).min(100);

    ScoreBreakdown {
        stars,
        fork_ratio,
        watchers,
        issues,
        description,
        topics,
        recency,
        total,
        tier: Tier::from_score(total),
    }
}

fn is_empty(input: &ScoreInput) -> bool {
    input.stars == 0
        && input.forks == 0
        && input.watchers == 0
        && input.open_issues == 0
        && input.pushed_at.is_none()
        && !input.has_description
        && !input.has_topics
}

fn stars_bucket(stars: u64) -> u32 {
    if stars >= 10_000 {
        35
    } else if stars >= 5_000 {
        28
    } else if stars >= 1_000 {
        20
    } else if stars >= 500 {
        14
    } else if stars >= 100 {
        8
    } else {
        // round-half-up to match the original's Math.round(stars / 10)
        (((stars + 5) / 10) as u32).min(5)
    }
}

fn fork_ratio_bucket(forks: u64, stars: u64) -> u32 {
    let ratio = forks as f64 / stars.max(1) as f64;
    if ratio > 0.3 {
        20
    } else if ratio > 0.15 {
        15
    } else if ratio > 0.05 {
        8
    } else {
        3
    }
}

fn watchers_bucket(watchers: u64) -> u32 {
    if watchers >= 1_000 {
        15
    } else if watchers >= 500 {
        10
    } else if watchers >= 100 {
        5
    } else {
        2
    }
}

fn issues_bucket(issues: u64) -> u32 {
    if issues >= 50 {
        10
    } else if issues >= 20 {
        7
    } else if issues >= 5 {
        4
    } else {
        1
    }
}

fn recency_bucket(pushed_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    let Some(pushed) = pushed_at else {
        return 0;
    };
    let days = (now - pushed).num_seconds() as f64 / 86_400.0;
    if days < 1.0 {
        10
    } else if days < 7.0 {
        7
    } else if days < 30.0 {
        4
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-01T12:00:00Z".parse().expect("timestamp should parse")
    }

    #[test]
    fn empty_repo_scores_zero() {
        let breakdown = compute(&ScoreInput::default(), now());
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.tier, Tier::EarlyStage);
    }

    #[test]
    fn floor_constants_apply_once_any_metric_present() {
        let input = ScoreInput {
            stars: 1,
            ..ScoreInput::default()
        };
        // round(1/10)=0 stars, plus ratio/watchers/issues floors 3+2+1.
        assert_eq!(compute(&input, now()).total, 6);
    }

    #[test]
    fn worked_example_viral_repo_clamps_to_100() {
        // stars=12000, forks=4000, watchers=1500, issues=60, pushed 2h ago,
        // description and topics present: 35+20+15+10+5+5+10 = 100.
        let input = ScoreInput {
            stars: 12_000,
            forks: 4_000,
            watchers: 1_500,
            open_issues: 60,
            pushed_at: Some(now() - Duration::hours(2)),
            has_description: true,
            has_topics: true,
        };
        let breakdown = compute(&input, now());
        assert_eq!(breakdown.stars, 35);
        assert_eq!(breakdown.fork_ratio, 20);
        assert_eq!(breakdown.watchers, 15);
        assert_eq!(breakdown.issues, 10);
        assert_eq!(breakdown.recency, 10);
        assert_eq!(breakdown.total, 100);
        assert_eq!(breakdown.tier, Tier::Viral);
    }

    #[test]
    fn worked_example_small_repo() {
        // stars=50, forks=2, watchers=10, issues=2, nothing else:
        // 5 + 3 (ratio 0.04) + 2 + 1 = 11, early stage.
        let input = ScoreInput {
            stars: 50,
            forks: 2,
            watchers: 10,
            open_issues: 2,
            ..ScoreInput::default()
        };
        let breakdown = compute(&input, now());
        assert_eq!(breakdown.stars, 5);
        assert_eq!(breakdown.fork_ratio, 3);
        assert_eq!(breakdown.watchers, 2);
        assert_eq!(breakdown.issues, 1);
        assert_eq!(breakdown.total, 11);
        assert_eq!(breakdown.tier, Tier::EarlyStage);
    }

    #[test]
    fn fork_ratio_uses_max_stars_one() {
        // stars=0, forks=5 -> ratio 5.0 -> top bucket
        let input = ScoreInput {
            forks: 5,
            ..ScoreInput::default()
        };
        assert_eq!(compute(&input, now()).fork_ratio, 20);
    }

    #[test]
    fn extreme_inputs_stay_clamped() {
        let input = ScoreInput {
            stars: 1_000_000_000,
            forks: 1_000_000_000,
            watchers: 1_000_000_000,
            open_issues: 1_000_000_000,
            pushed_at: Some(now()),
            has_description: true,
            has_topics: true,
        };
        assert_eq!(compute(&input, now()).total, 100);
    }

    #[test]
    fn score_monotonic_in_stars() {
        let mut previous = 0;
        for stars in [0, 9, 50, 99, 100, 499, 500, 999, 1_000, 4_999, 5_000, 10_000] {
            let input = ScoreInput {
                stars,
                ..ScoreInput::default()
            };
            let total = compute(&input, now()).total;
            assert!(total >= previous, "score decreased at stars={stars}");
            previous = total;
        }
    }

    #[test]
    fn score_monotonic_in_recency() {
        let ages = [
            None,
            Some(Duration::days(400)),
            Some(Duration::days(20)),
            Some(Duration::days(3)),
            Some(Duration::hours(6)),
        ];
        let mut previous = 0;
        for age in ages {
            let input = ScoreInput {
                pushed_at: age.map(|a| now() - a),
                ..ScoreInput::default()
            };
            let total = compute(&input, now()).total;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn small_star_counts_round_half_up() {
        let input = ScoreInput {
            stars: 15,
            ..ScoreInput::default()
        };
        assert_eq!(compute(&input, now()).stars, 2);
        let input = ScoreInput {
            stars: 14,
            ..ScoreInput::default()
        };
        assert_eq!(compute(&input, now()).stars, 1);
    }
}
