use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw popularity metrics for one repository, as reported by the GitHub API.
/// Missing numeric fields default to 0; a missing push date scores the lowest
/// recency bucket.
#[derive(Debug, Clone, Default)]
pub struct ScoreInput {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub pushed_at: Option<DateTime<Utc>>,
    pub has_description: bool,
    pub has_topics: bool,
}

/// Per-bucket contributions plus the clamped total.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub stars: u32,
    pub fork_ratio: u32,
    pub watchers: u32,
    pub issues: u32,
    pub description: u32,
    pub topics: u32,
    pub recency: u32,
    pub total: u32,
    pub tier: Tier,
}

/// One scored repository in a user or org profile listing.
#[derive(Debug, Clone, Serialize)]
pub struct RepoScore {
    pub name: String,
    pub total: u32,
    pub tier: Tier,
    pub stars: u64,
}

/// Qualitative band for a fundability score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Viral,
    FundingReady,
    Growing,
    EarlyStage,
}

impl Tier {
    pub fn from_score(score: u32) -> Self {
        if score >= 76 {
            Tier::Viral
        } else if score >= 56 {
            Tier::FundingReady
        } else if score >= 31 {
            Tier::Growing
        } else {
            Tier::EarlyStage
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Tier::Viral => "Going viral, apply now",
            Tier::FundingReady => "Funding ready",
            Tier::Growing => "Growing, build momentum",
            Tier::EarlyStage => "Early stage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_lower_bounds_are_inclusive() {
        assert_eq!(Tier::from_score(76), Tier::Viral);
        assert_eq!(Tier::from_score(75), Tier::FundingReady);
        assert_eq!(Tier::from_score(56), Tier::FundingReady);
        assert_eq!(Tier::from_score(55), Tier::Growing);
        assert_eq!(Tier::from_score(31), Tier::Growing);
        assert_eq!(Tier::from_score(30), Tier::EarlyStage);
        assert_eq!(Tier::from_score(0), Tier::EarlyStage);
    }
}
