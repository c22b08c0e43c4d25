//! Local funder matching.
//!
//! A lookup-and-arithmetic pass over the built-in catalog: no indexing, no
//! learning, no persistence. Match score = base + 10 per keyword hit +
//! coefficient x fundability score, clamped to 98 so nothing ever reads as a
//! guaranteed fit.

pub mod catalog;

use crate::types::funding::FunderMatch;

const KEYWORD_BONUS: f64 = 10.0;
const MAX_MATCH_SCORE: f64 = 98.0;

/// Free-text signals for one repo, lowercased before matching.
#[derive(Debug, Clone, Default)]
pub struct RepoSignals {
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<String>,
}

impl RepoSignals {
    fn haystack(&self) -> String {
        let mut text = String::new();
        if let Some(description) = &self.description {
            text.push_str(&description.to_lowercase());
            text.push(' ');
        }
        for topic in &self.topics {
            text.push_str(&topic.to_lowercase());
            text.push(' ');
        }
        if let Some(language) = &self.language {
            text.push_str(&language.to_lowercase());
        }
        text
    }
}

/// Match one repo against every catalog program. Non-wildcard programs with
/// zero keyword hits are dropped; results come back sorted by score.
pub fn match_programs(signals: &RepoSignals, fundability_score: u32) -> Vec<FunderMatch> {
    let haystack = signals.haystack();

    let mut matches: Vec<FunderMatch> = catalog::PROGRAMS
        .iter()
        .filter_map(|program| {
            let hits: Vec<String> = program
                .keywords
                .iter()
                .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
                .map(|keyword| keyword.to_string())
                .collect();

            if hits.is_empty() && !program.wildcard {
                return None;
            }

            let raw = program.base
                + KEYWORD_BONUS * hits.len() as f64
                + program.score_coefficient * f64::from(fundability_score);
            let score = raw.min(MAX_MATCH_SCORE).round() as u32;

            Some(FunderMatch {
                name: program.name.to_string(),
                category: program.category,
                score,
                keyword_hits: hits,
                url: program.url.to_string(),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(description: &str, topics: &[&str]) -> RepoSignals {
        RepoSignals {
            description: Some(description.to_string()),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            language: None,
        }
    }

    #[test]
    fn wildcard_programs_always_qualify() {
        let matches = match_programs(&RepoSignals::default(), 0);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().any(|m| m.name == "GitHub Sponsors"));
        assert!(matches.iter().all(|m| m.keyword_hits.is_empty()));
    }

    #[test]
    fn keyword_hits_add_ten_points_each() {
        let with_hits = match_programs(
            &signals("privacy-preserving security toolkit", &[]),
            0,
        );
        let nlnet = with_hits
            .iter()
            .find(|m| m.name == "NLnet Foundation")
            .expect("nlnet should match on keywords");
        assert_eq!(nlnet.keyword_hits.len(), 2);
        // base 30 + 2 * 10
        assert_eq!(nlnet.score, 50);
    }

    #[test]
    fn non_wildcard_without_hits_is_filtered() {
        let matches = match_programs(&signals("a small cli utility", &[]), 50);
        assert!(!matches.iter().any(|m| m.name == "Ethereum Foundation"));
    }

    #[test]
    fn score_never_exceeds_ninety_eight() {
        let matches = match_programs(
            &signals(
                "privacy security decentralization protocol standards internet",
                &["privacy", "security"],
            ),
            100,
        );
        for m in &matches {
            assert!(m.score <= 98, "{} scored {}", m.name, m.score);
        }
    }

    #[test]
    fn viral_score_feeds_the_coefficient() {
        let quiet = match_programs(&RepoSignals::default(), 0);
        let viral = match_programs(&RepoSignals::default(), 100);
        let quiet_gs = quiet.iter().find(|m| m.name == "GitHub Sponsors").unwrap();
        let viral_gs = viral.iter().find(|m| m.name == "GitHub Sponsors").unwrap();
        // 40 base vs 40 + 0.15 * 100
        assert_eq!(quiet_gs.score, 40);
        assert_eq!(viral_gs.score, 55);
    }

    #[test]
    fn results_sorted_by_score_descending() {
        let matches = match_programs(&signals("kubernetes cloud observability", &[]), 80);
        for window in matches.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }
}
