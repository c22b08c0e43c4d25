use serde::Serialize;

/// One entry in the built-in funder catalog.
///
/// `wildcard` programs (sponsorships, fellowships) accept any repo and never
/// get filtered out for lack of keyword hits.
#[derive(Debug, Clone)]
pub struct FundingProgram {
    pub name: &'static str,
    pub category: Category,
    pub keywords: &'static [&'static str],
    /// Starting match percentage before keyword and score bonuses.
    pub base: f64,
    /// Weight applied to the repo's fundability score, 0.08..=0.15.
    pub score_coefficient: f64,
    pub wildcard: bool,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Platform,
    Foundation,
    Corporate,
    Government,
    Crypto,
    Nonprofit,
}

/// Result of matching one repo against one catalog program.
#[derive(Debug, Clone, Serialize)]
pub struct FunderMatch {
    pub name: String,
    pub category: Category,
    pub score: u32,
    pub keyword_hits: Vec<String>,
    pub url: String,
}
