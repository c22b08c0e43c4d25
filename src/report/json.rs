use crate::error::Result;
use serde::Serialize;

pub fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{ScoreBreakdown, Tier};

    #[test]
    fn breakdown_serializes_with_snake_case_tier() {
        let breakdown = ScoreBreakdown {
            stars: 35,
            fork_ratio: 20,
            watchers: 15,
            issues: 10,
            description: 5,
            topics: 5,
            recency: 10,
            total: 100,
            tier: Tier::Viral,
        };
        let rendered = pretty(&breakdown).expect("json should serialize");
        assert!(rendered.contains("\"total\": 100"));
        assert!(rendered.contains("\"tier\": \"viral\""));
    }
}
