use crate::types::funding::FunderMatch;
use crate::types::scoring::ScoreBreakdown;
use crate::types::tracker::ApplicationEntry;
use serde_json::Value;

pub fn score_card(reference: &str, breakdown: &ScoreBreakdown) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Fundability: {reference}\n\n"));
    output.push_str(&format!(
        "Score: {} / 100 ({})\n\n",
        breakdown.total,
        breakdown.tier.verdict()
    ));
    output.push_str("## Breakdown\n\n");
    output.push_str(&format!(
        "- stars: {}\n- fork ratio: {}\n- watchers: {}\n- open issues: {}\n- description: {}\n- topics: {}\n- recent push: {}\n",
        breakdown.stars,
        breakdown.fork_ratio,
        breakdown.watchers,
        breakdown.issues,
        breakdown.description,
        breakdown.topics,
        breakdown.recency
    ));
    output
}

pub fn funder_matches(reference: &str, matches: &[FunderMatch]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Funder matches: {reference}\n\n"));
    if matches.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for m in matches {
        let hits = if m.keyword_hits.is_empty() {
            "open to all".to_string()
        } else {
            m.keyword_hits.join(", ")
        };
        output.push_str(&format!("- {}% {} ({})\n  {}\n", m.score, m.name, hits, m.url));
    }
    output
}

pub fn profile(login: &str, repos: &[crate::types::scoring::RepoScore]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Profile: {login}\n\n"));
    if repos.is_empty() {
        output.push_str("- no public repositories\n");
        return output;
    }
    for repo in repos {
        output.push_str(&format!(
            "- {}: {} / 100 ({}, {} stars)\n",
            repo.name,
            repo.total,
            repo.tier.verdict(),
            repo.stars
        ));
    }
    output
}

pub fn tracker(entries: &[ApplicationEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Tracked applications\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for entry in entries {
        output.push_str(&format!(
            "- [{}] {} -> {} (saved {})",
            status_label(entry),
            entry.repo_id,
            entry.funding_id,
            entry.date_added.format("%Y-%m-%d")
        ));
        if let Some(applied) = entry.date_applied {
            output.push_str(&format!(", applied {}", applied.format("%Y-%m-%d")));
        }
        output.push_str(&format!("\n  id: {}\n", entry.id));
        if !entry.notes.is_empty() {
            output.push_str(&format!("  notes: {}\n", entry.notes));
        }
    }
    output
}

fn status_label(entry: &ApplicationEntry) -> &'static str {
    use crate::types::tracker::ApplicationStatus::*;
    match entry.status {
        Saved => "saved",
        Applied => "applied",
        FollowingUp => "following_up",
        Won => "won",
        Lost => "lost",
    }
}

/// Walk arbitrary backend JSON into readable Markdown: objects become
/// key/value lists, arrays become numbered entries, nesting indents.
pub fn generic_report(title: &str, value: &Value) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {title}\n\n"));
    write_value(&mut output, value, 0);
    output
}

fn write_value(output: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                match nested {
                    Value::Object(_) | Value::Array(_) => {
                        output.push_str(&format!("{indent}- {key}:\n"));
                        write_value(output, nested, depth + 1);
                    }
                    _ => {
                        output.push_str(&format!("{indent}- {key}: {}\n", scalar(nested)));
                    }
                }
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        output.push_str(&format!("{indent}- [{}]\n", index + 1));
                        write_value(output, item, depth + 1);
                    }
                    _ => {
                        output.push_str(&format!("{indent}- {}\n", scalar(item)));
                    }
                }
            }
        }
        _ => {
            output.push_str(&format!("{indent}{}\n", scalar(value)));
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Tier;

    #[test]
    fn score_card_contains_total_and_verdict() {
        let breakdown = ScoreBreakdown {
            stars: 5,
            fork_ratio: 3,
            watchers: 2,
            issues: 1,
            description: 0,
            topics: 0,
            recency: 0,
            total: 11,
            tier: Tier::EarlyStage,
        };
        let rendered = score_card("acme/widget", &breakdown);
        assert!(rendered.contains("# Fundability: acme/widget"));
        assert!(rendered.contains("Score: 11 / 100"));
        assert!(rendered.contains("Early stage"));
    }

    #[test]
    fn generic_report_walks_nested_json() {
        let value = serde_json::json!({
            "grade": "B",
            "tips": [
                { "area": "docs", "impact": "high" },
                { "area": "ci", "impact": "medium" }
            ],
            "score": 62
        });
        let rendered = generic_report("Fundability report", &value);
        assert!(rendered.contains("# Fundability report"));
        assert!(rendered.contains("- grade: B"));
        assert!(rendered.contains("- score: 62"));
        assert!(rendered.contains("- tips:"));
        assert!(rendered.contains("  - [1]"));
        assert!(rendered.contains("    - area: docs"));
    }

    #[test]
    fn empty_matches_render_none() {
        let rendered = funder_matches("acme/widget", &[]);
        assert!(rendered.contains("- none"));
    }
}
