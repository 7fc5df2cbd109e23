use serde::Serialize;

/// A matched rule with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub strategy: String,
    pub score: u64,
    pub permutation: String,
}

/// Order by descending score. The sort is stable, so equal scores keep
/// their rule-table order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
