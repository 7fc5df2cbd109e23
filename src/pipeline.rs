use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    context::{QueryContext, WeightTable},
    error::ParseError,
    rank::{MatchResult, rank},
    rule::{Rule, RuleRow, parse},
};

/// A rule-table row that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// Position of the row in the input table, starting at 0.
    pub row: usize,
    pub permutation: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub matches: Vec<MatchResult>,
    pub failures: Vec<RowFailure>,
}

impl Evaluation {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn summary(&self) -> String {
        format!("{} rule(s) matched your query.", self.match_count())
    }
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Evaluation", 3)?;
        state.serialize_field("match_count", &self.match_count())?;
        state.serialize_field("matches", &self.matches)?;
        state.serialize_field("failures", &self.failures)?;
        state.end()
    }
}

/// Build a rule from a row. Rows without an identifier or permutation
/// text yield `Ok(None)`.
pub fn rule_from_row(row: &RuleRow) -> Result<Option<Rule>, ParseError> {
    let (Some(id), Some(text)) = (row.strategy(), row.permutation()) else {
        return Ok(None);
    };

    Ok(Some(Rule {
        id: id.to_string(),
        permutation: parse(text)?,
    }))
}

/// Evaluate every row against `ctx` and return the ranked matches along
/// with the rows that failed to parse.
pub fn evaluate<S: AsRef<str>>(
    rows: &[RuleRow],
    ctx: &QueryContext,
    weights: &WeightTable,
    required: &[S],
) -> Evaluation {
    let mut matches = Vec::new();
    let mut failures = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let rule = match rule_from_row(row) {
            Ok(Some(rule)) => rule,
            Ok(None) => {
                log::debug!("row {idx}: missing strategy or permutation, skipped");
                continue;
            }
            Err(error) => {
                log::warn!("row {idx}: {error}");
                failures.push(RowFailure {
                    row: idx,
                    permutation: row.permutation.clone().unwrap_or_default(),
                    error,
                });
                continue;
            }
        };

        if !rule.permutation.has_required_attributes(required) {
            log::debug!("row {idx} ({}): lacks a required attribute", rule.id);
            continue;
        }

        if !rule.permutation.matches(ctx) {
            log::debug!("row {idx} ({}): does not match", rule.id);
            continue;
        }

        matches.push(MatchResult {
            score: rule.permutation.score(weights),
            permutation: rule.permutation.normalized(),
            strategy: rule.id,
        });
    }

    let evaluation = Evaluation {
        matches: rank(matches),
        failures,
    };

    log::info!(
        "evaluated {} row(s): {} matched, {} malformed",
        rows.len(),
        evaluation.match_count(),
        evaluation.failures.len()
    );

    evaluation
}
