use std::fmt;

use serde::{Deserialize, Serialize};

pub mod evaluate;
pub mod parse;
pub mod score;

pub use parse::parse;

/// Separator used when a permutation is written back out.
pub const NORMALIZED_SEPARATOR: &str = ", ";

/// A single `attribute:value` requirement of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeValuePair {
    pub attribute: String,
    pub value: String,
}

impl AttributeValuePair {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for AttributeValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.attribute, self.value)
    }
}

/// Ordered pairs of a rule. Repeated attributes are kept; every occurrence
/// takes part in matching and scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permutation {
    pub pairs: Vec<AttributeValuePair>,
}

impl Permutation {
    pub fn new(pairs: Vec<AttributeValuePair>) -> Self {
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.attribute.as_str())
    }

    /// Pairs rejoined in their original order.
    pub fn normalized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(NORMALIZED_SEPARATOR)?;
            }
            write!(f, "{pair}")?;
        }
        Ok(())
    }
}

/// A parsed rule ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: String,
    pub permutation: Permutation,
}

/// One row of the externally supplied rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    #[serde(rename = "Permutation", default)]
    pub permutation: Option<String>,
    #[serde(rename = "Strategy", default)]
    pub strategy: Option<String>,
}

impl RuleRow {
    pub fn new(permutation: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            permutation: Some(permutation.into()),
            strategy: Some(strategy.into()),
        }
    }

    /// Identifier, if present and not blank.
    pub fn strategy(&self) -> Option<&str> {
        non_blank(self.strategy.as_deref())
    }

    /// Permutation text, if present and not blank.
    pub fn permutation(&self) -> Option<&str> {
        non_blank(self.permutation.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
