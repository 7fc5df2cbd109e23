use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    context::{QueryContext, WeightTable},
    rule::RuleRow,
};

/// A recognised attribute and, optionally, its legal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    /// Empty means any value is accepted.
    #[serde(default)]
    pub values: Vec<String>,
}

impl AttributeSpec {
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.values.is_empty() || self.values.iter().any(|v| v == value)
    }
}

/// Ordered set of attributes a deployment recognises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    pub attributes: Vec<AttributeSpec>,
}

impl AttributeSchema {
    pub fn new(attributes: Vec<AttributeSpec>) -> Self {
        Self { attributes }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }
}

pub const NONCLASSIC_MAX_WEIGHT: u32 = 30;

pub const NONCLASSIC_REQUIRED: [&str; 2] = ["Brand", "Sport"];

/// Basketball player/team incident deployment.
pub static NONCLASSIC_SCHEMA: Lazy<AttributeSchema> = Lazy::new(|| {
    AttributeSchema::new(vec![
        AttributeSpec::new("Brand", &["Brand 1", "Brand 2"]),
        AttributeSpec::new("Sport", &["Basketball", "American Football"]),
        AttributeSpec::new("Competition", &["NBA", "EuroLeague"]),
        AttributeSpec::new(
            "Incident",
            &["Points", "Assists", "Made Threes", "Rebounds", "Steals", "Blocks"],
        ),
        AttributeSpec::new(
            "Player or Team",
            &["S Curry", "J Brown", "Miami Heat", "Detroit Pistons"],
        ),
        AttributeSpec::new(
            "TimeBased",
            &[
                "Live", "Pre Live", "30", "150", "360", "480", "600", "1440", "2880", "4320",
                "8640", "Q1", "Q2", "Q3", "Q4", "H1", "H2", "Match",
            ],
        ),
        AttributeSpec::new("Cohort", &["Cohort A", "Cohort B"]),
    ])
});

pub static NONCLASSIC_CONTEXT: Lazy<QueryContext> = Lazy::new(|| {
    [
        ("Brand", "Brand 1"),
        ("Sport", "Basketball"),
        ("Competition", "NBA"),
        ("Incident", "Points"),
        ("Player or Team", "S Curry"),
        ("TimeBased", "150"),
        ("Cohort", "Cohort A"),
    ]
    .into_iter()
    .collect()
});

pub static NONCLASSIC_WEIGHTS: Lazy<WeightTable> = Lazy::new(|| {
    [
        ("Brand", 1),
        ("Sport", 1),
        ("Competition", 5),
        ("Incident", 7),
        ("Player or Team", 10),
        ("TimeBased", 15),
        ("Cohort", 30),
    ]
    .into_iter()
    .collect()
});

pub fn nonclassic_rules() -> Vec<RuleRow> {
    [
        (
            "Brand:Brand 1, Sport:Basketball, Player or Team:J Brown, TimeBased:600, Incident:Steals",
            "strategy_nonclassic_001",
        ),
        (
            "Brand:Brand 1, Sport:Basketball, Cohort:Cohort B, Player or Team:Detroit Pistons, TimeBased:360",
            "strategy_nonclassic_002",
        ),
        (
            "Brand:Brand 1, Sport:Basketball, TimeBased:4320, Player or Team:Miami Heat, Incident:Blocks",
            "strategy_nonclassic_003",
        ),
        (
            "Brand:Brand 1, Sport:Basketball, Cohort:Cohort A, TimeBased:Live, Player or Team:S Curry, Incident:Rebounds",
            "strategy_nonclassic_004",
        ),
        (
            "Brand:Brand 1, Sport:Basketball, TimeBased:Q3, Player or Team:J Brown, Incident:Points",
            "strategy_nonclassic_005",
        ),
    ]
    .into_iter()
    .map(|(perm, id)| RuleRow::new(perm, id))
    .collect()
}
