use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-attribute scoring weight. Attributes not in the table weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    pub weights: HashMap<String, u32>,
}

impl WeightTable {
    pub fn get(&self, attribute: &str) -> u32 {
        self.weights.get(attribute).copied().unwrap_or(0)
    }

    pub fn set(&mut self, attribute: &str, weight: u32) {
        self.weights.insert(attribute.to_string(), weight);
    }

    pub fn with(mut self, attribute: &str, weight: u32) -> Self {
        self.set(attribute, weight);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }
}
