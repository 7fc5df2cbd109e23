use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The selected value of each attribute for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryContext {
    /// attribute -> selected value
    pub values: HashMap<String, String>,
}

impl QueryContext {
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    /// Select `value` for `attribute`, replacing any earlier selection.
    pub fn set(&mut self, attribute: &str, value: &str) {
        self.values.insert(attribute.to_string(), value.to_string());
    }

    pub fn with(mut self, attribute: &str, value: &str) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn has(&self, attribute: &str, value: &str) -> bool {
        self.get(attribute) == Some(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
