use std::{fs, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    context::{QueryContext, WeightTable},
    error::ConfigError,
    pipeline::{Evaluation, evaluate},
    rule::RuleRow,
    schema::{
        AttributeSchema,
        NONCLASSIC_CONTEXT,
        NONCLASSIC_MAX_WEIGHT,
        NONCLASSIC_REQUIRED,
        NONCLASSIC_SCHEMA,
        NONCLASSIC_WEIGHTS,
    },
};

/// Everything an evaluation needs apart from the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub attributes: AttributeSchema,
    pub max_weight: u32,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub weights: WeightTable,
    #[serde(default)]
    pub context: QueryContext,
}

impl DeploymentConfig {
    pub fn nonclassic() -> Self {
        Self {
            attributes: (*NONCLASSIC_SCHEMA).clone(),
            max_weight: NONCLASSIC_MAX_WEIGHT,
            required: NONCLASSIC_REQUIRED.iter().map(|s| s.to_string()).collect(),
            weights: (*NONCLASSIC_WEIGHTS).clone(),
            context: (*NONCLASSIC_CONTEXT).clone(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_json(path.as_ref())
    }

    /// Check the context, weights and required set against the schema.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut context_keys: Vec<&String> = self.context.values.keys().collect();
        context_keys.sort();
        if let Some(unknown) = context_keys
            .into_iter()
            .find(|k| !self.attributes.contains(k))
        {
            return Err(ConfigError::UnknownAttribute(unknown.clone()));
        }

        for spec in &self.attributes.attributes {
            let value = self
                .context
                .get(&spec.name)
                .ok_or_else(|| ConfigError::MissingContextValue(spec.name.clone()))?;
            if !spec.allows(value) {
                return Err(ConfigError::IllegalValue {
                    attribute: spec.name.clone(),
                    value: value.to_string(),
                });
            }
        }

        let mut weights: Vec<(&String, &u32)> = self.weights.weights.iter().collect();
        weights.sort();
        for (attribute, &weight) in weights {
            if !self.attributes.contains(attribute) {
                return Err(ConfigError::UnknownAttribute(attribute.clone()));
            }
            if weight > self.max_weight {
                return Err(ConfigError::WeightOutOfRange {
                    attribute: attribute.clone(),
                    weight,
                    max: self.max_weight,
                });
            }
        }

        if let Some(unknown) = self.required.iter().find(|r| !self.attributes.contains(r)) {
            return Err(ConfigError::UnknownRequiredAttribute(unknown.clone()));
        }

        Ok(())
    }

    /// Apply an `ATTR=VALUE` selection to the query context.
    pub fn set_context(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (attribute, value) = split_assignment(assignment)?;
        self.context.set(attribute, value);
        Ok(())
    }

    /// Apply an `ATTR=N` override to the weight table.
    pub fn set_weight(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (attribute, weight) = split_assignment(assignment)?;
        let weight = weight
            .parse()
            .map_err(|_| ConfigError::InvalidAssignment(assignment.to_string()))?;
        self.weights.set(attribute, weight);
        Ok(())
    }

    pub fn evaluate(&self, rows: &[RuleRow]) -> Evaluation {
        evaluate(rows, &self.context, &self.weights, self.required.as_slice())
    }
}

/// Read a JSON array of `{"Permutation": .., "Strategy": ..}` rows.
pub fn load_rule_table(path: impl AsRef<Path>) -> Result<Vec<RuleRow>, ConfigError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let data = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn split_assignment(assignment: &str) -> Result<(&str, &str), ConfigError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(ConfigError::InvalidAssignment(assignment.to_string())),
    }
}
