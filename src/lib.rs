pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod rule;
pub mod schema;

pub use config::{DeploymentConfig, load_rule_table};
pub use context::{QueryContext, WeightTable};
pub use error::{ConfigError, ParseError};
pub use pipeline::{Evaluation, RowFailure, evaluate};
pub use rank::{MatchResult, rank};
pub use rule::{AttributeValuePair, Permutation, Rule, RuleRow, parse};
