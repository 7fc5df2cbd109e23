use std::{fmt::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stratmatch::{DeploymentConfig, Evaluation, load_rule_table, schema::nonclassic_rules};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Match a query context against a strategy rule table.
#[derive(Parser, Debug)]
#[command(name = "stratmatch", about = "Strategy rule matcher")]
struct Cli {
    /// Deployment configuration (JSON). Defaults to the built-in nonclassic deployment.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rule table (JSON array of Permutation/Strategy rows). Defaults to the built-in rules.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Override a query context value, e.g. --set "Player or Team=J Brown".
    #[arg(long = "set", value_name = "ATTR=VALUE")]
    sets: Vec<String>,

    /// Override an attribute weight, e.g. --weight Cohort=12.
    #[arg(long = "weight", value_name = "ATTR=N")]
    weights: Vec<String>,

    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let rows = match &cli.rules {
        Some(path) => {
            load_rule_table(path).with_context(|| format!("loading rules {}", path.display()))?
        }
        None => nonclassic_rules(),
    };

    let evaluation = config.evaluate(&rows);

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        Format::Table => print!("{}", render_table(&evaluation)),
    }

    Ok(())
}

/// Load the deployment and apply `--set`/`--weight` overrides.
fn build_config(cli: &Cli) -> Result<DeploymentConfig> {
    let mut config = match &cli.config {
        Some(path) => DeploymentConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DeploymentConfig::nonclassic(),
    };
    for assignment in &cli.sets {
        config.set_context(assignment)?;
    }
    for assignment in &cli.weights {
        config.set_weight(assignment)?;
    }
    config.validate().context("invalid deployment configuration")?;
    Ok(config)
}

fn render_table(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", evaluation.summary());

    if !evaluation.matches.is_empty() {
        let width = evaluation
            .matches
            .iter()
            .map(|m| m.strategy.chars().count())
            .max()
            .unwrap_or(0)
            .max("Strategy".len());

        let _ = writeln!(out);
        let _ = writeln!(out, "{:<width$}  {:>5}  Permutation", "Strategy", "Score");
        for m in &evaluation.matches {
            let _ = writeln!(out, "{:<width$}  {:>5}  {}", m.strategy, m.score, m.permutation);
        }
    }

    if !evaluation.failures.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} row(s) could not be parsed:", evaluation.failures.len());
        for failure in &evaluation.failures {
            let _ = writeln!(out, "  row {}: {}", failure.row, failure.error);
        }
    }

    out
}
