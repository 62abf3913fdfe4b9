use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Which bundled sample dataset(s) the demo runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Mixed,
    Large,
    Negatives,
    Positives,
    All,
}

/// Configuration for the demo binary.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "costfloor", about = "Select the cheapest half of a list of costs")]
pub struct DemoConfig {
    /// Sample dataset to run when no explicit costs are given.
    #[arg(long, value_enum, default_value_t = DatasetKind::All)]
    pub dataset: DatasetKind,

    /// Comma-separated costs; overrides `--dataset`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub costs: Option<Vec<f64>>,

    /// Print each run as a single JSON line instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            dataset: DatasetKind::All,
            costs: None,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli() {
        let parsed = DemoConfig::parse_from(["costfloor"]);
        let default = DemoConfig::default();
        assert_eq!(parsed.dataset, default.dataset);
        assert_eq!(parsed.costs, default.costs);
        assert_eq!(parsed.json, default.json);
    }

    #[test]
    fn test_parses_negative_costs() {
        let parsed = DemoConfig::parse_from(["costfloor", "--costs", "-10,17,15,-40,20"]);
        assert_eq!(parsed.costs, Some(vec![-10.0, 17.0, 15.0, -40.0, 20.0]));
    }

    #[test]
    fn test_parses_dataset() {
        let parsed = DemoConfig::parse_from(["costfloor", "--dataset", "negatives", "--json"]);
        assert_eq!(parsed.dataset, DatasetKind::Negatives);
        assert!(parsed.json);
    }
}
