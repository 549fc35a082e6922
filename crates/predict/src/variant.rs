use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which trained model to query. Each variant is a separate endpoint on the
/// model service, tuned for a different operating point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictVariant {
    Precision,
    Recall,
    Hybrid,
}

impl PredictVariant {
    /// Path segment on the model service.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            PredictVariant::Precision => "predict_precision",
            PredictVariant::Recall => "predict_recall",
            PredictVariant::Hybrid => "predict_hybrid",
        }
    }
}

impl fmt::Display for PredictVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PredictVariant::Precision => "precision",
            PredictVariant::Recall => "recall",
            PredictVariant::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown prediction variant: {0}")]
pub struct UnknownVariant(String);

impl FromStr for PredictVariant {
    type Err = UnknownVariant;

    /// Accepts both the short selector (`precision`) and the wire spelling
    /// (`predict_precision`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precision" | "predict_precision" => Ok(PredictVariant::Precision),
            "recall" | "predict_recall" => Ok(PredictVariant::Recall),
            "hybrid" | "predict_hybrid" => Ok(PredictVariant::Hybrid),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_match_the_model_service() {
        assert_eq!(PredictVariant::Precision.endpoint_path(), "predict_precision");
        assert_eq!(PredictVariant::Recall.endpoint_path(), "predict_recall");
        assert_eq!(PredictVariant::Hybrid.endpoint_path(), "predict_hybrid");
    }

    #[test]
    fn parses_short_and_wire_spellings() {
        assert_eq!("hybrid".parse::<PredictVariant>().unwrap(), PredictVariant::Hybrid);
        assert_eq!(
            "predict_recall".parse::<PredictVariant>().unwrap(),
            PredictVariant::Recall
        );
        assert!("predict_everything".parse::<PredictVariant>().is_err());
    }
}
