//! Multiple-comparison correction methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ArgumentError;

/// Adjustment applied to the raw pairwise p-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionMethod {
    /// Report raw p-values unchanged; no q-values are produced.
    #[default]
    None,
    /// q = min(1, p·m) over m comparisons.
    Bonferroni,
    /// Benjamini-Hochberg step-up false discovery rate.
    Fdr,
}

impl CorrectionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bonferroni => "bonferroni",
            Self::Fdr => "fdr",
        }
    }
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorrectionMethod {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "bonferroni" => Ok(Self::Bonferroni),
            "fdr" => Ok(Self::Fdr),
            other => Err(ArgumentError::UnknownCorrection {
                given: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!("none".parse::<CorrectionMethod>().unwrap(), CorrectionMethod::None);
        assert_eq!(
            "bonferroni".parse::<CorrectionMethod>().unwrap(),
            CorrectionMethod::Bonferroni
        );
        assert_eq!("fdr".parse::<CorrectionMethod>().unwrap(), CorrectionMethod::Fdr);
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = "median".parse::<CorrectionMethod>().unwrap_err();
        assert!(matches!(err, ArgumentError::UnknownCorrection { given } if given == "median"));
    }

    #[test]
    fn test_name_roundtrip() {
        for method in [
            CorrectionMethod::None,
            CorrectionMethod::Bonferroni,
            CorrectionMethod::Fdr,
        ] {
            assert_eq!(method.name().parse::<CorrectionMethod>().unwrap(), method);
        }
    }
}
