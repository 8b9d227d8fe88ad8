//! Optimization criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {0:?}: expected time, cost or transfers")]
pub struct InvalidCriterion(String);

/// The objective routes are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Total travel plus waiting time.
    Time,
    /// Total price.
    Cost,
    /// Number of transfers.
    Transfers,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Time, Criterion::Cost, Criterion::Transfers];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Time => "time",
            Criterion::Cost => "cost",
            Criterion::Transfers => "transfers",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidCriterion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("time".parse::<Criterion>().unwrap(), Criterion::Time);
        assert_eq!("COST".parse::<Criterion>().unwrap(), Criterion::Cost);
        assert_eq!(" Transfers ".parse::<Criterion>().unwrap(), Criterion::Transfers);
    }

    #[test]
    fn reject_unknown() {
        let err = "distance".parse::<Criterion>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown criterion \"distance\": expected time, cost or transfers"
        );
    }

    #[test]
    fn display_matches_serde() {
        for criterion in Criterion::ALL {
            let json = serde_json::to_string(&criterion).unwrap();
            assert_eq!(json, format!("\"{criterion}\""));
            let back: Criterion = serde_json::from_str(&json).unwrap();
            assert_eq!(back, criterion);
        }
    }
}
