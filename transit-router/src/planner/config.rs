//! Planner configuration.

use tracing::warn;

use crate::domain::ClockTime;
use crate::graph::TransferSettings;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Cost of a same-city bus/train transfer.
    pub transfer_cost: f64,

    /// Duration of a same-city bus/train transfer (minutes).
    pub transfer_time_mins: i64,

    /// Number of routes returned when a query does not ask for a limit.
    pub max_results: usize,

    /// Query start time when none is given (minutes after midnight).
    pub default_start_mins: i64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        transfer_cost: f64,
        transfer_time_mins: i64,
        max_results: usize,
        default_start_mins: i64,
    ) -> Self {
        Self {
            transfer_cost,
            transfer_time_mins,
            max_results,
            default_start_mins,
        }
    }

    /// Read overrides from the process environment.
    ///
    /// Recognises `TRANSFER_COST`, `TRANSFER_TIME` and `MAX_RESULTS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults plus whatever `lookup` supplies.
    ///
    /// Malformed values are logged and the default is kept. Transfer cost and
    /// time must not be negative, and the result limit must be positive.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(cost) =
            parse_override(&lookup, "TRANSFER_COST", |c: &f64| c.is_finite() && *c >= 0.0)
        {
            config.transfer_cost = cost;
        }
        if let Some(time) = parse_override(&lookup, "TRANSFER_TIME", |t: &i64| *t >= 0) {
            config.transfer_time_mins = time;
        }
        if let Some(limit) = parse_override(&lookup, "MAX_RESULTS", |n: &usize| *n > 0) {
            config.max_results = limit;
        }

        config
    }

    /// Transfer edge settings for graph construction.
    pub fn transfer_settings(&self) -> TransferSettings {
        TransferSettings {
            cost: self.transfer_cost,
            time_mins: self.transfer_time_mins,
        }
    }

    /// Returns the default start time as a clock time.
    pub fn default_start(&self) -> ClockTime {
        ClockTime::MIDNIGHT.plus_minutes(self.default_start_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transfer_cost: 5.0,
            transfer_time_mins: 10,
            max_results: 5,
            default_start_mins: 8 * 60, // 08:00
        }
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    valid: impl Fn(&T) -> bool,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) if valid(&value) => Some(value),
        _ => {
            warn!(key, value = %raw, "ignoring malformed configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.transfer_cost, 5.0);
        assert_eq!(config.transfer_time_mins, 10);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.default_start_mins, 480);
    }

    #[test]
    fn derived_values() {
        let config = PlannerConfig::default();

        assert_eq!(config.default_start().to_string(), "08:00");
        assert_eq!(config.transfer_settings(), TransferSettings::default());
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(2.5, 4, 3, 9 * 60 + 30);

        assert_eq!(config.transfer_cost, 2.5);
        assert_eq!(config.transfer_time_mins, 4);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.default_start().to_string(), "09:30");
    }

    #[test]
    fn overrides_from_lookup() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("TRANSFER_COST", "7.5"),
            ("TRANSFER_TIME", " 15 "),
            ("MAX_RESULTS", "10"),
        ]));

        assert_eq!(config.transfer_cost, 7.5);
        assert_eq!(config.transfer_time_mins, 15);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn malformed_overrides_keep_defaults() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("TRANSFER_COST", "cheap"),
            ("TRANSFER_TIME", "10.5"),
        ]));

        assert_eq!(config, PlannerConfig::default());

        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("TRANSFER_COST", "-1"),
            ("TRANSFER_TIME", "-1"),
            ("MAX_RESULTS", "-1"),
        ]));

        assert_eq!(config, PlannerConfig::default());

        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("TRANSFER_COST", "NaN"),
            ("TRANSFER_TIME", "-20"),
            ("MAX_RESULTS", "0"),
        ]));

        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn zero_transfer_overrides_are_accepted() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            ("TRANSFER_COST", "0"),
            ("TRANSFER_TIME", "0"),
        ]));

        assert_eq!(config.transfer_cost, 0.0);
        assert_eq!(config.transfer_time_mins, 0);
    }
}
