//! Reports configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Reports configuration
///
/// The monthly revenue series is sorted and truncated per these knobs
/// rather than hardcoding an order in the query.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Maximum number of monthly buckets returned
    #[serde(default = "default_monthly_series_limit")]
    pub monthly_series_limit: u32,

    /// Which end of the series the limit keeps
    #[serde(default)]
    pub monthly_series_order: SeriesOrder,
}

/// Sort order for the monthly revenue series.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    /// Ascending by month; the limit keeps the oldest buckets.
    #[default]
    OldestFirst,

    /// Descending by month; the limit keeps the most recent buckets.
    NewestFirst,
}

impl ReportsConfig {
    /// Validate reports configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.monthly_series_limit == 0 || self.monthly_series_limit > 120 {
            return Err(ValidationError::InvalidSeriesLimit);
        }
        Ok(())
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            monthly_series_limit: default_monthly_series_limit(),
            monthly_series_order: SeriesOrder::default(),
        }
    }
}

fn default_monthly_series_limit() -> u32 {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_config_defaults() {
        let config = ReportsConfig::default();
        assert_eq!(config.monthly_series_limit, 6);
        assert_eq!(config.monthly_series_order, SeriesOrder::OldestFirst);
    }

    #[test]
    fn validation_rejects_zero_limit() {
        let config = ReportsConfig {
            monthly_series_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_excessive_limit() {
        let config = ReportsConfig {
            monthly_series_limit: 500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn series_order_deserializes_snake_case() {
        let order: SeriesOrder = serde_json::from_str("\"newest_first\"").unwrap();
        assert_eq!(order, SeriesOrder::NewestFirst);
    }
}
