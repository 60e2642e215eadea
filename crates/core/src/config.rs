use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `INFLUENCER_BOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub attribution: AttributionConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Business constants of the ROAS computation. Both are campaign-level
/// knobs, not laws of the domain, so they live in configuration rather
/// than as literals in the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributionConfig {
    /// Share of revenue assumed to be organic/baseline demand. The
    /// remainder counts as incremental to the campaign.
    #[serde(default = "default_baseline_share")]
    pub baseline_share: f64,
    /// Divisor substituted when an influencer's summed payout is exactly
    /// zero, so ROAS stays defined instead of excluding the row.
    #[serde(default = "default_zero_payout_floor")]
    pub zero_payout_floor: f64,
}

impl AttributionConfig {
    /// Fraction of revenue credited to the campaign.
    pub fn incremental_share(&self) -> f64 {
        1.0 - self.baseline_share
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Row cutoff for "top influencers by revenue" views.
    #[serde(default = "default_top_influencers")]
    pub top_influencers: usize,
}

// Default functions
fn default_baseline_share() -> f64 {
    0.10
}
fn default_zero_payout_floor() -> f64 {
    1.0
}
fn default_top_influencers() -> usize {
    5
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            baseline_share: default_baseline_share(),
            zero_payout_floor: default_zero_payout_floor(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_influencers: default_top_influencers(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            attribution: AttributionConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("INFLUENCER_BOARD")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.attribution.baseline_share, 0.10);
        assert_eq!(cfg.attribution.zero_payout_floor, 1.0);
        assert_eq!(cfg.report.top_influencers, 5);
        assert!((cfg.attribution.incremental_share() - 0.9).abs() < 1e-12);
    }
}
