use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ─── Entities ───────────────────────────────────────────────────────────

/// Social platform an influencer publishes on. Unrecognized upload values
/// are preserved as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Instagram,
    YouTube,
    Twitter,
    Other(String),
}

impl From<String> for Platform {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Instagram" => Platform::Instagram,
            "YouTube" => Platform::YouTube,
            "Twitter" => Platform::Twitter,
            _ => Platform::Other(s),
        }
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        p.to_string()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => f.write_str("Instagram"),
            Platform::YouTube => f.write_str("YouTube"),
            Platform::Twitter => f.write_str("Twitter"),
            Platform::Other(s) => f.write_str(s),
        }
    }
}

/// One influencer in the campaign roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub follower_count: u64,
    pub platform: Platform,
}

/// A single published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub influencer_id: String,
    pub platform: Platform,
    pub date: NaiveDate,
    pub url: String,
    pub caption: String,
    pub reach: u64,
    pub likes: u64,
    pub comments: u64,
}

/// An attributed conversion: one order (or batch of orders) traced back to
/// an influencer/campaign/product combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub source: String,
    pub campaign: String,
    /// Absent when the upload carries no attribution for the row.
    pub influencer_id: Option<String>,
    pub user_id: String,
    pub product: String,
    pub timestamp: DateTime<Utc>,
    pub orders: u64,
    pub revenue: f64,
}

impl TrackingEvent {
    /// Calendar date of the conversion, for date-range filtering.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Unit an influencer is compensated per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutBasis {
    Post,
    Order,
}

/// Compensation record for one influencer. Well-formed datasets carry one
/// row per influencer; this is assumed, not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub influencer_id: String,
    pub basis: PayoutBasis,
    pub rate: f64,
    pub orders: u64,
    pub total_payout: f64,
}

// ─── Derived records ────────────────────────────────────────────────────

/// Roster resolution of an influencer id. Ids present in tracking or payout
/// data but missing from the roster stay visible as `Unknown` instead of
/// being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum InfluencerName {
    Known(String),
    Unknown,
}

impl InfluencerName {
    pub fn known(&self) -> Option<&str> {
        match self {
            InfluencerName::Known(name) => Some(name),
            InfluencerName::Unknown => None,
        }
    }
}

impl std::fmt::Display for InfluencerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfluencerName::Known(name) => f.write_str(name),
            InfluencerName::Unknown => f.write_str("unknown influencer"),
        }
    }
}

/// Per-influencer financial performance, one row per influencer id present
/// in the tracking input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoasRecord {
    pub influencer_id: String,
    pub name: InfluencerName,
    pub revenue: f64,
    pub orders: u64,
    pub total_payout: f64,
    pub roas: f64,
    pub incremental_revenue: f64,
    pub incremental_roas: f64,
}
