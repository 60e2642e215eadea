//! Summary stage — the superlative facts behind the narrative insights
//! panel. Every fact is an `Option`: `None` is the explicit "no data"
//! marker when the backing table is empty after filtering.

use std::collections::{BTreeMap, HashMap};

use influencer_core::types::{Influencer, InfluencerName, Platform, RoasRecord};
use serde::Serialize;

use crate::filter::FilteredDataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandRevenue {
    pub brand: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluencerSuperlative {
    pub influencer_id: String,
    pub name: InfluencerName,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformEngagement {
    pub platform: Platform,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaRevenue {
    pub category: String,
    pub revenue: f64,
}

/// One row of the "top influencers by revenue" table.
#[derive(Debug, Clone, Serialize)]
pub struct TopInfluencer {
    pub influencer_id: String,
    pub name: InfluencerName,
    /// Roster category; `None` when the id did not resolve.
    pub category: Option<String>,
    pub revenue: f64,
}

/// The five-fact insights record.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignInsights {
    pub top_brand: Option<BrandRevenue>,
    pub best_roas: Option<InfluencerSuperlative>,
    pub best_incremental_roas: Option<InfluencerSuperlative>,
    pub most_engaged_platform: Option<PlatformEngagement>,
    pub top_persona: Option<PersonaRevenue>,
}

/// Top-N records by revenue, with roster categories resolved.
pub fn top_influencers(
    records: &[RoasRecord],
    roster: &[Influencer],
    n: usize,
) -> Vec<TopInfluencer> {
    let categories: HashMap<&str, &str> = roster
        .iter()
        .map(|i| (i.id.as_str(), i.category.as_str()))
        .collect();

    let mut sorted: Vec<&RoasRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    sorted
        .into_iter()
        .take(n)
        .map(|r| TopInfluencer {
            influencer_id: r.influencer_id.clone(),
            name: r.name.clone(),
            category: categories.get(r.influencer_id.as_str()).map(|c| c.to_string()),
            revenue: r.revenue,
        })
        .collect()
}

fn best_by<F>(records: &[RoasRecord], metric: F) -> Option<InfluencerSuperlative>
where
    F: Fn(&RoasRecord) -> f64,
{
    records
        .iter()
        .max_by(|a, b| metric(a).total_cmp(&metric(b)))
        .map(|r| InfluencerSuperlative {
            influencer_id: r.influencer_id.clone(),
            name: r.name.clone(),
            value: metric(r),
        })
}

/// Derive the five superlatives from the filter and aggregation outputs.
pub fn derive_insights(
    filtered: &FilteredDataset,
    records: &[RoasRecord],
    top_n: usize,
) -> CampaignInsights {
    let mut brand_revenue: BTreeMap<&str, f64> = BTreeMap::new();
    for event in &filtered.tracking {
        *brand_revenue.entry(event.product.as_str()).or_default() += event.revenue;
    }
    let top_brand = brand_revenue
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(brand, revenue)| BrandRevenue {
            brand: brand.to_string(),
            revenue,
        });

    let mut platform_likes: HashMap<&Platform, u64> = HashMap::new();
    for post in &filtered.posts {
        *platform_likes.entry(&post.platform).or_default() += post.likes;
    }
    let most_engaged_platform = platform_likes
        .into_iter()
        .max_by_key(|&(_, likes)| likes)
        .map(|(platform, likes)| PlatformEngagement {
            platform: platform.clone(),
            likes,
        });

    let top = top_influencers(records, &filtered.influencers, top_n);
    let mut persona_revenue: BTreeMap<&str, f64> = BTreeMap::new();
    for row in &top {
        if let Some(category) = row.category.as_deref() {
            *persona_revenue.entry(category).or_default() += row.revenue;
        }
    }
    let top_persona = persona_revenue
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(category, revenue)| PersonaRevenue {
            category: category.to_string(),
            revenue,
        });

    CampaignInsights {
        top_brand,
        best_roas: best_by(records, |r| r.roas),
        best_incremental_roas: best_by(records, |r| r.incremental_roas),
        most_engaged_platform,
        top_persona,
    }
}
