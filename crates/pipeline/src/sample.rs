//! Simulated campaign data, for running the dashboard without uploads.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use influencer_core::types::{Influencer, Payout, PayoutBasis, Platform, Post, TrackingEvent};
use rand::Rng;
use uuid::Uuid;

use crate::dataset::CampaignDataset;

const ROSTER: &[(&str, &str, &str, u64, &str)] = &[
    ("FitWithAmit", "Fitness", "M", 100_000, "Instagram"),
    ("HealthGuru", "Nutrition", "F", 250_000, "YouTube"),
    ("YogaVibes", "Yoga", "F", 80_000, "Instagram"),
    ("MuscleMan", "Bodybuilding", "M", 150_000, "YouTube"),
    ("WellnessQueen", "Wellness", "F", 300_000, "Instagram"),
    ("GymRat", "Fitness", "M", 120_000, "Twitter"),
    ("FitMom", "Parenting", "F", 90_000, "Instagram"),
    ("PowerLifter", "Powerlifting", "M", 200_000, "YouTube"),
    ("NutritionNerd", "Nutrition", "M", 180_000, "Twitter"),
    ("RunWithRaj", "Running", "M", 110_000, "Instagram"),
];

const BRANDS: &[&str] = &["MuscleBlaze", "HKVitals", "Gritzo"];

const POST_COUNT: usize = 50;
const EVENT_COUNT: usize = 100;

fn campaign_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Build a full simulated dataset: ten influencers across three platforms,
/// daily posts, hourly attributed conversions over three brands, and one
/// payout row per influencer alternating post/order basis.
pub fn generate() -> CampaignDataset {
    let mut rng = rand::thread_rng();

    let influencers: Vec<Influencer> = ROSTER
        .iter()
        .map(|&(name, category, gender, followers, platform)| Influencer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            gender: gender.to_string(),
            follower_count: followers,
            platform: Platform::from(platform.to_string()),
        })
        .collect();

    let posts: Vec<Post> = (0..POST_COUNT)
        .map(|i| {
            let owner = &influencers[i % influencers.len()];
            Post {
                influencer_id: owner.id.clone(),
                platform: owner.platform.clone(),
                date: campaign_start() + Duration::days(i as i64),
                url: format!("https://example.com/post/{i}"),
                caption: format!("Check out {}!", BRANDS[i % BRANDS.len()]),
                reach: rng.gen_range(4_000..15_000),
                likes: rng.gen_range(150..900),
                comments: rng.gen_range(5..120),
            }
        })
        .collect();

    let tracking: Vec<TrackingEvent> = (0..EVENT_COUNT)
        .map(|i| {
            let owner = &influencers[i % influencers.len()];
            // 40/30/30 brand split across the event stream.
            let product = if i < 40 {
                BRANDS[0]
            } else if i < 70 {
                BRANDS[1]
            } else {
                BRANDS[2]
            };
            TrackingEvent {
                source: "Influencer".to_string(),
                campaign: "Spring2025".to_string(),
                influencer_id: Some(owner.id.clone()),
                user_id: Uuid::new_v4().to_string(),
                product: product.to_string(),
                timestamp: Utc
                    .from_utc_datetime(&campaign_start().and_hms_opt(0, 0, 0).unwrap())
                    + Duration::hours(i as i64),
                orders: 1,
                // Deterministic revenue so brand totals are stable across runs.
                revenue: 1_000.0 + (i % 10) as f64 * 50.0,
            }
        })
        .collect();

    let payouts: Vec<Payout> = influencers
        .iter()
        .enumerate()
        .map(|(i, inf)| {
            let basis = if i % 2 == 0 {
                PayoutBasis::Post
            } else {
                PayoutBasis::Order
            };
            let rate = match basis {
                PayoutBasis::Post => 500.0,
                PayoutBasis::Order => 50.0,
            };
            Payout {
                influencer_id: inf.id.clone(),
                basis,
                rate,
                orders: 10 + (i as u64) * 2,
                total_payout: 5_000.0 + (i as f64) * 100.0,
            }
        })
        .collect();

    CampaignDataset::new(influencers, posts, tracking, payouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shape() {
        let ds = generate();
        assert_eq!(ds.influencers.len(), 10);
        assert_eq!(ds.posts.len(), POST_COUNT);
        assert_eq!(ds.tracking.len(), EVENT_COUNT);
        assert_eq!(ds.payouts.len(), 10);
    }

    #[test]
    fn test_referential_integrity() {
        let ds = generate();
        let ids: HashSet<&str> = ds.roster_ids();
        assert!(ds.posts.iter().all(|p| ids.contains(p.influencer_id.as_str())));
        assert!(ds
            .tracking
            .iter()
            .all(|e| e.influencer_id.as_deref().is_some_and(|id| ids.contains(id))));
        assert!(ds
            .payouts
            .iter()
            .all(|p| ids.contains(p.influencer_id.as_str())));
    }

    #[test]
    fn test_one_payout_per_influencer() {
        let ds = generate();
        let distinct: HashSet<&str> = ds.payouts.iter().map(|p| p.influencer_id.as_str()).collect();
        assert_eq!(distinct.len(), ds.payouts.len());
    }

    #[test]
    fn test_brand_split() {
        let ds = generate();
        let muscleblaze = ds.tracking.iter().filter(|e| e.product == "MuscleBlaze").count();
        assert_eq!(muscleblaze, 40);
    }
}
