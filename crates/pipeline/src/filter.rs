//! Filter stage — restricts the four tables to the user's platform,
//! category, brand, and date-range selection while keeping the child
//! tables referentially consistent with the surviving roster.

use std::collections::HashSet;

use chrono::NaiveDate;
use influencer_core::types::{Influencer, Payout, Platform, Post, TrackingEvent};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::CampaignDataset;

/// Inclusive calendar-date window. A missing bound is unbounded on that
/// side; reversed bounds disable the restriction entirely instead of
/// erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    fn is_reversed(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }

    pub fn is_unrestricted(&self) -> bool {
        (self.start.is_none() && self.end.is_none()) || self.is_reversed()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.is_reversed() {
            return true;
        }
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// User-selected filter predicates. An empty set places no restriction on
/// its dimension (the dashboard multiselects default to everything).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub platforms: HashSet<Platform>,
    pub categories: HashSet<String>,
    pub brands: HashSet<String>,
    pub date_range: DateRange,
}

/// Rows removed by [`FilterSpec::apply`], tallied by the first predicate
/// that rejected them. Referential gaps (missing or out-of-roster
/// influencer references) are counted here rather than vanishing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DroppedRows {
    pub posts_outside_roster: usize,
    pub posts_outside_range: usize,
    pub events_missing_influencer: usize,
    pub events_outside_roster: usize,
    pub events_outside_brands: usize,
    pub events_outside_range: usize,
    pub payouts_outside_roster: usize,
}

/// Output of the filter stage: four consistent table views plus the
/// dropped-row tally. The input snapshot is untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilteredDataset {
    pub influencers: Vec<Influencer>,
    pub posts: Vec<Post>,
    pub tracking: Vec<TrackingEvent>,
    pub payouts: Vec<Payout>,
    pub dropped: DroppedRows,
}

fn admits<T>(set: &HashSet<T>, value: &T) -> bool
where
    T: std::hash::Hash + Eq,
{
    set.is_empty() || set.contains(value)
}

impl FilterSpec {
    pub fn apply(&self, dataset: &CampaignDataset) -> FilteredDataset {
        let influencers: Vec<Influencer> = dataset
            .influencers
            .iter()
            .filter(|i| admits(&self.platforms, &i.platform) && admits(&self.categories, &i.category))
            .cloned()
            .collect();

        let surviving: HashSet<&str> = influencers.iter().map(|i| i.id.as_str()).collect();
        let mut dropped = DroppedRows::default();

        let posts: Vec<Post> = dataset
            .posts
            .iter()
            .filter(|p| {
                if !surviving.contains(p.influencer_id.as_str()) {
                    dropped.posts_outside_roster += 1;
                    return false;
                }
                if !self.date_range.contains(p.date) {
                    dropped.posts_outside_range += 1;
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        let tracking: Vec<TrackingEvent> = dataset
            .tracking
            .iter()
            .filter(|e| {
                let Some(id) = e.influencer_id.as_deref() else {
                    dropped.events_missing_influencer += 1;
                    return false;
                };
                if !surviving.contains(id) {
                    dropped.events_outside_roster += 1;
                    return false;
                }
                if !admits(&self.brands, &e.product) {
                    dropped.events_outside_brands += 1;
                    return false;
                }
                if !self.date_range.contains(e.date()) {
                    dropped.events_outside_range += 1;
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        let payouts: Vec<Payout> = dataset
            .payouts
            .iter()
            .filter(|p| {
                if !surviving.contains(p.influencer_id.as_str()) {
                    dropped.payouts_outside_roster += 1;
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        debug!(
            influencers = influencers.len(),
            posts = posts.len(),
            tracking = tracking.len(),
            payouts = payouts.len(),
            "filter applied"
        );

        FilteredDataset {
            influencers,
            posts,
            tracking,
            payouts,
            dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_filtered_row_satisfies_predicates() {
        let dataset = sample::generate();
        let spec = FilterSpec {
            platforms: [Platform::Instagram].into_iter().collect(),
            categories: HashSet::new(),
            brands: ["MuscleBlaze".to_string()].into_iter().collect(),
            date_range: DateRange::new(Some(date("2025-01-01")), Some(date("2025-01-20"))),
        };
        let filtered = spec.apply(&dataset);

        assert!(filtered
            .influencers
            .iter()
            .all(|i| i.platform == Platform::Instagram));
        assert!(filtered
            .posts
            .iter()
            .all(|p| spec.date_range.contains(p.date)));
        assert!(filtered
            .tracking
            .iter()
            .all(|e| e.product == "MuscleBlaze" && spec.date_range.contains(e.date())));
    }

    #[test]
    fn test_child_tables_never_reference_filtered_out_influencers() {
        let dataset = sample::generate();
        let spec = FilterSpec {
            categories: ["Fitness".to_string(), "Yoga".to_string()]
                .into_iter()
                .collect(),
            ..FilterSpec::default()
        };
        let filtered = spec.apply(&dataset);
        let ids: HashSet<&str> = filtered.influencers.iter().map(|i| i.id.as_str()).collect();

        assert!(!filtered.influencers.is_empty());
        assert!(filtered
            .posts
            .iter()
            .all(|p| ids.contains(p.influencer_id.as_str())));
        assert!(filtered
            .tracking
            .iter()
            .all(|e| ids.contains(e.influencer_id.as_deref().unwrap())));
        assert!(filtered
            .payouts
            .iter()
            .all(|p| ids.contains(p.influencer_id.as_str())));
    }

    #[test]
    fn test_empty_sets_restrict_nothing() {
        let dataset = sample::generate();
        let filtered = FilterSpec::default().apply(&dataset);
        assert_eq!(filtered.influencers.len(), dataset.influencers.len());
        assert_eq!(filtered.posts.len(), dataset.posts.len());
        assert_eq!(filtered.tracking.len(), dataset.tracking.len());
        assert_eq!(filtered.payouts.len(), dataset.payouts.len());
    }

    #[test]
    fn test_single_day_range_is_inclusive() {
        let day = date("2025-01-05");
        let range = DateRange::new(Some(day), Some(day));
        assert!(range.contains(day));
        assert!(!range.contains(date("2025-01-04")));
        assert!(!range.contains(date("2025-01-06")));
    }

    #[test]
    fn test_reversed_range_means_no_restriction() {
        let range = DateRange::new(Some(date("2025-06-01")), Some(date("2025-01-01")));
        assert!(range.is_unrestricted());
        assert!(range.contains(date("1999-12-31")));
        assert!(range.contains(date("2030-01-01")));
    }

    #[test]
    fn test_half_open_range() {
        let range = DateRange::new(Some(date("2025-01-10")), None);
        assert!(!range.contains(date("2025-01-09")));
        assert!(range.contains(date("2026-07-01")));
    }

    #[test]
    fn test_missing_influencer_reference_is_tallied() {
        let mut dataset = sample::generate();
        let mut orphan = dataset.tracking[0].clone();
        orphan.influencer_id = None;
        dataset.tracking.push(orphan);

        let filtered = FilterSpec::default().apply(&dataset);
        assert_eq!(filtered.dropped.events_missing_influencer, 1);
    }
}
