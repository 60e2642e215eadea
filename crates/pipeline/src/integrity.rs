//! Referential-integrity diagnostics over a loaded snapshot. Purely
//! informational: gaps are reported, never fatal.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::dataset::CampaignDataset;

const SAMPLE_ID_CAP: usize = 10;

#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub posts_unknown_influencer: usize,
    pub events_missing_influencer: usize,
    pub events_unknown_influencer: usize,
    pub payouts_unknown_influencer: usize,
    /// Influencers with more than one payout row (the dataset assumes one).
    pub duplicate_payout_influencers: Vec<String>,
    /// A capped sample of distinct ids referenced but absent from the
    /// roster, for display.
    pub unknown_ids: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.posts_unknown_influencer == 0
            && self.events_missing_influencer == 0
            && self.events_unknown_influencer == 0
            && self.payouts_unknown_influencer == 0
            && self.duplicate_payout_influencers.is_empty()
    }
}

pub fn check_integrity(dataset: &CampaignDataset) -> IntegrityReport {
    let roster = dataset.roster_ids();
    let mut report = IntegrityReport::default();
    let mut unknown: BTreeSet<&str> = BTreeSet::new();

    for post in &dataset.posts {
        if !roster.contains(post.influencer_id.as_str()) {
            report.posts_unknown_influencer += 1;
            unknown.insert(post.influencer_id.as_str());
        }
    }

    for event in &dataset.tracking {
        match event.influencer_id.as_deref() {
            None => report.events_missing_influencer += 1,
            Some(id) if !roster.contains(id) => {
                report.events_unknown_influencer += 1;
                unknown.insert(id);
            }
            Some(_) => {}
        }
    }

    let mut payout_rows: HashMap<&str, usize> = HashMap::new();
    for payout in &dataset.payouts {
        if !roster.contains(payout.influencer_id.as_str()) {
            report.payouts_unknown_influencer += 1;
            unknown.insert(payout.influencer_id.as_str());
        }
        *payout_rows.entry(payout.influencer_id.as_str()).or_default() += 1;
    }

    let mut duplicates: Vec<String> = payout_rows
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(id, _)| id.to_string())
        .collect();
    duplicates.sort();
    report.duplicate_payout_influencers = duplicates;

    report.unknown_ids = unknown
        .into_iter()
        .take(SAMPLE_ID_CAP)
        .map(str::to_string)
        .collect();

    report
}
