//! Payout tracking table — payout rows joined with roster name and
//! platform for display.

use std::collections::HashMap;

use influencer_core::types::{InfluencerName, PayoutBasis, Platform};
use influencer_pipeline::FilteredDataset;
use serde::Serialize;

/// One display row of the payout table.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutRow {
    pub name: InfluencerName,
    /// Roster platform; `None` when the influencer id did not resolve.
    pub platform: Option<Platform>,
    pub basis: PayoutBasis,
    pub rate: f64,
    pub orders: u64,
    pub total_payout: f64,
}

/// Join filtered payouts with the filtered roster. Payouts whose id is not
/// in the roster keep a row with the unknown label instead of disappearing
/// from the table.
pub fn payout_table(filtered: &FilteredDataset) -> Vec<PayoutRow> {
    let roster: HashMap<&str, (&str, &Platform)> = filtered
        .influencers
        .iter()
        .map(|i| (i.id.as_str(), (i.name.as_str(), &i.platform)))
        .collect();

    filtered
        .payouts
        .iter()
        .map(|p| {
            let resolved = roster.get(p.influencer_id.as_str());
            PayoutRow {
                name: match resolved {
                    Some((name, _)) => InfluencerName::Known((*name).to_string()),
                    None => InfluencerName::Unknown,
                },
                platform: resolved.map(|(_, platform)| (*platform).clone()),
                basis: p.basis,
                rate: p.rate,
                orders: p.orders,
                total_payout: p.total_payout,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use influencer_core::types::Payout;
    use influencer_pipeline::{sample, FilterSpec};

    #[test]
    fn test_all_sample_payouts_resolve() {
        let filtered = FilterSpec::default().apply(&sample::generate());
        let rows = payout_table(&filtered);
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.name.known().is_some() && r.platform.is_some()));
    }

    #[test]
    fn test_unresolved_payout_is_labeled() {
        let mut filtered = FilterSpec::default().apply(&sample::generate());
        filtered.payouts.push(Payout {
            influencer_id: "ghost-1".into(),
            basis: PayoutBasis::Order,
            rate: 50.0,
            orders: 3,
            total_payout: 150.0,
        });
        let rows = payout_table(&filtered);
        let ghost = rows.last().unwrap();
        assert_eq!(ghost.name, InfluencerName::Unknown);
        assert_eq!(ghost.platform, None);
        assert_eq!(ghost.total_payout, 150.0);
    }
}
