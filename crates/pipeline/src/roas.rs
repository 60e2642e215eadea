//! Aggregation & metric stage — revenue and payout totals per influencer,
//! ROAS and the incremental variant.

use std::collections::{BTreeMap, HashMap};

use influencer_core::config::AttributionConfig;
use influencer_core::types::{Influencer, InfluencerName, Payout, RoasRecord, TrackingEvent};
use serde::Serialize;
use tracing::warn;

/// Result of the aggregation stage: one record per influencer id present
/// in the tracking input, plus the totals for events that carried no
/// influencer reference (kept visible so revenue is conserved).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoasOutcome {
    pub records: Vec<RoasRecord>,
    pub unattributed_revenue: f64,
    pub unattributed_orders: u64,
}

#[derive(Default)]
struct Totals {
    revenue: f64,
    orders: u64,
}

fn divisor(total_payout: f64, cfg: &AttributionConfig) -> f64 {
    // Only an exact zero is floored; fractional payouts divide as-is.
    if total_payout == 0.0 {
        cfg.zero_payout_floor
    } else {
        total_payout
    }
}

/// Group tracking events by influencer, left-join summed payouts, and
/// compute ROAS per record. Ids absent from the roster are labeled
/// [`InfluencerName::Unknown`] rather than dropped.
pub fn compute_roas(
    tracking: &[TrackingEvent],
    payouts: &[Payout],
    roster: &[Influencer],
    cfg: &AttributionConfig,
) -> RoasOutcome {
    let mut by_influencer: BTreeMap<&str, Totals> = BTreeMap::new();
    let mut unattributed = Totals::default();

    for event in tracking {
        let slot = match event.influencer_id.as_deref() {
            Some(id) => by_influencer.entry(id).or_default(),
            None => &mut unattributed,
        };
        slot.revenue += event.revenue;
        slot.orders += event.orders;
    }

    let mut payout_totals: HashMap<&str, f64> = HashMap::new();
    for payout in payouts {
        *payout_totals.entry(payout.influencer_id.as_str()).or_default() += payout.total_payout;
    }

    let names: HashMap<&str, &str> = roster
        .iter()
        .map(|i| (i.id.as_str(), i.name.as_str()))
        .collect();

    let records: Vec<RoasRecord> = by_influencer
        .into_iter()
        .map(|(id, totals)| {
            let name = match names.get(id) {
                Some(n) => InfluencerName::Known((*n).to_string()),
                None => {
                    warn!(influencer_id = id, "tracking references an id missing from the roster");
                    InfluencerName::Unknown
                }
            };
            let total_payout = payout_totals.get(id).copied().unwrap_or(0.0);
            let d = divisor(total_payout, cfg);
            let incremental_revenue = totals.revenue * cfg.incremental_share();
            RoasRecord {
                influencer_id: id.to_string(),
                name,
                revenue: totals.revenue,
                orders: totals.orders,
                total_payout,
                roas: totals.revenue / d,
                incremental_revenue,
                incremental_roas: incremental_revenue / d,
            }
        })
        .collect();

    RoasOutcome {
        records,
        unattributed_revenue: unattributed.revenue,
        unattributed_orders: unattributed.orders,
    }
}
