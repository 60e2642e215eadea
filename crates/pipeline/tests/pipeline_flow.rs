//! Integration test for the full filter → aggregate → summary flow over
//! the simulated dataset.

use std::collections::HashSet;

use influencer_core::config::AppConfig;
use influencer_core::types::Platform;
use influencer_pipeline::filter::{DateRange, FilterSpec};
use influencer_pipeline::roas::compute_roas;
use influencer_pipeline::summary::derive_insights;
use influencer_pipeline::{check_integrity, sample, DatasetStore};

#[test]
fn test_full_pipeline_over_sample_data() {
    let config = AppConfig::default();
    let store = DatasetStore::new(sample::generate());
    let dataset = store.snapshot();

    assert!(check_integrity(&dataset).is_clean());

    let spec = FilterSpec {
        platforms: [Platform::Instagram, Platform::YouTube]
            .into_iter()
            .collect(),
        categories: HashSet::new(),
        brands: HashSet::new(),
        date_range: DateRange::new(
            Some("2025-01-01".parse().unwrap()),
            Some("2025-07-26".parse().unwrap()),
        ),
    };
    let filtered = spec.apply(&dataset);
    assert!(!filtered.influencers.is_empty());
    assert!(filtered
        .influencers
        .iter()
        .all(|i| i.platform != Platform::Twitter));

    let outcome = compute_roas(
        &filtered.tracking,
        &filtered.payouts,
        &filtered.influencers,
        &config.attribution,
    );

    // One record per influencer id present in the filtered tracking table.
    let tracked: HashSet<&str> = filtered
        .tracking
        .iter()
        .filter_map(|e| e.influencer_id.as_deref())
        .collect();
    let recorded: HashSet<&str> = outcome
        .records
        .iter()
        .map(|r| r.influencer_id.as_str())
        .collect();
    assert_eq!(tracked, recorded);

    // Revenue conservation under grouping.
    let input_revenue: f64 = filtered.tracking.iter().map(|e| e.revenue).sum();
    let grouped_revenue: f64 = outcome.records.iter().map(|r| r.revenue).sum();
    assert!((grouped_revenue + outcome.unattributed_revenue - input_revenue).abs() < 1e-6);

    // All names resolve: the sample roster covers every tracked id.
    assert!(outcome.records.iter().all(|r| r.name.known().is_some()));

    for record in &outcome.records {
        assert_eq!(
            record.incremental_revenue,
            record.revenue * config.attribution.incremental_share()
        );
        if record.total_payout > 0.0 {
            assert_eq!(record.roas, record.revenue / record.total_payout);
        } else {
            assert_eq!(record.roas, record.revenue);
        }
    }

    let insights = derive_insights(&filtered, &outcome.records, config.report.top_influencers);
    assert!(insights.top_brand.is_some());
    assert!(insights.best_roas.is_some());
    assert!(insights.best_incremental_roas.is_some());
    assert!(insights.most_engaged_platform.is_some());
    assert!(insights.top_persona.is_some());
}

#[test]
fn test_filter_to_empty_then_no_data_insights() {
    let dataset = sample::generate();
    let spec = FilterSpec {
        brands: ["NoSuchBrand".to_string()].into_iter().collect(),
        ..FilterSpec::default()
    };
    let filtered = spec.apply(&dataset);
    assert!(filtered.tracking.is_empty());

    let outcome = compute_roas(
        &filtered.tracking,
        &filtered.payouts,
        &filtered.influencers,
        &AppConfig::default().attribution,
    );
    assert!(outcome.records.is_empty());

    let insights = derive_insights(&filtered, &outcome.records, 5);
    assert!(insights.top_brand.is_none());
    assert!(insights.best_roas.is_none());
    assert!(insights.best_incremental_roas.is_none());
    // Posts are unaffected by the brand filter, so engagement still reports.
    assert!(insights.most_engaged_platform.is_some());
    assert!(insights.top_persona.is_none());
}
