//! Influencer Board — campaign attribution & ROAS analytics over uploaded
//! or simulated influencer datasets.
//!
//! Loads the four tables, applies the selected filters, runs the
//! aggregation pipeline once, and prints the dashboard payloads.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use influencer_core::config::AppConfig;
use influencer_core::types::Platform;
use influencer_pipeline::filter::{DateRange, FilterSpec};
use influencer_pipeline::roas::compute_roas;
use influencer_pipeline::summary::{derive_insights, top_influencers};
use influencer_pipeline::{check_integrity, sample, DatasetStore};
use influencer_reporting::{insights_latex, payout_table, tracking_csv};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "influencer-board")]
#[command(about = "Influencer campaign attribution and ROAS analytics")]
#[command(version)]
struct Cli {
    /// Influencer roster CSV (simulated when omitted)
    #[arg(long, env = "INFLUENCER_BOARD__INFLUENCERS")]
    influencers: Option<PathBuf>,

    /// Posts CSV
    #[arg(long, env = "INFLUENCER_BOARD__POSTS")]
    posts: Option<PathBuf>,

    /// Tracking-event CSV
    #[arg(long, env = "INFLUENCER_BOARD__TRACKING")]
    tracking: Option<PathBuf>,

    /// Payouts CSV
    #[arg(long, env = "INFLUENCER_BOARD__PAYOUTS")]
    payouts: Option<PathBuf>,

    /// Restrict to these platforms (repeatable)
    #[arg(long = "platform")]
    platforms: Vec<String>,

    /// Restrict to these influencer categories (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Restrict to these product brands (repeatable)
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Start of the date range (inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the date range (inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Row cutoff for top-influencer views (overrides config)
    #[arg(long, env = "INFLUENCER_BOARD__REPORT__TOP_INFLUENCERS")]
    top: Option<usize>,

    /// Write the filtered tracking table as CSV to this path
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Write the LaTeX insights document to this path
    #[arg(long)]
    export_tex: Option<PathBuf>,

    /// Print the referential-integrity report for the loaded dataset
    #[arg(long, default_value_t = false)]
    integrity: bool,

    /// Emit the full payload as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "influencer_board=info,influencer_pipeline=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(top) = cli.top {
        config.report.top_influencers = top;
    }

    // Session starts from simulated data; each supplied upload replaces its
    // table. A malformed upload is reported and the previous table kept.
    let store = DatasetStore::new(sample::generate());
    load_uploads(&store, &cli);

    let dataset = store.snapshot();
    info!(
        influencers = dataset.influencers.len(),
        posts = dataset.posts.len(),
        tracking = dataset.tracking.len(),
        payouts = dataset.payouts.len(),
        "dataset ready"
    );

    if cli.integrity {
        let report = check_integrity(&dataset);
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.is_clean() {
            println!("(referential gaps above are labeled in downstream tables, not dropped)");
        }
    }

    let spec = FilterSpec {
        platforms: cli
            .platforms
            .iter()
            .map(|p| Platform::from(p.clone()))
            .collect(),
        categories: cli.categories.iter().cloned().collect(),
        brands: cli.brands.iter().cloned().collect(),
        date_range: DateRange::new(cli.from, cli.to),
    };

    let filtered = spec.apply(&dataset);
    let outcome = compute_roas(
        &filtered.tracking,
        &filtered.payouts,
        &filtered.influencers,
        &config.attribution,
    );
    let top = top_influencers(
        &outcome.records,
        &filtered.influencers,
        config.report.top_influencers,
    );
    let insights = derive_insights(&filtered, &outcome.records, config.report.top_influencers);
    let payouts = payout_table(&filtered);

    if cli.json {
        let payload = serde_json::json!({
            "records": &outcome.records,
            "unattributed_revenue": outcome.unattributed_revenue,
            "unattributed_orders": outcome.unattributed_orders,
            "dropped": filtered.dropped,
            "top_influencers": &top,
            "insights": &insights,
            "payout_table": &payouts,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_text_report(&outcome, &top, &insights, &payouts);
    }

    if let Some(path) = &cli.export_csv {
        let csv = tracking_csv(&filtered.tracking)?;
        std::fs::write(path, csv).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), rows = filtered.tracking.len(), "tracking CSV written");
    }

    if let Some(path) = &cli.export_tex {
        let doc = insights_latex(&insights, &top);
        std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "LaTeX insights written");
    }

    Ok(())
}

fn load_uploads(store: &DatasetStore, cli: &Cli) {
    type Loader = fn(&DatasetStore, File) -> influencer_core::BoardResult<usize>;
    let uploads: [(&str, &Option<PathBuf>, Loader); 4] = [
        ("influencers", &cli.influencers, |s, f| s.load_influencers(f)),
        ("posts", &cli.posts, |s, f| s.load_posts(f)),
        ("tracking", &cli.tracking, |s, f| s.load_tracking(f)),
        ("payouts", &cli.payouts, |s, f| s.load_payouts(f)),
    ];
    for (table, path, load) in uploads {
        let Some(path) = path else { continue };
        let result = File::open(path)
            .map_err(influencer_core::BoardError::from)
            .and_then(|file| load(store, file));
        match result {
            Ok(rows) => info!(table, rows, path = %path.display(), "upload loaded"),
            Err(e) => error!(table, error = %e, "upload rejected, previous data kept"),
        }
    }
}

fn print_text_report(
    outcome: &influencer_pipeline::RoasOutcome,
    top: &[influencer_pipeline::TopInfluencer],
    insights: &influencer_pipeline::CampaignInsights,
    payouts: &[influencer_reporting::PayoutRow],
) {
    println!("== ROAS by influencer ==");
    for r in &outcome.records {
        println!(
            "{:<24} revenue {:>12.2}  payout {:>10.2}  roas {:>6.2}x  incremental {:>6.2}x",
            r.name.to_string(),
            r.revenue,
            r.total_payout,
            r.roas,
            r.incremental_roas
        );
    }
    if outcome.unattributed_revenue > 0.0 {
        println!(
            "(unattributed: {:.2} revenue across {} orders with no influencer reference)",
            outcome.unattributed_revenue, outcome.unattributed_orders
        );
    }

    println!("\n== Top influencers by revenue ==");
    for row in top {
        println!(
            "{:<24} {:<14} {:>12.2}",
            row.name.to_string(),
            row.category.as_deref().unwrap_or("--"),
            row.revenue
        );
    }

    println!("\n== Payout tracking ==");
    for row in payouts {
        println!(
            "{:<24} {:<10} basis {:<5?} rate {:>8.2}  orders {:>4}  total {:>10.2}",
            row.name.to_string(),
            row.platform
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "--".into()),
            row.basis,
            row.rate,
            row.orders,
            row.total_payout
        );
    }

    println!("\n== Insights ==");
    match &insights.top_brand {
        Some(b) => println!("Top performing brand: {} ({:.2})", b.brand, b.revenue),
        None => println!("Top performing brand: no data"),
    }
    match &insights.best_roas {
        Some(s) => println!("Best ROAS: {} ({:.2}x)", s.name, s.value),
        None => println!("Best ROAS: no data"),
    }
    match &insights.best_incremental_roas {
        Some(s) => println!("Best incremental ROAS: {} ({:.2}x)", s.name, s.value),
        None => println!("Best incremental ROAS: no data"),
    }
    match &insights.most_engaged_platform {
        Some(p) => println!("Most engaged platform: {} ({} likes)", p.platform, p.likes),
        None => println!("Most engaged platform: no data"),
    }
    match &insights.top_persona {
        Some(p) => println!(
            "Top persona: {} influencers drive the highest revenue ({:.2})",
            p.category, p.revenue
        ),
        None => println!("Top persona: no data"),
    }
}
