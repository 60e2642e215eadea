//! Campaign attribution pipeline — dataset snapshots, CSV ingestion,
//! filtering, ROAS aggregation, and insights derivation.

pub mod dataset;
pub mod filter;
pub mod integrity;
pub mod roas;
pub mod sample;
pub mod store;
pub mod summary;

pub use dataset::CampaignDataset;
pub use filter::{DateRange, FilterSpec, FilteredDataset};
pub use integrity::{check_integrity, IntegrityReport};
pub use roas::{compute_roas, RoasOutcome};
pub use store::DatasetStore;
pub use summary::{derive_insights, top_influencers, CampaignInsights, TopInfluencer};
