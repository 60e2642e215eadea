//! Session dataset store. Holds the current snapshot behind a lock; every
//! upload builds a complete replacement snapshot, and a failed upload
//! leaves the previous one installed.

use std::io::Read;
use std::sync::Arc;

use influencer_core::error::BoardResult;
use parking_lot::RwLock;
use tracing::info;

use crate::dataset::{self, CampaignDataset};

pub struct DatasetStore {
    current: RwLock<Arc<CampaignDataset>>,
}

impl DatasetStore {
    pub fn new(initial: CampaignDataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The snapshot readers should compute against. Cheap to clone; stays
    /// valid even if a replacement lands mid-computation.
    pub fn snapshot(&self) -> Arc<CampaignDataset> {
        self.current.read().clone()
    }

    pub fn replace(&self, dataset: CampaignDataset) {
        *self.current.write() = Arc::new(dataset);
    }

    pub fn load_influencers<R: Read>(&self, reader: R) -> BoardResult<usize> {
        let rows = dataset::read_influencers(reader)?;
        let count = rows.len();
        let mut next = (*self.snapshot()).clone();
        next.influencers = rows;
        self.replace(next);
        info!(rows = count, "influencers table replaced");
        Ok(count)
    }

    pub fn load_posts<R: Read>(&self, reader: R) -> BoardResult<usize> {
        let rows = dataset::read_posts(reader)?;
        let count = rows.len();
        let mut next = (*self.snapshot()).clone();
        next.posts = rows;
        self.replace(next);
        info!(rows = count, "posts table replaced");
        Ok(count)
    }

    pub fn load_tracking<R: Read>(&self, reader: R) -> BoardResult<usize> {
        let rows = dataset::read_tracking(reader)?;
        let count = rows.len();
        let mut next = (*self.snapshot()).clone();
        next.tracking = rows;
        self.replace(next);
        info!(rows = count, "tracking table replaced");
        Ok(count)
    }

    pub fn load_payouts<R: Read>(&self, reader: R) -> BoardResult<usize> {
        let rows = dataset::read_payouts(reader)?;
        let count = rows.len();
        let mut next = (*self.snapshot()).clone();
        next.payouts = rows;
        self.replace(next);
        info!(rows = count, "payouts table replaced");
        Ok(count)
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(CampaignDataset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_replace_wholesale() {
        let store = DatasetStore::default();
        assert!(store.snapshot().is_empty());
        store.replace(sample::generate());
        assert_eq!(store.snapshot().influencers.len(), 10);
    }

    #[test]
    fn test_successful_load_swaps_one_table() {
        let store = DatasetStore::new(sample::generate());
        let csv = "\
id,name,category,gender,follower_count,platform
new-1,Newcomer,Fitness,F,5000,Instagram
";
        let count = store.load_influencers(csv.as_bytes()).unwrap();
        assert_eq!(count, 1);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.influencers.len(), 1);
        // Other tables are untouched.
        assert_eq!(snapshot.posts.len(), 50);
    }

    #[test]
    fn test_failed_load_retains_previous_snapshot() {
        let store = DatasetStore::new(sample::generate());
        let before = store.snapshot();
        let bad = "id,name\nbroken";
        assert!(store.load_influencers(bad.as_bytes()).is_err());
        let after = store.snapshot();
        assert!(Arc::ptr_eq(&before, &after));
    }
}
