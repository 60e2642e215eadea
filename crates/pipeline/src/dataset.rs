//! The four-table dataset snapshot and its CSV ingestion.

use std::collections::HashSet;
use std::io::Read;

use influencer_core::error::{BoardError, BoardResult};
use influencer_core::types::{Influencer, Payout, Post, TrackingEvent};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An immutable snapshot of the loaded campaign data. The pipeline stages
/// take a snapshot by reference; uploads produce a new snapshot rather than
/// mutating one in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignDataset {
    pub influencers: Vec<Influencer>,
    pub posts: Vec<Post>,
    pub tracking: Vec<TrackingEvent>,
    pub payouts: Vec<Payout>,
}

impl CampaignDataset {
    pub fn new(
        influencers: Vec<Influencer>,
        posts: Vec<Post>,
        tracking: Vec<TrackingEvent>,
        payouts: Vec<Payout>,
    ) -> Self {
        Self {
            influencers,
            posts,
            tracking,
            payouts,
        }
    }

    /// Roster ids, for referential checks.
    pub fn roster_ids(&self) -> HashSet<&str> {
        self.influencers.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.influencers.is_empty()
            && self.posts.is_empty()
            && self.tracking.is_empty()
            && self.payouts.is_empty()
    }
}

/// Decode one header-rowed delimited table. The whole table is decoded
/// before anything is returned, so a malformed row rejects the upload
/// without installing a partial table.
fn read_table<T, R>(reader: R, table: &'static str) -> BoardResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: T = record.map_err(|source| BoardError::MalformedInput { table, source })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn read_influencers<R: Read>(reader: R) -> BoardResult<Vec<Influencer>> {
    read_table(reader, "influencers")
}

pub fn read_posts<R: Read>(reader: R) -> BoardResult<Vec<Post>> {
    read_table(reader, "posts")
}

pub fn read_tracking<R: Read>(reader: R) -> BoardResult<Vec<TrackingEvent>> {
    read_table(reader, "tracking")
}

pub fn read_payouts<R: Read>(reader: R) -> BoardResult<Vec<Payout>> {
    read_table(reader, "payouts")
}
