//! Delimited export of the filtered tracking table.

use influencer_core::error::BoardResult;
use influencer_core::types::TrackingEvent;

/// Serialize tracking events as CSV with a header row, ready for download.
pub fn tracking_csv(events: &[TrackingEvent]) -> BoardResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for event in events {
        writer.serialize(event)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(text)
}
