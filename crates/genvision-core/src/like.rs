//! The "like a video" operation.
//!
//! Results are not stored anywhere keyed by video reference, so a like is
//! acknowledged without touching any counter.

use tracing::debug;

use crate::error::LikeError;

/// Acknowledge a like for `video_id`.
///
/// Succeeds for any present reference; fails only when none was supplied.
pub fn like(video_id: Option<&str>) -> Result<(), LikeError> {
    let video_id = video_id.ok_or(LikeError::MissingVideoId)?;
    debug!(video_id, "like acknowledged");
    Ok(())
}
