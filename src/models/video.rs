use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::shaping::{Normalize, Normalizer};

#[derive(Debug, Clone, FromQueryResult)]
pub struct VideoRow {
    pub video_id: String,
    pub video_title: String,
    pub video_link: String,
    pub attachment_1_link: Option<String>,
    pub attachment_2_link: Option<String>,
    pub attachment_3_link: Option<String>,
    pub attachment_4_link: Option<String>,
    pub attachment_5_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub video_title: String,
    pub video_link: String,
    pub attachment_1_link: Option<String>,
    pub attachment_2_link: Option<String>,
    pub attachment_3_link: Option<String>,
    pub attachment_4_link: Option<String>,
    pub attachment_5_link: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub last_updated: DateTime<FixedOffset>,
}

impl Normalize for VideoRow {
    type Output = VideoRecord;

    fn normalize(self, normalizer: &Normalizer) -> VideoRecord {
        VideoRecord {
            video_id: self.video_id,
            video_title: self.video_title,
            video_link: self.video_link,
            attachment_1_link: self.attachment_1_link,
            attachment_2_link: self.attachment_2_link,
            attachment_3_link: self.attachment_3_link,
            attachment_4_link: self.attachment_4_link,
            attachment_5_link: self.attachment_5_link,
            created_at: normalizer.datetime(self.created_at),
            last_updated: normalizer.datetime(self.last_updated),
        }
    }
}

/// Marker sent when a group has no videos distributed to it: `{"video_id": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoAssignedVideos {
    video_id: Option<String>,
}

/// Videos distributed to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AssignedVideos {
    Videos(Vec<VideoRecord>),
    Unassigned(NoAssignedVideos),
}

impl AssignedVideos {
    #[must_use]
    pub fn unassigned() -> Self {
        Self::Unassigned(NoAssignedVideos::default())
    }
}
