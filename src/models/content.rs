use serde::Serialize;

use crate::entities::content;
use crate::shaping::{Normalize, Normalizer, seconds_to_minutes};

/// A content row as shown to clients; `duration` is in whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub content_id: String,
    pub service_id: String,
    pub content_name: String,
    pub content_url: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
}

impl Normalize for content::Model {
    type Output = ContentRecord;

    fn normalize(self, _: &Normalizer) -> ContentRecord {
        ContentRecord {
            content_id: self.content_id,
            service_id: self.service_id,
            content_name: self.content_name,
            content_url: self.content_url,
            category: self.category,
            duration: self.duration.map(|s| seconds_to_minutes(i64::from(s))),
        }
    }
}
