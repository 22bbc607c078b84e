use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::entities::event_calendar;
use crate::shaping::{Normalize, Normalizer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event_id: String,
    pub service_id: String,
    pub title: String,
    pub event_datetime: DateTime<FixedOffset>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub last_updated: DateTime<FixedOffset>,
}

impl Normalize for event_calendar::Model {
    type Output = EventRecord;

    fn normalize(self, normalizer: &Normalizer) -> EventRecord {
        EventRecord {
            event_id: self.event_id,
            service_id: self.service_id,
            title: self.title,
            event_datetime: normalizer.datetime(self.event_datetime),
            location: self.location,
            description: self.description,
            notes: self.notes,
            created_at: normalizer.datetime(self.created_at),
            last_updated: normalizer.datetime(self.last_updated),
        }
    }
}
