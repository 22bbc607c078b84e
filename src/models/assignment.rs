use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

use super::content::ContentRecord;
use crate::shaping::{Normalize, Normalizer};

#[derive(Debug, Clone, FromQueryResult)]
pub struct AssignmentRow {
    pub assignment_id: String,
    pub content_id: String,
    pub assignment_name: String,
    pub deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub required: bool,
    pub duration: Option<i32>,
}

/// An assignment with the details of the content it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub assignment_id: String,
    pub content_id: String,
    pub assignment_name: String,
    pub deadline: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub required: bool,
    pub duration: Option<i32>,
    /// Omitted when the referenced content cannot be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ContentRecord>,
}

impl Normalize for AssignmentRow {
    type Output = AssignmentRecord;

    fn normalize(self, normalizer: &Normalizer) -> AssignmentRecord {
        AssignmentRecord {
            assignment_id: self.assignment_id,
            content_id: self.content_id,
            assignment_name: self.assignment_name,
            deadline: normalizer.optional(self.deadline),
            description: self.description,
            url: self.url,
            notes: self.notes,
            required: self.required,
            duration: self.duration,
            content_details: None,
        }
    }
}

/// Which assignments of a group to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineFilter {
    All,
    /// Deadline still ahead, or no deadline at all.
    Open,
}
