//! Read side of the portal: services, content, groups, videos, assignments
//! and events, already shaped for display.

use crate::models::{
    AssignedVideos, AssignmentRecord, ContentRecord, DeadlineFilter, EventRecord,
    RegistrationWithStatus, ServiceRecord, StatusWithService, VideoRecord,
};
use crate::shaping::{GroupSummary, Lookup};

/// Every lookup keeps "nothing matched" and "the database failed" apart as
/// [`Lookup::Missing`] and [`Lookup::Failed`]; the HTTP layer flattens both.
#[async_trait::async_trait]
pub trait PortalService: Send + Sync {
    async fn service(&self, service_id: &str) -> Lookup<ServiceRecord>;

    async fn status_with_service(&self, status_id: &str) -> Lookup<StatusWithService>;

    async fn user_registrations(&self, user_id: &str) -> Lookup<Vec<RegistrationWithStatus>>;

    async fn contents(&self, service_id: &str) -> Lookup<Vec<ContentRecord>>;

    async fn content_details(&self, content_id: &str) -> Lookup<ContentRecord>;

    /// The caller's groups in a service and everyone else in them.
    async fn my_groups(&self, service_id: &str, user_id: &str) -> Lookup<Vec<GroupSummary>>;

    async fn lectures(&self, service_id: &str) -> Lookup<Vec<VideoRecord>>;

    /// Videos distributed to a group. A group with nothing distributed
    /// yields [`AssignedVideos::Unassigned`], not absence.
    async fn assigned_videos(&self, group_id: &str) -> Lookup<AssignedVideos>;

    /// Assignments of a group, each with its content attached. Never absent:
    /// a group with no (or unreadable) assignments yields an empty list.
    async fn assignments_with_content(
        &self,
        group_id: &str,
        filter: DeadlineFilter,
    ) -> Vec<AssignmentRecord>;

    async fn events(&self, service_id: &str) -> Lookup<Vec<EventRecord>>;
}
