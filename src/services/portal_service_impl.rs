//! `SeaORM` implementation of the `PortalService` trait.

use async_trait::async_trait;
use chrono::Utc;

use crate::db::Store;
use crate::models::{
    AssignedVideos, AssignmentRecord, ContentRecord, DeadlineFilter, EventRecord,
    RegistrationWithStatus, ServiceRecord, StatusWithService, VideoRecord,
};
use crate::services::portal_service::PortalService;
use crate::shaping::{GroupSummary, Lookup, MemberRow, Normalize, Normalizer, group_members};

pub struct SeaOrmPortalService {
    store: Store,
    normalizer: Normalizer,
}

impl SeaOrmPortalService {
    #[must_use]
    pub const fn new(store: Store, normalizer: Normalizer) -> Self {
        Self { store, normalizer }
    }
}

#[async_trait]
impl PortalService for SeaOrmPortalService {
    async fn service(&self, service_id: &str) -> Lookup<ServiceRecord> {
        Lookup::from_row(self.store.get_service(service_id).await, "service")
            .map(|row| row.normalize(&self.normalizer))
    }

    async fn status_with_service(&self, status_id: &str) -> Lookup<StatusWithService> {
        Lookup::from_row(
            self.store.get_status_with_service_name(status_id).await,
            "status",
        )
        .map(|row| row.normalize(&self.normalizer))
    }

    async fn user_registrations(&self, user_id: &str) -> Lookup<Vec<RegistrationWithStatus>> {
        Lookup::from_rows(
            self.store.get_user_registrations(user_id).await,
            "registrations for user",
        )
        .map(|rows| rows.normalize(&self.normalizer))
    }

    async fn contents(&self, service_id: &str) -> Lookup<Vec<ContentRecord>> {
        Lookup::from_rows(
            self.store.get_contents_by_service(service_id).await,
            "content for service",
        )
        .map(|rows| rows.normalize(&self.normalizer))
    }

    async fn content_details(&self, content_id: &str) -> Lookup<ContentRecord> {
        Lookup::from_row(self.store.get_content(content_id).await, "content")
            .map(|row| row.normalize(&self.normalizer))
    }

    async fn my_groups(&self, service_id: &str, user_id: &str) -> Lookup<Vec<GroupSummary>> {
        let rows = Lookup::from_rows(
            self.store
                .get_group_members_excluding(service_id, user_id)
                .await,
            "group members for service and user",
        );

        match rows {
            Lookup::Found(rows) => group_members(rows.into_iter().map(MemberRow::from))
                .map_or(Lookup::Missing, Lookup::Found),
            Lookup::Missing => Lookup::Missing,
            Lookup::Failed(e) => Lookup::Failed(e),
        }
    }

    async fn lectures(&self, service_id: &str) -> Lookup<Vec<VideoRecord>> {
        Lookup::from_rows(
            self.store.get_videos_by_service(service_id).await,
            "videos for service",
        )
        .map(|rows| rows.normalize(&self.normalizer))
    }

    async fn assigned_videos(&self, group_id: &str) -> Lookup<AssignedVideos> {
        let Lookup::Found(video_ids) = Lookup::from_rows(
            self.store.get_video_ids_by_group(group_id).await,
            "videos for group",
        ) else {
            return Lookup::Found(AssignedVideos::unassigned());
        };

        match Lookup::from_rows(
            self.store.get_videos_by_ids(&video_ids).await,
            "videos for the distributed ids",
        ) {
            Lookup::Found(rows) => {
                Lookup::Found(AssignedVideos::Videos(rows.normalize(&self.normalizer)))
            }
            Lookup::Missing => Lookup::Found(AssignedVideos::unassigned()),
            Lookup::Failed(e) => Lookup::Failed(e),
        }
    }

    async fn assignments_with_content(
        &self,
        group_id: &str,
        filter: DeadlineFilter,
    ) -> Vec<AssignmentRecord> {
        let Lookup::Found(rows) = Lookup::from_rows(
            self.store
                .get_assignments_by_group(group_id, filter, Utc::now())
                .await,
            "assignments for group",
        ) else {
            return Vec::new();
        };

        let mut assignments = Vec::with_capacity(rows.len());
        for row in rows {
            let content_id = row.content_id.clone();
            let mut record = row.normalize(&self.normalizer);
            record.content_details = self.content_details(&content_id).await.into_option();
            assignments.push(record);
        }

        assignments
    }

    async fn events(&self, service_id: &str) -> Lookup<Vec<EventRecord>> {
        Lookup::from_rows(
            self.store.get_events_by_service(service_id).await,
            "events for service",
        )
        .map(|rows| rows.normalize(&self.normalizer))
    }
}
