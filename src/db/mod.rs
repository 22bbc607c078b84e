use chrono::{DateTime, Utc};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::entities::{content, event_calendar, services, users};
use crate::models::{
    AssignmentRow, DeadlineFilter, GroupMemberRow, RegistrationWithStatus, StatusWithService,
    VideoRow,
};

pub mod migrator;
pub mod repositories;

use repositories::assignment::AssignmentRepository;
use repositories::content::ContentRepository;
use repositories::event::EventRepository;
use repositories::group::GroupRepository;
use repositories::service::ServiceRepository;
use repositories::user::UserRepository;
use repositories::video::VideoRepository;

/// Hands out one database connection per operation.
///
/// Nothing is pooled or shared between calls: every public method opens its
/// own connection, runs its statement(s), and closes the connection again
/// whether the statement succeeded, found nothing, or failed.
#[derive(Clone)]
pub struct Store {
    url: String,
    connect_timeout: Duration,
}

impl Store {
    pub fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        Ok(Self::from_url(
            config.connection_url()?,
            Duration::from_secs(config.connect_timeout_seconds),
        ))
    }

    #[must_use]
    pub const fn from_url(url: String, connect_timeout: Duration) -> Self {
        Self {
            url,
            connect_timeout,
        }
    }

    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(1)
            .min_connections(0)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(false);

        Database::connect(opt).await
    }

    /// Runs `op` on a fresh connection and closes it afterwards.
    async fn scoped<T, F, Fut>(&self, op: F) -> Result<T, DbErr>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = Result<T, DbErr>>,
    {
        let conn = self.connect().await?;
        let result = op(conn.clone()).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {e}");
        }

        result
    }

    /// Creates missing tables.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        use sea_orm_migration::MigratorTrait;

        self.scoped(|conn| async move { migrator::Migrator::up(&conn, None).await })
            .await?;

        info!("Database schema verified");
        Ok(())
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.scoped(|conn| async move {
            let backend = conn.get_database_backend();
            conn.query_one(Statement::from_string(backend, "SELECT 1".to_string()))
                .await
                .map(|_| ())
        })
        .await?;
        Ok(())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_password_hash(&self, email: &str) -> Result<Option<String>, DbErr> {
        self.scoped(|conn| async move { UserRepository::new(conn).get_password_hash(email).await })
            .await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        self.scoped(|conn| async move { UserRepository::new(conn).get_by_email(email).await })
            .await
    }

    pub async fn insert_user(&self, user: users::Model) -> Result<(), DbErr> {
        self.scoped(|conn| async move { UserRepository::new(conn).insert(user).await })
            .await
    }

    // ========================================================================
    // Services, statuses and registrations
    // ========================================================================

    pub async fn get_service(&self, service_id: &str) -> Result<Option<services::Model>, DbErr> {
        self.scoped(|conn| async move { ServiceRepository::new(conn).get_by_id(service_id).await })
            .await
    }

    pub async fn get_status_with_service_name(
        &self,
        status_id: &str,
    ) -> Result<Option<StatusWithService>, DbErr> {
        self.scoped(|conn| async move {
            ServiceRepository::new(conn)
                .get_status_with_service_name(status_id)
                .await
        })
        .await
    }

    pub async fn get_user_registrations(
        &self,
        user_id: &str,
    ) -> Result<Vec<RegistrationWithStatus>, DbErr> {
        self.scoped(|conn| async move {
            ServiceRepository::new(conn)
                .registrations_with_status(user_id)
                .await
        })
        .await
    }

    // ========================================================================
    // Content
    // ========================================================================

    pub async fn get_contents_by_service(
        &self,
        service_id: &str,
    ) -> Result<Vec<content::Model>, DbErr> {
        self.scoped(|conn| async move {
            ContentRepository::new(conn)
                .list_by_service(service_id)
                .await
        })
        .await
    }

    pub async fn get_content(&self, content_id: &str) -> Result<Option<content::Model>, DbErr> {
        self.scoped(|conn| async move { ContentRepository::new(conn).get_by_id(content_id).await })
            .await
    }

    // ========================================================================
    // Groups
    // ========================================================================

    pub async fn get_group_members_excluding(
        &self,
        service_id: &str,
        user_id: &str,
    ) -> Result<Vec<GroupMemberRow>, DbErr> {
        self.scoped(|conn| async move {
            GroupRepository::new(conn)
                .members_excluding_self(service_id, user_id)
                .await
        })
        .await
    }

    // ========================================================================
    // Videos
    // ========================================================================

    pub async fn get_videos_by_service(&self, service_id: &str) -> Result<Vec<VideoRow>, DbErr> {
        self.scoped(|conn| async move { VideoRepository::new(conn).list_by_service(service_id).await })
            .await
    }

    pub async fn get_video_ids_by_group(&self, group_id: &str) -> Result<Vec<String>, DbErr> {
        self.scoped(|conn| async move { VideoRepository::new(conn).ids_by_group(group_id).await })
            .await
    }

    pub async fn get_videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoRow>, DbErr> {
        self.scoped(|conn| async move { VideoRepository::new(conn).list_by_ids(video_ids).await })
            .await
    }

    // ========================================================================
    // Assignments and events
    // ========================================================================

    pub async fn get_assignments_by_group(
        &self,
        group_id: &str,
        filter: DeadlineFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<AssignmentRow>, DbErr> {
        self.scoped(|conn| async move {
            AssignmentRepository::new(conn)
                .list_by_group(group_id, filter, now)
                .await
        })
        .await
    }

    pub async fn get_events_by_service(
        &self,
        service_id: &str,
    ) -> Result<Vec<event_calendar::Model>, DbErr> {
        self.scoped(|conn| async move { EventRepository::new(conn).list_by_service(service_id).await })
            .await
    }
}
