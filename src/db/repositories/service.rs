use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};

use crate::entities::{prelude::*, services, status, user_registrations};
use crate::models::{RegistrationWithStatus, StatusWithService};

/// Services, their statuses, and user enrolments.
pub struct ServiceRepository {
    conn: DatabaseConnection,
}

impl ServiceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, service_id: &str) -> Result<Option<services::Model>, DbErr> {
        Services::find_by_id(service_id).one(&self.conn).await
    }

    pub async fn get_status_with_service_name(
        &self,
        status_id: &str,
    ) -> Result<Option<StatusWithService>, DbErr> {
        Status::find()
            .select_only()
            .column(status::Column::StatusName)
            .column(status::Column::StartDate)
            .column(status::Column::EndDate)
            .column(status::Column::ServiceId)
            .column_as(services::Column::ServiceName, "service_name")
            .join(JoinType::InnerJoin, status::Relation::Services.def())
            .filter(status::Column::StatusId.eq(status_id))
            .into_model::<StatusWithService>()
            .one(&self.conn)
            .await
    }

    /// Left joins keep registrations whose status or service row is gone.
    pub async fn registrations_with_status(
        &self,
        user_id: &str,
    ) -> Result<Vec<RegistrationWithStatus>, DbErr> {
        UserRegistrations::find()
            .select_only()
            .column(user_registrations::Column::RegistrationId)
            .column(user_registrations::Column::UserId)
            .column(user_registrations::Column::ServiceId)
            .column(user_registrations::Column::StatusLevel)
            .column(user_registrations::Column::StatusId)
            .column_as(status::Column::StatusName, "status_name")
            .column_as(status::Column::StartDate, "start_date")
            .column_as(status::Column::EndDate, "end_date")
            .column_as(services::Column::ServiceName, "service_name")
            .join(JoinType::LeftJoin, user_registrations::Relation::Status.def())
            .join(
                JoinType::LeftJoin,
                user_registrations::Relation::Services.def(),
            )
            .filter(user_registrations::Column::UserId.eq(user_id))
            .into_model::<RegistrationWithStatus>()
            .all(&self.conn)
            .await
    }
}
