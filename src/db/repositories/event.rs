use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{event_calendar, prelude::*};

pub struct EventRepository {
    conn: DatabaseConnection,
}

impl EventRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_service(
        &self,
        service_id: &str,
    ) -> Result<Vec<event_calendar::Model>, DbErr> {
        EventCalendar::find()
            .filter(event_calendar::Column::ServiceId.eq(service_id))
            .all(&self.conn)
            .await
    }
}
