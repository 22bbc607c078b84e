use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{content, prelude::*};

pub struct ContentRepository {
    conn: DatabaseConnection,
}

impl ContentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_service(&self, service_id: &str) -> Result<Vec<content::Model>, DbErr> {
        Content::find()
            .filter(content::Column::ServiceId.eq(service_id))
            .all(&self.conn)
            .await
    }

    pub async fn get_by_id(&self, content_id: &str) -> Result<Option<content::Model>, DbErr> {
        Content::find_by_id(content_id).one(&self.conn).await
    }
}
