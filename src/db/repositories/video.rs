use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect, Select,
};

use crate::entities::{past_videos, prelude::*, video_distribution};
use crate::models::VideoRow;

pub struct VideoRepository {
    conn: DatabaseConnection,
}

impl VideoRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_service(&self, service_id: &str) -> Result<Vec<VideoRow>, DbErr> {
        video_columns()
            .filter(past_videos::Column::ServiceId.eq(service_id))
            .into_model::<VideoRow>()
            .all(&self.conn)
            .await
    }

    pub async fn ids_by_group(&self, group_id: &str) -> Result<Vec<String>, DbErr> {
        VideoDistribution::find()
            .select_only()
            .column(video_distribution::Column::VideoId)
            .filter(video_distribution::Column::GroupId.eq(group_id))
            .into_tuple::<String>()
            .all(&self.conn)
            .await
    }

    /// Ids with no matching video are skipped.
    pub async fn list_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoRow>, DbErr> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        videos_by_ids_query(video_ids)
            .into_model::<VideoRow>()
            .all(&self.conn)
            .await
    }
}

fn video_columns() -> Select<PastVideos> {
    PastVideos::find().select_only().columns([
        past_videos::Column::VideoId,
        past_videos::Column::VideoTitle,
        past_videos::Column::VideoLink,
        past_videos::Column::Attachment1Link,
        past_videos::Column::Attachment2Link,
        past_videos::Column::Attachment3Link,
        past_videos::Column::Attachment4Link,
        past_videos::Column::Attachment5Link,
        past_videos::Column::CreatedAt,
        past_videos::Column::LastUpdated,
    ])
}

/// One bound placeholder per id.
pub(crate) fn videos_by_ids_query(video_ids: &[String]) -> Select<PastVideos> {
    video_columns().filter(past_videos::Column::VideoId.is_in(video_ids.iter().cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn in_list_binds_one_placeholder_per_id() {
        let ids = vec!["v1".to_string(), "v2".to_string(), "v3".to_string()];
        let statement = videos_by_ids_query(&ids).build(DbBackend::MySql);

        assert!(statement.sql.contains("IN (?, ?, ?)"), "{}", statement.sql);
        assert_eq!(statement.values.map(|v| v.0.len()), Some(3));
        assert!(!statement.sql.contains("v1"));
    }
}
