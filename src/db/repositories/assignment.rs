use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
    Select,
};

use crate::entities::{assignments, prelude::*};
use crate::models::{AssignmentRow, DeadlineFilter};

pub struct AssignmentRepository {
    conn: DatabaseConnection,
}

impl AssignmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_group(
        &self,
        group_id: &str,
        filter: DeadlineFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<AssignmentRow>, DbErr> {
        assignments_query(group_id, filter, now)
            .into_model::<AssignmentRow>()
            .all(&self.conn)
            .await
    }
}

pub(crate) fn assignments_query(
    group_id: &str,
    filter: DeadlineFilter,
    now: DateTime<Utc>,
) -> Select<Assignments> {
    let query = Assignments::find()
        .select_only()
        .columns([
            assignments::Column::AssignmentId,
            assignments::Column::ContentId,
            assignments::Column::AssignmentName,
            assignments::Column::Deadline,
            assignments::Column::Description,
            assignments::Column::Url,
            assignments::Column::Notes,
            assignments::Column::Required,
            assignments::Column::Duration,
        ])
        .filter(assignments::Column::GroupId.eq(group_id));

    match filter {
        DeadlineFilter::All => query,
        DeadlineFilter::Open => query.filter(
            Condition::any()
                .add(assignments::Column::Deadline.gte(now))
                .add(assignments::Column::Deadline.is_null()),
        ),
    }
}
