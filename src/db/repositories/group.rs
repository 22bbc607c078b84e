use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};

use crate::entities::{group_members, group_names, prelude::*, users};
use crate::models::GroupMemberRow;

pub struct GroupRepository {
    conn: DatabaseConnection,
}

impl GroupRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The other members of every group in `service_id` that `user_id` belongs to.
    pub async fn members_excluding_self(
        &self,
        service_id: &str,
        user_id: &str,
    ) -> Result<Vec<GroupMemberRow>, DbErr> {
        members_excluding_self_query(service_id, user_id)
            .into_model::<GroupMemberRow>()
            .all(&self.conn)
            .await
    }
}

pub(crate) fn members_excluding_self_query(
    service_id: &str,
    user_id: &str,
) -> Select<GroupMembers> {
    let own_groups = Query::select()
        .column(group_members::Column::GroupId)
        .from(GroupMembers)
        .and_where(Expr::col(group_members::Column::UserId).eq(user_id))
        .to_owned();

    GroupMembers::find()
        .select_only()
        .column_as(group_names::Column::GroupId, "group_id")
        .column_as(group_names::Column::GroupName, "group_name")
        .column_as(users::Column::LastName, "last_name")
        .column_as(users::Column::FirstName, "first_name")
        .join(JoinType::InnerJoin, group_members::Relation::GroupNames.def())
        .join(JoinType::InnerJoin, group_members::Relation::Users.def())
        .filter(group_names::Column::ServiceId.eq(service_id))
        .filter(group_members::Column::UserId.ne(user_id))
        .filter(group_members::Column::GroupId.in_subquery(own_groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn binds_user_twice_and_service_once() {
        let statement = members_excluding_self_query("svc", "u1").build(DbBackend::MySql);
        let values = statement.values.expect("statement should be parameterized").0;

        assert_eq!(values.len(), 3);
        assert!(!statement.sql.contains("u1"));
        assert!(!statement.sql.contains("svc"));
        assert!(statement.sql.contains("IN (SELECT"));
    }
}
