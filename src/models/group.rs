use sea_orm::FromQueryResult;

use crate::shaping::MemberRow;

/// Membership join row: one other member of one of the caller's groups.
#[derive(Debug, Clone, FromQueryResult)]
pub struct GroupMemberRow {
    pub group_id: String,
    pub group_name: String,
    pub last_name: String,
    pub first_name: String,
}

impl From<GroupMemberRow> for MemberRow {
    fn from(row: GroupMemberRow) -> Self {
        Self {
            full_name: format!("{}{}", row.last_name, row.first_name),
            group_id: row.group_id,
            group_name: row.group_name,
        }
    }
}
