use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub assignment_id: String,

    pub group_id: String,

    pub content_id: String,

    pub assignment_name: String,

    /// Open-ended assignments have no deadline
    pub deadline: Option<DateTimeUtc>,

    pub description: Option<String>,

    pub url: Option<String>,

    pub notes: Option<String>,

    pub required: bool,

    pub duration: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
