use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "EventCalendar")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,

    pub service_id: String,

    pub title: String,

    pub event_datetime: DateTimeUtc,

    pub location: Option<String>,

    pub description: Option<String>,

    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
