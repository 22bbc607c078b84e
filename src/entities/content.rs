use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Content")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub content_id: String,

    pub service_id: String,

    pub content_name: String,

    pub content_url: Option<String>,

    pub category: Option<String>,

    /// Length in seconds
    pub duration: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
