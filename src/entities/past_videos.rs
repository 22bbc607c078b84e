use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "PastVideos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub video_id: String,

    pub service_id: String,

    pub video_title: String,

    pub video_link: String,

    pub attachment_1_link: Option<String>,
    pub attachment_2_link: Option<String>,
    pub attachment_3_link: Option<String>,
    pub attachment_4_link: Option<String>,
    pub attachment_5_link: Option<String>,

    pub created_at: DateTimeUtc,

    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
