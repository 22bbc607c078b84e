use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    pub last_name: String,

    pub first_name: String,

    pub last_name_kana: String,

    pub first_name_kana: String,

    #[sea_orm(unique)]
    pub email: String,

    pub phone_number: String,

    /// Argon2id hash, or a legacy bcrypt hash for accounts created before the switch
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_members::Entity")]
    GroupMembers,
    #[sea_orm(has_many = "super::user_registrations::Entity")]
    UserRegistrations,
}

impl Related<super::group_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMembers.def()
    }
}

impl Related<super::user_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
