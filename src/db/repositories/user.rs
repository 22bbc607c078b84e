use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect, Set,
};

use crate::entities::{prelude::*, users};

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Only the stored hash, for credential checks.
    pub async fn get_password_hash(&self, email: &str) -> Result<Option<String>, DbErr> {
        Users::find()
            .select_only()
            .column(users::Column::PasswordHash)
            .filter(users::Column::Email.eq(email))
            .into_tuple::<String>()
            .one(&self.conn)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
    }

    pub async fn insert(&self, user: users::Model) -> Result<(), DbErr> {
        let active = users::ActiveModel {
            user_id: Set(user.user_id),
            last_name: Set(user.last_name),
            first_name: Set(user.first_name),
            last_name_kana: Set(user.last_name_kana),
            first_name_kana: Set(user.first_name_kana),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
            password_hash: Set(user.password_hash),
        };

        Users::insert(active)
            .exec_without_returning(&self.conn)
            .await?;

        Ok(())
    }
}
