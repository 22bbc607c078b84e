use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create_table_for<E>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

async fn drop_table_for<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Referenced tables first; MySQL rejects forward foreign keys.
        create_table_for(manager, &schema, Services).await?;
        create_table_for(manager, &schema, Users).await?;
        create_table_for(manager, &schema, Status).await?;
        create_table_for(manager, &schema, UserRegistrations).await?;
        create_table_for(manager, &schema, Content).await?;
        create_table_for(manager, &schema, GroupNames).await?;
        create_table_for(manager, &schema, GroupMembers).await?;
        create_table_for(manager, &schema, PastVideos).await?;
        create_table_for(manager, &schema, VideoDistribution).await?;
        create_table_for(manager, &schema, Assignments).await?;
        create_table_for(manager, &schema, EventCalendar).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_for(manager, EventCalendar).await?;
        drop_table_for(manager, Assignments).await?;
        drop_table_for(manager, VideoDistribution).await?;
        drop_table_for(manager, PastVideos).await?;
        drop_table_for(manager, GroupMembers).await?;
        drop_table_for(manager, GroupNames).await?;
        drop_table_for(manager, Content).await?;
        drop_table_for(manager, UserRegistrations).await?;
        drop_table_for(manager, Status).await?;
        drop_table_for(manager, Users).await?;
        drop_table_for(manager, Services).await?;

        Ok(())
    }
}
