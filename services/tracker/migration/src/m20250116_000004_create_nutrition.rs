use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nutrition::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Nutrition::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Nutrition::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Nutrition::UserId).integer().not_null())
                    .col(ColumnDef::new(Nutrition::IntensityId).integer().not_null())
                    .col(
                        ColumnDef::new(Nutrition::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Nutrition::LastModifiedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nutrition_user")
                            .from(Nutrition::Table, Nutrition::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // Intensity rows still referenced by nutrition cannot be deleted.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nutrition_intensity")
                            .from(Nutrition::Table, Nutrition::IntensityId)
                            .to(Intensity::Table, Intensity::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Nutrition::Table)
                    .col(Nutrition::UserId)
                    .name("idx_nutrition_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Nutrition::Table)
                    .col(Nutrition::IntensityId)
                    .name("idx_nutrition_intensity_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nutrition::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Nutrition {
    Table,
    Id,
    Date,
    UserId,
    IntensityId,
    CreationDate,
    LastModifiedDate,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Intensity {
    Table,
    Id,
}
