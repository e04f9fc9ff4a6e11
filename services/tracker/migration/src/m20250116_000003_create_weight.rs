use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Weight::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Weight::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Weight::Weight).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Weight::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Weight::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weight_user")
                            .from(Weight::Table, Weight::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Weight::Table)
                    .col(Weight::UserId)
                    .name("idx_weight_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Weight::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Weight {
    Table,
    Id,
    Weight,
    UserId,
    CreationDate,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
