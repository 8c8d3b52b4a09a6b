use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLog::Id))
                    .col(string(ActivityLog::Action))
                    .col(text(ActivityLog::Details))
                    .col(string(ActivityLog::Actor))
                    .col(
                        timestamp(ActivityLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    Action,
    Details,
    Actor,
    CreatedAt,
}
