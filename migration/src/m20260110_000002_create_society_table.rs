use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Society::Table)
                    .if_not_exists()
                    .col(pk_auto(Society::Id))
                    .col(string_uniq(Society::Name))
                    .col(text(Society::Aims))
                    .col(string_null(Society::Faculty))
                    .col(string(Society::Status))
                    .col(integer(Society::RegisteredYear))
                    .col(integer_null(Society::LastRenewedYear))
                    .col(string_null(Society::Website))
                    .col(
                        timestamp(Society::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Society::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Society {
    Table,
    Id,
    Name,
    Aims,
    Faculty,
    Status,
    RegisteredYear,
    LastRenewedYear,
    Website,
    CreatedAt,
}
