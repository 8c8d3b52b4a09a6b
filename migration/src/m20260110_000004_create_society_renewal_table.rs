use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocietyRenewal::Table)
                    .if_not_exists()
                    .col(pk_auto(SocietyRenewal::Id))
                    .col(string(SocietyRenewal::SocietyName))
                    .col(string(SocietyRenewal::ApplicantFullName))
                    .col(string(SocietyRenewal::ApplicantRegNo))
                    .col(string(SocietyRenewal::ApplicantEmail))
                    .col(string(SocietyRenewal::ApplicantFaculty))
                    .col(string(SocietyRenewal::ApplicantMobile))
                    .col(date_null(SocietyRenewal::AgmDate))
                    .col(string(SocietyRenewal::BankName))
                    .col(string(SocietyRenewal::BankAccount))
                    .col(json(SocietyRenewal::SeniorTreasurer))
                    .col(json(SocietyRenewal::OfficeBearers))
                    .col(json(SocietyRenewal::AdvisoryBoard))
                    .col(json(SocietyRenewal::CommitteeMembers))
                    .col(json(SocietyRenewal::Members))
                    .col(json(SocietyRenewal::PlannedEvents))
                    .col(json(SocietyRenewal::PreviousActivities))
                    .col(text_null(SocietyRenewal::Difficulties))
                    .col(string_null(SocietyRenewal::Website))
                    .col(integer(SocietyRenewal::Year))
                    .col(string(SocietyRenewal::Stage))
                    .col(string_null(SocietyRenewal::DeanComment))
                    .col(string_null(SocietyRenewal::ArComment))
                    .col(string_null(SocietyRenewal::VcComment))
                    .col(timestamp_null(SocietyRenewal::DecidedAt))
                    .col(
                        timestamp(SocietyRenewal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocietyRenewal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocietyRenewal {
    Table,
    Id,
    SocietyName,
    ApplicantFullName,
    ApplicantRegNo,
    ApplicantEmail,
    ApplicantFaculty,
    ApplicantMobile,
    AgmDate,
    BankName,
    BankAccount,
    SeniorTreasurer,
    OfficeBearers,
    AdvisoryBoard,
    CommitteeMembers,
    Members,
    PlannedEvents,
    PreviousActivities,
    Difficulties,
    Website,
    Year,
    Stage,
    DeanComment,
    ArComment,
    VcComment,
    DecidedAt,
    CreatedAt,
}
