use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocietyRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(SocietyRegistration::Id))
                    .col(string(SocietyRegistration::SocietyName))
                    .col(text(SocietyRegistration::Aims))
                    .col(string(SocietyRegistration::ApplicantFullName))
                    .col(string(SocietyRegistration::ApplicantRegNo))
                    .col(string(SocietyRegistration::ApplicantEmail))
                    .col(string(SocietyRegistration::ApplicantFaculty))
                    .col(string(SocietyRegistration::ApplicantMobile))
                    .col(date_null(SocietyRegistration::AgmDate))
                    .col(string(SocietyRegistration::BankName))
                    .col(string(SocietyRegistration::BankAccount))
                    .col(json(SocietyRegistration::SeniorTreasurer))
                    .col(json(SocietyRegistration::OfficeBearers))
                    .col(json(SocietyRegistration::AdvisoryBoard))
                    .col(json(SocietyRegistration::CommitteeMembers))
                    .col(json(SocietyRegistration::Members))
                    .col(json(SocietyRegistration::PlannedEvents))
                    .col(integer(SocietyRegistration::Year))
                    .col(string(SocietyRegistration::Stage))
                    .col(string_null(SocietyRegistration::DeanComment))
                    .col(string_null(SocietyRegistration::ArComment))
                    .col(string_null(SocietyRegistration::VcComment))
                    .col(timestamp_null(SocietyRegistration::DecidedAt))
                    .col(
                        timestamp(SocietyRegistration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocietyRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocietyRegistration {
    Table,
    Id,
    SocietyName,
    Aims,
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
    Year,
    Stage,
    DeanComment,
    ArComment,
    VcComment,
    DecidedAt,
    CreatedAt,
}
