use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(EventPermission::Id))
                    .col(string(EventPermission::SocietyName))
                    .col(string(EventPermission::ApplicantName))
                    .col(string(EventPermission::ApplicantRegNo))
                    .col(string(EventPermission::ApplicantEmail))
                    .col(string(EventPermission::ApplicantPosition))
                    .col(string(EventPermission::ApplicantFaculty))
                    .col(string(EventPermission::ApplicantMobile))
                    .col(string(EventPermission::EventName))
                    .col(date(EventPermission::EventDate))
                    .col(string(EventPermission::TimeFrom))
                    .col(string(EventPermission::TimeTo))
                    .col(boolean(EventPermission::FirstYearParticipation))
                    .col(string(EventPermission::Place))
                    .col(boolean(EventPermission::InsideUniversity))
                    .col(boolean(EventPermission::LatePassRequired))
                    .col(boolean(EventPermission::OutsidersInvited))
                    .col(text_null(EventPermission::OutsidersList))
                    .col(string_null(EventPermission::BudgetEstimate))
                    .col(string_null(EventPermission::FundCollectionMethods))
                    .col(string_null(EventPermission::StudentFeeAmount))
                    .col(string(EventPermission::SeniorTreasurerName))
                    .col(string(EventPermission::SeniorTreasurerDepartment))
                    .col(string(EventPermission::SeniorTreasurerMobile))
                    .col(string_null(EventPermission::PremisesOfficerName))
                    .col(string_null(EventPermission::PremisesOfficerDesignation))
                    .col(string_null(EventPermission::PremisesOfficerDivision))
                    .col(string_null(EventPermission::ReceiptNumber))
                    .col(date_null(EventPermission::PaymentDate))
                    .col(string(EventPermission::Stage))
                    .col(string_null(EventPermission::DeanComment))
                    .col(string_null(EventPermission::PremisesComment))
                    .col(string_null(EventPermission::ArComment))
                    .col(string_null(EventPermission::VcComment))
                    .col(timestamp_null(EventPermission::DecidedAt))
                    .col(
                        timestamp(EventPermission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventPermission {
    Table,
    Id,
    SocietyName,
    ApplicantName,
    ApplicantRegNo,
    ApplicantEmail,
    ApplicantPosition,
    ApplicantFaculty,
    ApplicantMobile,
    EventName,
    EventDate,
    TimeFrom,
    TimeTo,
    FirstYearParticipation,
    Place,
    InsideUniversity,
    LatePassRequired,
    OutsidersInvited,
    OutsidersList,
    BudgetEstimate,
    FundCollectionMethods,
    StudentFeeAmount,
    SeniorTreasurerName,
    SeniorTreasurerDepartment,
    SeniorTreasurerMobile,
    PremisesOfficerName,
    PremisesOfficerDesignation,
    PremisesOfficerDivision,
    ReceiptNumber,
    PaymentDate,
    Stage,
    DeanComment,
    PremisesComment,
    ArComment,
    VcComment,
    DecidedAt,
    CreatedAt,
}
