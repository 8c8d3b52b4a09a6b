use sea_orm::entity::prelude::*;

/// Administrative role assigned to a staff account.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum AdminRole {
    #[sea_orm(string_value = "DEAN")]
    Dean,
    #[sea_orm(string_value = "ASSISTANT_REGISTRAR")]
    AssistantRegistrar,
    #[sea_orm(string_value = "VICE_CHANCELLOR")]
    ViceChancellor,
    #[sea_orm(string_value = "PREMISES_OFFICER")]
    PremisesOfficer,
    #[sea_orm(string_value = "STUDENT_SERVICE")]
    StudentService,
}

/// Lifecycle status of a registered society.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SocietyStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

/// Review stage for society registrations and renewals.
///
/// Requests move Dean -> Assistant Registrar -> Vice Chancellor; `Approved`
/// and `Rejected` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum ApprovalStage {
    #[sea_orm(string_value = "PENDING_DEAN")]
    PendingDean,
    #[sea_orm(string_value = "PENDING_AR")]
    PendingAr,
    #[sea_orm(string_value = "PENDING_VC")]
    PendingVc,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

/// Review stage for event-permission requests.
///
/// The premises stage only applies to events held inside university premises;
/// outside events route straight from the dean to the assistant registrar.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum EventStage {
    #[sea_orm(string_value = "PENDING_DEAN")]
    PendingDean,
    #[sea_orm(string_value = "PENDING_PREMISES")]
    PendingPremises,
    #[sea_orm(string_value = "PENDING_AR")]
    PendingAr,
    #[sea_orm(string_value = "PENDING_VC")]
    PendingVc,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}
