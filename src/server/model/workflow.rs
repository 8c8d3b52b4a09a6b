//! Stage routing rules for the approval workflows.
//!
//! Registrations and renewals share one route: Dean -> Assistant Registrar ->
//! Vice Chancellor. Event permissions insert a Premises Officer stage after the
//! dean when the event is held inside university premises. These functions are
//! the single source of truth for which role reviews which stage and what the
//! next stage is; the services layer applies them.

use entity::sea_orm_active_enums::{AdminRole, ApprovalStage, EventStage};

/// The registration/renewal stage reviewed by the given role, if any.
///
/// Premises officers and student services never review registrations or
/// renewals.
pub fn approval_stage_for_role(role: &AdminRole) -> Option<ApprovalStage> {
    match role {
        AdminRole::Dean => Some(ApprovalStage::PendingDean),
        AdminRole::AssistantRegistrar => Some(ApprovalStage::PendingAr),
        AdminRole::ViceChancellor => Some(ApprovalStage::PendingVc),
        AdminRole::PremisesOfficer | AdminRole::StudentService => None,
    }
}

/// The stage a registration/renewal moves to when the current stage approves.
///
/// Returns `None` for terminal stages.
pub fn next_approval_stage(stage: &ApprovalStage) -> Option<ApprovalStage> {
    match stage {
        ApprovalStage::PendingDean => Some(ApprovalStage::PendingAr),
        ApprovalStage::PendingAr => Some(ApprovalStage::PendingVc),
        ApprovalStage::PendingVc => Some(ApprovalStage::Approved),
        ApprovalStage::Approved | ApprovalStage::Rejected => None,
    }
}

pub fn is_approval_terminal(stage: &ApprovalStage) -> bool {
    matches!(stage, ApprovalStage::Approved | ApprovalStage::Rejected)
}

/// The event-permission stage reviewed by the given role, if any.
pub fn event_stage_for_role(role: &AdminRole) -> Option<EventStage> {
    match role {
        AdminRole::Dean => Some(EventStage::PendingDean),
        AdminRole::PremisesOfficer => Some(EventStage::PendingPremises),
        AdminRole::AssistantRegistrar => Some(EventStage::PendingAr),
        AdminRole::ViceChancellor => Some(EventStage::PendingVc),
        AdminRole::StudentService => None,
    }
}

/// The stage an event permission moves to when the current stage approves.
///
/// The premises stage is only entered for inside-university events; outside
/// events route from the dean straight to the assistant registrar. Returns
/// `None` for terminal stages.
pub fn next_event_stage(stage: &EventStage, inside_university: bool) -> Option<EventStage> {
    match stage {
        EventStage::PendingDean if inside_university => Some(EventStage::PendingPremises),
        EventStage::PendingDean => Some(EventStage::PendingAr),
        EventStage::PendingPremises => Some(EventStage::PendingAr),
        EventStage::PendingAr => Some(EventStage::PendingVc),
        EventStage::PendingVc => Some(EventStage::Approved),
        EventStage::Approved | EventStage::Rejected => None,
    }
}

pub fn is_event_terminal(stage: &EventStage) -> bool {
    matches!(stage, EventStage::Approved | EventStage::Rejected)
}
