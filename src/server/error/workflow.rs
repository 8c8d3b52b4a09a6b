use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Approval workflow rule violations.
///
/// These are caller-visible errors; the message text is returned to the
/// client as-is.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The request already reached `Approved` or `Rejected`.
    #[error("Request has already been decided")]
    AlreadyDecided,

    /// The request's current stage is not reviewed by the acting admin's role.
    #[error("Request is not awaiting your review")]
    StageMismatch,

    /// The acting admin's role never reviews this kind of request.
    #[error("Your role does not review these requests")]
    RoleNotReviewer,

    /// A dean may only review requests from their own faculty.
    #[error("Request belongs to a different faculty")]
    FacultyMismatch,

    /// Rejections must carry an explanatory comment.
    #[error("A comment is required when rejecting a request")]
    CommentRequired,

    /// The named society does not exist.
    #[error("Society '{0}' is not registered")]
    UnknownSociety(String),

    /// The named society exists but is not currently active.
    #[error("Society '{0}' is not active")]
    SocietyInactive(String),

    /// An active society with this name already exists.
    #[error("An active society named '{0}' already exists")]
    DuplicateSociety(String),

    /// Events cannot be requested for dates in the past.
    #[error("Event date cannot be in the past")]
    EventDateInPast,
}

/// Maps workflow violations onto HTTP status codes.
///
/// # Returns
/// - 400 Bad Request - Invalid submissions (unknown/inactive society, past
///   event date, missing rejection comment)
/// - 403 Forbidden - Role or faculty mismatches
/// - 409 Conflict - Acting on decided requests or duplicate societies
impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyDecided | Self::StageMismatch | Self::DuplicateSociety(_) => {
                StatusCode::CONFLICT
            }
            Self::RoleNotReviewer | Self::FacultyMismatch => StatusCode::FORBIDDEN,
            Self::CommentRequired
            | Self::UnknownSociety(_)
            | Self::SocietyInactive(_)
            | Self::EventDateInPast => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
