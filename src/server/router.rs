use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{admin, auth, event, registration, renewal, society, validation},
    state::AppState,
};

/// OpenAPI document for the public and admin API, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(paths(
    society::get_societies,
    society::get_society,
    society::get_active_societies,
    society::get_statistics,
    registration::submit_registration,
    registration::get_registration,
    registration::get_registrations,
    registration::approve_registration,
    registration::reject_registration,
    renewal::submit_renewal,
    renewal::get_renewal,
    renewal::get_latest_data,
    renewal::get_renewals,
    renewal::approve_renewal,
    renewal::reject_renewal,
    event::request_permission,
    event::get_event,
    event::get_upcoming_events,
    event::validate_applicant,
    event::get_events,
    event::approve_event,
    event::reject_event,
    validation::validate_email,
    validation::validate_mobile,
    validation::validate_registration_number,
    validation::validate_bulk_emails,
))]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Public directory and submissions
        .route("/api/societies/public", get(society::get_societies))
        .route("/api/societies/public/{id}", get(society::get_society))
        .route("/api/societies/active", get(society::get_active_societies))
        .route("/api/societies/statistics", get(society::get_statistics))
        .route(
            "/api/societies/register",
            post(registration::submit_registration),
        )
        .route("/api/societies/renew", post(renewal::submit_renewal))
        .route(
            "/api/registrations/{id}",
            get(registration::get_registration),
        )
        .route("/api/renewals/latest-data", get(renewal::get_latest_data))
        .route("/api/renewals/{id}", get(renewal::get_renewal))
        .route("/api/events/request", post(event::request_permission))
        .route(
            "/api/events/public/upcoming",
            get(event::get_upcoming_events),
        )
        .route(
            "/api/events/validate-applicant",
            post(event::validate_applicant),
        )
        .route("/api/events/{id}", get(event::get_event))
        // Field validation
        .route("/api/validation/email", post(validation::validate_email))
        .route("/api/validation/mobile", post(validation::validate_mobile))
        .route(
            "/api/validation/registration-number",
            post(validation::validate_registration_number),
        )
        .route(
            "/api/validation/bulk-emails",
            post(validation::validate_bulk_emails),
        )
        // Admin
        .route("/api/admin/dashboard", get(admin::get_dashboard))
        .route(
            "/api/admin/pending-approvals",
            get(admin::get_pending_approvals),
        )
        .route("/api/admin/activity-logs", get(admin::get_activity_logs))
        .route("/api/admin/send-email", post(admin::send_bulk_email))
        .route(
            "/api/admin/registrations",
            get(registration::get_registrations),
        )
        .route(
            "/api/admin/registrations/{id}/approve",
            post(registration::approve_registration),
        )
        .route(
            "/api/admin/registrations/{id}/reject",
            post(registration::reject_registration),
        )
        .route("/api/admin/renewals", get(renewal::get_renewals))
        .route(
            "/api/admin/renewals/{id}/approve",
            post(renewal::approve_renewal),
        )
        .route(
            "/api/admin/renewals/{id}/reject",
            post(renewal::reject_renewal),
        )
        .route("/api/admin/events", get(event::get_events))
        .route("/api/admin/events/{id}/approve", post(event::approve_event))
        .route("/api/admin/events/{id}/reject", post(event::reject_event))
        .route(
            "/api/admin/users",
            get(admin::get_admin_users)
                .post(admin::add_admin_user)
                .delete(admin::remove_admin_user),
        )
        .route(
            "/api/admin/users/{id}/toggle-active",
            post(admin::toggle_admin_user),
        )
}
