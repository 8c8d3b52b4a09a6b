//! Activity log parameter types.

/// Parameters for paginated activity log queries.
///
/// Both filters are optional substring matches, case-insensitive.
#[derive(Debug, Clone)]
pub struct GetActivityLogsParam {
    pub page: u64,
    pub per_page: u64,
    pub actor: Option<String>,
    pub action: Option<String>,
}
