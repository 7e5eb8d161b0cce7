use crate::settings::Settings;

/// Local development frontends allowed when `BACKEND_CORS_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Splits a comma-separated origin list.
///
/// Every comma starts a new entry and each entry is trimmed. Empty entries,
/// duplicates and ordering are kept as given.
///
/// ```
/// use claynova_config::parse_origins;
///
/// assert_eq!(parse_origins("https://a.com,"), ["https://a.com", ""]);
/// ```
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

impl Settings {
    /// Returns whether `origin` exactly matches one of the allowed origins.
    ///
    /// The comparison is case-sensitive. An empty origin is never allowed.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        !origin.is_empty() && self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
