//! URL helpers for frontend-server communication

/// Build a full URL from the configured base and a path.
///
/// An empty base means same origin, so the path is used as is.
///
/// # Example
/// ```rust
/// # use inventory_frontend::shared::api_utils::api_url;
/// let url = api_url("http://localhost:5000/", "/buy");
/// assert_eq!(url, "http://localhost:5000/buy");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
