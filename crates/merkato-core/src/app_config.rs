/// Application configuration shared by the client and the CLI.
///
/// The API endpoint is the single required value; everything downstream
/// (request URLs and asset URLs alike) is derived from it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the storefront API, without a trailing slash requirement.
    pub api_endpoint: String,
    pub log_level: String,
    pub user_agent: String,
}
