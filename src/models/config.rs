//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the backend-facing tools.
pub struct AppConfig {
    /// Base URL of the studio REST backend, e.g. `http://localhost:3000/api`.
    pub api_base_url: String,
    /// Optional bearer token attached to every request.
    pub api_token: Option<String>,
}
