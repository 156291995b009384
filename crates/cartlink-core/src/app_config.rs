#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the cart-link builder.
///
/// The HTTP knobs are optional on purpose: when unset, the product fetch is a
/// plain GET with the client's default timeout and no `User-Agent` header.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Overall per-request timeout in seconds. `None` keeps the client default.
    pub request_timeout_secs: Option<u64>,
    /// `User-Agent` header sent with product fetches. `None` sends no header.
    pub user_agent: Option<String>,
}
