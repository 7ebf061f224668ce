//! Bearer credential resolution.

/// Environment variable consulted by default.
pub const DEFAULT_TOKEN_ENV: &str = "HUGGINGFACE_API_TOKEN";

/// Where the inference bearer token comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Read from this environment variable on every request
    FromEnv(String),
    /// A fixed token
    Fixed(String),
}

impl Default for Credential {
    fn default() -> Self {
        Credential::FromEnv(DEFAULT_TOKEN_ENV.to_string())
    }
}

impl Credential {
    /// Current token value, or `None` if unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let token = match self {
            Credential::FromEnv(var) => std::env::var(var).ok()?,
            Credential::Fixed(token) => token.clone(),
        };
        if token.trim().is_empty() {
            None
        } else {
            Some(token)
        }
    }
}
