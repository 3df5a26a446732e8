//! Commonly used constants

/// Prefix of environment variables overriding file based configuration
pub const ENV_PREFIX: &str = "ECOMM";

/// Environment variable selecting the runtime environment
pub const RUN_ENV: &str = "RUN_ENV";

/// Content type of every request sent to the merchant handler
pub const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    /// Reads the environment from [`RUN_ENV`], falling back to development.
    pub fn current_env() -> Self {
        std::env::var(RUN_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}
