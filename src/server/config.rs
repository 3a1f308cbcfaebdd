use crate::server::error::config::ConfigError;

/// Server configuration read from the process environment.
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is present and non-empty
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `DATABASE_URL` is set but empty
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    let value = std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;

    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value must not be empty".to_string(),
        });
    }

    Ok(value)
}
