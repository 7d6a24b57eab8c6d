use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Credentials of the administrator created on startup if it doesn't exist yet
pub struct AdminCredentials {
    pub uid: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let admin = match (lookup("ADMIN_UID"), lookup("ADMIN_PASSWORD")) {
            (Some(uid), Some(password)) => Some(AdminCredentials { uid, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "ADMIN_UID".to_string(),
                    reason: "ADMIN_PASSWORD must be set as well".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "ADMIN_PASSWORD".to_string(),
                    reason: "ADMIN_UID must be set as well".to_string(),
                })
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            admin,
        })
    }
}
