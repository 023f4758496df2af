use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {env_var}: {reason}")]
    Invalid { env_var: String, reason: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Environment variable that sets the given settings key
pub fn to_env_var(field_path: &str) -> String {
    format!("GIGACHAT_{}", field_path.to_uppercase())
}
