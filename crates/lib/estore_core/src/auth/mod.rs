//! Authentication settings.
//!
//! Holds the configuration a token issuer needs (signing key, issuer,
//! audience, token lifetime), how it is loaded, and how it is validated.
//! Token signing itself lives outside this crate.

pub mod loader;
pub mod settings;

use thiserror::Error;

pub use settings::AuthSettings;

/// Identifies one field of [`AuthSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Key,
    Issuer,
    Audience,
    ExpiryInMinutes,
}

impl SettingsField {
    /// Name as it appears in settings documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsField::Key => "Key",
            SettingsField::Issuer => "Issuer",
            SettingsField::Audience => "Audience",
            SettingsField::ExpiryInMinutes => "ExpiryInMinutes",
        }
    }
}

impl std::fmt::Display for SettingsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication settings errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid config: {0} is missing or out of range")]
    InvalidConfig(SettingsField),

    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_field() {
        let err = AuthError::InvalidConfig(SettingsField::ExpiryInMinutes);
        assert_eq!(
            err.to_string(),
            "Invalid config: ExpiryInMinutes is missing or out of range"
        );
    }
}
