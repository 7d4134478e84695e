//! JWT issuer settings.
//!
//! # Invariants
//! - A validated `AuthSettings` has a non-empty key, issuer, and audience,
//!   and a strictly positive expiry.
//! - The signing key never appears in `Debug` output.
//!
//! Instances are immutable once built; there are no setters.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use super::{AuthError, SettingsField};

const REDACTED: &str = "<redacted>";

/// Configuration consumed by a token issuer.
///
/// Field names follow the `JwtSettings` section of a settings document
/// (`Key`, `Issuer`, `Audience`, `ExpiryInMinutes`). Missing fields take
/// their zero value and are caught by [`AuthSettings::validate`].
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthSettings {
    key: String,
    issuer: String,
    audience: String,
    expiry_in_minutes: i32,
}

impl AuthSettings {
    /// Builds settings from raw values. Does not validate.
    pub fn new(
        key: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_in_minutes: i32,
    ) -> Self {
        Self {
            key: key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expiry_in_minutes,
        }
    }

    /// Check every field, in declaration order.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidConfig` naming the first field that is
    /// empty (or whitespace only) or, for the expiry, not strictly positive.
    pub fn validate(&self) -> Result<(), AuthError> {
        let text_fields = [
            (SettingsField::Key, &self.key),
            (SettingsField::Issuer, &self.issuer),
            (SettingsField::Audience, &self.audience),
        ];
        if let Some((field, _)) = text_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AuthError::InvalidConfig(*field));
        }
        if self.expiry_in_minutes <= 0 {
            return Err(AuthError::InvalidConfig(SettingsField::ExpiryInMinutes));
        }
        Ok(())
    }

    /// The signing key. Callers must not log it.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn expiry_in_minutes(&self) -> i32 {
        self.expiry_in_minutes
    }

    /// Lifetime window of an issued token.
    pub fn token_lifetime(&self) -> Duration {
        Duration::minutes(i64::from(self.expiry_in_minutes))
    }

    /// Expiry instant (`exp` claim) for a token issued at `issued_at`.
    ///
    /// `None` if the instant falls past the representable date range.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        issued_at.checked_add_signed(self.token_lifetime())
    }

    pub(crate) fn with_key(mut self, key: String) -> Self {
        self.key = key;
        self
    }

    pub(crate) fn with_issuer(mut self, issuer: String) -> Self {
        self.issuer = issuer;
        self
    }

    pub(crate) fn with_audience(mut self, audience: String) -> Self {
        self.audience = audience;
        self
    }

    pub(crate) fn with_expiry_in_minutes(mut self, minutes: i32) -> Self {
        self.expiry_in_minutes = minutes;
        self
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("key", &REDACTED)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry_in_minutes", &self.expiry_in_minutes)
            .finish()
    }
}
