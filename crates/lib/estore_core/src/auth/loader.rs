//! Settings loading: settings document → environment overrides → validation.

use std::env::VarError;
use std::path::Path;

use serde::Deserialize;

use super::{AuthError, AuthSettings};

/// Environment variable overriding `Key`.
pub const ENV_KEY: &str = "JWT_KEY";
/// Environment variable overriding `Issuer`.
pub const ENV_ISSUER: &str = "JWT_ISSUER";
/// Environment variable overriding `Audience`.
pub const ENV_AUDIENCE: &str = "JWT_AUDIENCE";
/// Environment variable overriding `ExpiryInMinutes`.
pub const ENV_EXPIRY_IN_MINUTES: &str = "JWT_EXPIRY_IN_MINUTES";

/// Settings document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, AuthError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(SettingsFormat::Json),
            Some("yaml" | "yml") => Ok(SettingsFormat::Yaml),
            _ => Err(AuthError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Top-level shape of a settings document; other sections are ignored.
#[derive(Deserialize)]
struct SettingsDocument {
    #[serde(rename = "JwtSettings")]
    jwt_settings: AuthSettings,
}

/// Parse the `JwtSettings` section out of a settings document.
pub fn parse_document(contents: &str, format: SettingsFormat) -> Result<AuthSettings, AuthError> {
    let doc: SettingsDocument = match format {
        SettingsFormat::Json => serde_json::from_str(contents)
            .map_err(|e| AuthError::Parse(format!("settings json: {e}")))?,
        SettingsFormat::Yaml => serde_yaml::from_str(contents)
            .map_err(|e| AuthError::Parse(format!("settings yaml: {e}")))?,
    };
    Ok(doc.jwt_settings)
}

/// Read and parse a settings file. Does not validate.
pub fn from_file(path: &Path) -> Result<AuthSettings, AuthError> {
    let format = SettingsFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    parse_document(&contents, format)
}

/// Read one variable; unset is `None`, a non-UTF-8 value is an error.
fn env_value<F>(lookup: &F, name: &str) -> Result<Option<String>, AuthError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(AuthError::Parse(format!("{name} is not valid unicode")))
        }
    }
}

/// Replace fields with whatever `lookup` returns for the `JWT_*` variables.
///
/// `lookup` has the shape of `std::env::var`.
pub fn apply_env_overrides<F>(settings: AuthSettings, lookup: F) -> Result<AuthSettings, AuthError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut settings = settings;
    if let Some(key) = env_value(&lookup, ENV_KEY)? {
        settings = settings.with_key(key);
    }
    if let Some(issuer) = env_value(&lookup, ENV_ISSUER)? {
        settings = settings.with_issuer(issuer);
    }
    if let Some(audience) = env_value(&lookup, ENV_AUDIENCE)? {
        settings = settings.with_audience(audience);
    }
    if let Some(raw) = env_value(&lookup, ENV_EXPIRY_IN_MINUTES)? {
        let minutes = raw.trim().parse::<i32>().map_err(|e| {
            AuthError::Parse(format!("{ENV_EXPIRY_IN_MINUTES}={raw:?}: {e}"))
        })?;
        settings = settings.with_expiry_in_minutes(minutes);
    }
    Ok(settings)
}

/// Load settings for a token issuer at startup.
///
/// Reads `.env` if present, starts from `path` (or zero values when `None`),
/// applies process environment overrides, then validates.
pub fn load(path: Option<&Path>) -> Result<AuthSettings, AuthError> {
    if let Ok(env_path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", env_path.display());
    }

    let base = match path {
        Some(p) => {
            log::debug!("Reading auth settings from {}", p.display());
            from_file(p)?
        }
        None => AuthSettings::default(),
    };

    let settings = apply_env_overrides(base, |name| std::env::var(name))?;
    settings.validate()?;

    log::info!(
        "Auth settings loaded: issuer={}, audience={}, expiry={}m",
        settings.issuer(),
        settings.audience(),
        settings.expiry_in_minutes()
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SettingsField;
    use std::collections::HashMap;

    const JSON_DOC: &str = r#"{
        "Logging": { "LogLevel": { "Default": "Information" } },
        "JwtSettings": {
            "Key": "file-key",
            "Issuer": "file-issuer",
            "Audience": "file-audience",
            "ExpiryInMinutes": 30
        }
    }"#;

    const YAML_DOC: &str = "\
JwtSettings:
  Key: yaml-key
  Issuer: yaml-issuer
  Audience: yaml-audience
  ExpiryInMinutes: 45
";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("appsettings.json")).unwrap(),
            SettingsFormat::Json
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.YML")).unwrap(),
            SettingsFormat::Yaml
        );
        assert!(matches!(
            SettingsFormat::from_path(Path::new("settings.toml")),
            Err(AuthError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SettingsFormat::from_path(Path::new("settings")),
            Err(AuthError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn parses_json_section() {
        let settings = parse_document(JSON_DOC, SettingsFormat::Json).unwrap();
        assert_eq!(
            settings,
            AuthSettings::new("file-key", "file-issuer", "file-audience", 30)
        );
    }

    #[test]
    fn parses_yaml_section() {
        let settings = parse_document(YAML_DOC, SettingsFormat::Yaml).unwrap();
        assert_eq!(settings.issuer(), "yaml-issuer");
        assert_eq!(settings.expiry_in_minutes(), 45);
    }

    #[test]
    fn missing_section_is_parse_error() {
        let result = parse_document(r#"{"Other": {}}"#, SettingsFormat::Json);
        assert!(matches!(result, Err(AuthError::Parse(_))));
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let result = parse_document("{not json", SettingsFormat::Json);
        assert!(matches!(result, Err(AuthError::Parse(_))));
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let base = parse_document(JSON_DOC, SettingsFormat::Json).unwrap();
        let settings = apply_env_overrides(
            base,
            env(&[(ENV_ISSUER, "env-issuer"), (ENV_EXPIRY_IN_MINUTES, " 90 ")]),
        )
        .unwrap();
        assert_eq!(settings.key(), "file-key");
        assert_eq!(settings.issuer(), "env-issuer");
        assert_eq!(settings.audience(), "file-audience");
        assert_eq!(settings.expiry_in_minutes(), 90);
    }

    #[test]
    fn env_alone_can_populate_everything() {
        let settings = apply_env_overrides(
            AuthSettings::default(),
            env(&[
                (ENV_KEY, "k"),
                (ENV_ISSUER, "i"),
                (ENV_AUDIENCE, "a"),
                (ENV_EXPIRY_IN_MINUTES, "5"),
            ]),
        )
        .unwrap();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn non_numeric_expiry_override_is_parse_error() {
        let result = apply_env_overrides(
            AuthSettings::default(),
            env(&[(ENV_EXPIRY_IN_MINUTES, "an hour")]),
        );
        assert!(matches!(result, Err(AuthError::Parse(_))));
    }

    #[test]
    fn expiry_override_beyond_i32_is_parse_error() {
        let result = apply_env_overrides(
            AuthSettings::default(),
            env(&[(ENV_EXPIRY_IN_MINUTES, "1000000000000")]),
        );
        assert!(matches!(result, Err(AuthError::Parse(_))));
    }

    #[test]
    fn non_unicode_override_is_reported() {
        let base = parse_document(JSON_DOC, SettingsFormat::Json).unwrap();
        let result = apply_env_overrides(base, |name: &str| {
            if name == ENV_ISSUER {
                Err(VarError::NotUnicode(std::ffi::OsString::from("issuer")))
            } else {
                Err(VarError::NotPresent)
            }
        });
        match result {
            Err(AuthError::Parse(msg)) => assert!(msg.contains(ENV_ISSUER)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn from_file_reads_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appsettings.yaml");
        std::fs::write(&path, YAML_DOC).unwrap();
        let settings = from_file(&path).unwrap();
        assert_eq!(settings.key(), "yaml-key");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AuthError::Io(_))));
    }

    #[test]
    fn zero_valued_section_fails_validation() {
        let settings =
            parse_document(r#"{"JwtSettings": {"Key": "k"}}"#, SettingsFormat::Json).unwrap();
        assert!(matches!(
            settings.validate(),
            Err(AuthError::InvalidConfig(SettingsField::Issuer))
        ));
    }
}
