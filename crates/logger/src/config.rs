//! Logger configuration and construction-time validation.

use thiserror::Error;

/// Construction-time configuration errors.
///
/// These are fatal: a logger is never built from incomplete configuration,
/// and no retry applies.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing required parameter `identifier`")]
    MissingIdentifier,

    #[error("missing required file name prefix")]
    MissingFilePrefix,

    #[error("missing required file extension")]
    MissingFileExtension,
}

/// The two halves of the log file naming template.
///
/// The resolved file name is `prefix + identifier + extension`; the
/// conventional default is `log_event_` / `.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub prefix: String,
    pub extension: String,
}

impl FileMeta {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Both halves of the template must be present and non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::MissingFilePrefix);
        }
        if self.extension.is_empty() {
            return Err(ConfigError::MissingFileExtension);
        }
        Ok(())
    }
}

/// Validated logger configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    identifier: String,
    file_meta: FileMeta,
}

impl LoggerConfig {
    /// Validate and freeze the configuration.
    pub fn new(identifier: impl Into<String>, file_meta: FileMeta) -> Result<Self, ConfigError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ConfigError::MissingIdentifier);
        }
        file_meta.validate()?;
        Ok(Self {
            identifier,
            file_meta,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The canonical log file name: `prefix + identifier + extension`.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}{}",
            self.file_meta.prefix, self.identifier, self.file_meta.extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_exact_concatenation() {
        let config =
            LoggerConfig::new("abc123", FileMeta::new("log_event_", ".json")).unwrap();
        assert_eq!(config.file_name(), "log_event_abc123.json");
        assert_eq!(config.identifier(), "abc123");
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let err = LoggerConfig::new("", FileMeta::new("log_event_", ".json")).unwrap_err();
        assert_eq!(err, ConfigError::MissingIdentifier);
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        let err = LoggerConfig::new("abc123", FileMeta::new("", ".json")).unwrap_err();
        assert_eq!(err, ConfigError::MissingFilePrefix);
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let err = LoggerConfig::new("abc123", FileMeta::new("log_event_", "")).unwrap_err();
        assert_eq!(err, ConfigError::MissingFileExtension);
    }
}
