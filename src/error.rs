use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpwatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),
}

impl UpwatchError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            UpwatchError::SiteNotFound(_) => Some(
                "Run `upwatch list` to see monitored sites and their ids"
            ),
            UpwatchError::TomlError(_) | UpwatchError::ConfigError(_) => Some(
                "Check your configuration with `upwatch config --path`\nOr remove the file to fall back to defaults"
            ),
            UpwatchError::IoError(_) => Some(
                "Check file permissions for the upwatch config and data directories"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UpwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_not_found_has_hint() {
        let err = UpwatchError::SiteNotFound("abc".into());
        assert_eq!(err.to_string(), "Site not found: abc");
        assert!(err.hint().unwrap().contains("upwatch list"));
    }

    #[test]
    fn test_json_error_has_no_hint() {
        let err: UpwatchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.hint().is_none());
    }
}
