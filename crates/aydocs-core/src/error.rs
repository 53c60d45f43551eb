//! Error types for the AY docs core library.

#[cfg(feature = "fs")]
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for loading site settings.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Why `aydocs.toml` could not be turned into a [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum CoreError {
    /// A setting is present but unusable.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// The document is not TOML of the expected shape.
    #[error("cannot parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[cfg(feature = "fs")]
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// File and environment layers could not be merged.
    #[cfg(feature = "fs")]
    #[error("cannot merge configuration sources: {0}")]
    Layered(#[from] config::ConfigError),
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSetting(message.into())
    }

    pub(crate) fn parse(origin: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }
}

/// Errors raised while building a section registry or driving the page.
///
/// None of these are fatal to a page: registry errors replace the page body
/// with a notice, anchor errors only skip the scroll.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A registry was declared without sections.
    #[error("section registry is empty")]
    EmptyRegistry,

    /// Two sections on the same page share an id.
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),

    /// A section id is blank.
    #[error("section at position {0} has an empty id")]
    EmptySectionId(usize),

    /// No anchor element exists for the section.
    #[error("no anchor element for section `{0}`")]
    MissingAnchor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_error_messages_name_the_section() {
        assert_eq!(
            NavError::DuplicateSection("math".to_string()).to_string(),
            "duplicate section id `math`"
        );
        assert_eq!(
            NavError::MissingAnchor("timers".to_string()).to_string(),
            "no anchor element for section `timers`"
        );
        assert_eq!(
            NavError::EmptySectionId(2).to_string(),
            "section at position 2 has an empty id"
        );
    }

    #[test]
    fn test_parse_error_keeps_toml_source() {
        let source = toml::from_str::<toml::Table>("[site").unwrap_err();
        let err = CoreError::parse("aydocs.toml", source);

        assert!(err.to_string().starts_with("cannot parse aydocs.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_setting_message() {
        let err = CoreError::invalid("site.title cannot be empty");
        assert_eq!(err.to_string(), "invalid setting: site.title cannot be empty");
    }
}
