//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for capbond
#[derive(Error, Debug)]
pub enum Error {
    /// A `require` lookup found nothing bonded under a category
    #[error("Provider not bonded for capability '{category}'")]
    NotBound {
        /// The capability category that was missing
        category: String,
    },

    /// A `require` lookup found nothing bonded under a (category, name) pair
    #[error("Provider not bonded for capability '{category}' (name '{name}')")]
    NotBoundNamed {
        /// The capability category that was missing
        category: String,
        /// The binding name that was missing within the category
        name: String,
    },

    /// A capability wrapper was used before its provider was configured
    ///
    /// The message is capability-specific and part of the public contract
    /// ("Database pool not configured. Call set_pool() first.").
    #[error("{message}")]
    NotConfigured {
        /// The capability-specific, human-readable message
        message: String,
    },

    /// A bonded provider exists but lacks an optional capability method
    #[error("{message}")]
    Unsupported {
        /// Description of the unsupported operation
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error raised inside a concrete provider implementation
    #[error("Provider error: {message}")]
    Provider {
        /// Description of the provider error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Registry error creation methods
impl Error {
    /// Create a not-bound error for a singleton lookup
    pub fn not_bound<S: Into<String>>(category: S) -> Self {
        Self::NotBound {
            category: category.into(),
        }
    }

    /// Create a not-bound error for a named lookup
    pub fn not_bound_named<C: Into<String>, N: Into<String>>(category: C, name: N) -> Self {
        Self::NotBoundNamed {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Returns true for either form of the not-bound error
    pub fn is_not_bound(&self) -> bool {
        matches!(self, Self::NotBound { .. } | Self::NotBoundNamed { .. })
    }
}

// Capability wrapper error creation methods
impl Error {
    /// Create a capability-specific not-configured error
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    /// Create an unsupported-optional-capability error
    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Provider error creation methods
impl Error {
    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider error with source
    pub fn provider_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_bound_messages_carry_category_and_name() {
        let singleton = Error::not_bound("database");
        assert_eq!(
            singleton.to_string(),
            "Provider not bonded for capability 'database'"
        );

        let named = Error::not_bound_named("oauth", "google");
        assert_eq!(
            named.to_string(),
            "Provider not bonded for capability 'oauth' (name 'google')"
        );

        assert!(singleton.is_not_bound());
        assert!(named.is_not_bound());
        assert!(!Error::not_configured("x").is_not_bound());
    }

    #[test]
    fn not_configured_message_is_verbatim() {
        let err = Error::not_configured("Database pool not configured. Call set_pool() first.");
        assert_eq!(
            err.to_string(),
            "Database pool not configured. Call set_pool() first."
        );
    }
}
