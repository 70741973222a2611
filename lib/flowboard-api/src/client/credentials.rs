use std::fmt;
use std::sync::Arc;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secure wrapper for sensitive string data that zeroes its memory on drop.
///
/// Credential values pass through logs and debug output frequently enough that
/// they are masked everywhere: `Debug` prints `[REDACTED]`, `Display` keeps at
/// most the first and last four characters.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masks sensitive data for display purposes.
    ///
    /// Counts characters rather than bytes, so multi-byte tokens never split
    /// mid-character.
    fn mask_sensitive(value: &str) -> String {
        let count = value.chars().count();
        if count <= 8 {
            "***".to_string()
        } else {
            let prefix: String = value.chars().take(4).collect();
            let suffix: String = value.chars().skip(count - 4).collect();
            format!("{prefix}...{suffix}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// A named source of authentication material.
///
/// Sources are registered on the [`Configuration`](super::Configuration) under
/// their credential scheme name and resolved synchronously before every
/// request. Providers must be side-effect-free and fast; they are invoked once
/// per request, which is what makes just-in-time token refresh work.
#[derive(Clone)]
pub enum CredentialSource {
    /// A literal credential value.
    Static(SecureString),
    /// A zero-argument provider invoked at request time.
    Provider(Arc<dyn Fn() -> Option<String> + Send + Sync>),
}

impl CredentialSource {
    /// Builds a static source from a literal value.
    pub fn from_value(value: impl Into<SecureString>) -> Self {
        Self::Static(value.into())
    }

    /// Builds a provider-backed source from a closure.
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self::Provider(Arc::new(provider))
    }

    /// Resolves the source to a credential value, invoking providers.
    ///
    /// Returns `None` when a provider has no value to offer (for example, no
    /// token has been acquired yet).
    pub fn resolve(&self) -> Option<String> {
        match self {
            Self::Static(value) => Some(value.as_str().to_string()),
            Self::Provider(provider) => provider(),
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => formatter.debug_tuple("Static").field(&"[REDACTED]").finish(),
            Self::Provider(_) => formatter.debug_tuple("Provider").field(&"<fn>").finish(),
        }
    }
}

impl From<&str> for CredentialSource {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}

impl From<String> for CredentialSource {
    fn from(value: String) -> Self {
        Self::from_value(value)
    }
}
