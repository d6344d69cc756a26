//! Credential lookup injected into recognizers.
//!
//! Providers resolve their API keys by environment-variable name (for Groq,
//! `GROQ_API_KEY`). Lookups go through [`CredentialSource`] so recognizers can
//! be driven from the process environment, from saved settings, or from a
//! fixed map in tests without touching global state.

use std::collections::HashMap;

/// Named credential lookup
pub trait CredentialSource: Send + Sync {
    /// Value for `name`, or `None` if this source does not define it.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads credentials from the process environment.
///
/// A variable that is set but empty still counts as present; the provider
/// decides whether it is usable.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of credentials
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a credential.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticCredentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Consults several sources in order; the first one defining a name wins.
#[derive(Default)]
pub struct LayeredCredentials {
    layers: Vec<Box<dyn CredentialSource>>,
}

impl LayeredCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-priority source.
    pub fn layer(mut self, source: impl CredentialSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl CredentialSource for LayeredCredentials {
    fn get(&self, name: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(name))
    }
}

impl std::fmt::Debug for LayeredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredCredentials")
            .field("layers", &self.layers.len())
            .finish()
    }
}
