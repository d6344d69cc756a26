//! Setup errors raised before any recognition work starts.

use thiserror::Error;

/// The environment needed to perform recognition is not satisfied.
///
/// Raised synchronously, before a client is built or a request is sent.
/// Errors from the transport or the provider never become a `SetupError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupError {
    /// Required credential is absent from the credential source
    #[error("Set environment variable `{env_var}`")]
    MissingCredential { env_var: &'static str },

    /// Provider client library was not compiled in or cannot be loaded
    #[error("missing {library} client library: ensure that {library} is set up correctly")]
    MissingDependency { library: &'static str },
}
