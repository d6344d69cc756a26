//! Provider client libraries as probeable capabilities.

use anyhow::Result;

use super::TranscriptionClient;
use crate::credentials::CredentialSource;

/// A provider's client library.
///
/// Recognizers probe [`is_available`](ClientLibrary::is_available) before
/// connecting so a missing library is reported as a setup problem rather
/// than a load failure.
pub trait ClientLibrary: Send + Sync {
    /// Library name reported in setup errors
    fn name(&self) -> &'static str;

    /// Whether the library can be used in this build
    fn is_available(&self) -> bool;

    /// Build a client, resolving credentials the way the provider does.
    fn connect(&self, credentials: &dyn CredentialSource) -> Result<Box<dyn TranscriptionClient>>;
}
