//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketsError {
    /// No entry with an equal key exists at the computed address.
    #[error("Key not found.")]
    KeyNotFound,
    /// The hasher does not accept keys of this kind at all.
    #[error(r#"Key of type "{key_type}" is not supported by the "{hasher}" hasher."#)]
    InvalidKeyType {
        hasher: &'static str,
        key_type: &'static str,
    },
    /// The key kind is supported but this particular value has no encoding for the hasher.
    #[error(r#"Key of type "{key_type}" is out of the range supported by the "{hasher}" hasher."#)]
    KeyOutOfRange {
        hasher: &'static str,
        key_type: &'static str,
    },
    /// Tables need at least one bucket to address.
    #[error("Number of buckets must be greater than 0.")]
    ZeroBuckets,
}
