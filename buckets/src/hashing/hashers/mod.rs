//! [`crate::core::Hasher`] implementations.
//!
//! # Notes
//!
//! - Every hasher is deterministic: no per-process randomization, so addresses are stable across
//!   runs.
//! - Only [`NativeHasher`] accepts every [`crate::key::Key`] kind; the others reject what they
//!   can't encode before the table is touched.
mod jenkins;
pub use jenkins::*;
mod md5_digest;
pub use md5_digest::*;
mod naive;
pub use naive::*;
mod native;
pub use native::*;
mod sha256_digest;
pub use sha256_digest::*;
