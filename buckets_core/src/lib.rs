//! Types shared by every crate of the workspace.
pub mod core;
pub mod error;
pub mod key;
