//! Hash functions and the [`crate::core::Hasher`] strategies built on them.
pub mod common;
pub mod hashers;
pub mod lookup3;
