//! Core domain types and storage abstraction for leetrepeat.
//!
//! This crate defines the entities tracked per user (practice problems and
//! issued API keys) and the repository traits a storage backend implements.
//! It performs no I/O; concrete backends live in the `leetrepeat` crate.

pub mod credential;
pub mod problem;
pub mod storage;
