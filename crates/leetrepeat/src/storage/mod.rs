//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `leetrepeat_core::storage`. The Supabase backend is the
//! production store; the in-memory backend exists for tests and local
//! development and is gated behind the default `inmemory` feature.

pub mod supabase;

#[cfg(feature = "inmemory")]
pub mod inmemory;

pub use supabase::{SharedRepository, SupabaseClient, SupabaseRepository};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
