//! Supabase (PostgREST) storage backend.
//!
//! Implements the repository traits from `leetrepeat_core::storage` against
//! a Supabase project's REST interface. Rows travel as JSON objects whose
//! field names are the table column names; conflict targets and equality
//! filters are expressed in the request query string.

mod client;
mod conversions;
mod error;
mod repository;
pub mod shared;

pub use client::SupabaseClient;
pub use repository::SupabaseRepository;
pub use shared::SharedRepository;
