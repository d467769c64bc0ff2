//! Persistence layer for per-user spaced-repetition problem tracking.
//!
//! Stores problem tracking records and issued API keys in a Supabase
//! (PostgREST) table store. Domain types and the repository traits live in
//! [`leetrepeat_core`]; this crate provides the concrete backends and the
//! environment configuration that selects the remote project and tables.
//!
//! The recommended way to obtain a repository is to build a
//! [`SupabaseClient`] once and inject it:
//!
//! ```no_run
//! use leetrepeat::{Config, SupabaseClient, SupabaseRepository};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let client = SupabaseClient::from_config(&config)?;
//! let repository = SupabaseRepository::new(client, &config);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```
//!
//! Callers that want one process-wide connection instead can use
//! [`storage::supabase::shared`].

pub mod config;
pub mod storage;

pub use config::Config;
pub use storage::supabase::{SupabaseClient, SupabaseRepository};
