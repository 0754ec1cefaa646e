//! # Database module: PostgreSQL connection pool
//!
//! Gated behind `#[cfg(feature = "server")]` so client (WASM) builds never pull
//! in SQLx.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads the
//! [`crate::config::ServerConfig`], opens up to `max_connections` connections,
//! and caches the pool for every later caller.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, DbError};
