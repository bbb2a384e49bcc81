//! HTTP API clients.
//!
//! Reqwest-based implementations of the core collaborator traits. All
//! clients share one [`ApiContext`] carrying the connection pool, the base
//! URL, the per-request timeout, and the injected credential provider.

pub mod activity;
pub mod context;
pub mod conversation;
pub mod dto;
pub mod mood;

pub use context::ApiContext;
