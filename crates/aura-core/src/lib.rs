//! Core domain layer for Aura.
//!
//! This crate contains the domain models, the shared error type, the pure
//! derivation functions for the wellness dashboard (daily aggregation,
//! insight rules, activity calendar), and the abstract traits through which
//! the application consumes its network collaborators (conversation store,
//! mood source, activity source, auth credential provider).

pub mod error;
pub mod secret;
pub mod session;
pub mod wellness;

// Re-export common error type
pub use error::{AuraError, Result};
