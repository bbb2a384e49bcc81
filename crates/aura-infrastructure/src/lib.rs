//! Infrastructure layer for Aura.
//!
//! This crate provides the concrete implementations of the core traits:
//! reqwest-based HTTP clients for the conversation store and the wellness
//! sources, bearer credential providers, the TOML configuration service,
//! and platform path resolution.

pub mod api;
pub mod config_service;
pub mod paths;
pub mod token;

pub use api::ApiContext;
pub use api::activity::HttpActivitySource;
pub use api::conversation::HttpConversationStoreClient;
pub use api::mood::HttpMoodSource;
pub use config_service::{AppConfig, ConfigService};
pub use token::{EnvTokenProvider, StaticTokenProvider};
