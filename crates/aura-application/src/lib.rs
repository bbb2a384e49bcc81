//! Application layer for Aura.
//!
//! This crate provides the services that coordinate between the domain and
//! infrastructure layers: the conversation session manager and the wellness
//! dashboard refresh service.

pub mod bootstrap;
pub mod chat_service;
pub mod session;
pub mod wellness_service;

pub use bootstrap::AuraRuntime;
pub use chat_service::{ChatService, ResumedHistory, FALLBACK_ASSISTANT_REPLY};
pub use wellness_service::{DashboardSnapshot, WellnessService};
