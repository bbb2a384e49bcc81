//! Conversation session domain.
//!
//! This module contains the session and message models together with the
//! abstract client contract for the remote conversation store.

pub mod message;
pub mod model;
pub mod store;

pub use message::{ConversationMessage, MessageRole};
pub use model::Session;
pub use store::ConversationStoreClient;
