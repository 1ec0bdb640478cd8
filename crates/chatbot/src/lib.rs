//! `democrm-chatbot`
//!
//! Canned-response chat assistant for the demo CRM:
//! - [`selector`]: maps a free-text message to one of a fixed set of replies
//!   by ordered, case-insensitive keyword rules (first match wins).
//! - [`service`]: the asynchronous chat turn. Each submission is answered
//!   after a fixed artificial delay; overlapping submissions queue in order.

pub mod config;
pub mod error;
pub mod history;
pub mod selector;
pub mod service;
pub mod templates;

pub use config::ChatConfig;
pub use error::ChatError;
pub use history::{ChatMessage, seed_history};
pub use selector::{ResponseKind, ResponseRule, ResponseSelector, select_response};
pub use service::{ChatHandle, ChatService, TurnState};
