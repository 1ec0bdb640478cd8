//! `democrm-core`: domain building blocks shared by the demo CRM crates.
//!
//! This crate contains **pure domain** primitives (no IO, no randomness).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id, position_of};
pub use error::{DomainError, DomainResult};
pub use id::{ActivityId, ContactId, DealId, ModuleId, WorkflowId};
