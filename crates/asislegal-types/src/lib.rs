//! Shared domain types for AsisLegal.
//!
//! This crate contains the core domain types used across the AsisLegal
//! application: Document, Chat, Message, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod document;
pub mod error;
pub mod message;
pub mod owner;
pub mod qa;
