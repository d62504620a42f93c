//! Repository trait definitions.
//!
//! One trait per aggregate. Implementations live in asislegal-infra
//! (e.g. `SqliteChatRepository`). All traits use native async fn in
//! traits (RPITIT, Rust 2024 edition).

pub mod chat;
pub mod document;
pub mod message;

pub use chat::ChatRepository;
pub use document::DocumentRepository;
pub use message::MessageRepository;
