//! Infrastructure layer for AsisLegal.
//!
//! Contains implementations of the ports defined in `asislegal-core`:
//! SQLite repositories, the local-filesystem document store, and the
//! reqwest-based client for the AI document-QA service.

pub mod qa;
pub mod sqlite;
pub mod storage;
