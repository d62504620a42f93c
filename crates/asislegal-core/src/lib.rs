//! Business logic and repository trait definitions for AsisLegal.
//!
//! This crate defines the "ports" (repository, blob-store, and AI-client
//! traits) that the infrastructure layer implements, plus the chat
//! lifecycle service orchestrating them. It depends only on
//! `asislegal-types` -- never on `asislegal-infra` or any database/IO crate.

pub mod qa;
pub mod repository;
pub mod service;
pub mod store;
