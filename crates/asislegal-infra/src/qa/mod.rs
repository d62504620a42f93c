//! AI document-QA service client.

pub mod client;

pub use client::HttpQaClient;
