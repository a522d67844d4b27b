//! # corvit-lookup — Encyclopedia Lookup for Corvit
//!
//! Fetches plain-text article summaries from a Wikipedia-compatible REST
//! endpoint so the session can merge them into its word-pair model under the
//! configured category tag.
//!
//! Lookups are optional enrichment: a missing article is a typed
//! [`LookupError::NotFound`] the caller reports to the user, and any other
//! failure degrades gracefully — the conversation continues either way.

pub mod client;
pub mod error;

pub use client::EncyclopediaClient;
pub use error::LookupError;
