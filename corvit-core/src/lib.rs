//! # Corvit Core Library
//!
//! Stateful conversational text generator. Each line of user input feeds a
//! layered memory — a bounded short-term queue, a bounded long-term queue,
//! and a categorized word-pair frequency model — plus a persistent
//! three-axis emotional state. Replies are built by weighted random walks
//! over the word-pair model, capped by a sampled phrase length and annotated
//! with the dominant emotion.
//!
//! The engine is purely reactive: one [`Session::process_turn`] call fully
//! processes an input (memory update → emotional update → reply generation →
//! persistence) before the next is accepted. There is no concurrency and no
//! ambient global state; everything lives in the [`Session`].
//!
//! [`Session::process_turn`]: session::Session::process_turn
//! [`Session`]: session::Session

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod emotion;
pub mod error;
pub mod generate;
pub mod memory;
pub mod persistence;
pub mod phrase;
pub mod profile;
pub mod sampler;
pub mod session;
pub mod transcript;
pub mod types;

pub use config::CorvitConfig;
pub use error::CorvitError;
pub use memory::MemoryStore;
pub use session::Session;
pub use types::*;
