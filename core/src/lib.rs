//! # Multipath Core
//!
//! Capability traits and shared types for the multipath reasoning engine.
//!
//! The search engine never talks to a model provider directly. Everything it
//! needs from the outside world comes through two injected seams:
//!
//! - [`generation::ThoughtGenerator`]: proposes candidate child thoughts for a
//!   node in the reasoning tree
//! - [`generation::Completion`]: answers a free-form text prompt (used by the
//!   evaluator to score candidates)
//!
//! Both traits are async via RPITIT (edition 2024), so call sites stay generic
//! and compile to static dispatch.
//!
//! ## Example
//!
//! ```ignore
//! use multipath_core::generation::{Completion, GenerationError};
//!
//! struct MyProvider { /* http client, model name, ... */ }
//!
//! impl Completion for MyProvider {
//!     async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
//!         // call the provider and return the response text
//!     }
//! }
//! ```

pub mod generation;

pub use generation::{Completion, GenerationError, ThoughtGenerator};
