//! Versioned documents with anchored comments.
//!
//! `comment-core` provides document lifecycle management, block-structured
//! content, a closed set of comment location variants with per-variant
//! validation, and an optimistic-concurrency update protocol. Transport and
//! persistence are collaborators, not concerns of this crate: the services
//! expose plain operations and consume the [`storage::DocumentStore`] trait.

pub mod document;
pub mod location;
pub mod service;
pub mod storage;
pub mod types;
