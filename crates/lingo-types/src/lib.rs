//! Shared domain types for Lingo.
//!
//! This crate contains the documents returned by the learning platform
//! (profile, skills, vocabulary), the projections derived from them, the
//! client configuration, and the error types used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod lenient;
pub mod profile;
pub mod session;
pub mod skill;
pub mod vocabulary;
