//! Infrastructure layer for Lingo.
//!
//! Contains the implementation of the session port defined in `lingo-core`
//! (a cookie-backed reqwest client), plus configuration and credential
//! loading from the data directory and environment.

pub mod config;
pub mod credentials;
pub mod http;
