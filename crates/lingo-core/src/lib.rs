//! Client logic and port definitions for Lingo.
//!
//! This crate defines the HTTP session "port" that the infrastructure layer
//! implements, and everything computed on top of it: the profile client,
//! the skill dependency walk, profile projections, and TTS media lookup.
//! It depends only on `lingo-types` -- never on `lingo-infra` or any HTTP
//! crate.

pub mod client;
pub mod endpoints;
pub mod media;
pub mod profile;
pub mod session;
pub mod skill;

#[cfg(test)]
pub(crate) mod testing;
