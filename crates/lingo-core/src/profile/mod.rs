//! Views derived from the fetched user profile.

pub mod projection;
