//! Skill tree processing.

pub mod resolver;

pub use resolver::{compute_dependency_order, learned_skills};
