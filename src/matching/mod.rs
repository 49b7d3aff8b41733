//! Fuzzy matching utilities for "did you mean" hints.
//!
//! This module suggests the closest contact name or command keyword when the
//! user's input does not match anything exactly.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{NameMatcher, Suggestion};
