//! Common test utilities for pydoc-book
//!
//! Shared fixtures, a temporary book layout, and assertions for the
//! integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
