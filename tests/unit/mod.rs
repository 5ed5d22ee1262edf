//! Unit Tests Module
//!
//! Component tests that run against in-memory catalogs and fixtures.

pub mod analysis;
pub mod probe;
