//! Shared helpers for rendering and reporting

pub mod math;
pub mod title;
