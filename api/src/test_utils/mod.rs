//! Test utilities
//!
//! Fakes of the star ports and fixtures for the records they exchange.
//! Compiled into the library so downstream crates can inject the fakes in
//! their own tests.

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
