//! Domain ports (traits)
//!
//! Callers depend on these traits; the production service and the fakes in
//! `test_utils` both implement them.

pub mod star_service;

pub use star_service::StarService;
