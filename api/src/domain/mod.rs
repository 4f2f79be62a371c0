//! Domain layer
//!
//! - `entities`: star records, commands and queries
//! - `ports`: the `StarService` trait callers depend on

pub mod entities;
pub mod ports;
