//! Star service contracts and test doubles
//!
//! `StarService` and `StarHttpService` describe the dashboard star
//! capability; `test_utils` provides fakes of both for dependency injection
//! in tests, and `http::router` serves any `StarHttpService` as a stub.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use domain::ports::StarService;
pub use error::StarError;
pub use http::{ApiResponse, ReqContext, StarHttpService};
