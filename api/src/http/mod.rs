//! HTTP layer
//!
//! - `response`: `ApiResponse`, the value handler operations return
//! - `context`: `ReqContext` and its header extractor
//! - `service`: the `StarHttpService` port
//! - `routes`: stub router serving any `StarHttpService`

pub mod context;
pub mod response;
pub mod routes;
pub mod service;

pub use context::ReqContext;
pub use response::ApiResponse;
pub use routes::router;
pub use service::{SharedStarHttpService, StarHttpService};
