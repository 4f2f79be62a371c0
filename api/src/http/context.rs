//! Request context handed to handler-shaped operations
//!
//! Identity arrives in `x-user-id` / `x-org-id` headers set by whatever sits
//! in front of the service (a gateway in production, the test client here).

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};

use super::ApiResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const ORG_ID_HEADER: &str = "x-org-id";

/// Per-request data for star handlers. `Default` is the empty context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReqContext {
    pub user_id: i64,
    pub org_id: i64,
    /// Set from the route path on dashboard-scoped endpoints
    pub dashboard_id: Option<i64>,
}

impl ReqContext {
    pub fn new(user_id: i64, org_id: i64) -> Self {
        Self {
            user_id,
            org_id,
            dashboard_id: None,
        }
    }

    pub fn with_dashboard(mut self, dashboard_id: i64) -> Self {
        self.dashboard_id = Some(dashboard_id);
        self
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for ReqContext
where
    S: Send + Sync,
{
    type Rejection = ApiResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized = || ApiResponse::error(StatusCode::UNAUTHORIZED, "Unauthorized");

        let user_id = header_i64(&parts.headers, USER_ID_HEADER).ok_or_else(unauthorized)?;
        let org_id = header_i64(&parts.headers, ORG_ID_HEADER).ok_or_else(unauthorized)?;

        Ok(Self::new(user_id, org_id))
    }
}
