//! HTTP-facing star port

use std::sync::Arc;

use async_trait::async_trait;

use super::{ApiResponse, ReqContext};

/// Handler-shaped star operations
#[async_trait]
pub trait StarHttpService: Send + Sync {
    /// GET the current user's stars
    async fn get_stars(&self, ctx: &ReqContext) -> ApiResponse;

    /// Star the dashboard named in the context
    async fn star_dashboard(&self, ctx: &ReqContext) -> ApiResponse;

    /// Unstar the dashboard named in the context
    async fn unstar_dashboard(&self, ctx: &ReqContext) -> ApiResponse;
}

pub type SharedStarHttpService = Arc<dyn StarHttpService>;
