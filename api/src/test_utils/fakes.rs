//! Fake implementations of the star ports
//!
//! Every call returns whatever the test preset on the fake. Nothing is
//! stored and no input is inspected.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    GetUserStarsQuery, GetUserStarsResult, IsStarredByUserQuery, Star, StarDashboardCommand,
    UnstarDashboardCommand,
};
use crate::domain::ports::StarService;
use crate::error::StarError;
use crate::http::{ApiResponse, ReqContext, StarHttpService};

// ============================================================================
// Fake Star Service
// ============================================================================

/// Domain star service returning preset values.
///
/// Set the public fields (or use the `with_*` builders) before handing the
/// fake to the code under test.
#[derive(Debug, Default)]
pub struct FakeStarService {
    pub expected_stars: Option<Star>,
    pub expected_error: Option<StarError>,
    pub expected_user_stars: Arc<GetUserStarsResult>,
}

impl FakeStarService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with `err`
    pub fn with_error(mut self, err: StarError) -> Self {
        self.expected_error = Some(err);
        self
    }

    pub fn with_stars(mut self, star: Star) -> Self {
        self.expected_stars = Some(star);
        self
    }

    pub fn with_user_stars(mut self, result: impl Into<Arc<GetUserStarsResult>>) -> Self {
        self.expected_user_stars = result.into();
        self
    }

    fn preset_error(&self) -> Result<(), StarError> {
        match &self.expected_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StarService for FakeStarService {
    async fn is_starred_by_user(&self, query: &IsStarredByUserQuery) -> Result<bool, StarError> {
        tracing::debug!(?query, "fake is_starred_by_user");
        self.preset_error()?;
        Ok(true)
    }

    async fn add(&self, cmd: &StarDashboardCommand) -> Result<(), StarError> {
        tracing::debug!(?cmd, "fake add");
        self.preset_error()
    }

    async fn delete(&self, cmd: &UnstarDashboardCommand) -> Result<(), StarError> {
        tracing::debug!(?cmd, "fake delete");
        self.preset_error()
    }

    async fn delete_by_user(&self, user_id: i64) -> Result<(), StarError> {
        tracing::debug!(user_id, "fake delete_by_user");
        self.preset_error()
    }

    async fn get_by_user(
        &self,
        query: &GetUserStarsQuery,
    ) -> Result<Arc<GetUserStarsResult>, StarError> {
        tracing::debug!(?query, "fake get_by_user");
        self.preset_error()?;
        Ok(Arc::clone(&self.expected_user_stars))
    }
}

// ============================================================================
// Fake Star HTTP Service
// ============================================================================

/// HTTP star service that answers `"ok"` to everything
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeStarHttpService;

impl FakeStarHttpService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StarHttpService for FakeStarHttpService {
    async fn get_stars(&self, _ctx: &ReqContext) -> ApiResponse {
        ApiResponse::success("ok")
    }

    async fn star_dashboard(&self, _ctx: &ReqContext) -> ApiResponse {
        ApiResponse::success("ok")
    }

    async fn unstar_dashboard(&self, _ctx: &ReqContext) -> ApiResponse {
        ApiResponse::success("ok")
    }
}
