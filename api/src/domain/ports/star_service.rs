//! Star service port

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    GetUserStarsQuery, GetUserStarsResult, IsStarredByUserQuery, StarDashboardCommand,
    UnstarDashboardCommand,
};
use crate::error::StarError;

/// Domain operations on dashboard stars
#[async_trait]
pub trait StarService: Send + Sync {
    /// Check whether the user has starred the dashboard
    async fn is_starred_by_user(&self, query: &IsStarredByUserQuery) -> Result<bool, StarError>;

    /// Star a dashboard
    async fn add(&self, cmd: &StarDashboardCommand) -> Result<(), StarError>;

    /// Remove a star
    async fn delete(&self, cmd: &UnstarDashboardCommand) -> Result<(), StarError>;

    /// Remove every star owned by a user
    async fn delete_by_user(&self, user_id: i64) -> Result<(), StarError>;

    /// List the user's stars
    async fn get_by_user(
        &self,
        query: &GetUserStarsQuery,
    ) -> Result<Arc<GetUserStarsResult>, StarError>;
}
