//! Star domain entity
//!
//! A star is a user's bookmark on a dashboard. Commands and queries carry
//! the ids the star service needs; the service owns everything else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StarError;

/// A user's star on a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Star {
    pub id: i64,
    pub user_id: i64,
    pub dashboard_id: i64,
}

/// Star a dashboard on behalf of a user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StarDashboardCommand {
    pub user_id: i64,
    pub dashboard_id: i64,
}

impl StarDashboardCommand {
    pub fn validate(&self) -> Result<(), StarError> {
        validate_ids(self.user_id, self.dashboard_id)
    }
}

/// Remove a user's star from a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnstarDashboardCommand {
    pub user_id: i64,
    pub dashboard_id: i64,
}

impl UnstarDashboardCommand {
    pub fn validate(&self) -> Result<(), StarError> {
        validate_ids(self.user_id, self.dashboard_id)
    }
}

/// Zero is never a valid user or dashboard id
fn validate_ids(user_id: i64, dashboard_id: i64) -> Result<(), StarError> {
    if user_id == 0 || dashboard_id == 0 {
        return Err(StarError::CommandValidationFailed);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IsStarredByUserQuery {
    pub user_id: i64,
    pub dashboard_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetUserStarsQuery {
    pub user_id: i64,
}

/// Stars of one user, keyed by dashboard id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetUserStarsResult {
    pub user_stars: HashMap<i64, bool>,
}

impl GetUserStarsResult {
    pub fn is_starred(&self, dashboard_id: i64) -> bool {
        self.user_stars.get(&dashboard_id).copied().unwrap_or(false)
    }
}

impl FromIterator<i64> for GetUserStarsResult {
    fn from_iter<I: IntoIterator<Item = i64>>(dashboard_ids: I) -> Self {
        Self {
            user_stars: dashboard_ids.into_iter().map(|id| (id, true)).collect(),
        }
    }
}
