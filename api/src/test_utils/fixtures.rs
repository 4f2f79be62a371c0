//! Test fixtures
//!
//! Factory functions for star records with sensible defaults.

use crate::domain::entities::{
    GetUserStarsResult, Star, StarDashboardCommand, UnstarDashboardCommand,
};
use crate::http::ReqContext;

pub const TEST_USER_ID: i64 = 1;
pub const TEST_ORG_ID: i64 = 1;
pub const TEST_DASHBOARD_ID: i64 = 100;

pub fn test_star() -> Star {
    Star {
        id: 1,
        user_id: TEST_USER_ID,
        dashboard_id: TEST_DASHBOARD_ID,
    }
}

pub fn test_star_command() -> StarDashboardCommand {
    StarDashboardCommand {
        user_id: TEST_USER_ID,
        dashboard_id: TEST_DASHBOARD_ID,
    }
}

pub fn test_unstar_command() -> UnstarDashboardCommand {
    UnstarDashboardCommand {
        user_id: TEST_USER_ID,
        dashboard_id: TEST_DASHBOARD_ID,
    }
}

/// Stars result with every listed dashboard starred
pub fn test_user_stars(dashboard_ids: &[i64]) -> GetUserStarsResult {
    dashboard_ids.iter().copied().collect()
}

pub fn test_req_context() -> ReqContext {
    ReqContext::new(TEST_USER_ID, TEST_ORG_ID)
}
