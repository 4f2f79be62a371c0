//! Domain entities
//!
//! Records exchanged with the star service.

pub mod star;

pub use star::{
    GetUserStarsQuery, GetUserStarsResult, IsStarredByUserQuery, Star, StarDashboardCommand,
    UnstarDashboardCommand,
};
