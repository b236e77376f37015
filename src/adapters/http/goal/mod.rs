//! Goal HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::GoalHandlers;
pub use routes::goal_routes;
