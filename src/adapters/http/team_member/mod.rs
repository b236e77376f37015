//! Team member HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::TeamMemberHandlers;
pub use routes::team_member_routes;
