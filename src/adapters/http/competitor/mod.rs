//! Competitor HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::CompetitorHandlers;
pub use routes::competitor_routes;
