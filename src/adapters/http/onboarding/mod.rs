//! Onboarding wizard HTTP adapter.

mod dto;
mod handlers;
mod registry;
mod routes;

pub use handlers::OnboardingHandlers;
pub use registry::WizardRegistry;
pub use routes::onboarding_routes;
