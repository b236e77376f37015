//! Application layer - resource services, the client-side cache, and the
//! onboarding submission handler.

pub mod cache;
mod onboarding;
pub mod services;

pub use cache::{ListCache, ResourceCache, ResourceKey};
pub use onboarding::SubmitOnboarding;
