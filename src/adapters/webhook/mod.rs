//! Webhook adapters - outbound submission client.

mod client;

pub use client::{WebhookClientConfig, WebhookSubmissionClient, NO_OUTPUT_FALLBACK};
