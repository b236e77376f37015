//! RivalScope - Competitor analysis and goals tracking dashboard backend
//!
//! This crate backs the dashboard's four CRUD resources (goals,
//! competitors, team members, feature/attribute comparisons) and the
//! multi-step onboarding wizard with its single outbound webhook
//! submission.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
