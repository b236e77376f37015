//! Resource records - the four independent dashboard collections.
//!
//! Competitors, goals, team members, and comparisons are top-level
//! collections with no foreign keys or joins between them. Each record
//! type has a Draft (no id or timestamps; the store assigns both) and a
//! Patch (all-optional partial update) companion.

mod comparison;
mod competitor;
mod goal;
mod team_member;

pub use comparison::{
    Comparison, ComparisonDraft, ComparisonKind, ComparisonPatch, CompetitorMark, OwnMark,
};
pub use competitor::{Competitor, CompetitorDraft, CompetitorPatch};
pub use goal::{Goal, GoalDraft, GoalPatch};
pub use team_member::{TeamMember, TeamMemberDraft, TeamMemberPatch};
