//! Client-side resource cache.
//!
//! An explicit store: one list slot per resource key, each carrying a
//! staleness flag. The refresh discipline is invalidate-and-refetch:
//! every successful mutation invalidates the resource's slot, forcing
//! the next list read to hit the remote store. There is no optimistic
//! update and no partial patching; concurrent refills are last-write-wins.

use std::sync::Mutex;

use crate::domain::resources::{Comparison, Competitor, Goal, TeamMember};

/// Names the cached list collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Goals,
    Competitors,
    TeamMembers,
    FeatureComparisons,
    AttributeComparisons,
}

impl ResourceKey {
    /// The collection name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKey::Goals => "goals",
            ResourceKey::Competitors => "competitors",
            ResourceKey::TeamMembers => "team_members",
            ResourceKey::FeatureComparisons => "feature_comparisons",
            ResourceKey::AttributeComparisons => "attribute_comparisons",
        }
    }
}

/// One cached list plus its staleness flag.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned; the cache holds no
/// invariants worth recovering a poisoned state for.
pub struct ListCache<T> {
    inner: Mutex<Slot<T>>,
}

struct Slot<T> {
    entries: Vec<T>,
    fresh: bool,
}

impl<T: Clone> ListCache<T> {
    /// Creates an empty, stale slot.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Slot {
                entries: Vec::new(),
                fresh: false,
            }),
        }
    }

    /// Returns the cached list when fresh, None when a refetch is due.
    pub fn get(&self) -> Option<Vec<T>> {
        let slot = self.inner.lock().expect("ListCache lock poisoned");
        if slot.fresh {
            Some(slot.entries.clone())
        } else {
            None
        }
    }

    /// Replaces the cached list and marks it fresh. Last write wins.
    pub fn put(&self, entries: Vec<T>) {
        let mut slot = self.inner.lock().expect("ListCache lock poisoned");
        slot.entries = entries;
        slot.fresh = true;
    }

    /// Marks the slot stale; the next read goes to the remote store.
    pub fn invalidate(&self) {
        let mut slot = self.inner.lock().expect("ListCache lock poisoned");
        slot.fresh = false;
    }

    /// Returns whether the slot currently holds a fresh list.
    pub fn is_fresh(&self) -> bool {
        self.inner.lock().expect("ListCache lock poisoned").fresh
    }
}

impl<T: Clone> Default for ListCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The dashboard's cache: one typed slot per resource key.
#[derive(Default)]
pub struct ResourceCache {
    goals: ListCache<Goal>,
    competitors: ListCache<Competitor>,
    team_members: ListCache<TeamMember>,
    feature_comparisons: ListCache<Comparison>,
    attribute_comparisons: ListCache<Comparison>,
}

impl ResourceCache {
    /// Creates a cache with every slot stale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the goals slot.
    pub fn goals(&self) -> &ListCache<Goal> {
        &self.goals
    }

    /// Returns the competitors slot.
    pub fn competitors(&self) -> &ListCache<Competitor> {
        &self.competitors
    }

    /// Returns the team members slot.
    pub fn team_members(&self) -> &ListCache<TeamMember> {
        &self.team_members
    }

    /// Returns the comparison slot for the given key.
    ///
    /// # Panics
    ///
    /// Panics when called with a non-comparison key.
    pub fn comparisons(&self, key: ResourceKey) -> &ListCache<Comparison> {
        match key {
            ResourceKey::FeatureComparisons => &self.feature_comparisons,
            ResourceKey::AttributeComparisons => &self.attribute_comparisons,
            other => panic!("{} is not a comparison slot", other.as_str()),
        }
    }

    /// Invalidates the slot for a resource key.
    pub fn invalidate(&self, key: ResourceKey) {
        match key {
            ResourceKey::Goals => self.goals.invalidate(),
            ResourceKey::Competitors => self.competitors.invalidate(),
            ResourceKey::TeamMembers => self.team_members.invalidate(),
            ResourceKey::FeatureComparisons => self.feature_comparisons.invalidate(),
            ResourceKey::AttributeComparisons => self.attribute_comparisons.invalidate(),
        }
    }
}
