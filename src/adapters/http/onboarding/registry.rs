//! In-memory wizard registry.
//!
//! Live wizard instances keyed by id. Nothing is persisted: a restart
//! discards every wizard, matching the wizard's discard-on-abandonment
//! lifecycle. Each wizard sits behind its own async mutex so a pending
//! submission naturally serializes other operations on the same wizard
//! without blocking the rest of the registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::OnboardingWizard;

/// Registry of live onboarding wizards.
///
/// # Panics
///
/// Methods panic if the outer lock is poisoned.
#[derive(Default)]
pub struct WizardRegistry {
    wizards: RwLock<HashMap<WizardId, Arc<Mutex<OnboardingWizard>>>>,
}

impl WizardRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh wizard and returns its id.
    pub fn create(&self) -> WizardId {
        let id = WizardId::new();
        self.wizards
            .write()
            .expect("WizardRegistry lock poisoned")
            .insert(id, Arc::new(Mutex::new(OnboardingWizard::new())));
        id
    }

    /// Looks up a wizard by id.
    pub fn get(&self, id: &WizardId) -> Option<Arc<Mutex<OnboardingWizard>>> {
        self.wizards
            .read()
            .expect("WizardRegistry lock poisoned")
            .get(id)
            .cloned()
    }

    /// Discards a wizard. Returns whether one was removed.
    pub fn remove(&self, id: &WizardId) -> bool {
        self.wizards
            .write()
            .expect("WizardRegistry lock poisoned")
            .remove(id)
            .is_some()
    }

    /// Number of live wizards.
    pub fn len(&self) -> usize {
        self.wizards
            .read()
            .expect("WizardRegistry lock poisoned")
            .len()
    }

    /// Returns true when no wizard is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
