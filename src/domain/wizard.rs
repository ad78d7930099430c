//! Multi-step client wizard.
//!
//! A client is created (or edited) by first entering its details and the
//! number of events, then filling one event per step. Events are staged in a
//! fixed number of slots behind a cursor and handed over together only after
//! the last slot is filled. Dropping the wizard discards everything staged.

use serde::{Deserialize, Serialize};

use crate::domain::client::NewClient;
use crate::domain::event::NewEvent;
use crate::domain::types::{ClientId, TypeConstraintError};

/// Largest number of events a single client can be created with.
pub const MAX_EVENTS_PER_CLIENT: usize = 10;

/// What the wizard commits into once it completes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WizardTarget {
    Create,
    Edit(ClientId),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientWizard {
    target: WizardTarget,
    client: NewClient,
    slots: Vec<Option<NewEvent>>,
    cursor: usize,
}

/// Completed wizard, ready to be persisted in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSubmission {
    pub target: WizardTarget,
    pub client: NewClient,
    pub events: Vec<NewEvent>,
}

/// Result of staging one event.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardStep {
    Pending(ClientWizard),
    Complete(ClientSubmission),
}

impl ClientWizard {
    /// Starts a wizard expecting `event_count` events.
    pub fn start(
        target: WizardTarget,
        client: NewClient,
        event_count: usize,
    ) -> Result<Self, TypeConstraintError> {
        if !(1..=MAX_EVENTS_PER_CLIENT).contains(&event_count) {
            return Err(TypeConstraintError::InvalidValue(format!(
                "number of events must be between 1 and {MAX_EVENTS_PER_CLIENT}"
            )));
        }
        Ok(Self {
            target,
            client,
            slots: vec![None; event_count],
            cursor: 0,
        })
    }

    pub fn target(&self) -> WizardTarget {
        self.target
    }

    pub fn client(&self) -> &NewClient {
        &self.client
    }

    /// Zero based index of the slot the next event fills.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// One based step number for display.
    pub fn step_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn total_steps(&self) -> usize {
        self.slots.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.cursor + 1 == self.slots.len()
    }

    /// Events staged so far, in slot order.
    pub fn staged(&self) -> impl Iterator<Item = &NewEvent> {
        self.slots.iter().take(self.cursor).flatten()
    }

    /// Fills the current slot and advances the cursor. Filling the last slot
    /// completes the wizard.
    pub fn stage(mut self, event: NewEvent) -> WizardStep {
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = Some(event);
            self.cursor += 1;
        }

        if self.cursor < self.slots.len() {
            return WizardStep::Pending(self);
        }

        WizardStep::Complete(ClientSubmission {
            target: self.target,
            client: self.client,
            events: self.slots.into_iter().flatten().collect(),
        })
    }
}
