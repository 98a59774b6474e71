//! Physical and financial execution sliders with debounced autosave.
//!
//! DESIGN
//! ======
//! Both percentages live in one [`ExecutionState`] keyed by the first finance
//! document. Every drag movement re-arms a [`DebounceGate`]; the timer task
//! spawned for a movement only persists if its ticket is still the latest
//! when it wakes. That gives at most one persistence call per idle window,
//! carrying the values at fire time.

#[cfg(test)]
#[path = "execution_test.rs"]
mod execution_test;

use crate::net::api::ProjectsApi;
use crate::net::types::{ExecutionPatch, FinanceDocument};

use super::outcome::MutationOutcome;

pub const MIN_PERCENT: u8 = 0;
pub const MAX_PERCENT: u8 = 100;

/// Which slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gauge {
    Physical,
    Financial,
}

impl Gauge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical execution",
            Self::Financial => "Financial execution",
        }
    }
}

/// Round to a whole percent and clamp into `0..=100`. Non-finite input is 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_percent(raw: f64) -> u8 {
    if !raw.is_finite() {
        return MIN_PERCENT;
    }
    raw.round().clamp(f64::from(MIN_PERCENT), f64::from(MAX_PERCENT)) as u8
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionState {
    /// First finance document; `None` disables both sliders.
    pub document_id: Option<String>,
    pub physical: u8,
    pub financial: u8,
    /// Values from the last fetch, restored by [`ExecutionState::cancel`].
    baseline: (u8, u8),
    pub dragging: Option<Gauge>,
}

impl ExecutionState {
    pub fn from_documents(documents: &[FinanceDocument]) -> Self {
        let Some(first) = documents.first() else {
            return Self::default();
        };
        let physical = clamp_percent(first.physical_execution);
        let financial = clamp_percent(first.financial_execution);
        Self {
            document_id: Some(first.id.clone()),
            physical,
            financial,
            baseline: (physical, financial),
            dragging: None,
        }
    }

    pub fn can_drag(&self) -> bool {
        self.document_id.is_some()
    }

    pub fn value(&self, gauge: Gauge) -> u8 {
        match gauge {
            Gauge::Physical => self.physical,
            Gauge::Financial => self.financial,
        }
    }

    /// Start dragging `gauge`; refused when there is no finance document.
    pub fn begin_drag(&mut self, gauge: Gauge) -> bool {
        if !self.can_drag() {
            return false;
        }
        self.dragging = Some(gauge);
        true
    }

    /// Move the active slider. Returns `true` when a value changed.
    pub fn drag_to(&mut self, percent: f64) -> bool {
        match self.dragging {
            Some(gauge) => self.set(gauge, percent),
            None => false,
        }
    }

    /// Set a slider directly (click or keyboard). Returns `true` when the value changed.
    pub fn set(&mut self, gauge: Gauge, percent: f64) -> bool {
        if !self.can_drag() {
            return false;
        }
        let next = clamp_percent(percent);
        let slot = match gauge {
            Gauge::Physical => &mut self.physical,
            Gauge::Financial => &mut self.financial,
        };
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Restore the last-fetched values (0 when there was no document).
    pub fn cancel(&mut self) {
        (self.physical, self.financial) = self.baseline;
        self.dragging = None;
    }

    pub fn is_dirty(&self) -> bool {
        (self.physical, self.financial) != self.baseline
    }

    /// Keep the slider values and drag of `previous` when it tracks the same
    /// document and differs from what it last fetched.
    pub fn carry_unsaved(&mut self, previous: &ExecutionState) -> bool {
        if previous.document_id != self.document_id || !previous.is_dirty() {
            return false;
        }
        self.physical = previous.physical;
        self.financial = previous.financial;
        self.dragging = previous.dragging;
        true
    }

    /// Document id and body for `PATCH /finance/{id}`.
    pub fn payload(&self) -> Option<(String, ExecutionPatch)> {
        let id = self.document_id.clone()?;
        Some((
            id,
            ExecutionPatch {
                physical_execution: f64::from(self.physical),
                financial_execution: f64::from(self.financial),
            },
        ))
    }
}

// =============================================================================
// DEBOUNCE
// =============================================================================

/// Handle for one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Generation counter: each arm supersedes all earlier tickets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
    pending: bool,
}

impl DebounceGate {
    pub fn arm(&mut self) -> DebounceTicket {
        self.generation += 1;
        self.pending = true;
        DebounceTicket(self.generation)
    }

    /// `true` exactly once, and only for the latest ticket.
    pub fn take(&mut self, ticket: DebounceTicket) -> bool {
        if ticket.0 != self.generation || !self.pending {
            return false;
        }
        self.pending = false;
        true
    }

    /// Invalidate any pending ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    /// An armed ticket has not fired or been cancelled yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Send both current values for the tracked finance document.
pub async fn persist<A: ProjectsApi>(api: &A, state: &ExecutionState) -> MutationOutcome {
    let Some((document_id, patch)) = state.payload() else {
        return MutationOutcome::Invalid("No finance document to update.".to_owned());
    };
    MutationOutcome::from_result(api.update_execution(&document_id, &patch).await, "Execution saved.")
}
