//! Milestone toggle, edit, and delete.
//!
//! The toggle is applied to the local list right away using the same patch
//! that is sent to the server. The local copy is a projection only; the next
//! project fetch overwrites it. Edit and delete re-fetch the project on
//! success instead of patching.

#[cfg(test)]
#[path = "milestones_test.rs"]
mod milestones_test;

use crate::net::api::ProjectsApi;
use crate::net::types::{Milestone, MilestonePatch, MilestoneStatus};

use super::outcome::MutationOutcome;

/// Full patch that flips `milestone`'s status, stamping `now` when it becomes completed.
pub fn toggled_patch(milestone: &Milestone, now: &str) -> MilestonePatch {
    let status = milestone.status.flipped();
    MilestonePatch {
        title: milestone.title.clone(),
        description: milestone.description.clone(),
        status,
        completed_at: match status {
            MilestoneStatus::Completed => Some(now.to_owned()),
            MilestoneStatus::Pending => None,
        },
    }
}

/// Overwrite the milestone `id` with `patch`. Returns `false` when not found.
pub fn apply_patch(milestones: &mut [Milestone], id: &str, patch: &MilestonePatch) -> bool {
    let Some(milestone) = milestones.iter_mut().find(|m| m.id == id) else {
        return false;
    };
    milestone.title.clone_from(&patch.title);
    milestone.description.clone_from(&patch.description);
    milestone.status = patch.status;
    milestone.completed_at.clone_from(&patch.completed_at);
    true
}

/// Edit form pre-filled from a milestone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MilestoneForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    completed_at: Option<String>,
}

impl MilestoneForm {
    pub fn from_milestone(milestone: &Milestone) -> Self {
        Self {
            id: milestone.id.clone(),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            status: milestone.status,
            completed_at: milestone.completed_at.clone(),
        }
    }

    /// Title is required. A status change keeps the completion stamp consistent.
    pub fn to_patch(&self, now: &str) -> Result<MilestonePatch, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.");
        }
        let completed_at = match self.status {
            MilestoneStatus::Pending => None,
            MilestoneStatus::Completed => self.completed_at.clone().or_else(|| Some(now.to_owned())),
        };
        Ok(MilestonePatch {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            status: self.status,
            completed_at,
        })
    }
}

/// Send a prepared patch (used by the toggle after the local update).
pub async fn send_patch<A: ProjectsApi>(api: &A, id: &str, patch: &MilestonePatch) -> MutationOutcome {
    MutationOutcome::from_result(api.update_milestone(id, patch).await, "Milestone updated.")
}

/// Validate and submit the edit form.
pub async fn edit<A: ProjectsApi>(api: &A, form: &MilestoneForm, now: &str) -> MutationOutcome {
    match form.to_patch(now) {
        Ok(patch) => send_patch(api, &form.id, &patch).await,
        Err(message) => MutationOutcome::Invalid(message.to_owned()),
    }
}

pub async fn delete<A: ProjectsApi>(api: &A, id: &str) -> MutationOutcome {
    MutationOutcome::from_result(api.delete_milestone(id).await, "Milestone deleted.")
}
