use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::net::api::ApiResult;
use crate::net::types::{Envelope, ExecutionPatch, Project};

const NOW: &str = "2026-03-01T09:30:00Z";

#[derive(Default)]
struct FakeProjects {
    updates: RefCell<Vec<(String, MilestonePatch)>>,
    deletes: RefCell<Vec<String>>,
    error: RefCell<Option<ApiError>>,
}

impl FakeProjects {
    fn reply(&self) -> ApiResult<serde_json::Value> {
        match self.error.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(Envelope { status: 200, message: String::new(), data: None }),
        }
    }
}

impl ProjectsApi for FakeProjects {
    async fn fetch_project(&self, _id: &str) -> ApiResult<Project> {
        Err(ApiError::Unavailable)
    }

    async fn update_milestone(&self, id: &str, patch: &MilestonePatch) -> ApiResult<serde_json::Value> {
        self.updates.borrow_mut().push((id.to_owned(), patch.clone()));
        self.reply()
    }

    async fn delete_milestone(&self, id: &str) -> ApiResult<serde_json::Value> {
        self.deletes.borrow_mut().push(id.to_owned());
        self.reply()
    }

    async fn update_execution(&self, _document_id: &str, _patch: &ExecutionPatch) -> ApiResult<serde_json::Value> {
        Err(ApiError::Unavailable)
    }
}

fn milestone(id: &str, status: MilestoneStatus) -> Milestone {
    Milestone {
        id: id.to_owned(),
        title: format!("Milestone {id}"),
        description: "Pour foundations".to_owned(),
        status,
        completed_at: match status {
            MilestoneStatus::Completed => Some("2026-01-01T00:00:00Z".to_owned()),
            MilestoneStatus::Pending => None,
        },
    }
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_pending_completes_with_timestamp() {
    let patch = toggled_patch(&milestone("m-1", MilestoneStatus::Pending), NOW);
    assert_eq!(patch.status, MilestoneStatus::Completed);
    assert_eq!(patch.completed_at.as_deref(), Some(NOW));
    assert_eq!(patch.title, "Milestone m-1");
}

#[test]
fn toggle_completed_reopens_and_clears_timestamp() {
    let patch = toggled_patch(&milestone("m-1", MilestoneStatus::Completed), NOW);
    assert_eq!(patch.status, MilestoneStatus::Pending);
    assert_eq!(patch.completed_at, None);
}

#[test]
fn toggling_twice_round_trips_status() {
    let mut list = vec![milestone("m-1", MilestoneStatus::Pending)];
    let first = toggled_patch(&list[0], NOW);
    assert!(apply_patch(&mut list, "m-1", &first));
    assert_eq!(list[0].status, MilestoneStatus::Completed);
    assert_eq!(list[0].completed_at.as_deref(), Some(NOW));

    let second = toggled_patch(&list[0], NOW);
    apply_patch(&mut list, "m-1", &second);
    assert_eq!(list[0].status, MilestoneStatus::Pending);
    assert_eq!(list[0].completed_at, None);
}

#[test]
fn apply_patch_to_unknown_id_is_noop() {
    let mut list = vec![milestone("m-1", MilestoneStatus::Pending)];
    let patch = toggled_patch(&list[0], NOW);
    assert!(!apply_patch(&mut list, "m-9", &patch));
    assert_eq!(list[0].status, MilestoneStatus::Pending);
}

#[test]
fn send_patch_uses_milestone_id() {
    let api = FakeProjects::default();
    let patch = toggled_patch(&milestone("m-3", MilestoneStatus::Pending), NOW);
    assert!(block_on(send_patch(&api, "m-3", &patch)).is_done());
    assert_eq!(api.updates.borrow()[0], ("m-3".to_owned(), patch));
}

// =============================================================
// Edit form
// =============================================================

#[test]
fn form_requires_title() {
    let mut form = MilestoneForm::from_milestone(&milestone("m-1", MilestoneStatus::Pending));
    form.title = "   ".to_owned();
    assert_eq!(form.to_patch(NOW), Err("Title is required."));
}

#[test]
fn invalid_edit_sends_nothing() {
    let api = FakeProjects::default();
    let form = MilestoneForm { id: "m-1".to_owned(), ..MilestoneForm::default() };
    assert_eq!(block_on(edit(&api, &form, NOW)), MutationOutcome::Invalid("Title is required.".to_owned()));
    assert!(api.updates.borrow().is_empty());
}

#[test]
fn edit_keeps_existing_completion_stamp() {
    let form = MilestoneForm::from_milestone(&milestone("m-1", MilestoneStatus::Completed));
    let patch = form.to_patch(NOW).expect("valid");
    assert_eq!(patch.completed_at.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn edit_status_change_stamps_or_clears() {
    let mut form = MilestoneForm::from_milestone(&milestone("m-1", MilestoneStatus::Pending));
    form.status = MilestoneStatus::Completed;
    assert_eq!(form.to_patch(NOW).expect("valid").completed_at.as_deref(), Some(NOW));

    let mut form = MilestoneForm::from_milestone(&milestone("m-2", MilestoneStatus::Completed));
    form.status = MilestoneStatus::Pending;
    assert_eq!(form.to_patch(NOW).expect("valid").completed_at, None);
}

#[test]
fn edit_submits_full_trimmed_patch() {
    let api = FakeProjects::default();
    let mut form = MilestoneForm::from_milestone(&milestone("m-1", MilestoneStatus::Pending));
    form.title = " Frame walls ".to_owned();
    assert!(block_on(edit(&api, &form, NOW)).is_done());
    let (id, patch) = api.updates.borrow()[0].clone();
    assert_eq!(id, "m-1");
    assert_eq!(patch.title, "Frame walls");
    assert_eq!(patch.description, "Pour foundations");
}

#[test]
fn delete_reports_failure_message() {
    let api = FakeProjects::default();
    *api.error.borrow_mut() = Some(ApiError::Status { status: 404, message: "milestone.not_found".to_owned() });
    assert_eq!(block_on(delete(&api, "m-1")), MutationOutcome::Failed("milestone.not_found".to_owned()));
    assert_eq!(api.deletes.borrow().as_slice(), ["m-1".to_owned()]);
}
