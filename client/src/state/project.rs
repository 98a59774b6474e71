//! Project detail aggregate and its derived views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetched once on mount and again after milestone edits and deletes. A fetch
//! replaces the whole aggregate and re-seeds the execution sliders and the
//! gallery, except that slider values with a pending autosave survive it. A
//! failed fetch leaves the page in `Failed` with no retry.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::error::FALLBACK_MESSAGE;
use crate::net::api::ApiResult;
use crate::net::types::{ApprovalStatus, FinanceDocument, MilestonePatch, Owner, Project, ReportDocument, TeamMember};

use super::execution::{DebounceGate, ExecutionState};
use super::gallery::GalleryViewer;
use super::milestones::{apply_patch, toggled_patch};
use super::outcome::LoadOutcome;

/// Label shown when a member has no role or an owner no category.
pub const ROLE_FALLBACK: &str = "Not assigned";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProjectView {
    #[default]
    Loading,
    Ready(Project),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDetailState {
    pub project_id: String,
    pub view: ProjectView,
    pub execution: ExecutionState,
    pub gallery: GalleryViewer,
    pub autosave: DebounceGate,
}

impl ProjectDetailState {
    pub fn new(project_id: &str) -> Self {
        Self { project_id: project_id.to_owned(), ..Self::default() }
    }

    pub fn project(&self) -> Option<&Project> {
        match &self.view {
            ProjectView::Ready(project) => Some(project),
            _ => None,
        }
    }

    /// Apply a fetch result. On success the sliders and gallery restart from the new data
    /// unless an autosave is still pending for the same document.
    pub fn apply_fetch(&mut self, result: ApiResult<Project>) -> LoadOutcome {
        match result {
            Ok(envelope) if envelope.is_success() => {
                let Some(project) = envelope.data else {
                    self.view = ProjectView::Failed(FALLBACK_MESSAGE.to_owned());
                    return LoadOutcome::Failed(FALLBACK_MESSAGE.to_owned());
                };
                let mut execution = ExecutionState::from_documents(&project.finance_documents);
                // An unsaved movement keeps its values and its timer.
                if !(self.autosave.is_pending() && execution.carry_unsaved(&self.execution)) {
                    self.autosave.cancel();
                }
                self.execution = execution;
                self.gallery = GalleryViewer::new(project.banner_images.len());
                self.view = ProjectView::Ready(project);
                LoadOutcome::Loaded
            }
            Ok(envelope) => {
                let message = if envelope.message.trim().is_empty() { FALLBACK_MESSAGE.to_owned() } else { envelope.message };
                self.view = ProjectView::Failed(message.clone());
                LoadOutcome::Failed(message)
            }
            Err(e) => {
                let outcome = LoadOutcome::from_error(&e);
                if let LoadOutcome::Failed(message) = &outcome {
                    self.view = ProjectView::Failed(message.clone());
                }
                outcome
            }
        }
    }

    /// Flip milestone `id` in the local list and return the patch to send.
    pub fn toggle_milestone_locally(&mut self, id: &str, now: &str) -> Option<MilestonePatch> {
        let ProjectView::Ready(project) = &mut self.view else {
            return None;
        };
        let milestone = project.milestones.iter().find(|m| m.id == id)?;
        let patch = toggled_patch(milestone, now);
        apply_patch(&mut project.milestones, id, &patch);
        Some(patch)
    }
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

pub fn approved_finance_documents(project: &Project) -> Vec<&FinanceDocument> {
    project.finance_documents.iter().filter(|d| d.approval_status == ApprovalStatus::Approved).collect()
}

pub fn approved_reports(project: &Project) -> Vec<&ReportDocument> {
    project.report_documents.iter().filter(|d| d.approval_status == ApprovalStatus::Approved).collect()
}

/// One rendered row of a team list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRow {
    pub name: String,
    pub label: String,
}

fn label_or_fallback(raw: Option<&str>) -> String {
    raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(ROLE_FALLBACK).to_owned()
}

pub fn member_rows(members: &[TeamMember]) -> Vec<TeamRow> {
    members
        .iter()
        .map(|m| TeamRow { name: m.name.clone(), label: label_or_fallback(m.role.as_deref()) })
        .collect()
}

pub fn owner_rows(owners: &[Owner]) -> Vec<TeamRow> {
    owners
        .iter()
        .map(|o| TeamRow { name: o.name.clone(), label: label_or_fallback(o.category.as_deref()) })
        .collect()
}
