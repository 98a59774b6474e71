use super::*;
use crate::state::execution::Gauge;
use crate::error::ApiError;
use crate::net::types::{BannerImage, Envelope, Milestone, MilestoneStatus};

const NOW: &str = "2026-03-01T09:30:00Z";

fn finance(id: &str, approval: ApprovalStatus) -> FinanceDocument {
    FinanceDocument {
        id: id.to_owned(),
        name: format!("{id}.pdf"),
        url: format!("https://files.example.com/{id}.pdf"),
        approval_status: approval,
        physical_execution: 40.0,
        financial_execution: 25.0,
    }
}

fn report(id: &str, approval: ApprovalStatus) -> ReportDocument {
    ReportDocument { id: id.to_owned(), name: format!("{id}.pdf"), url: String::new(), approval_status: approval }
}

fn sample_project() -> Project {
    Project {
        id: "p-1".to_owned(),
        name: "Bridge".to_owned(),
        finance_documents: vec![finance("f-1", ApprovalStatus::Pending), finance("f-2", ApprovalStatus::Approved)],
        report_documents: vec![report("r-1", ApprovalStatus::Approved), report("r-2", ApprovalStatus::Unknown)],
        banner_images: (0..3)
            .map(|i| BannerImage { id: format!("b-{i}"), url: format!("/img/{i}.jpg"), caption: None })
            .collect(),
        milestones: vec![Milestone {
            id: "m-1".to_owned(),
            title: "Survey".to_owned(),
            description: String::new(),
            status: MilestoneStatus::Pending,
            completed_at: None,
        }],
        ..Project::default()
    }
}

fn loaded(project: Project) -> ApiResult<Project> {
    Ok(Envelope { status: 200, message: String::new(), data: Some(project) })
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn fetch_seeds_sliders_and_gallery() {
    let mut state = ProjectDetailState::new("p-1");
    assert_eq!(state.apply_fetch(loaded(sample_project())), LoadOutcome::Loaded);
    assert_eq!(state.execution.document_id.as_deref(), Some("f-1"));
    assert_eq!((state.execution.physical, state.execution.financial), (40, 25));
    assert_eq!(state.gallery.len, 3);
    assert!(state.project().is_some());
}

#[test]
fn refetch_keeps_pending_slider_move_and_its_ticket() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    state.execution.begin_drag(Gauge::Physical);
    state.execution.drag_to(80.0);
    let ticket = state.autosave.arm();

    assert_eq!(state.apply_fetch(loaded(sample_project())), LoadOutcome::Loaded);
    assert_eq!(state.execution.physical, 80);
    assert!(state.autosave.take(ticket));
    let (id, patch) = state.execution.payload().expect("payload");
    assert_eq!(id, "f-1");
    assert!((patch.physical_execution - 80.0).abs() < f64::EPSILON);
}

#[test]
fn refetch_without_pending_move_reseeds_sliders() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    state.execution.set(Gauge::Physical, 80.0);
    let ticket = state.autosave.arm();
    assert!(state.autosave.take(ticket));

    let mut project = sample_project();
    project.finance_documents[0].physical_execution = 80.0;
    state.apply_fetch(loaded(project));
    assert_eq!(state.execution.physical, 80);
    assert!(!state.execution.is_dirty());
}

#[test]
fn refetch_for_other_document_drops_pending_move() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    state.execution.set(Gauge::Physical, 80.0);
    let ticket = state.autosave.arm();

    let mut project = sample_project();
    project.finance_documents.remove(0);
    state.apply_fetch(loaded(project));
    assert_eq!(state.execution.document_id.as_deref(), Some("f-2"));
    assert_eq!(state.execution.physical, 40);
    assert!(!state.autosave.take(ticket));
}

#[test]
fn fetch_failure_is_inline_error() {
    let mut state = ProjectDetailState::new("p-1");
    let outcome = state.apply_fetch(Err(ApiError::Network("down".to_owned())));
    assert_eq!(outcome, LoadOutcome::Failed(FALLBACK_MESSAGE.to_owned()));
    assert_eq!(state.view, ProjectView::Failed(FALLBACK_MESSAGE.to_owned()));
    assert!(state.project().is_none());
}

#[test]
fn fetch_401_is_unauthorized_and_keeps_view() {
    let mut state = ProjectDetailState::new("p-1");
    assert_eq!(state.apply_fetch(Err(ApiError::Unauthorized)), LoadOutcome::Unauthorized);
    assert_eq!(state.view, ProjectView::Loading);
}

#[test]
fn fetch_without_data_fails() {
    let mut state = ProjectDetailState::new("p-1");
    let outcome = state.apply_fetch(Ok(Envelope { status: 200, message: String::new(), data: None }));
    assert!(matches!(outcome, LoadOutcome::Failed(_)));
}

#[test]
fn new_state_starts_loading_for_id() {
    let state = ProjectDetailState::new("p-7");
    assert_eq!(state.project_id, "p-7");
    assert_eq!(state.view, ProjectView::Loading);
}

#[test]
fn refetch_overwrites_local_toggle() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    state.toggle_milestone_locally("m-1", NOW);
    state.apply_fetch(loaded(sample_project()));
    let project = state.project().expect("loaded");
    assert_eq!(project.milestones[0].status, MilestoneStatus::Pending);
    assert_eq!(project.milestones[0].completed_at, None);
}

#[test]
fn refetch_resets_slider_edits_and_pending_autosave() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    state.execution.set(crate::state::execution::Gauge::Physical, 90.0);
    let ticket = state.autosave.arm();
    state.apply_fetch(loaded(sample_project()));
    assert_eq!(state.execution.physical, 40);
    assert!(!state.autosave.take(ticket));
}

// =============================================================
// Milestone toggle
// =============================================================

#[test]
fn local_toggle_patches_list_and_returns_payload() {
    let mut state = ProjectDetailState::new("p-1");
    state.apply_fetch(loaded(sample_project()));
    let patch = state.toggle_milestone_locally("m-1", NOW).expect("patch");
    assert_eq!(patch.status, MilestoneStatus::Completed);
    let milestone = &state.project().expect("loaded").milestones[0];
    assert_eq!(milestone.status, MilestoneStatus::Completed);
    assert_eq!(milestone.completed_at.as_deref(), Some(NOW));
}

#[test]
fn local_toggle_without_project_or_unknown_id_is_none() {
    let mut state = ProjectDetailState::new("p-1");
    assert_eq!(state.toggle_milestone_locally("m-1", NOW), None);
    state.apply_fetch(loaded(sample_project()));
    assert_eq!(state.toggle_milestone_locally("nope", NOW), None);
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn only_approved_documents_are_listed() {
    let project = sample_project();
    let finance: Vec<&str> = approved_finance_documents(&project).iter().map(|d| d.id.as_str()).collect();
    let reports: Vec<&str> = approved_reports(&project).iter().map(|d| d.id.as_str()).collect();
    assert_eq!(finance, vec!["f-2"]);
    assert_eq!(reports, vec!["r-1"]);
}

#[test]
fn team_rows_fall_back_when_label_missing() {
    let members = vec![
        TeamMember { id: "t-1".to_owned(), name: "Ana".to_owned(), role: Some("Engineer".to_owned()) },
        TeamMember { id: "t-2".to_owned(), name: "Bo".to_owned(), role: None },
        TeamMember { id: "t-3".to_owned(), name: "Cy".to_owned(), role: Some("  ".to_owned()) },
    ];
    let labels: Vec<String> = member_rows(&members).into_iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Engineer", ROLE_FALLBACK, ROLE_FALLBACK]);

    let owners = vec![Owner { id: "o-1".to_owned(), name: "Dee".to_owned(), category: None }];
    assert_eq!(owner_rows(&owners), vec![TeamRow { name: "Dee".to_owned(), label: ROLE_FALLBACK.to_owned() }]);
}
