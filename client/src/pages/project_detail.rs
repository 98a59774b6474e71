//! Project detail page (`/projects/{id}`).
//!
//! SYSTEM CONTEXT
//! ==============
//! One fetch on mount; milestone edits and deletes re-fetch. The milestone
//! toggle patches the local list first and then sends the same patch.
//! Slider movements re-arm the autosave gate; the timer task spawned for a
//! movement only persists if its ticket is still current when it wakes.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch renders inline with no retry. Mutation failures surface as
//! toasts. Any 401 expires the session.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::document_list::{DocumentLink, DocumentList};
use crate::components::execution_slider::ExecutionSlider;
use crate::components::image_gallery::ImageGallery;
use crate::components::milestone_list::{MilestoneEditor, MilestoneList};
use crate::components::toast_stack::announce;
use crate::components::team_list::TeamList;
use crate::components::top_bar::TopBar;
use crate::config::AUTOSAVE_DEBOUNCE_MS;
use crate::net::api::{HttpApi, ProjectsApi};
use crate::net::types::Milestone;
use crate::state::execution::{self, Gauge};
use crate::state::milestones::{self, MilestoneForm};
use crate::state::notify::NotifyState;
use crate::state::outcome::{LoadOutcome, MutationOutcome};
use crate::state::project::{
    ProjectDetailState, ProjectView, approved_finance_documents, approved_reports, member_rows, owner_rows,
};
use crate::state::session::SessionState;
use crate::util::auth::{expire_session, install_unauth_redirect};
use crate::util::clock::{now_rfc3339, sleep_ms};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let state = RwSignal::new(ProjectDetailState::default());
    let editor_open = RwSignal::new(false);
    let editor_form = RwSignal::new(MilestoneForm::default());
    let editor_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_unauth_redirect(session, navigate);

    let ready = Memo::new(move |_| session.with(|s| s.restored && s.is_authenticated()));
    let project_id = move || params.read().get("id").unwrap_or_default();
    let project = Memo::new(move |_| state.with(|s| s.project().cloned()));

    let fetch = move || {
        let id = state.with_untracked(|s| s.project_id.clone());
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let result = api.fetch_project(&id).await;
            let mut outcome = LoadOutcome::Loaded;
            state.update(|s| outcome = s.apply_fetch(result));
            if outcome == LoadOutcome::Unauthorized {
                expire_session(session);
            }
        });
    };

    Effect::new(move || {
        if !ready.get() {
            return;
        }
        state.set(ProjectDetailState::new(&project_id()));
        fetch();
    });

    // Shared handling for milestone and execution mutations. Returns whether it succeeded.
    let settle = move |outcome: &MutationOutcome, quiet_success: bool| -> bool {
        match outcome {
            MutationOutcome::Unauthorized => expire_session(session),
            MutationOutcome::Done { .. } if quiet_success => {}
            _ => announce(notify, outcome.notice()),
        }
        outcome.is_done()
    };

    // =========================================================================
    // EXECUTION
    // =========================================================================

    let on_slider_change = Callback::new(move |()| {
        let mut ticket = None;
        state.update(|s| ticket = Some(s.autosave.arm()));
        let Some(ticket) = ticket else {
            return;
        };
        leptos::task::spawn_local(async move {
            sleep_ms(AUTOSAVE_DEBOUNCE_MS).await;
            let mut fire = false;
            state.update(|s| fire = s.autosave.take(ticket));
            if !fire {
                return;
            }
            let api = HttpApi::for_session(&session.get_untracked());
            let snapshot = state.with_untracked(|s| s.execution.clone());
            let outcome = execution::persist(&api, &snapshot).await;
            settle(&outcome, true);
        });
    });

    let on_save_execution = move |_| {
        state.update(|s| s.autosave.cancel());
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let snapshot = state.with_untracked(|s| s.execution.clone());
            let outcome = execution::persist(&api, &snapshot).await;
            settle(&outcome, false);
        });
    };

    let on_cancel_execution = move |_| {
        state.update(|s| {
            s.autosave.cancel();
            s.execution.cancel();
        });
    };

    // =========================================================================
    // MILESTONES
    // =========================================================================

    let on_toggle = Callback::new(move |id: String| {
        let now = now_rfc3339();
        let mut patch = None;
        state.update(|s| patch = s.toggle_milestone_locally(&id, &now));
        let Some(patch) = patch else {
            return;
        };
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let outcome = milestones::send_patch(&api, &id, &patch).await;
            settle(&outcome, true);
        });
    });

    let on_edit = Callback::new(move |milestone: Milestone| {
        editor_form.set(MilestoneForm::from_milestone(&milestone));
        editor_error.set(None);
        editor_open.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let outcome = milestones::delete(&api, &id).await;
            if settle(&outcome, false) {
                fetch();
            }
        });
    });

    let on_editor_submit = Callback::new(move |()| {
        busy.set(true);
        let form = editor_form.get_untracked();
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let outcome = milestones::edit(&api, &form, &now_rfc3339()).await;
            if let MutationOutcome::Invalid(message) = &outcome {
                editor_error.set(Some(message.clone()));
            }
            if settle(&outcome, false) {
                editor_open.set(false);
                fetch();
            }
            busy.set(false);
        });
    });

    let on_editor_cancel = Callback::new(move |()| editor_open.set(false));

    // =========================================================================
    // DERIVED
    // =========================================================================

    let documents = Signal::derive(move || {
        project
            .get()
            .map(|p| {
                approved_finance_documents(&p)
                    .into_iter()
                    .map(|d| DocumentLink { name: d.name.clone(), url: d.url.clone() })
                    .collect()
            })
            .unwrap_or_default()
    });
    let reports = Signal::derive(move || {
        project
            .get()
            .map(|p| {
                approved_reports(&p)
                    .into_iter()
                    .map(|d| DocumentLink { name: d.name.clone(), url: d.url.clone() })
                    .collect()
            })
            .unwrap_or_default()
    });
    let members = Signal::derive(move || project.get().map(|p| member_rows(&p.team_members)).unwrap_or_default());
    let owners = Signal::derive(move || project.get().map(|p| owner_rows(&p.owners)).unwrap_or_default());
    let images = Signal::derive(move || project.get().map(|p| p.banner_images).unwrap_or_default());
    let milestone_rows = Signal::derive(move || project.get().map(|p| p.milestones).unwrap_or_default());
    let can_edit_execution = move || state.with(|s| s.execution.can_drag());

    view! {
        <div class="page page--project">
            <TopBar/>
            <main class="page__body">
                <Show when=move || state.with(|s| s.view == ProjectView::Loading)>
                    <p class="page__loading">"Loading project..."</p>
                </Show>
                {move || {
                    state
                        .with(|s| match &s.view {
                            ProjectView::Failed(message) => Some(message.clone()),
                            _ => None,
                        })
                        .map(|message| view! { <p class="page__error">{message}</p> })
                }}
                {move || {
                    project
                        .get()
                        .map(|p| {
                            view! {
                                <header class="project-header">
                                    <h1 class="page__title">{p.name}</h1>
                                    <span class=format!("project-header__status project-header__status--{}", p.status.label().to_lowercase())>
                                        {p.status.label()}
                                    </span>
                                    <dl class="project-header__meta">
                                        <dt>"Business area"</dt>
                                        <dd>{p.business_area}</dd>
                                        <dt>"Location"</dt>
                                        <dd>{p.location}</dd>
                                    </dl>
                                    <p class="project-header__description">{p.description}</p>
                                </header>
                            }
                        })
                }}
                <Show when=move || project.get().is_some()>
                    <ImageGallery images=images state=state/>
                    <section class="execution">
                        <h2 class="section-title">"Execution"</h2>
                        <ExecutionSlider gauge=Gauge::Physical state=state on_change=on_slider_change/>
                        <ExecutionSlider gauge=Gauge::Financial state=state on_change=on_slider_change/>
                        <div class="execution__actions">
                            <button class="btn" disabled=move || !can_edit_execution() on:click=on_cancel_execution>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" disabled=move || !can_edit_execution() on:click=on_save_execution>
                                "Save"
                            </button>
                        </div>
                    </section>
                    <div class="project-columns">
                        <DocumentList title="Finance documents" documents=documents/>
                        <DocumentList title="Reports" documents=reports/>
                    </div>
                    <MilestoneList milestones=milestone_rows on_toggle=on_toggle on_edit=on_edit on_delete=on_delete/>
                    <div class="project-columns">
                        <TeamList title="Team" rows=members/>
                        <TeamList title="Owners" rows=owners/>
                    </div>
                </Show>
            </main>
            <Show when=move || editor_open.get()>
                <MilestoneEditor
                    form=editor_form
                    error=editor_error
                    busy=busy
                    on_submit=on_editor_submit
                    on_cancel=on_editor_cancel
                />
            </Show>
        </div>
    }
}
