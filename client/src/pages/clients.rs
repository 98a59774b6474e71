//! Client list for one segment (`/clients/{segment}`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the current page once the session is restored and on every
//! segment or page change. Create, edit, and delete go through the modal and
//! table; each successful mutation re-fetches the page exactly once inside
//! the state flow. Flows run on a copy of the list; a copy that finishes after
//! the segment or page moved on only contributes generated credentials. A 401
//! anywhere expires the session.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::client_form::{ClientFormModal, ClientModal};
use crate::components::client_table::{ClientTable, Pager};
use crate::components::toast_stack::announce;
use crate::components::top_bar::TopBar;
use crate::net::api::HttpApi;
use crate::net::types::Client;
use crate::state::clients::{ClientForm, ClientListState, CompaniesState, DEFAULT_SEGMENT};
use crate::state::notify::NotifyState;
use crate::state::outcome::{LoadOutcome, MutationOutcome};
use crate::state::session::SessionState;
use crate::util::auth::{expire_session, install_unauth_redirect};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let list = RwSignal::new(ClientListState::default());
    let companies = RwSignal::new(CompaniesState::default());
    let modal = RwSignal::new(None::<ClientModal>);
    let form = RwSignal::new(ClientForm::default());
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_unauth_redirect(session, navigate);

    let ready = Memo::new(move |_| session.with(|s| s.restored && s.is_authenticated()));
    let segment = move || params.read().get("segment").unwrap_or_else(|| DEFAULT_SEGMENT.to_owned());

    let load = move || {
        list.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let mut next = list.get_untracked();
            let outcome = next.refresh(&api).await;
            list.update(|s| {
                s.adopt(next);
            });
            if outcome == LoadOutcome::Unauthorized {
                expire_session(session);
            }
        });
    };

    Effect::new(move || {
        if !ready.get() {
            return;
        }
        let category = segment();
        list.update(|s| {
            s.set_category(&category);
        });
        load();
    });

    Effect::new(move || {
        if !ready.get() {
            return;
        }
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let mut next = companies.get_untracked();
            next.load(&api).await;
            companies.set(next);
        });
    });

    let settle = move |outcome: &MutationOutcome| {
        match outcome {
            MutationOutcome::Invalid(message) => form_error.set(Some(message.clone())),
            MutationOutcome::Done { .. } => {
                modal.set(None);
                form_error.set(None);
            }
            MutationOutcome::Unauthorized => expire_session(session),
            MutationOutcome::Failed(_) => {}
        }
        announce(notify, outcome.notice());
    };

    let on_create = move |_| {
        form.set(ClientForm::default());
        form_error.set(None);
        modal.set(Some(ClientModal::Create));
    };

    let on_edit = Callback::new(move |client: Client| {
        form.set(ClientForm::from_client(&client));
        form_error.set(None);
        modal.set(Some(ClientModal::Edit(client.id)));
    });

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let mut next = list.get_untracked();
            let outcome = next.delete(&api, &id).await;
            list.update(|s| {
                s.adopt(next);
            });
            settle(&outcome);
        });
    });

    let on_submit = Callback::new(move |()| {
        let Some(mode) = modal.get_untracked() else {
            return;
        };
        busy.set(true);
        let fields = form.get_untracked();
        leptos::task::spawn_local(async move {
            let api = HttpApi::for_session(&session.get_untracked());
            let mut next = list.get_untracked();
            let outcome = match &mode {
                ClientModal::Create => next.create(&api, &fields).await,
                ClientModal::Edit(id) => next.update(&api, id, &fields).await,
            };
            list.update(|s| {
                s.adopt(next);
            });
            settle(&outcome);
            busy.set(false);
        });
    });

    let on_cancel = Callback::new(move |()| modal.set(None));

    let on_prev = Callback::new(move |()| {
        let mut moved = false;
        list.update(|s| moved = s.prev_page());
        if moved {
            load();
        }
    });

    let on_next = Callback::new(move |()| {
        let mut moved = false;
        list.update(|s| moved = s.next_page());
        if moved {
            load();
        }
    });

    let rows = Signal::derive(move || list.with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>()));

    view! {
        <div class="page page--clients">
            <TopBar/>
            <main class="page__body">
                <div class="page__header">
                    <h1 class="page__title">{move || format!("Clients: {}", segment())}</h1>
                    <button class="btn btn--primary" on:click=on_create>
                        "New client"
                    </button>
                </div>
                <Show when=move || list.get().error.is_some()>
                    <p class="page__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                {move || {
                    list.get()
                        .credentials
                        .map(|creds| {
                            view! {
                                <div class="credentials">
                                    <p class="credentials__message">{creds.message}</p>
                                    <p>"Email: " <code>{creds.email}</code></p>
                                    <p>"Password: " <code>{creds.password}</code></p>
                                    <button class="btn btn--small" on:click=move |_| list.update(ClientListState::dismiss_credentials)>
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}
                <ClientTable
                    rows=rows
                    loading=Signal::derive(move || list.get().loading)
                    on_edit=on_edit
                    on_delete=on_delete
                />
                <Pager
                    page=Signal::derive(move || list.get().page)
                    total_pages=Signal::derive(move || list.get().total_pages)
                    on_prev=on_prev
                    on_next=on_next
                />
            </main>
            {move || {
                modal
                    .get()
                    .map(|mode| {
                        view! {
                            <ClientFormModal
                                modal=mode
                                form=form
                                companies=Signal::derive(move || companies.get().items)
                                companies_loading=Signal::derive(move || companies.get().loading)
                                error=form_error
                                busy=busy
                                on_submit=on_submit
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}
