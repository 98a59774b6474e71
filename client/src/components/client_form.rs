//! Modal form for creating and editing a client.

use leptos::prelude::*;

use crate::net::types::{ClientStatus, Company};
use crate::state::clients::ClientForm;

/// Which record the modal is editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientModal {
    Create,
    Edit(String),
}

impl ClientModal {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "New client",
            Self::Edit(_) => "Edit client",
        }
    }
}

#[component]
pub fn ClientFormModal(
    modal: ClientModal,
    form: RwSignal<ClientForm>,
    #[prop(into)] companies: Signal<Vec<Company>>,
    #[prop(into)] companies_loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_create = modal == ClientModal::Create;

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--client" on:click=move |ev| ev.stop_propagation() on:submit=on_form_submit>
                <h2 class="dialog__title">{modal.title()}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Company"
                    <select
                        class="dialog__input"
                        disabled=move || companies_loading.get()
                        prop:value=move || form.get().company
                        on:change=move |ev| form.update(|f| f.company = event_target_value(&ev))
                    >
                        <option value="">"None"</option>
                        {move || {
                            companies
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().status.as_str()
                        on:change=move |ev| form.update(|f| f.status = ClientStatus::parse(&event_target_value(&ev)))
                    >
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </select>
                </label>
                <Show when=move || is_create>
                    <p class="dialog__hint">"A password will be generated and shown once the client is created."</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
