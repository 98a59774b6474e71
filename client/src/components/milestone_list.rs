//! Milestone rows with toggle/edit/delete, plus the edit dialog.

use leptos::prelude::*;

use crate::net::types::{Milestone, MilestoneStatus};
use crate::state::milestones::MilestoneForm;

#[component]
pub fn MilestoneList(
    #[prop(into)] milestones: Signal<Vec<Milestone>>,
    on_toggle: Callback<String>,
    on_edit: Callback<Milestone>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="milestones">
            <h2 class="section-title">"Milestones"</h2>
            <Show when=move || milestones.get().is_empty()>
                <p class="milestones__empty">"No milestones yet."</p>
            </Show>
            <ul class="milestones__list">
                {move || {
                    milestones
                        .get()
                        .into_iter()
                        .map(|milestone| {
                            let done = milestone.status == MilestoneStatus::Completed;
                            let toggle_id = milestone.id.clone();
                            let delete_id = milestone.id.clone();
                            let edit_target = milestone.clone();
                            view! {
                                <li class="milestones__item" class:milestones__item--done=done>
                                    <label class="milestones__toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=done
                                            on:change=move |_| on_toggle.run(toggle_id.clone())
                                        />
                                        <span class="milestones__title">{milestone.title}</span>
                                    </label>
                                    <p class="milestones__description">{milestone.description}</p>
                                    <span class="milestones__status">{milestone.status.label()}</span>
                                    <span class="milestones__completed-at">{milestone.completed_at.unwrap_or_default()}</span>
                                    <div class="milestones__actions">
                                        <button class="btn btn--small" on:click=move |_| on_edit.run(edit_target.clone())>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                                            "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn MilestoneEditor(
    form: RwSignal<MilestoneForm>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog dialog--milestone" on:click=move |ev| ev.stop_propagation() on:submit=on_form_submit>
                <h2 class="dialog__title">"Edit milestone"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || {
                            match form.get().status {
                                MilestoneStatus::Pending => "pending",
                                MilestoneStatus::Completed => "completed",
                            }
                        }
                        on:change=move |ev| {
                            let status = if event_target_value(&ev) == "completed" {
                                MilestoneStatus::Completed
                            } else {
                                MilestoneStatus::Pending
                            };
                            form.update(|f| f.status = status);
                        }
                    >
                        <option value="pending">"Pending"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                </label>
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
