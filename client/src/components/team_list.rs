//! Name plus role/category rows for project members and owners.

use leptos::prelude::*;

use crate::state::project::TeamRow;

#[component]
pub fn TeamList(#[prop(into)] title: String, #[prop(into)] rows: Signal<Vec<TeamRow>>) -> impl IntoView {
    view! {
        <section class="team-list">
            <h3 class="team-list__title">{title}</h3>
            <ul>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <li class="team-list__row">
                                    <span class="team-list__name">{row.name}</span>
                                    <span class="team-list__label">{row.label}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
