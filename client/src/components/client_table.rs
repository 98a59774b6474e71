//! Client rows with edit/delete actions and a previous/next pager.

use leptos::prelude::*;

use crate::net::types::Client;

#[component]
pub fn ClientTable(
    #[prop(into)] rows: Signal<Vec<Client>>,
    #[prop(into)] loading: Signal<bool>,
    on_edit: Callback<Client>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="client-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Company"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || !loading.get() && rows.get().is_empty()>
                    <tr>
                        <td class="client-table__empty" colspan="6">"No clients found."</td>
                    </tr>
                </Show>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|client| {
                            let id = client.id.clone();
                            let status = client.status.as_str();
                            let edit_target = client.clone();
                            view! {
                                <tr>
                                    <td>{client.name}</td>
                                    <td>{client.email}</td>
                                    <td>{client.phone}</td>
                                    <td>{client.company.unwrap_or_default()}</td>
                                    <td class=format!("client-table__status client-table__status--{status}")>{status}</td>
                                    <td class="client-table__actions">
                                        <button class="btn btn--small" on:click=move |_| on_edit.run(edit_target.clone())>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button class="btn" disabled=move || page.get() <= 1 on:click=move |_| on_prev.run(())>
                "Previous"
            </button>
            <span class="pager__label">{move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}</span>
            <button class="btn" disabled=move || page.get() >= total_pages.get() on:click=move |_| on_next.run(())>
                "Next"
            </button>
        </div>
    }
}
