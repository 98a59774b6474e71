//! Approved documents with a download action per row.

use leptos::prelude::*;

use crate::util::download::trigger_download;

/// Display name and file URL of one downloadable document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentLink {
    pub name: String,
    pub url: String,
}

#[component]
pub fn DocumentList(#[prop(into)] title: String, #[prop(into)] documents: Signal<Vec<DocumentLink>>) -> impl IntoView {
    view! {
        <section class="document-list">
            <h3 class="document-list__title">{title}</h3>
            <Show when=move || documents.get().is_empty()>
                <p class="document-list__empty">"No approved documents."</p>
            </Show>
            <ul>
                {move || {
                    documents
                        .get()
                        .into_iter()
                        .map(|doc| {
                            let DocumentLink { name, url } = doc.clone();
                            view! {
                                <li class="document-list__row">
                                    <span class="document-list__name">{doc.name}</span>
                                    <button class="btn btn--small" on:click=move |_| trigger_download(&url, &name)>
                                        "Download"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
