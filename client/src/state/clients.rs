//! Client list state: pagination, segment filter, and CRUD flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is a cache of the last successful page fetch. Every successful
//! mutation replaces it wholesale with exactly one re-fetch; nothing is
//! patched locally.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from the list fetch or a mutation yields an `Unauthorized` outcome
//! and the page forces a logout. Companies failures are `Ignored`.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use crate::config::CLIENT_PAGE_SIZE;
use crate::error::FALLBACK_MESSAGE;
use crate::net::api::{ClientQuery, ClientsApi};
use crate::net::types::{Client, ClientDraft, ClientPatch, ClientStatus, Company};

use super::outcome::{LoadOutcome, MutationOutcome};

/// Segment shown at `/`.
pub const DEFAULT_SEGMENT: &str = "individual";

/// Client segments offered in the navigation: category tag and label.
pub const SEGMENTS: [(&str, &str); 2] = [(DEFAULT_SEGMENT, "Individuals"), ("business", "Businesses")];

const GENERATED_PASSWORD_LEN: usize = 12;

// =============================================================================
// FORM
// =============================================================================

/// Modal form fields, shared by create and edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
}

impl ClientForm {
    /// Pre-fill from an existing row for editing.
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            company: client.company.clone().unwrap_or_default(),
            status: client.status,
        }
    }

    /// Name and email are required after trimming.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required.");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.");
        }
        Ok(())
    }

    fn company(&self) -> Option<String> {
        let company = self.company.trim();
        (!company.is_empty()).then(|| company.to_owned())
    }

    pub fn to_draft(&self, category: &str, password: String) -> ClientDraft {
        ClientDraft {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            category: category.to_owned(),
            company: self.company(),
            status: self.status,
            password,
        }
    }

    pub fn to_patch(&self, category: &str) -> ClientPatch {
        ClientPatch {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            category: category.to_owned(),
            company: self.company(),
            status: self.status,
        }
    }
}

/// Random initial password for a new client.
pub fn generate_password() -> String {
    uuid::Uuid::new_v4().simple().to_string().chars().take(GENERATED_PASSWORD_LEN).collect()
}

/// Shown once after a successful create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCredentials {
    pub email: String,
    pub password: String,
    pub message: String,
}

// =============================================================================
// LIST
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientListState {
    pub category: String,
    /// 1-based.
    pub page: u32,
    pub items: Vec<Client>,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub credentials: Option<GeneratedCredentials>,
}

impl Default for ClientListState {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT)
    }
}

impl ClientListState {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_owned(),
            page: 1,
            items: Vec::new(),
            total_pages: 0,
            loading: false,
            error: None,
            credentials: None,
        }
    }

    pub fn query(&self) -> ClientQuery {
        ClientQuery { category: self.category.clone(), page: self.page, limit: CLIENT_PAGE_SIZE }
    }

    /// Rows for the current segment. The server filters by `type` too; rows
    /// from any other segment are dropped here as well.
    pub fn visible(&self) -> Vec<&Client> {
        self.items.iter().filter(|c| c.category == self.category).collect()
    }

    /// Switch segment and return to the first page. Returns `false` when unchanged.
    pub fn set_category(&mut self, category: &str) -> bool {
        if self.category == category {
            return false;
        }
        category.clone_into(&mut self.category);
        self.page = 1;
        self.items.clear();
        self.total_pages = 0;
        true
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Fetch the current page and replace the cache.
    pub async fn refresh<A: ClientsApi>(&mut self, api: &A) -> LoadOutcome {
        self.loading = true;
        let result = api.list_clients(&self.query()).await;
        self.loading = false;
        match result {
            Ok(envelope) if envelope.is_success() => {
                let page = envelope.data.unwrap_or_default();
                self.items = page.clients;
                self.total_pages = page.total_pages;
                self.error = None;
                LoadOutcome::Loaded
            }
            Ok(envelope) => {
                let message = if envelope.message.trim().is_empty() { FALLBACK_MESSAGE.to_owned() } else { envelope.message };
                self.error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
            Err(e) => {
                let outcome = LoadOutcome::from_error(&e);
                if let LoadOutcome::Failed(message) = &outcome {
                    self.error = Some(message.clone());
                }
                outcome
            }
        }
    }

    /// Create a client with a generated password, then re-fetch once.
    pub async fn create<A: ClientsApi>(&mut self, api: &A, form: &ClientForm) -> MutationOutcome {
        self.create_with_password(api, form, generate_password()).await
    }

    pub async fn create_with_password<A: ClientsApi>(
        &mut self,
        api: &A,
        form: &ClientForm,
        password: String,
    ) -> MutationOutcome {
        if let Err(message) = form.validate() {
            return MutationOutcome::Invalid(message.to_owned());
        }
        let draft = form.to_draft(&self.category, password);
        let outcome = MutationOutcome::from_result(api.create_client(&draft).await, "Client created.");
        if let MutationOutcome::Done { message } = &outcome {
            self.credentials = Some(GeneratedCredentials {
                email: draft.email.clone(),
                password: draft.password.clone(),
                message: message.clone(),
            });
            self.refresh(api).await;
        }
        outcome
    }

    /// Save edits (no password), then re-fetch once.
    pub async fn update<A: ClientsApi>(&mut self, api: &A, id: &str, form: &ClientForm) -> MutationOutcome {
        if let Err(message) = form.validate() {
            return MutationOutcome::Invalid(message.to_owned());
        }
        let patch = form.to_patch(&self.category);
        let outcome = MutationOutcome::from_result(api.update_client(id, &patch).await, "Client updated.");
        if outcome.is_done() {
            self.refresh(api).await;
        }
        outcome
    }

    pub async fn delete<A: ClientsApi>(&mut self, api: &A, id: &str) -> MutationOutcome {
        let outcome = MutationOutcome::from_result(api.delete_client(id).await, "Client deleted.");
        if outcome.is_done() {
            self.refresh(api).await;
        }
        outcome
    }

    /// Take the results of a flow run on a copy of this state. Rows from a
    /// copy whose segment or page is no longer current are dropped; generated
    /// credentials are always kept. Returns `true` when the rows were applied.
    pub fn adopt(&mut self, finished: ClientListState) -> bool {
        if finished.credentials.is_some() {
            self.credentials = finished.credentials;
        }
        if finished.category != self.category || finished.page != self.page {
            return false;
        }
        self.items = finished.items;
        self.total_pages = finished.total_pages;
        self.loading = finished.loading;
        self.error = finished.error;
        true
    }

    pub fn dismiss_credentials(&mut self) {
        self.credentials = None;
    }
}

// =============================================================================
// COMPANIES
// =============================================================================

/// Companies dropdown source with its own loading flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompaniesState {
    pub items: Vec<Company>,
    pub loading: bool,
}

impl CompaniesState {
    /// Load companies. Failures are logged and leave the list unchanged.
    pub async fn load<A: ClientsApi>(&mut self, api: &A) -> LoadOutcome {
        self.loading = true;
        let result = api.list_companies().await;
        self.loading = false;
        match result {
            Ok(envelope) if envelope.is_success() => {
                self.items = envelope.data.unwrap_or_default();
                LoadOutcome::Loaded
            }
            Ok(envelope) => ignored(format!("companies status {}", envelope.status)),
            Err(e) => ignored(e.to_string()),
        }
    }
}

fn ignored(reason: String) -> LoadOutcome {
    leptos::logging::warn!("companies load ignored: {reason}");
    LoadOutcome::Ignored(reason)
}
