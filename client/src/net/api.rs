//! REST API traits and the browser HTTP implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpApi`] returns
//! [`ApiError::Unavailable`]; flows are exercised against in-test fakes that
//! implement the traits below.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<Envelope<T>, ApiError>`. Status-code
//! classification is a pure function so it can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::session::SessionState;

use super::types::{
    ClientDraft, ClientPage, ClientPatch, Company, Envelope, ExecutionPatch, LoginData, LoginRequest,
    MilestonePatch, Project, ResetPasswordRequest, VerifyOtpRequest,
};

pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

// =============================================================================
// BACKEND TRAITS
// =============================================================================

/// Unauthenticated account endpoints (login and OTP recovery).
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginData>;
    async fn request_recovery_code(&self, email: &str) -> ApiResult<serde_json::Value>;
    async fn verify_otp(&self, request: &VerifyOtpRequest) -> ApiResult<serde_json::Value>;
    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<serde_json::Value>;
}

/// Query for one page of the client list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientQuery {
    pub category: String,
    pub page: u32,
    pub limit: u32,
}

/// Client CRUD and the companies dropdown source.
#[allow(async_fn_in_trait)]
pub trait ClientsApi {
    async fn list_clients(&self, query: &ClientQuery) -> ApiResult<ClientPage>;
    async fn create_client(&self, draft: &ClientDraft) -> ApiResult<serde_json::Value>;
    async fn update_client(&self, id: &str, patch: &ClientPatch) -> ApiResult<serde_json::Value>;
    async fn delete_client(&self, id: &str) -> ApiResult<serde_json::Value>;
    async fn list_companies(&self) -> ApiResult<Vec<Company>>;
}

/// Project aggregate plus milestone and finance-execution mutations.
#[allow(async_fn_in_trait)]
pub trait ProjectsApi {
    async fn fetch_project(&self, id: &str) -> ApiResult<Project>;
    async fn update_milestone(&self, id: &str, patch: &MilestonePatch) -> ApiResult<serde_json::Value>;
    async fn delete_milestone(&self, id: &str) -> ApiResult<serde_json::Value>;
    async fn update_execution(&self, document_id: &str, patch: &ExecutionPatch) -> ApiResult<serde_json::Value>;
}

// =============================================================================
// ENDPOINTS
// =============================================================================

const LOGIN_PATH: &str = "/users/login";
const FORGOT_PASSWORD_PATH: &str = "/users/forgot-password";
const VERIFY_OTP_PATH: &str = "/users/verify-otp";
const RESET_PASSWORD_PATH: &str = "/users/reset-password";
const CLIENTS_PATH: &str = "/clients";
const COMPANIES_PATH: &str = "/companies";

fn client_endpoint(id: &str) -> String {
    format!("/clients/{id}")
}

fn project_endpoint(id: &str) -> String {
    format!("/projects/{id}")
}

fn milestone_update_endpoint(id: &str) -> String {
    format!("/additional/milestone/update/{id}")
}

fn milestone_delete_endpoint(id: &str) -> String {
    format!("/additional/milestone/delete/{id}")
}

fn finance_endpoint(document_id: &str) -> String {
    format!("/finance/{document_id}")
}

fn client_list_params(query: &ClientQuery) -> Vec<(&'static str, String)> {
    vec![
        ("type", query.category.clone()),
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ]
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// RESPONSE CLASSIFICATION
// =============================================================================

/// Map an HTTP status and raw body to an envelope or an [`ApiError`].
///
/// A 401 either as the HTTP status or as the envelope status is
/// [`ApiError::Unauthorized`]. Other non-2xx statuses carry the envelope's
/// `message` when the body has one. A missing envelope status is filled from
/// the HTTP status.
///
/// # Errors
///
/// Returns an error for 401, any non-2xx status, or an undecodable 2xx body.
pub fn classify_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .map(|env| env.message)
            .unwrap_or_default();
        return Err(ApiError::Status { status, message });
    }
    if body.trim().is_empty() {
        return Ok(Envelope { status, message: String::new(), data: None });
    }
    let mut envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.status == 0 {
        envelope.status = status;
    }
    if envelope.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    Ok(envelope)
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Post,
    Put,
    Patch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Bearer,
    Anonymous,
}

/// Backend client bound to a base URL and an optional bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    config: ClientConfig,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    /// Client for the unauthenticated account endpoints.
    pub fn anonymous() -> Self {
        Self::new(ClientConfig::from_build_env(), None)
    }

    /// Client carrying the session's bearer token, if any.
    pub fn for_session(session: &SessionState) -> Self {
        Self::new(ClientConfig::from_build_env(), session.token.clone())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&'static str, String)]) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.api_url(path);
            let builder = self
                .authorize(gloo_net::http::Request::get(&url), Auth::Bearer)
                .query(params.iter().map(|(k, v)| (*k, v.as_str())));
            http::send(builder).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.api_url(path);
            let builder = self.authorize(gloo_net::http::Request::delete(&url), Auth::Bearer);
            http::send(builder).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_body<T: DeserializeOwned, B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.api_url(path);
            let builder = match verb {
                Verb::Post => gloo_net::http::Request::post(&url),
                Verb::Put => gloo_net::http::Request::put(&url),
                Verb::Patch => gloo_net::http::Request::patch(&url),
            };
            http::send_json(self.authorize(builder, auth), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body, auth);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder, auth: Auth) -> gloo_net::http::RequestBuilder {
        match (auth, self.token.as_deref()) {
            (Auth::Bearer, Some(token)) => builder.header("Authorization", &bearer(token)),
            _ => builder,
        }
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiResult, classify_response};
    use crate::error::ApiError;

    pub(super) async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    pub(super) async fn send_json<T: DeserializeOwned, B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<T> {
        let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    async fn read<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        classify_response(status, &body)
    }
}

impl AccountApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginData> {
        self.send_body(Verb::Post, LOGIN_PATH, request, Auth::Anonymous).await
    }

    async fn request_recovery_code(&self, email: &str) -> ApiResult<serde_json::Value> {
        let body = serde_json::json!({ "email": email });
        self.send_body(Verb::Post, FORGOT_PASSWORD_PATH, &body, Auth::Anonymous).await
    }

    async fn verify_otp(&self, request: &VerifyOtpRequest) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Post, VERIFY_OTP_PATH, request, Auth::Anonymous).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Post, RESET_PASSWORD_PATH, request, Auth::Anonymous).await
    }
}

impl ClientsApi for HttpApi {
    async fn list_clients(&self, query: &ClientQuery) -> ApiResult<ClientPage> {
        self.get(CLIENTS_PATH, &client_list_params(query)).await
    }

    async fn create_client(&self, draft: &ClientDraft) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Post, CLIENTS_PATH, draft, Auth::Bearer).await
    }

    async fn update_client(&self, id: &str, patch: &ClientPatch) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Patch, &client_endpoint(id), patch, Auth::Bearer).await
    }

    async fn delete_client(&self, id: &str) -> ApiResult<serde_json::Value> {
        self.delete(&client_endpoint(id)).await
    }

    async fn list_companies(&self) -> ApiResult<Vec<Company>> {
        self.get(COMPANIES_PATH, &[]).await
    }
}

impl ProjectsApi for HttpApi {
    async fn fetch_project(&self, id: &str) -> ApiResult<Project> {
        self.get(&project_endpoint(id), &[]).await
    }

    async fn update_milestone(&self, id: &str, patch: &MilestonePatch) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Put, &milestone_update_endpoint(id), patch, Auth::Bearer).await
    }

    async fn delete_milestone(&self, id: &str) -> ApiResult<serde_json::Value> {
        self.delete(&milestone_delete_endpoint(id)).await
    }

    async fn update_execution(&self, document_id: &str, patch: &ExecutionPatch) -> ApiResult<serde_json::Value> {
        self.send_body(Verb::Patch, &finance_endpoint(document_id), patch, Auth::Bearer).await
    }
}
