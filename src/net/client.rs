//! The backend client: account/session endpoints plus document listing.
//!
//! Browser builds (`web` feature) issue real requests via `gloo-net`; other
//! builds stub the transport with a connectivity error. URL construction and
//! observer notification are shared by both so they stay natively testable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde_json::json;

use super::error::ApiError;
use super::types::{Record, RecordList, User};

/// Sentinel id asking the service to mint the account identifier itself.
const SERVER_GENERATED_ID: &str = "unique()";

/// Hook invoked with method, URL, and JSON body before each dispatch.
///
/// This replaces ad-hoc wrapping of the global fetch primitive: callers that
/// want request logging inject it here instead.
pub type RequestObserver = Arc<dyn Fn(&str, &str, Option<&serde_json::Value>) + Send + Sync>;

/// Minimal client for the hosted identity + document API.
///
/// Cheap to clone; hand copies to whichever page needs one.
#[derive(Clone)]
pub struct Client {
    endpoint: String,
    project_id: String,
    observer: Option<RequestObserver>,
}

impl Client {
    /// Build a client for `endpoint` (trailing slash tolerated), tagging every
    /// request with `project_id`.
    #[must_use]
    pub fn new(endpoint: &str, project_id: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            project_id: project_id.to_owned(),
            observer: None,
        }
    }

    /// Install a request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: RequestObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Fetch the currently authenticated account.
    ///
    /// # Errors
    ///
    /// Unauthenticated visitors get a 401 service error; callers decide
    /// whether that counts as a failure.
    pub async fn get_account(&self) -> Result<User, ApiError> {
        self.get("/account").await
    }

    /// Create an email/password session for the account.
    ///
    /// # Errors
    ///
    /// 401 on rejected credentials.
    pub async fn create_email_session(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.post(
            "/account/sessions/email",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Register a new account with a server-generated id.
    ///
    /// # Errors
    ///
    /// 409 when an account with this email already exists.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        self.post(
            "/account",
            json!({
                "userId": SERVER_GENERATED_ID,
                "email": email,
                "password": password,
                "name": name,
            }),
        )
        .await
    }

    /// Invalidate every session of the current account.
    ///
    /// # Errors
    ///
    /// Propagates the service error when the backend refuses.
    pub async fn delete_sessions(&self) -> Result<(), ApiError> {
        self.delete("/account/sessions").await
    }

    /// List the documents of one collection, in service order.
    ///
    /// # Errors
    ///
    /// 404-class service errors for unknown identifiers, connectivity errors
    /// for unreachable endpoints.
    pub async fn list_records(
        &self,
        datastore_id: &str,
        collection_id: &str,
    ) -> Result<Vec<Record>, ApiError> {
        let path = format!("/databases/{datastore_id}/collections/{collection_id}/documents");
        let list: RecordList = self.get(&path).await?;
        Ok(list.documents)
    }

    /// Build the absolute URL for `path` and notify the observer.
    fn prepare(&self, method: &str, path: &str, body: Option<&serde_json::Value>) -> String {
        let url = format!("{}{}", self.endpoint, path);
        if let Some(observe) = &self.observer {
            observe(method, &url, body);
        }
        url
    }

    #[cfg(feature = "web")]
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.prepare("GET", path, None);
        let resp = gloo_net::http::Request::get(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(Self::service_error(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(feature = "web")]
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
        let url = self.prepare("POST", path, Some(&body));
        let resp = gloo_net::http::Request::post(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(Self::service_error(resp).await)
        }
    }

    #[cfg(feature = "web")]
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.prepare("DELETE", path, None);
        let resp = gloo_net::http::Request::delete(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(Self::service_error(resp).await)
        }
    }

    /// Turn a non-2xx response into a service error, keeping the backend's
    /// message when the body carries one.
    #[cfg(feature = "web")]
    async fn service_error(resp: gloo_net::http::Response) -> ApiError {
        let code = resp.status();
        match resp.json::<super::types::ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => ApiError::Service {
                code,
                message: body.message,
            },
            _ => ApiError::Service {
                code,
                message: format!("request failed with status {code}"),
            },
        }
    }

    #[cfg(not(feature = "web"))]
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let _ = self.prepare("GET", path, None);
        Err(Self::offline())
    }

    #[cfg(not(feature = "web"))]
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
        let _ = self.prepare("POST", path, Some(&body));
        Err(Self::offline())
    }

    #[cfg(not(feature = "web"))]
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _ = self.prepare("DELETE", path, None);
        Err(Self::offline())
    }

    #[cfg(not(feature = "web"))]
    fn offline() -> ApiError {
        ApiError::Network("no browser runtime available".to_owned())
    }
}
