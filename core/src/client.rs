//! Stateless HTTP request builder and response parser for the backend.
//!
//! # Design
//! `HomebaseClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The per-resource methods live in [`crate::resources`] and
//! all funnel through the two generic helpers here: [`HomebaseClient::request`]
//! (method, path, optional body, session header) and
//! [`HomebaseClient::parse`] (status check, diagnostic, envelope unwrapping).

use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{
    HttpMethod, HttpRequest, HttpResponse, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE,
    SESSION_TOKEN_HEADER,
};
use crate::transport::Transport;

/// Backend resource domain, each with its own REST sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Inventory,
    Note,
    Tag,
    Reminder,
    User,
}

impl Resource {
    pub fn base_path(self) -> &'static str {
        match self {
            Resource::Inventory => "/inventory",
            Resource::Note => "/note",
            Resource::Tag => "/tag",
            Resource::Reminder => "/reminder",
            Resource::User => "/users",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Inventory => "inventory",
            Resource::Note => "note",
            Resource::Tag => "tag",
            Resource::Reminder => "reminder",
            Resource::User => "user",
        }
    }
}

/// Names one client operation for diagnostics, e.g. `tag.delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub resource: Resource,
    pub name: &'static str,
}

impl Operation {
    pub const fn new(resource: Resource, name: &'static str) -> Self {
        Self { resource, name }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource.as_str(), self.name)
    }
}

/// Percent-encode one path segment, so an id or token can never add
/// segments, a query or a fragment to the request URL.
pub(crate) fn path_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Synchronous, stateless client for the backend.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller executes the round-trip between
/// `build_*` and `parse_*`, or hands both to [`HomebaseClient::send`].
#[derive(Debug, Clone)]
pub struct HomebaseClient {
    base_url: String,
}

impl HomebaseClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute `request` on `transport` and decode the response with `parse`.
    ///
    /// ```
    /// use homebase_core::{
    ///     ApiError, ClientConfig, HomebaseClient, HttpRequest, HttpResponse, Transport,
    /// };
    ///
    /// struct Offline;
    ///
    /// impl Transport for Offline {
    ///     fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
    ///         Ok(HttpResponse::new(200, r#"{"notes": []}"#))
    ///     }
    /// }
    ///
    /// let client = HomebaseClient::new(&ClientConfig::new("http://localhost:8000/api/v1"));
    /// let notes = client
    ///     .send(
    ///         &Offline,
    ///         client.build_list_notes("tok123"),
    ///         HomebaseClient::parse_list_notes,
    ///     )
    ///     .unwrap_or_default();
    /// assert!(notes.is_empty());
    /// ```
    pub fn send<T, P>(
        &self,
        transport: &impl Transport,
        request: HttpRequest,
        parse: P,
    ) -> Result<T, ApiError>
    where
        P: FnOnce(&Self, HttpResponse) -> Result<T, ApiError>,
    {
        let response = transport.execute(request)?;
        parse(self, response)
    }

    /// Build a body-less request for `path` under the operation's resource.
    pub(crate) fn request(
        &self,
        op: Operation,
        method: HttpMethod,
        path: &str,
        session_token: Option<&str>,
    ) -> HttpRequest {
        let mut headers = vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())];
        if let Some(token) = session_token {
            headers.push((SESSION_TOKEN_HEADER.to_string(), token.to_string()));
        }
        HttpRequest {
            method,
            path: format!("{}{}{path}", self.base_url, op.resource.base_path()),
            headers,
            body: None,
        }
    }

    /// Like [`HomebaseClient::request`], with `body` serialized as JSON.
    pub(crate) fn request_with_body<B: Serialize + ?Sized>(
        &self,
        op: Operation,
        method: HttpMethod,
        path: &str,
        session_token: Option<&str>,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut request = self.request(op, method, path, session_token);
        request.body = Some(body);
        Ok(request)
    }

    /// Check the status, unwrap the envelope and decode the payload.
    pub(crate) fn parse<T: DeserializeOwned>(
        &self,
        op: Operation,
        response: HttpResponse,
        unwrap: Unwrap,
    ) -> Result<T, ApiError> {
        check_status(op, &response)?;
        let value: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        let parsed = serde_json::from_value(unwrap.apply(value))
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        tracing::debug!(operation = %op, status = response.status, "parsed response");
        Ok(parsed)
    }

    /// Check the status and ignore the body.
    pub(crate) fn parse_empty(
        &self,
        op: Operation,
        response: HttpResponse,
    ) -> Result<(), ApiError> {
        check_status(op, &response)?;
        tracing::debug!(operation = %op, status = response.status, "request succeeded");
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant,
/// logging a diagnostic for each.
fn check_status(op: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::error!(
        resource = op.resource.as_str(),
        operation = op.name,
        status = response.status,
        body = %response.body,
        "backend request failed"
    );
    let body = response.body.clone();
    if response.status == 404 {
        return Err(ApiError::NotFound { body });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body,
    })
}
