//! Executing `HttpRequest` values against the network.
//!
//! The core never performs I/O on its own. `Transport` is the seam where a
//! host plugs in its HTTP stack; `UreqTransport` is the bundled blocking
//! implementation.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Something that can perform one HTTP round-trip.
///
/// Implementations must hand non-2xx responses back as data; status
/// interpretation belongs to the client's `parse_*` methods. Only failures
/// that produce no response at all become `ApiError::TransportError`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a shared `ureq::Agent`.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses come back as `HttpResponse` values.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn with_headers<B>(
        mut builder: ureq::RequestBuilder<B>,
        headers: &[(String, String)],
    ) -> ureq::RequestBuilder<B> {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let HttpRequest {
                method,
                path,
                headers,
                body,
            } = request;

            let result = match (method, body) {
                (HttpMethod::Get, _) => with_headers(self.agent.get(&path), &headers).call(),
                (HttpMethod::Delete, None) => {
                    with_headers(self.agent.delete(&path), &headers).call()
                }
                (HttpMethod::Delete, Some(body)) => {
                    with_headers(self.agent.delete(&path), &headers)
                        .force_send_body()
                        .send(body.as_bytes())
                }
                (HttpMethod::Post, Some(body)) => {
                    with_headers(self.agent.post(&path), &headers).send(body.as_bytes())
                }
                (HttpMethod::Post, None) => {
                    with_headers(self.agent.post(&path), &headers).send_empty()
                }
                (HttpMethod::Put, Some(body)) => {
                    with_headers(self.agent.put(&path), &headers).send(body.as_bytes())
                }
                (HttpMethod::Put, None) => {
                    with_headers(self.agent.put(&path), &headers).send_empty()
                }
                (HttpMethod::Patch, Some(body)) => {
                    with_headers(self.agent.patch(&path), &headers).send(body.as_bytes())
                }
                (HttpMethod::Patch, None) => {
                    with_headers(self.agent.patch(&path), &headers).send_empty()
                }
            };

            let mut response = result.map_err(|e| {
                tracing::warn!(%method, url = %path, error = %e, "transport failure");
                ApiError::TransportError(e.to_string())
            })?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::TransportError(e.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
