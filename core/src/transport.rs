//! Executes built requests against the network.
//!
//! `Transport` is the seam between the pure request/response handling in
//! `client` and real I/O. `UreqTransport` is the production implementation: a
//! blocking `ureq` agent whose timeouts and idle-connection limits come from
//! `Config`. Non-2xx statuses are returned as data so the client can decode
//! the vendor's error envelope.

use crate::config::Config;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// POST `request` and return the response, whatever its status.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking HTTP transport backed by a pooled `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout()))
            .timeout_connect(Some(config.connect_timeout()))
            .timeout_recv_response(Some(config.response_timeout()))
            .max_idle_connections(config.max_idle_connections)
            .max_idle_connections_per_host(config.max_idle_connections)
            .max_idle_age(config.idle_timeout())
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.agent.post(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.send(request.body.as_bytes())?;

        let status = response.status().as_u16();
        // ureq caps bodies at 10 MiB unless told otherwise; full price lists exceed that.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}
