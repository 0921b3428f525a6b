//! Vendor client and its single dispatch primitive.
//!
//! # Design
//! `TehnomirClient` holds the immutable `Config` and a `Transport`; it carries
//! no per-call state, so one instance can be shared across threads. Every
//! operation goes through `exchange`: `build_request` wraps the body in a
//! token envelope, the transport performs one POST, and `open_envelope`
//! checks status and the `success` flag before `parse_response` decodes
//! `data`. Building and parsing are pure functions over `HttpRequest` and
//! `HttpResponse`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::request::{Envelope, RequestBody, TokenOnly};
use crate::types::response::{ErrorEnvelope, ResponseEnvelope, VendorErrorRecord};

/// Synchronous client for the Tehnomir API.
#[derive(Clone)]
pub struct TehnomirClient<T = UreqTransport> {
    config: Config,
    transport: T,
}

impl<T> fmt::Debug for TehnomirClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TehnomirClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TehnomirClient<UreqTransport> {
    /// Build a client talking to the vendor over HTTP(S).
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = UreqTransport::new(&config);
        Ok(Self { config, transport })
    }
}

impl<T: Transport> TehnomirClient<T> {
    /// Build a client on top of a caller-supplied transport.
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a token-only request and decode `data`.
    pub(crate) fn call<R>(&self, endpoint: Endpoint) -> Result<R>
    where
        R: DeserializeOwned + Default,
    {
        parse_response(endpoint, &self.exchange(endpoint, None::<&TokenOnly>)?)
    }

    /// Send `body` and decode `data`.
    pub(crate) fn call_with<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: RequestBody,
        R: DeserializeOwned + Default,
    {
        parse_response(endpoint, &self.exchange(endpoint, Some(body))?)
    }

    /// Send a request whose answer carries nothing beyond `success`.
    pub(crate) fn acknowledge<B: RequestBody>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<()> {
        open_envelope(endpoint, &self.exchange(endpoint, body)?).map(drop)
    }

    /// One request, one attempt. An omitted body sends the bare token.
    fn exchange<B: RequestBody>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<HttpResponse> {
        let request = match body {
            Some(body) => build_request(&self.config, endpoint, body)?,
            None => token_only_request(&self.config, endpoint)?,
        };

        tracing::debug!(endpoint = %endpoint, "sending vendor request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(endpoint = %endpoint, status = response.status, "vendor responded");
        Ok(response)
    }
}

/// Serialize `body` with the token into a POST for `endpoint`.
///
/// Fails with `PayloadMismatch` if `body` is not the shape `endpoint` takes.
pub(crate) fn build_request<B: RequestBody>(
    config: &Config,
    endpoint: Endpoint,
    body: &B,
) -> Result<HttpRequest> {
    if B::SHAPE != endpoint.shape() {
        return Err(ApiError::PayloadMismatch {
            endpoint,
            payload: B::SHAPE,
        });
    }
    post_envelope(config, endpoint, body)
}

/// Bare-token request for any endpoint, bypassing the shape check.
fn token_only_request(config: &Config, endpoint: Endpoint) -> Result<HttpRequest> {
    post_envelope(config, endpoint, &TokenOnly {})
}

fn post_envelope<B: RequestBody>(config: &Config, endpoint: Endpoint, body: &B) -> Result<HttpRequest> {
    let envelope = Envelope {
        api_token: &config.token,
        body,
    };
    let body = serde_json::to_string(&envelope).map_err(ApiError::Serialization)?;
    Ok(HttpRequest {
        url: config.endpoint_url(endpoint),
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body,
    })
}

/// Decode the `data` payload of `response` into `R`.
pub(crate) fn parse_response<R>(endpoint: Endpoint, response: &HttpResponse) -> Result<R>
where
    R: DeserializeOwned + Default,
{
    decode_data(open_envelope(endpoint, response)?)
}

/// Check status and `success`, then return the `data` payload.
pub(crate) fn open_envelope(endpoint: Endpoint, response: &HttpResponse) -> Result<Value> {
    if response.status != 200 {
        let envelope: ErrorEnvelope =
            serde_json::from_str(&response.body).map_err(ApiError::Deserialization)?;
        let err = vendor_error(envelope.data);
        tracing::warn!(endpoint = %endpoint, http_status = response.status, error = %err, "vendor rejected request");
        return Err(err);
    }

    let envelope: ResponseEnvelope =
        serde_json::from_str(&response.body).map_err(ApiError::Deserialization)?;
    if !envelope.success {
        let err = match serde_json::from_value::<VendorErrorRecord>(envelope.data) {
            Ok(record) => vendor_error(record),
            Err(_) => ApiError::UnexpectedResponse { endpoint },
        };
        tracing::warn!(endpoint = %endpoint, error = %err, "vendor reported failure");
        return Err(err);
    }
    Ok(envelope.data)
}

/// Decode `data`; a missing or null payload is the type's empty value.
fn decode_data<R>(data: Value) -> Result<R>
where
    R: DeserializeOwned + Default,
{
    if data.is_null() {
        return Ok(R::default());
    }
    serde_json::from_value(data).map_err(ApiError::Deserialization)
}

fn vendor_error(record: VendorErrorRecord) -> ApiError {
    ApiError::Vendor {
        status: record.status.get(),
        name: record.name,
        message: record.message,
    }
}
