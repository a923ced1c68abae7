//! Transport primitives for dispatching API requests.
//!
//! The module exposes [`ApiHttpClient`] so downstream crates can plug in custom HTTP stacks (or
//! fakes in tests) without touching the dispatcher. A transport never returns an error type: every
//! failure is folded into the [`TransportOutcome`] so the classifier sees a single shape.

// self
use crate::{_prelude::*, classify::TransportOutcome, request::OutboundRequest};
#[cfg(feature = "reqwest")] use crate::request::Method;

/// Boxed future returned by [`ApiHttpClient::send`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = TransportOutcome> + 'a + Send>>;

/// Abstraction over HTTP transports capable of running one [`OutboundRequest`] to completion.
///
/// Implementations must be `Send + Sync + 'static` so a dispatcher can be shared across tasks.
///
/// # Contract
///
/// - Send every header returned by [`OutboundRequest::headers`] and the body verbatim.
/// - Enforce [`OutboundRequest::timeout`]; expiry is reported through
///   [`TransportOutcome::network_error`].
/// - Release the connection/response before the returned future completes, on every path.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Runs `request` and reports how it ended.
	fn send(&self, request: OutboundRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client with reqwest's defaults, surfacing builder failures as configuration errors.
	pub fn try_default() -> Result<Self> {
		let client = ReqwestClient::builder().build().map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn send(&self, request: OutboundRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let timeout = request.timeout;
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url.clone()).timeout(timeout);

			for (name, value) in request.headers() {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			// The response owns the connection; it is dropped before this block returns.
			let response = match builder.send().await {
				Ok(response) => response,
				Err(e) => return TransportOutcome::network_failure(describe_reqwest_error(&e, timeout)),
			};
			let status = response.status();
			let reason = status.canonical_reason().unwrap_or_default();

			match response.text().await {
				Ok(body) => TransportOutcome::response(status.as_u16(), body).with_reason(reason),
				Err(e) => TransportOutcome {
					network_error: Some(describe_reqwest_error(&e, timeout)),
					status: Some(status.as_u16()),
					reason: Some(reason.to_owned()),
					body: String::new(),
				},
			}
		})
	}
}

#[cfg(feature = "reqwest")]
fn describe_reqwest_error(err: &ReqwestError, timeout: StdDuration) -> String {
	if err.is_timeout() {
		return format!("request timed out after {}s", timeout.as_secs_f32());
	}

	let mut message = err.to_string();
	let mut source = err.source();

	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());

		source = cause.source();
	}

	message
}
