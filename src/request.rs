//! Request descriptions: the caller-facing [`RequestSpec`] and the wire-ready [`OutboundRequest`].

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// MIME type declared for every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods the pipeline issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// Read-style request without a body.
	Get,
	/// Write-style request carrying a JSON body.
	Post,
}
impl Method {
	/// Returns the canonical method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Caller-supplied description of one outbound call.
///
/// The method is never chosen explicitly: a spec without a body is a `GET`, a spec with a body is a
/// JSON `POST`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
	target: String,
	body: Option<String>,
	requires_credential: bool,
}
impl RequestSpec {
	/// Describes a body-less `GET` of `target`.
	pub fn get(target: impl Into<String>) -> Self {
		Self { target: target.into(), body: None, requires_credential: false }
	}

	/// Describes a `POST` of an already serialized JSON body.
	///
	/// An empty body is treated as absent, which turns the request into a `GET`.
	pub fn post(target: impl Into<String>, body: impl Into<String>) -> Self {
		let body = body.into();

		Self {
			target: target.into(),
			body: if body.is_empty() { None } else { Some(body) },
			requires_credential: false,
		}
	}

	/// Serializes `payload` with `serde_json` and describes a `POST` carrying it.
	pub fn post_json<B>(target: impl Into<String>, payload: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let body = serde_json::to_string(payload).map_err(ConfigError::from)?;

		Ok(Self::post(target, body))
	}

	/// Marks the request as requiring the held bearer credential.
	pub fn authenticated(mut self) -> Self {
		self.requires_credential = true;

		self
	}

	/// Absolute URL or route relative to the configured base URL.
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Serialized JSON body, if any.
	pub fn body(&self) -> Option<&str> {
		self.body.as_deref()
	}

	/// Returns `true` when the request must carry a bearer credential.
	pub fn requires_credential(&self) -> bool {
		self.requires_credential
	}

	/// Method inferred from the presence of a body.
	pub fn method(&self) -> Method {
		if self.body.is_some() { Method::Post } else { Method::Get }
	}
}

/// Fully resolved request handed to an [`ApiHttpClient`](crate::http::ApiHttpClient).
#[derive(Clone)]
pub struct OutboundRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// UTF-8 encoded JSON body for `POST` requests.
	pub body: Option<Vec<u8>>,
	/// Bearer token to send in the `Authorization` header.
	pub bearer: Option<TokenSecret>,
	/// Upper bound on the whole exchange.
	pub timeout: StdDuration,
}
impl OutboundRequest {
	/// Builds the wire request for `spec` against an already resolved `url`.
	pub fn new(
		spec: &RequestSpec,
		url: Url,
		bearer: Option<TokenSecret>,
		timeout: StdDuration,
	) -> Self {
		Self {
			method: spec.method(),
			url,
			body: spec.body().map(|body| body.as_bytes().to_vec()),
			bearer,
			timeout,
		}
	}

	/// Headers the transport must send, in order.
	pub fn headers(&self) -> Vec<(&'static str, String)> {
		let mut headers = Vec::with_capacity(2);

		if let Some(bearer) = &self.bearer {
			headers.push(("Authorization", bearer.bearer_header()));
		}
		if self.body.is_some() {
			headers.push(("Content-Type", JSON_CONTENT_TYPE.to_owned()));
		}

		headers
	}
}
impl Debug for OutboundRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OutboundRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
			.field("timeout", &self.timeout)
			.finish()
	}
}
