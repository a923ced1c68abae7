//! Client-level error types shared by the dispatcher, decoder, and configuration layer.

// self
use crate::{_prelude::*, decode::DecodeError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical failure reported for a single request.
///
/// Callers usually only branch on success versus failure and surface the [`Display`] message;
/// the variant is preserved for diagnostics and is available through [`Error::kind`].
#[derive(Debug, ThisError)]
pub enum Error {
	/// The request requires a credential but none (or an empty one) is held.
	#[error("Request requires a credential but the client is not authenticated.")]
	NotAuthenticated,
	/// The transport could not reach the server, the connection failed, or the request timed out.
	#[error("Network error: {message}.")]
	Network {
		/// Transport-supplied diagnostic.
		message: String,
	},
	/// The server answered with a status code of 400 or above.
	#[error("HTTP error: {message}.")]
	Http {
		/// HTTP status code.
		status: u16,
		/// Status line summary, e.g. `401 Unauthorized`.
		message: String,
		/// Raw response body, kept for diagnostics.
		body: String,
	},
	/// The server answered successfully but the body was empty or whitespace-only.
	#[error("Payload error: response body was empty.")]
	EmptyPayload,
	/// The body could not be decoded into the expected type.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Local configuration problem detected before any transport call.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Returns the failure subtype of this error.
	pub const fn kind(&self) -> FailureKind {
		match self {
			Self::NotAuthenticated => FailureKind::NotAuthenticated,
			Self::Network { .. } => FailureKind::Network,
			Self::Http { .. } => FailureKind::Http,
			Self::EmptyPayload => FailureKind::EmptyPayload,
			Self::Decode(_) => FailureKind::Decode,
			Self::Config(_) => FailureKind::Config,
		}
	}

	/// Returns the HTTP status code attached to an [`Error::Http`] failure.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Http { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Stable failure labels used for span fields, log events, and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// See [`Error::NotAuthenticated`].
	NotAuthenticated,
	/// See [`Error::Network`].
	Network,
	/// See [`Error::Http`].
	Http,
	/// See [`Error::EmptyPayload`].
	EmptyPayload,
	/// See [`Error::Decode`].
	Decode,
	/// See [`Error::Config`].
	Config,
}
impl FailureKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureKind::NotAuthenticated => "not_authenticated",
			FailureKind::Network => "network",
			FailureKind::Http => "http",
			FailureKind::EmptyPayload => "empty_payload",
			FailureKind::Decode => "decode",
			FailureKind::Config => "config",
		}
	}
}
impl Display for FailureKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Configuration and validation failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Offending input.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request target cannot be resolved into a URL.
	#[error("Request target `{target}` does not resolve to a valid URL.")]
	InvalidUrl {
		/// Offending request target.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	BodySerialize(#[from] serde_json::Error),
	/// Timeout bound must be strictly positive.
	#[error("Request timeout must be greater than zero.")]
	ZeroTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn kinds_map_to_stable_labels() {
		let cases = [
			(Error::NotAuthenticated, "not_authenticated"),
			(Error::Network { message: "connection refused".into() }, "network"),
			(
				Error::Http { status: 401, message: "401 Unauthorized".into(), body: String::new() },
				"http",
			),
			(Error::EmptyPayload, "empty_payload"),
			(Error::Config(ConfigError::ZeroTimeout), "config"),
		];

		for (error, label) in cases {
			assert_eq!(error.kind().as_str(), label);
		}
	}

	#[test]
	fn not_authenticated_message_is_fixed() {
		let message = Error::NotAuthenticated.to_string();

		assert!(message.contains("not authenticated"), "Unexpected message: {message}.");
	}

	#[test]
	fn status_is_only_reported_for_http_failures() {
		let http =
			Error::Http { status: 503, message: "503 Service Unavailable".into(), body: "".into() };

		assert_eq!(http.status(), Some(503));
		assert_eq!(Error::EmptyPayload.status(), None);
	}
}
