//! Raw transport outcomes and the fixed-order classifier that turns them into success or failure.

// self
use crate::_prelude::*;

/// Raw result of executing one request, before classification.
///
/// A network error may coexist with a stray status or body, e.g. a timeout that fires after the
/// headers arrived. [`classify`] gives the network error precedence in that case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportOutcome {
	/// Transport-level failure (connect, TLS, timeout, body read).
	pub network_error: Option<String>,
	/// HTTP status code, when a response was received.
	pub status: Option<u16>,
	/// Reason phrase accompanying the status.
	pub reason: Option<String>,
	/// Response body decoded as text; possibly empty.
	pub body: String,
}
impl TransportOutcome {
	/// Outcome for a request that never produced a usable response.
	pub fn network_failure(message: impl Into<String>) -> Self {
		Self { network_error: Some(message.into()), ..Default::default() }
	}

	/// Outcome for a completed HTTP exchange.
	pub fn response(status: u16, body: impl Into<String>) -> Self {
		Self { status: Some(status), body: body.into(), ..Default::default() }
	}

	/// Attaches a reason phrase to the status.
	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());

		self
	}

	/// Human-readable status line such as `401 Unauthorized`.
	pub fn status_line(&self) -> String {
		match (self.status, self.reason.as_deref()) {
			(Some(status), Some(reason)) if !reason.is_empty() => format!("{status} {reason}"),
			(Some(status), _) => status.to_string(),
			(None, _) => "no status".into(),
		}
	}
}

/// Result of classifying a [`TransportOutcome`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
	/// The transport failed outright, including timeouts.
	NetworkFailure(String),
	/// A response arrived with status 400 or above.
	HttpFailure {
		/// HTTP status code.
		status: u16,
		/// Status line summary.
		message: String,
		/// Raw response body.
		body: String,
	},
	/// A successful status with an empty or whitespace-only body.
	EmptyPayload,
	/// A successful status with a non-empty body.
	Success(String),
}
impl Classification {
	/// Converts the classification into the body on success or the matching [`Error`].
	pub fn into_result(self) -> Result<String> {
		match self {
			Classification::NetworkFailure(message) => Err(Error::Network { message }),
			Classification::HttpFailure { status, message, body } =>
				Err(Error::Http { status, message, body }),
			Classification::EmptyPayload => Err(Error::EmptyPayload),
			Classification::Success(body) => Ok(body),
		}
	}
}

/// Classifies `outcome`: network error, then HTTP status, then payload emptiness.
pub fn classify(outcome: &TransportOutcome) -> Classification {
	if let Some(message) = &outcome.network_error {
		return Classification::NetworkFailure(message.clone());
	}

	let Some(status) = outcome.status else {
		return Classification::NetworkFailure("Transport completed without an HTTP status".into());
	};

	if status >= 400 {
		return Classification::HttpFailure {
			status,
			message: outcome.status_line(),
			body: outcome.body.clone(),
		};
	}
	if outcome.body.trim().is_empty() {
		return Classification::EmptyPayload;
	}

	Classification::Success(outcome.body.clone())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn network_error_wins_over_status_and_body() {
		let outcome = TransportOutcome {
			network_error: Some("operation timed out".into()),
			status: Some(200),
			reason: Some("OK".into()),
			body: r#"{"id":"42"}"#.into(),
		};

		assert_eq!(
			classify(&outcome),
			Classification::NetworkFailure("operation timed out".into())
		);

		let with_error_status =
			TransportOutcome { status: Some(500), ..TransportOutcome::network_failure("refused") };

		assert_eq!(
			classify(&with_error_status),
			Classification::NetworkFailure("refused".into())
		);
	}

	#[test]
	fn error_status_wins_over_well_formed_body() {
		for status in [400, 401, 404, 500, 599] {
			let outcome = TransportOutcome::response(status, r#"{"error":"bad token"}"#);

			assert!(
				matches!(classify(&outcome), Classification::HttpFailure { status: s, .. } if s == status),
				"Status {status} should classify as an HTTP failure."
			);
		}
	}

	#[test]
	fn http_failure_carries_status_line_and_body() {
		let outcome =
			TransportOutcome::response(401, r#"{"error":"bad token"}"#).with_reason("Unauthorized");

		assert_eq!(
			classify(&outcome),
			Classification::HttpFailure {
				status: 401,
				message: "401 Unauthorized".into(),
				body: r#"{"error":"bad token"}"#.into(),
			}
		);
	}

	#[test]
	fn blank_bodies_are_empty_payloads() {
		for body in ["", " ", "\n\t  "] {
			assert_eq!(classify(&TransportOutcome::response(200, body)), Classification::EmptyPayload);
		}

		assert_eq!(classify(&TransportOutcome::response(204, "")), Classification::EmptyPayload);
	}

	#[test]
	fn success_passes_body_through_untouched() {
		let outcome = TransportOutcome::response(399, " [1,2] ");

		assert_eq!(classify(&outcome), Classification::Success(" [1,2] ".into()));
	}

	#[test]
	fn missing_status_is_a_network_failure() {
		let outcome = TransportOutcome { body: "{}".into(), ..Default::default() };

		assert!(matches!(classify(&outcome), Classification::NetworkFailure(_)));
	}

	#[test]
	fn classification_converts_into_errors() {
		assert!(matches!(Classification::EmptyPayload.into_result(), Err(Error::EmptyPayload)));
		assert!(matches!(
			Classification::NetworkFailure("refused".into()).into_result(),
			Err(Error::Network { message }) if message == "refused"
		));
		assert_eq!(
			Classification::Success("{}".into())
				.into_result()
				.expect("Success should convert into Ok."),
			"{}"
		);
	}
}
