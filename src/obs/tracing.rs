// self
use crate::{_prelude::*, obs::RequestOutcome, request::Method};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by the dispatcher.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the request method and target.
	pub fn new(method: Method, target: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("happy_token_client.request", method = method.as_str(), url = target);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (method, target);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Diagnostic summary of one finished exchange.
#[derive(Clone, Copy, Debug)]
pub struct Completion<'a> {
	/// Resolved request URL.
	pub url: &'a Url,
	/// Wall-clock time spent awaiting the transport.
	pub elapsed: StdDuration,
	/// HTTP status, when a response arrived.
	pub status: Option<u16>,
	/// Terminal outcome label.
	pub outcome: RequestOutcome,
	/// Failure text, if any.
	pub error: Option<&'a str>,
}

/// Emits the completion event for a finished exchange.
pub fn log_completion(completion: Completion<'_>) {
	#[cfg(feature = "tracing")]
	{
		let Completion { url, elapsed, status, outcome, error } = completion;
		let elapsed_ms = elapsed.as_secs_f64() * 1_000.;

		match error {
			None => tracing::info!(
				url = url.as_str(),
				elapsed_ms,
				status,
				outcome = outcome.as_str(),
				"request completed"
			),
			Some(error) => tracing::warn!(
				url = url.as_str(),
				elapsed_ms,
				status,
				outcome = outcome.as_str(),
				error,
				"request failed"
			),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = completion;
	}
}

/// Emits the body received alongside a failed exchange.
pub fn log_received_content(url: &Url, body: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(url = url.as_str(), body, "received content");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (url, body);
	}
}

/// Emits the fast-fail event for a credentialed request issued without a credential.
pub fn log_not_authenticated(target: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(target_route = target, "credential required but not set");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = target;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::FailureKind;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(Method::Get, "users");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn log_helpers_without_subscriber() {
		let url = Url::parse("https://api.example.com/users").expect("URL fixture should parse.");

		log_completion(Completion {
			url: &url,
			elapsed: StdDuration::from_millis(12),
			status: Some(401),
			outcome: RequestOutcome::Failure(FailureKind::Http),
			error: Some("HTTP error: 401 Unauthorized."),
		});
		log_received_content(&url, r#"{"error":"bad token"}"#);
		log_not_authenticated("users");
	}
}
