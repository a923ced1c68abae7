//! Optional observability helpers for dispatched requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `happy_token_client.request` with the `method`
//!   and `url` fields, plus one completion event per request.
//! - Enable `metrics` to increment the `happy_token_client_request_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::FailureKind};

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// Decoded successfully.
	Success,
	/// Failed with the given subtype.
	Failure(FailureKind),
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure(kind) => kind.as_str(),
		}
	}

	/// Derives the terminal outcome of a dispatched request.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => RequestOutcome::Success,
			Err(e) => RequestOutcome::Failure(e.kind()),
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
