//! Client configuration: API base URL and transport timeout bound.

// self
use crate::{_prelude::*, error::ConfigError};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Inputs the dispatcher needs besides the token holder and transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Base URL that relative request targets are appended to.
	pub base_url: Url,
	/// Upper bound on a single request, in seconds.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}
impl ClientConfig {
	/// Parses `base_url` and applies the default 60 second timeout.
	pub fn new(base_url: &str) -> Result<Self> {
		let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
			value: base_url.to_owned(),
			source,
		})?;

		Ok(Self::from_url(base_url))
	}

	/// Wraps an already parsed base URL.
	pub fn from_url(base_url: Url) -> Self {
		Self { base_url, timeout_secs: DEFAULT_TIMEOUT_SECS }
	}

	/// Overrides the timeout bound; sub-second precision is rounded up to whole seconds.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		let secs = timeout.as_secs();

		self.timeout_secs = if timeout.subsec_nanos() > 0 { secs.saturating_add(1) } else { secs };

		self
	}

	/// Timeout bound applied to every outbound request.
	pub fn timeout(&self) -> StdDuration {
		StdDuration::from_secs(self.timeout_secs)
	}

	/// Rejects settings that would make every request fail.
	pub fn validate(&self) -> Result<()> {
		if self.timeout_secs == 0 {
			return Err(ConfigError::ZeroTimeout.into());
		}

		Ok(())
	}

	/// Resolves a request target against the base URL.
	///
	/// Targets containing `://` are absolute: used verbatim and rejected when malformed. Anything
	/// else, including colon routes such as `users:me`, is appended to the base path with a single
	/// `/` separator, so `https://api.example.com/v1` + `users` yields
	/// `https://api.example.com/v1/users`.
	pub fn resolve(&self, target: &str) -> Result<Url> {
		if target.contains("://") {
			return Url::parse(target).map_err(|source| {
				ConfigError::InvalidUrl { target: target.to_owned(), source }.into()
			});
		}

		let base = self.base_url.as_str().trim_end_matches('/');
		let route = target.trim_start_matches('/');

		Url::parse(&format!("{base}/{route}"))
			.map_err(|source| ConfigError::InvalidUrl { target: target.to_owned(), source }.into())
	}
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}
