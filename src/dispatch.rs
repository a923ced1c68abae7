//! Request dispatcher: the single pipeline every API call funnels through.
//!
//! [`Dispatcher::execute`] captures the held credential (when the request needs one), builds the
//! wire request, awaits the transport, classifies the outcome, and decodes a successful body into
//! the caller's type. The returned future resolves exactly once, with either the decoded value or
//! an [`Error`] describing which stage failed.

// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	auth::{Credential, TokenGrant, TokenHolder},
	classify,
	config::ClientConfig,
	decode,
	http::ApiHttpClient,
	obs::{self, Completion, RequestOutcome, RequestSpan},
	request::{OutboundRequest, RequestSpec},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Dispatcher specialized for the crate's default reqwest transport.
pub type ReqwestDispatcher = Dispatcher<ReqwestHttpClient>;

/// Runs [`RequestSpec`]s against the configured API with the shared credential.
///
/// All collaborators are injected: the transport, the [`TokenHolder`] shared with whoever
/// authenticates, and the [`ClientConfig`] carrying the base URL and timeout bound.
#[derive(Clone)]
pub struct Dispatcher<C>
where
	C: ?Sized + ApiHttpClient,
{
	http_client: Arc<C>,
	credentials: Arc<TokenHolder>,
	config: ClientConfig,
}
impl<C> Dispatcher<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a dispatcher that reuses the caller-provided transport.
	///
	/// Fails with [`ConfigError::ZeroTimeout`](crate::error::ConfigError::ZeroTimeout) when `config`
	/// would time out every request.
	pub fn with_http_client(
		config: ClientConfig,
		credentials: Arc<TokenHolder>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		config.validate()?;

		Ok(Self { http_client: http_client.into(), credentials, config })
	}

	/// Shared holder of the bearer credential.
	pub fn credentials(&self) -> &Arc<TokenHolder> {
		&self.credentials
	}

	/// Base URL and timeout bound applied to every request.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Resolves a request target against the configured base URL.
	pub fn route(&self, target: &str) -> Result<Url> {
		self.config.resolve(target)
	}

	/// Executes `spec` and decodes the response body into `T`.
	pub async fn execute<T>(&self, spec: RequestSpec) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = RequestSpan::new(spec.method(), spec.target());

		obs::record_request_outcome(RequestOutcome::Attempt);

		let result = span.instrument(self.run(spec)).await;

		obs::record_request_outcome(RequestOutcome::of(&result));

		result
	}

	/// Executes `spec` and hands the outcome to exactly one of the two continuations.
	///
	/// `on_fail` receives the failure's display message.
	pub async fn execute_with<T, S, F>(&self, spec: RequestSpec, on_success: S, on_fail: F)
	where
		T: DeserializeOwned,
		S: FnOnce(T),
		F: FnOnce(String),
	{
		match self.execute::<T>(spec).await {
			Ok(value) => on_success(value),
			Err(e) => on_fail(e.to_string()),
		}
	}

	/// Executes an authentication request and installs the returned token.
	///
	/// The decoded [`TokenGrant`] replaces the held credential; later credentialed requests use
	/// it, while requests already in flight keep the credential they captured.
	pub async fn authenticate(&self, spec: RequestSpec) -> Result<Arc<Credential>> {
		let grant = self.execute::<TokenGrant>(spec).await?;

		Ok(self.credentials.replace(grant.into()))
	}

	async fn run<T>(&self, spec: RequestSpec) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let bearer = if spec.requires_credential() {
			match self.credentials.current_credential() {
				Some(credential) if credential.is_authenticated() =>
					Some(credential.access_token().clone()),
				_ => {
					obs::log_not_authenticated(spec.target());

					return Err(Error::NotAuthenticated);
				},
			}
		} else {
			None
		};
		let url = self.route(spec.target())?;
		let request = OutboundRequest::new(&spec, url.clone(), bearer, self.config.timeout());
		let started = Instant::now();
		let outcome = self.http_client.send(request).await;
		let elapsed = started.elapsed();
		let result = classify::classify(&outcome)
			.into_result()
			.and_then(|body| decode::decode::<T>(&body).map_err(Error::from));

		if matches!(result, Err(Error::Network { .. } | Error::Http { .. })) {
			obs::log_received_content(&url, &outcome.body);
		}

		obs::log_completion(Completion {
			url: &url,
			elapsed,
			status: outcome.status,
			outcome: RequestOutcome::of(&result),
			error: result.as_ref().err().map(ToString::to_string).as_deref(),
		});

		result
	}
}
#[cfg(feature = "reqwest")]
impl Dispatcher<ReqwestHttpClient> {
	/// Creates a new dispatcher backed by a default reqwest transport.
	pub fn new(config: ClientConfig, credentials: Arc<TokenHolder>) -> Result<Self> {
		Self::with_http_client(config, credentials, ReqwestHttpClient::try_default()?)
	}
}
impl<C> Debug for Dispatcher<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Dispatcher")
			.field("config", &self.config)
			.field("credential_set", &self.credentials.current_credential().is_some())
			.finish()
	}
}
