//! Authenticated request pipeline for the HappyToken API—bearer injection, outcome classification,
//! and typed JSON decoding behind a single async call.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod classify;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::{auth::TokenHolder, config::ClientConfig, dispatch::ReqwestDispatcher};

	/// Constructs a [`ReqwestDispatcher`] rooted at `base_url` with a fresh, empty token holder.
	pub fn build_reqwest_test_dispatcher(base_url: &str) -> (ReqwestDispatcher, Arc<TokenHolder>) {
		let config = ClientConfig::new(base_url).expect("Test base URL should be valid.");
		let credentials = Arc::new(TokenHolder::default());
		let dispatcher = ReqwestDispatcher::new(config, credentials.clone())
			.expect("Test dispatcher should build.");

		(dispatcher, credentials)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
