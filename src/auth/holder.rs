//! Shared holder for the current bearer credential.

// self
use crate::{_prelude::*, auth::credential::Credential};

/// Owns the current [`Credential`] and hands out snapshots to in-flight requests.
///
/// The holder is shared through `Arc<TokenHolder>` between the dispatcher (reader) and the
/// authentication path (writer). Replacement swaps an `Arc`, so a request that already captured a
/// credential keeps using it even if a newer one is installed mid-flight.
#[derive(Debug, Default)]
pub struct TokenHolder(RwLock<Option<Arc<Credential>>>);
impl TokenHolder {
	/// Creates a holder pre-populated with `credential`.
	pub fn with_credential(credential: Credential) -> Self {
		Self(RwLock::new(Some(Arc::new(credential))))
	}

	/// Replaces the held credential with a new token issued now.
	pub fn set_credential(
		&self,
		access_token: impl Into<String>,
		expires_in_secs: i64,
	) -> Arc<Credential> {
		self.replace(Credential::new(access_token, expires_in_secs))
	}

	/// Replaces the held credential wholesale.
	pub fn replace(&self, credential: Credential) -> Arc<Credential> {
		let credential = Arc::new(credential);

		*self.0.write() = Some(credential.clone());

		credential
	}

	/// Returns the current credential, if one has been installed.
	///
	/// No expiry check is performed.
	pub fn current_credential(&self) -> Option<Arc<Credential>> {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn holder_starts_absent() {
		assert!(TokenHolder::default().current_credential().is_none());
	}

	#[test]
	fn replacement_does_not_touch_captured_snapshots() {
		let holder = TokenHolder::default();
		let first = holder.set_credential("first", 60);
		let captured = holder.current_credential().expect("Credential should be present.");

		holder.set_credential("second", 120);

		assert_eq!(captured.access_token().expose(), "first");
		assert!(Arc::ptr_eq(&first, &captured));

		let current = holder.current_credential().expect("Credential should be present.");

		assert_eq!(current.access_token().expose(), "second");
		assert_eq!(current.expires_in(), Duration::seconds(120));
	}

	#[test]
	fn expired_credentials_are_returned_verbatim() {
		let holder = TokenHolder::with_credential(Credential::new("stale", -30));
		let current = holder.current_credential().expect("Credential should be present.");

		assert!(current.is_expired_at(OffsetDateTime::now_utc()));
		assert_eq!(current.access_token().expose(), "stale");
	}
}
