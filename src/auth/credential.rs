//! Immutable bearer credential plus the token grant shape returned by the authentication route.

// self
use crate::{_prelude::*, auth::secret::TokenSecret};

/// Bearer credential issued by a successful authentication call.
///
/// Credentials are replaced wholesale and never mutated. The validity window is informational:
/// the client keeps sending an expired token and leaves rejection to the server.
#[derive(Clone)]
pub struct Credential {
	access_token: TokenSecret,
	expires_in: Duration,
	issued_at: OffsetDateTime,
}
impl Credential {
	/// Creates a credential issued now and valid for `expires_in_secs` seconds.
	pub fn new(access_token: impl Into<String>, expires_in_secs: i64) -> Self {
		Self::with_issued_at(access_token, expires_in_secs, OffsetDateTime::now_utc())
	}

	/// Creates a credential with an explicit issued-at instant.
	pub fn with_issued_at(
		access_token: impl Into<String>,
		expires_in_secs: i64,
		issued_at: OffsetDateTime,
	) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			expires_in: Duration::seconds(expires_in_secs),
			issued_at,
		}
	}

	/// Access token secret; callers must avoid logging it.
	pub fn access_token(&self) -> &TokenSecret {
		&self.access_token
	}

	/// Validity window reported by the server.
	pub fn expires_in(&self) -> Duration {
		self.expires_in
	}

	/// Instant the credential was installed.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.issued_at
	}

	/// Expiry instant derived from the issued-at instant and validity window.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.issued_at.saturating_add(self.expires_in)
	}

	/// Returns `true` if the validity window has elapsed at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at()
	}

	/// Returns `false` when the token string is empty, which counts as "not authenticated".
	pub fn is_authenticated(&self) -> bool {
		!self.access_token.is_blank()
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("issued_at", &self.issued_at)
			.finish()
	}
}
impl From<TokenGrant> for Credential {
	fn from(grant: TokenGrant) -> Self {
		Self::new(grant.access_token, grant.expires_in_secs)
	}
}

/// Payload returned by the authentication route.
///
/// Accepts PascalCase, camelCase, and snake_case field names.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
	/// Issued bearer token.
	#[serde(alias = "AccessToken", alias = "accessToken")]
	pub access_token: String,
	/// Remaining validity in seconds.
	#[serde(alias = "ExpiresInSecs", alias = "expiresInSecs", alias = "expires_in")]
	pub expires_in_secs: i64,
}
impl Debug for TokenGrant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenGrant")
			.field("access_token", &"<redacted>")
			.field("expires_in_secs", &self.expires_in_secs)
			.finish()
	}
}
