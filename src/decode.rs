//! Typed JSON decoding with a bracket pre-check.
//!
//! Only object (`{…}`) and array (`[…]`) bodies are accepted. Anything else—an HTML error page, a
//! plain-text message, or a bare JSON scalar—fails before a parse is attempted. Parse failures
//! carry the JSON path where decoding stopped, captured through `serde_path_to_error`.

// std
use std::any;
// self
use crate::_prelude::*;

/// Decoding failure naming the expected type.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// The trimmed body is not wrapped in a matching `{…}` or `[…]` pair.
	#[error("Could not deserialize payload to type {type_name}: body is not a JSON object or array.")]
	NotJson {
		/// Expected Rust type.
		type_name: &'static str,
	},
	/// The body looked like JSON but did not match the expected shape.
	#[error("Could not deserialize payload to type {type_name} at `{path}`: {source}.")]
	Malformed {
		/// Expected Rust type.
		type_name: &'static str,
		/// JSON path where decoding failed; `.` denotes the root.
		path: String,
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
}
impl DecodeError {
	/// Name of the type decoding targeted.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::NotJson { type_name } | Self::Malformed { type_name, .. } => type_name,
		}
	}
}

/// Returns `true` when the trimmed body is wrapped in a matching object or array bracket pair.
pub fn looks_like_json(raw: &str) -> bool {
	let trimmed = raw.trim();

	(trimmed.starts_with('{') && trimmed.ends_with('}'))
		|| (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Decodes `raw` into `T`; either the full shape parses or the call fails.
pub fn decode<T>(raw: &str) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	let type_name = any::type_name::<T>();

	if !looks_like_json(raw) {
		return Err(DecodeError::NotJson { type_name });
	}

	let mut de = serde_json::Deserializer::from_str(raw.trim());
	let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(|err| {
		let path = err.path().to_string();

		DecodeError::Malformed { type_name, path, source: err.into_inner() }
	})?;

	de.end().map_err(|source| DecodeError::Malformed { type_name, path: ".".into(), source })?;

	Ok(value)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
	struct Ticket {
		id: String,
	}

	#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
	struct Wallet {
		gold: u32,
		gems: u32,
		tickets: Vec<Ticket>,
	}

	#[test]
	fn decodes_objects_and_arrays() {
		let ticket: Ticket = decode(r#"  {"id":"42"}  "#).expect("Object body should decode.");

		assert_eq!(ticket, Ticket { id: "42".into() });

		let tickets: Vec<Ticket> =
			decode(r#"[{"id":"1"},{"id":"2"}]"#).expect("Array body should decode.");

		assert_eq!(tickets.len(), 2);
	}

	#[test]
	fn round_trips_serialized_values() {
		let wallet = Wallet {
			gold: 120,
			gems: 3,
			tickets: vec![Ticket { id: "a".into() }, Ticket { id: "b".into() }],
		};
		let encoded = serde_json::to_string(&wallet).expect("Wallet should serialize.");
		let decoded: Wallet = decode(&encoded).expect("Serialized wallet should decode.");

		assert_eq!(decoded, wallet);
	}

	#[test]
	fn html_fails_the_pre_check() {
		let err = decode::<Ticket>("<html>not json</html>")
			.expect_err("HTML body should fail the pre-check.");

		assert!(matches!(err, DecodeError::NotJson { .. }));
		assert!(err.to_string().contains("Ticket"), "Unexpected message: {err}.");
	}

	#[test]
	fn scalars_fail_the_pre_check() {
		for body in ["42", "\"text\"", "true", "null", "{", "[}"] {
			assert!(
				matches!(decode::<serde_json::Value>(body), Err(DecodeError::NotJson { .. })),
				"Body {body:?} should fail the pre-check."
			);
		}
	}

	#[test]
	fn shape_mismatch_reports_path_and_type() {
		let err = decode::<Wallet>(r#"{"gold":1,"gems":"many","tickets":[]}"#)
			.expect_err("Mismatched field should fail decoding.");

		match &err {
			DecodeError::Malformed { path, .. } => assert_eq!(path, "gems"),
			other => panic!("Unexpected error variant: {other:?}."),
		}

		assert!(err.type_name().ends_with("Wallet"));
	}

	#[test]
	fn trailing_content_is_rejected() {
		assert!(matches!(
			decode::<Ticket>(r#"{"id":"1"} {"id":"2"}"#),
			Err(DecodeError::Malformed { .. })
		));
	}

	#[test]
	fn syntax_errors_are_contained() {
		assert!(matches!(decode::<Ticket>(r#"{"id": }"#), Err(DecodeError::Malformed { .. })));
	}
}
