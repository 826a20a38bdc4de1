use serde::{Deserialize, Serialize};

/// A stored identity. The local credential path keeps the plaintext password
/// alongside it; `uid` and `displayName` only appear on identities minted by
/// the external provider.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct User {
	pub name: String,
	pub email: String,
	pub password: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	#[serde(default, rename = "displayName", skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
}

impl User {
	pub fn greeting_name(&self) -> &str {
		match self.name.is_empty() {
			false => &self.name,
			true => &self.email,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn local_records_omit_provider_fields() {
		let user = User {
			name: "Ada Lovelace".into(),
			email: "ada@example.com".into(),
			password: "Passw0rd!".into(),
			..Default::default()
		};
		let json = serde_json::to_string(&user).unwrap();
		assert!(!json.contains("uid"));
		assert!(!json.contains("displayName"));
	}

	#[test]
	fn greeting_prefers_name_over_email() {
		let mut user = User {
			email: "ada@example.com".into(),
			..Default::default()
		};
		assert_eq!(user.greeting_name(), "ada@example.com");
		user.name = "Ada".into();
		assert_eq!(user.greeting_name(), "Ada");
	}
}
