use serde::Deserialize;

use crate::data::User;
use crate::storage::{self, BrowserStorage, StoragePort};

// Key the provider's redirect page writes the identity under before the
// popup closes; consumed (and cleared) by the interactive flow.
pub static INTERACTIVE_RESULT_KEY: &str = "providerIdentity";

/// Classified failures from the identity provider. Each maps to one fixed
/// user-facing message; codes the client does not recognize are carried in
/// `Unrecognized` and surface as a generic message, never as a crash.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
	#[error("No account exists for that email address.")]
	UserNotFound,
	#[error("Incorrect password. Please try again.")]
	WrongPassword,
	#[error("That email address is not valid.")]
	InvalidEmail,
	#[error("This account has been disabled.")]
	UserDisabled,
	#[error("Too many attempts. Please try again later.")]
	RateLimited,
	#[error("An account already exists with that email address.")]
	EmailAlreadyInUse,
	#[error("That password is too weak.")]
	WeakPassword,
	#[error("This sign-in method is not enabled.")]
	OperationNotAllowed,
	#[error("Popup was blocked by the browser. Please allow popups for this site.")]
	PopupBlocked,
	#[error("Sign-in was cancelled.")]
	PopupCancelled,
	#[error("A network error interrupted the request. Please try again.")]
	Network,
	#[error("Something went wrong. Please try again.")]
	Unrecognized(String),
}

impl ProviderError {
	pub fn from_code(code: &str) -> Self {
		match code {
			"EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => Self::UserNotFound,
			"INVALID_PASSWORD" | "WRONG_PASSWORD" => Self::WrongPassword,
			"INVALID_EMAIL" => Self::InvalidEmail,
			"USER_DISABLED" => Self::UserDisabled,
			"TOO_MANY_ATTEMPTS_TRY_LATER" => Self::RateLimited,
			"EMAIL_EXISTS" => Self::EmailAlreadyInUse,
			"WEAK_PASSWORD" => Self::WeakPassword,
			"OPERATION_NOT_ALLOWED" => Self::OperationNotAllowed,
			other => Self::Unrecognized(other.to_owned()),
		}
	}

	pub fn user_message(&self) -> String {
		self.to_string()
	}
}

/// The credential the provider returns on success.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Identity {
	#[serde(rename = "localId")]
	pub uid: String,
	pub email: String,
	#[serde(default, rename = "displayName")]
	pub display_name: Option<String>,
}

impl Identity {
	/// Provider sessions carry no local password.
	pub fn into_user(self) -> User {
		User {
			name: self.display_name.clone().unwrap_or_default(),
			email: self.email,
			password: String::new(),
			uid: Some(self.uid),
			display_name: self.display_name,
		}
	}
}

#[derive(Deserialize)]
struct FailureEnvelope {
	error: Failure,
}

#[derive(Deserialize)]
struct Failure {
	message: String,
}

/// REST client for the hosted identity provider. The provider is opaque to
/// the rest of the app: requests go out, and either an `Identity` or a
/// classified `ProviderError` comes back.
#[derive(Clone)]
pub struct RemoteProvider {
	endpoint: String,
	api_key: String,
	client: reqwest::Client,
}

impl RemoteProvider {
	pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			api_key: api_key.into(),
			client: reqwest::Client::new(),
		}
	}

	fn url(&self, action: &str) -> String {
		format!("{}/v1/accounts:{action}?key={}", self.endpoint, self.api_key)
	}

	pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
		self.send(
			"signInWithPassword",
			&serde_json::json!({
				"email": email,
				"password": password,
				"returnSecureToken": true,
			}),
		)
		.await
	}

	pub async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
		self.send(
			"signUp",
			&serde_json::json!({
				"email": email,
				"password": password,
				"returnSecureToken": true,
			}),
		)
		.await
	}

	async fn send(&self, action: &str, body: &serde_json::Value) -> Result<Identity, ProviderError> {
		let response = self
			.client
			.post(self.url(action))
			.json(body)
			.send()
			.await
			.map_err(|err| {
				log::error!(target: env!("CARGO_PKG_NAME"), "Identity provider request failed: {err:?}");
				ProviderError::Network
			})?;
		let status = response.status();
		let text = response.text().await.map_err(|_| ProviderError::Network)?;
		if status.is_success() {
			return serde_json::from_str::<Identity>(&text).map_err(|err| {
				log::warn!(target: env!("CARGO_PKG_NAME"), "Unreadable provider response: {err}");
				ProviderError::Unrecognized(text)
			});
		}
		match serde_json::from_str::<FailureEnvelope>(&text) {
			// Codes may arrive with advisory text appended, e.g.
			// "WEAK_PASSWORD : Password should be at least 6 characters".
			Ok(envelope) => {
				let code = envelope
					.error
					.message
					.split_whitespace()
					.next()
					.unwrap_or_default()
					.to_owned();
				Err(ProviderError::from_code(&code))
			}
			Err(_) => Err(ProviderError::Unrecognized(text)),
		}
	}

	/// Opens the provider's consent page in a popup and waits for it to
	/// close. The redirect page writes the resulting identity under
	/// `INTERACTIVE_RESULT_KEY`; an empty hand when the popup closes means
	/// the user cancelled.
	pub async fn sign_in_interactive(&self, consent_url: &str) -> Result<Identity, ProviderError> {
		let window = gloo_utils::window();
		let popup = window
			.open_with_url_and_target(consent_url, "_blank")
			.map_err(|_| ProviderError::PopupBlocked)?
			.ok_or(ProviderError::PopupBlocked)?;
		loop {
			gloo_timers::future::TimeoutFuture::new(500).await;
			if popup.closed().unwrap_or(true) {
				break;
			}
		}
		let port = BrowserStorage;
		match storage::read_json::<Identity>(&port, INTERACTIVE_RESULT_KEY) {
			Some(identity) => {
				port.remove(INTERACTIVE_RESULT_KEY);
				Ok(identity)
			}
			None => Err(ProviderError::PopupCancelled),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_codes_classify() {
		assert_eq!(ProviderError::from_code("EMAIL_NOT_FOUND"), ProviderError::UserNotFound);
		assert_eq!(ProviderError::from_code("INVALID_PASSWORD"), ProviderError::WrongPassword);
		assert_eq!(ProviderError::from_code("INVALID_EMAIL"), ProviderError::InvalidEmail);
		assert_eq!(ProviderError::from_code("USER_DISABLED"), ProviderError::UserDisabled);
		assert_eq!(
			ProviderError::from_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
			ProviderError::RateLimited
		);
		assert_eq!(ProviderError::from_code("EMAIL_EXISTS"), ProviderError::EmailAlreadyInUse);
		assert_eq!(ProviderError::from_code("WEAK_PASSWORD"), ProviderError::WeakPassword);
		assert_eq!(
			ProviderError::from_code("OPERATION_NOT_ALLOWED"),
			ProviderError::OperationNotAllowed
		);
	}

	#[test]
	fn unknown_codes_fall_back_to_the_generic_message() {
		let err = ProviderError::from_code("SOMETHING_NEW");
		assert_eq!(err, ProviderError::Unrecognized("SOMETHING_NEW".into()));
		assert_eq!(err.user_message(), "Something went wrong. Please try again.");
	}

	#[test]
	fn every_classified_failure_has_a_fixed_message() {
		assert_eq!(
			ProviderError::UserNotFound.user_message(),
			"No account exists for that email address."
		);
		assert_eq!(
			ProviderError::PopupBlocked.user_message(),
			"Popup was blocked by the browser. Please allow popups for this site."
		);
		assert_eq!(ProviderError::PopupCancelled.user_message(), "Sign-in was cancelled.");
	}

	#[test]
	fn identity_becomes_a_passwordless_user() {
		let identity = Identity {
			uid: "abc123".into(),
			email: "ada@example.com".into(),
			display_name: Some("Ada".into()),
		};
		let user = identity.into_user();
		assert_eq!(user.name, "Ada");
		assert_eq!(user.email, "ada@example.com");
		assert_eq!(user.password, "");
		assert_eq!(user.uid.as_deref(), Some("abc123"));
		assert_eq!(user.display_name.as_deref(), Some("Ada"));
	}

	#[test]
	fn identity_without_display_name_keeps_an_empty_name() {
		let identity = Identity {
			uid: "abc123".into(),
			email: "ada@example.com".into(),
			display_name: None,
		};
		let user = identity.into_user();
		assert_eq!(user.name, "");
		// The navbar greeting falls back to the email in this case.
		assert_eq!(user.greeting_name(), "ada@example.com");
	}
}
