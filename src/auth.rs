use crate::api::provider::{ProviderError, RemoteProvider};
use crate::data::User;

mod local;
pub use local::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AuthError {
	// Covers both an unknown email and a wrong password; callers must not
	// disclose which half failed.
	#[error("Invalid credentials")]
	InvalidCredentials,
	#[error("User already exists")]
	UserAlreadyExists,
	#[error(transparent)]
	Provider(#[from] ProviderError),
}

/// How the app authenticates, chosen once at configuration time. Both
/// strategies present the same surface so no page duplicates the flow.
#[derive(Clone)]
pub enum Backend {
	Local(CredentialStore),
	Remote(RemoteProvider),
}

impl Backend {
	pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
		match self {
			Self::Local(credentials) => credentials.sign_in(email, password),
			Self::Remote(provider) => {
				let identity = provider.sign_in(email, password).await?;
				Ok(identity.into_user())
			}
		}
	}

	pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
		match self {
			Self::Local(credentials) => credentials.sign_up(name, email, password),
			Self::Remote(provider) => {
				let mut identity = provider.sign_up(email, password).await?;
				if identity.display_name.is_none() && !name.is_empty() {
					identity.display_name = Some(name.to_owned());
				}
				let mut user = identity.into_user();
				if user.name.is_empty() {
					user.name = name.to_owned();
				}
				Ok(user)
			}
		}
	}
}
