use crate::api::provider::RemoteProvider;
use crate::auth::{Backend, CredentialStore};

// Set at build time to route signup/login through the hosted identity
// provider instead of the local credential list.
pub static PROVIDER_ENDPOINT: Option<&str> = option_env!("TASKTRACK_PROVIDER_ENDPOINT");
pub static PROVIDER_API_KEY: Option<&str> = option_env!("TASKTRACK_PROVIDER_API_KEY");
// Consent page for the interactive (popup) sign-in; only offered when the
// remote provider is active.
pub static PROVIDER_CONSENT_URL: Option<&str> = option_env!("TASKTRACK_PROVIDER_CONSENT_URL");

/// The local credential path is authoritative; the provider is only used
/// when both endpoint and key are configured.
pub fn auth_backend() -> Backend {
	match (PROVIDER_ENDPOINT, PROVIDER_API_KEY) {
		(Some(endpoint), Some(key)) => Backend::Remote(RemoteProvider::new(endpoint, key)),
		_ => Backend::Local(CredentialStore::browser()),
	}
}

pub fn interactive_sign_in_url() -> Option<&'static str> {
	match (PROVIDER_ENDPOINT, PROVIDER_API_KEY) {
		(Some(_), Some(_)) => PROVIDER_CONSENT_URL,
		_ => None,
	}
}
