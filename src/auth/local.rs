use std::rc::Rc;

use super::AuthError;
use crate::data::User;
use crate::storage::{self, BrowserStorage, StoragePort};

pub static USERS_KEY: &str = "users";

/// The local credential list: an ordered sequence of user records, append
/// only except for the in-place profile update. Lookup and uniqueness are
/// keyed by email.
#[derive(Clone)]
pub struct CredentialStore {
	port: Rc<dyn StoragePort>,
}

impl CredentialStore {
	pub fn over(port: Rc<dyn StoragePort>) -> Self {
		Self { port }
	}

	pub fn browser() -> Self {
		Self::over(Rc::new(BrowserStorage))
	}

	pub fn all(&self) -> Vec<User> {
		storage::read_json::<Vec<User>>(&*self.port, USERS_KEY).unwrap_or_default()
	}

	/// Appends a new credential record and returns it. An existing record
	/// with the same email is never overwritten.
	pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
		let mut users = self.all();
		if users.iter().any(|user| user.email == email) {
			return Err(AuthError::UserAlreadyExists);
		}
		let user = User {
			name: name.to_owned(),
			email: email.to_owned(),
			password: password.to_owned(),
			..Default::default()
		};
		users.push(user.clone());
		self.persist(&users);
		log::info!(target: env!("CARGO_PKG_NAME"), "Registered credential record for {email:?}");
		Ok(user)
	}

	/// Exact email and password match; a miss never says which half failed.
	pub fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
		self.all()
			.into_iter()
			.find(|user| user.email == email && user.password == password)
			.ok_or(AuthError::InvalidCredentials)
	}

	/// Rewrites name and password on the record matching `email` (the email
	/// itself is immutable). Returns the updated record, or None when no
	/// record matched.
	pub fn update_profile(&self, email: &str, name: &str, password: &str) -> Option<User> {
		let mut users = self.all();
		let mut updated = None;
		for user in users.iter_mut().filter(|user| user.email == email) {
			user.name = name.to_owned();
			user.password = password.to_owned();
			updated = Some(user.clone());
		}
		if updated.is_some() {
			self.persist(&users);
		}
		updated
	}

	fn persist(&self, users: &[User]) {
		storage::write_json(&*self.port, USERS_KEY, &users);
	}
}
