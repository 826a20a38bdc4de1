use std::rc::Rc;

use yewdux::prelude::*;

use crate::data::User;
use crate::storage::{self, BrowserStorage, StoragePort};

pub static CURRENT_USER_KEY: &str = "currentUser";
// Older builds stored the record under this key. It is still honored on
// load, but never written.
pub static LEGACY_USER_KEY: &str = "user";

/// The logged-in user, mirrored to persisted storage. At most one session
/// exists per process; loading in `Store::new` is the sole recovery
/// mechanism after a restart.
#[derive(Clone)]
pub struct Session {
	user: Option<User>,
	port: Rc<dyn StoragePort>,
}

impl PartialEq for Session {
	fn eq(&self, other: &Self) -> bool {
		self.user == other.user && Rc::ptr_eq(&self.port, &other.port)
	}
}

impl Store for Session {
	fn new(_cx: &yewdux::Context) -> Self {
		Self::over(Rc::new(BrowserStorage))
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl Session {
	pub fn over(port: Rc<dyn StoragePort>) -> Self {
		let user = storage::read_json::<User>(&*port, CURRENT_USER_KEY)
			.or_else(|| storage::read_json::<User>(&*port, LEGACY_USER_KEY));
		Self { user, port }
	}

	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}

	/// Replaces any prior session, in memory and in storage.
	pub fn login(&mut self, user: User) {
		storage::write_json(&*self.port, CURRENT_USER_KEY, &user);
		log::info!(target: env!("CARGO_PKG_NAME"), "Session established for {:?}", user.email);
		self.user = Some(user);
	}

	pub fn logout(&mut self) {
		self.port.remove(CURRENT_USER_KEY);
		self.port.remove(LEGACY_USER_KEY);
		self.user = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStorage;

	fn user(email: &str) -> User {
		User {
			name: "Ada".into(),
			email: email.into(),
			password: "Passw0rd!".into(),
			..Default::default()
		}
	}

	#[test]
	fn starts_empty_without_a_persisted_record() {
		let session = Session::over(Rc::new(MemoryStorage::default()));
		assert_eq!(session.user(), None);
	}

	#[test]
	fn login_persists_and_survives_a_restart() {
		let port: Rc<dyn StoragePort> = Rc::new(MemoryStorage::default());
		let mut session = Session::over(port.clone());
		session.login(user("ada@example.com"));
		assert_eq!(session.user().map(|u| u.email.as_str()), Some("ada@example.com"));

		let rehydrated = Session::over(port);
		assert_eq!(rehydrated.user().map(|u| u.email.as_str()), Some("ada@example.com"));
	}

	#[test]
	fn login_replaces_the_prior_session() {
		let port: Rc<dyn StoragePort> = Rc::new(MemoryStorage::default());
		let mut session = Session::over(port.clone());
		session.login(user("first@example.com"));
		session.login(user("second@example.com"));
		let rehydrated = Session::over(port);
		assert_eq!(rehydrated.user().map(|u| u.email.as_str()), Some("second@example.com"));
	}

	#[test]
	fn logout_removes_both_storage_keys() {
		let port = Rc::new(MemoryStorage::default());
		storage::write_json(&*port, LEGACY_USER_KEY, &user("old@example.com"));
		let mut session = Session::over(port.clone());
		session.login(user("ada@example.com"));
		session.logout();
		assert_eq!(session.user(), None);
		assert_eq!(port.read(CURRENT_USER_KEY), None);
		assert_eq!(port.read(LEGACY_USER_KEY), None);
	}

	#[test]
	fn load_falls_back_to_the_legacy_key() {
		let port = Rc::new(MemoryStorage::default());
		storage::write_json(&*port, LEGACY_USER_KEY, &user("old@example.com"));
		let session = Session::over(port);
		assert_eq!(session.user().map(|u| u.email.as_str()), Some("old@example.com"));
	}

	#[test]
	fn primary_key_wins_over_legacy() {
		let port = Rc::new(MemoryStorage::default());
		storage::write_json(&*port, LEGACY_USER_KEY, &user("old@example.com"));
		storage::write_json(&*port, CURRENT_USER_KEY, &user("new@example.com"));
		let session = Session::over(port);
		assert_eq!(session.user().map(|u| u.email.as_str()), Some("new@example.com"));
	}

	#[test]
	fn malformed_session_record_fails_closed() {
		let port = Rc::new(MemoryStorage::default());
		port.write(CURRENT_USER_KEY, "{not json".into());
		let session = Session::over(port);
		assert_eq!(session.user(), None);
	}
}
