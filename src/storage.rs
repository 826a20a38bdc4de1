use serde::{de::DeserializeOwned, Serialize};

/// Key-value port over whatever the host persists records in. Stores talk to
/// this instead of the window object so they can run against an in-memory
/// fake in tests.
pub trait StoragePort {
	fn read(&self, key: &str) -> Option<String>;
	fn write(&self, key: &str, value: String);
	fn remove(&self, key: &str);
}

/// window.localStorage, the only backing used by the running app.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl StoragePort for BrowserStorage {
	fn read(&self, key: &str) -> Option<String> {
		use gloo_storage::Storage;
		gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
	}

	fn write(&self, key: &str, value: String) {
		use gloo_storage::Storage;
		if let Err(err) = gloo_storage::LocalStorage::raw().set_item(key, &value) {
			log::error!(target: env!("CARGO_PKG_NAME"), "Failed to write {key:?} to local storage: {err:?}");
		}
	}

	fn remove(&self, key: &str) {
		use gloo_storage::Storage;
		gloo_storage::LocalStorage::delete(key);
	}
}

/// In-memory stand-in used by unit tests.
#[derive(Default)]
pub struct MemoryStorage(std::cell::RefCell<std::collections::HashMap<String, String>>);

impl StoragePort for MemoryStorage {
	fn read(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn write(&self, key: &str, value: String) {
		self.0.borrow_mut().insert(key.to_owned(), value);
	}

	fn remove(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}

/// Reads a record, treating a malformed payload the same as an absent one.
pub fn read_json<T>(port: &dyn StoragePort, key: &str) -> Option<T>
where
	T: DeserializeOwned,
{
	let raw = port.read(key)?;
	match serde_json::from_str::<T>(&raw) {
		Ok(value) => Some(value),
		Err(err) => {
			log::warn!(target: env!("CARGO_PKG_NAME"), "Ignoring malformed record at {key:?}: {err}");
			None
		}
	}
}

pub fn write_json<T>(port: &dyn StoragePort, key: &str, value: &T)
where
	T: Serialize,
{
	match serde_json::to_string(value) {
		Ok(raw) => port.write(key, raw),
		Err(err) => {
			log::error!(target: env!("CARGO_PKG_NAME"), "Failed to serialize record for {key:?}: {err}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roundtrip() {
		let port = MemoryStorage::default();
		write_json(&port, "numbers", &vec![1, 2, 3]);
		assert_eq!(read_json::<Vec<i32>>(&port, "numbers"), Some(vec![1, 2, 3]));
	}

	#[test]
	fn absent_key_reads_none() {
		let port = MemoryStorage::default();
		assert_eq!(read_json::<Vec<i32>>(&port, "numbers"), None);
	}

	#[test]
	fn malformed_payload_fails_closed() {
		let port = MemoryStorage::default();
		port.write("numbers", "not json".into());
		assert_eq!(read_json::<Vec<i32>>(&port, "numbers"), None);
	}

	#[test]
	fn remove_clears_the_record() {
		let port = MemoryStorage::default();
		write_json(&port, "numbers", &vec![1]);
		port.remove("numbers");
		assert_eq!(port.read("numbers"), None);
	}
}
