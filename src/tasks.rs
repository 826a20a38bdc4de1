use std::rc::Rc;

use yewdux::prelude::*;

use crate::data::Task;
use crate::storage::{self, BrowserStorage, StoragePort};

pub static TASKS_KEY: &str = "tasks";

/// Every user's tasks in one commingled collection. Each mutation rewrites
/// the complete collection, so the persisted form always equals what is in
/// memory.
#[derive(Clone)]
pub struct TaskStore {
	tasks: Vec<Task>,
	port: Rc<dyn StoragePort>,
}

impl PartialEq for TaskStore {
	fn eq(&self, other: &Self) -> bool {
		self.tasks == other.tasks && Rc::ptr_eq(&self.port, &other.port)
	}
}

impl Store for TaskStore {
	fn new(_cx: &yewdux::Context) -> Self {
		Self::over(Rc::new(BrowserStorage))
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl TaskStore {
	pub fn over(port: Rc<dyn StoragePort>) -> Self {
		let tasks = storage::read_json::<Vec<Task>>(&*port, TASKS_KEY).unwrap_or_default();
		Self { tasks, port }
	}

	pub fn tasks(&self) -> &[Task] {
		&self.tasks
	}

	pub fn get(&self, id: &str) -> Option<&Task> {
		self.tasks.iter().find(|task| task.id == id)
	}

	/// The caller has already assigned a unique id and the owner's user id.
	pub fn add(&mut self, task: Task) {
		self.tasks.push(task);
		self.persist();
	}

	/// Replaces the first record with a matching id. A miss is silently
	/// ignored and leaves persisted state untouched.
	pub fn update(&mut self, task: Task) {
		let Some(slot) = self.tasks.iter_mut().find(|existing| existing.id == task.id) else {
			return;
		};
		*slot = task;
		self.persist();
	}

	pub fn delete(&mut self, id: &str) {
		self.tasks.retain(|task| task.id != id);
		self.persist();
	}

	pub fn clear_for_user(&mut self, user_id: &str) {
		self.tasks.retain(|task| task.user_id != user_id);
		self.persist();
	}

	fn persist(&self) {
		storage::write_json(&*self.port, TASKS_KEY, &self.tasks);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Priority, Status};
	use crate::storage::MemoryStorage;

	fn task(id: &str, owner: &str, title: &str) -> Task {
		Task {
			id: id.into(),
			user_id: owner.into(),
			title: title.into(),
			description: "desc".into(),
			status: Status::Pending,
			priority: Priority::Medium,
			due_date: "2026-01-01".into(),
		}
	}

	fn store() -> (TaskStore, Rc<MemoryStorage>) {
		let port = Rc::new(MemoryStorage::default());
		(TaskStore::over(port.clone()), port)
	}

	#[test]
	fn starts_empty_without_a_persisted_collection() {
		let (store, _port) = store();
		assert!(store.tasks().is_empty());
	}

	#[test]
	fn add_then_delete_roundtrips_and_spares_others() {
		let (mut store, port) = store();
		store.add(task("keep", "a@x.com", "Keep me"));
		store.add(task("drop", "a@x.com", "Drop me"));
		store.delete("drop");
		assert_eq!(store.tasks().len(), 1);
		assert_eq!(store.tasks()[0].id, "keep");

		let rehydrated = TaskStore::over(port);
		assert_eq!(rehydrated.tasks().len(), 1);
		assert_eq!(rehydrated.tasks()[0].id, "keep");
	}

	#[test]
	fn update_replaces_only_the_matching_record() {
		let (mut store, _port) = store();
		store.add(task("1", "a@x.com", "Original"));
		store.add(task("2", "a@x.com", "Untouched"));
		let mut changed = task("1", "a@x.com", "Renamed");
		changed.status = Status::Completed;
		store.update(changed);
		assert_eq!(store.tasks()[0].title, "Renamed");
		assert_eq!(store.tasks()[0].status, Status::Completed);
		assert_eq!(store.tasks()[0].id, "1");
		assert_eq!(store.tasks()[0].user_id, "a@x.com");
		assert_eq!(store.tasks()[1].title, "Untouched");
	}

	#[test]
	fn update_miss_is_a_silent_no_op() {
		let (mut store, port) = store();
		store.add(task("1", "a@x.com", "Original"));
		let persisted_before = port.read(TASKS_KEY);
		store.update(task("ghost", "a@x.com", "Never stored"));
		assert_eq!(store.tasks().len(), 1);
		assert_eq!(store.tasks()[0].title, "Original");
		assert_eq!(port.read(TASKS_KEY), persisted_before);
	}

	#[test]
	fn clear_for_user_removes_exactly_that_owner() {
		let (mut store, _port) = store();
		store.add(task("1", "a@x.com", "Mine"));
		store.add(task("2", "b@x.com", "Theirs"));
		store.add(task("3", "a@x.com", "Also mine"));
		store.clear_for_user("a@x.com");
		assert_eq!(store.tasks().len(), 1);
		assert_eq!(store.tasks()[0].user_id, "b@x.com");
	}

	#[test]
	fn persisted_form_is_the_complete_collection() {
		let (mut store, port) = store();
		store.add(task("1", "a@x.com", "One"));
		store.add(task("2", "b@x.com", "Two"));
		let raw = port.read(TASKS_KEY).unwrap();
		let parsed: Vec<Task> = serde_json::from_str(&raw).unwrap();
		assert_eq!(parsed, store.tasks());
		// Field names stay interop-compatible with the original records.
		assert!(raw.contains("\"userId\""));
		assert!(raw.contains("\"dueDate\""));
	}

	#[test]
	fn malformed_collection_fails_closed_to_empty() {
		let port = Rc::new(MemoryStorage::default());
		port.write(TASKS_KEY, "[{broken".into());
		let store = TaskStore::over(port);
		assert!(store.tasks().is_empty());
	}
}
