use serde::{Deserialize, Serialize};

/// A user-owned unit of work with status/priority/due-date metadata.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Task {
	pub id: String,
	// Email of the owning user. Tasks for every user share one persisted
	// collection, so visibility is always a filter over this field.
	#[serde(rename = "userId")]
	pub user_id: String,
	pub title: String,
	pub description: String,
	pub status: Status,
	pub priority: Priority,
	#[serde(rename = "dueDate")]
	pub due_date: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub enum Status {
	#[default]
	Pending,
	#[serde(rename = "In Progress")]
	InProgress,
	Completed,
}

impl Status {
	pub fn all() -> [Self; 3] {
		[Self::Pending, Self::InProgress, Self::Completed]
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Pending => "Pending",
			Self::InProgress => "In Progress",
			Self::Completed => "Completed",
		}
	}

	pub fn from_label(label: &str) -> Option<Self> {
		Self::all().into_iter().find(|status| status.label() == label)
	}

	pub fn badge_class(&self) -> &'static str {
		match self {
			Self::Pending => "text-bg-danger",
			Self::InProgress => "text-bg-warning",
			Self::Completed => "text-bg-success",
		}
	}
}

impl std::fmt::Display for Status {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub enum Priority {
	Low,
	#[default]
	Medium,
	High,
}

impl Priority {
	pub fn all() -> [Self; 3] {
		[Self::Low, Self::Medium, Self::High]
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Low => "Low",
			Self::Medium => "Medium",
			Self::High => "High",
		}
	}

	pub fn from_label(label: &str) -> Option<Self> {
		Self::all().into_iter().find(|priority| priority.label() == label)
	}
}

impl std::fmt::Display for Priority {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_with_original_field_names() {
		let task = Task {
			id: "t1".into(),
			user_id: "a@b.com".into(),
			title: "Write report".into(),
			description: "Quarterly".into(),
			status: Status::InProgress,
			priority: Priority::High,
			due_date: "2026-01-15".into(),
		};
		let json = serde_json::to_value(&task).unwrap();
		assert_eq!(json["userId"], "a@b.com");
		assert_eq!(json["dueDate"], "2026-01-15");
		assert_eq!(json["status"], "In Progress");
		assert_eq!(json["priority"], "High");
	}

	#[test]
	fn status_labels_roundtrip() {
		for status in Status::all() {
			assert_eq!(Status::from_label(status.label()), Some(status));
		}
		assert_eq!(Status::from_label(""), None);
	}

	#[test]
	fn priority_labels_roundtrip() {
		for priority in Priority::all() {
			assert_eq!(Priority::from_label(priority.label()), Some(priority));
		}
		assert_eq!(Priority::from_label("Urgent"), None);
	}
}
