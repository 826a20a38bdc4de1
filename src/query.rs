use crate::data::{Priority, Status, Task};

pub const PAGE_SIZE: usize = 5;

/// Dashboard search and filter criteria. Each criterion is independently
/// optional; empty criteria impose no constraint and all active criteria
/// must match (AND semantics).
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Filter {
	pub search: String,
	pub due_date: String,
	pub priority: Option<Priority>,
	pub status: Option<Status>,
}

impl Filter {
	pub fn is_empty(&self) -> bool {
		self.search.is_empty()
			&& self.due_date.is_empty()
			&& self.priority.is_none()
			&& self.status.is_none()
	}

	pub fn matches(&self, task: &Task) -> bool {
		let matches_search = task
			.title
			.to_lowercase()
			.contains(&self.search.to_lowercase());
		let matches_date = self.due_date.is_empty() || task.due_date == self.due_date;
		let matches_priority = self.priority.map_or(true, |priority| task.priority == priority);
		let matches_status = self.status.map_or(true, |status| task.status == status);
		matches_search && matches_date && matches_priority && matches_status
	}
}

/// The subset of the commingled collection owned by `email`, narrowed by the
/// filter. Ownership filtering is the sole access-control mechanism.
pub fn visible<'a>(tasks: &'a [Task], email: &str, filter: &Filter) -> Vec<&'a Task> {
	tasks
		.iter()
		.filter(|task| task.user_id == email)
		.filter(|task| filter.matches(task))
		.collect()
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pagination {
	/// Clamped, 1-based.
	pub page: usize,
	/// ceil(n / PAGE_SIZE); zero when there are no items.
	pub total_pages: usize,
}

impl Pagination {
	/// What the pager displays; an empty result still reads "Page 1 of 1".
	pub fn display_total(&self) -> usize {
		self.total_pages.max(1)
	}

	pub fn at_first(&self) -> bool {
		self.page <= 1
	}

	pub fn at_last(&self) -> bool {
		self.page >= self.total_pages
	}
}

/// Fixed-size page by integer slicing. Out-of-range requests clamp to the
/// nearest valid page rather than erroring.
pub fn paginate<T>(items: &[T], requested: usize) -> (&[T], Pagination) {
	let total_pages = items.len().div_ceil(PAGE_SIZE);
	let page = requested.clamp(1, total_pages.max(1));
	let start = (page - 1) * PAGE_SIZE;
	let end = (start + PAGE_SIZE).min(items.len());
	let slice = match start < items.len() {
		true => &items[start..end],
		false => &items[0..0],
	};
	(slice, Pagination { page, total_pages })
}

/// Per-user task counts shown on the profile page.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Summary {
	pub total: usize,
	pub pending: usize,
	pub in_progress: usize,
	pub completed: usize,
}

impl Summary {
	pub fn of(tasks: &[Task], email: &str) -> Self {
		tasks
			.iter()
			.filter(|task| task.user_id == email)
			.fold(Self::default(), |mut summary, task| {
				summary.total += 1;
				match task.status {
					Status::Pending => summary.pending += 1,
					Status::InProgress => summary.in_progress += 1,
					Status::Completed => summary.completed += 1,
				}
				summary
			})
	}

	pub fn completed_percent(&self) -> usize {
		match self.total {
			0 => 0,
			total => (self.completed * 100 + total / 2) / total,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn task(id: &str, owner: &str, title: &str, due: &str, priority: Priority, status: Status) -> Task {
		Task {
			id: id.into(),
			user_id: owner.into(),
			title: title.into(),
			description: String::new(),
			status,
			priority,
			due_date: due.into(),
		}
	}

	fn fixture() -> Vec<Task> {
		vec![
			task("1", "a@x.com", "Write report", "2026-01-01", Priority::High, Status::Pending),
			task("2", "a@x.com", "Review report", "2026-01-02", Priority::Low, Status::Completed),
			task("3", "b@x.com", "Write tests", "2026-01-01", Priority::High, Status::Pending),
			task("4", "a@x.com", "Groceries", "2026-01-01", Priority::High, Status::InProgress),
		]
	}

	#[test]
	fn visible_filters_by_owner() {
		let tasks = fixture();
		let visible = visible(&tasks, "a@x.com", &Filter::default());
		assert_eq!(visible.len(), 3);
		assert!(visible.iter().all(|task| task.user_id == "a@x.com"));
	}

	#[test]
	fn search_is_case_insensitive_substring() {
		let tasks = fixture();
		let filter = Filter { search: "REPORT".into(), ..Default::default() };
		let found = visible(&tasks, "a@x.com", &filter);
		assert_eq!(found.len(), 2);
	}

	#[test]
	fn criteria_combine_with_and_semantics() {
		let tasks = fixture();
		let filter = Filter {
			search: "w".into(),
			due_date: "2026-01-01".into(),
			priority: Some(Priority::High),
			status: Some(Status::Pending),
		};
		let found = visible(&tasks, "a@x.com", &filter);
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].id, "1");
	}

	#[test]
	fn criteria_order_is_immaterial() {
		// matches() is a conjunction, so any evaluation order must agree
		// with applying the criteria one at a time in both orders.
		let tasks = fixture();
		let date_only = Filter { due_date: "2026-01-01".into(), ..Default::default() };
		let priority_only = Filter { priority: Some(Priority::High), ..Default::default() };
		let both = Filter {
			due_date: "2026-01-01".into(),
			priority: Some(Priority::High),
			..Default::default()
		};
		let one_then_two: Vec<_> = visible(&tasks, "a@x.com", &date_only)
			.into_iter()
			.filter(|task| priority_only.matches(task))
			.map(|task| task.id.clone())
			.collect();
		let two_then_one: Vec<_> = visible(&tasks, "a@x.com", &priority_only)
			.into_iter()
			.filter(|task| date_only.matches(task))
			.map(|task| task.id.clone())
			.collect();
		let combined: Vec<_> = visible(&tasks, "a@x.com", &both)
			.into_iter()
			.map(|task| task.id.clone())
			.collect();
		assert_eq!(one_then_two, combined);
		assert_eq!(two_then_one, combined);
	}

	#[test]
	fn pagination_page_count_is_ceiling() {
		let items: Vec<u32> = (0..12).collect();
		let (page, info) = paginate(&items, 1);
		assert_eq!(info.total_pages, 3);
		assert_eq!(page, &[0, 1, 2, 3, 4]);
		let (page, info) = paginate(&items, 3);
		assert_eq!(page, &[10, 11]);
		assert!(info.at_last());
	}

	#[test]
	fn pagination_of_nothing_shows_an_empty_first_page() {
		let items: Vec<u32> = vec![];
		let (page, info) = paginate(&items, 1);
		assert!(page.is_empty());
		assert_eq!(info.page, 1);
		assert_eq!(info.total_pages, 0);
		assert_eq!(info.display_total(), 1);
		assert!(info.at_first());
		assert!(info.at_last());
	}

	#[test]
	fn pagination_clamps_out_of_range_requests() {
		let items: Vec<u32> = (0..7).collect();
		let (page, info) = paginate(&items, 99);
		assert_eq!(info.page, 2);
		assert_eq!(page, &[5, 6]);
		let (page, info) = paginate(&items, 0);
		assert_eq!(info.page, 1);
		assert_eq!(page.len(), 5);
		assert!(info.at_first());
	}

	#[test]
	fn summary_counts_by_status_for_one_owner() {
		let tasks = fixture();
		let summary = Summary::of(&tasks, "a@x.com");
		assert_eq!(summary.total, 3);
		assert_eq!(summary.pending, 1);
		assert_eq!(summary.in_progress, 1);
		assert_eq!(summary.completed, 1);
		assert_eq!(summary.completed_percent(), 33);
		assert_eq!(Summary::of(&tasks, "nobody@x.com").total, 0);
	}
}
