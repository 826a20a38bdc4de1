use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::components::{Level, Notices, TaskCard};
use crate::data::{Priority, Status, Task};
use crate::query::{self, Filter};
use crate::route::Route;
use crate::session::Session;
use crate::tasks::TaskStore;

#[function_component]
pub fn Dashboard() -> Html {
	let (task_store, task_dispatch) = use_store::<TaskStore>();
	let session = use_store_value::<Session>();
	let notices = use_store::<Notices>().1;
	let navigator = use_navigator().unwrap();

	let filter = use_state_eq(Filter::default);
	let page = use_state_eq(|| 1usize);
	// Any change to the criteria starts back at the first page.
	use_effect_with((*filter).clone(), {
		let page = page.clone();
		move |_| page.set(1)
	});

	let Some(user) = session.user() else {
		return html!();
	};
	let owned_count = task_store
		.tasks()
		.iter()
		.filter(|task| task.user_id == user.email)
		.count();
	let visible = query::visible(task_store.tasks(), &user.email, &filter);
	let (items, pagination) = query::paginate(&visible, *page);

	let on_search = Callback::from({
		let filter = filter.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			filter.set(Filter { search: input.value(), ..(*filter).clone() });
		}
	});
	let on_date = Callback::from({
		let filter = filter.clone();
		move |evt: Event| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			filter.set(Filter { due_date: input.value(), ..(*filter).clone() });
		}
	});
	let on_priority = Callback::from({
		let filter = filter.clone();
		move |evt: Event| {
			let Some(select) = evt.target_dyn_into::<HtmlSelectElement>() else {
				return;
			};
			filter.set(Filter {
				priority: Priority::from_label(&select.value()),
				..(*filter).clone()
			});
		}
	});
	let on_status = Callback::from({
		let filter = filter.clone();
		move |evt: Event| {
			let Some(select) = evt.target_dyn_into::<HtmlSelectElement>() else {
				return;
			};
			filter.set(Filter {
				status: Status::from_label(&select.value()),
				..(*filter).clone()
			});
		}
	});
	let clear_filters = Callback::from({
		let filter = filter.clone();
		move |_: MouseEvent| filter.set(Filter::default())
	});

	let on_edit = Callback::from({
		let navigator = navigator.clone();
		move |task: Task| {
			navigator.push(&Route::TaskEdit { id: task.id });
		}
	});
	let on_delete = Callback::from({
		let task_dispatch = task_dispatch.clone();
		let notices = notices.clone();
		move |id: AttrValue| {
			task_dispatch.reduce_mut(|store| store.delete(&id));
			notices.reduce_mut(|notices| notices.push(Level::Info, "Task deleted.", None));
		}
	});

	let prev_page = Callback::from({
		let page = page.clone();
		move |_: MouseEvent| page.set((*page).saturating_sub(1).max(1))
	});
	let next_page = Callback::from({
		let page = page.clone();
		let last = pagination.display_total();
		move |_: MouseEvent| page.set((*page + 1).min(last))
	});

	let listing = match (visible.is_empty(), owned_count) {
		(true, 0) => html!(<p class="text-body-secondary">{"No tasks added."}</p>),
		(true, _) => html!(<p class="text-body-secondary">{"No tasks match your search criteria."}</p>),
		(false, _) => html! {<>
			<div class="d-flex flex-column gap-3">
				{items.iter().map(|task| html! {
					<TaskCard
						key={task.id.clone()}
						task={(*task).clone()}
						on_edit={on_edit.clone()}
						on_delete={on_delete.clone()}
					/>
				}).collect::<Vec<_>>()}
			</div>
			<div class="d-flex justify-content-center align-items-center gap-3 mt-4">
				<button class="btn btn-outline-secondary btn-sm" onclick={prev_page} disabled={pagination.at_first()}>
					{"Prev"}
				</button>
				<span class="small">
					{format!("Page {} of {}", pagination.page, pagination.display_total())}
				</span>
				<button class="btn btn-outline-secondary btn-sm" onclick={next_page} disabled={pagination.at_last()}>
					{"Next"}
				</button>
			</div>
		</>},
	};

	html! {
		<div class="card mx-auto" style="max-width: 48rem;">
			<div class="card-body p-4">
				<h5 class="card-title mb-3">{"Your Tasks"}</h5>

				<div class="mb-3">
					<input
						type="search" class="form-control"
						placeholder="Search tasks by title..."
						value={filter.search.clone()}
						oninput={on_search}
					/>
				</div>
				<div class="d-flex flex-wrap align-items-center justify-content-center gap-2 mb-4">
					<input
						type="date" class="form-control form-control-sm w-auto"
						value={filter.due_date.clone()}
						onchange={on_date}
					/>
					<select class="form-select form-select-sm w-auto" onchange={on_priority}>
						<option value="" selected={filter.priority.is_none()}>{"Filter by Priority"}</option>
						{Priority::all().into_iter().map(|priority| html! {
							<option
								value={priority.label()}
								selected={filter.priority == Some(priority)}
							>
								{priority.label()}
							</option>
						}).collect::<Vec<_>>()}
					</select>
					<select class="form-select form-select-sm w-auto" onchange={on_status}>
						<option value="" selected={filter.status.is_none()}>{"Filter by Status"}</option>
						{Status::all().into_iter().map(|status| html! {
							<option
								value={status.label()}
								selected={filter.status == Some(status)}
							>
								{status.label()}
							</option>
						}).collect::<Vec<_>>()}
					</select>
					<button
						class="btn btn-outline-secondary btn-sm"
						onclick={clear_filters}
						disabled={filter.is_empty()}
					>
						{"Clear Filters"}
					</button>
				</div>

				{listing}
			</div>
		</div>
	}
}
