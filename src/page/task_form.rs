use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::components::{Level, Notices};
use crate::data::{Priority, Status, Task};
use crate::route::Route;
use crate::session::Session;
use crate::tasks::TaskStore;
use crate::{util, validate};

// Delay between a successful submit and the walk back to the dashboard.
const REDIRECT_MS: u32 = 2_000;

#[derive(Clone, PartialEq, Properties, Default)]
pub struct TaskFormProps {
	/// Present when editing an existing task; absent when adding.
	#[prop_or_default]
	pub task_id: Option<AttrValue>,
}

#[function_component]
pub fn TaskForm(TaskFormProps { task_id }: &TaskFormProps) -> Html {
	let (task_store, task_dispatch) = use_store::<TaskStore>();
	let session = use_store_value::<Session>();
	let notices = use_store::<Notices>().1;
	let navigator = use_navigator().unwrap();

	let form = use_state_eq({
		let task_store = task_store.clone();
		let task_id = task_id.clone();
		move || {
			task_id
				.and_then(|id| task_store.get(id.as_str()).cloned())
				.unwrap_or_default()
		}
	});
	let editing = !form.id.is_empty();

	// The deferred navigation is held here so tearing the form down cancels
	// a not-yet-fired walk to the dashboard.
	let redirect = use_mut_ref(|| None::<Timeout>);
	use_effect_with((), {
		let redirect = redirect.clone();
		move |_| {
			move || {
				redirect.borrow_mut().take();
			}
		}
	});

	let on_title = Callback::from({
		let form = form.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			form.set(Task { title: input.value(), ..(*form).clone() });
		}
	});
	let on_description = Callback::from({
		let form = form.clone();
		move |evt: InputEvent| {
			let Some(area) = evt.target_dyn_into::<HtmlTextAreaElement>() else {
				return;
			};
			form.set(Task { description: area.value(), ..(*form).clone() });
		}
	});
	let on_status = Callback::from({
		let form = form.clone();
		move |evt: Event| {
			let Some(select) = evt.target_dyn_into::<HtmlSelectElement>() else {
				return;
			};
			let Some(status) = Status::from_label(&select.value()) else {
				return;
			};
			form.set(Task { status, ..(*form).clone() });
		}
	});
	let on_priority = Callback::from({
		let form = form.clone();
		move |evt: Event| {
			let Some(select) = evt.target_dyn_into::<HtmlSelectElement>() else {
				return;
			};
			let Some(priority) = Priority::from_label(&select.value()) else {
				return;
			};
			form.set(Task { priority, ..(*form).clone() });
		}
	});
	let on_due_date = Callback::from({
		let form = form.clone();
		move |evt: Event| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			form.set(Task { due_date: input.value(), ..(*form).clone() });
		}
	});

	let on_submit = Callback::from({
		let form = form.clone();
		let session = session.clone();
		let task_dispatch = task_dispatch.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		let redirect = redirect.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			if let Some(message) = validate::task(&form.title, &form.description, &form.due_date) {
				notices.reduce_mut(|notices| {
					notices.push(Level::Error, "Invalid input.", Some(message.into()));
				});
				return;
			}
			match form.id.is_empty() {
				// New tasks get their id and owner here; the store never
				// assigns either.
				true => {
					let Some(user) = session.user() else {
						return;
					};
					let task = Task {
						id: uuid::Uuid::new_v4().to_string(),
						user_id: user.email.clone(),
						..(*form).clone()
					};
					task_dispatch.reduce_mut(|store| store.add(task));
					notices.reduce_mut(|notices| notices.push(Level::Success, "Task added.", None));
				}
				false => {
					task_dispatch.reduce_mut(|store| store.update((*form).clone()));
					notices.reduce_mut(|notices| notices.push(Level::Success, "Task updated.", None));
				}
			}
			form.set(Task::default());
			let navigator = navigator.clone();
			*redirect.borrow_mut() = Some(Timeout::new(REDIRECT_MS, move || {
				navigator.push(&Route::Dashboard);
			}));
		}
	});

	let heading = match editing {
		true => "Edit Task",
		false => "Add Task",
	};

	html! {
		<div class="card mx-auto" style="max-width: 28rem;">
			<div class="card-body p-4">
				<h5 class="card-title mb-4">{heading}</h5>
				<form onsubmit={on_submit} novalidate=true>
					<div class="mb-3">
						<label class="form-label" for="title">{"Title"}</label>
						<input
							id="title" name="title" type="text"
							class="form-control"
							value={form.title.clone()}
							oninput={on_title}
							placeholder="Max 5 words"
						/>
					</div>
					<div class="mb-3">
						<label class="form-label" for="description">{"Description"}</label>
						<textarea
							id="description" name="description" rows="3"
							class="form-control"
							value={form.description.clone()}
							oninput={on_description}
							placeholder="Max 200 characters"
							maxlength="200"
						/>
						<div class="form-text">
							{format!("{}/200 characters", form.description.chars().count())}
						</div>
					</div>
					<div class="mb-3">
						<label class="form-label" for="status">{"Status"}</label>
						<select id="status" name="status" class="form-select" onchange={on_status}>
							{Status::all().into_iter().map(|status| html! {
								<option value={status.label()} selected={form.status == status}>
									{status.label()}
								</option>
							}).collect::<Vec<_>>()}
						</select>
					</div>
					<div class="mb-3">
						<label class="form-label" for="priority">{"Priority"}</label>
						<select id="priority" name="priority" class="form-select" onchange={on_priority}>
							{Priority::all().into_iter().map(|priority| html! {
								<option value={priority.label()} selected={form.priority == priority}>
									{priority.label()}
								</option>
							}).collect::<Vec<_>>()}
						</select>
					</div>
					<div class="mb-3">
						<label class="form-label" for="due-date">{"Due Date"}</label>
						<input
							id="due-date" name="dueDate" type="date"
							class="form-control"
							min={util::local_today()}
							value={form.due_date.clone()}
							onchange={on_due_date}
						/>
					</div>
					<button type="submit" class="btn btn-primary w-100">
						{match editing {
							true => "Update Task",
							false => "Add Task",
						}}
					</button>
				</form>
			</div>
		</div>
	}
}
