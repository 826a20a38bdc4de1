use yew::prelude::*;

use crate::data::Task;

#[derive(Clone, PartialEq, Properties)]
pub struct TaskCardProps {
	pub task: Task,
	pub on_edit: Callback<Task>,
	pub on_delete: Callback<AttrValue>,
}

/// One dashboard row. Clicking the card body toggles between the summary
/// face and the description face; the buttons never toggle.
#[function_component]
pub fn TaskCard(props: &TaskCardProps) -> Html {
	let TaskCardProps { task, on_edit, on_delete } = props;
	let flipped = use_state_eq(|| false);

	let toggle = {
		let flipped = flipped.clone();
		Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
	};
	let edit = {
		let task = task.clone();
		on_edit.reform(move |evt: MouseEvent| {
			evt.stop_propagation();
			task.clone()
		})
	};
	let delete = {
		let id: AttrValue = task.id.clone().into();
		on_delete.reform(move |evt: MouseEvent| {
			evt.stop_propagation();
			id.clone()
		})
	};

	let body = match *flipped {
		false => html! {
			<div class="flex-fill min-w-0">
				<div class="fw-bold">{&task.title}</div>
				<div class="text-body-secondary small mt-1">{format!("Due: {}", task.due_date)}</div>
				<div class="d-flex gap-2 mt-1">
					<span class="badge text-bg-secondary">{task.priority.label()}</span>
					<span class={classes!("badge", task.status.badge_class())}>{task.status.label()}</span>
				</div>
				<div class="text-body-tertiary small mt-1">{"Click to view description"}</div>
			</div>
		},
		true => html! {
			<div class="flex-fill min-w-0 d-flex align-items-center justify-content-center">
				<div class="text-center px-2">
					{match task.description.is_empty() {
						false => task.description.as_str(),
						true => "No description provided",
					}}
				</div>
			</div>
		},
	};

	html! {
		<div class="card" role="button" onclick={toggle}>
			<div class="card-body d-flex align-items-center gap-3">
				{body}
				<div class="d-flex flex-column flex-md-row gap-2">
					<button class="btn btn-warning btn-sm" onclick={edit}>{"Edit"}</button>
					<button class="btn btn-danger btn-sm" onclick={delete}>{"Delete"}</button>
				</div>
			</div>
		</div>
	}
}
