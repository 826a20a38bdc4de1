use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::auth::CredentialStore;
use crate::components::{field_class, field_feedback, Level, Notices, StrengthBar};
use crate::data::User;
use crate::query::Summary;
use crate::session::Session;
use crate::tasks::TaskStore;
use crate::validate;

#[derive(Clone, PartialEq, Default)]
struct Form {
	name: String,
	password: String,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Errors {
	name: Option<&'static str>,
	password: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Touched {
	name: bool,
	password: bool,
}

#[function_component]
pub fn Profile() -> Html {
	let (session, session_dispatch) = use_store::<Session>();
	let task_store = use_store_value::<TaskStore>();
	let notices = use_store::<Notices>().1;

	let editing = use_state_eq(|| false);
	let show_password = use_state_eq(|| false);
	let form = use_state_eq({
		let user = session.user().cloned();
		move || {
			let user = user.unwrap_or_default();
			Form { name: user.name, password: user.password }
		}
	});
	let errors = use_state_eq(Errors::default);
	let touched = use_state_eq(Touched::default);

	// Hooks all run above; the route guard means this only trips while a
	// logout is unmounting the page.
	let Some(user) = session.user().cloned() else {
		return html!();
	};

	let summary = Summary::of(task_store.tasks(), &user.email);

	let on_name_input = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			let value = input.value();
			if touched.name {
				errors.set(Errors { name: validate::name(&value), ..*errors });
			}
			form.set(Form { name: value, password: form.password.clone() });
		}
	});
	let on_password_input = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			let value = input.value();
			if touched.password {
				errors.set(Errors { password: validate::password(&value), ..*errors });
			}
			form.set(Form { name: form.name.clone(), password: value });
		}
	});
	let on_name_blur = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |_: FocusEvent| {
			touched.set(Touched { name: true, ..*touched });
			errors.set(Errors { name: validate::name(&form.name), ..*errors });
		}
	});
	let on_password_blur = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |_: FocusEvent| {
			touched.set(Touched { password: true, ..*touched });
			errors.set(Errors { password: validate::password(&form.password), ..*errors });
		}
	});

	let begin_edit = Callback::from({
		let editing = editing.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |_: MouseEvent| {
			editing.set(true);
			touched.set(Touched::default());
			errors.set(Errors::default());
		}
	});
	let cancel_edit = Callback::from({
		let editing = editing.clone();
		let show_password = show_password.clone();
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		let user = user.clone();
		move |_: MouseEvent| {
			form.set(Form { name: user.name.clone(), password: user.password.clone() });
			editing.set(false);
			touched.set(Touched::default());
			errors.set(Errors::default());
			show_password.set(false);
		}
	});
	let toggle_password = Callback::from({
		let show_password = show_password.clone();
		move |_: MouseEvent| show_password.set(!*show_password)
	});

	let save = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		let editing = editing.clone();
		let show_password = show_password.clone();
		let session_dispatch = session_dispatch.clone();
		let notices = notices.clone();
		let user = user.clone();
		move |_: MouseEvent| {
			let name_error = validate::name(&form.name);
			let password_error = validate::password(&form.password);
			errors.set(Errors { name: name_error, password: password_error });
			touched.set(Touched { name: true, password: true });
			if name_error.is_some() || password_error.is_some() {
				notices.reduce_mut(|notices| {
					notices.push(
						Level::Error,
						"Validation Error",
						Some("Please fix the errors before saving".into()),
					);
				});
				return;
			}
			// The credential list is rewritten in place (email unchanged),
			// then the session record follows it.
			CredentialStore::browser().update_profile(&user.email, &form.name, &form.password);
			let updated = User {
				name: form.name.clone(),
				password: form.password.clone(),
				..user.clone()
			};
			session_dispatch.reduce_mut(|session| session.login(updated));
			editing.set(false);
			show_password.set(false);
			notices.reduce_mut(|notices| {
				notices.push(
					Level::Success,
					"Profile updated successfully",
					Some("Your profile information has been saved.".into()),
				);
			});
		}
	});

	let has_changes = form.name != user.name || form.password != user.password;
	let form_valid = errors.name.is_none()
		&& errors.password.is_none()
		&& !form.name.is_empty()
		&& !form.password.is_empty();

	let password_type = match *show_password {
		true => "text",
		false => "password",
	};

	let settings = html! {
		<div class="card h-100">
			<div class="card-body p-4">
				<div class="d-flex justify-content-between align-items-center mb-4">
					<h5 class="card-title mb-0">{"Profile Settings"}</h5>
					{(!*editing).then(|| html! {
						<button class="btn btn-primary btn-sm" onclick={begin_edit.clone()}>
							{"Edit Profile"}
						</button>
					})}
				</div>

				<div class="mb-3">
					<label class="form-label" for="profile-name">{"Full Name"}</label>
					<input
						id="profile-name" name="name" type="text"
						class={field_class(touched.name, errors.name)}
						value={form.name.clone()}
						oninput={on_name_input} onblur={on_name_blur}
						placeholder="Enter your full name"
						readonly={!*editing}
					/>
					{field_feedback(touched.name, errors.name)}
				</div>

				<div class="mb-3">
					<label class="form-label" for="profile-email">{"Email"}</label>
					<input
						id="profile-email" name="email" type="email"
						class="form-control"
						value={user.email.clone()}
						readonly=true
					/>
					<div class="form-text">
						{"Email cannot be changed as it's used for account identification"}
					</div>
				</div>

				<div class="mb-3">
					<label class="form-label" for="profile-password">{"Password"}</label>
					<div class="input-group">
						<input
							id="profile-password" name="password" type={password_type}
							class={field_class(touched.password, errors.password)}
							value={form.password.clone()}
							oninput={on_password_input} onblur={on_password_blur}
							placeholder="Enter your password"
							readonly={!*editing}
						/>
						<button
							type="button" class="btn btn-outline-secondary"
							onclick={toggle_password}
							aria-label={match *show_password {
								true => "Hide password",
								false => "Show password",
							}}
						>
							{match *show_password {
								true => "Hide",
								false => "Show",
							}}
						</button>
					</div>
					{(*editing).then(|| html!(<StrengthBar password={form.password.clone()} />))}
					{field_feedback(touched.password, errors.password)}
				</div>

				{match *editing {
					true => html! {
						<div class="d-flex justify-content-end gap-2 border-top pt-3">
							<button class="btn btn-outline-secondary" onclick={cancel_edit.clone()}>
								{"Cancel"}
							</button>
							<button
								class="btn btn-success"
								onclick={save.clone()}
								disabled={!has_changes || !form_valid}
							>
								{"Save Changes"}
							</button>
						</div>
					},
					false => html! {
						<div class="form-text text-center">
							{"Click \"Edit Profile\" to modify your information"}
						</div>
					},
				}}
			</div>
		</div>
	};

	let breakdown_row = |label: &'static str, dot: &'static str, count: usize| {
		html! {
			<div class="d-flex justify-content-between align-items-center bg-body-secondary rounded p-2">
				<div class="d-flex align-items-center gap-2">
					<span class={classes!("rounded-circle", "d-inline-block", dot)} style="width: 12px; height: 12px;" />
					<span class="small">{label}</span>
				</div>
				<span class="small fw-bold">{count}</span>
			</div>
		}
	};

	let summary_panel = html! {
		<div class="card h-100">
			<div class="card-body p-4">
				<h5 class="card-title mb-4">{"Task Summary"}</h5>
				{match summary.total {
					0 => html! {
						<p class="text-body-secondary text-center py-4">
							{"No tasks created yet. Create your first task to see the summary."}
						</p>
					},
					_ => html! {<>
						<div class="row g-3 mb-4">
							<div class="col-6">
								<div class="bg-body-secondary rounded text-center p-3">
									<div class="small">{"Total Tasks"}</div>
									<div class="fs-3 fw-bold text-primary">{summary.total}</div>
								</div>
							</div>
							<div class="col-6">
								<div class="bg-body-secondary rounded text-center p-3">
									<div class="small">{"Completed"}</div>
									<div class="fs-3 fw-bold text-success">{summary.completed}</div>
									<div class="form-text">{format!("{}%", summary.completed_percent())}</div>
								</div>
							</div>
						</div>
						<div class="d-flex flex-column gap-2">
							{breakdown_row("Pending", "bg-danger", summary.pending)}
							{breakdown_row("In Progress", "bg-warning", summary.in_progress)}
							{breakdown_row("Completed", "bg-success", summary.completed)}
						</div>
					</>},
				}}
			</div>
		</div>
	};

	html! {
		<div class="row g-4">
			<div class="col-lg-6">{settings}</div>
			<div class="col-lg-6">{summary_panel}</div>
		</div>
	}
}
