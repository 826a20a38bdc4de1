use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::*;

use crate::auth::AuthError;
use crate::components::{field_class, field_feedback, Level, Notices, StrengthBar};
use crate::route::Route;
use crate::session::Session;
use crate::{config, util, validate};

// Delay before a rejected duplicate signup is walked over to the login page.
const REDIRECT_MS: u32 = 2_000;

#[derive(Clone, PartialEq, Default)]
struct Form {
	name: String,
	email: String,
	password: String,
	confirm: String,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Errors {
	name: Option<&'static str>,
	email: Option<&'static str>,
	password: Option<&'static str>,
	confirm: Option<&'static str>,
}

impl Errors {
	fn any(&self) -> bool {
		self.name.is_some() || self.email.is_some() || self.password.is_some() || self.confirm.is_some()
	}
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Touched {
	name: bool,
	email: bool,
	password: bool,
	confirm: bool,
}

#[function_component]
pub fn Signup() -> Html {
	let form = use_state_eq(Form::default);
	let errors = use_state_eq(Errors::default);
	let touched = use_state_eq(Touched::default);
	let session = use_store::<Session>().1;
	let notices = use_store::<Notices>().1;
	let navigator = use_navigator().unwrap();

	// Pending walk-over to the login page; cancelled if the form unmounts
	// before it fires.
	let redirect = use_mut_ref(|| None::<Timeout>);
	use_effect_with((), {
		let redirect = redirect.clone();
		move |_| {
			move || {
				redirect.borrow_mut().take();
			}
		}
	});

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
			form.set(Form { name: value, ..(*form).clone() });
		}
	});
	let on_email_input = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			let value = input.value();
			if touched.email {
				errors.set(Errors { email: validate::email(&value), ..*errors });
			}
			form.set(Form { email: value, ..(*form).clone() });
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
				// A new password also re-checks an already-entered confirmation.
				let confirm = match form.confirm.is_empty() {
					false => validate::confirm_password(&form.confirm, &value),
					true => None,
				};
				errors.set(Errors { password: validate::password(&value), confirm, ..*errors });
			}
			form.set(Form { password: value, ..(*form).clone() });
		}
	});
	let on_confirm_input = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |evt: InputEvent| {
			let Some(input) = evt.target_dyn_into::<HtmlInputElement>() else {
				return;
			};
			let value = input.value();
			if touched.confirm {
				errors.set(Errors {
					confirm: validate::confirm_password(&value, &form.password),
					..*errors
				});
			}
			form.set(Form { confirm: value, ..(*form).clone() });
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
	let on_email_blur = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |_: FocusEvent| {
			touched.set(Touched { email: true, ..*touched });
			errors.set(Errors { email: validate::email(&form.email), ..*errors });
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
	let on_confirm_blur = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		move |_: FocusEvent| {
			touched.set(Touched { confirm: true, ..*touched });
			errors.set(Errors {
				confirm: validate::confirm_password(&form.confirm, &form.password),
				..*errors
			});
		}
	});

	let on_submit = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		let session = session.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		let redirect = redirect.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			let all = Errors {
				name: validate::name(&form.name),
				email: validate::email(&form.email),
				password: validate::password(&form.password),
				confirm: validate::confirm_password(&form.confirm, &form.password),
			};
			errors.set(all);
			touched.set(Touched { name: true, email: true, password: true, confirm: true });
			if all.any() {
				notices.reduce_mut(|notices| {
					notices.push(
						Level::Error,
						"Validation Error",
						Some("Please fix the errors before submitting".into()),
					);
				});
				return;
			}
			let form = (*form).clone();
			let session = session.clone();
			let notices = notices.clone();
			let navigator = navigator.clone();
			let redirect = redirect.clone();
			util::spawn_local::<_, anyhow::Error>(env!("CARGO_PKG_NAME"), async move {
				match config::auth_backend()
					.sign_up(&form.name, &form.email, &form.password)
					.await
				{
					Ok(user) => {
						// Auto-login: a fresh signup is immediately a session.
						session.reduce_mut(|session| session.login(user));
						notices.reduce_mut(|notices| {
							notices.push(
								Level::Success,
								"Signup successful",
								Some("You are now logged in!".into()),
							);
						});
						navigator.push(&Route::Dashboard);
					}
					Err(AuthError::UserAlreadyExists) => {
						notices.reduce_mut(|notices| {
							notices.push(
								Level::Error,
								"User already exists",
								Some("Try logging in instead.".into()),
							);
						});
						let navigator = navigator.clone();
						*redirect.borrow_mut() = Some(Timeout::new(REDIRECT_MS, move || {
							navigator.push(&Route::Login);
						}));
					}
					Err(err) => {
						notices.reduce_mut(|notices| {
							notices.push(Level::Error, "Signup failed", Some(err.to_string()));
						});
					}
				}
				Ok(())
			});
		}
	});

	let form_filled = !form.name.is_empty()
		&& !form.email.is_empty()
		&& !form.password.is_empty()
		&& !form.confirm.is_empty();
	let submit_disabled = errors.any() || !form_filled;

	html! {
		<div class="card mx-auto mt-5" style="max-width: 28rem;">
			<div class="card-body p-4">
				<h5 class="card-title mb-4">{"Signup"}</h5>
				<form onsubmit={on_submit} novalidate=true>
					<div class="mb-3">
						<label class="form-label" for="name">{"Full Name"}</label>
						<input
							id="name" name="name" type="text"
							class={field_class(touched.name, errors.name)}
							value={form.name.clone()}
							oninput={on_name_input} onblur={on_name_blur}
							placeholder="Enter your full name"
							autocomplete="name"
						/>
						{field_feedback(touched.name, errors.name)}
					</div>
					<div class="mb-3">
						<label class="form-label" for="email">{"Email"}</label>
						<input
							id="email" name="email" type="email"
							class={field_class(touched.email, errors.email)}
							value={form.email.clone()}
							oninput={on_email_input} onblur={on_email_blur}
							placeholder="Enter your email address"
							autocomplete="email"
						/>
						{field_feedback(touched.email, errors.email)}
					</div>
					<div class="mb-3">
						<label class="form-label" for="password">{"Password"}</label>
						<input
							id="password" name="password" type="password"
							class={field_class(touched.password, errors.password)}
							value={form.password.clone()}
							oninput={on_password_input} onblur={on_password_blur}
							placeholder="Create a strong password"
							autocomplete="new-password"
						/>
						<StrengthBar password={form.password.clone()} />
						{field_feedback(touched.password, errors.password)}
					</div>
					<div class="mb-3">
						<label class="form-label" for="confirm">{"Confirm Password"}</label>
						<input
							id="confirm" name="confirm" type="password"
							class={field_class(touched.confirm, errors.confirm)}
							value={form.confirm.clone()}
							oninput={on_confirm_input} onblur={on_confirm_blur}
							placeholder="Confirm your password"
							autocomplete="new-password"
						/>
						{field_feedback(touched.confirm, errors.confirm)}
					</div>
					<button type="submit" class="btn btn-success w-100" disabled={submit_disabled}>
						{"Signup"}
					</button>
					<div class="form-text text-center mt-3">
						{"Already have an account? "}
						<Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
					</div>
				</form>
			</div>
		</div>
	}
}
