use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::*;

use crate::auth::{AuthError, Backend};
use crate::components::{field_class, field_feedback, Level, Notices};
use crate::route::Route;
use crate::session::Session;
use crate::{config, util, validate};

#[derive(Clone, PartialEq, Default)]
struct Form {
	email: String,
	password: String,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Errors {
	email: Option<&'static str>,
	password: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct Touched {
	email: bool,
	password: bool,
}

#[function_component]
pub fn Login() -> Html {
	let form = use_state_eq(Form::default);
	let errors = use_state_eq(Errors::default);
	let touched = use_state_eq(Touched::default);
	let session = use_store::<Session>().1;
	let notices = use_store::<Notices>().1;
	let navigator = use_navigator().unwrap();

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
			form.set(Form { email: value, password: form.password.clone() });
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
				errors.set(Errors { password: validate::login_password(&value), ..*errors });
			}
			form.set(Form { email: form.email.clone(), password: value });
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
			errors.set(Errors { password: validate::login_password(&form.password), ..*errors });
		}
	});

	let on_submit = Callback::from({
		let form = form.clone();
		let errors = errors.clone();
		let touched = touched.clone();
		let session = session.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			// Re-run every validator in full before touching the backend.
			let email_error = validate::email(&form.email);
			let password_error = validate::login_password(&form.password);
			errors.set(Errors { email: email_error, password: password_error });
			touched.set(Touched { email: true, password: true });
			if email_error.is_some() || password_error.is_some() {
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
			util::spawn_local::<_, anyhow::Error>(env!("CARGO_PKG_NAME"), async move {
				match config::auth_backend().sign_in(&form.email, &form.password).await {
					Ok(user) => {
						session.reduce_mut(|session| session.login(user));
						notices.reduce_mut(|notices| {
							notices.push(Level::Success, "Login successful", None);
						});
						navigator.push(&Route::Dashboard);
					}
					Err(AuthError::InvalidCredentials) => {
						notices.reduce_mut(|notices| {
							notices.push(
								Level::Error,
								"Invalid credentials",
								Some("Check your details or click above to sign up.".into()),
							);
						});
					}
					Err(err) => {
						notices.reduce_mut(|notices| {
							notices.push(Level::Error, "Sign-in failed", Some(err.to_string()));
						});
					}
				}
				Ok(())
			});
		}
	});

	let interactive = config::interactive_sign_in_url().map(|consent_url| {
		let onclick = Callback::from({
			let session = session.clone();
			let notices = notices.clone();
			let navigator = navigator.clone();
			move |_: MouseEvent| {
				let session = session.clone();
				let notices = notices.clone();
				let navigator = navigator.clone();
				util::spawn_local::<_, anyhow::Error>(env!("CARGO_PKG_NAME"), async move {
					let Backend::Remote(provider) = config::auth_backend() else {
						return Ok(());
					};
					match provider.sign_in_interactive(consent_url).await {
						Ok(identity) => {
							session.reduce_mut(|session| session.login(identity.into_user()));
							notices.reduce_mut(|notices| {
								notices.push(Level::Success, "Login successful", None);
							});
							navigator.push(&Route::Dashboard);
						}
						Err(err) => {
							notices.reduce_mut(|notices| {
								notices.push(Level::Error, "Sign-in failed", Some(err.user_message()));
							});
						}
					}
					Ok(())
				});
			}
		});
		html! {
			<button type="button" class="btn btn-outline-secondary w-100 mt-3" {onclick}>
				{"Continue with identity provider"}
			</button>
		}
	});

	let submit_disabled = errors.email.is_some()
		|| errors.password.is_some()
		|| form.email.is_empty()
		|| form.password.is_empty();

	html! {
		<div class="card mx-auto mt-5" style="max-width: 28rem;">
			<div class="card-body p-4">
				<h5 class="card-title mb-4">{"Login"}</h5>
				<form onsubmit={on_submit} novalidate=true>
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
							placeholder="Enter your password"
							autocomplete="current-password"
						/>
						{field_feedback(touched.password, errors.password)}
					</div>
					<button type="submit" class="btn btn-primary w-100" disabled={submit_disabled}>
						{"Login"}
					</button>
					{interactive}
					<div class="form-text text-center mt-3">
						{"Don't have an account? "}
						<Link<Route> to={Route::Signup}>{"Sign up here"}</Link<Route>>
					</div>
				</form>
			</div>
		</div>
	}
}
