use yew::prelude::*;
use yew_router::prelude::Link;

use crate::route::Route;

#[function_component]
pub fn Landing() -> Html {
	html! {
		<div
			class="d-flex flex-column align-items-center justify-content-center text-center"
			style="min-height: 80vh;"
		>
			<h1 class="display-4 fw-bold">{"TASK TRACKER"}</h1>
			<p class="lead">{"“Task management feels daunting? We make it easy.”"}</p>
			<div class="d-flex gap-3 mt-3">
				<Link<Route> classes="btn btn-primary px-4" to={Route::Login}>{"Login"}</Link<Route>>
				<Link<Route> classes="btn btn-success px-4" to={Route::Signup}>{"Signup"}</Link<Route>>
			</div>
		</div>
	}
}
