use yew::prelude::*;
use yew_router::prelude::{use_navigator, use_route, BrowserRouter, Link};
use yewdux::prelude::*;

use crate::components::NoticeList;
use crate::route::Route;
use crate::session::Session;

#[function_component]
pub fn Root() -> Html {
	html! {
		<BrowserRouter>
			<App />
		</BrowserRouter>
	}
}

#[function_component]
fn App() -> Html {
	let session = use_store_value::<Session>();
	let route = use_route::<Route>();
	// The navbar only appears for authenticated users past the entry pages.
	let show_navbar =
		session.user().is_some() && matches!(&route, Some(route) if route.is_protected());
	html! {<>
		{show_navbar.then(|| html!(<Navbar />))}
		<div class="container py-4">
			{Route::switch()}
		</div>
		<NoticeList />
	</>}
}

#[function_component]
fn Navbar() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let navigator = use_navigator().unwrap();
	let logout = Callback::from(move |_: MouseEvent| {
		dispatch.reduce_mut(|session| session.logout());
		navigator.push(&Route::Landing);
	});
	let greeting = session
		.user()
		.map(|user| user.greeting_name().to_owned())
		.unwrap_or_default();

	html! {
		<nav class="navbar navbar-expand bg-body-tertiary mb-4">
			<div class="container">
				<div class="navbar-nav">
					<Link<Route> classes="nav-link" to={Route::Profile}>{"Profile"}</Link<Route>>
					<Link<Route> classes="nav-link" to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
					<Link<Route> classes="nav-link" to={Route::TaskNew}>{"Add Task"}</Link<Route>>
				</div>
				<div class="d-flex align-items-center gap-3">
					<span class="navbar-text small">{format!("Welcome, {greeting}")}</span>
					<button class="btn btn-danger btn-sm" onclick={logout}>{"Logout"}</button>
				</div>
			</div>
		</nav>
	}
}
