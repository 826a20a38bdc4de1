use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

use crate::page;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Landing,
	#[at("/login")]
	Login,
	#[at("/signup")]
	Signup,
	#[at("/dashboard")]
	Dashboard,
	#[at("/tasks/new")]
	TaskNew,
	#[at("/tasks/:id/edit")]
	TaskEdit { id: String },
	#[at("/profile")]
	Profile,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	/// Routes that require an active session.
	pub fn is_protected(&self) -> bool {
		matches!(
			self,
			Self::Dashboard | Self::TaskNew | Self::TaskEdit { .. } | Self::Profile
		)
	}

	fn html(self) -> Html {
		match self {
			Self::Landing => html!(<page::Landing />),
			Self::Login => html!(<page::Login />),
			Self::Signup => html!(<page::Signup />),
			Self::Dashboard => html!(<Protected><page::Dashboard /></Protected>),
			Self::TaskNew => html!(<Protected><page::TaskForm /></Protected>),
			Self::TaskEdit { id } => html! {
				<Protected><page::TaskForm task_id={id} /></Protected>
			},
			Self::Profile => html!(<Protected><page::Profile /></Protected>),
			Self::NotFound => html!(<h1>{"404: Page not found"}</h1>),
		}
	}

	pub fn switch() -> Html {
		html!(<Switch<Self> render={Self::html} />)
	}
}

/// Gates children on an active session; anonymous visitors land back on the
/// landing page.
#[function_component]
pub fn Protected(props: &html::ChildrenProps) -> Html {
	let session = use_store_value::<Session>();
	match session.user() {
		Some(_) => html!(<>{props.children.clone()}</>),
		None => html!(<Redirect<Route> to={Route::Landing} />),
	}
}
