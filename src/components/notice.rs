use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::*;

// How long a notice stays on screen before dismissing itself.
const DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Level {
	Success,
	Info,
	Error,
}

impl Level {
	fn alert_class(&self) -> &'static str {
		match self {
			Self::Success => "alert-success",
			Self::Info => "alert-info",
			Self::Error => "alert-danger",
		}
	}
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
	pub id: usize,
	pub level: Level,
	pub title: String,
	pub body: Option<String>,
}

/// Transient notifications, stacked in the top-right corner. Presentation
/// only; nothing in the app ever blocks on one.
#[derive(Clone, PartialEq, Default, Store)]
pub struct Notices {
	next_id: usize,
	entries: Vec<Notice>,
}

impl Notices {
	pub fn push(&mut self, level: Level, title: impl Into<String>, body: Option<String>) {
		self.entries.push(Notice {
			id: self.next_id,
			level,
			title: title.into(),
			body,
		});
		self.next_id += 1;
	}

	pub fn dismiss(&mut self, id: usize) {
		self.entries.retain(|notice| notice.id != id);
	}
}

#[function_component]
pub fn NoticeList() -> Html {
	let (notices, dispatch) = use_store::<Notices>();
	let on_dismiss = Callback::from(move |id: usize| {
		dispatch.reduce_mut(|notices| notices.dismiss(id));
	});
	html! {
		<div class="toast-container position-fixed top-0 end-0 p-3">
			{notices.entries.iter().map(|notice| html! {
				<NoticeCard key={notice.id} notice={notice.clone()} on_dismiss={on_dismiss.clone()} />
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct NoticeCardProps {
	notice: Notice,
	on_dismiss: Callback<usize>,
}

#[function_component]
fn NoticeCard(NoticeCardProps { notice, on_dismiss }: &NoticeCardProps) -> Html {
	use_effect_with(notice.id, {
		let on_dismiss = on_dismiss.clone();
		move |id| {
			let id = *id;
			let timer = Timeout::new(DISMISS_MS, move || on_dismiss.emit(id));
			// Dropping the handle cancels the pending dismissal when the
			// card unmounts first.
			move || drop(timer)
		}
	});
	let close = on_dismiss.reform({
		let id = notice.id;
		move |_: MouseEvent| id
	});
	html! {
		<div class={classes!("alert", notice.level.alert_class(), "alert-dismissible", "shadow-sm")} role="alert">
			<strong>{&notice.title}</strong>
			{notice.body.as_ref().map(|body| html!(<div class="small">{body}</div>))}
			<button type="button" class="btn-close" aria-label="Close" onclick={close} />
		</div>
	}
}
