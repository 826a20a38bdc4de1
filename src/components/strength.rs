use yew::prelude::*;

use crate::validate::{self, Tier};

#[derive(Clone, PartialEq, Properties)]
pub struct StrengthBarProps {
	pub password: AttrValue,
}

/// Strength meter shown under the password field while the user types.
#[function_component]
pub fn StrengthBar(StrengthBarProps { password }: &StrengthBarProps) -> Html {
	if password.is_empty() {
		return html!();
	}
	let score = validate::strength(password);
	let tier = Tier::of(score);
	html! {
		<div class="mt-2">
			<div class="form-text mb-1">{format!("Password Strength: {}", tier.label())}</div>
			<div class="progress" style="height: 6px;">
				<div
					class={classes!("progress-bar", tier.bar_class())}
					style={format!("width: {score}%;")}
				/>
			</div>
		</div>
	}
}
