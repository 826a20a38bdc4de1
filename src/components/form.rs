use yew::prelude::*;

/// Input class for a validated field; bootstrap renders the sibling
/// feedback element only when `is-invalid` is present.
pub fn field_class(touched: bool, error: Option<&'static str>) -> Classes {
	classes!(
		"form-control",
		(touched && error.is_some()).then_some("is-invalid")
	)
}

pub fn field_feedback(touched: bool, error: Option<&'static str>) -> Html {
	match (touched, error) {
		(true, Some(message)) => html!(<div class="invalid-feedback">{message}</div>),
		_ => html!(),
	}
}
