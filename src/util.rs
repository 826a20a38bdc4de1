pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Local calendar date as the `YYYY-MM-DD` string used by date inputs.
pub fn local_today() -> String {
	let now = time::OffsetDateTime::now_utc();
	let now = match time::UtcOffset::current_local_offset() {
		Ok(offset) => now.to_offset(offset),
		Err(_) => now,
	};
	let date = now.date();
	format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn local_today_is_a_date_input_value() {
		let today = local_today();
		assert_eq!(today.len(), 10);
		let parts: Vec<&str> = today.split('-').collect();
		assert_eq!(parts.len(), 3);
		assert!(parts[0].parse::<i32>().is_ok());
		let month: u8 = parts[1].parse().unwrap();
		let day: u8 = parts[2].parse().unwrap();
		assert!((1..=12).contains(&month));
		assert!((1..=31).contains(&day));
	}
}
