use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref NAME_CHARS: Regex = Regex::new(r"^[A-Za-z\s\-'.]+$").unwrap();
	static ref EMAIL_SHAPE: Regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
	static ref DOMAIN_CHARS: Regex = Regex::new(r"^[A-Za-z0-9.-]+$").unwrap();
}

static SPECIAL_CHARS: &str = "@$!%*?&";

/// Every validator returns the first failing check's message, or None when
/// the input is acceptable. Forms run these on change (once touched), on
/// blur, and in full on submit.
pub fn name(input: &str) -> Option<&'static str> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return Some("Name is required");
	}
	if trimmed.chars().count() < 2 {
		return Some("Name must be at least 2 characters long");
	}
	if trimmed.chars().count() > 50 {
		return Some("Name cannot exceed 50 characters");
	}
	if !NAME_CHARS.is_match(trimmed) {
		return Some("Name can only contain letters, spaces, hyphens, and apostrophes");
	}
	if input.contains("  ") {
		return Some("Name cannot contain consecutive spaces");
	}
	if input.starts_with(' ') || input.ends_with(' ') {
		return Some("Name cannot start or end with spaces");
	}
	if trimmed.split_whitespace().count() > 4 {
		return Some("Name cannot have more than 4 words");
	}
	if input.chars().any(|c| c.is_ascii_digit()) {
		return Some("Name cannot contain numbers");
	}
	None
}

pub fn email(input: &str) -> Option<&'static str> {
	if input.trim().is_empty() {
		return Some("Email is required");
	}
	if !EMAIL_SHAPE.is_match(input) {
		return Some("Please enter a valid email address");
	}
	if input.len() > 254 {
		return Some("Email address is too long");
	}
	let local = input.split('@').next().unwrap_or_default();
	if local.len() > 64 {
		return Some("Email local part is too long");
	}
	if input.contains("..") {
		return Some("Email cannot contain consecutive dots");
	}
	if input.starts_with('.') || input.ends_with('.') {
		return Some("Email cannot start or end with a dot");
	}
	if let Some(domain) = input.split('@').nth(1) {
		if !domain.contains('.') {
			return Some("Invalid domain format");
		}
		if domain.len() > 253 {
			return Some("Domain name is too long");
		}
		if !DOMAIN_CHARS.is_match(domain) {
			return Some("Domain contains invalid characters");
		}
		if domain.starts_with('-') || domain.ends_with('-') {
			return Some("Domain cannot start or end with hyphen");
		}
	}
	None
}

/// Composition rules applied at signup and profile edit.
pub fn password(input: &str) -> Option<&'static str> {
	if input.trim().is_empty() {
		return Some("Password is required");
	}
	if input.len() < 8 {
		return Some("Password must be at least 8 characters long");
	}
	if !input.chars().any(|c| c.is_ascii_lowercase()) {
		return Some("Password must contain at least one lowercase letter");
	}
	if !input.chars().any(|c| c.is_ascii_uppercase()) {
		return Some("Password must contain at least one uppercase letter");
	}
	if !input.chars().any(|c| c.is_ascii_digit()) {
		return Some("Password must contain at least one number");
	}
	if !input.chars().any(|c| SPECIAL_CHARS.contains(c)) {
		return Some("Password must contain at least one special character (@$!%*?&)");
	}
	None
}

/// The login form only gates on presence and a minimum length; composition
/// rules are enforced at signup, not here.
pub fn login_password(input: &str) -> Option<&'static str> {
	if input.trim().is_empty() {
		return Some("Password is required");
	}
	if input.len() < 6 {
		return Some("Password must be at least 6 characters long");
	}
	None
}

pub fn confirm_password(confirm: &str, password: &str) -> Option<&'static str> {
	if confirm.trim().is_empty() {
		return Some("Please confirm your password");
	}
	if confirm != password {
		return Some("Passwords do not match");
	}
	None
}

/// 0..=100, twenty points per satisfied criterion.
pub fn strength(password: &str) -> u8 {
	let mut score = 0;
	if password.len() >= 8 {
		score += 20;
	}
	if password.chars().any(|c| c.is_ascii_lowercase()) {
		score += 20;
	}
	if password.chars().any(|c| c.is_ascii_uppercase()) {
		score += 20;
	}
	if password.chars().any(|c| c.is_ascii_digit()) {
		score += 20;
	}
	if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
		score += 20;
	}
	score
}

/// Display tier for a strength score; only ever used for presentation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
	Weak,
	Medium,
	Strong,
}

impl Tier {
	pub fn of(score: u8) -> Self {
		if score < 40 {
			Self::Weak
		} else if score < 80 {
			Self::Medium
		} else {
			Self::Strong
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Weak => "Weak",
			Self::Medium => "Medium",
			Self::Strong => "Strong",
		}
	}

	pub fn bar_class(&self) -> &'static str {
		match self {
			Self::Weak => "bg-danger",
			Self::Medium => "bg-warning",
			Self::Strong => "bg-success",
		}
	}
}

/// Task form gate: one combined message covering every rule.
pub fn task(title: &str, description: &str, due_date: &str) -> Option<&'static str> {
	let valid = !title.is_empty()
		&& !description.is_empty()
		&& !due_date.is_empty()
		&& title.split_whitespace().count() <= 5
		&& description.chars().count() <= 200;
	match valid {
		true => None,
		false => Some(
			"Ensure title has max 5 words, description has max 200 characters, and all fields are filled.",
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_accepts_ordinary_names() {
		assert_eq!(name("Ada Lovelace"), None);
		assert_eq!(name("Mary-Jane O'Neil"), None);
		assert_eq!(name("J. R. R. Tolkien"), None);
	}

	#[test]
	fn name_first_failing_check_wins() {
		assert_eq!(name(""), Some("Name is required"));
		assert_eq!(name("   "), Some("Name is required"));
		assert_eq!(name("A"), Some("Name must be at least 2 characters long"));
		assert_eq!(
			name(&"a".repeat(51)),
			Some("Name cannot exceed 50 characters")
		);
		assert_eq!(
			name("Ada_Lovelace"),
			Some("Name can only contain letters, spaces, hyphens, and apostrophes")
		);
		assert_eq!(
			name("Ada  Lovelace"),
			Some("Name cannot contain consecutive spaces")
		);
		assert_eq!(
			name(" Ada Lovelace"),
			Some("Name cannot start or end with spaces")
		);
		assert_eq!(
			name("One Two Three Four Five"),
			Some("Name cannot have more than 4 words")
		);
		// Digits already fall out of the charset check, which runs first.
		assert_eq!(
			name("Ada2"),
			Some("Name can only contain letters, spaces, hyphens, and apostrophes")
		);
	}

	#[test]
	fn email_accepts_plain_addresses() {
		assert_eq!(email("a@b.com"), None);
		assert_eq!(email("first.last+tag@sub.domain.org"), None);
	}

	#[test]
	fn email_first_failing_check_wins() {
		assert_eq!(email(""), Some("Email is required"));
		assert_eq!(email("nope"), Some("Please enter a valid email address"));
		assert_eq!(email("a@b"), Some("Please enter a valid email address"));
		assert_eq!(
			email("bad..email@x.com"),
			Some("Email cannot contain consecutive dots")
		);
		let long_local = format!("{}@example.com", "a".repeat(65));
		assert_eq!(email(&long_local), Some("Email local part is too long"));
		let long_total = format!("{}@{}.com", "a".repeat(60), "b".repeat(200));
		assert_eq!(email(&long_total), Some("Email address is too long"));
	}

	#[test]
	fn password_composition_checks_in_order() {
		assert_eq!(password(""), Some("Password is required"));
		assert_eq!(
			password("Ab1!"),
			Some("Password must be at least 8 characters long")
		);
		assert_eq!(
			password("ABCDEF1!"),
			Some("Password must contain at least one lowercase letter")
		);
		assert_eq!(
			password("abcdef1!"),
			Some("Password must contain at least one uppercase letter")
		);
		assert_eq!(
			password("Abcdefg!"),
			Some("Password must contain at least one number")
		);
		assert_eq!(
			password("Abcdefg1"),
			Some("Password must contain at least one special character (@$!%*?&)")
		);
		assert_eq!(password("Abcdef1!"), None);
	}

	#[test]
	fn login_password_is_the_weak_variant() {
		assert_eq!(login_password(""), Some("Password is required"));
		assert_eq!(
			login_password("abc12"),
			Some("Password must be at least 6 characters long")
		);
		// Composition rules deliberately do not apply on the login path.
		assert_eq!(login_password("abcdef"), None);
	}

	#[test]
	fn confirm_password_requires_exact_match() {
		assert_eq!(confirm_password("", "x"), Some("Please confirm your password"));
		assert_eq!(confirm_password("abc", "Abc"), Some("Passwords do not match"));
		assert_eq!(confirm_password("Abc1!xyz", "Abc1!xyz"), None);
	}

	#[test]
	fn strength_scores_twenty_per_criterion() {
		assert_eq!(strength(""), 0);
		assert_eq!(strength("abcdefgh"), 40);
		assert_eq!(strength("abc"), 20);
		assert_eq!(strength("Abcdef1!"), 100);
		assert_eq!(Tier::of(strength("abc")), Tier::Weak);
		assert_eq!(Tier::of(strength("abcdefgh")), Tier::Medium);
		assert_eq!(Tier::of(strength("Abcdef1!")), Tier::Strong);
	}

	#[test]
	fn task_gate_combines_all_rules() {
		assert_eq!(task("Buy milk", "From the store", "2026-01-01"), None);
		assert!(task("", "desc", "2026-01-01").is_some());
		assert!(task("title", "", "2026-01-01").is_some());
		assert!(task("title", "desc", "").is_some());
		assert!(task("one two three four five six", "desc", "2026-01-01").is_some());
		assert!(task("title", &"d".repeat(201), "2026-01-01").is_some());
		assert_eq!(task("one two three four five", &"d".repeat(200), "2026-01-01"), None);
	}
}
