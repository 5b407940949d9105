use crate::field::{OMITTED, Omit, ptr};

#[test]
fn new_is_present_and_returns_value() {
	let omit = Omit::new(7_i32);
	assert!(omit.is_present());
	assert!(!omit.is_unset());
	assert_eq!(omit.value_or(0), 7);
	assert_eq!(*omit.value(), 7);
}

#[test]
fn zero_payload_is_still_present() {
	let omit = Omit::new(0_i32);
	assert!(omit.is_present());
	assert_eq!(omit.value_or(9), 0);
}

#[test]
fn unset_holds_default_and_returns_fallback() {
	let omit = Omit::<String>::unset();
	assert!(!omit.is_present());
	assert!(omit.is_unset());
	assert_eq!(omit.value(), "");
	assert_eq!(omit.value_or("fallback".to_owned()), "fallback");
}

#[test]
fn default_is_unset() {
	assert_eq!(Omit::<u64>::default(), Omit::unset());
	assert_ne!(Omit::<u64>::default(), Omit::new(0));
}

#[test]
fn pointer_constructors_are_present() {
	let set = Omit::from_ptr_value("john".to_owned());
	assert!(set.is_present());
	assert_eq!(set.value().as_deref().map(String::as_str), Some("john"));

	let nil = Omit::<Option<Box<String>>>::nil_ptr();
	assert!(nil.is_present());
	assert!(nil.value().is_none());

	let unset = Omit::<Option<Box<String>>>::unset();
	assert!(!unset.is_present());
	assert_ne!(nil, unset);
}

#[test]
fn ptr_helper_matches_from_ptr_value() {
	assert_eq!(Omit::new(ptr(3_u8)), Omit::from_ptr_value(3_u8));
}

#[test]
fn option_conversions_follow_presence() {
	assert_eq!(Omit::from_option(Some(5_i64)), Omit::new(5));
	assert_eq!(Omit::<i64>::from_option(None), Omit::unset());
	assert_eq!(Option::<i64>::from(Omit::new(5_i64)), Some(5));
	assert_eq!(Option::<i64>::from(Omit::<i64>::unset()), None);
	assert_eq!(Omit::new(5_i64).as_option(), Some(&5));
	assert_eq!(Omit::<i64>::unset().as_option(), None);
}

#[test]
fn map_keeps_unset_unset() {
	assert_eq!(Omit::new(2_i32).map(|v| v * 10), Omit::new(20));
	assert_eq!(Omit::<i32>::unset().map(|v| v * 10), Omit::unset());
}

#[test]
fn display_renders_value_or_omitted_token() {
	assert_eq!(Omit::new(42_i32).to_string(), "42");
	assert_eq!(Omit::new(String::new()).to_string(), "");
	assert_eq!(Omit::<i32>::unset().to_string(), OMITTED);
	assert_eq!(Omit::<String>::unset().to_string(), "<omitted>");
}

#[test]
fn render_handles_pointer_payloads() {
	let show = |value: &Option<Box<String>>| value.as_deref().map_or_else(|| "<nil>".to_owned(), String::clone);

	assert_eq!(Omit::from_ptr_value("john".to_owned()).render(show), "john");
	assert_eq!(Omit::<Option<Box<String>>>::nil_ptr().render(show), "<nil>");
	assert_eq!(Omit::<Option<Box<String>>>::unset().render(show), "<omitted>");
}
