use crate::field::{Omit, Presence, is_omitted};

#[test]
fn omit_presence_drives_is_omitted() {
	assert!(is_omitted(&Omit::<i32>::unset()));
	assert!(!is_omitted(&Omit::new(0_i32)));
	assert!(!is_omitted(&Omit::<Option<Box<String>>>::nil_ptr()));
}

#[test]
fn option_none_is_omitted() {
	assert!(is_omitted(&None::<u8>));
	assert!(!is_omitted(&Some(0_u8)));
}

#[test]
fn presence_works_through_trait_objects() {
	let id = Omit::new(1_i64);
	let name = Omit::<Option<Box<String>>>::unset();
	let tags: Option<Vec<String>> = Some(Vec::new());
	let fields: [(&str, &dyn Presence); 3] = [("id", &id), ("name", &name), ("tags", &tags)];

	let emitted: Vec<&str> = fields.iter().filter(|(_, field)| !is_omitted(*field)).map(|(key, _)| *key).collect();
	assert_eq!(emitted, ["id", "tags"]);
}
