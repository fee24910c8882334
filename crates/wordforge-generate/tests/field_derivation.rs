use wordforge_core::Profile;
use wordforge_generate::fields::{derive, FieldValue};

fn profile() -> Profile {
    serde_json::from_value(serde_json::json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "birth_day": 3,
        "birth_month": 9,
        "birth_year": 2005,
        "birthplace": "Delhi",
        "residence": "Mumbai",
        "phone_number": "1234567890",
        "email": "ann@example.com"
    }))
    .expect("deserialize profile")
}

fn text(fields: &wordforge_generate::FieldSet, name: &str) -> String {
    match fields.get(name) {
        Some(FieldValue::Text(value)) => value.clone(),
        other => panic!("field {name} is {other:?}, expected text"),
    }
}

#[test]
fn derives_case_variants_and_slices() {
    let fields = derive(&profile());

    assert_eq!(text(&fields, "first_name_lower"), "ann");
    assert_eq!(text(&fields, "first_name_upper"), "ANN");
    assert_eq!(text(&fields, "last_name_cap"), "Lee");
    assert_eq!(text(&fields, "first_name_short_2"), "An");
    assert_eq!(text(&fields, "last_name_short_3"), "Lee");
    assert_eq!(text(&fields, "first_name_initial"), "A");
    assert_eq!(text(&fields, "last_name_initial"), "L");
    assert_eq!(text(&fields, "first_name_rev"), "nnA");
}

#[test]
fn short_names_degrade_to_available_prefix() {
    let mut profile = profile();
    profile.first_name = "Al".to_string();
    let fields = derive(&profile);

    // A 4-char prefix of a 2-char name yields the whole name.
    assert_eq!(text(&fields, "first_name_short_4"), "Al");
    assert_eq!(text(&fields, "first_name_short_3"), "Al");
}

#[test]
fn derives_date_fields_zero_padded() {
    let fields = derive(&profile());

    assert_eq!(text(&fields, "birth_day_str"), "03");
    assert_eq!(text(&fields, "birth_month_str"), "09");
    assert_eq!(text(&fields, "birth_year_str"), "2005");
    assert_eq!(text(&fields, "birth_year_short"), "05");
    assert_eq!(text(&fields, "birth_year_rev"), "5002");
    assert_eq!(text(&fields, "birth_year_digit_1"), "2");
    assert_eq!(text(&fields, "birth_year_digit_4"), "5");
    assert_eq!(fields.get("birth_day"), Some(&FieldValue::Int(3)));
}

#[test]
fn derives_phone_segments() {
    let fields = derive(&profile());

    assert_eq!(text(&fields, "phone_last_4"), "7890");
    assert_eq!(text(&fields, "phone_first_3"), "123");
    assert_eq!(text(&fields, "phone_mid_3"), "456");
}

#[test]
fn short_phone_reuses_whole_number() {
    let mut profile = profile();
    profile.phone_number = "12345".to_string();
    let fields = derive(&profile);

    assert_eq!(text(&fields, "phone_last_4"), "12345");
    assert_eq!(text(&fields, "phone_first_3"), "12345");
    assert_eq!(text(&fields, "phone_mid_3"), "12345");
}

#[test]
fn unset_optionals_derive_to_absent() {
    let fields = derive(&profile());

    assert_eq!(fields.get("pet_name"), Some(&FieldValue::Absent));
    assert_eq!(fields.get("father_name_initial"), Some(&FieldValue::Absent));
    assert_eq!(fields.get("social_handle"), Some(&FieldValue::Absent));
    assert_eq!(fields.get("device_name"), Some(&FieldValue::Absent));
    assert_eq!(fields.get("favorite_number"), Some(&FieldValue::Absent));
}

#[test]
fn social_handle_uses_platform_priority() {
    let mut profile = profile();
    profile.github_id = Some("ann_gh".to_string());
    profile.twitter_id = Some("@ann".to_string());
    let fields = derive(&profile);

    // Twitter outranks GitHub in the priority chain.
    assert_eq!(text(&fields, "social_handle"), "@ann");
}

#[test]
fn first_device_wins() {
    let mut profile = profile();
    profile.device_names = vec!["iPhone".to_string(), "DellLaptop".to_string()];
    let fields = derive(&profile);

    assert_eq!(text(&fields, "device_name"), "iPhone");
}

#[test]
fn optional_initials_are_uppercased() {
    let mut profile = profile();
    profile.pet_name = Some("rex".to_string());
    let fields = derive(&profile);

    assert_eq!(text(&fields, "pet_name_initial"), "R");
}
