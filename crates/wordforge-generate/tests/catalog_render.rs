use wordforge_core::Profile;
use wordforge_generate::catalog::{render, Rendered, SkipReason, CATALOG};
use wordforge_generate::fields::derive;

fn full_profile() -> Profile {
    serde_json::from_value(serde_json::json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "birth_day": 3,
        "birth_month": 9,
        "birth_year": 2005,
        "birthplace": "Delhi",
        "residence": "Mumbai",
        "phone_number": "1234567890",
        "email": "ann@example.com",
        "nickname": "Annie",
        "father_name": "Raj",
        "mother_name": "Mira",
        "spouse_name": "Sam",
        "child_name": "Kim",
        "pet_name": "Rex",
        "company_name": "Acme",
        "ex_partner_name": "Pat",
        "school_name": "Hillside",
        "college_name": "Stanford",
        "favorite_movie": "Inception",
        "favorite_song": "Yesterday",
        "favorite_band": "Queen",
        "favorite_sport": "Tennis",
        "favorite_book": "Dune",
        "favorite_celebrity": "Keanu",
        "gamer_tag": "Ninja",
        "device_names": ["iPhone"],
        "favorite_number": 7,
        "twitter_id": "@ann"
    }))
    .expect("deserialize profile")
}

#[test]
fn every_catalog_field_is_derivable() {
    // The catalog may only reference names the deriver produces: with every
    // optional fact supplied, no pattern may skip for an unknown field or a
    // malformed placeholder.
    let fields = derive(&full_profile());
    for pattern in CATALOG {
        match render(pattern, &fields) {
            Rendered::Text(_) => {}
            Rendered::Skipped(reason) => panic!("pattern {pattern:?} skipped: {reason:?}"),
        }
    }
}

#[test]
fn renders_plain_and_padded_placeholders() {
    let fields = derive(&full_profile());

    assert_eq!(
        render("{first_name}{last_name}", &fields),
        Rendered::Text("AnnLee".to_string())
    );
    assert_eq!(
        render("{first_name}{birth_month:02}{birth_year}", &fields),
        Rendered::Text("Ann092005".to_string())
    );
    assert_eq!(
        render("{first_name}{birth_month_str}/{birth_day_str}", &fields),
        Rendered::Text("Ann09/03".to_string())
    );
}

#[test]
fn literal_patterns_pass_through() {
    let fields = derive(&full_profile());
    assert_eq!(render("letmein", &fields), Rendered::Text("letmein".to_string()));
}

#[test]
fn unknown_field_skips_pattern() {
    let fields = derive(&full_profile());
    assert_eq!(
        render("{no_such_field}", &fields),
        Rendered::Skipped(SkipReason::UnknownField("no_such_field".to_string()))
    );
}

#[test]
fn absent_optional_skips_pattern() {
    let mut profile = full_profile();
    profile.father_name = None;
    let fields = derive(&profile);

    assert_eq!(
        render("{father_name}{birth_year}", &fields),
        Rendered::Skipped(SkipReason::AbsentField("father_name".to_string()))
    );
}

#[test]
fn padded_placeholder_requires_numeric_field() {
    let fields = derive(&full_profile());
    assert_eq!(
        render("{first_name:02}", &fields),
        Rendered::Skipped(SkipReason::NonNumeric("first_name".to_string()))
    );
}

#[test]
fn unbalanced_braces_skip_pattern() {
    let fields = derive(&full_profile());
    assert_eq!(
        render("{first_name", &fields),
        Rendered::Skipped(SkipReason::Malformed)
    );
    assert_eq!(
        render("first_name}", &fields),
        Rendered::Skipped(SkipReason::Malformed)
    );
}

#[test]
fn empty_result_is_skipped() {
    // A single-digit-position field can be empty for degenerate years; an
    // empty substitution result must never become a candidate.
    let fields = derive(&full_profile());
    assert_eq!(render("", &fields), Rendered::Skipped(SkipReason::Empty));
}
