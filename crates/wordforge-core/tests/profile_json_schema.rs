use schemars::schema_for;
use wordforge_core::Profile;

#[test]
fn json_schema_lists_required_fields() {
    let generated = schema_for!(Profile);
    let json = serde_json::to_value(&generated).expect("serialize generated schema");

    let required = json["required"].as_array().expect("required array");
    let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
    for field in [
        "first_name",
        "last_name",
        "birth_day",
        "birth_month",
        "birth_year",
        "birthplace",
        "residence",
        "phone_number",
        "email",
    ] {
        assert!(required.contains(&field), "missing required field {field}");
    }
    assert!(!required.contains(&"nickname"));
    assert!(!required.contains(&"pet_name"));
}
