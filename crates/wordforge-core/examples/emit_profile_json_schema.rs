use schemars::schema_for;
use wordforge_core::Profile;

fn main() {
    let schema = schema_for!(Profile);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
