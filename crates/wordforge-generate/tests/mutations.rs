use wordforge_generate::mutate::MutationRegistry;

fn apply(id: &str, input: &str) -> String {
    let registry = MutationRegistry::new();
    let mutation = registry.get(id).unwrap_or_else(|| panic!("missing {id}"));
    mutation.apply(input).expect("mutation applies")
}

#[test]
fn identity_is_registered_first() {
    let registry = MutationRegistry::new();
    let first = registry.iter().next().expect("non-empty pipeline");
    assert_eq!(first.id(), "mutate.identity");
}

#[test]
fn affixes_and_wraps() {
    assert_eq!(apply("mutate.suffix.123", "Ann"), "Ann123");
    assert_eq!(apply("mutate.prefix.123", "Ann"), "123Ann");
    assert_eq!(apply("mutate.suffix.bang", "Ann"), "Ann!");
    assert_eq!(apply("mutate.prefix.bang", "Ann"), "!Ann");
    assert_eq!(apply("mutate.wrap.dot", "Ann"), ".Ann.");
    assert_eq!(apply("mutate.wrap.underscore", "Ann"), "_Ann_");
    assert_eq!(apply("mutate.wrap.star", "Ann"), "*Ann*");
}

#[test]
fn reverse_and_alternating_case() {
    assert_eq!(apply("mutate.reverse", "AnnLee"), "eeLnnA");
    assert_eq!(apply("mutate.alternating_case", "annlee"), "AnNlEe");
    assert_eq!(apply("mutate.alternating_case", "ANNLEE"), "AnNlEe");
}

#[test]
fn casing_modes() {
    assert_eq!(apply("mutate.upper", "AnnLee"), "ANNLEE");
    assert_eq!(apply("mutate.lower", "AnnLee"), "annlee");
    assert_eq!(apply("mutate.capitalize", "annLee"), "AnnLee");
}

#[test]
fn basic_leet_is_lowercase_single_pass() {
    assert_eq!(apply("mutate.leet.basic", "passionate"), "p45510n4t3");
    // No mapped letters: unchanged.
    assert_eq!(apply("mutate.leet.basic", "XYZ"), "XYZ");
    // Single-pass, not recursive: digits produced by the table stay put.
    let once = apply("mutate.leet.basic", "aeios");
    assert_eq!(once, "43105");
    assert_eq!(apply("mutate.leet.basic", &once), once);
}

#[test]
fn full_leet_covers_both_cases_and_more_letters() {
    assert_eq!(apply("mutate.leet.full", "Battle"), "847713");
    assert_eq!(apply("mutate.leet.full", "GLOBS"), "91085");
}

#[test]
fn double_last_char() {
    assert_eq!(apply("mutate.double_last", "Ann"), "Annn");
    assert_eq!(apply("mutate.double_last", "x"), "xx");
}

#[test]
fn mutations_tolerate_empty_input() {
    let registry = MutationRegistry::new();
    for mutation in registry.iter() {
        let result = mutation.apply("");
        assert!(result.is_ok(), "{} failed on empty input", mutation.id());
    }
}

#[test]
fn mutations_tolerate_single_char_input() {
    let registry = MutationRegistry::new();
    for mutation in registry.iter() {
        let result = mutation.apply("a");
        assert!(result.is_ok(), "{} failed on single char", mutation.id());
    }
}
