use std::path::PathBuf;

use wordforge_export::{
    estimate_brute_force, read_wordlist, simulate_dictionary, write_export, ExportError,
    ExportFormat, HashAlgo, DEFAULT_CHARSET,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("fixture written");
    path
}

#[test]
fn read_wordlist_skips_blank_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "wordlist.txt", "AnnLee\n\n  \nLee2005\n");

    let candidates = read_wordlist(&path).expect("readable");
    assert_eq!(candidates, vec!["AnnLee".to_string(), "Lee2005".to_string()]);
}

#[test]
fn read_wordlist_rejects_blank_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "empty.txt", "\n\n");

    let err = read_wordlist(&path).expect_err("blank file rejected");
    assert!(matches!(err, ExportError::EmptyWordlist(_)));
}

#[test]
fn hashcat_export_writes_one_line_per_candidate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("hashcat.txt");
    let candidates = vec!["abc".to_string(), "AnnLee".to_string()];

    let lines = write_export(&out, ExportFormat::Hashcat, HashAlgo::Sha256, &candidates)
        .expect("export written");
    assert_eq!(lines, 2);

    let contents = std::fs::read_to_string(&out).expect("readable");
    let rendered: Vec<&str> = contents.lines().collect();
    assert_eq!(rendered.len(), 2);
    assert_eq!(
        rendered[0],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad:abc"
    );
    assert!(rendered[1].ends_with(":AnnLee"));
    // sha256 hex is 64 chars, then the separator.
    assert_eq!(rendered[1].find(':'), Some(64));
}

#[test]
fn john_export_prefixes_algorithm_signature() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("john.txt");
    let candidates = vec!["abc".to_string()];

    write_export(&out, ExportFormat::John, HashAlgo::Sha512, &candidates)
        .expect("export written");

    let contents = std::fs::read_to_string(&out).expect("readable");
    let line = contents.lines().next().expect("one line");
    assert!(line.starts_with("$SHA512$"));
    assert!(line.ends_with(":abc"));
    // $SHA512$ + 128 hex chars + ':'
    assert_eq!(line.find(':'), Some(8 + 128));
}

#[test]
fn dictionary_simulation_stops_at_first_match() {
    let wordlist = vec![
        "password".to_string(),
        "AnnLee".to_string(),
        "Lee2005".to_string(),
    ];

    let outcome = simulate_dictionary("AnnLee", &wordlist);
    assert!(outcome.found);
    assert_eq!(outcome.attempts, 2);
}

#[test]
fn dictionary_simulation_reports_miss() {
    let wordlist = vec!["password".to_string(), "123456".to_string()];

    let outcome = simulate_dictionary("AnnLee", &wordlist);
    assert!(!outcome.found);
    assert_eq!(outcome.attempts, 2);
}

#[test]
fn brute_force_estimate_sums_lengths() {
    // 2-char charset, 3-char target: 2 + 4 + 8 guesses.
    let estimate = estimate_brute_force("abc", "ab", 7).expect("estimate");
    assert_eq!(estimate.charset_size, 2);
    assert_eq!(estimate.target_len, 3);
    assert_eq!(estimate.search_space, 14.0);
    assert_eq!(estimate.projected_seconds, 2.0);
}

#[test]
fn brute_force_estimate_rejects_bad_inputs() {
    assert!(matches!(
        estimate_brute_force("abc", DEFAULT_CHARSET, 0),
        Err(ExportError::ZeroGuessRate)
    ));
    assert!(matches!(
        estimate_brute_force("abc", "", 1_000),
        Err(ExportError::EmptyCharset)
    ));
}

#[test]
fn default_charset_is_mixed_case_alphanumeric() {
    assert_eq!(DEFAULT_CHARSET.len(), 62);
}
