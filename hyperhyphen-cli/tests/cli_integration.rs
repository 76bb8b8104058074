//! Integration tests for the hyphenate CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn hyphenate() -> Command {
    let mut cmd = Command::cargo_bin("hyphenate").unwrap();
    cmd.env_remove("HYPH_DICT_PATH")
        .env_remove("HYPHENATE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_hyphenation() {
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("hyphenation\ncharacter\nrhythm\n")
        .assert()
        .success()
        .stdout("hyphen=a=tion\nchar=ac=ter\nrhythm\n");
}

#[test]
fn test_left_min_option() {
    hyphenate()
        .args(["--left-min", "2"])
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("hyphenation\n")
        .assert()
        .success()
        .stdout("hy=phen=a=tion\n");
}

#[test]
fn test_chunk_lengths() {
    hyphenate()
        .arg("-nn")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("hyphenation\nkisasszony\n")
        .assert()
        .success()
        .stdout("6 1 4\n10\n");
}

#[test]
fn test_vector_output() {
    hyphenate()
        .arg("-n")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("répétition\n")
        .assert()
        .success()
        .stdout("0001000000\n");
}

#[test]
fn test_non_standard_break() {
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("kisasszony\n")
        .assert()
        .success()
        .stdout("kisasz=szony\n");

    hyphenate()
        .arg("-s")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("kisasszony\n")
        .assert()
        .success()
        .stdout("kisasszony\n");
}

#[test]
fn test_candidate_listing() {
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .arg("-d")
        .write_stdin("kisasszony\ncharacter\n")
        .assert()
        .success()
        .stdout("kisasz=szony\n - kisasz=szony\nchar=ac=ter\n - char=acter\n - charac=ter\n");
}

#[test]
fn test_replacement_spanning_two_characters() {
    hyphenate()
        .arg("-d")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("őzábcdef\n")
        .assert()
        .success()
        .stdout("őzbx=cdef\n - őzbx=cdef\n");
}

#[test]
fn test_supplementary_plane_characters() {
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("𱍊character\n")
        .assert()
        .success()
        .stdout("𱍊char=ac=ter\n");
}

#[test]
fn test_last_line_without_newline_and_crlf() {
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("character\r\nmiracle")
        .assert()
        .success()
        .stdout("char=ac=ter\nmira=cle\n");
}

#[test]
fn test_missing_dictionary_argument() {
    hyphenate()
        .write_stdin("word\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_flag() {
    hyphenate()
        .arg("-x")
        .arg(fixture_path("hyph_test.dic"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_third_n_is_a_usage_error() {
    hyphenate()
        .arg("-nnn")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin("character\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unreadable_dictionary() {
    hyphenate()
        .arg("tests/fixtures/nonexistent.dic")
        .write_stdin("word\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not load dictionary file \"tests/fixtures/nonexistent.dic\"",
        ));
}

#[test]
fn test_help_and_version() {
    hyphenate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-nn").or(predicate::str::contains("-n")));

    hyphenate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hyphenate"));
}

#[test]
fn test_dictionary_from_environment() {
    hyphenate()
        .env("HYPH_DICT_PATH", fixture_path("hyph_test.dic"))
        .write_stdin("character\n")
        .assert()
        .success()
        .stdout("char=ac=ter\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("hyphenate.toml");
    let dictionary = fs::canonicalize(fixture_path("hyph_test.dic")).unwrap();
    fs::write(
        &config,
        format!(
            "[dictionary]\npath = {:?}\n\n[hyphenation]\nleft_min = 2\n",
            dictionary.display().to_string()
        ),
    )
    .unwrap();

    hyphenate()
        .arg("-c")
        .arg(&config)
        .write_stdin("hyphenation\n")
        .assert()
        .success()
        .stdout("hy=phen=a=tion\n");

    // Command-line options win over the file
    hyphenate()
        .arg("-c")
        .arg(&config)
        .args(["--left-min", "4"])
        .write_stdin("hyphenation\n")
        .assert()
        .success()
        .stdout("hyphen=a=tion\n");
}

#[test]
fn test_installed_dictionaries() {
    let store = TempDir::new().unwrap();
    fs::copy(
        fixture_path("hyph_test.dic"),
        store.path().join("hyph_hu_HU.dic"),
    )
    .unwrap();
    fs::write(store.path().join("hyph_en_US.dic"), "UTF-8\n").unwrap();

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .arg("--list-dicts")
        .assert()
        .success()
        .stdout("en_US\nhu_HU\n");

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["-l", "hu"])
        .write_stdin("kisasszony\n")
        .assert()
        .success()
        .stdout("kisasz=szony\n");

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["-l", "fr"])
        .write_stdin("word\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No dictionary for language 'fr'"));
}

#[test]
fn test_install_and_uninstall() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hu_HU/hyph_hu_HU.dic"))
            .respond_with(
                ResponseTemplate::new(200).set_body_bytes(fs::read(fixture_path("hyph_test.dic")).unwrap()),
            )
            .mount(&server)
            .await;
        server
    });
    let store = TempDir::new().unwrap();
    let installed = store.path().join("hyph_hu_HU.dic");

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["--repository", server.uri().as_str(), "--install", "hu_HU"])
        .assert()
        .success()
        .stdout(format!("{}\n", installed.display()));
    assert!(installed.is_file());

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["-l", "hu"])
        .write_stdin("kisasszony\n")
        .assert()
        .success()
        .stdout("kisasz=szony\n");

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["--repository", server.uri().as_str(), "--install", "fr_FR"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to install dictionary for 'fr_FR'"))
        .stderr(predicate::str::contains("404"));

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["--uninstall", "hu"])
        .assert()
        .success();
    assert!(!installed.exists());

    hyphenate()
        .arg("--dict-dir")
        .arg(store.path())
        .args(["--uninstall", "hu"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No dictionary installed for 'hu'"));
}

#[test]
fn test_long_word_is_echoed() {
    let long = "a".repeat(1200);
    hyphenate()
        .arg("-q")
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin(format!("{long}\ncharacter\n"))
        .assert()
        .success()
        .stdout(format!("{long}\nchar=ac=ter\n"));
}

#[test]
fn test_long_word_warning_is_logged() {
    let long = "a".repeat(1200);
    hyphenate()
        .arg(fixture_path("hyph_test.dic"))
        .write_stdin(format!("{long}\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot hyphenate"));
}
