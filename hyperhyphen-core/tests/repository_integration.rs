//! Dictionary download against a local HTTP server

use hyperhyphen_core::{Dictionary, DictionaryStore, Repository, RepositoryError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oor:component-data xmlns:oor="http://openoffice.org/2001/registry" oor:name="Linguistic" oor:package="org.openoffice.Office">
  <node oor:name="ServiceManager">
    <node oor:name="Dictionaries">
      <node oor:name="HyphDic_en_US" oor:op="fuse">
        <prop oor:name="Locations" oor:type="oor:string-list">
          <value>%origin%/hyph_en_US.dic</value>
        </prop>
        <prop oor:name="Locales" oor:type="oor:string-list">
          <value>en-US</value>
        </prop>
      </node>
      <node oor:name="HyphDic_en_GB" oor:op="fuse">
        <prop oor:name="Locations" oor:type="oor:string-list">
          <value>%origin%/hyph_en_GB.dic</value>
        </prop>
        <prop oor:name="Locales" oor:type="oor:string-list">
          <value>en-GB en-AU</value>
        </prop>
      </node>
    </node>
  </node>
</oor:component-data>
"#;

fn fixture() -> Vec<u8> {
    fs::read(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hyph_test.dic"))
        .unwrap()
}

/// Start a server answering `routes`; everything else is a 404
fn serve(routes: Vec<(&str, Vec<u8>)>) -> (Runtime, MockServer) {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        for (route, body) in routes {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
                .mount(&server)
                .await;
        }
        server
    });
    (runtime, server)
}

#[test]
fn test_install_through_descriptor() {
    let (_runtime, server) = serve(vec![
        ("/en/dictionaries.xcu", DESCRIPTOR.as_bytes().to_vec()),
        ("/en/hyph_en_GB.dic", fixture()),
    ]);
    let dir = TempDir::new().unwrap();
    let store = DictionaryStore::new(dir.path());
    let repository = Repository::new(server.uri()).unwrap();

    // en_GB has no directory of its own; the en descriptor lists it
    let location = repository.locate("en_GB").unwrap();
    assert_eq!(location.url, format!("{}/en/hyph_en_GB.dic", server.uri()));

    let installed = repository.install(&store, "en_GB", false).unwrap();
    assert_eq!(installed, dir.path().join("hyph_en_GB.dic"));
    assert_eq!(store.installed_languages().unwrap(), vec!["en_GB"]);

    let dictionary = Dictionary::load(&installed).unwrap();
    let hyphenation = dictionary
        .hyphenate(b"character", &Default::default())
        .unwrap();
    assert_eq!(hyphenation.hyphenated(), b"char=ac=ter");
}

#[test]
fn test_install_falls_back_to_conventional_path() {
    let (_runtime, server) = serve(vec![("/hu_HU/hyph_hu_HU.dic", fixture())]);
    let dir = TempDir::new().unwrap();
    let store = DictionaryStore::new(dir.path());
    let repository = Repository::new(server.uri()).unwrap();

    assert_eq!(repository.locate("hu_HU"), None);
    let installed = repository.install(&store, "hu_HU", false).unwrap();
    assert_eq!(fs::read(installed).unwrap(), fixture());
}

#[test]
fn test_installed_language_is_not_downloaded_again() {
    let (_runtime, server) = serve(vec![("/en_GB/hyph_en_GB.dic", fixture())]);
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hyph_en_US.dic"), "UTF-8\n").unwrap();
    let store = DictionaryStore::new(dir.path());
    let repository = Repository::new(server.uri()).unwrap();

    let kept = repository.install(&store, "en_GB", false).unwrap();
    assert_eq!(kept, dir.path().join("hyph_en_US.dic"));
    assert_eq!(store.installed_languages().unwrap(), vec!["en_US"]);

    let replaced = repository.install(&store, "en_GB", true).unwrap();
    assert_eq!(replaced, dir.path().join("hyph_en_GB.dic"));
    assert_eq!(
        store.installed_languages().unwrap(),
        vec!["en_GB", "en_US"]
    );
}

#[test]
fn test_missing_dictionary_is_an_http_error() {
    let (_runtime, server) = serve(Vec::new());
    let dir = TempDir::new().unwrap();
    let store = DictionaryStore::new(dir.path());
    let repository = Repository::new(server.uri()).unwrap();

    let err = repository.install(&store, "xx", false).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Status { status: 404, ref url } if url.ends_with("/xx/hyph_xx.dic")
    ));
    assert!(store.installed_languages().unwrap().is_empty());
}
