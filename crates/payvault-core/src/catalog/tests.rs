use tempfile::tempdir;

use crate::models::EntrySource;
use crate::test_support::{CatalogServer, SQLI_DOCUMENT, XSS_DOCUMENT};

use super::*;

fn categories(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| (*key).to_string()).collect()
}

#[test]
fn remote_fetch_all_collects_categories_and_skips_failures() {
    let server = CatalogServer::start(&[
        ("/version.json", r#"{"version": "2024.06.1"}"#),
        ("/payloads/xss.json", XSS_DOCUMENT),
        ("/payloads/sqli.json", SQLI_DOCUMENT),
    ]);
    let remote =
        RemoteCatalog::new(&server.uri(), 2_000, categories(&["xss", "sqli", "ssti"])).expect("client");

    let fetch = remote.fetch_all();
    let ids = fetch
        .entries
        .iter()
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["xss-001", "xss-002", "sqli-001"]);
    assert!(fetch.entries.iter().all(|entry| entry.source == EntrySource::Remote));
    assert_eq!(fetch.skipped, vec!["ssti".to_string()]);

    let version = remote.fetch_version().expect("version").expect("known");
    assert_eq!(version.version, "2024.06.1");
}

#[test]
fn remote_version_is_unknown_on_http_error_status() {
    let server = CatalogServer::start(&[]);
    let remote = RemoteCatalog::new(&server.uri(), 2_000, categories(&["xss"])).expect("client");
    assert!(remote.fetch_version().expect("status only").is_none());
}

#[test]
fn unreachable_remote_skips_every_category() {
    let remote = RemoteCatalog::new("http://127.0.0.1:1/", 500, categories(&["xss", "sqli"]))
        .expect("client");
    assert_eq!(remote.base_url(), "http://127.0.0.1:1");

    let fetch = remote.fetch_all();
    assert!(fetch.is_empty());
    assert_eq!(fetch.skipped, categories(&["xss", "sqli"]));
    assert!(remote.fetch_version().is_err());
}

#[test]
fn embedded_catalog_reads_existing_files_and_tags_source() {
    let temp = tempdir().expect("tempdir");
    std::fs::write(temp.path().join("xss.json"), XSS_DOCUMENT).expect("write xss");
    std::fs::write(temp.path().join("lfi.json"), "{not json").expect("write lfi");

    let catalog = EmbeddedCatalog::new(temp.path(), categories(&["xss", "sqli", "lfi"]));
    let fetch = catalog.load();

    assert_eq!(fetch.entries.len(), 2);
    assert!(
        fetch
            .entries
            .iter()
            .all(|entry| entry.source == EntrySource::Embedded)
    );
    assert_eq!(fetch.skipped, categories(&["lfi"]));
}

#[test]
fn category_key_becomes_fallback_display_category() {
    let temp = tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("open_redirect.json"),
        r#"[{"id": "or-1", "title": "Double slash", "payload": "//evil.example"}]"#,
    )
    .expect("write");

    let fetch = EmbeddedCatalog::new(temp.path(), categories(&["open_redirect"])).load();
    assert_eq!(fetch.entries[0].category, "OPEN_REDIRECT");
}
