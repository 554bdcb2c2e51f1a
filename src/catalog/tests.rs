use super::*;
use std::time::Duration;
use url::Url;

fn entry(filename: &str, name: &str, category: &str) -> CatalogEntry {
    CatalogEntry::new(filename, Some(name), EntryKind::Sound, category)
}

#[test]
fn id_is_deterministic() {
    let e = entry("a.mp3", "Bell", "Alerts");
    assert_eq!(e.id(), e.id());
    assert_eq!(e.id(), derive_id("Alerts", Some("Bell"), "a.mp3"));
}

#[test]
fn id_is_base64_of_joined_triple_without_padding() {
    // "A|B|c" -> "QXxCfGM="
    assert_eq!(derive_id("A", Some("B"), "c").to_string(), "QXxCfGM");
}

#[test]
fn id_is_url_and_selector_safe() {
    let ids = [
        derive_id("Alerts", Some("Bell"), "a.mp3"),
        derive_id("Çafé ☕", Some("Ünïcødé"), "sounds/ß.ogg"),
        derive_id("???", Some(">>>"), "~~~"),
    ];
    for id in ids {
        assert!(
            id.to_string()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unsafe id {id}"
        );
    }
}

#[test]
fn distinct_triples_get_distinct_ids() {
    let a = entry("a.mp3", "Bell", "Alerts");
    let b = entry("b.mp3", "Bell", "Alerts");
    let c = entry("a.mp3", "Chime", "Alerts");
    let d = entry("a.mp3", "Bell", "Music");
    let ids = [a.id(), b.id(), c.id(), d.id()];
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            assert_ne!(ids[i], ids[j]);
        }
    }
}

#[test]
fn identical_triples_collide() {
    let mut a = entry("a.mp3", "Bell", "Alerts");
    let mut b = a.clone();
    a.thumbnail = Some("one.png".into());
    b.kind = EntryKind::Song;
    assert_eq!(a.id(), b.id());
}

#[test]
fn missing_and_empty_display_names_collide() {
    let missing = CatalogEntry::new("a.mp3", None, EntryKind::Sound, "Alerts");
    let empty = CatalogEntry::new("a.mp3", Some(""), EntryKind::Sound, "Alerts");
    assert_eq!(missing.id(), empty.id());
    assert_eq!(missing.id().to_string(), "QWxlcnRzfHxhLm1wMw");
    assert_ne!(missing.title(), empty.title());
}

#[test]
fn missing_display_name_shows_untitled() {
    let e = CatalogEntry::new("a.mp3", None, EntryKind::Sound, "Alerts");
    assert_eq!(e.title(), "Untitled");
    assert_eq!(e.id(), derive_id("Alerts", None, "a.mp3"));
}

#[test]
fn parse_document_reads_entries_in_order_with_defaults() {
    let json = r#"{
        "sounds": [
            {"filename": "a.mp3", "displayName": "Bell", "type": "sound", "category": "Alerts"},
            {"filename": "b.mp3", "displayName": "Lofi", "type": "Song", "category": "Music", "thumbnail": "lofi.png"},
            {"filename": "c.mp3", "category": "Alerts", "type": "jingle", "thumbnail": null}
        ]
    }"#;
    let entries = parse_document(json, false).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title(), "Bell");
    assert_eq!(entries[1].kind, EntryKind::Song);
    assert_eq!(entries[1].thumbnail.as_deref(), Some("lofi.png"));
    assert_eq!(entries[2].kind, EntryKind::Sound);
    assert_eq!(entries[2].title(), "Untitled");
    assert_eq!(entries[2].thumbnail, None);
}

#[test]
fn parse_document_accepts_toml() {
    let toml = r#"
[[sounds]]
filename = "a.mp3"
displayName = "Bell"
category = "Alerts"
"#;
    let entries = parse_document(toml, true).unwrap();
    assert_eq!(entries, vec![entry("a.mp3", "Bell", "Alerts")]);
}

#[test]
fn parse_document_rejects_wrong_shapes() {
    assert!(matches!(
        parse_document(r#"{"items": []}"#, false),
        Err(CatalogError::Schema)
    ));
    assert!(matches!(
        parse_document(r#"{"sounds": {"a": 1}}"#, false),
        Err(CatalogError::Schema)
    ));
    assert!(matches!(
        parse_document(r#"[{"filename": "a.mp3"}]"#, false),
        Err(CatalogError::Schema)
    ));
    assert!(matches!(parse_document("null", false), Err(CatalogError::Schema)));
    assert!(matches!(parse_document("{", false), Err(CatalogError::Json(_))));
}

#[test]
fn parse_document_skips_items_missing_required_fields() {
    let json = r#"{"sounds": [{"displayName": "nameless"}, {"filename": "a.mp3", "category": "X"}]}"#;
    let entries = parse_document(json, false).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].filename, "a.mp3");
}

#[test]
fn load_missing_file_falls_back_to_demo_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let source = CatalogSource::Path(dir.path().join("nope.json"));

    let loaded = load(&source, Duration::from_secs(1));
    assert!(matches!(loaded.origin, CatalogOrigin::Fallback { .. }));
    assert!(loaded.entries.len() >= 2);
    assert!(loaded.entries.iter().any(|e| e.kind == EntryKind::Sound));
    assert!(loaded.entries.iter().any(|e| e.kind == EntryKind::Song));
}

#[test]
fn load_invalid_schema_falls_back_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tracks": []}"#).unwrap();

    let loaded = load(&CatalogSource::Path(path), Duration::from_secs(1));
    match loaded.origin {
        CatalogOrigin::Fallback { reason } => assert!(reason.contains("schema")),
        other => panic!("expected fallback, got {other:?}"),
    }
    assert_eq!(loaded.entries, fallback_entries());
}

#[test]
fn load_reads_file_and_sets_directory_base() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"sounds": [{"filename": "a.mp3", "displayName": "Bell", "category": "Alerts"}]}"#,
    )
    .unwrap();

    let loaded = load(&CatalogSource::Path(path), Duration::from_secs(1));
    assert_eq!(loaded.origin, CatalogOrigin::Loaded);
    assert_eq!(loaded.entries.len(), 1);

    let base = loaded.base.expect("base");
    let resolved = resolve_locator("a.mp3", Some(&base));
    let expected = Url::from_file_path(dir.path().join("a.mp3")).unwrap();
    assert_eq!(resolved, expected.as_str());
}

#[test]
fn empty_sounds_list_is_loaded_not_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"sounds": []}"#).unwrap();

    let loaded = load(&CatalogSource::Path(path), Duration::from_secs(1));
    assert_eq!(loaded.origin, CatalogOrigin::Loaded);
    assert!(loaded.entries.is_empty());
    assert!(group_by_category(&loaded.entries).is_empty());
}

#[test]
fn group_by_category_keeps_first_seen_and_catalog_order() {
    let entries = vec![
        entry("1.mp3", "One", "Music"),
        entry("2.mp3", "Two", "Alerts"),
        entry("3.mp3", "Three", "Music"),
        entry("4.mp3", "Four", "music"),
    ];
    let groups = group_by_category(&entries);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Music", "Alerts", "music"]);

    let music: Vec<&str> = groups[0].entries.iter().map(|e| e.title()).collect();
    assert_eq!(music, vec!["One", "Three"]);
}

#[test]
fn category_slug_collapses_runs() {
    assert_eq!(category_slug("Sound Effects!!"), "sound-effects-");
    assert_eq!(category_slug("Lo-Fi  Beats 2"), "lo-fi-beats-2");
    assert_eq!(category_slug("alerts"), "alerts");
}

#[test]
fn resolve_locator_handles_empty_absolute_and_relative() {
    let base = Url::parse("https://example.com/board/config.json").unwrap();
    assert_eq!(resolve_locator("", Some(&base)), "");
    assert_eq!(
        resolve_locator("clips/a.mp3", Some(&base)),
        "https://example.com/board/clips/a.mp3"
    );
    assert_eq!(
        resolve_locator("https://cdn.example.org/x.mp3", Some(&base)),
        "https://cdn.example.org/x.mp3"
    );
    assert_eq!(resolve_locator("plain.mp3", None), "plain.mp3");
}

#[test]
fn thumbnail_locator_uses_placeholder_when_absent() {
    let base = Url::parse("https://example.com/board/").unwrap();
    let mut e = entry("a.mp3", "Bell", "Alerts");
    assert_eq!(thumbnail_locator(&e, Some(&base), "placeholder"), "placeholder");
    e.thumbnail = Some("img/bell.png".into());
    assert_eq!(
        thumbnail_locator(&e, Some(&base), "placeholder"),
        "https://example.com/board/img/bell.png"
    );
}

#[test]
fn catalog_source_parse_distinguishes_remote_and_local() {
    assert!(matches!(
        CatalogSource::parse("https://example.com/config.json"),
        CatalogSource::Remote(_)
    ));
    assert!(matches!(CatalogSource::parse("config.json"), CatalogSource::Path(_)));
    assert!(CatalogSource::parse("board.TOML").is_toml());
    assert!(!CatalogSource::parse("board.json").is_toml());
}
