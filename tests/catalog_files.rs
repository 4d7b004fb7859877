//! Loading catalogs from files and starting the plugin from configuration.

use bookshelf::catalog::{load_catalog, CatalogSource, FileSource};
use bookshelf::{initialize, BookshelfError, Config, Theme};
use std::fs;
use tempfile::TempDir;

const JSON_CATALOG: &str = r#"{
  "books_per_page": 2,
  "authors": { "a1": "Mary Shelley", "a2": "Bram Stoker" },
  "genres": { "g1": "Horror", "g2": "Classics" },
  "books": [
    { "id": "b1", "title": "Frankenstein", "author": "a1", "image": "f.jpg",
      "genres": ["g1", "g2"], "published": "1818-01-01T00:00:00.000Z", "description": "A creature." },
    { "id": "b2", "title": "Dracula", "author": "a2", "image": "d.jpg",
      "genres": ["g1"], "published": "1897-05-26T00:00:00.000Z", "description": "A count." },
    { "id": "b3", "title": "The Last Man", "author": "a1", "image": "",
      "genres": ["g2"], "published": "1826-01-01", "description": "" }
  ]
}"#;

const TOML_CATALOG: &str = r#"
books_per_page = 1

[authors]
a1 = "Jules Verne"

[genres]
g1 = "Adventure"

[[books]]
id = "v1"
title = "Around the World in Eighty Days"
author = "a1"
genres = ["g1"]
published = "1872-11-06"

[[books]]
id = "v2"
title = "Journey to the Centre of the Earth"
author = "a1"
genres = ["g1"]
published = "1864-11-25T00:00:00.000Z"
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn json_file_loads_with_its_page_size() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.json", JSON_CATALOG);

    let (catalog, page_size) = load_catalog(&FileSource::new(&path)).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(page_size, 2);
    assert_eq!(catalog.author_name("a2").unwrap(), "Bram Stoker");
    assert_eq!(catalog.find_book_by_id("b3").unwrap().published_year(), 1826);
}

#[test]
fn toml_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.toml", TOML_CATALOG);

    let (catalog, page_size) = load_catalog(&FileSource::new(&path)).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(page_size, 1);
    assert_eq!(catalog.genre_name("g1").unwrap(), "Adventure");
    assert_eq!(catalog.find_book_by_id("v2").unwrap().published_year(), 1864);
}

#[test]
fn unsupported_extension_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.yaml", "books: []");

    let err = FileSource::new(&path).load().unwrap_err();
    assert!(matches!(err, BookshelfError::Config(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.json", "{ \"books\": [ ");

    let err = load_catalog(&FileSource::new(&path)).unwrap_err();
    assert!(matches!(err, BookshelfError::Parse(_)));
}

#[test]
fn dangling_author_reference_is_rejected() {
    let dir = TempDir::new().unwrap();
    let contents = JSON_CATALOG.replace("\"author\": \"a2\"", "\"author\": \"a9\"");
    let path = write(&dir, "books.json", &contents);

    let err = load_catalog(&FileSource::new(&path)).unwrap_err();
    assert!(matches!(err, BookshelfError::InvalidData(_)));
}

#[test]
fn initialize_uses_the_configured_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.json", JSON_CATALOG);
    let config = Config {
        catalog_file: Some(path),
        color_scheme: Some("dark".to_string()),
        trace_level: None,
    };

    let state = initialize(&config);
    assert_eq!(state.theme, Theme::Night);
    assert_eq!(state.document.list.items.len(), 2);
    assert_eq!(state.document.list.show_more.label, "Show more (1)");

    let authors: Vec<&str> = state
        .document
        .search_overlay
        .form
        .authors
        .options()
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(authors, vec!["All Authors", "Mary Shelley", "Bram Stoker"]);
}

#[test]
fn missing_file_starts_with_an_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        catalog_file: Some(dir.path().join("absent.json").to_string_lossy().into_owned()),
        ..Config::default()
    };

    let state = initialize(&config);
    assert!(state.catalog.is_empty());
    assert!(state.document.list.items.is_empty());
    assert!(state.document.list.message_visible);
    assert!(state.document.list.show_more.disabled);
    assert_eq!(state.document.list.show_more.label, "Show more (0)");
}
