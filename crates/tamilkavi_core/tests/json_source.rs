use serde_json::json;
use std::path::Path;
use tamilkavi_core::{load_authors, JsonDirSource, Library, QueryError, RecordSource};

fn write_record(dir: &Path, file_name: &str, value: &serde_json::Value) {
    std::fs::write(dir.join(file_name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn author(name: &str, poem_title: &str) -> serde_json::Value {
    json!({
        "author": name,
        "contact": format!("{name}@x.com"),
        "books": [{
            "booktitle": format!("{name} book"),
            "coverimage": "",
            "description": "",
            "category": "Love",
            "context": [{ "title": poem_title, "line": "வரி", "meaning": "line" }]
        }]
    })
}

#[test]
fn authors_load_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "03_meena.json", &author("Meena", "third"));
    write_record(dir.path(), "01_anand.json", &author("Anand", "first"));
    write_record(dir.path(), "02_kavi.json", &author("Kavi", "second"));

    let library = Library::load(&JsonDirSource::new(dir.path()));
    let titles = library
        .all_poems()
        .unwrap()
        .iter()
        .map(|poem| poem.title().to_string())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["first", "second", "third"]);
    assert_eq!(library.poem_at(1).unwrap().line(), "வரி");
}

#[test]
fn invalid_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "a.json", &author("Anand", "ok"));
    std::fs::write(dir.path().join("b.json"), "{ truncated").unwrap();
    write_record(dir.path(), "c.json", &json!({ "author": "x", "contact": "y" }));
    write_record(
        dir.path(),
        "d.json",
        &json!({ "author": "x", "contact": "y", "books": [{ "booktitle": 1 }] }),
    );

    let source = JsonDirSource::new(dir.path());
    assert_eq!(source.records().unwrap().len(), 3);

    let authors = load_authors(&source).unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name(), "Anand");
}

#[test]
fn empty_directory_is_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let library = Library::load(&JsonDirSource::new(dir.path()));
    assert_eq!(library.all_poems().unwrap_err(), QueryError::NotLoaded);
}

#[test]
fn missing_directory_is_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("kavisrc");

    assert!(load_authors(&JsonDirSource::new(&missing)).is_err());
    let library = Library::load(&JsonDirSource::new(&missing));
    assert_eq!(library.size().unwrap_err(), QueryError::NotLoaded);
}
