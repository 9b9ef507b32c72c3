use super::*;

#[test]
fn test_parse_zotero_item() {
    let json = r#"{
        "key": "ABCD2345",
        "libraryID": 1,
        "itemType": "journalArticle",
        "title": "Foo Bar",
        "creators": [{"creatorType": "author", "firstName": "Jane", "lastName": "Doe"}],
        "date": "2020-03-15",
        "publicationTitle": "Journal of Foo",
        "volume": "5",
        "issue": 2,
        "DOI": "10.1000/foo",
        "tags": [{"tag": "science", "type": 1}],
        "accessDate": "2021-01-01T00:00:00Z"
    }"#;

    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.item_type, ItemType::JournalArticle);
    assert_eq!(record.library_id, Some(NumOrStr::Number(1)));
    assert_eq!(record.volume.as_deref(), Some("5"));
    assert_eq!(record.issue.as_deref(), Some("2"));
    assert_eq!(record.doi.as_deref(), Some("10.1000/foo"));
    assert_eq!(record.creators.len(), 1);
    assert_eq!(record.tags[0].text(), "science");
}

#[test]
fn test_unknown_item_type_keeps_name() {
    let record: Record = serde_json::from_str(r#"{"itemType": "dataset"}"#).unwrap();
    assert_eq!(record.item_type, ItemType::Unknown("dataset".to_string()));
    assert_eq!(record.item_type.as_str(), "dataset");
    assert!(!record.item_type.is_known());
}

#[test]
fn test_item_type_is_required() {
    let result = serde_json::from_str::<Record>(r#"{"title": "No type"}"#);
    assert!(result.is_err());
}

#[test]
fn test_item_type_round_trips_through_string() {
    for item_type in ItemType::KNOWN {
        let name = item_type.as_str().to_string();
        assert_eq!(ItemType::from(name), item_type);
    }
}

#[test]
fn test_plain_string_tags() {
    let record: Record =
        serde_json::from_str(r#"{"itemType": "book", "tags": ["history", {"tag": "_tablet"}]}"#)
            .unwrap();
    assert_eq!(record.tags, vec![
        Tag::Plain("history".to_string()),
        Tag::Structured {
            tag: "_tablet".to_string(),
            kind: None
        },
    ]);
}

#[test]
fn test_contributor_display_name() {
    let full = Contributor::new("author", Some("Jane"), Some("Doe"));
    assert_eq!(full.display_name().as_deref(), Some("Jane Doe"));

    let last_only = Contributor::new("author", None, Some("Plato"));
    assert_eq!(last_only.display_name().as_deref(), Some("Plato"));

    let first_only = Contributor::new("author", Some("Jane"), None);
    assert_eq!(first_only.display_name(), None);

    let nameless = Contributor::new("author", None, None);
    assert_eq!(nameless.display_name(), None);

    let empty_first = Contributor::new("author", Some(""), Some("Doe"));
    assert_eq!(empty_first.display_name().as_deref(), Some("Doe"));
}

#[test]
fn test_contributor_role_ignores_case() {
    let editor = Contributor::new("seriesEditor", None, Some("Smith"));
    assert!(editor.has_role("serieseditor"));
    assert!(editor.has_role("seriesEditor"));
    assert!(!editor.has_role("editor"));
}

#[test]
fn test_record_label() {
    let mut record = Record::new(ItemType::Book);
    assert_eq!(record.label(), "<unkeyed>");
    record.key = Some("ABCD2345".to_string());
    assert_eq!(record.label(), "ABCD2345");
    record.citation_key = Some("doe2020".to_string());
    assert_eq!(record.label(), "doe2020");
}
