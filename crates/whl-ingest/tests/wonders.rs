use whl_model::WonderId;

use whl_ingest::{IngestError, SourceFormat, WonderExpectations, parse_wonder_groups};

fn expectations(groups: usize, wonders: usize, finalists: usize) -> WonderExpectations {
    WonderExpectations {
        groups: Some(groups),
        wonders: Some(wonders),
        finalists: Some(finalists),
    }
}

const GROUPS: &str = r#"[
    {
        "id": 100,
        "title": "Wonders of the Ancient World",
        "url": "https://example.org/ancient",
        "wonders": [
            {"id": 1, "title": "Great Pyramid of Giza", "url": "https://example.org/giza", "whs": 86},
            {"id": 2, "title": "Hanging Gardens of Babylon", "url": "https://example.org/babylon"}
        ],
        "finalists": [
            {"id": 8, "title": "Colosseum", "url": "https://example.org/colosseum", "whs": 91}
        ]
    },
    {
        "id": 200,
        "title": "New7Wonders of the World",
        "url": "https://example.org/new7",
        "wonders": [
            {"id": 7, "title": "Petra", "url": "https://example.org/petra", "whs": 326}
        ],
        "finalists": [
            {"id": 8, "title": "Acropolis of Athens", "url": "https://example.org/acropolis"}
        ]
    }
]"#;

#[test]
fn global_ids_compose_from_group_offset_and_rank() {
    let groups =
        parse_wonder_groups(GROUPS, SourceFormat::JsonArray, &expectations(2, 3, 2)).expect("parse");
    assert_eq!(groups[0].wonders[0].id, WonderId(101));
    assert_eq!(groups[1].wonders[0].id, WonderId(207));
    assert_eq!(groups[1].finalists[0].id, WonderId(208));
    assert!(groups[1].wonders[0].id.is_wonder());
    assert!(groups[1].finalists[0].id.is_finalist());
}

#[test]
fn groups_keep_source_order_and_subsets_sort_by_title() {
    let groups =
        parse_wonder_groups(GROUPS, SourceFormat::JsonArray, &WonderExpectations::default())
            .expect("parse");
    assert_eq!(groups[0].title, "Wonders of the Ancient World");
    assert_eq!(groups[1].title, "New7Wonders of the World");
    let titles: Vec<&str> = groups[0].wonders.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles, ["Great Pyramid of Giza", "Hanging Gardens of Babylon"]);
}

#[test]
fn duplicate_global_ids_are_all_reported() {
    let payload = r#"[
        {"id": 100, "title": "A", "url": "https://example.org/a",
         "wonders": [
            {"id": 1, "title": "One", "url": "https://example.org/1"},
            {"id": 1, "title": "One again", "url": "https://example.org/1b"},
            {"id": 2, "title": "Two", "url": "https://example.org/2"},
            {"id": 2, "title": "Two again", "url": "https://example.org/2b"}
         ],
         "finalists": []}
    ]"#;
    let error =
        parse_wonder_groups(payload, SourceFormat::JsonArray, &WonderExpectations::default())
            .unwrap_err();
    match error {
        IngestError::DuplicateWonderIds { ids } => assert_eq!(ids, [101, 102]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn an_eighth_entry_filed_under_wonders_is_rejected() {
    let payload = r#"[
        {"id": 100, "title": "A", "url": "https://example.org/a",
         "wonders": [{"id": 8, "title": "Too many", "url": "https://example.org/8"}],
         "finalists": []}
    ]"#;
    let error =
        parse_wonder_groups(payload, SourceFormat::JsonArray, &WonderExpectations::default())
            .unwrap_err();
    assert!(matches!(
        error,
        IngestError::MisfiledWonder {
            id: 108,
            expected: "wonder",
            ..
        }
    ));
}

#[test]
fn group_offset_must_be_a_positive_multiple_of_100() {
    let payload = r#"[{"id": 150, "title": "A", "url": "https://example.org/a",
        "wonders": [], "finalists": []}]"#;
    let error =
        parse_wonder_groups(payload, SourceFormat::JsonArray, &WonderExpectations::default())
            .unwrap_err();
    assert!(matches!(error, IngestError::InvalidValue { .. }));
}

#[test]
fn subset_counts_are_checked_against_the_snapshot() {
    let error =
        parse_wonder_groups(GROUPS, SourceFormat::JsonArray, &expectations(2, 21, 56)).unwrap_err();
    assert!(matches!(
        error,
        IngestError::SubsetCount {
            subset: "wonders",
            expected: 21,
            actual: 3,
            ..
        }
    ));
}
