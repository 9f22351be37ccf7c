use whl_model::{SiteId, VisitTarget, WonderId};

use whl_ingest::{IngestError, SourceFormat, parse_visits};

#[test]
fn each_record_becomes_a_tagged_visit() {
    let payload = r#"[
        {"whs": 91, "visit": "https://example.org/rome"},
        {"twhs": 5613},
        {"wonder": 207, "visit": "https://example.org/petra", "stay": "https://example.org/stay"}
    ]"#;
    let visits = parse_visits(payload, SourceFormat::JsonArray, Some(3)).expect("parse");
    assert_eq!(visits[0].target, VisitTarget::Inscribed(SiteId(91)));
    assert_eq!(visits[1].target, VisitTarget::Tentative(SiteId(5613)));
    assert_eq!(visits[2].target, VisitTarget::Wonder(WonderId(207)));
    assert!(visits[1].links.is_empty());
    assert_eq!(visits[2].links.labeled().len(), 2);
}

#[test]
fn a_record_with_two_targets_fails_with_its_index() {
    let payload = r#"[
        {"whs": 91},
        {"whs": 86, "twhs": 5613}
    ]"#;
    let error = parse_visits(payload, SourceFormat::JsonArray, None).unwrap_err();
    match error {
        IngestError::Visit { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn a_record_with_no_target_fails() {
    let payload = r#"[{"visit": "https://example.org/nowhere"}]"#;
    let error = parse_visits(payload, SourceFormat::JsonArray, None).unwrap_err();
    assert!(matches!(error, IngestError::Visit { index: 0, .. }));
}

#[test]
fn malformed_link_is_a_schema_error() {
    let payload = r#"[{"whs": 91, "visit": "not a url"}]"#;
    let error = parse_visits(payload, SourceFormat::JsonArray, None).unwrap_err();
    assert!(matches!(error, IngestError::InvalidValue { .. }));
}
