use whl_model::SiteId;

use whl_ingest::{IngestError, SourceFormat, parse_inscribed, parse_tentative};

#[test]
fn json_array_vintage_sorts_by_name() {
    let payload = r#"[
        {"id_no": "91", "name_en": "Historic Centre of Rome", "iso_code": "it,va"},
        {"id_no": "86", "name_en": "Memphis and its Necropolis", "iso_code": "eg"},
        {"id_no": "148", "name_en": "Old City of Jerusalem and its Walls", "iso_code": ""}
    ]"#;
    let sites = parse_inscribed(payload, SourceFormat::JsonArray, Some(3)).expect("parse");
    let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Historic Centre of Rome",
            "Memphis and its Necropolis",
            "Old City of Jerusalem and its Walls"
        ]
    );
    assert!(sites[2].countries.is_empty());
}

#[test]
fn query_rows_vintage_sorts_by_id_and_accepts_alias_keys() {
    let payload = r#"{"query": {"row": [
        {"id_number": 326, "site": "Petra", "states": "jo"},
        {"id_number": 86, "site": "Memphis and its Necropolis", "states": "eg"}
    ]}}"#;
    let sites = parse_inscribed(payload, SourceFormat::QueryRows, Some(2)).expect("parse");
    assert_eq!(sites[0].id, SiteId(86));
    assert_eq!(sites[1].id, SiteId(326));
    assert_eq!(sites[1].name, "Petra");
}

#[test]
fn csv_vintage_parses_the_spreadsheet_export() {
    let payload = "id_no,name_en,iso_code\n570,Butrint,al\n211,Minaret of Jam,af\n";
    let sites = parse_inscribed(payload, SourceFormat::Csv, Some(2)).expect("parse");
    assert_eq!(sites[0].name, "Butrint");
    assert_eq!(sites[1].id, SiteId(211));
    assert_eq!(sites[1].countries.as_str(), "af");
}

#[test]
fn numeric_string_and_number_ids_are_equivalent() {
    let as_string = r#"[{"id_no": "86", "name_en": "Memphis", "iso_code": "eg"}]"#;
    let as_number = r#"[{"id_no": 86, "name_en": "Memphis", "iso_code": "eg"}]"#;
    let left = parse_inscribed(as_string, SourceFormat::JsonArray, None).expect("parse");
    let right = parse_inscribed(as_number, SourceFormat::JsonArray, None).expect("parse");
    assert_eq!(left, right);
}

#[test]
fn count_mismatch_aborts_before_any_join() {
    let payload = r#"[{"id_no": "86", "name_en": "Memphis", "iso_code": "eg"}]"#;
    let error = parse_inscribed(payload, SourceFormat::JsonArray, Some(1073)).unwrap_err();
    assert!(matches!(
        error,
        IngestError::CountMismatch {
            expected: 1073,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn missing_site_id_names_every_alias_tried() {
    let payload = r#"[{"name_en": "Memphis", "iso_code": "eg"}]"#;
    let error = parse_inscribed(payload, SourceFormat::JsonArray, None).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("id_no, id_number, site_id"), "got: {message}");
}

#[test]
fn tentative_json_vintage_parses_submission_dates() {
    let payload = r#"[
        {"id_no": 5613, "name": "The Porticoes of Bologna", "iso": "IT", "submitted": "2006-06-01"},
        {"id_no": 1115, "name": "City of Balkh", "iso": "AF", "submitted": "2004-08-17"}
    ]"#;
    let sites = parse_tentative(payload, SourceFormat::JsonArray, Some(2)).expect("parse");
    assert_eq!(sites[0].name, "City of Balkh");
    assert_eq!(
        sites[1].submitted.map(|date| date.to_string()),
        Some(String::from("2006-06-01"))
    );
}

#[test]
fn tentative_rejects_the_keyed_format() {
    let error = parse_tentative("{}", SourceFormat::JsonKeyed, None).unwrap_err();
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}
