use whl_model::{
    Alpha2, CountryCodes, ModelError, OrphanAttribution, SiteId, Visit, VisitLinks, VisitTarget,
    WonderId,
};

fn code(value: &str) -> Alpha2 {
    value.parse().expect("alpha-2 code")
}

// --- Alpha2 ---

#[test]
fn alpha2_accepts_two_letters_and_uppercases() {
    assert_eq!(code("jo").as_str(), "JO");
    assert_eq!(code(" IL ").as_str(), "IL");
}

#[test]
fn alpha2_rejects_non_letter_input() {
    for value in ["", "I", "ISR", "1L", "i-"] {
        let parsed: Result<Alpha2, _> = value.parse();
        assert!(
            matches!(parsed, Err(ModelError::InvalidCountryCode { .. })),
            "{value:?} should be rejected"
        );
    }
}

// --- CountryCodes join predicate ---

#[test]
fn codes_match_case_insensitively() {
    let field = CountryCodes::new("il,jo");
    assert!(field.contains(&code("IL")));
    assert!(field.contains(&code("JO")));
    assert!(!field.contains(&code("IT")));
}

#[test]
fn codes_match_each_entry_of_a_multi_code_field() {
    let field = CountryCodes::new("FR, IT, CH");
    assert!(field.contains(&code("fr")));
    assert!(field.contains(&code("it")));
    assert!(field.contains(&code("ch")));
    assert!(!field.contains(&code("de")));
}

#[test]
fn empty_field_matches_nothing() {
    let field = CountryCodes::new("");
    assert!(field.is_empty());
    assert!(!field.contains(&code("IL")));
}

// Containment is substring-based by contract; two codes that are not
// substrings of one another can never cross-match.
#[test]
fn disjoint_codes_do_not_cross_match() {
    let field = CountryCodes::new("al");
    assert!(field.contains(&code("AL")));
    assert!(!field.contains(&code("AF")));
    assert!(!field.contains(&code("LI")));
}

#[test]
fn substring_containment_is_the_documented_contract() {
    // A single-letter overlap does not match (codes are two letters), but a
    // full code embedded in a longer token does. Known limitation of the
    // upstream data contract, asserted so nobody "fixes" it by accident.
    let field = CountryCodes::new("malta");
    assert!(field.contains(&code("AL")));
}

// --- Visit construction ---

fn no_links() -> VisitLinks {
    VisitLinks::default()
}

#[test]
fn visit_with_exactly_one_target_builds() {
    let visit = Visit::from_fields(None, Some(SiteId(148)), None, no_links()).expect("visit");
    assert_eq!(visit.target, VisitTarget::Inscribed(SiteId(148)));
}

#[test]
fn visit_with_no_target_is_rejected() {
    let result = Visit::from_fields(None, None, None, no_links());
    assert_eq!(result.unwrap_err(), ModelError::VisitWithoutTarget);
}

#[test]
fn visit_with_two_targets_is_rejected() {
    let result = Visit::from_fields(Some(WonderId(101)), Some(SiteId(1)), None, no_links());
    assert_eq!(result.unwrap_err(), ModelError::AmbiguousVisitTarget);
}

#[test]
fn visit_links_labels_present_links_in_order() {
    let links = VisitLinks {
        visit: Some("https://example.org/visit".parse().expect("url")),
        stay: None,
        eat: Some("https://example.org/eat".parse().expect("url")),
    };
    let labeled = links.labeled();
    assert_eq!(labeled.len(), 2);
    assert_eq!(labeled[0].0, "Visit");
    assert_eq!(labeled[1].0, "Eat");
}

// --- Wonder classification ---

#[test]
fn rank_seven_is_a_wonder_rank_eight_is_a_finalist() {
    assert!(WonderId(207).is_wonder());
    assert!(WonderId(208).is_finalist());
    assert!(WonderId::compose(100, 1).is_wonder());
    assert!(WonderId::compose(300, 21).is_finalist());
}

#[test]
fn wonder_rank_is_local_to_the_group() {
    assert_eq!(WonderId(207).rank(), 7);
    assert_eq!(WonderId(321).rank(), 21);
}

// --- Orphan attribution default ---

#[test]
fn default_orphan_is_jerusalem_under_israel() {
    let orphan = OrphanAttribution::default();
    assert_eq!(orphan.site, SiteId(148));
    assert_eq!(orphan.country, code("IL"));
}
