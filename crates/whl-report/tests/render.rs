use chrono::NaiveDate;
use whl_model::{
    Country, CountryCodes, CountryFile, InscribedSite, Member, OrphanAttribution, SiteId,
    SnapshotEntities, TentativeSite, Visit, VisitLinks, Wonder, WonderGroup, WonderId,
};
use whl_reconcile::Reconciler;
use whl_report::{Profile, build_sitelist, build_wonderlist, render};

fn country(code: &str, name: &str) -> Country {
    Country {
        code: code.parse().expect("code"),
        alpha3: format!("{code}X"),
        name: name.to_owned(),
        official_name: name.to_owned(),
        numeric: String::from("000"),
        wiki_url: None,
        unofficial: false,
        wiki_entry: None,
    }
}

fn member(code: &str, name: &str) -> Member {
    Member {
        code: code.parse().expect("code"),
        name: name.to_owned(),
        joined: NaiveDate::from_ymd_opt(1950, 1, 1).expect("date"),
        region: String::from("Test"),
    }
}

fn fixture() -> SnapshotEntities {
    SnapshotEntities {
        countries: vec![
            country("IL", "Israel"),
            country("IT", "Italy"),
            country("LI", "Liechtenstein"),
        ],
        members: vec![
            member("IL", "Israel"),
            member("IT", "Italy"),
            member("LI", "Liechtenstein"),
        ],
        inscribed: vec![
            InscribedSite {
                id: SiteId(91),
                name: String::from("Historic Centre of Rome"),
                countries: CountryCodes::new("it,va"),
            },
            InscribedSite {
                id: SiteId(148),
                name: String::from("Old City of Jerusalem and its Walls"),
                countries: CountryCodes::new(""),
            },
            InscribedSite {
                id: SiteId(1040),
                name: String::from("Masada"),
                countries: CountryCodes::new("il"),
            },
        ],
        tentative: vec![TentativeSite {
            id: SiteId(5613),
            name: String::from("The Porticoes of Bologna"),
            countries: CountryCodes::new("IT"),
            submitted: None,
        }],
        visits: vec![
            Visit::from_fields(None, Some(SiteId(148)), None, VisitLinks::default())
                .expect("visit"),
            Visit::from_fields(
                None,
                None,
                Some(SiteId(5613)),
                VisitLinks {
                    visit: Some("https://example.org/bologna".parse().expect("url")),
                    stay: None,
                    eat: None,
                },
            )
            .expect("visit"),
            Visit::from_fields(Some(WonderId(207)), None, None, VisitLinks::default())
                .expect("visit"),
        ],
        country_files: vec![CountryFile {
            code: "IT".parse().expect("code"),
            file: Some("https://example.org/italy".parse().expect("url")),
            name: Some(String::from("Italy")),
        }],
        wonder_groups: vec![WonderGroup {
            id: 200,
            title: String::from("New7Wonders of the World"),
            url: "https://example.org/new7".parse().expect("url"),
            wonders: vec![
                Wonder {
                    id: WonderId(201),
                    title: String::from("Great Wall of China"),
                    url: "https://example.org/wall".parse().expect("url"),
                    whs: None,
                    twhs: None,
                    link: None,
                },
                Wonder {
                    id: WonderId(207),
                    title: String::from("Petra"),
                    url: "https://example.org/petra".parse().expect("url"),
                    whs: Some(SiteId(326)),
                    twhs: None,
                    link: None,
                },
            ],
            finalists: vec![Wonder {
                id: WonderId(208),
                title: String::from("Acropolis of Athens"),
                url: "https://example.org/acropolis".parse().expect("url"),
                whs: None,
                twhs: None,
                link: None,
            }],
        }],
    }
}

fn reconciler() -> Reconciler {
    Reconciler::new(fixture(), OrphanAttribution::default()).expect("reconcile")
}

#[test]
fn wordpress_profile_is_a_bare_fragment() {
    let report = build_sitelist(&reconciler());
    let fragment = render(&report.items, Profile::Wordpress);
    assert!(fragment.starts_with("<p dir=\"ltr\"><strong>The UNESCO World Heritage"));
    assert!(!fragment.contains("<!DOCTYPE"));
    assert!(!fragment.contains("</html>"));
}

#[test]
fn html_profile_wraps_the_identical_body() {
    let report = build_sitelist(&reconciler());
    let fragment = render(&report.items, Profile::Wordpress);
    let page = render(&report.items, Profile::Html);
    assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(page.ends_with("    </body>\n</html>\n"));
    assert!(page.contains("<title>Sitelist</title>"));
    assert!(page.contains(&fragment), "page must embed the fragment body");
}

#[test]
fn visited_and_unvisited_marks_render_per_site() {
    let report = build_sitelist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert!(body.contains("◻️ <a href=\"https://whc.unesco.org/en/list/1040\">Masada</a><br />"));
    assert!(body.contains(
        "✅ <a href=\"https://whc.unesco.org/en/list/148\">Old City of Jerusalem and its \
         Walls</a><br />"
    ));
}

#[test]
fn tentative_lines_render_inside_an_italic_run() {
    let report = build_sitelist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert!(body.contains(
        "<i>✅ <a href=\"https://whc.unesco.org/en/tentativelists/5613\">The Porticoes of \
         Bologna</a> — <a href=\"https://example.org/bologna\">Visit</a><br />\n</i></p>"
    ));
}

#[test]
fn country_header_renders_counts_and_file_link() {
    let report = build_sitelist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert!(body.contains(
        "<p dir=\"ltr\"><strong><a \
         href=\"https://whc.unesco.org/en/statesparties/IT/\">Italy</a></strong> (1 WHS, 1 \
         TWHS) — <a href=\"https://example.org/italy\">Country File</a><br />"
    ));
}

#[test]
fn empty_country_renders_exactly_one_note() {
    let report = build_sitelist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert_eq!(
        body.matches("<i>no inscribed or tentative sites yet!</i><br />").count(),
        1
    );
}

#[test]
fn sitelist_footer_reports_counts_and_shares() {
    let report = build_sitelist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert!(body.ends_with(
        "<p dir=\"ltr\">WHS: 1/3 (33.3%) — TWHS: 1/1 (100.0%) — TOTAL: 2/4 (50.0%)</p>\n"
    ));
}

#[test]
fn wonderlist_renders_group_paragraphs_and_italic_finalists() {
    let report = build_wonderlist(&reconciler());
    let body = render(&report.items, Profile::Wordpress);
    assert!(body.contains(
        "<p dir=\"ltr\"><strong><a href=\"https://example.org/new7\">New7Wonders of the \
         World</a>:</strong></p>\n"
    ));
    assert!(body.contains(
        "<p dir=\"ltr\">◻️ <a href=\"https://example.org/wall\">Great Wall of China</a><br />\n\
         ✅ <a href=\"https://example.org/petra\">Petra</a><br />\n</p>\n"
    ));
    assert!(body.contains(
        "<p dir=\"ltr\"><i>◻️ <a href=\"https://example.org/acropolis\">Acropolis of \
         Athens</a><br />\n</i></p>\n"
    ));
    assert!(body.ends_with(
        "<p dir=\"ltr\">Wonders visited: 1/2 (50.0%) — Finalists visited: 0/1 (0.0%) — TOTAL: \
         1/3 (33.3%)</p>\n"
    ));
    let page = render(&report.items, Profile::Html);
    assert!(page.contains("<title>Wonderlist</title>"));
}
