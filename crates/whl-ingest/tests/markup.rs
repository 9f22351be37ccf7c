use whl_ingest::{IngestError, SourceFormat, parse_tentative};

const PAGE: &str = r#"<html>
<body>
<h1>Tentative Lists</h1>
<table>
<tr>
  <td><a href="https://whc.unesco.org/en/tentativelists/5613/">The Porticoes of Bologna</a></td>
  <td>IT</td>
  <td>2006-06-01</td>
</tr>
<tr>
  <td><a href="https://whc.unesco.org/en/tentativelists/1115/">City of Balkh</a></td>
  <td>AF</td>
  <td>2004-08-17</td>
</tr>
<tr>
  <td><a href="https://whc.unesco.org/en/tentativelists/2298/">Frontiers of the Roman Empire &#039;Limes&#039;</a></td>
  <td>IT, AL</td>
  <td></td>
</tr>
</table>
</body>
</html>"#;

#[test]
fn both_passes_agree_and_rows_become_sites() {
    let sites = parse_tentative(PAGE, SourceFormat::Markup, Some(3)).expect("scrape");
    let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "City of Balkh",
            "Frontiers of the Roman Empire 'Limes'",
            "The Porticoes of Bologna"
        ]
    );
    let limes = &sites[1];
    assert_eq!(limes.countries.as_str(), "IT, AL");
    assert!(limes.submitted.is_none());
}

#[test]
fn stray_entity_link_reports_the_symmetric_difference() {
    let page = format!(
        "{PAGE}\n<p>See also <a href=\"https://whc.unesco.org/en/tentativelists/9999/\">a new submission</a></p>"
    );
    let error = parse_tentative(&page, SourceFormat::Markup, None).unwrap_err();
    match error {
        IngestError::MarkupDivergence {
            links,
            rows,
            unmatched,
        } => {
            assert_eq!(links, 4);
            assert_eq!(rows, 3);
            assert_eq!(unmatched, [9999]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn count_check_runs_after_the_cross_check() {
    let error = parse_tentative(PAGE, SourceFormat::Markup, Some(1695)).unwrap_err();
    assert!(matches!(
        error,
        IngestError::CountMismatch {
            expected: 1695,
            actual: 3,
            ..
        }
    ));
}
