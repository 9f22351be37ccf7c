//! Per-country coverage table for the `stats` command.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use whl_reconcile::Reconciler;
use whl_report::build_sitelist;

pub fn print_stats(recon: &Reconciler) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Country"),
        header_cell("WHS"),
        header_cell("Visited"),
        header_cell("TWHS"),
        header_cell("Visited"),
    ]);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for country in recon.member_countries() {
        let whs = recon.whs_for_country(country);
        let whs_visited = whs
            .iter()
            .filter(|site| recon.visit_for_whs(site.id).is_some())
            .count();
        let twhs = recon.twhs_for_country(country);
        let twhs_visited = twhs
            .iter()
            .filter(|site| recon.visit_for_twhs(site.id).is_some())
            .count();
        table.add_row(vec![
            Cell::new(&country.name),
            Cell::new(whs.len()),
            Cell::new(whs_visited),
            Cell::new(twhs.len()),
            Cell::new(twhs_visited),
        ]);
    }

    // Totals come from the same build pass as the report footer, so the
    // distinct-ID accounting of transboundary sites matches the document.
    let tally = build_sitelist(recon).tally;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(tally.inscribed_total).add_attribute(Attribute::Bold),
        Cell::new(tally.inscribed_visited).add_attribute(Attribute::Bold),
        Cell::new(tally.tentative_total).add_attribute(Attribute::Bold),
        Cell::new(tally.tentative_visited).add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
    println!(
        "WHS: {}/{} ({}) — TWHS: {}/{} ({}) — TOTAL: {}/{} ({})",
        tally.inscribed_visited,
        tally.inscribed_total,
        tally.inscribed_share(),
        tally.tentative_visited,
        tally.tentative_total,
        tally.tentative_share(),
        tally.visited(),
        tally.total(),
        tally.combined_share(),
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
