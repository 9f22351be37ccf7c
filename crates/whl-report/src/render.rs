//! Formats a line-item sequence into the two supported document profiles.
//!
//! Both profiles share identical body markup; the HTML profile wraps it in
//! page boilerplate while the WordPress profile is a bare fragment pasted
//! into a post editor.

use crate::items::{LineItem, ReportKind, ReportTotals, SiteKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Full page: doctype, head, body.
    Html,
    /// Bare content fragment.
    Wordpress,
}

const VISITED_MARK: &str = "✅";
const UNVISITED_MARK: &str = "◻️";

const SITELIST_LEGEND: &str = "<p dir=\"ltr\"><strong>The UNESCO World Heritage Site Master \
                               Sitelist</strong></p>\n\n<p>Inscribed properties are in plain \
                               text<br />\n<i>Tentative properties are in italic text</i></p>\n\n";

const WONDERLIST_LEGEND: &str = "<p dir=\"ltr\"><strong>The <a \
                                 href=\"https://new7wonders.com\">New7Wonders</a> Master \
                                 Wonderlist</strong></p>\n\n<p>Wonders are in plain text<br \
                                 />\n<i>Finalists are in italic text</i></p>\n\n";

const PAGE_FOOTER: &str = "    </body>\n</html>\n";

pub fn render(items: &[LineItem], profile: Profile) -> String {
    let mut out = String::new();
    if profile == Profile::Html {
        out.push_str(&page_header(items));
    }
    render_body(items, &mut out);
    if profile == Profile::Html {
        out.push_str(PAGE_FOOTER);
    }
    out
}

fn page_header(items: &[LineItem]) -> String {
    let title = match items.first() {
        Some(LineItem::Header(ReportKind::Wonderlist)) => "Wonderlist",
        _ => "Sitelist",
    };
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "    <head>\n",
            "        <meta charset=\"UTF-8\">\n",
            "        <title>{title}</title>\n",
            "    </head>\n",
            "    <body>\n",
        ),
        title = title
    )
}

/// Paragraph run currently open while walking wonder lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    None,
    Plain,
    Italic,
}

fn render_body(items: &[LineItem], out: &mut String) {
    let mut country_open = false;
    let mut italic_open = false;
    let mut wonder_run = Run::None;

    for item in items {
        match item {
            LineItem::Header(kind) => out.push_str(legend(*kind)),
            LineItem::CountryHeader {
                name,
                link,
                whs_count,
                twhs_count,
                file_link,
            } => {
                close_country(out, &mut country_open, &mut italic_open);
                out.push_str(&format!(
                    "<p dir=\"ltr\"><strong><a href=\"{link}\">{name}</a></strong> \
                     ({whs_count} WHS, {twhs_count} TWHS)"
                ));
                if let Some(file) = file_link {
                    out.push_str(&format!(" — <a href=\"{file}\">Country File</a>"));
                }
                out.push_str("<br />\n");
                country_open = true;
            }
            LineItem::EmptyCountryNote => {
                out.push_str("<i>no inscribed or tentative sites yet!</i><br />\n");
            }
            LineItem::SiteLine {
                kind,
                name,
                link,
                visited,
                extra_links,
            } => match kind {
                SiteKind::Inscribed | SiteKind::Tentative => {
                    if *kind == SiteKind::Tentative && !italic_open {
                        out.push_str("<i>");
                        italic_open = true;
                    }
                    if *kind == SiteKind::Inscribed && italic_open {
                        out.push_str("</i>");
                        italic_open = false;
                    }
                    push_site_line(out, name, link, *visited, extra_links);
                }
                SiteKind::Wonder | SiteKind::Finalist => {
                    let wanted = if *kind == SiteKind::Wonder {
                        Run::Plain
                    } else {
                        Run::Italic
                    };
                    if wonder_run != wanted {
                        close_wonder_run(out, &mut wonder_run);
                        out.push_str("<p dir=\"ltr\">");
                        if wanted == Run::Italic {
                            out.push_str("<i>");
                        }
                        wonder_run = wanted;
                    }
                    push_site_line(out, name, link, *visited, extra_links);
                }
            },
            LineItem::GroupHeader { title, link } => {
                close_wonder_run(out, &mut wonder_run);
                out.push_str(&format!(
                    "<p dir=\"ltr\"><strong><a href=\"{link}\">{title}</a>:</strong></p>\n"
                ));
            }
            LineItem::Footer(totals) => {
                close_country(out, &mut country_open, &mut italic_open);
                close_wonder_run(out, &mut wonder_run);
                out.push_str(&footer_line(totals));
            }
        }
    }
    close_country(out, &mut country_open, &mut italic_open);
    close_wonder_run(out, &mut wonder_run);
}

fn legend(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Sitelist => SITELIST_LEGEND,
        ReportKind::Wonderlist => WONDERLIST_LEGEND,
    }
}

fn push_site_line(
    out: &mut String,
    name: &str,
    link: &str,
    visited: bool,
    extra_links: &[(String, String)],
) {
    let mark = if visited { VISITED_MARK } else { UNVISITED_MARK };
    out.push_str(&format!("{mark} <a href=\"{link}\">{name}</a>"));
    for (label, url) in extra_links {
        out.push_str(&format!(" — <a href=\"{url}\">{label}</a>"));
    }
    out.push_str("<br />\n");
}

fn close_country(out: &mut String, country_open: &mut bool, italic_open: &mut bool) {
    if *italic_open {
        out.push_str("</i>");
        *italic_open = false;
    }
    if *country_open {
        out.push_str("</p>\n\n");
        *country_open = false;
    }
}

fn close_wonder_run(out: &mut String, run: &mut Run) {
    match run {
        Run::Plain => out.push_str("</p>\n"),
        Run::Italic => out.push_str("</i></p>\n"),
        Run::None => {}
    }
    *run = Run::None;
}

fn footer_line(totals: &ReportTotals) -> String {
    match totals {
        ReportTotals::Sites(tally) => format!(
            "<p dir=\"ltr\">WHS: {}/{} ({}) — TWHS: {}/{} ({}) — TOTAL: {}/{} ({})</p>\n",
            tally.inscribed_visited,
            tally.inscribed_total,
            tally.inscribed_share(),
            tally.tentative_visited,
            tally.tentative_total,
            tally.tentative_share(),
            tally.visited(),
            tally.total(),
            tally.combined_share(),
        ),
        ReportTotals::Wonders(tally) => format!(
            "<p dir=\"ltr\">Wonders visited: {}/{} ({}) — Finalists visited: {}/{} ({}) — \
             TOTAL: {}/{} ({})</p>\n",
            tally.wonders_visited,
            tally.wonders_total,
            tally.wonders_share(),
            tally.finalists_visited,
            tally.finalists_total,
            tally.finalists_share(),
            tally.visited(),
            tally.total(),
            tally.combined_share(),
        ),
    }
}
