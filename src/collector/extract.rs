//! HTML table extraction for the skater statistics page.
//!
//! The page carries several tables and the one we want is identified by its
//! Russian header labels. Column meaning is positional and the layout carries
//! no schema contract, so anything that does not look like a data row is
//! dropped and counted instead of failing the whole parse.

use scraper::{ElementRef, Html, Selector};

use crate::domain::PlayerRecord;

// Header labels that identify the skater table
const HEADER_PLAYER: &str = "Игрок";
const HEADER_TEAM: &str = "Команда";

/// Minimum cell count for a data row; sub-headers and separators have fewer
const MIN_CELLS: usize = 10;

/// Result of a best-effort parse: what was extracted and how much was dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub players: Vec<PlayerRecord>,
    pub skipped_rows: usize,
}

/// Parse the statistics document into player rows.
///
/// Root-relative profile links are rewritten against `origin`
/// (e.g. "https://allhockey.ru"). A document without any table yields an
/// empty extraction, not an error.
pub fn extract_players(html: &str, origin: &str) -> Extraction {
    let document = Html::parse_document(html);

    let table_sel = Selector::parse("table").unwrap();
    let th_sel = Selector::parse("th").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    let tables: Vec<ElementRef> = document.select(&table_sel).collect();
    let target = tables
        .iter()
        .find(|table| {
            let headers: Vec<String> = table.select(&th_sel).map(element_text).collect();
            headers.iter().any(|h| h == HEADER_PLAYER) && headers.iter().any(|h| h == HEADER_TEAM)
        })
        .or_else(|| tables.first());

    let mut extraction = Extraction::default();
    let Some(target) = target else {
        return extraction;
    };

    for row in target.select(&tr_sel) {
        let cells: Vec<ElementRef> = row.select(&td_sel).collect();
        if cells.len() < MIN_CELLS {
            extraction.skipped_rows += 1;
            continue;
        }

        let name_anchor = cells[1].select(&a_sel).next();
        let name = match name_anchor {
            Some(anchor) => element_text(anchor),
            None => element_text(cells[1]),
        };
        if name.is_empty() {
            extraction.skipped_rows += 1;
            continue;
        }

        let team = match cells[2].select(&a_sel).next() {
            Some(anchor) => element_text(anchor),
            None => element_text(cells[2]),
        };

        let profile_url = name_anchor
            .and_then(|anchor| anchor.value().attr("href"))
            .map(|href| {
                if href.starts_with('/') {
                    format!("{}{}", origin, href)
                } else {
                    href.to_string()
                }
            })
            .unwrap_or_default();

        extraction.players.push(PlayerRecord {
            name,
            team,
            team_abbr: element_text(cells[3]),
            position: element_text(cells[4]),
            points: element_text(cells[5]),
            goals: element_text(cells[6]),
            assists: element_text(cells[7]),
            games_played: element_text(cells[8]),
            plus_minus: element_text(cells[9]),
            penalty_minutes: optional_cell(&cells, 10),
            faceoff_wins: optional_cell(&cells, 11),
            faceoff_pct: optional_cell(&cells, 12),
            time_on_ice: optional_cell(&cells, 13),
            profile_url,
        });
    }

    extraction
}

/// Concatenated, trimmed text content of an element
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn optional_cell(cells: &[ElementRef], index: usize) -> String {
    cells.get(index).copied().map(element_text).unwrap_or_default()
}
