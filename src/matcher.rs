//! Fuzzy player-name matching.
//!
//! Two passes over the table: an approximate pass gated by a similarity
//! cutoff, then a substring rescue. The rescue catches queries like a bare
//! last name, which score poorly against a full "First Last" string but are
//! unambiguous to a human reader.

use std::collections::HashSet;
use strsim::normalized_levenshtein;

use crate::domain::{PlayerMatch, PlayerRecord};

/// Minimum similarity for the approximate candidate pass
const CANDIDATE_CUTOFF: f64 = 0.6;

/// Fixed score for case-insensitive substring containment; ranks above any
/// inexact fuzzy score and below a perfect 1.0
const SUBSTRING_SCORE: f64 = 0.99;

/// Rank the table against a free-text query.
///
/// Returns at most `limit` matches, descending by score, deduplicated by
/// player name. Input order is preserved among equal scores. An empty table
/// yields an empty result.
pub fn find_best_matches(query: &str, players: &[PlayerRecord], limit: usize) -> Vec<PlayerMatch> {
    let mut ranked: Vec<(f64, &str)> = players
        .iter()
        .map(|p| (normalized_levenshtein(query, &p.name), p.name.as_str()))
        .filter(|(score, _)| *score >= CANDIDATE_CUTOFF)
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    let candidates: HashSet<&str> = ranked.iter().take(limit).map(|(_, name)| *name).collect();

    let query_lower = query.to_lowercase();

    let mut matches: Vec<PlayerMatch> = players
        .iter()
        .filter(|p| candidates.contains(p.name.as_str()))
        .map(|p| PlayerMatch {
            score: normalized_levenshtein(&query_lower, &p.name.to_lowercase()),
            player: p.clone(),
        })
        .collect();

    // Substring rescue, keyed by name so two distinct rows sharing a name
    // cannot both slip in.
    let mut seen: HashSet<String> = matches.iter().map(|m| m.player.name.clone()).collect();
    for p in players {
        if !seen.contains(&p.name) && p.name.to_lowercase().contains(&query_lower) {
            seen.insert(p.name.clone());
            matches.push(PlayerMatch {
                score: SUBSTRING_SCORE,
                player: p.clone(),
            });
        }
    }

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut unique: Vec<PlayerMatch> = Vec::new();
    let mut emitted: HashSet<String> = HashSet::new();
    for m in matches {
        if unique.len() == limit {
            break;
        }
        if emitted.insert(m.player.name.clone()) {
            unique.push(m);
        }
    }

    unique
}
