//! Code-to-profile matching with tiered fallbacks.
//!
//! Personality: exact code match across all candidates, then same-letters
//! match (a candidate `IR` matches a stored `RI`), then the default profile.
//! Industries: per candidate, exact match, then first-two-character match,
//! then first-character match, stopping at the first tier with rows; results
//! union across candidates and deduplicate by industry name. A lookup miss is
//! never an error, it degrades to the documented default and a warning.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::survey::{IndustryProfile, PersonalityProfile};

/// Finds the personality profile for a candidate code list. Tier 1 scans all
/// candidates for an exact match before tier 2 tries any of them by sorted
/// letters; the first candidate to satisfy a tier wins.
pub fn match_personality(
    codes: &[String],
    table: &[PersonalityProfile],
) -> PersonalityProfile {
    for code in codes {
        if let Some(profile) = table
            .iter()
            .find(|profile| profile.code.trim().eq_ignore_ascii_case(code.trim()))
        {
            return profile.clone();
        }
    }

    for code in codes {
        let wanted = sorted_letters(code);
        if let Some(profile) = table
            .iter()
            .find(|profile| sorted_letters(&profile.code) == wanted)
        {
            debug!(candidate = %code, matched = %profile.code, "personality matched by letter set");
            return profile.clone();
        }
    }

    warn!(candidates = ?codes, "no personality row matched, using default profile");
    default_personality()
}

/// Finds the industries for a candidate code list. Each candidate runs its
/// own exact, two-prefix, one-prefix chain; the union keeps candidate order
/// and drops industries whose name was already seen.
pub fn match_industries(
    codes: &[String],
    table: &[IndustryProfile],
) -> Vec<IndustryProfile> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<IndustryProfile> = Vec::new();

    for code in codes {
        for row in industry_rows_for(code, table) {
            if seen.insert(row.name.clone()) {
                results.push(row.clone());
            }
        }
    }

    if results.is_empty() {
        warn!(candidates = ?codes, "no industry row matched, using default industry");
        return vec![default_industry()];
    }
    results
}

/// The fallback chain for one candidate code. Stops at the first tier that
/// yields at least one row.
fn industry_rows_for<'t>(
    code: &str,
    table: &'t [IndustryProfile],
) -> Vec<&'t IndustryProfile> {
    let exact: Vec<&IndustryProfile> = table
        .iter()
        .filter(|row| row.matching_code.trim().eq_ignore_ascii_case(code.trim()))
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let two_prefix: Vec<&IndustryProfile> = table
        .iter()
        .filter(|row| prefix_matches(&row.matching_code, code, 2))
        .collect();
    if !two_prefix.is_empty() {
        debug!(candidate = %code, rows = two_prefix.len(), "industries matched on two-letter prefix");
        return two_prefix;
    }

    let one_prefix: Vec<&IndustryProfile> = table
        .iter()
        .filter(|row| prefix_matches(&row.matching_code, code, 1))
        .collect();
    if !one_prefix.is_empty() {
        debug!(candidate = %code, rows = one_prefix.len(), "industries matched on first letter");
    }
    one_prefix
}

/// True when the first `n` characters of both codes agree, case-insensitively.
/// A stored code shorter than `n` never matches at that tier.
fn prefix_matches(stored: &str, candidate: &str, n: usize) -> bool {
    let stored = head(stored, n);
    let candidate = head(candidate, n);
    stored.len() == n && candidate.len() == n && stored == candidate
}

fn head(code: &str, n: usize) -> Vec<char> {
    code.trim()
        .chars()
        .take(n)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn sorted_letters(code: &str) -> Vec<char> {
    let mut letters: Vec<char> = code
        .trim()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    letters.sort_unstable();
    letters
}

/// Profile returned when no personality row matches at any tier.
pub fn default_personality() -> PersonalityProfile {
    PersonalityProfile {
        code: String::new(),
        role: "Default Type".to_string(),
        description: "We couldn't determine your specific personality type based on your answers."
            .to_string(),
        interpretation: "Your answers indicate a unique combination of interests and preferences."
            .to_string(),
        enjoyment: vec![
            "Exploring different career options".to_string(),
            "Learning about your strengths and interests".to_string(),
        ],
        strengths: vec!["Adaptability".to_string(), "Unique perspective".to_string()],
        icon_id: "1".to_string(),
    }
}

/// Industry returned when no candidate code matches any row at any tier.
pub fn default_industry() -> IndustryProfile {
    IndustryProfile {
        matching_code: String::new(),
        name: "General Career Path".to_string(),
        overview: "Based on your personality type, you might enjoy a variety of career paths."
            .to_string(),
        trending: "Many fields are growing and offer opportunities for someone with your interests."
            .to_string(),
        insight:
            "Consider exploring different industries to find what resonates with your personal values and strengths."
                .to_string(),
        career_paths: vec![
            "Research careers that match your interests".to_string(),
            "Speak with a career counselor".to_string(),
            "Try internships in different fields".to_string(),
        ],
        education: "Various educational paths can lead to fulfilling careers.".to_string(),
    }
}
