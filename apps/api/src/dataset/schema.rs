//! Lenient schema resolution for the reference tables.
//!
//! The source data drifted across deployments: the same logical field shows
//! up under several header spellings, and each table under several file
//! names. Every logical name carries an ordered alias list; the first alias
//! present wins, and resolution happens once at load time instead of on
//! every row access.

use csv::StringRecord;
use tracing::{debug, warn};

/// Accepted file stems for the questions table, tried in order.
pub const QUESTION_TABLE_NAMES: &[&str] = &["questions", "question_pool", "survey_questions"];

/// Accepted file stems for the two-letter personality table.
pub const PERSONALITY_TABLE_NAMES: &[&str] = &["personality", "two_digit", "personality_types"];

/// Accepted file stems for the industry table.
pub const INDUSTRY_TABLE_NAMES: &[&str] = &["industries", "industry_insight", "industry", "career"];

pub const QUESTION_TEXT: &[&str] = &["question_text", "questions:", "question", "questions"];
pub const QUESTION_CATEGORY: &[&str] = &["category", "holland_code", "type"];

pub const PERSONALITY_CODE: &[&str] = &["code", "two_digit_code", "two-digit_code", "holland_code"];
pub const PERSONALITY_ROLE: &[&str] = &["type", "role"];
pub const PERSONALITY_DESCRIPTION: &[&str] = &["description", "who_you_are"];
pub const PERSONALITY_INTERPRETATION: &[&str] = &[
    "interpretation",
    "how_this_combination",
    "how_this_combination_interpret",
];
pub const PERSONALITY_ENJOYMENT: &[&str] = &["enjoyment", "what_you_might_enjoy"];
pub const PERSONALITY_STRENGTHS: &[&str] = &["strengths", "your_strength", "your_strengths"];
pub const PERSONALITY_ICON_ID: &[&str] = &["icon_id", "iconid"];

pub const INDUSTRY_CODE: &[&str] = &["code", "holland_code", "personality_code", "three_digit_code"];
pub const INDUSTRY_NAME: &[&str] = &["name", "industry"];
pub const INDUSTRY_OVERVIEW: &[&str] = &["overview", "description"];
pub const INDUSTRY_TRENDING: &[&str] = &["trending"];
pub const INDUSTRY_INSIGHT: &[&str] = &["insight", "insights"];
pub const INDUSTRY_CAREER_PATHS: &[&str] =
    &["career_path", "career_paths", "example_paths", "examplepaths"];
pub const INDUSTRY_EDUCATION: &[&str] = &["education"];

/// Normalizes a header or file stem for comparison: trim, lowercase, inner
/// whitespace runs collapsed to single underscores. `" Two Digit Code "` and
/// `"two_digit_code"` normalize identically.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Header positions for one table, resolved once per load.
pub struct FieldResolver {
    table: &'static str,
    headers: Vec<String>,
}

impl FieldResolver {
    pub fn new(table: &'static str, headers: &StringRecord) -> Self {
        Self {
            table,
            headers: headers.iter().map(normalize_name).collect(),
        }
    }

    /// Resolves a logical field to its column index via the alias list.
    /// The chosen variant is logged so schema drift stays diagnosable; a miss
    /// is a warning, never an error (the caller substitutes the documented
    /// default).
    pub fn resolve(&self, field: &str, aliases: &[&str]) -> Option<usize> {
        for alias in aliases {
            if let Some(index) = self.headers.iter().position(|h| h == alias) {
                debug!(
                    table = self.table,
                    field,
                    header = *alias,
                    column = index,
                    "resolved column"
                );
                return Some(index);
            }
        }
        warn!(
            table = self.table,
            field, "no accepted header present, using default value"
        );
        None
    }
}
