//! Full classification pipeline and the response shape it produces.
//!
//! tally -> rank -> candidate codes -> profile matching -> report assembly.
//! The pipeline never fails: malformed answers tally as nothing and lookup
//! misses resolve to the documented defaults, so a submission always gets a
//! well-formed result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::SurveyDataset;
use crate::models::survey::{IndustryProfile, PersonalityProfile, RiasecScores};
use crate::survey::codes::generate_codes;
use crate::survey::matching::{match_industries, match_personality};
use crate::survey::ranking::rank;
use crate::survey::scoring::tally_answers;

/// Personality section of the analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityReport {
    #[serde(rename = "type")]
    pub role: String,
    pub description: String,
    pub interpretation: String,
    pub enjoyment: Vec<String>,
    pub your_strength: Vec<String>,
    #[serde(rename = "iconId")]
    pub icon_id: String,
    #[serde(rename = "riasecScores")]
    pub riasec_scores: RiasecScores,
}

/// Structured JUPAS programme details parsed out of an industry's education
/// cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JupasInfo {
    pub subject: String,
    #[serde(rename = "jupasCode")]
    pub jupas_code: String,
    pub school: String,
    #[serde(rename = "averageScore")]
    pub average_score: String,
}

/// One recommended industry. `id` is the 1-based position in the
/// deduplicated list, not a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryReport {
    pub id: String,
    pub name: String,
    pub overview: String,
    pub trending: String,
    pub insight: String,
    #[serde(rename = "examplePaths")]
    pub example_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(rename = "jupasInfo", default, skip_serializing_if = "Option::is_none")]
    pub jupas_info: Option<JupasInfo>,
}

/// The full analysis response for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub personality: PersonalityReport,
    pub industries: Vec<IndustryReport>,
}

/// Runs the whole pipeline against the loaded reference tables.
pub fn analyze(answers: &[String], dataset: &SurveyDataset) -> AnalysisResult {
    let counts = tally_answers(answers, &dataset.questions);
    let ranking = rank(&counts);
    let personality_codes = generate_codes(2, &ranking);
    let industry_codes = generate_codes(3, &ranking);
    debug!(
        counts = ?counts,
        personality_codes = ?personality_codes,
        industry_codes = ?industry_codes,
        "classified submission"
    );

    let profile = match_personality(&personality_codes, &dataset.personalities);
    let industries = match_industries(&industry_codes, &dataset.industries);

    AnalysisResult {
        personality: personality_report(profile, counts.normalized()),
        industries: industries
            .into_iter()
            .enumerate()
            .map(|(index, row)| industry_report(index, row))
            .collect(),
    }
}

fn personality_report(profile: PersonalityProfile, scores: RiasecScores) -> PersonalityReport {
    PersonalityReport {
        role: profile.role,
        description: profile.description,
        interpretation: profile.interpretation,
        enjoyment: profile.enjoyment,
        your_strength: profile.strengths,
        icon_id: profile.icon_id,
        riasec_scores: scores,
    }
}

fn industry_report(index: usize, profile: IndustryProfile) -> IndustryReport {
    let jupas_info = parse_jupas_info(&profile.education);
    let education = if profile.education.trim().is_empty() {
        None
    } else {
        Some(profile.education)
    };
    IndustryReport {
        id: (index + 1).to_string(),
        name: profile.name,
        overview: profile.overview,
        trending: profile.trending,
        insight: profile.insight,
        example_paths: profile.career_paths,
        education,
        jupas_info,
    }
}

/// Parses an education cell of the shape
/// `subject // JUPAS code // school // score` into structured programme
/// details. Cells with fewer than four fragments carry no JUPAS programme
/// and yield nothing.
pub fn parse_jupas_info(education: &str) -> Option<JupasInfo> {
    let parts: Vec<&str> = education
        .split("//")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 4 {
        return None;
    }
    Some(JupasInfo {
        subject: parts[0].to_string(),
        jupas_code: parts[1].to_string(),
        school: parts[2].to_string(),
        average_score: format!("{}/7.0", parts[3]),
    })
}
