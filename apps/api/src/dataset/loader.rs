//! Reference-table loading.
//!
//! The data source is a directory of CSV files, one per logical table
//! (questions, two-letter personalities, industries), located under lenient
//! file names and read with lenient headers. The loader only fails when the
//! directory itself is unreadable or no table at all can be opened; anything
//! less degrades to documented defaults with a warning.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dataset::list_parse::parse_list;
use crate::dataset::schema::{self, FieldResolver};
use crate::models::survey::{Category, IndustryProfile, PersonalityProfile, Question};

/// The single fatal loader condition: the service cannot start meaningfully
/// without any reference data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reference data source not found: {0}")]
    DataSourceNotFound(String),
}

/// The three reference tables. Loaded once, shared behind an `Arc`, never
/// mutated afterwards, so request handlers read without locking.
#[derive(Debug, Clone, Default)]
pub struct SurveyDataset {
    pub questions: Vec<Question>,
    pub personalities: Vec<PersonalityProfile>,
    pub industries: Vec<IndustryProfile>,
}

pub fn load_dataset(dir: &Path) -> Result<SurveyDataset, DatasetError> {
    let stems = index_csv_files(dir)?;

    let questions = load_table(&stems, schema::QUESTION_TABLE_NAMES, "questions", read_questions);
    let personalities = load_table(
        &stems,
        schema::PERSONALITY_TABLE_NAMES,
        "personality",
        read_personalities,
    );
    let industries = load_table(&stems, schema::INDUSTRY_TABLE_NAMES, "industries", read_industries);

    if questions.is_none() && personalities.is_none() && industries.is_none() {
        return Err(DatasetError::DataSourceNotFound(format!(
            "no reference table could be loaded from {}",
            dir.display()
        )));
    }

    let dataset = SurveyDataset {
        questions: questions.unwrap_or_default(),
        personalities: personalities.unwrap_or_default(),
        industries: industries.unwrap_or_default(),
    };
    info!(
        questions = dataset.questions.len(),
        personalities = dataset.personalities.len(),
        industries = dataset.industries.len(),
        "reference data loaded"
    );
    Ok(dataset)
}

/// Maps normalized file stems to paths for every `.csv` entry in the data
/// directory. An unreadable directory is the hard failure case.
fn index_csv_files(dir: &Path) -> Result<HashMap<String, PathBuf>, DatasetError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| DatasetError::DataSourceNotFound(format!("{}: {e}", dir.display())))?;

    let mut stems = HashMap::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            stems.insert(schema::normalize_name(stem), path.clone());
        }
    }
    Ok(stems)
}

fn locate_table(
    stems: &HashMap<String, PathBuf>,
    candidates: &[&str],
    table: &'static str,
) -> Option<PathBuf> {
    for candidate in candidates {
        if let Some(path) = stems.get(*candidate) {
            debug!(table, file = %path.display(), "located table");
            return Some(path.clone());
        }
    }
    warn!(table, "no file under any accepted name, continuing without this table");
    None
}

/// Opens and reads one table. `None` means the table is unavailable (absent
/// or unopenable); `Some` carries the parsed rows, possibly empty.
fn load_table<T>(
    stems: &HashMap<String, PathBuf>,
    candidates: &[&str],
    table: &'static str,
    read: impl Fn(&mut csv::Reader<File>) -> Result<Vec<T>, csv::Error>,
) -> Option<Vec<T>> {
    let path = locate_table(stems, candidates, table)?;
    let mut reader = match csv::Reader::from_path(&path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!(table, file = %path.display(), error = %e, "table could not be opened");
            return None;
        }
    };
    match read(&mut reader) {
        Ok(rows) => {
            debug!(table, rows = rows.len(), "table loaded");
            Some(rows)
        }
        Err(e) => {
            warn!(table, file = %path.display(), error = %e, "table headers unreadable");
            None
        }
    }
}

/// Returns the trimmed cell under a resolved column, or `""` when the column
/// is unresolved or the record is short.
fn cell<'r>(record: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|index| record.get(index)).unwrap_or("").trim()
}

fn default_if_empty(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Skips records the CSV reader cannot decode (ragged rows, encoding
/// problems) with a warning instead of aborting the table.
fn readable_records<'r>(
    reader: &'r mut csv::Reader<File>,
    table: &'static str,
) -> impl Iterator<Item = StringRecord> + 'r {
    reader.records().enumerate().filter_map(move |(row, record)| match record {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(table, row = row + 1, error = %e, "skipping unreadable record");
            None
        }
    })
}

fn read_questions(reader: &mut csv::Reader<File>) -> Result<Vec<Question>, csv::Error> {
    let resolver = FieldResolver::new("questions", reader.headers()?);
    let text = resolver.resolve("text", schema::QUESTION_TEXT);
    let category = resolver.resolve("category", schema::QUESTION_CATEGORY);

    let mut questions = Vec::new();
    for record in readable_records(reader, "questions") {
        questions.push(Question {
            id: questions.len() as u32 + 1,
            text: cell(&record, text).to_string(),
            category: Category::parse(cell(&record, category)),
        });
    }
    Ok(questions)
}

fn read_personalities(
    reader: &mut csv::Reader<File>,
) -> Result<Vec<PersonalityProfile>, csv::Error> {
    let resolver = FieldResolver::new("personality", reader.headers()?);
    let code = resolver.resolve("code", schema::PERSONALITY_CODE);
    let role = resolver.resolve("role", schema::PERSONALITY_ROLE);
    let description = resolver.resolve("description", schema::PERSONALITY_DESCRIPTION);
    let interpretation = resolver.resolve("interpretation", schema::PERSONALITY_INTERPRETATION);
    let enjoyment = resolver.resolve("enjoyment", schema::PERSONALITY_ENJOYMENT);
    let strengths = resolver.resolve("strengths", schema::PERSONALITY_STRENGTHS);
    let icon_id = resolver.resolve("icon_id", schema::PERSONALITY_ICON_ID);

    let mut profiles = Vec::new();
    for record in readable_records(reader, "personality") {
        profiles.push(PersonalityProfile {
            code: cell(&record, code).to_uppercase(),
            role: cell(&record, role).to_string(),
            description: cell(&record, description).to_string(),
            interpretation: cell(&record, interpretation).to_string(),
            enjoyment: parse_list(cell(&record, enjoyment)),
            strengths: parse_list(cell(&record, strengths)),
            icon_id: default_if_empty(cell(&record, icon_id), "1"),
        });
    }
    Ok(profiles)
}

fn read_industries(reader: &mut csv::Reader<File>) -> Result<Vec<IndustryProfile>, csv::Error> {
    let resolver = FieldResolver::new("industries", reader.headers()?);
    let matching_code = resolver.resolve("code", schema::INDUSTRY_CODE);
    let name = resolver.resolve("name", schema::INDUSTRY_NAME);
    let overview = resolver.resolve("overview", schema::INDUSTRY_OVERVIEW);
    let trending = resolver.resolve("trending", schema::INDUSTRY_TRENDING);
    let insight = resolver.resolve("insight", schema::INDUSTRY_INSIGHT);
    let career_paths = resolver.resolve("career_paths", schema::INDUSTRY_CAREER_PATHS);
    let education = resolver.resolve("education", schema::INDUSTRY_EDUCATION);

    let mut industries = Vec::new();
    for record in readable_records(reader, "industries") {
        industries.push(IndustryProfile {
            matching_code: cell(&record, matching_code).to_uppercase(),
            name: cell(&record, name).to_string(),
            overview: cell(&record, overview).to_string(),
            trending: cell(&record, trending).to_string(),
            insight: cell(&record, insight).to_string(),
            career_paths: parse_list(cell(&record, career_paths)),
            education: cell(&record, education).to_string(),
        });
    }
    Ok(industries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn canonical_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "questions.csv",
            "question_text,category\n\
             I enjoy repairing engines,R\n\
             I enjoy running experiments,I\n\
             I enjoy composing music,A\n",
        );
        write_file(
            &dir,
            "personality.csv",
            "code,type,description,interpretation,enjoyment,strengths,icon_id\n\
             RI,The Builder-Thinker,Hands-on and analytical,You combine craft with theory,Workshops // Laboratories,Practicality // Curiosity,3\n\
             AS,The Expressive Helper,Creative and social,You create for people,Studios // Classrooms,Imagination // Empathy,7\n",
        );
        write_file(
            &dir,
            "industries.csv",
            "code,industry,overview,trending,insight,career_path,education\n\
             RIA,Engineering,Build physical systems,Robotics is growing,Strong demand,Mechanical Engineer // Site Engineer,Engineering // JS1000 // Tech University // 5.5\n\
             RIC,Applied Science,Research with application,Lab automation,Stable demand,Lab Technician,\n",
        );
        dir
    }

    #[test]
    fn test_load_canonical_dataset() {
        let dir = canonical_dir();
        let dataset = load_dataset(dir.path()).unwrap();

        assert_eq!(dataset.questions.len(), 3);
        assert_eq!(dataset.questions[0].id, 1);
        assert_eq!(dataset.questions[0].text, "I enjoy repairing engines");
        assert_eq!(dataset.questions[0].category, Some(Category::Realistic));
        assert_eq!(dataset.questions[2].category, Some(Category::Artistic));

        assert_eq!(dataset.personalities.len(), 2);
        let ri = &dataset.personalities[0];
        assert_eq!(ri.code, "RI");
        assert_eq!(ri.role, "The Builder-Thinker");
        assert_eq!(ri.enjoyment, vec!["Workshops", "Laboratories"]);
        assert_eq!(ri.strengths, vec!["Practicality", "Curiosity"]);
        assert_eq!(ri.icon_id, "3");

        assert_eq!(dataset.industries.len(), 2);
        let engineering = &dataset.industries[0];
        assert_eq!(engineering.matching_code, "RIA");
        assert_eq!(engineering.name, "Engineering");
        assert_eq!(
            engineering.career_paths,
            vec!["Mechanical Engineer", "Site Engineer"]
        );
        assert_eq!(dataset.industries[1].education, "");
    }

    #[test]
    fn test_alternate_names_load_identically() {
        let canonical = canonical_dir();

        let alternate = TempDir::new().unwrap();
        write_file(
            &alternate,
            "Question Pool.csv",
            "Questions:,Holland Code\n\
             I enjoy repairing engines,R\n\
             I enjoy running experiments,I\n\
             I enjoy composing music,A\n",
        );
        write_file(
            &alternate,
            "Two Digit.csv",
            "Holland Code,Role,Who You Are,How This Combination Interpret,What You Might Enjoy,Your Strength,IconId\n\
             RI,The Builder-Thinker,Hands-on and analytical,You combine craft with theory,Workshops // Laboratories,Practicality // Curiosity,3\n\
             AS,The Expressive Helper,Creative and social,You create for people,Studios // Classrooms,Imagination // Empathy,7\n",
        );
        write_file(
            &alternate,
            "Industry Insight.csv",
            "Personality Code,Name,Description,Trending,Insights,Career Paths,Education\n\
             RIA,Engineering,Build physical systems,Robotics is growing,Strong demand,Mechanical Engineer // Site Engineer,Engineering // JS1000 // Tech University // 5.5\n\
             RIC,Applied Science,Research with application,Lab automation,Stable demand,Lab Technician,\n",
        );

        let first = load_dataset(canonical.path()).unwrap();
        let second = load_dataset(alternate.path()).unwrap();
        assert_eq!(first.questions, second.questions);
        assert_eq!(first.personalities, second.personalities);
        assert_eq!(first.industries, second.industries);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = load_dataset(&missing).unwrap_err();
        assert!(matches!(err, DatasetError::DataSourceNotFound(_)));
    }

    #[test]
    fn test_no_tables_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "notes.txt", "not a table");
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::DataSourceNotFound(_)));
    }

    #[test]
    fn test_single_table_degrades_not_fails() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "questions.csv", "question_text,category\nI fix things,R\n");
        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.questions.len(), 1);
        assert!(dataset.personalities.is_empty());
        assert!(dataset.industries.is_empty());
    }

    #[test]
    fn test_missing_columns_default() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "questions.csv", "question_text\nI fix things\n");
        write_file(&dir, "personality.csv", "code\nRI\n");
        let dataset = load_dataset(dir.path()).unwrap();

        // No category column: the question stays, untagged.
        assert_eq!(dataset.questions[0].category, None);

        let profile = &dataset.personalities[0];
        assert_eq!(profile.code, "RI");
        assert_eq!(profile.role, "");
        assert_eq!(profile.description, "");
        assert!(profile.enjoyment.is_empty());
        assert!(profile.strengths.is_empty());
        assert_eq!(profile.icon_id, "1");
    }

    #[test]
    fn test_unreadable_record_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "questions.csv",
            "question_text,category\nI fix things,R\nshort row\nI test ideas,I\n",
        );
        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.questions.len(), 2);
        assert_eq!(dataset.questions[1].id, 2);
        assert_eq!(dataset.questions[1].text, "I test ideas");
    }

    #[test]
    fn test_codes_uppercased_at_load() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "personality.csv", "code,type\nri,The Builder-Thinker\n");
        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.personalities[0].code, "RI");
    }

    #[test]
    fn test_full_word_categories_parse() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "questions.csv",
            "question_text,category\nI lead teams,Enterprising\nI keep records,conventional\n",
        );
        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.questions[0].category, Some(Category::Enterprising));
        assert_eq!(dataset.questions[1].category, Some(Category::Conventional));
    }
}
