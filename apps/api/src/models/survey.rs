use serde::{Deserialize, Serialize};

/// The six Holland-code (RIASEC) trait categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Category {
    /// Fixed trait order R, I, A, S, E, C. Tier enumeration and code
    /// generation iterate in this order, which makes every downstream
    /// candidate list deterministic.
    pub const ALL: [Category; 6] = [
        Category::Realistic,
        Category::Investigative,
        Category::Artistic,
        Category::Social,
        Category::Enterprising,
        Category::Conventional,
    ];

    pub fn letter(self) -> char {
        match self {
            Category::Realistic => 'R',
            Category::Investigative => 'I',
            Category::Artistic => 'A',
            Category::Social => 'S',
            Category::Enterprising => 'E',
            Category::Conventional => 'C',
        }
    }

    /// Lenient parse from a spreadsheet cell: trims, then matches the first
    /// character case-insensitively, so `"R"`, `"r"` and `"Realistic"` all
    /// resolve to `Realistic`. Anything else (including the loader's
    /// `"general"` default) is `None`.
    pub fn parse(value: &str) -> Option<Category> {
        let first = value.trim().chars().next()?;
        match first.to_ascii_uppercase() {
            'R' => Some(Category::Realistic),
            'I' => Some(Category::Investigative),
            'A' => Some(Category::Artistic),
            'S' => Some(Category::Social),
            'E' => Some(Category::Enterprising),
            'C' => Some(Category::Conventional),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Realistic => 0,
            Category::Investigative => 1,
            Category::Artistic => 2,
            Category::Social => 3,
            Category::Enterprising => 4,
            Category::Conventional => 5,
        }
    }
}

/// Serde adapter for `Option<Category>`: `Some` is the single trait letter,
/// `None` is the `"general"` placeholder used when the source data carried no
/// usable category.
pub mod category_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Category;

    pub const GENERAL: &str = "general";

    pub fn serialize<S>(value: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(category) => serializer.serialize_char(category.letter()),
            None => serializer.serialize_str(GENERAL),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::parse(&raw))
    }
}

/// A survey question. `id` is the 1-based position in the loaded table and
/// defines the positional alignment with submitted answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(with = "category_label")]
    pub category: Option<Category>,
}

/// Per-category yes tallies. Always carries all six categories; a category
/// that never appears in the questions simply stays at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([u32; 6]);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn increment(&mut self, category: Category) {
        self.0[category.index()] += 1;
    }

    pub fn max_count(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Scores normalized to [0,1] by dividing each raw count by the maximum
    /// raw count (by 1 when every count is zero, so an all-"no" submission
    /// yields all zeros rather than a division error).
    pub fn normalized(&self) -> RiasecScores {
        let divisor = self.max_count().max(1) as f64;
        RiasecScores {
            realistic: self.get(Category::Realistic) as f64 / divisor,
            investigative: self.get(Category::Investigative) as f64 / divisor,
            artistic: self.get(Category::Artistic) as f64 / divisor,
            social: self.get(Category::Social) as f64 / divisor,
            enterprising: self.get(Category::Enterprising) as f64 / divisor,
            conventional: self.get(Category::Conventional) as f64 / divisor,
        }
    }
}

/// Normalized per-category scores in the response wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiasecScores {
    #[serde(rename = "R")]
    pub realistic: f64,
    #[serde(rename = "I")]
    pub investigative: f64,
    #[serde(rename = "A")]
    pub artistic: f64,
    #[serde(rename = "S")]
    pub social: f64,
    #[serde(rename = "E")]
    pub enterprising: f64,
    #[serde(rename = "C")]
    pub conventional: f64,
}

/// One row of the two-letter-code personality table. Codes are stored
/// trimmed and uppercased at load so matching never re-normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub code: String,
    pub role: String,
    pub description: String,
    pub interpretation: String,
    pub enjoyment: Vec<String>,
    pub strengths: Vec<String>,
    pub icon_id: String,
}

/// One row of the industry table. Several rows may share a matching-code
/// prefix; the match layer unions and deduplicates them by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub matching_code: String,
    pub name: String,
    pub overview: String,
    pub trending: String,
    pub insight: String,
    pub career_paths: Vec<String>,
    pub education: String,
}
