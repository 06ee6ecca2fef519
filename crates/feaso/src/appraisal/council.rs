use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// How receptive a council's planning department is to medium density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CouncilCategory {
    Facilitator,
    Neutral,
    Protector,
}

impl CouncilCategory {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "facilitator" => Some(Self::Facilitator),
            "neutral" => Some(Self::Neutral),
            "protector" => Some(Self::Protector),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Facilitator => "Facilitator",
            Self::Neutral => "Neutral",
            Self::Protector => "Protector",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouncilProfile {
    pub council: String,
    pub category: CouncilCategory,
    pub notes: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CouncilRegistryError {
    #[error("failed to read council profiles: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid council profile CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("council '{council}' has unknown category '{category}'")]
    UnknownCategory { council: String, category: String },
}

/// Lookup table of council risk profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouncilRegistry {
    profiles: Vec<CouncilProfile>,
}

impl CouncilRegistry {
    /// Built-in profiles for the councils covered by the acquisitions team.
    pub fn standard() -> Self {
        const PROFILES: [(&str, CouncilCategory, &str); 9] = [
            (
                "Monash",
                CouncilCategory::Facilitator,
                "Generally growth-focused. Good for townhouses in GRZ.",
            ),
            (
                "Kingston",
                CouncilCategory::Facilitator,
                "Supportive of development near transport hubs.",
            ),
            (
                "Manningham",
                CouncilCategory::Facilitator,
                "Accepting of density, but watch for steep topography overlays.",
            ),
            (
                "Darebin",
                CouncilCategory::Facilitator,
                "Pro-development but very strict on ESD and accessibility.",
            ),
            (
                "Merri-bek",
                CouncilCategory::Facilitator,
                "Formerly Moreland. High density support, strict ESD.",
            ),
            (
                "Bayside",
                CouncilCategory::Protector,
                "High scrutiny. Neighbourhood character is paramount. Expect objections.",
            ),
            (
                "Boroondara",
                CouncilCategory::Protector,
                "Very protective of heritage and character. Difficult for aggressive density.",
            ),
            (
                "Stonnington",
                CouncilCategory::Protector,
                "High land values, high scrutiny on design quality and setbacks.",
            ),
            (
                "Glen Eira",
                CouncilCategory::Neutral,
                "Balanced approach. Strict on transition zones.",
            ),
        ];

        let profiles = PROFILES
            .iter()
            .map(|(council, category, notes)| CouncilProfile {
                council: council.to_string(),
                category: *category,
                notes: notes.to_string(),
            })
            .collect();

        Self { profiles }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CouncilRegistryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a `council,category,notes` CSV export.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CouncilRegistryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut profiles = Vec::new();

        for row in csv_reader.deserialize::<CouncilRow>() {
            let row = row?;
            let category = CouncilCategory::parse(&row.category).ok_or_else(|| {
                CouncilRegistryError::UnknownCategory {
                    council: row.council.clone(),
                    category: row.category.clone(),
                }
            })?;
            profiles.push(CouncilProfile {
                council: row.council,
                category,
                notes: row.notes,
            });
        }

        Ok(Self { profiles })
    }

    /// Case-insensitive exact match on the council name.
    pub fn find(&self, council: &str) -> Option<&CouncilProfile> {
        let needle = council.to_lowercase();
        self.profiles
            .iter()
            .find(|profile| profile.council.to_lowercase() == needle)
    }

    pub fn profiles(&self) -> &[CouncilProfile] {
        &self.profiles
    }
}

impl Default for CouncilRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct CouncilRow {
    council: String,
    category: String,
    #[serde(default)]
    notes: String,
}
