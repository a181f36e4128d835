//! Facts module - structured values extracted from article prose

use std::fmt;

/// Final fallback for the achievement phrase
pub const DEFAULT_ACHIEVEMENT: &str = "Notable historical figure";

/// Birth year pulled out of article text
///
/// Either a validated year or the `Unknown` sentinel. There is no way to
/// hold an unvalidated regex capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthYear {
    /// A year that passed range validation
    Known(i32),

    /// No valid year could be found
    Unknown,
}

impl BirthYear {
    /// Sentinel text used when the year is not determinable
    pub const UNKNOWN: &'static str = "Unknown";

    /// Validate a raw capture against `[min, max]`
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::BirthYear;
    ///
    /// assert_eq!(BirthYear::parse_in_range("1643", 1000, 2025), BirthYear::Known(1643));
    /// assert_eq!(BirthYear::parse_in_range("9999", 1000, 2025), BirthYear::Unknown);
    /// assert_eq!(BirthYear::parse_in_range("abcd", 1000, 2025), BirthYear::Unknown);
    /// ```
    pub fn parse_in_range(raw: &str, min: i32, max: i32) -> Self {
        match raw.trim().parse::<i32>() {
            Ok(year) if (min..=max).contains(&year) => BirthYear::Known(year),
            _ => BirthYear::Unknown,
        }
    }

    /// Whether a year was found
    pub fn is_known(&self) -> bool {
        matches!(self, BirthYear::Known(_))
    }
}

impl Default for BirthYear {
    fn default() -> Self {
        BirthYear::Unknown
    }
}

impl fmt::Display for BirthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthYear::Known(year) => write!(f, "{}", year),
            BirthYear::Unknown => f.write_str(Self::UNKNOWN),
        }
    }
}

/// Topical bucket a person is filed under
///
/// The declaration order is the classification precedence: when text
/// mentions keywords from several buckets, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Heads of state, legislators, diplomats
    Politics,
    /// Natural and formal sciences
    Science,
    /// Writers and poets
    Literature,
    /// Visual arts and architecture
    Arts,
    /// Film, stage and television
    Entertainment,
    /// Composers and performers
    Music,
    /// Inventors, engineers, founders
    Technology,
    /// Reformers and campaigners
    Activism,
    /// Default when no bucket matches
    NotableFigure,
}

impl Field {
    /// All matchable buckets in precedence order (excludes the default)
    pub const ORDERED: [Field; 8] = [
        Field::Politics,
        Field::Science,
        Field::Literature,
        Field::Arts,
        Field::Entertainment,
        Field::Music,
        Field::Technology,
        Field::Activism,
    ];

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Politics => "Politics & Government",
            Field::Science => "Science & Research",
            Field::Literature => "Literature & Writing",
            Field::Arts => "Arts & Culture",
            Field::Entertainment => "Entertainment",
            Field::Music => "Music",
            Field::Technology => "Innovation & Technology",
            Field::Activism => "Activism & Social Change",
            Field::NotableFigure => "Notable Figure",
        }
    }

    /// Parse a field from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Field::ORDERED
            .iter()
            .chain(std::iter::once(&Field::NotableFigure))
            .find(|f| f.as_str().to_lowercase() == wanted)
            .copied()
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::NotableFigure
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid field: {}", s))
    }
}

/// Structured facts extracted from one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFacts {
    /// Validated birth year or the `Unknown` sentinel
    pub birth_year: BirthYear,

    /// Short achievement phrase (never empty)
    pub achievement: String,

    /// Topical bucket
    pub field: Field,
}

impl Default for PersonFacts {
    fn default() -> Self {
        Self {
            birth_year: BirthYear::Unknown,
            achievement: DEFAULT_ACHIEVEMENT.to_string(),
            field: Field::NotableFigure,
        }
    }
}
