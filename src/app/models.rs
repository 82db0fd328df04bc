//! Data models for upstream roster records
//!
//! SWAPI encodes numeric attributes as strings (`"172"`, `"1,358"`) and uses
//! placeholders such as `"unknown"` for missing values. The models here decode
//! that wire shape into plain numbers and serialize them back as strings.

use serde::{Deserialize, Serialize};

/// A single character record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Height in centimeters (0 if unknown)
    #[serde(default, with = "numeric_string")]
    pub height: f64,
    /// Mass in kilograms (0 if unknown)
    #[serde(default, with = "numeric_string")]
    pub mass: f64,
    /// Birth year, `"<years>BBY"` or `"<years>ABY"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
}

impl Character {
    /// Create a character with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set height in centimeters
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height = height_cm;
        self
    }

    /// Set mass in kilograms
    pub fn with_mass(mut self, mass_kg: f64) -> Self {
        self.mass = mass_kg;
        self
    }

    /// Set the raw birth year string
    pub fn with_birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = Some(birth_year.into());
        self
    }
}

/// One page of the people collection as returned by the upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeopleResponse {
    /// Total number of characters across all pages (page 1 only)
    #[serde(default)]
    pub count: Option<u64>,
    /// Continuation URL of the following page
    #[serde(default)]
    pub next: Option<String>,
    /// Characters on this page
    pub results: Vec<Character>,
}

impl PeopleResponse {
    /// Continuation URL, treating an empty string as absent
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.trim().is_empty())
    }

    /// Number of characters on this page
    pub fn page_size(&self) -> usize {
        self.results.len()
    }
}

/// Serde adapter for numbers carried as strings
mod numeric_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(number)) => number,
            Some(Raw::Text(text)) => parse_text(&text),
            None => 0.0,
        };
        Ok(value)
    }

    /// Placeholders ("unknown", "n/a") decode as absent
    fn parse_text(text: &str) -> f64 {
        let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }
}
