//! User requirements and boundary normalization.
//!
//! Survey answers arrive as loosely-typed free text ("2 Story", "3 Bed").
//! They are normalized exactly once, at the system boundary, into the
//! strongly-typed [`Requirements`] the validator and pipeline consume; the
//! core never re-parses free text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FIRST_INT: Lazy<Regex> = Lazy::new(|| {
    // Hard-coded pattern; compilation cannot fail.
    Regex::new(r"\d+").expect("literal digit pattern")
});

/// A count that may arrive as a number or as free text ("3 Bed").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountText {
    /// Already numeric.
    Number(u32),
    /// Free text; the first run of digits is the count.
    Text(String),
}

impl CountText {
    /// Extract the count: the number itself, or the first integer found in
    /// the text.
    #[must_use]
    pub fn first_int(&self) -> Option<u32> {
        match self {
            CountText::Number(n) => Some(*n),
            CountText::Text(text) => FIRST_INT
                .find(text)
                .and_then(|m| m.as_str().parse().ok()),
        }
    }
}

impl From<&str> for CountText {
    fn from(text: &str) -> Self {
        CountText::Text(text.to_string())
    }
}

impl From<u32> for CountText {
    fn from(n: u32) -> Self {
        CountText::Number(n)
    }
}

/// Survey requirements as received from upstream glue, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRequirements {
    /// Story count, e.g. `2` or `"2 Story"`.
    pub stories: Option<CountText>,
    /// Bedroom count, e.g. `3` or `"3 Bed"`.
    pub bedrooms: Option<CountText>,
    /// Bathroom count, e.g. `2` or `"2 Bath"`.
    pub bathrooms: Option<CountText>,
    /// Requested total area, if any.
    pub total_area: Option<f64>,
    /// Free-text feature list, e.g. `"garage, office"`.
    pub features: Option<String>,
}

/// Normalized, strongly-typed requirements: the core's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    /// Story count, 1 or 2.
    pub stories: u8,
    /// Requested bedroom count; 0 means unconstrained.
    pub bedrooms: u32,
    /// Requested bathroom count; 0 means unconstrained.
    pub bathrooms: u32,
    /// Requested total area, if any.
    pub total_area: Option<f64>,
    /// Lowercased feature list for keyword matching.
    pub features: String,
}

impl Requirements {
    /// Construct requirements directly (stories clamps to 1..=2).
    #[must_use]
    pub fn new(stories: u8, bedrooms: u32, bathrooms: u32) -> Self {
        Self {
            stories: stories.clamp(1, 2),
            bedrooms,
            bathrooms,
            total_area: None,
            features: String::new(),
        }
    }

    /// With a feature list (lowercased for matching).
    #[inline]
    #[must_use]
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into().to_lowercase();
        self
    }

    /// With a total area.
    #[inline]
    #[must_use]
    pub fn with_total_area(mut self, area: f64) -> Self {
        self.total_area = Some(area);
        self
    }

    /// Normalize raw survey answers.
    ///
    /// The first integer found in each free-text field is the count;
    /// absent fields default to 1 story / 0 beds / 0 baths. Stories clamps
    /// to the supported 1..=2 range.
    #[must_use]
    pub fn from_raw(raw: &RawRequirements) -> Self {
        let stories = raw
            .stories
            .as_ref()
            .and_then(CountText::first_int)
            .unwrap_or(1);

        Self {
            stories: if stories >= 2 { 2 } else { 1 },
            bedrooms: raw
                .bedrooms
                .as_ref()
                .and_then(CountText::first_int)
                .unwrap_or(0),
            bathrooms: raw
                .bathrooms
                .as_ref()
                .and_then(CountText::first_int)
                .unwrap_or(0),
            total_area: raw.total_area,
            features: raw
                .features
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
        }
    }

    /// True when the lowercased feature list mentions `keyword`.
    #[must_use]
    pub fn mentions_feature(&self, keyword: &str) -> bool {
        self.features.contains(keyword)
    }
}
