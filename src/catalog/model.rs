use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::scheme::ColorScheme;

/// Water a species lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    /// Marine species; the only water type the tank displays by default.
    #[default]
    Saltwater,
    /// Freshwater species.
    Freshwater,
    /// Brackish-water species.
    Brackish,
}

impl WaterType {
    /// Lowercase name used in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saltwater => "saltwater",
            Self::Freshwater => "freshwater",
            Self::Brackish => "brackish",
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight index entry used by the selection engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishSummary {
    /// Catalog id.
    pub id: String,
    /// Shape tag (`oval`, `disc`, ...).
    pub body_shape: String,
    /// Primary color, compared verbatim for diversity.
    pub primary_color: String,
    /// Water type.
    pub water_type: WaterType,
    /// Habitat tag (`reef`, `lagoon`, ...).
    #[serde(default)]
    pub habitat: String,
}

/// How a fish is drawn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Shape template name; `oval` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_shape: Option<String>,
    /// Pattern template name; `solid` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Per-pattern overrides forwarded to the pattern template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_options: Option<serde_json::Value>,
}

/// One educational fact about a species.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    /// Fact text.
    pub text: String,
    /// Key into the sources map.
    pub source_id: String,
}

/// Short species profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Diet description.
    #[serde(default)]
    pub diet: String,
    /// Adult size.
    #[serde(default)]
    pub size: String,
    /// Typical lifespan.
    #[serde(default)]
    pub lifespan: String,
}

/// Citation for facts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Display name.
    pub name: String,
    /// Link target.
    pub url: String,
}

impl Source {
    /// Placeholder used when a fact cites an unknown source.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_owned(),
            url: "#".to_owned(),
        }
    }
}

/// Full catalog record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishRecord {
    /// Catalog id.
    pub id: String,
    /// Common name.
    #[serde(default)]
    pub name: String,
    /// Latin name.
    #[serde(default)]
    pub scientific_name: String,
    /// Static image used when the fish cannot be drawn from templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Shape and pattern selection.
    #[serde(default)]
    pub appearance: Appearance,
    /// Body colors.
    #[serde(default)]
    pub colors: ColorScheme,
    /// Facts shown on click.
    #[serde(default)]
    pub facts: Vec<Fact>,
    /// Species profile.
    #[serde(default)]
    pub profile: Profile,
    /// Water type, when the record carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_type: Option<WaterType>,
    /// Habitat, when the record carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
}

impl FishRecord {
    /// Minimal record with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Shape name, defaulting to `oval`.
    pub fn body_shape(&self) -> &str {
        self.appearance.body_shape.as_deref().unwrap_or("oval")
    }

    /// Pattern name, defaulting to `solid`.
    pub fn pattern(&self) -> &str {
        self.appearance.pattern.as_deref().unwrap_or("solid")
    }

    /// Index entry derived from this record.
    ///
    /// Records without a water type count as saltwater; a missing primary color is recorded as
    /// the composer default so diversity still compares something meaningful.
    pub fn summary(&self) -> FishSummary {
        FishSummary {
            id: self.id.clone(),
            body_shape: self.body_shape().to_owned(),
            primary_color: self
                .colors
                .primary
                .clone()
                .unwrap_or_else(|| "#FF6B35".to_owned()),
            water_type: self.water_type.unwrap_or_default(),
            habitat: self.habitat.clone().unwrap_or_default(),
        }
    }
}
