use crate::color::hex::Rgb;
use crate::foundation::error::AquariumResult;

/// Three-channel color assignment carried by a fish record.
///
/// Every channel is optional; the consumer supplies its own defaults through [`Palette`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorScheme {
    /// Dominant body color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Belly and highlight color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Eye and marking color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ColorScheme {
    /// Scheme with all three channels set.
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: Some(primary.into()),
            secondary: Some(secondary.into()),
            accent: Some(accent.into()),
        }
    }

    /// Parse every channel, substituting `defaults` for channels that are unset.
    pub fn resolve(&self, defaults: Palette) -> AquariumResult<Palette> {
        Ok(Palette {
            primary: self.primary_or(defaults.primary)?,
            secondary: self.secondary_or(defaults.secondary)?,
            accent: self.accent_or(defaults.accent)?,
        })
    }

    pub(crate) fn primary_or(&self, fallback: Rgb) -> AquariumResult<Rgb> {
        channel(self.primary.as_deref(), fallback)
    }

    pub(crate) fn secondary_or(&self, fallback: Rgb) -> AquariumResult<Rgb> {
        channel(self.secondary.as_deref(), fallback)
    }

    pub(crate) fn accent_or(&self, fallback: Rgb) -> AquariumResult<Rgb> {
        channel(self.accent.as_deref(), fallback)
    }
}

fn channel(value: Option<&str>, fallback: Rgb) -> AquariumResult<Rgb> {
    value.map_or(Ok(fallback), Rgb::parse)
}

/// Fully resolved colors used while drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Dominant body color.
    pub primary: Rgb,
    /// Belly and highlight color.
    pub secondary: Rgb,
    /// Eye and marking color.
    pub accent: Rgb,
}

impl Palette {
    /// Build a palette from three colors.
    pub const fn new(primary: Rgb, secondary: Rgb, accent: Rgb) -> Self {
        Self {
            primary,
            secondary,
            accent,
        }
    }
}

impl From<Palette> for ColorScheme {
    fn from(p: Palette) -> Self {
        Self::new(
            p.primary.to_string(),
            p.secondary.to_string(),
            p.accent.to_string(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/scheme.rs"]
mod tests;
