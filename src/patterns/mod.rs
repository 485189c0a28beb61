//! Pattern overlays drawn on top of a fish body.
//!
//! A pattern template receives the fish colors and the shape's pattern area and returns markup
//! fitted into that ellipse. Feature placement is a pure function of the feature index (fixed
//! spacing or trigonometric scatter), so a fish renders identically on every run.

use std::fmt;
use std::sync::Arc;

use crate::color::hex::Rgb;
use crate::color::ids::{generate_id, sanitize_id};
use crate::color::scheme::ColorScheme;
use crate::foundation::core::PatternArea;
use crate::foundation::error::{AquariumError, AquariumResult};
use crate::foundation::registry::Registry;

mod linear;
mod marks;
mod regions;
mod spots;
mod washes;

/// Upper bound on repeated features (stripes, spots, ...) a single pattern may draw.
pub const MAX_FEATURES: usize = 64;

/// Output of a pattern template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternResult {
    /// Markup that needs no auxiliary definitions.
    Bare(String),
    /// Markup plus gradients or clip paths for the document's `<defs>`.
    WithDefs {
        /// Definitions to merge into `<defs>`.
        defs: String,
        /// Overlay markup.
        elements: String,
    },
}

impl PatternResult {
    /// Overlay markup.
    pub fn elements(&self) -> &str {
        match self {
            Self::Bare(elements) | Self::WithDefs { elements, .. } => elements,
        }
    }

    /// Auxiliary definitions (empty for [`PatternResult::Bare`]).
    pub fn defs(&self) -> &str {
        match self {
            Self::Bare(_) => "",
            Self::WithDefs { defs, .. } => defs,
        }
    }

    /// Split into `(defs, elements)`.
    pub fn into_parts(self) -> (String, String) {
        match self {
            Self::Bare(elements) => (String::new(), elements),
            Self::WithDefs { defs, elements } => (defs, elements),
        }
    }
}

/// Per-call options for a pattern template.
///
/// `params` holds per-pattern overrides keyed by their camelCase names (`stripeCount`, `opacity`,
/// `withBorder`, ...). `null` means "all defaults".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternOptions {
    /// Namespace for definition ids. A random id is generated when unset.
    pub id: Option<String>,
    /// JSON object of overrides.
    pub params: serde_json::Value,
}

impl PatternOptions {
    /// Options with a fixed id and default parameters.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            params: serde_json::Value::Null,
        }
    }

    /// Replace the parameter overrides.
    pub fn params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }

    pub(crate) fn resolve_id(&self, prefix: &str) -> String {
        match &self.id {
            Some(id) => sanitize_id(id),
            None => generate_id(prefix),
        }
    }

    fn param(&self, key: &str) -> AquariumResult<Option<&serde_json::Value>> {
        match &self.params {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) => Ok(map.get(key).filter(|v| !v.is_null())),
            _ => Err(AquariumError::generation(
                "pattern params must be a JSON object",
            )),
        }
    }

    pub(crate) fn f64_or(&self, key: &str, default: f64) -> AquariumResult<f64> {
        match self.param(key)? {
            None => Ok(default),
            Some(v) => v
                .as_f64()
                .filter(|f| f.is_finite())
                .ok_or_else(|| AquariumError::generation(format!("{key} must be a finite number"))),
        }
    }

    /// Feature counts are clamped to [`MAX_FEATURES`].
    pub(crate) fn count_or(&self, key: &str, default: usize) -> AquariumResult<usize> {
        match self.param(key)? {
            None => Ok(default.min(MAX_FEATURES)),
            Some(v) => {
                let n = v.as_u64().ok_or_else(|| {
                    AquariumError::generation(format!("{key} must be a non-negative integer"))
                })?;
                Ok(usize::try_from(n).unwrap_or(usize::MAX).min(MAX_FEATURES))
            }
        }
    }

    pub(crate) fn bool_or(&self, key: &str, default: bool) -> AquariumResult<bool> {
        match self.param(key)? {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| AquariumError::generation(format!("{key} must be a boolean"))),
        }
    }

    pub(crate) fn color_or(&self, key: &str, default: Rgb) -> AquariumResult<Rgb> {
        match self.param(key)? {
            None => Ok(default),
            Some(v) => {
                let s = v.as_str().ok_or_else(|| {
                    AquariumError::generation(format!("{key} must be a color string"))
                })?;
                Rgb::parse(s)
            }
        }
    }
}

/// Generator for one overlay style.
///
/// Implementations report failure through [`AquariumResult`]. A panic is caught by
/// [`FishRenderer::try_render`](crate::FishRenderer::try_render) and reported as a
/// generation error.
pub trait PatternTemplate: Send + Sync {
    /// Build the overlay for `area`.
    fn generate(
        &self,
        colors: &ColorScheme,
        area: PatternArea,
        options: &PatternOptions,
    ) -> AquariumResult<PatternResult>;
}

impl<F> PatternTemplate for F
where
    F: Fn(&ColorScheme, PatternArea, &PatternOptions) -> AquariumResult<PatternResult>
        + Send
        + Sync,
{
    fn generate(
        &self,
        colors: &ColorScheme,
        area: PatternArea,
        options: &PatternOptions,
    ) -> AquariumResult<PatternResult> {
        self(colors, area, options)
    }
}

type PatternFn = fn(&ColorScheme, PatternArea, &PatternOptions) -> AquariumResult<PatternResult>;

const BUILTINS: [(&str, PatternFn); 45] = [
    ("solid", washes::solid),
    ("striped", linear::striped),
    ("gradient", washes::gradient),
    ("spotted", spots::spotted),
    ("banded", linear::banded),
    ("mottled", spots::mottled),
    ("swirled", marks::swirled),
    ("bicolor", regions::bicolor),
    ("half-dark", regions::half_dark),
    ("capped", regions::capped),
    ("masked", regions::masked),
    ("saddled", regions::saddled),
    ("girdled", regions::girdled),
    ("keyhole", regions::keyhole),
    ("barred", linear::barred),
    ("lined", linear::lined),
    ("chevron", linear::chevron),
    ("scaled", spots::scaled),
    ("pearlscale", spots::pearlscale),
    ("teardrop", spots::teardrop),
    ("leopard", spots::leopard),
    ("snowflake", spots::snowflake),
    ("cosmic", spots::cosmic),
    ("eyespot", spots::eyespot),
    ("target", spots::target),
    ("mimic", spots::mimic),
    ("velvet", washes::velvet),
    ("nearly-solid", washes::nearly_solid),
    ("mostly-white", washes::mostly_white),
    ("multicolor", washes::multicolor),
    ("marbled", marks::marbled),
    ("stormy", marks::stormy),
    ("flurry", marks::flurry),
    ("scribbled", marks::scribbled),
    ("flame", marks::flame),
    ("ringed", marks::ringed),
    ("filaments", marks::filaments),
    ("crowned", marks::crowned),
    ("fanged", marks::fanged),
    ("angular", marks::angular),
    ("sail", marks::sail),
    ("pyramid", marks::pyramid),
    ("crosshatch", linear::crosshatch),
    ("incomplete-bands", linear::incomplete_bands),
    ("marked", marks::marked),
];

/// Names of the built-in patterns in registration order.
pub fn builtin_patterns() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Name-keyed set of pattern templates; unknown names fall back to `solid`.
#[derive(Clone)]
pub struct PatternRegistry {
    inner: Registry<dyn PatternTemplate>,
}

impl PatternRegistry {
    /// Registry holding every built-in pattern.
    pub fn new() -> Self {
        let mut inner: Registry<dyn PatternTemplate> =
            Registry::new("pattern", "solid", Arc::new(washes::solid as PatternFn));
        for (name, f) in BUILTINS {
            inner.insert(name.to_owned(), Arc::new(f));
        }
        Self { inner }
    }

    /// Add or replace the template registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, template: impl PatternTemplate + 'static) {
        self.inner.insert(name.into(), Arc::new(template));
    }

    /// Template registered under `name`, or `solid` when the name is unknown.
    pub fn get(&self, name: &str) -> &dyn PatternTemplate {
        self.inner.get_or_fallback(name)
    }

    /// Template registered under `name`; unknown names are an error.
    pub fn try_get(&self, name: &str) -> AquariumResult<&dyn PatternTemplate> {
        self.inner.try_get(name)
    }

    /// Return `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.lookup(name).is_some()
    }

    /// Registered names in registration order.
    pub fn available(&self) -> Vec<&str> {
        self.inner.names()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("patterns", &self.available())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/mod.rs"]
mod tests;
