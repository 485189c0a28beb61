//! Body-shape templates.
//!
//! A shape template turns a [`ColorScheme`] into a [`ShapeDescriptor`]: the gradient `defs` plus
//! the tail, body, fin and face fragments of one fish body plan, and the ellipse that anchors
//! pattern overlays. Templates are looked up by name through a [`ShapeRegistry`], which falls back
//! to the oval body for names it does not know.

use std::fmt;
use std::sync::Arc;

use crate::color::ids::{generate_id, sanitize_id};
use crate::color::scheme::{ColorScheme, Palette};
use crate::foundation::core::{PatternArea, ViewBox};
use crate::foundation::error::AquariumResult;
use crate::foundation::registry::Registry;

mod classic;
pub mod parts;
mod seahorse;
mod sleek;

/// Everything a shape contributes to a fish document.
///
/// Fragments are independent SVG snippets; the composer decides their z-order.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    /// Local coordinate space of the shape.
    pub view_box: ViewBox,
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
    /// Gradient definitions referenced by the fragments.
    pub defs: String,
    /// Tail fragment, drawn first.
    pub tail: Option<String>,
    /// Body fragment.
    pub body: String,
    /// Fin fragment, drawn above patterns.
    pub fins: Option<String>,
    /// Eyes, mouth and blush, drawn last.
    pub face: Option<String>,
    /// Ellipse that pattern overlays are fitted into.
    pub pattern_area: PatternArea,
}

/// Per-call options for a shape template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeOptions {
    /// Namespace for gradient ids. A random id is generated when unset.
    pub id: Option<String>,
}

impl ShapeOptions {
    /// Options with a fixed id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    pub(crate) fn resolve_id(&self, prefix: &str) -> String {
        match &self.id {
            Some(id) => sanitize_id(id),
            None => generate_id(prefix),
        }
    }
}

/// Generator for one body plan.
///
/// Implementations report failure through [`AquariumResult`]. A panic is caught by
/// [`FishRenderer::try_render`](crate::FishRenderer::try_render) and reported as a
/// generation error.
pub trait ShapeTemplate: Send + Sync {
    /// Build the shape for `colors`.
    fn generate(
        &self,
        colors: &ColorScheme,
        options: &ShapeOptions,
    ) -> AquariumResult<ShapeDescriptor>;
}

impl<F> ShapeTemplate for F
where
    F: Fn(&ColorScheme, &ShapeOptions) -> AquariumResult<ShapeDescriptor> + Send + Sync,
{
    fn generate(
        &self,
        colors: &ColorScheme,
        options: &ShapeOptions,
    ) -> AquariumResult<ShapeDescriptor> {
        self(colors, options)
    }
}

/// Built-in body plans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Standard fish body (clownfish, goldfish).
    Oval,
    /// Tall round body (angelfish, discus).
    Disc,
    /// Spherical body with front-facing eyes (pufferfish).
    Round,
    /// Long shark-like body.
    Streamlined,
    /// Upright curled body (seahorse).
    Unusual,
    /// Flattened diamond body (rays).
    Flat,
    /// Eel-like body.
    Elongated,
}

impl ShapeKind {
    /// Every built-in shape in registration order.
    pub const ALL: [ShapeKind; 7] = [
        Self::Oval,
        Self::Disc,
        Self::Round,
        Self::Streamlined,
        Self::Unusual,
        Self::Flat,
        Self::Elongated,
    ];

    /// Registry name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            Self::Oval => "oval",
            Self::Disc => "disc",
            Self::Round => "round",
            Self::Streamlined => "streamlined",
            Self::Unusual => "unusual",
            Self::Flat => "flat",
            Self::Elongated => "elongated",
        }
    }

    /// Look up a built-in by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// Colors used for channels the caller leaves unset.
    pub fn default_palette(self) -> Palette {
        match self {
            Self::Oval => classic::OVAL_PALETTE,
            Self::Disc => classic::DISC_PALETTE,
            Self::Round => classic::ROUND_PALETTE,
            Self::Streamlined => sleek::STREAMLINED_PALETTE,
            Self::Unusual => seahorse::UNUSUAL_PALETTE,
            Self::Flat => sleek::FLAT_PALETTE,
            Self::Elongated => sleek::ELONGATED_PALETTE,
        }
    }

    /// Generate this shape directly, bypassing any registry.
    pub fn generate(
        self,
        colors: &ColorScheme,
        options: &ShapeOptions,
    ) -> AquariumResult<ShapeDescriptor> {
        let palette = colors.resolve(self.default_palette())?;
        let id = options.resolve_id(self.name());
        Ok(match self {
            Self::Oval => classic::oval(palette, &id),
            Self::Disc => classic::disc(palette, &id),
            Self::Round => classic::round(palette, &id),
            Self::Streamlined => sleek::streamlined(palette, &id),
            Self::Unusual => seahorse::unusual(palette, &id),
            Self::Flat => sleek::flat(palette, &id),
            Self::Elongated => sleek::elongated(palette, &id),
        })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ShapeTemplate for ShapeKind {
    fn generate(
        &self,
        colors: &ColorScheme,
        options: &ShapeOptions,
    ) -> AquariumResult<ShapeDescriptor> {
        ShapeKind::generate(*self, colors, options)
    }
}

/// Name-keyed set of shape templates.
///
/// Registration order is preserved; registering an existing name replaces its template in place.
#[derive(Clone)]
pub struct ShapeRegistry {
    inner: Registry<dyn ShapeTemplate>,
}

impl ShapeRegistry {
    /// Registry holding the seven built-in shapes.
    pub fn new() -> Self {
        let mut inner: Registry<dyn ShapeTemplate> =
            Registry::new("shape", "oval", Arc::new(ShapeKind::Oval));
        for kind in ShapeKind::ALL {
            inner.insert(kind.name().to_owned(), Arc::new(kind));
        }
        Self { inner }
    }

    /// Add or replace the template registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, template: impl ShapeTemplate + 'static) {
        self.inner.insert(name.into(), Arc::new(template));
    }

    /// Template registered under `name`, or the oval template when the name is unknown.
    pub fn get(&self, name: &str) -> &dyn ShapeTemplate {
        self.inner.get_or_fallback(name)
    }

    /// Template registered under `name`; unknown names are an error.
    pub fn try_get(&self, name: &str) -> AquariumResult<&dyn ShapeTemplate> {
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

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("shapes", &self.available())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
