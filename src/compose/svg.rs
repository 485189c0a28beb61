use std::fmt::Write as _;
use std::sync::OnceLock;

use crate::catalog::FishRecord;
use crate::color::ids::{generate_id, sanitize_id};
use crate::color::scheme::ColorScheme;
use crate::foundation::error::{AquariumError, AquariumResult};
use crate::foundation::math::Num;
use crate::patterns::{PatternOptions, PatternRegistry};
use crate::shapes::{ShapeOptions, ShapeRegistry};

const DEFAULT_PRIMARY: &str = "#FF6B35";
const DEFAULT_SECONDARY: &str = "#FFFFFF";
const DEFAULT_ACCENT: &str = "#000000";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Composes fish documents from a shape registry and a pattern registry.
#[derive(Debug, Default)]
pub struct FishRenderer {
    shapes: ShapeRegistry,
    patterns: PatternRegistry,
}

impl FishRenderer {
    /// Renderer over custom registries.
    pub fn new(shapes: ShapeRegistry, patterns: PatternRegistry) -> Self {
        Self { shapes, patterns }
    }

    /// Shape templates in use.
    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    /// Mutable access for registering extra shapes.
    pub fn shapes_mut(&mut self) -> &mut ShapeRegistry {
        &mut self.shapes
    }

    /// Pattern templates in use.
    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    /// Mutable access for registering extra patterns.
    pub fn patterns_mut(&mut self) -> &mut PatternRegistry {
        &mut self.patterns
    }

    /// Return `true` when the record's body shape has a registered template.
    pub fn can_use_template(&self, record: &FishRecord) -> bool {
        self.shapes.contains(record.body_shape())
    }

    /// Render `record` with a fresh random id, falling back to an `<img>` on failure.
    pub fn render(&self, record: &FishRecord) -> String {
        let id = generate_id(if record.id.is_empty() {
            "fish"
        } else {
            &record.id
        });
        self.render_or_fallback(record, &id)
    }

    /// Render `record` with definitions namespaced under `id`.
    ///
    /// Output is a pure function of the record and `id`.
    pub fn render_with_id(&self, record: &FishRecord, id: &str) -> String {
        self.render_or_fallback(record, &sanitize_id(id))
    }

    /// Render `record` and report failures instead of falling back.
    ///
    /// A panicking template is reported as [`AquariumError::Generation`].
    pub fn try_render(&self, record: &FishRecord, id: &str) -> AquariumResult<String> {
        let id = sanitize_id(id);
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.compose(record, &id)))
            .unwrap_or_else(|_| {
                Err(AquariumError::generation(format!(
                    "template panicked while rendering {}",
                    record.id
                )))
            })
    }

    fn compose(&self, record: &FishRecord, id: &str) -> AquariumResult<String> {
        let colors = with_default_colors(&record.colors);

        let shape = self
            .shapes
            .get(record.body_shape())
            .generate(&colors, &ShapeOptions::with_id(id))?;

        let options = PatternOptions::with_id(id).params(
            record
                .appearance
                .pattern_options
                .clone()
                .unwrap_or(serde_json::Value::Null),
        );
        let (pattern_defs, pattern) = self
            .patterns
            .get(record.pattern())
            .generate(&colors, shape.pattern_area, &options)?
            .into_parts();

        let mut out = String::with_capacity(
            shape.defs.len() + shape.body.len() + pattern_defs.len() + pattern.len() + 512,
        );
        let write = |out: &mut String| -> std::fmt::Result {
            writeln!(
                out,
                r#"<svg xmlns="{SVG_NS}" viewBox="{}" width="{}" height="{}">"#,
                shape.view_box,
                Num(shape.width),
                Num(shape.height)
            )?;
            writeln!(out, "  <defs>{}{pattern_defs}</defs>", shape.defs)?;
            writeln!(
                out,
                r#"  <g id="{id}-fish">{}{}{pattern}{}{}</g>"#,
                shape.tail.as_deref().unwrap_or_default(),
                shape.body,
                shape.fins.as_deref().unwrap_or_default(),
                shape.face.as_deref().unwrap_or_default(),
            )?;
            write!(out, "</svg>")
        };
        write(&mut out)
            .map_err(|e| AquariumError::generation(format!("assemble fish document: {e}")))?;
        Ok(out)
    }

    fn render_or_fallback(&self, record: &FishRecord, id: &str) -> String {
        match self.try_render(record, id) {
            Ok(svg) => svg,
            Err(e) => {
                tracing::error!(
                    fish = %record.id,
                    error = %e,
                    "fish generation failed, using static image"
                );
                fallback_image(record)
            }
        }
    }
}

/// `<img>` markup pointing at the record's static sprite.
pub fn fallback_image(record: &FishRecord) -> String {
    let src = match &record.image {
        Some(image) if !image.is_empty() => image.clone(),
        _ => format!("assets/fish/{}.svg", record.id),
    };
    let alt = if record.name.is_empty() {
        "Fish"
    } else {
        record.name.as_str()
    };
    format!(
        r#"<img src="{}" alt="{}" class="fish__sprite"/>"#,
        escape_attr(&src),
        escape_attr(alt)
    )
}

/// Render `record` with the built-in templates.
pub fn generate_fish_svg(record: &FishRecord) -> String {
    static RENDERER: OnceLock<FishRenderer> = OnceLock::new();
    RENDERER.get_or_init(FishRenderer::default).render(record)
}

fn with_default_colors(colors: &ColorScheme) -> ColorScheme {
    let pick = |c: &Option<String>, default: &str| match c {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_owned(),
    };
    ColorScheme::new(
        pick(&colors.primary, DEFAULT_PRIMARY),
        pick(&colors.secondary, DEFAULT_SECONDARY),
        pick(&colors.accent, DEFAULT_ACCENT),
    )
}

pub(crate) fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
