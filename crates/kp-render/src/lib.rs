//! Keyplan Vector Renderer
//!
//! Deterministic rendering of an accepted [`PlanSpecification`] into an SVG
//! document at a fixed pixels-per-unit scale. Identical specification and
//! options always produce byte-identical output (downstream consumers cache
//! and diff by content, and a repair cycle may render the same plan twice),
//! so there are no timestamps, no randomness and no locale-dependent
//! formatting anywhere in this crate.
//!
//! Text uses a font embedded into the document as a base64 `@font-face`,
//! because the raster step runs in an environment with no guaranteed system
//! fonts. The encoded CSS is computed once per process and shared read-only
//! across invocations; see [`embedded_font_css`].
//!
//! [`PlanSpecification`]: kp_geometry::PlanSpecification

mod font;
mod options;
mod svg;

pub use font::embedded_font_css;
pub use options::RenderOptions;
pub use svg::{render_plan_svg, RenderError};
