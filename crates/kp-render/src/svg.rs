//! SVG document assembly.

use crate::font::embedded_font_css;
use crate::options::RenderOptions;
use kp_geometry::PlanSpecification;

/// Vertical space reserved above each floor for its header line.
const HEADER_SPACE: f64 = 36.0;
/// Header text baseline, relative to the level's top edge.
const HEADER_BASELINE: f64 = 24.0;
/// Floor border offset below the header baseline.
const FLOOR_TOP_OFFSET: f64 = 20.0;

/// Room label sizing: `clamp(10, 16, min(w_px, h_px) * 0.18)`.
const LABEL_SCALE: f64 = 0.18;
const LABEL_MIN_PX: f64 = 10.0;
const LABEL_MAX_PX: f64 = 16.0;

/// Renderer failure.
///
/// The validator rejects malformed specifications before they get here, so
/// any of these surfacing means the pipeline was sequenced wrongly: a
/// programming fault, not a user input error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The specification has no levels to draw.
    #[error("plan specification has no levels to render")]
    EmptyPlan,
}

/// Render a plan into an SVG document string.
///
/// Levels stack top to bottom in array order, each preceded by a "Level N"
/// header; rooms draw as bordered rectangles with centered, auto-scaled
/// labels. Output is byte-identical for identical input; the renderer never
/// consults the clock, a RNG or the locale.
///
/// # Errors
///
/// [`RenderError::EmptyPlan`] when the specification has no levels; the
/// renderer never silently emits a partial document.
pub fn render_plan_svg(
    spec: &PlanSpecification,
    opts: &RenderOptions,
) -> Result<String, RenderError> {
    if spec.levels.is_empty() {
        return Err(RenderError::EmptyPlan);
    }

    let ppu = opts.px_per_unit;
    let pad = opts.padding;

    let mut y_offset = 0.0_f64;
    let mut svg_width = 0.0_f64;
    let mut groups = Vec::with_capacity(spec.levels.len());

    for level in &spec.levels {
        let floor_px_w = units(level.width) * ppu;
        let floor_px_h = units(level.height) * ppu;

        let level_w = pad * 2.0 + floor_px_w;
        let level_h = pad * 2.0 + floor_px_h + HEADER_SPACE;
        svg_width = svg_width.max(level_w);

        let header_y = y_offset + HEADER_BASELINE;
        let floor_top_y = y_offset + pad + FLOOR_TOP_OFFSET;

        let mut group = String::from("<g>\n");
        group.push_str(&format!(
            "<text x=\"{pad}\" y=\"{header_y}\" class=\"kp-text kp-header\">Level {}</text>\n",
            level.level
        ));
        group.push_str(&format!(
            "<rect x=\"{pad}\" y=\"{floor_top_y}\" width=\"{floor_px_w}\" height=\"{floor_px_h}\" fill=\"white\" stroke=\"black\" stroke-width=\"4\"/>\n"
        ));

        for room in &level.rooms {
            let x = pad + units(room.x) * ppu;
            let y = floor_top_y + units(room.y) * ppu;
            let w = units(room.w) * ppu;
            let h = units(room.h) * ppu;

            let font_size = (w.min(h) * LABEL_SCALE).clamp(LABEL_MIN_PX, LABEL_MAX_PX);
            let label = escape_xml(room.display_label());

            group.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"white\" stroke=\"black\" stroke-width=\"2\"/>\n"
            ));
            group.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" class=\"kp-text\" font-size=\"{font_size}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{label}</text>\n",
                x + w / 2.0,
                y + h / 2.0,
            ));
        }

        group.push_str("</g>");
        groups.push(group);

        y_offset += level_h + opts.gap;
    }

    let svg_height = y_offset;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{svg_width}\" height=\"{svg_height}\" viewBox=\"0 0 {svg_width} {svg_height}\">\n"
    ));
    svg.push_str("<style>\n");
    svg.push_str(embedded_font_css());
    svg.push_str("\n.kp-text { font-family: \"KeyplanSans\", sans-serif; fill: #111; }\n");
    svg.push_str(".kp-header { font-size: 18px; font-weight: 700; }\n");
    svg.push_str("</style>\n");
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{svg_width}\" height=\"{svg_height}\" fill=\"white\"/>\n"
    ));
    svg.push_str(&groups.join("\n"));
    svg.push_str("\n</svg>");

    Ok(svg)
}

/// Treat non-finite plan values as zero-extent rather than poisoning pixel
/// arithmetic; the validator has already reported them.
#[inline]
fn units(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
