//! Embedded font resource.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;

/// DejaVu Sans, compiled into the binary so the raster environment never
/// needs system fonts.
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Base64 `@font-face` CSS, computed on first use and immutable afterwards.
/// Safe to share across concurrent renders; a cold-start race at worst
/// encodes the same bytes redundantly.
static FONT_CSS: Lazy<String> = Lazy::new(|| {
    let encoded = STANDARD.encode(FONT_DATA);
    format!(
        "@font-face {{\n  font-family: \"KeyplanSans\";\n  src: url(\"data:font/ttf;base64,{encoded}\") format(\"truetype\");\n  font-weight: 400;\n  font-style: normal;\n}}"
    )
});

/// The `@font-face` rule embedding the document font.
///
/// Process-lifetime cache: the first call pays the base64 encoding, every
/// later call returns the same string.
#[must_use]
pub fn embedded_font_css() -> &'static str {
    FONT_CSS.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_declares_the_embedded_family() {
        let css = embedded_font_css();
        assert!(css.starts_with("@font-face"));
        assert!(css.contains("KeyplanSans"));
        assert!(css.contains("data:font/ttf;base64,"));
    }

    #[test]
    fn css_is_cached() {
        let a = embedded_font_css();
        let b = embedded_font_css();
        assert!(std::ptr::eq(a, b));
    }
}
