//! Render options.

/// Caller-supplied rendering constants.
///
/// These are fixed by the caller rather than inferred from the plan, which
/// keeps the output scale visually consistent across unrelated plans.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Pixels per abstract plan unit.
    pub px_per_unit: f64,
    /// Padding around each level's floor, in pixels.
    pub padding: f64,
    /// Vertical gap between stacked levels, in pixels.
    pub gap: f64,
    /// Target raster width for normalization; `None` keeps the vector size.
    pub raster_width: Option<u32>,
}

impl RenderOptions {
    /// Default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a pixels-per-unit scale.
    #[inline]
    #[must_use]
    pub fn with_px_per_unit(mut self, px_per_unit: f64) -> Self {
        self.px_per_unit = px_per_unit;
        self
    }

    /// With floor padding.
    #[inline]
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// With an inter-level gap.
    #[inline]
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// With a target raster width.
    #[inline]
    #[must_use]
    pub fn with_raster_width(mut self, width: u32) -> Self {
        self.raster_width = Some(width);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            px_per_unit: 18.0,
            padding: 24.0,
            gap: 48.0,
            raster_width: Some(1600),
        }
    }
}
