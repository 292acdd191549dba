use gridvis_core::{Canvas, RenderConfig, Style};

/// Turns overlay requests into primitive draw calls on a [`Canvas`].
///
/// The renderer holds no drawing state between calls; every operation opens
/// the surfaces it needs, draws, and lets them go.
#[derive(Debug, Clone)]
pub struct Renderer<C: Canvas> {
    canvas: C,
    config: RenderConfig,
}

impl<C: Canvas> Renderer<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, RenderConfig::default())
    }

    pub fn with_config(canvas: C, config: RenderConfig) -> Self {
        Self { canvas, config }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub(crate) fn surface(&self, region: Option<&str>) -> C::Surface {
        self.canvas.open(region)
    }

    pub(crate) fn char_width(&self) -> f64 {
        self.config.char_width()
    }

    pub(crate) fn char_height(&self) -> f64 {
        self.config.char_height()
    }

    /// Base-size text style with the configured defaults.
    pub(crate) fn text_style(&self) -> Style {
        self.config.text_style(1.0, Style::new())
    }
}
