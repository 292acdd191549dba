use serde::{Deserialize, Serialize};

use crate::style::{Align, Style};

/// Text metrics and colors shared by every renderer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub text_color: String,
    pub text_size: f64,
    pub font_family: String,
    /// Glyph advance as a fraction of `text_size`.
    pub char_width_ratio: f64,
    /// Line pitch as a fraction of `text_size`.
    pub char_height_ratio: f64,
    pub text_opacity: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text_color: "#c9c9c9".to_string(),
            text_size: 0.8,
            font_family: "Trebuchet MS".to_string(),
            char_width_ratio: 0.4,
            char_height_ratio: 0.9,
            text_opacity: 0.8,
        }
    }
}

impl RenderConfig {
    pub fn char_width(&self) -> f64 {
        self.text_size * self.char_width_ratio
    }

    pub fn char_height(&self) -> f64 {
        self.text_size * self.char_height_ratio
    }

    /// Text style at `size` times the base size, keeping whatever `style` already sets.
    pub fn text_style(&self, size: f64, style: Style) -> Style {
        let defaults = Style::new()
            .with_color(&self.text_color)
            .with_align(Align::Left)
            .with_font(&format!("{} {}", size * self.text_size, self.font_family))
            .with_opacity(self.text_opacity);
        style.with_defaults(&defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let config = RenderConfig::default();
        assert!((config.char_width() - 0.32).abs() < 1e-10);
        assert!((config.char_height() - 0.72).abs() < 1e-10);
    }

    #[test]
    fn test_text_style_defaults() {
        let style = RenderConfig::default().text_style(1.0, Style::new());
        assert_eq!(style.color.as_deref(), Some("#c9c9c9"));
        assert_eq!(style.align, Some(Align::Left));
        assert_eq!(style.font.as_deref(), Some("0.8 Trebuchet MS"));
        assert_eq!(style.opacity, Some(0.8));
    }

    #[test]
    fn test_text_style_keeps_overrides() {
        let config = RenderConfig::default();
        let style = config.text_style(2.0, Style::new().with_align(Align::Center));
        assert_eq!(style.align, Some(Align::Center));
        assert_eq!(style.font.as_deref(), Some("1.6 Trebuchet MS"));
    }

    #[test]
    fn test_partial_json_config() {
        let config: RenderConfig = serde_json::from_str(r#"{"text_size": 1.0}"#).unwrap();
        assert!((config.char_height() - 0.9).abs() < 1e-10);
        assert_eq!(config.text_color, "#c9c9c9");
    }
}
