//! Text panels: framed sections, info panels, bar graphs, tables.

use serde::{Deserialize, Serialize};

use gridvis_core::{Align, Anchor, Canvas, Style, Surface};

use crate::renderer::Renderer;

/// Horizontal gap between table columns, in characters.
const COLUMN_PADDING: usize = 4;
/// Vertical gap left under an info panel.
const PANEL_SPACING: f64 = 0.5;
/// Left inset of section titles and content.
const SECTION_INSET: f64 = 0.25;

/// Body of an info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelContent {
    Lines(Vec<String>),
    Table(Vec<Vec<String>>),
}

impl PanelContent {
    pub fn len(&self) -> usize {
        match self {
            PanelContent::Lines(lines) => lines.len(),
            PanelContent::Table(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Value shown by a bar graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    /// A ratio, nominally in `[0, 1]`.
    Percent(f64),
    /// Numerator and denominator.
    Fraction(f64, f64),
}

impl Progress {
    pub fn percent(&self) -> f64 {
        match *self {
            Progress::Percent(p) => p,
            Progress::Fraction(num, den) => num / den,
        }
    }
}

/// Size and label formatting of a bar graph.
#[derive(Clone, Copy)]
pub struct BarGraph<'a> {
    pub width: f64,
    pub scale: f64,
    pub format: Option<&'a dyn Fn(f64) -> String>,
}

impl Default for BarGraph<'_> {
    fn default() -> Self {
        Self {
            width: 7.0,
            scale: 1.0,
            format: None,
        }
    }
}

impl<'a> BarGraph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_format(mut self, format: &'a dyn Fn(f64) -> String) -> Self {
        self.format = Some(format);
        self
    }

    fn label(&self, progress: Progress) -> String {
        match (progress, self.format) {
            (Progress::Percent(p), Some(fmt)) => fmt(p),
            (Progress::Percent(p), None) => format!("{}%", (100.0 * p + 0.5).floor()),
            (Progress::Fraction(num, den), Some(fmt)) => format!("{}/{}", fmt(num), fmt(den)),
            (Progress::Fraction(num, den), None) => format!("{}/{}", num, den),
        }
    }
}

/// Widest cell per column, in characters. The last cell of each row is left
/// unmeasured since nothing is placed after it.
pub fn column_widths<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<usize> {
    let mut widths = vec![0; rows.first().map_or(0, Vec::len)];
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(row.len().saturating_sub(1)) {
            if i >= widths.len() {
                widths.resize(i + 1, 0);
            }
            widths[i] = widths[i].max(cell.as_ref().chars().count());
        }
    }
    widths
}

impl<C: Canvas> Renderer<C> {
    /// Titled frame of `width` × `height` below a header strip at `pos`.
    /// Returns where the section's content starts.
    pub fn draw_section(&self, title: &str, pos: &Anchor, width: f64, height: f64) -> Anchor {
        let ch = self.char_height();
        let mut surface = self.surface(pos.region());
        surface.rect(pos.x, pos.y - ch, width, 1.1 * ch, &Style::new().with_opacity(0.15));
        surface.frame(
            pos.x,
            pos.y - ch,
            width,
            height + (1.1 + 0.25) * ch,
            &Style::new().with_color(&self.config().text_color),
        );
        surface.text(title, pos.x + SECTION_INSET, pos.y - 0.05, &self.text_style());
        pos.moved_to(pos.x + SECTION_INSET, pos.y + 1.1 * ch)
    }

    /// Section holding `content`. Returns the y just below the panel, ready
    /// for the next one.
    pub fn draw_info_panel(
        &self,
        header: &str,
        content: &PanelContent,
        pos: &Anchor,
        width: f64,
    ) -> f64 {
        let height = self.char_height() * content.len().max(1) as f64;
        let origin = self.draw_section(header, pos, width, height);
        match content {
            PanelContent::Table(rows) => self.draw_table(rows, &origin),
            PanelContent::Lines(lines) => self.draw_multiline_text(lines, &origin),
        }
        origin.y + height + PANEL_SPACING
    }

    /// Framed progress bar whose baseline sits at `pos.y`, with its label centred.
    ///
    /// The fill is not clamped: a ratio past 1 overflows the frame.
    pub fn draw_bar_graph(&self, progress: Progress, pos: &Anchor, bar: &BarGraph<'_>) {
        let ch = self.char_height();
        let color = &self.config().text_color;
        let top = pos.y - ch * bar.scale;
        let height = 1.1 * bar.scale * ch;
        let mut surface = self.surface(pos.region());

        surface.frame(pos.x, top, bar.width, height, &Style::new().with_color(color));
        surface.rect(
            pos.x,
            top,
            progress.percent() * bar.width,
            height,
            &Style::new()
                .with_fill(color)
                .with_opacity(0.4)
                .with_stroke_width(0.0),
        );
        surface.text(
            &bar.label(progress),
            pos.x + bar.width / 2.0,
            pos.y - 0.1 * ch,
            &self
                .config()
                .text_style(1.0, Style::new().with_align(Align::Center)),
        );
    }

    /// Rows of cells in left-aligned columns, one line per row.
    pub fn draw_table<S: AsRef<str>>(&self, rows: &[Vec<S>], pos: &Anchor) {
        if rows.is_empty() {
            return;
        }
        let widths = column_widths(rows);
        let style = self.text_style();
        let mut surface = self.surface(pos.region());

        let mut dy = 0.0;
        for row in rows {
            let mut dx = 0.0;
            for (i, cell) in row.iter().enumerate() {
                surface.text(cell.as_ref(), pos.x + dx, pos.y + dy, &style);
                let width = widths.get(i).copied().unwrap_or(0);
                dx += self.char_width() * (width + COLUMN_PADDING) as f64;
            }
            dy += self.char_height();
        }
    }

    pub fn draw_multiline_text<S: AsRef<str>>(&self, lines: &[S], pos: &Anchor) {
        if lines.is_empty() {
            return;
        }
        let style = self.text_style();
        let mut surface = self.surface(pos.region());
        for (i, line) in lines.iter().enumerate() {
            surface.text(line.as_ref(), pos.x, pos.y + i as f64 * self.char_height(), &style);
        }
    }
}
