use crate::geometry::Point;
use crate::style::Style;

/// A drawing handle bound to one region.
///
/// Handles only accumulate draw calls; several handles to the same region may
/// be alive at once.
pub trait Surface {
    /// Filled rectangle with its top-left corner at `(x, y)`.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style);

    /// Outlined rectangle with its top-left corner at `(x, y)`.
    fn frame(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style);

    fn line(&mut self, from: Point, to: Point, style: &Style);

    /// Filled circle centred on `(x, y)`; the radius comes from `style.radius`.
    fn circle(&mut self, x: f64, y: f64, style: &Style);

    fn text(&mut self, text: &str, x: f64, y: f64, style: &Style);

    /// Pre-rendered icon for `category` centred on `(x, y)`.
    fn icon(&mut self, x: f64, y: f64, category: &str, style: &Style);

    /// Join adjacent road icons drawn so far on this region.
    fn connect_icons(&mut self, style: &Style);

    /// Framed block of text lines anchored at `(x, y)`.
    fn popup(&mut self, lines: &[String], x: f64, y: f64, style: &Style);
}

/// The host drawing environment: hands out surfaces by region.
pub trait Canvas {
    type Surface: Surface;

    /// Surface for `region`, or for the default region when `None`.
    fn open(&self, region: Option<&str>) -> Self::Surface;
}
