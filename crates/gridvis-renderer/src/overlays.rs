//! Map overlays: icons, roads, paths, heat-maps and popups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gridvis_core::{
    Canvas, Color, CostLookup, DashStyle, GridPos, LayoutTemplate, PlacementMap, Style, Surface,
    Tier, GRID_SIZE, ROAD,
};

use crate::renderer::Renderer;

/// Which cost-grid cells to draw and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    /// One circle per nonzero cell. Otherwise each cell gets its value as hex text.
    pub dots: bool,
    /// In text mode, also label cells whose cost is zero.
    pub display_zero: bool,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            dots: true,
            display_zero: true,
        }
    }
}

impl HeatmapOptions {
    pub fn dots() -> Self {
        Self::default()
    }

    pub fn text(display_zero: bool) -> Self {
        Self {
            dots: false,
            display_zero,
        }
    }
}

/// Positions bucketed by region; regions in name order, positions in input order.
fn group_by_region<'a>(
    positions: impl IntoIterator<Item = &'a GridPos>,
) -> BTreeMap<&'a str, Vec<&'a GridPos>> {
    let mut groups: BTreeMap<&str, Vec<&GridPos>> = BTreeMap::new();
    for pos in positions {
        groups.entry(pos.region.as_str()).or_default().push(pos);
    }
    groups
}

impl<C: Canvas> Renderer<C> {
    /// Draw an icon per placement, then run the connect-pass once per region.
    pub fn draw_placement_map(&self, placements: &PlacementMap) {
        let plain = Style::new();
        let mut surfaces: BTreeMap<&str, C::Surface> = BTreeMap::new();
        for (category, positions) in placements.iter() {
            for pos in positions {
                let surface = surfaces
                    .entry(pos.region.as_str())
                    .or_insert_with(|| self.surface(Some(pos.region.as_str())));
                surface.icon(pos.x as f64, pos.y as f64, category, &plain);
            }
        }
        log::debug!(
            "placement map: {} icons over {} regions",
            placements.len(),
            surfaces.len()
        );
        for surface in surfaces.values_mut() {
            surface.connect_icons(&plain);
        }
    }

    /// Lay the top tier of `template` onto `anchor`.
    pub fn draw_layout(&self, template: &LayoutTemplate, anchor: &GridPos, opts: &Style) {
        self.draw_layout_tier(template, LayoutTemplate::MAX_TIER, anchor, opts);
    }

    /// Lay one tier of `template` onto `anchor`. Opacity defaults to 0.5.
    pub fn draw_layout_tier(
        &self,
        template: &LayoutTemplate,
        tier: Tier,
        anchor: &GridPos,
        opts: &Style,
    ) {
        let Some(layout) = template.tier(tier) else {
            log::warn!("layout template has no tier {}, nothing drawn", tier);
            return;
        };
        let opts = opts.clone().with_defaults(&Style::new().with_opacity(0.5));
        let mut surface = self.surface(Some(anchor.region.as_str()));
        for (category, building) in &layout.buildings {
            for offset in &building.pos {
                let p = anchor.offset_by(*offset, template.anchor);
                surface.icon(p.x, p.y, category, &opts);
            }
        }
        surface.connect_icons(&opts);
    }

    pub fn draw_roads(&self, positions: &[GridPos], opts: &Style) {
        for (region, group) in group_by_region(positions) {
            let mut surface = self.surface(Some(region));
            for pos in group {
                surface.icon(pos.x as f64, pos.y as f64, ROAD, opts);
            }
            surface.connect_icons(opts);
        }
    }

    /// Dashed segments between consecutive steps; steps that cross into
    /// another region are skipped.
    pub fn draw_path(&self, path: &[GridPos], style: &Style) {
        let line_style = Style {
            color: style.fill.clone(),
            opacity: Some(style.opacity.unwrap_or(0.2)),
            line_style: Some(style.line_style.unwrap_or(DashStyle::Dashed)),
            ..Style::default()
        };
        for step in path.windows(2) {
            let (from, to) = (&step[0], &step[1]);
            if !from.same_region(to) {
                continue;
            }
            self.surface(Some(from.region.as_str()))
                .line(from.point(), to.point(), &line_style);
        }
    }

    /// Heat-map of a cost grid, ramped white→red against `max + 1`.
    pub fn draw_cost_heatmap<G: CostLookup + ?Sized>(
        &self,
        grid: &G,
        region: Option<&str>,
        opts: HeatmapOptions,
    ) {
        let mut surface = self.surface(region);
        let max_value = grid.max_value() as u32 + 1;
        log::debug!("cost heatmap: max {} ({:?})", max_value - 1, opts);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let cost = grid.get(x, y) as u32;
                if opts.dots {
                    if cost == 0 {
                        continue;
                    }
                    let style = Style::new()
                        .with_radius(cost as f64 / max_value as f64 / 2.0)
                        .with_fill(&Color::heat(cost, max_value).to_hex());
                    surface.circle(x as f64, y as f64, &style);
                } else if opts.display_zero || cost != 0 {
                    let style = Style::new().with_color(&Color::heat(cost, max_value).to_hex());
                    surface.text(&format!("{:X}", cost), x as f64, y as f64 + 0.3, &style);
                }
            }
        }
    }

    /// Framed block of `lines` at `pos`, drawn on `open` when the caller
    /// already holds a surface for that region.
    pub fn draw_popup(
        &self,
        lines: &[String],
        pos: &GridPos,
        open: Option<C::Surface>,
        opts: &Style,
    ) -> C::Surface {
        let mut surface = open.unwrap_or_else(|| self.surface(Some(pos.region.as_str())));
        surface.popup(lines, pos.x as f64, pos.y as f64, opts);
        surface
    }
}
