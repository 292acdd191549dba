use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, GridPos};

/// Category label of the road icon; the connect-pass joins these.
pub const ROAD: &str = "road";

/// Tier level of a layout template (1..=8).
pub type Tier = u8;

/// Positions to mark, grouped by icon category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementMap {
    categories: BTreeMap<String, Vec<GridPos>>,
}

impl PlacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: &str, pos: GridPos) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(pos);
    }

    pub fn with(mut self, category: &str, positions: impl IntoIterator<Item = GridPos>) -> Self {
        self.categories
            .entry(category.to_string())
            .or_default()
            .extend(positions);
        self
    }

    pub fn positions(&self, category: &str) -> &[GridPos] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories in label order, each with its positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GridPos])> {
        self.categories
            .iter()
            .map(|(category, positions)| (category.as_str(), positions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Offsets of one category in a tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub pos: Vec<Coord>,
}

/// All categories placed at one tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierLayout {
    pub buildings: BTreeMap<String, BuildingSpec>,
}

impl TierLayout {
    pub fn icon_count(&self) -> usize {
        self.buildings.values().map(|b| b.pos.len()).sum()
    }
}

/// A tiered layout whose offsets are relative to `anchor`.
///
/// Its JSON form puts the anchor under `data` and each tier under its own
/// numeric key; `gridvis-io` reads and writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTemplate {
    pub anchor: Coord,
    pub tiers: BTreeMap<Tier, TierLayout>,
}

impl LayoutTemplate {
    /// The tier `draw_layout` renders.
    pub const MAX_TIER: Tier = 8;

    pub fn new(anchor: Coord) -> Self {
        Self {
            anchor,
            tiers: BTreeMap::new(),
        }
    }

    pub fn with_building(mut self, tier: Tier, category: &str, offsets: Vec<Coord>) -> Self {
        self.tiers
            .entry(tier)
            .or_default()
            .buildings
            .entry(category.to_string())
            .or_default()
            .pos
            .extend(offsets);
        self
    }

    pub fn tier(&self, tier: Tier) -> Option<&TierLayout> {
        self.tiers.get(&tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_map_groups_by_category() {
        let mut map = PlacementMap::new();
        map.add("spawn", GridPos::new(1, 1, "W1N1"));
        map.add(ROAD, GridPos::new(2, 1, "W1N1"));
        map.add(ROAD, GridPos::new(3, 1, "W2N1"));
        assert_eq!(map.len(), 3);
        assert_eq!(map.positions(ROAD).len(), 2);
        assert!(map.positions("tower").is_empty());
        let labels: Vec<&str> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(labels, vec!["road", "spawn"]);
    }

    #[test]
    fn test_template_tiers() {
        let template = LayoutTemplate::new(Coord::new(25, 25))
            .with_building(8, ROAD, vec![Coord::new(24, 25), Coord::new(26, 25)])
            .with_building(8, "tower", vec![Coord::new(25, 23)])
            .with_building(3, ROAD, vec![Coord::new(24, 25)]);
        assert_eq!(template.tier(LayoutTemplate::MAX_TIER).unwrap().icon_count(), 3);
        assert_eq!(template.tier(3).unwrap().icon_count(), 1);
        assert!(template.tier(5).is_none());
    }
}
