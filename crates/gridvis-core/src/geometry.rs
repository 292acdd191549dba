use serde::{Deserialize, Serialize};

/// Identifier of a region (one 50×50 coordinate space).
pub type RegionName = String;

/// A real-valued point in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An integer offset inside a layout template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A tile inside a named region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
    pub region: RegionName,
}

impl GridPos {
    pub fn new(x: u32, y: u32, region: &str) -> Self {
        Self {
            x,
            y,
            region: region.to_string(),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Real position of `offset` when the template's `template_anchor` is laid onto `self`.
    pub fn offset_by(&self, offset: Coord, template_anchor: Coord) -> Point {
        let dx = (offset.x - template_anchor.x) as f64;
        let dy = (offset.y - template_anchor.y) as f64;
        self.point().translate(dx, dy)
    }

    pub fn same_region(&self, other: &GridPos) -> bool {
        self.region == other.region
    }
}

/// Where a panel, graph or table is drawn. A missing region means the
/// canvas's default region.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionName>,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, region: None }
    }

    pub fn in_region(x: f64, y: f64, region: &str) -> Self {
        Self {
            x,
            y,
            region: Some(region.to_string()),
        }
    }

    /// The same region, moved to `(x, y)`.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            region: self.region.clone(),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl From<&GridPos> for Anchor {
    fn from(pos: &GridPos) -> Self {
        Self::in_region(pos.x as f64, pos.y as f64, &pos.region)
    }
}
