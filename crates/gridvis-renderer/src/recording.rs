use std::cell::RefCell;
use std::rc::Rc;

use rstar::RTree;
use serde::{Deserialize, Serialize};

use gridvis_core::{Canvas, Point, RegionName, Style, Surface, ROAD};

/// Neighbour offsets walked by the connect-pass. Each adjacent pair of roads
/// is reached from exactly one side.
const FORWARD_NEIGHBOURS: [(f64, f64); 4] = [(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (-1.0, 1.0)];

/// One primitive draw call as the host would receive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Frame {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
    Circle {
        x: f64,
        y: f64,
        style: Style,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: Style,
    },
    Icon {
        x: f64,
        y: f64,
        category: String,
        style: Style,
    },
    ConnectIcons {
        links: Vec<[Point; 2]>,
        style: Style,
    },
    Popup {
        lines: Vec<String>,
        x: f64,
        y: f64,
        style: Style,
    },
}

impl DrawCommand {
    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DrawCommand::Text { .. })
    }

    pub fn is_icon(&self) -> bool {
        matches!(self, DrawCommand::Icon { .. })
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, DrawCommand::ConnectIcons { .. })
    }
}

/// A draw call tagged with the region it was issued on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedCommand {
    pub region: RegionName,
    pub command: DrawCommand,
}

type CommandLog = Rc<RefCell<Vec<RecordedCommand>>>;

/// In-memory canvas that records every draw call in issue order.
///
/// Clones share the same log, so a test can hand one clone to a `Renderer`
/// and inspect the other.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    default_region: RegionName,
    log: CommandLog,
}

impl RecordingCanvas {
    pub fn new(default_region: &str) -> Self {
        Self {
            default_region: default_region.to_string(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.log.borrow().clone()
    }

    pub fn commands_in(&self, region: &str) -> Vec<DrawCommand> {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.region == region)
            .map(|r| r.command.clone())
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|r| predicate(&r.command))
            .count()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.log.borrow())
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new("sim")
    }
}

impl Canvas for RecordingCanvas {
    type Surface = RecordingSurface;

    fn open(&self, region: Option<&str>) -> RecordingSurface {
        RecordingSurface {
            region: region.unwrap_or(self.default_region.as_str()).to_string(),
            log: Rc::clone(&self.log),
            roads: Vec::new(),
        }
    }
}

/// Handle returned by [`RecordingCanvas::open`].
///
/// The command log is shared by every handle, but the connect-pass only sees
/// roads drawn through this handle.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    region: RegionName,
    log: CommandLog,
    roads: Vec<[f64; 2]>,
}

impl RecordingSurface {
    pub fn region(&self) -> &str {
        &self.region
    }

    fn push(&self, command: DrawCommand) {
        self.log.borrow_mut().push(RecordedCommand {
            region: self.region.clone(),
            command,
        });
    }

    /// Distinct road icon centres drawn through this handle.
    fn road_points(&self) -> Vec<[f64; 2]> {
        let mut points = self.roads.clone();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        points.dedup();
        points
    }
}

/// Links between every pair of 8-adjacent points, each pair once.
fn road_links(points: Vec<[f64; 2]>) -> Vec<[Point; 2]> {
    let tree = RTree::bulk_load(points.clone());
    let mut links = Vec::new();
    for p in &points {
        for (dx, dy) in FORWARD_NEIGHBOURS {
            let q = [p[0] + dx, p[1] + dy];
            if tree.locate_at_point(&q).is_some() {
                links.push([Point::new(p[0], p[1]), Point::new(q[0], q[1])]);
            }
        }
    }
    links
}

impl Surface for RecordingSurface {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            style: style.clone(),
        });
    }

    fn frame(&mut self, x: f64, y: f64, width: f64, height: f64, style: &Style) {
        self.push(DrawCommand::Frame {
            x,
            y,
            width,
            height,
            style: style.clone(),
        });
    }

    fn line(&mut self, from: Point, to: Point, style: &Style) {
        self.push(DrawCommand::Line {
            from,
            to,
            style: style.clone(),
        });
    }

    fn circle(&mut self, x: f64, y: f64, style: &Style) {
        self.push(DrawCommand::Circle {
            x,
            y,
            style: style.clone(),
        });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &Style) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn icon(&mut self, x: f64, y: f64, category: &str, style: &Style) {
        if category == ROAD {
            self.roads.push([x, y]);
        }
        self.push(DrawCommand::Icon {
            x,
            y,
            category: category.to_string(),
            style: style.clone(),
        });
    }

    fn connect_icons(&mut self, style: &Style) {
        let links = road_links(self.road_points());
        log::trace!("{}: {} road links", self.region, links.len());
        self.push(DrawCommand::ConnectIcons {
            links,
            style: style.clone(),
        });
    }

    fn popup(&mut self, lines: &[String], x: f64, y: f64, style: &Style) {
        self.push(DrawCommand::Popup {
            lines: lines.to_vec(),
            x,
            y,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_region_log() {
        let canvas = RecordingCanvas::new("W1N1");
        let mut a = canvas.open(None);
        let mut b = canvas.open(Some("W1N1"));
        a.text("a", 0.0, 0.0, &Style::new());
        b.text("b", 1.0, 0.0, &Style::new());
        assert_eq!(canvas.commands_in("W1N1").len(), 2);
        assert_eq!(a.region(), b.region());
    }

    #[test]
    fn test_connect_links_adjacent_roads_once() {
        let canvas = RecordingCanvas::new("W1N1");
        let mut surface = canvas.open(None);
        // An L of three roads plus one isolated road and one duplicate.
        for (x, y) in [(10.0, 10.0), (11.0, 10.0), (11.0, 11.0), (20.0, 20.0), (10.0, 10.0)] {
            surface.icon(x, y, ROAD, &Style::new());
        }
        surface.icon(12.0, 10.0, "tower", &Style::new());
        surface.connect_icons(&Style::new());

        let commands = canvas.commands_in("W1N1");
        let links = match commands.last() {
            Some(DrawCommand::ConnectIcons { links, .. }) => links.clone(),
            other => panic!("expected connect pass, got {:?}", other),
        };
        // (10,10)-(11,10), (10,10)-(11,11), (11,10)-(11,11)
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_connect_ignores_other_regions() {
        let canvas = RecordingCanvas::new("W1N1");
        canvas.open(Some("W2N1")).icon(5.0, 5.0, ROAD, &Style::new());
        let mut here = canvas.open(Some("W1N1"));
        here.icon(6.0, 5.0, ROAD, &Style::new());
        here.connect_icons(&Style::new());
        match canvas.commands_in("W1N1").last() {
            Some(DrawCommand::ConnectIcons { links, .. }) => assert!(links.is_empty()),
            other => panic!("expected connect pass, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_only_sees_own_handle() {
        let canvas = RecordingCanvas::new("W1N1");
        let mut first = canvas.open(None);
        first.icon(10.0, 10.0, ROAD, &Style::new());
        let mut second = canvas.open(None);
        second.icon(11.0, 10.0, ROAD, &Style::new());
        second.connect_icons(&Style::new());
        first.connect_icons(&Style::new());

        let links: Vec<usize> = canvas
            .commands_in("W1N1")
            .iter()
            .filter_map(|c| match c {
                DrawCommand::ConnectIcons { links, .. } => Some(links.len()),
                _ => None,
            })
            .collect();
        assert_eq!(links, vec![0, 0]);
    }

    #[test]
    fn test_to_json_tags_commands() {
        let canvas = RecordingCanvas::default();
        canvas
            .open(None)
            .circle(1.0, 2.0, &Style::new().with_radius(0.25));
        let json = canvas.to_json().unwrap();
        assert!(json.contains(r#""kind": "circle""#));
        assert!(json.contains(r#""region": "sim""#));
        let back: Vec<RecordedCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, canvas.commands());
    }
}
