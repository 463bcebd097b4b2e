//! Web-Mercator slippy-map math.
//!
//! World pixel coordinates at zoom `z` span `TILE_SIZE * 2^z` on both axes,
//! X growing east and Y growing south.
use std::f64::consts::PI;

use crate::models::Coordinate;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 3;
pub const MAX_ZOOM: u8 = 18;

/// Mercator is undefined at the poles; clamp like every tile server does.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Initial map centre (Tampere).
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 61.450_007_668_956_91,
    lon: 23.856_790_847_309_647,
};
pub const DEFAULT_ZOOM: u8 = 13;

pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// World size in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

pub fn project(coord: Coordinate, zoom: u8) -> WorldPoint {
    let size = world_size(zoom);
    let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (coord.lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    WorldPoint { x, y }
}

pub fn unproject(point: WorldPoint, zoom: u8) -> Coordinate {
    let size = world_size(zoom);
    let lon = point.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * point.y / size;
    let lat = n.sinh().atan().to_degrees();
    Coordinate {
        lat: lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
        lon,
    }
}

/// One tile to draw, positioned relative to the viewport's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub left: f64,
    pub top: f64,
}

impl Tile {
    pub fn url(&self) -> String {
        TILE_URL_TEMPLATE
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    fn top_left(&self, width: f64, height: f64) -> WorldPoint {
        let c = project(self.center, self.zoom);
        WorldPoint {
            x: c.x - width / 2.0,
            y: c.y - height / 2.0,
        }
    }

    /// Screen position of `coord` inside a `width` x `height` container.
    pub fn to_screen(&self, coord: Coordinate, width: f64, height: f64) -> (f64, f64) {
        let origin = self.top_left(width, height);
        let p = project(coord, self.zoom);
        (p.x - origin.x, p.y - origin.y)
    }

    pub fn to_coord(&self, screen_x: f64, screen_y: f64, width: f64, height: f64) -> Coordinate {
        let origin = self.top_left(width, height);
        unproject(
            WorldPoint {
                x: origin.x + screen_x,
                y: origin.y + screen_y,
            },
            self.zoom,
        )
    }

    /// Move the content by `(dx, dy)` screen pixels, as a drag does.
    pub fn pan_by(&self, dx: f64, dy: f64) -> Self {
        let c = project(self.center, self.zoom);
        let center = unproject(
            WorldPoint {
                x: c.x - dx,
                y: c.y - dy,
            },
            self.zoom,
        );
        Self { center, ..*self }
    }

    /// Change zoom by `delta` levels keeping the point under the cursor fixed.
    pub fn zoom_at(&self, screen_x: f64, screen_y: f64, width: f64, height: f64, delta: i8) -> Self {
        let new_zoom = (i16::from(self.zoom) + i16::from(delta))
            .clamp(i16::from(MIN_ZOOM), i16::from(MAX_ZOOM)) as u8;
        if new_zoom == self.zoom {
            return *self;
        }
        let anchor = self.to_coord(screen_x, screen_y, width, height);
        let a = project(anchor, new_zoom);
        let center = unproject(
            WorldPoint {
                x: a.x - (screen_x - width / 2.0),
                y: a.y - (screen_y - height / 2.0),
            },
            new_zoom,
        );
        Self {
            center,
            zoom: new_zoom,
        }
    }

    /// Tiles covering the container, wrapping horizontally.
    pub fn visible_tiles(&self, width: f64, height: f64) -> Vec<Tile> {
        if width <= 0.0 || height <= 0.0 {
            return Vec::new();
        }
        let origin = self.top_left(width, height);
        let count = 1i64 << self.zoom;

        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let last_x = ((origin.x + width) / TILE_SIZE).ceil() as i64 - 1;
        let first_y = ((origin.y / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((origin.y + height) / TILE_SIZE).ceil() as i64 - 1).min(count - 1);

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            for tx in first_x..=last_x {
                tiles.push(Tile {
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    z: self.zoom,
                    left: tx as f64 * TILE_SIZE - origin.x,
                    top: ty as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin_is_world_centre() {
        let p = project(Coordinate { lat: 0.0, lon: 0.0 }, 0);
        assert!((p.x - 128.0).abs() < 1e-9);
        assert!((p.y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let c = DEFAULT_CENTER;
        let back = unproject(project(c, 13), 13);
        assert!((back.lat - c.lat).abs() < 1e-9);
        assert!((back.lon - c.lon).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_poles() {
        let p = project(Coordinate { lat: 90.0, lon: 0.0 }, 1);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_known_tile_for_tampere() {
        // Tampere centre sits in OSM tile 13/4638/2311.
        let p = project(DEFAULT_CENTER, 13);
        assert_eq!((p.x / TILE_SIZE) as u32, 4638);
        assert_eq!((p.y / TILE_SIZE) as u32, 2311);
    }

    #[test]
    fn test_center_maps_to_container_middle() {
        let vp = Viewport::default();
        let (x, y) = vp.to_screen(vp.center, 800.0, 600.0);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_moves_content_with_drag() {
        let vp = Viewport::default();
        let (x0, y0) = vp.to_screen(DEFAULT_CENTER, 800.0, 600.0);
        let panned = vp.pan_by(50.0, -20.0);
        let (x1, y1) = panned.to_screen(DEFAULT_CENTER, 800.0, 600.0);
        assert!((x1 - x0 - 50.0).abs() < 1e-6);
        assert!((y1 - y0 + 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_at_keeps_cursor_anchor() {
        let vp = Viewport::default();
        let anchor = vp.to_coord(100.0, 150.0, 800.0, 600.0);
        let zoomed = vp.zoom_at(100.0, 150.0, 800.0, 600.0, 1);
        assert_eq!(zoomed.zoom, DEFAULT_ZOOM + 1);
        let (x, y) = zoomed.to_screen(anchor, 800.0, 600.0);
        assert!((x - 100.0).abs() < 1e-6);
        assert!((y - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_clamped() {
        let vp = Viewport::new(DEFAULT_CENTER, MAX_ZOOM);
        assert_eq!(vp.zoom_at(0.0, 0.0, 100.0, 100.0, 1), vp);
        let vp = Viewport::new(DEFAULT_CENTER, 1);
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_visible_tiles_cover_container() {
        let vp = Viewport::default();
        let tiles = vp.visible_tiles(800.0, 600.0);
        // 800px spans 4 or 5 tile columns, 600px spans 3 or 4 rows.
        assert!(tiles.len() >= 12 && tiles.len() <= 20);
        assert!(tiles.iter().all(|t| t.left > -TILE_SIZE && t.left < 800.0));
        assert!(tiles.iter().all(|t| t.top > -TILE_SIZE && t.top < 600.0));
        assert!(tiles.iter().all(|t| t.z == DEFAULT_ZOOM));
    }

    #[test]
    fn test_visible_tiles_empty_container() {
        assert!(Viewport::default().visible_tiles(0.0, 600.0).is_empty());
    }

    #[test]
    fn test_visible_tiles_wrap_antimeridian() {
        let vp = Viewport::new(Coordinate { lat: 0.0, lon: 180.0 }, 3);
        let tiles = vp.visible_tiles(512.0, 256.0);
        assert!(tiles.iter().any(|t| t.x == 0));
        assert!(tiles.iter().any(|t| t.x == 7));
    }

    #[test]
    fn test_tile_url() {
        let tile = Tile {
            x: 4638,
            y: 2311,
            z: 13,
            left: 0.0,
            top: 0.0,
        };
        assert_eq!(tile.url(), "https://tile.openstreetmap.org/13/4638/2311.png");
    }
}
