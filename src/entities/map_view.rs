use geo_types::Rect;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Marker, MarkerRole, RouteLine, TravelMode};

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;
pub const ATTRIBUTION: &str = "© OpenStreetMap";

// both canvases open on the same city until a route is fitted
const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.978,
};
const PREVIEW_ZOOM: u8 = 12;
const FULLSCREEN_ZOOM: u8 = 13;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapCanvas {
    pub center: Coordinates,
    pub zoom: u8,
    pub interactive: bool,
    pub zoom_control: bool,
    pub attribution: Option<String>,
    pub tile_url: String,
    pub max_zoom: u8,
    pub bounds: Option<Rect<f64>>,
    pub layout_epoch: u64,
}

impl MapCanvas {
    pub fn preview() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: PREVIEW_ZOOM,
            interactive: false,
            zoom_control: false,
            attribution: None,
            tile_url: TILE_URL.into(),
            max_zoom: TILE_MAX_ZOOM,
            bounds: None,
            layout_epoch: 0,
        }
    }

    pub fn fullscreen() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: FULLSCREEN_ZOOM,
            interactive: true,
            zoom_control: true,
            attribution: Some(ATTRIBUTION.into()),
            tile_url: TILE_URL.into(),
            max_zoom: TILE_MAX_ZOOM,
            bounds: None,
            layout_epoch: 0,
        }
    }

    // tells the client to re-measure a canvas that was laid out while hidden
    pub fn invalidate_size(&mut self) {
        self.layout_epoch += 1;
    }

    pub fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.bounds = Some(bounds);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapView {
    pub preview: MapCanvas,
    pub fullscreen: MapCanvas,
    pub modal_open: bool,
    pub start_marker: Option<Marker>,
    pub end_marker: Option<Marker>,
    pub driving_route: Option<RouteLine>,
    pub walking_route: Option<RouteLine>,
}

impl MapView {
    pub fn new() -> Self {
        Self {
            preview: MapCanvas::preview(),
            fullscreen: MapCanvas::fullscreen(),
            modal_open: false,
            start_marker: None,
            end_marker: None,
            driving_route: None,
            walking_route: None,
        }
    }

    pub fn place_marker(&mut self, marker: Marker) -> Marker {
        let slot = match marker.role {
            MarkerRole::Start => &mut self.start_marker,
            MarkerRole::End => &mut self.end_marker,
        };

        *slot = Some(marker.clone());
        marker
    }

    pub fn set_route(&mut self, line: RouteLine) {
        if let Some(bounds) = line.bounds() {
            self.fullscreen.fit_bounds(bounds);
        }

        let slot = match line.mode {
            TravelMode::Driving => &mut self.driving_route,
            TravelMode::Walking => &mut self.walking_route,
        };

        *slot = Some(line);
    }

    pub fn route(&self, mode: TravelMode) -> Option<&RouteLine> {
        match mode {
            TravelMode::Driving => self.driving_route.as_ref(),
            TravelMode::Walking => self.walking_route.as_ref(),
        }
    }

    pub fn clear_plan(&mut self) {
        self.start_marker = None;
        self.end_marker = None;
        self.driving_route = None;
        self.walking_route = None;
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RouteLeg;
    use geo_types::LineString;

    fn line(mode: TravelMode, seconds: f64) -> RouteLine {
        RouteLine::new(
            mode,
            RouteLeg {
                geometry: LineString::from(vec![(126.97, 37.55), (127.02, 37.49)]),
                duration_seconds: seconds,
            },
        )
    }

    #[test]
    fn preview_canvas_has_no_controls() {
        let canvas = MapCanvas::preview();

        assert!(!canvas.interactive);
        assert!(!canvas.zoom_control);
        assert!(canvas.attribution.is_none());
    }

    #[test]
    fn placing_a_marker_replaces_the_previous_one_of_that_role() {
        let mut map = MapView::new();
        map.place_marker(Marker::start(Coordinates::new(37.55, 126.97)));
        map.place_marker(Marker::start(Coordinates::new(37.49, 127.02)));
        map.place_marker(Marker::end(Coordinates::new(37.50, 127.03)));

        assert_eq!(map.start_marker.as_ref().unwrap().position.latitude, 37.49);
        assert_eq!(map.end_marker.as_ref().unwrap().position.latitude, 37.50);
    }

    #[test]
    fn setting_a_route_replaces_only_its_own_mode() {
        let mut map = MapView::new();
        map.set_route(line(TravelMode::Driving, 600.0));
        map.set_route(line(TravelMode::Walking, 3000.0));
        map.set_route(line(TravelMode::Driving, 900.0));

        assert_eq!(map.driving_route.as_ref().unwrap().duration_minutes, 15.0);
        assert_eq!(map.walking_route.as_ref().unwrap().duration_minutes, 50.0);
    }

    #[test]
    fn setting_a_route_fits_the_fullscreen_canvas() {
        let mut map = MapView::new();
        assert!(map.fullscreen.bounds.is_none());

        map.set_route(line(TravelMode::Driving, 600.0));

        assert!(map.fullscreen.bounds.is_some());
    }

    #[test]
    fn invalidate_size_bumps_the_layout_epoch() {
        let mut canvas = MapCanvas::fullscreen();
        canvas.invalidate_size();
        canvas.invalidate_size();

        assert_eq!(canvas.layout_epoch, 2);
    }
}
