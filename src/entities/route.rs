use geo_types::{coord, LineString, Rect};
use serde::{Deserialize, Serialize};

pub const ROUTE_WEIGHT: u8 = 5;
pub const ROUTE_OPACITY: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
}

impl TravelMode {
    // profile segment of the routing service's path
    pub fn profile(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "foot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Driving => "blue",
            Self::Walking => "green",
        }
    }
}

// what the routing service resolved, before it is drawn
#[derive(Clone, Debug)]
pub struct RouteLeg {
    pub geometry: LineString<f64>,
    pub duration_seconds: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteLine {
    pub mode: TravelMode,
    pub geometry: LineString<f64>,
    pub duration_minutes: f64,
    pub color: String,
    pub weight: u8,
    pub opacity: f32,
}

impl RouteLine {
    pub fn new(mode: TravelMode, leg: RouteLeg) -> Self {
        Self {
            mode,
            geometry: leg.geometry,
            duration_minutes: leg.duration_seconds / 60.0,
            color: mode.color().into(),
            weight: ROUTE_WEIGHT,
            opacity: ROUTE_OPACITY,
        }
    }

    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut coords = self.geometry.coords();
        let first = *coords.next()?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for c in coords {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }

        Some(Rect::new(
            coord! { x: min_x, y: min_y },
            coord! { x: max_x, y: max_y },
        ))
    }

    pub fn summary(&self) -> String {
        format!(
            "{} route duration: {:.1} min",
            self.mode.label(),
            self.duration_minutes
        )
    }
}
